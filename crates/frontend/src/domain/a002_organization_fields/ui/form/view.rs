use super::view_model::OrganizationFieldsViewModel;
use crate::layout::global_context::PageContext;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a002_organization_fields::OrganizationFieldList;
use contracts::shared::page_data::OrganizationFieldsSection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrganizationFields(ctx: PageContext, section: OrganizationFieldsSection) -> impl IntoView {
    let vm = OrganizationFieldsViewModel::new(section);
    let placeholder = ctx.with_settings(|s| s.forms.placeholder.clone());
    let placeholder = StoredValue::new(placeholder);

    let selector = move |index: usize| {
        let label = if index == 0 {
            "Organization".to_string()
        } else {
            format!("Additional organization {}", index)
        };
        view! {
            <Select
                label=label
                id=OrganizationFieldList::element_id(index)
                value=Signal::derive(move || vm.value(index))
                options=Signal::derive(move || vm.options(index))
                on_change=Callback::new(move |value: String| vm.set_command(index, value))
                placeholder=placeholder.get_value()
                required=true
            />
        }
    };

    view! {
        <div class="organization-fields">
            {selector(0)}
            <div id="additionalOrganizations">
                <For
                    each=move || 1..vm.len()
                    key=|index| *index
                    children=selector
                />
            </div>
            <ButtonGroup>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.add_command()
                    disabled=Signal::derive(move || !vm.can_add())
                >
                    {icon("plus")}
                    " Add organization"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.remove_command()
                    disabled=Signal::derive(move || !vm.can_remove())
                >
                    {icon("minus")}
                    " Remove"
                </Button>
            </ButtonGroup>
        </div>
    }
}
