use super::view_model::CascadeFormViewModel;
use crate::layout::global_context::PageContext;
use crate::shared::components::ui::Select;
use contracts::domain::a001_selection_cascade::CascadeField;
use contracts::shared::page_data::CascadeSection;
use leptos::prelude::*;

#[component]
pub fn CascadeForm(ctx: PageContext, section: CascadeSection) -> impl IntoView {
    let vm = CascadeFormViewModel::new(section);
    let (placeholder, hidden_class) =
        ctx.with_settings(|s| (s.forms.placeholder.clone(), s.page.hidden_class.clone()));

    let level_select = vm.has_level().then(|| {
        view! {
            <Select
                label="Ownership level"
                id="level"
                value=Signal::derive(move || {
                    vm.level.get().map(|l| l.as_str().to_string()).unwrap_or_default()
                })
                options=Signal::derive(CascadeFormViewModel::level_options)
                on_change=Callback::new(move |raw: String| vm.change_level_command(raw))
                required=true
            />
        }
    });

    let fields = CascadeField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <Select
                    label=field.label()
                    id=field.element_id()
                    value=Signal::derive(move || vm.value(field))
                    options=Signal::derive(move || vm.options(field))
                    on_change=Callback::new(move |value: String| vm.select_command(field, value))
                    placeholder=placeholder.clone()
                    required=Signal::derive(move || vm.policy(field).required)
                    hidden=Signal::derive(move || !vm.policy(field).visible)
                    hidden_class=hidden_class.clone()
                />
            }
        })
        .collect_view();

    view! {
        <div class="cascade-form">
            {level_select}
            {fields}
        </div>
    }
}
