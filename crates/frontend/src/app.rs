use crate::domain::a001_selection_cascade::ui::form::CascadeForm;
use crate::domain::a002_organization_fields::ui::form::OrganizationFields;
use crate::domain::a003_data_table::ui::grid::DataGrid;
use crate::domain::a004_map::ui::render_map;
use crate::layout::global_context::PageContext;
use crate::layout::mount_targets::MountTargets;
use contracts::shared::page_data::PageData;
use contracts::shared::settings::UiSettings;
use leptos::portal::Portal;
use leptos::prelude::*;
use web_sys::Element;

#[component]
pub fn App(page: PageData, settings: UiSettings) -> impl IntoView {
    // Registries of tables and maps for the whole page
    let ctx = PageContext::new(settings.clone());
    provide_context(ctx);

    let targets = MountTargets::collect(page, &settings);

    if let Some(contents) = targets.contents {
        contents.install(settings.layout.resize_debounce_ms);
    }

    for (map, container) in &targets.maps {
        if let Err(e) = render_map(ctx, container, map) {
            log::error!("{}", e);
        }
    }

    let cascade = targets.cascade.map(|(section, mount)| {
        let section = StoredValue::new(section);
        view! {
            <Portal mount=mount>
                <CascadeForm ctx=ctx section=section.get_value() />
            </Portal>
        }
    });

    let organization_fields = targets.organization_fields.map(|(section, mount)| {
        let section = StoredValue::new(section);
        view! {
            <Portal mount=mount>
                <OrganizationFields ctx=ctx section=section.get_value() />
            </Portal>
        }
    });

    // Loaders are hidden and mounts revealed once the grids are built
    let reveal: Vec<(Option<Element>, Element)> = targets
        .tables
        .iter()
        .map(|t| (t.loader.clone(), t.mount.clone()))
        .collect();
    let hidden_class = settings.page.hidden_class.clone();

    let tables = targets
        .tables
        .into_iter()
        .map(|target| {
            let table = StoredValue::new(target.table);
            view! {
                <Portal mount=target.mount>
                    <DataGrid ctx=ctx table=table.get_value() />
                </Portal>
            }
        })
        .collect_view();

    Effect::new(move |_| {
        for (loader, mount) in &reveal {
            if let Some(loader) = loader {
                _ = loader.class_list().add_1(&hidden_class);
            }
            _ = mount.class_list().remove_1(&hidden_class);
        }
    });

    view! {
        {cascade}
        {organization_fields}
        {tables}
    }
}
