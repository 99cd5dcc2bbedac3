use super::contents::ContentsLayout;
use contracts::domain::a003_data_table::TableData;
use contracts::domain::a004_map::MapData;
use contracts::shared::page_data::{CascadeSection, OrganizationFieldsSection, PageData};
use contracts::shared::settings::UiSettings;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub struct TableTarget {
    pub table: TableData,
    pub mount: Element,
    pub loader: Option<Element>,
}

/// DOM elements the widgets render into, looked up once at startup.
///
/// Sections whose element is missing are dropped with a warning.
pub struct MountTargets {
    pub cascade: Option<(CascadeSection, Element)>,
    pub organization_fields: Option<(OrganizationFieldsSection, Element)>,
    pub tables: Vec<TableTarget>,
    pub maps: Vec<(MapData, HtmlElement)>,
    pub contents: Option<ContentsLayout>,
}

impl MountTargets {
    pub fn collect(page: PageData, settings: &UiSettings) -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; nothing to mount");
            return Self::empty();
        };

        let cascade = page
            .cascade
            .and_then(|section| element(&document, &section.mount).map(|el| (section, el)));

        let organization_fields = page
            .organization_fields
            .and_then(|section| element(&document, &section.mount).map(|el| (section, el)));

        let tables = page
            .tables
            .into_iter()
            .filter_map(|table| {
                let mount = element(&document, &table.mount_id())?;
                let loader = element(&document, &table.loader_id());
                Some(TableTarget {
                    table,
                    mount,
                    loader,
                })
            })
            .collect();

        let maps = page
            .maps
            .into_iter()
            .filter_map(|map| html_element(&document, &map.id).map(|el| (map, el)))
            .collect();

        let layout = &settings.layout;
        let contents = match (
            html_element(&document, &layout.navbar_id),
            html_element(&document, &layout.banner_id),
            html_element(&document, &layout.contents_id),
        ) {
            (Some(navbar), Some(banner), Some(contents)) => Some(ContentsLayout {
                navbar,
                banner,
                contents,
            }),
            _ => {
                log::warn!("Contents sizing skipped");
                None
            }
        };

        Self {
            cascade,
            organization_fields,
            tables,
            maps,
            contents,
        }
    }

    fn empty() -> Self {
        Self {
            cascade: None,
            organization_fields: None,
            tables: Vec::new(),
            maps: Vec::new(),
            contents: None,
        }
    }
}

fn element(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::warn!("Element #{} not found", id);
    }
    found
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    element(document, id)?.dyn_into::<HtmlElement>().ok()
}
