use crate::shared::google_maps;
use contracts::shared::settings::UiSettings;
use leptos::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Per-page shared state: settings plus the registries of live tables and maps.
///
/// Created once by `App` and provided via context; every field is an arena
/// handle, so the struct is `Copy` and can be captured by view closures.
#[derive(Clone, Copy)]
pub struct PageContext {
    settings: StoredValue<UiSettings>,
    tables: StoredValue<HashMap<String, TableHandle>>,
    maps: StoredValue<HashMap<String, MapHandle>, LocalStorage>,
}

/// Reactive state of one rendered grid, shared with anything that looks it up by id.
#[derive(Clone, Copy)]
pub struct TableHandle {
    pub hovered_row: RwSignal<Option<usize>>,
    pub selected: RwSignal<BTreeSet<usize>>,
}

impl TableHandle {
    pub fn new() -> Self {
        Self {
            hovered_row: RwSignal::new(None),
            selected: RwSignal::new(BTreeSet::new()),
        }
    }

    pub fn is_hovered(&self, row: usize) -> bool {
        self.hovered_row.get() == Some(row)
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.with(|s| s.contains(&row))
    }

    pub fn toggle(&self, row: usize) {
        self.selected.update(|s| {
            if !s.remove(&row) {
                s.insert(row);
            }
        });
    }

    pub fn select_only(&self, rows: impl IntoIterator<Item = usize>) {
        self.selected.set(rows.into_iter().collect());
    }

    pub fn clear_selection(&self) {
        self.selected.update(|s| s.clear());
    }
}

impl Default for TableHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// JS objects of one rendered map. Kept alive for the lifetime of the page.
pub struct MapHandle {
    pub map: google_maps::Map,
    pub markers: Vec<google_maps::Marker>,
    pub info_windows: Vec<google_maps::InfoWindow>,
}

impl PageContext {
    pub fn new(settings: UiSettings) -> Self {
        Self {
            settings: StoredValue::new(settings),
            tables: StoredValue::new(HashMap::new()),
            maps: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn with_settings<R>(&self, f: impl FnOnce(&UiSettings) -> R) -> R {
        self.settings.with_value(f)
    }

    pub fn register_table(&self, id: String, handle: TableHandle) {
        self.tables.update_value(|tables| {
            if tables.insert(id.clone(), handle).is_some() {
                log::warn!("Table {} registered twice; keeping the latest", id);
            }
        });
    }

    pub fn table(&self, id: &str) -> Option<TableHandle> {
        self.tables.with_value(|tables| tables.get(id).copied())
    }

    pub fn register_map(&self, id: String, handle: MapHandle) {
        self.maps.update_value(|maps| {
            if maps.insert(id.clone(), handle).is_some() {
                log::warn!("Map {} registered twice; keeping the latest", id);
            }
        });
    }

    pub fn has_map(&self, id: &str) -> bool {
        self.maps.with_value(|maps| maps.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_lookup_shares_registry() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = PageContext::new(UiSettings::default());
            provide_context(ctx);
            ctx.register_table("moorings".to_string(), TableHandle::new());

            let found = use_context::<PageContext>().and_then(|c| c.table("moorings"));
            assert!(found.is_some());
            assert!(use_context::<PageContext>().and_then(|c| c.table("other")).is_none());
        });
    }

    #[test]
    fn test_hover_marks_whole_row() {
        let handle = TableHandle::new();
        handle.hovered_row.set(Some(2));
        assert!(handle.is_hovered(2));
        assert!(!handle.is_hovered(1));
        handle.hovered_row.set(None);
        assert!(!handle.is_hovered(2));
    }

    #[test]
    fn test_selection_toggle_and_replace() {
        let handle = TableHandle::new();
        handle.toggle(3);
        handle.toggle(1);
        handle.toggle(3);
        assert!(handle.is_selected(1));
        assert!(!handle.is_selected(3));

        handle.select_only([4, 5]);
        assert_eq!(handle.selected.get(), BTreeSet::from([4, 5]));
        handle.clear_selection();
        assert!(handle.selected.get().is_empty());
    }
}
