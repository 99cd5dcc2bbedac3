use super::model;
use crate::layout::global_context::{PageContext, TableHandle};
use contracts::domain::a003_data_table::config::page_length_to_rows;
use contracts::domain::a003_data_table::query::{self, PageInfo, QueryResult};
use contracts::domain::a003_data_table::{
    ColumnLayout, ServerSideRequest, TableConfig, TableData, TableQuery,
};
use contracts::shared::settings::TableSettings;
use leptos::prelude::*;

/// Row counts reported by a server-driven endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerCounts {
    pub total: usize,
    pub filtered: usize,
}

/// ViewModel of one data grid
#[derive(Clone, Copy)]
pub struct DataGridViewModel {
    pub table_id: StoredValue<String>,
    pub config: StoredValue<TableConfig>,
    pub columns: StoredValue<ColumnLayout>,
    pub classes: StoredValue<TableSettings>,
    pub handle: TableHandle,
    pub query: RwSignal<TableQuery>,
    /// Client rows, or the current page of a server-driven table
    pub rows: RwSignal<Vec<Vec<String>>>,
    pub server_counts: RwSignal<ServerCounts>,
    pub result: Memo<QueryResult>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Latest server request number; older responses are dropped
    draw: StoredValue<u64>,
}

impl DataGridViewModel {
    pub fn new(ctx: PageContext, table: TableData) -> Self {
        let TableData {
            id,
            config,
            headers,
            rows,
        } = table;
        let columns = ColumnLayout::from_headers(headers);
        let initial_query = TableQuery::new(&config, &columns);
        let server_side = config.server_side.is_some();

        let handle = TableHandle::new();
        ctx.register_table(id.clone(), handle);

        let columns = StoredValue::new(columns);
        let query = RwSignal::new(initial_query);
        let rows = RwSignal::new(if server_side { Vec::new() } else { rows });
        let server_counts = RwSignal::new(ServerCounts::default());

        let result = Memo::new(move |_| {
            let q = query.get();
            if server_side {
                let shown = rows.with(|r| r.len());
                let counts = server_counts.get();
                let all: Vec<usize> = (0..shown).collect();
                QueryResult {
                    matching: all.clone(),
                    page_rows: all,
                    page: q.page,
                    info: PageInfo::new(q.start(), shown, counts.filtered, counts.total, q.page_length),
                }
            } else {
                rows.with(|r| columns.with_value(|c| query::apply(r, c, &q)))
            }
        });

        let vm = Self {
            table_id: StoredValue::new(id),
            config: StoredValue::new(config),
            columns,
            classes: StoredValue::new(ctx.with_settings(|s| s.tables.clone())),
            handle,
            query,
            rows,
            server_counts,
            result,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            draw: StoredValue::new(0),
        };

        if server_side {
            Effect::new(move |_| {
                let q = vm.query.get();
                vm.load_page(q);
            });
        }
        vm
    }

    /// Request the page described by `q` from the table's endpoint.
    fn load_page(&self, q: TableQuery) {
        let Some(endpoint) = self.config.with_value(|c| c.server_side.clone()) else {
            return;
        };
        self.draw.update_value(|d| *d += 1);
        let draw = self.draw.get_value();
        let request = self.columns.with_value(|c| ServerSideRequest::new(draw, &q, c));
        let ncols = self.columns.with_value(|c| c.len());

        let vm = *self;
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_page(&endpoint, &request).await;
            if vm.draw.get_value() != draw {
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(page) if page.draw != draw => {
                    log::debug!("Dropping stale page {} (expected {})", page.draw, draw);
                }
                Ok(page) => {
                    if let Some(e) = &page.error {
                        log::error!("Table {}: {}", vm.table_id.get_value(), e);
                    }
                    vm.error.set(page.error);
                    vm.server_counts.set(ServerCounts {
                        total: page.records_total,
                        filtered: page.records_filtered,
                    });
                    vm.handle.clear_selection();
                    vm.rows
                        .set(page.data.into_iter().map(|r| r.into_cells(ncols)).collect());
                }
                Err(e) => {
                    log::error!("Table {}: {}", vm.table_id.get_value(), e);
                    vm.error.set(Some(e));
                }
            }
        });
    }

    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.rows
            .with(|rows| rows.get(row).and_then(|r| r.get(column)).cloned())
            .unwrap_or_default()
    }

    pub fn cell_class(&self, row: usize) -> String {
        let mut class = String::from("data-grid__cell");
        self.classes.with_value(|classes| {
            if self.handle.is_hovered(row) {
                class.push(' ');
                class.push_str(&classes.highlight_class);
            }
            if self.is_selectable() {
                class.push(' ');
                class.push_str(&classes.selectable_class);
                if self.handle.is_selected(row) {
                    class.push(' ');
                    class.push_str(&classes.selected_class);
                }
            }
        });
        if self.columns.with_value(|c| c.navigates()) {
            class.push_str(" data-grid__cell--link");
        }
        class
    }

    pub fn is_selectable(&self) -> bool {
        self.config.with_value(|c| c.selectable)
    }

    pub fn hover_command(&self, row: Option<usize>) {
        if self.config.with_value(|c| c.hover_highlight()) {
            self.handle.hovered_row.set(row);
        }
    }

    /// Toggle selection and follow the row's link, if any.
    pub fn click_command(&self, row: usize, column: usize) {
        if self.is_selectable() {
            self.handle.toggle(row);
        }
        let target = self.rows.with_untracked(|rows| {
            rows.get(row).and_then(|cells| {
                self.columns
                    .with_value(|c| c.click_target(column, cells).map(str::to_string))
            })
        });
        if let Some(url) = target {
            navigate(&url);
        }
    }

    pub fn sort_command(&self, column: usize) {
        self.query.update(|q| q.toggle_order(column));
    }

    pub fn search_command(&self, search: String) {
        self.query.update(|q| q.set_search(search));
    }

    pub fn page_command(&self, page: usize) {
        self.query.update(|q| q.page = page);
    }

    pub fn page_length_command(&self, length: i64) {
        self.query.update(|q| q.set_page_length(page_length_to_rows(length)));
    }

    /// Length menu entry matching the current page length
    pub fn page_length(&self) -> i64 {
        self.query
            .with(|q| q.page_length)
            .and_then(|len| i64::try_from(len).ok())
            .unwrap_or(-1)
    }

    pub fn select_all_command(&self) {
        self.handle.select_only(self.result.with_untracked(|r| r.matching.clone()));
    }

    pub fn select_page_command(&self) {
        self.handle.select_only(self.result.with_untracked(|r| r.page_rows.clone()));
    }

    pub fn select_none_command(&self) {
        self.handle.clear_selection();
    }
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::settings::UiSettings;

    fn table(highlight: bool, selectable: bool) -> TableData {
        TableData {
            id: "moorings".to_string(),
            config: TableConfig {
                highlight,
                selectable,
                ..TableConfig::default()
            },
            headers: vec!["Name".into(), "Depth".into()],
            rows: vec![
                vec!["M-1".into(), "120".into()],
                vec!["M-2".into(), "80".into()],
            ],
        }
    }

    #[test]
    fn test_hover_highlights_hovered_row_only() {
        let ctx = PageContext::new(UiSettings::default());
        let vm = DataGridViewModel::new(ctx, table(true, false));

        vm.hover_command(Some(1));
        assert_eq!(vm.cell_class(1), "data-grid__cell highlight");
        assert_eq!(vm.cell_class(0), "data-grid__cell");
        let registered = ctx.table("moorings").map(|h| h.hovered_row.get());
        assert_eq!(registered, Some(Some(1)));

        vm.hover_command(None);
        assert_eq!(vm.cell_class(0), "data-grid__cell");
        assert_eq!(vm.cell_class(1), "data-grid__cell");
    }

    #[test]
    fn test_hover_ignored_without_highlight() {
        let vm = DataGridViewModel::new(PageContext::new(UiSettings::default()), table(false, false));
        vm.hover_command(Some(0));
        assert_eq!(vm.handle.hovered_row.get(), None);
        assert_eq!(vm.cell_class(0), "data-grid__cell");
    }

    #[test]
    fn test_selectable_table_marks_cells_instead_of_hover() {
        let vm = DataGridViewModel::new(PageContext::new(UiSettings::default()), table(true, true));

        vm.hover_command(Some(0));
        assert_eq!(vm.handle.hovered_row.get(), None);
        assert_eq!(vm.cell_class(0), "data-grid__cell selectable");

        vm.click_command(0, 1);
        assert_eq!(vm.cell_class(0), "data-grid__cell selectable selected");
        assert_eq!(vm.cell_class(1), "data-grid__cell selectable");

        vm.click_command(0, 0);
        assert_eq!(vm.cell_class(0), "data-grid__cell selectable");
    }

    #[test]
    fn test_select_buttons() {
        let vm = DataGridViewModel::new(PageContext::new(UiSettings::default()), table(true, true));
        vm.select_all_command();
        assert_eq!(vm.handle.selected.get().len(), 2);
        vm.select_none_command();
        assert!(vm.handle.selected.get().is_empty());

        vm.page_length_command(1);
        vm.select_page_command();
        assert_eq!(vm.handle.selected.get().len(), 1);
    }
}
