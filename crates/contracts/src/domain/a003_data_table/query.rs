//! Поиск, сортировка и пагинация строк таблицы на стороне клиента

use super::columns::ColumnLayout;
use super::config::TableConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Search text, ordering and paging of one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub order: Option<(usize, SortDirection)>,
    /// 0-indexed page
    pub page: usize,
    /// `None` shows every row
    pub page_length: Option<usize>,
}

impl TableQuery {
    /// Initial query: first sortable column ascending, first page.
    pub fn new(config: &TableConfig, columns: &ColumnLayout) -> Self {
        let order = columns
            .is_sortable(0)
            .then_some((0, SortDirection::Asc));
        Self {
            search: String::new(),
            order,
            page: 0,
            page_length: config.rows_per_page(),
        }
    }

    /// Header click: flip direction on the current column, otherwise sort ascending.
    pub fn toggle_order(&mut self, column: usize) {
        self.order = match self.order {
            Some((current, dir)) if current == column => Some((column, dir.reversed())),
            _ => Some((column, SortDirection::Asc)),
        };
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_page_length(&mut self, page_length: Option<usize>) {
        self.page_length = page_length;
        self.page = 0;
    }

    /// Index of the first row on the current page
    pub fn start(&self) -> usize {
        self.page_length.map(|len| self.page * len).unwrap_or(0)
    }
}

/// Lower-cased, whitespace-separated search words
pub fn search_terms(search: &str) -> Vec<String> {
    search.split_whitespace().map(str::to_lowercase).collect()
}

/// Every term must occur somewhere in the row's searchable cells.
pub fn matches_search(row: &[String], columns: &ColumnLayout, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack = row
        .iter()
        .enumerate()
        .filter(|(i, _)| columns.is_searchable(*i))
        .map(|(_, cell)| cell.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    terms.iter().all(|t| haystack.contains(t.as_str()))
}

/// Numeric value of a cell; `NaN` counts as text.
fn numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Total order over cells: numbers first, compared numerically, then text
/// compared case-insensitively (exact text breaks ties).
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

/// Row positions after applying a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// All matching rows in display order (used by "Select All")
    pub matching: Vec<usize>,
    /// Rows of the current page
    pub page_rows: Vec<usize>,
    /// Effective page after clamping to the available pages
    pub page: usize,
    pub info: PageInfo,
}

/// Counters for the info line and pagination controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// 0-indexed first row shown
    pub start: usize,
    /// Number of rows shown
    pub shown: usize,
    pub records_filtered: usize,
    pub records_total: usize,
    pub page_count: usize,
}

impl PageInfo {
    pub fn new(start: usize, shown: usize, filtered: usize, total: usize, page_length: Option<usize>) -> Self {
        Self {
            start,
            shown,
            records_filtered: filtered,
            records_total: total,
            page_count: page_count(filtered, page_length),
        }
    }

    /// "Showing 1 to 10 of 57 entries (filtered from 100 total entries)"
    pub fn text(&self) -> String {
        let first = if self.shown == 0 { 0 } else { self.start + 1 };
        let last = self.start + self.shown;
        let mut text = format!(
            "Showing {} to {} of {} entries",
            first, last, self.records_filtered
        );
        if self.records_filtered != self.records_total {
            text.push_str(&format!(
                " (filtered from {} total entries)",
                self.records_total
            ));
        }
        text
    }
}

/// Number of pages; at least one so the controls always have a current page.
pub fn page_count(rows: usize, page_length: Option<usize>) -> usize {
    match page_length {
        Some(len) if len > 0 => rows.div_ceil(len).max(1),
        _ => 1,
    }
}

/// Filter, sort and page client-side rows.
pub fn apply(rows: &[Vec<String>], columns: &ColumnLayout, query: &TableQuery) -> QueryResult {
    let terms = search_terms(&query.search);
    let mut matching: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_search(row, columns, &terms))
        .map(|(i, _)| i)
        .collect();

    if let Some((column, dir)) = query.order.filter(|(c, _)| columns.is_sortable(*c)) {
        let cell = |i: usize| rows[i].get(column).map(String::as_str).unwrap_or("");
        matching.sort_by(|&a, &b| {
            let ord = compare_cells(cell(a), cell(b));
            if dir.is_ascending() {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    let pages = page_count(matching.len(), query.page_length);
    let page = query.page.min(pages - 1);
    let (start, page_rows) = match query.page_length {
        Some(len) => {
            let start = page * len;
            let rows = matching.iter().skip(start).take(len).copied().collect();
            (start, rows)
        }
        None => (0, matching.clone()),
    };

    let info = PageInfo::new(
        start,
        page_rows.len(),
        matching.len(),
        rows.len(),
        query.page_length,
    );
    QueryResult {
        matching,
        page_rows,
        page,
        info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnLayout {
        ColumnLayout::from_headers(vec!["Name".into(), "Depth".into(), "url".into()])
    }

    fn rows() -> Vec<Vec<String>> {
        [
            ["Mooring B", "100", "/m/1"],
            ["mooring a", "20", "/m/2"],
            ["Buoy C", "3", "/m/3"],
        ]
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
    }

    fn query(search: &str, order: Option<(usize, SortDirection)>, page_length: Option<usize>) -> TableQuery {
        TableQuery {
            search: search.to_string(),
            order,
            page: 0,
            page_length,
        }
    }

    #[test]
    fn test_search_requires_every_word() {
        let result = apply(&rows(), &columns(), &query("moor b", None, None));
        assert_eq!(result.matching, vec![0]);
        assert_eq!(result.info.records_filtered, 1);
        assert_eq!(result.info.records_total, 3);
    }

    #[test]
    fn test_search_ignores_hidden_url_column() {
        let result = apply(&rows(), &columns(), &query("/m/2", None, None));
        assert!(result.matching.is_empty());
        assert_eq!(result.info.text(), "Showing 0 to 0 of 0 entries (filtered from 3 total entries)");
    }

    #[test]
    fn test_sort_is_case_insensitive_and_numeric() {
        let by_name = apply(&rows(), &columns(), &query("", Some((0, SortDirection::Asc)), None));
        assert_eq!(by_name.page_rows, vec![2, 1, 0]);

        let by_depth = apply(&rows(), &columns(), &query("", Some((1, SortDirection::Desc)), None));
        assert_eq!(by_depth.page_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_hidden_column_is_not_sorted() {
        let result = apply(&rows(), &columns(), &query("", Some((2, SortDirection::Desc)), None));
        assert_eq!(result.page_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_paging_and_clamping() {
        let mut q = query("", Some((0, SortDirection::Asc)), Some(2));
        let first = apply(&rows(), &columns(), &q);
        assert_eq!(first.page_rows, vec![2, 1]);
        assert_eq!(first.info.page_count, 2);
        assert_eq!(first.info.text(), "Showing 1 to 2 of 3 entries");

        q.page = 5;
        let last = apply(&rows(), &columns(), &q);
        assert_eq!(last.page, 1);
        assert_eq!(last.page_rows, vec![0]);
        assert_eq!(last.info.text(), "Showing 3 to 3 of 3 entries");
    }

    #[test]
    fn test_toggle_order_and_reset_page() {
        let config = TableConfig::default();
        let mut q = TableQuery::new(&config, &columns());
        assert_eq!(q.order, Some((0, SortDirection::Asc)));
        q.page = 3;
        q.toggle_order(0);
        assert_eq!(q.order, Some((0, SortDirection::Desc)));
        assert_eq!(q.page, 0);
        q.toggle_order(1);
        assert_eq!(q.order, Some((1, SortDirection::Asc)));
    }

    #[test]
    fn test_mixed_column_order_is_independent_of_input_order() {
        let columns = ColumnLayout::from_headers(vec!["Serial".into()]);
        let sorted = |cells: &[&str]| -> Vec<String> {
            let rows: Vec<Vec<String>> = cells.iter().map(|c| vec![c.to_string()]).collect();
            apply(&rows, &columns, &query("", Some((0, SortDirection::Asc)), None))
                .page_rows
                .into_iter()
                .map(|i| rows[i][0].clone())
                .collect()
        };
        let expected = vec!["9", "10", "1a", "B", "b"];
        assert_eq!(sorted(&["9", "10", "1a", "b", "B"]), expected);
        assert_eq!(sorted(&["1a", "b", "9", "B", "10"]), expected);
        assert_eq!(sorted(&["B", "10", "1a", "9", "b"]), expected);
    }

    #[test]
    fn test_compare_cells_total_order() {
        assert_eq!(compare_cells("9", "10"), Ordering::Less);
        assert_eq!(compare_cells("10", "1a"), Ordering::Less);
        assert_eq!(compare_cells("1a", "9"), Ordering::Greater);
        // NaN sorts as text, after every number
        assert_eq!(compare_cells("NaN", "5"), Ordering::Greater);
        assert_eq!(compare_cells("NaN", "nan"), Ordering::Less);
        assert_eq!(compare_cells(" 2.5", "2.50"), Ordering::Equal);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, Some(10)), 1);
        assert_eq!(page_count(21, Some(10)), 3);
        assert_eq!(page_count(21, None), 1);
    }
}
