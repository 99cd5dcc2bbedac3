use serde::{Deserialize, Deserializer, Serialize};

/// Layout used when a table does not specify one: length menu, filter,
/// processing indicator, table, info line, pagination.
pub const DEFAULT_DOM: &str = "lfrtip";

/// Per-table configuration tuple rendered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// DataTables-style layout string, e.g. `"Bfrtip"`
    pub dom: String,
    pub paging: bool,
    /// Rows per page; `-1` shows every row
    pub page_length: i64,
    pub length_menu: Vec<i64>,
    pub show_header: bool,
    pub highlight: bool,
    pub selectable: bool,
    /// Endpoint for server-driven data. An empty string means client-side data.
    #[serde(deserialize_with = "empty_as_none")]
    pub server_side: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            dom: DEFAULT_DOM.to_string(),
            paging: true,
            page_length: 10,
            length_menu: vec![10, 25, 50, 100],
            show_header: true,
            highlight: true,
            selectable: false,
            server_side: None,
        }
    }
}

impl TableConfig {
    pub fn layout(&self) -> DomLayout {
        DomLayout::parse(&self.dom)
    }

    /// Rows per page, `None` when paging is off or the length means "all".
    pub fn rows_per_page(&self) -> Option<usize> {
        if !self.paging {
            return None;
        }
        page_length_to_rows(self.page_length)
    }

    /// Hover highlighting is suppressed on selectable tables.
    pub fn hover_highlight(&self) -> bool {
        self.highlight && !self.selectable
    }
}

/// Convert a length-menu entry into a row count (`-1` and other non-positive values mean all rows).
pub fn page_length_to_rows(length: i64) -> Option<usize> {
    usize::try_from(length).ok().filter(|&n| n > 0)
}

/// Text shown in the length menu for one entry
pub fn page_length_label(length: i64) -> String {
    match page_length_to_rows(length) {
        Some(n) => n.to_string(),
        None => "All".to_string(),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Which grid controls are shown, parsed from the `dom` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomLayout {
    pub buttons: bool,
    pub length: bool,
    pub filter: bool,
    pub processing: bool,
    pub table: bool,
    pub info: bool,
    pub pagination: bool,
}

impl DomLayout {
    /// Parse a layout string. Text inside quotes (wrapper class names such as
    /// `'col-sm-6'`) and the `<`/`>` wrapper markers are ignored.
    pub fn parse(dom: &str) -> Self {
        let dom = if dom.trim().is_empty() { DEFAULT_DOM } else { dom };
        let mut layout = DomLayout::default();
        let mut quote: Option<char> = None;
        for c in dom.chars() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '\'' | '"' => quote = Some(c),
                    'B' => layout.buttons = true,
                    'l' => layout.length = true,
                    'f' => layout.filter = true,
                    'r' => layout.processing = true,
                    't' => layout.table = true,
                    'i' => layout.info = true,
                    'p' => layout.pagination = true,
                    _ => {}
                },
            }
        }
        layout
    }
}

/// One table as embedded in the page: configuration plus its rendered content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// id of the `<table>` element; also the registry key
    pub id: String,
    #[serde(default)]
    pub config: TableConfig,
    pub headers: Vec<String>,
    /// Client-side rows; ignored for server-driven tables
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn loader_id(&self) -> String {
        format!("{}_loader", self.id)
    }

    pub fn mount_id(&self) -> String {
        format!("{}_mount", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_layout() {
        let layout = DomLayout::parse("Bfrtip");
        assert!(layout.buttons && layout.filter && layout.table && layout.info && layout.pagination);
        assert!(!layout.length);
    }

    #[test]
    fn test_parse_ignores_quoted_classes() {
        let layout = DomLayout::parse("<'row'<'col-sm-12 col-md-6'f>>t");
        assert!(layout.filter);
        assert!(layout.table);
        assert!(!layout.length);
        assert!(!layout.pagination);
    }

    #[test]
    fn test_empty_layout_uses_default() {
        assert_eq!(DomLayout::parse(""), DomLayout::parse(DEFAULT_DOM));
    }

    #[test]
    fn test_config_from_page_json() {
        let config: TableConfig = serde_json::from_str(
            r#"{"dom": "t", "paging": false, "page_length": -1, "server_side": ""}"#,
        )
        .unwrap();
        assert_eq!(config.server_side, None);
        assert_eq!(config.rows_per_page(), None);
        assert!(config.show_header);
        assert_eq!(config.length_menu, vec![10, 25, 50, 100]);
    }

    #[test]
    fn test_page_lengths() {
        assert_eq!(page_length_to_rows(25), Some(25));
        assert_eq!(page_length_to_rows(-1), None);
        assert_eq!(page_length_label(-1), "All");
        let config = TableConfig {
            page_length: 25,
            ..TableConfig::default()
        };
        assert_eq!(config.rows_per_page(), Some(25));
    }

    #[test]
    fn test_selectable_suppresses_highlight() {
        let config = TableConfig {
            selectable: true,
            ..TableConfig::default()
        };
        assert!(!config.hover_highlight());
    }
}
