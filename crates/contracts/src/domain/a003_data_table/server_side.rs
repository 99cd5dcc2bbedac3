//! DataTables server-side processing protocol.
//!
//! The grid sends `draw`, `start`, `length`, `search[value]`, `order[0][...]`
//! and `columns[i][...]` as query parameters and receives one page of rows.

use super::columns::ColumnLayout;
use super::query::{SortDirection, TableQuery};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSideRequest {
    pub draw: u64,
    pub start: usize,
    /// `-1` requests every remaining row
    pub length: i64,
    pub search: SearchParam,
    pub order: Vec<OrderParam>,
    pub columns: Vec<ColumnParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParam {
    pub value: String,
    pub regex: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderParam {
    pub column: usize,
    pub dir: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnParam {
    pub data: usize,
    pub name: String,
    pub searchable: bool,
    pub orderable: bool,
}

impl ServerSideRequest {
    pub fn new(draw: u64, query: &TableQuery, columns: &ColumnLayout) -> Self {
        // The endpoint always reads order[0]; fall back to column 0.
        let (column, dir) = query.order.unwrap_or((0, SortDirection::Asc));
        Self {
            draw,
            start: query.start(),
            length: query
                .page_length
                .and_then(|len| i64::try_from(len).ok())
                .unwrap_or(-1),
            search: SearchParam {
                value: query.search.clone(),
                regex: false,
            },
            order: vec![OrderParam { column, dir }],
            columns: columns
                .headers()
                .iter()
                .enumerate()
                .map(|(i, name)| ColumnParam {
                    data: i,
                    name: name.clone(),
                    searchable: columns.is_searchable(i),
                    orderable: columns.is_sortable(i),
                })
                .collect(),
        }
    }
}

/// One page of rows returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSidePage {
    #[serde(deserialize_with = "deserialize_draw")]
    pub draw: u64,
    pub records_total: usize,
    pub records_filtered: usize,
    #[serde(default)]
    pub data: Vec<ServerRow>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Rows arrive either as arrays or as objects keyed by column index (`"0"`, `"1"`, …).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServerRow {
    Cells(Vec<Value>),
    Keyed(BTreeMap<String, Value>),
}

impl ServerRow {
    /// Text of the first `columns` cells; missing cells are empty.
    pub fn into_cells(self, columns: usize) -> Vec<String> {
        match self {
            ServerRow::Cells(values) => (0..columns)
                .map(|i| values.get(i).map(cell_text).unwrap_or_default())
                .collect(),
            ServerRow::Keyed(map) => (0..columns)
                .map(|i| map.get(&i.to_string()).map(cell_text).unwrap_or_default())
                .collect(),
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The endpoint may echo `draw` back as the string it received.
fn deserialize_draw<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom("draw must be a non-negative integer")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid draw: {}", s))),
        other => Err(serde::de::Error::custom(format!("invalid draw: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_data_table::TableConfig;

    fn columns() -> ColumnLayout {
        ColumnLayout::from_headers(vec!["File".into(), "Uploaded".into(), "url".into()])
    }

    #[test]
    fn test_request_from_query() {
        let columns = columns();
        let mut query = TableQuery::new(&TableConfig::default(), &columns);
        query.set_search("wav".into());
        query.page = 2;

        let request = ServerSideRequest::new(7, &query, &columns);
        assert_eq!(request.draw, 7);
        assert_eq!(request.start, 20);
        assert_eq!(request.length, 10);
        assert_eq!(request.search.value, "wav");
        assert_eq!(request.order, vec![OrderParam { column: 0, dir: SortDirection::Asc }]);
        assert!(request.columns[1].orderable);
        assert!(!request.columns[2].orderable);
        assert!(!request.columns[2].searchable);
    }

    #[test]
    fn test_request_for_all_rows() {
        let columns = columns();
        let mut query = TableQuery::new(&TableConfig::default(), &columns);
        query.set_page_length(None);
        assert_eq!(ServerSideRequest::new(1, &query, &columns).length, -1);
    }

    #[test]
    fn test_page_with_keyed_rows_and_string_draw() {
        let page: ServerSidePage = serde_json::from_str(
            r#"{
                "draw": "3",
                "recordsTotal": 40,
                "recordsFiltered": 2,
                "data": [
                    {"0": "a.wav", "1": "2024-01-02", "2": "/file/details/1", "100": 1},
                    {"0": "b.wav", "1": null, "2": "/file/details/2", "100": 2}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(page.draw, 3);
        assert_eq!(page.records_filtered, 2);
        let rows: Vec<Vec<String>> = page.data.into_iter().map(|r| r.into_cells(3)).collect();
        assert_eq!(rows[0], vec!["a.wav", "2024-01-02", "/file/details/1"]);
        assert_eq!(rows[1], vec!["b.wav", "", "/file/details/2"]);
    }

    #[test]
    fn test_page_with_array_rows() {
        let page: ServerSidePage = serde_json::from_str(
            r#"{"draw": 1, "recordsTotal": 1, "recordsFiltered": 1, "data": [["x", 5]]}"#,
        )
        .unwrap();
        let rows: Vec<Vec<String>> = page.data.into_iter().map(|r| r.into_cells(3)).collect();
        assert_eq!(rows[0], vec!["x", "5", ""]);
    }

    #[test]
    fn test_invalid_draw_is_rejected() {
        let result = serde_json::from_str::<ServerSidePage>(
            r#"{"draw": "abc", "recordsTotal": 0, "recordsFiltered": 0}"#,
        );
        assert!(result.is_err());
    }
}
