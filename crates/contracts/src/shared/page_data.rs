//! Данные страницы, встроенные сервером в `<script type="application/json">`.

use crate::domain::a001_selection_cascade::{CascadeData, CascadeState, ChildrenMap, OwnershipLevel};
use crate::domain::a002_organization_fields::OrganizationFieldList;
use crate::domain::a003_data_table::TableData;
use crate::domain::a004_map::MapData;
use crate::domain::common::OptionPool;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("malformed page data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{map} references index {index}, but the {pool} pool has {len} options")]
    ChildIndexOutOfRange {
        map: &'static str,
        pool: &'static str,
        index: usize,
        len: usize,
    },

    #[error("duplicate table id: {0}")]
    DuplicateTable(String),

    #[error("duplicate map id: {0}")]
    DuplicateMap(String),

    #[error("table {table}: row {row} has {cells} cells, expected {expected}")]
    RowWidth {
        table: String,
        row: usize,
        cells: usize,
        expected: usize,
    },

    #[error("cascade and organization fields cannot share a page: both render #organization_id")]
    ConflictingOrganizationFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageData {
    /// Partial `UiSettings` overrides
    pub settings: Option<Value>,
    pub cascade: Option<CascadeSection>,
    pub organization_fields: Option<OrganizationFieldsSection>,
    pub tables: Vec<TableData>,
    pub maps: Vec<MapData>,
}

/// Cascade form: pools, maps, initial values and where to mount it.
#[derive(Debug, Clone, Deserialize)]
pub struct CascadeSection {
    #[serde(flatten)]
    pub data: CascadeData,
    /// Initial ownership level; `None` renders no level selector and keeps all fields shown.
    #[serde(default)]
    pub level: Option<OwnershipLevel>,
    #[serde(default)]
    pub initial: CascadeState,
    #[serde(default = "default_cascade_mount")]
    pub mount: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationFieldsSection {
    #[serde(alias = "organizations")]
    pub pool: OptionPool,
    /// Initially chosen organizations; first one is the primary selector
    #[serde(default)]
    pub initial: Vec<String>,
    #[serde(default = "default_organization_fields_mount")]
    pub mount: String,
}

impl OrganizationFieldsSection {
    pub fn field_list(&self) -> OrganizationFieldList {
        OrganizationFieldList::new(self.initial.clone())
    }
}

fn default_cascade_mount() -> String {
    "cascade_fields".to_string()
}

fn default_organization_fields_mount() -> String {
    "organization_fields".to_string()
}

impl PageData {
    pub fn parse(json: &str) -> Result<Self, PageDataError> {
        let data: PageData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), PageDataError> {
        if self.cascade.is_some() && self.organization_fields.is_some() {
            return Err(PageDataError::ConflictingOrganizationFields);
        }
        if let Some(cascade) = &self.cascade {
            let data = &cascade.data;
            check_indices("deployment_map", &data.deployment_map, "deployment", &data.deployments)?;
            check_indices("mooring_map", &data.mooring_map, "mooring", &data.moorings)?;
            check_indices("equipment_map", &data.equipment_map, "equipment", &data.equipment)?;
        }

        let mut table_ids = HashSet::new();
        for table in &self.tables {
            if !table_ids.insert(table.id.as_str()) {
                return Err(PageDataError::DuplicateTable(table.id.clone()));
            }
            if table.config.server_side.is_some() {
                continue;
            }
            let expected = table.headers.len();
            if let Some((row, cells)) = table
                .rows
                .iter()
                .enumerate()
                .find(|(_, r)| r.len() != expected)
            {
                return Err(PageDataError::RowWidth {
                    table: table.id.clone(),
                    row,
                    cells: cells.len(),
                    expected,
                });
            }
        }

        let mut map_ids = HashSet::new();
        for map in &self.maps {
            if !map_ids.insert(map.id.as_str()) {
                return Err(PageDataError::DuplicateMap(map.id.clone()));
            }
        }
        Ok(())
    }
}

fn check_indices(
    map_name: &'static str,
    map: &ChildrenMap,
    pool_name: &'static str,
    pool: &OptionPool,
) -> Result<(), PageDataError> {
    match map.max_index() {
        Some(index) if index >= pool.len() => Err(PageDataError::ChildIndexOutOfRange {
            map: map_name,
            pool: pool_name,
            index,
            len: pool.len(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASCADE_PAGE: &str = r#"{
        "cascade": {
            "organizations": [["1", "NOAA"], ["2", "WHOI"]],
            "deployments": [["10", "Gulf 2023"]],
            "moorings": [],
            "equipment": [],
            "deployment_map": {"1": [0], "2": []},
            "mooring_map": {"10": []},
            "equipment_map": {},
            "level": "deployment",
            "initial": {"organization": "1", "deployment": "10"}
        },
        "tables": [
            {"id": "organizations", "headers": ["Name", "url"], "rows": [["NOAA", "/organization/details/1"]]}
        ]
    }"#;

    #[test]
    fn test_parse_cascade_page() {
        let page = PageData::parse(CASCADE_PAGE).unwrap();
        let cascade = page.cascade.unwrap();
        assert_eq!(cascade.level, Some(OwnershipLevel::Deployment));
        assert_eq!(cascade.mount, "cascade_fields");
        assert_eq!(cascade.data.organizations.len(), 2);
        assert_eq!(cascade.initial.deployment, "10");
        assert_eq!(page.tables[0].config.page_length, 10);
        assert_eq!(page.tables[0].mount_id(), "organizations_mount");
        assert_eq!(page.tables[0].loader_id(), "organizations_loader");
    }

    #[test]
    fn test_empty_page() {
        let page = PageData::parse("{}").unwrap();
        assert!(page.cascade.is_none());
        assert!(page.tables.is_empty());
    }

    #[test]
    fn test_rejects_child_index_out_of_pool() {
        let json = CASCADE_PAGE.replace(r#""1": [0]"#, r#""1": [0, 4]"#);
        let err = PageData::parse(&json).unwrap_err();
        assert!(matches!(
            err,
            PageDataError::ChildIndexOutOfRange { index: 4, len: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_tables() {
        let json = r#"{"tables": [
            {"id": "t", "headers": ["a"], "rows": []},
            {"id": "t", "headers": ["a"], "rows": []}
        ]}"#;
        assert!(matches!(
            PageData::parse(json),
            Err(PageDataError::DuplicateTable(id)) if id == "t"
        ));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let json = r#"{"tables": [{"id": "t", "headers": ["a", "b"], "rows": [["1", "2"], ["3"]]}]}"#;
        assert!(matches!(
            PageData::parse(json),
            Err(PageDataError::RowWidth { row: 1, cells: 1, expected: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_cascade_with_organization_fields() {
        let json = r#"{
            "cascade": {"organizations": []},
            "organization_fields": {"pool": []}
        }"#;
        assert!(matches!(
            PageData::parse(json),
            Err(PageDataError::ConflictingOrganizationFields)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PageData::parse("{"),
            Err(PageDataError::Malformed(_))
        ));
    }
}
