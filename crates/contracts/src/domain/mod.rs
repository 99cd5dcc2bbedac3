pub mod a001_selection_cascade;
pub mod a002_organization_fields;
pub mod a003_data_table;
pub mod a004_map;
pub mod common;
