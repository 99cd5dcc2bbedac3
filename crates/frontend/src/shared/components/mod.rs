pub mod pagination_controls;
pub mod table;
pub mod ui;
