//! Data grid UI Module
//!
//! - model.rs: server-driven page fetch
//! - view_model.rs: query, rows, selection and hover commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::DataGrid;
pub use view_model::DataGridViewModel;
