//! Cascade form UI Module
//!
//! - view_model.rs: state of the four selects and the level selector, commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CascadeForm;
pub use view_model::CascadeFormViewModel;
