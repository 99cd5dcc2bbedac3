//! Organization fields UI Module
//!
//! - view_model.rs: selector values and add/remove commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrganizationFields;
pub use view_model::OrganizationFieldsViewModel;
