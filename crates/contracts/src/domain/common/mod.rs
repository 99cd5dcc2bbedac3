//! Common types shared by all page widgets

pub mod select_option;

// Re-exports
pub use select_option::{OptionPool, SelectOption};
