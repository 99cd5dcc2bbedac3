//! Каскад зависимых списков: organization → deployment → mooring → equipment

pub mod cascade;
pub mod children_map;
pub mod level;

pub use cascade::{CascadeData, CascadeField, CascadeState};
pub use children_map::ChildrenMap;
pub use level::{FieldPolicy, OwnershipLevel};
