//! Повторяющиеся поля выбора организаций (основное + дополнительные)

pub mod field_list;

pub use field_list::OrganizationFieldList;
