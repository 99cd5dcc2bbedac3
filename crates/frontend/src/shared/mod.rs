pub mod components;
pub mod google_maps;
pub mod icons;
pub mod list_utils;
pub mod page_data;
