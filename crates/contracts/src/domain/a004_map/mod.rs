//! Карта с маркерами и информационными окнами

pub mod palette;
pub mod point;

pub use palette::hls_palette;
pub use point::{LatLng, MapData, MapPoint};
