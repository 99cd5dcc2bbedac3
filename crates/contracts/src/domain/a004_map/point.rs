use super::palette::hls_palette;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Одна точка на карте (постановка/mooring)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Marker label and info window aria label
    #[serde(default, alias = "hydrophones")]
    pub label: Option<String>,
    /// SVG path (`d` attribute) of the marker icon
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Info window body
    #[serde(default)]
    pub html: String,
}

impl MapPoint {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    /// Label, falling back to the coordinates when there is none.
    pub fn title(&self) -> String {
        match self.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("(Lat: {}, Lon:{})", self.latitude, self.longitude),
        }
    }
}

/// One map container and its points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// id of the container element; also the registry key
    pub id: String,
    pub center: LatLng,
    pub zoom: f64,
    #[serde(default)]
    pub points: Vec<MapPoint>,
}

impl MapData {
    /// Fill color per point; points without one take the palette color at their position.
    pub fn marker_colors(&self) -> Vec<String> {
        let palette = hls_palette(self.points.len());
        self.points
            .iter()
            .zip(palette)
            .map(|(p, fallback)| p.color.clone().filter(|c| !c.is_empty()).unwrap_or(fallback))
            .collect()
    }
}
