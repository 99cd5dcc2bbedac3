use crate::layout::global_context::{MapHandle, PageContext};
use crate::shared::google_maps::{self, InfoWindow, Map, Marker, Point};
use contracts::domain::a004_map::{LatLng, MapData, MapPoint};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Offset of the marker label relative to the icon
const LABEL_ORIGIN: (f64, f64) = (12.0, -12.0);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom: f64,
    center: LatLng,
    map_type_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerIcon {
    path: String,
    fill_color: String,
    fill_opacity: f64,
    stroke_weight: f64,
    stroke_color: &'static str,
    scale: f64,
}

#[derive(Serialize)]
struct MarkerOptions {
    position: LatLng,
    title: String,
    label: String,
    icon: MarkerIcon,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoWindowOptions {
    content: String,
    aria_label: String,
}

impl MarkerOptions {
    fn new(point: &MapPoint, color: String) -> Self {
        let title = point.title();
        Self {
            position: point.position(),
            label: title.clone(),
            title,
            icon: MarkerIcon {
                path: point.icon.clone(),
                fill_color: color,
                fill_opacity: 1.0,
                stroke_weight: 1.0,
                stroke_color: "#000000",
                scale: 1.0,
            },
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Failed to build map options: {}", e))
}

/// Create the map in `container`, one marker and info window per point, and
/// register it in the page context under `data.id`.
pub fn render_map(ctx: PageContext, container: &HtmlElement, data: &MapData) -> Result<(), String> {
    if !google_maps::is_loaded() {
        return Err(format!("Google Maps API is not loaded; map {} skipped", data.id));
    }
    if ctx.has_map(&data.id) {
        return Err(format!("Map {} is already rendered", data.id));
    }

    let map_type_id = ctx.with_settings(|s| s.maps.map_type_id.clone());
    let map = Map::new(
        container,
        &to_js(&MapOptions {
            zoom: data.zoom,
            center: data.center,
            map_type_id,
        })?,
    );

    let mut markers = Vec::with_capacity(data.points.len());
    let mut info_windows = Vec::with_capacity(data.points.len());
    for (point, color) in data.points.iter().zip(data.marker_colors()) {
        let info_window = InfoWindow::new(&to_js(&InfoWindowOptions {
            content: point.html.clone(),
            aria_label: point.title(),
        })?);

        let options = to_js(&MarkerOptions::new(point, color))?;
        google_maps::set_property(&options, "map", &map)?;
        let icon = js_sys::Reflect::get(&options, &JsValue::from_str("icon"))
            .map_err(|e| format!("Marker options without icon: {:?}", e))?;
        google_maps::set_property(&icon, "labelOrigin", &Point::new(LABEL_ORIGIN.0, LABEL_ORIGIN.1))?;
        let marker = Marker::new(&options);

        // Other open windows stay open
        let open_options = js_sys::Object::new();
        google_maps::set_property(&open_options, "anchor", &marker)?;
        google_maps::set_property(&open_options, "map", &map)?;
        let window_for_click = info_window.clone();
        let on_click = Closure::wrap(Box::new(move || {
            window_for_click.open(&open_options);
        }) as Box<dyn FnMut()>);
        marker.add_listener("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        markers.push(marker);
        info_windows.push(info_window);
    }

    log::debug!("Map {} rendered with {} markers", data.id, markers.len());
    ctx.register_map(
        data.id.clone(),
        MapHandle {
            map,
            markers,
            info_windows,
        },
    );
    Ok(())
}
