//! Привязки к Google Maps JavaScript API (`google.maps.*`).
//!
//! The API script is loaded by the page itself; call [`is_loaded`] before
//! constructing anything from this module.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor)]
    pub fn new(container: &HtmlElement, options: &JsValue) -> Map;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &js_sys::Function) -> JsValue;

    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, options: &JsValue);

    #[derive(Debug, Clone)]
    pub type Point;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Point;
}

/// Whether `window.google.maps` exists.
pub fn is_loaded() -> bool {
    let global = js_sys::global();
    js_sys::Reflect::get(&global, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .map(|maps| maps.is_object())
        .unwrap_or(false)
}

/// `target[key] = value`
pub fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| format!("Failed to set {}: {:?}", key, e))
}
