//! Высота области `#contents`: окно минус навбар и баннер.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Height left for the contents area, never negative.
pub fn available_height(inner_height: f64, navbar_height: i32, banner_height: i32) -> i64 {
    let height = inner_height.round() as i64 - i64::from(navbar_height) - i64::from(banner_height);
    height.max(0)
}

/// CSS length for a pixel height
pub fn px(height: i64) -> String {
    format!("{}px", height)
}

pub struct ContentsLayout {
    pub navbar: HtmlElement,
    pub banner: HtmlElement,
    pub contents: HtmlElement,
}

impl ContentsLayout {
    pub fn resize(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let inner_height = match window.inner_height().map(|h| h.as_f64()) {
            Ok(Some(h)) => h,
            _ => {
                log::warn!("window.innerHeight unavailable; contents not resized");
                return;
            }
        };
        let height = available_height(
            inner_height,
            self.navbar.client_height(),
            self.banner.client_height(),
        );
        if let Err(e) = self.contents.style().set_property("height", &px(height)) {
            log::warn!("Failed to set contents height: {:?}", e);
        }
    }

    /// Size now and again after each burst of window resize events.
    pub fn install(self, debounce_ms: u32) {
        self.resize();

        let Some(window) = web_sys::window() else {
            return;
        };
        let layout = Rc::new(self);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let layout = Rc::clone(&layout);
            // Replacing the timeout drops (cancels) the previous one
            *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || layout.resize()));
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for window resize: {:?}", e);
        }
        on_resize.forget();
    }
}
