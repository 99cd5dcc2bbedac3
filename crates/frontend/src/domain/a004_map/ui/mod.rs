//! Google Maps renderer for map containers found on the page.

mod renderer;

pub use renderer::render_map;
