// Small helpers shared by the demo and the browser bindings

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use crate::geometry::Matrix;

/// Send `log` records to the browser console and panics to `console.error`.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {e}");
    }
}

/// Short human-readable summary of a view transform, e.g. `121% @ (-25, -25)`.
/// The zoom is the square root of the determinant's magnitude.
pub fn format_transform(m: &Matrix) -> String {
    let zoom = m.determinant().abs().sqrt() * 100.0;
    if zoom.is_finite() && m.is_finite() {
        format!("{:.0}% @ ({:.0}, {:.0})", zoom, m.e, m.f)
    } else {
        "invalid".to_string()
    }
}
