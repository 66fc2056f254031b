//! [`DrawSurface`] for the browser's `CanvasRenderingContext2d`.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Error, Result};
use crate::geometry::Matrix;
use crate::surface::DrawSurface;

/// Fetch the 2d rendering context of `canvas`.
///
/// # Errors
///
/// Returns [`Error::NoContext`] if the canvas has no 2d context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(Error::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::NoContext)
}

impl DrawSurface for CanvasRenderingContext2d {
    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn scale(&self, sx: f64, sy: f64) -> Result<()> {
        CanvasRenderingContext2d::scale(self, sx, sy)?;
        Ok(())
    }

    fn rotate(&self, angle: f64) -> Result<()> {
        CanvasRenderingContext2d::rotate(self, angle)?;
        Ok(())
    }

    fn translate(&self, dx: f64, dy: f64) -> Result<()> {
        CanvasRenderingContext2d::translate(self, dx, dy)?;
        Ok(())
    }

    fn transform(&self, m: &Matrix) -> Result<()> {
        CanvasRenderingContext2d::transform(self, m.a, m.b, m.c, m.d, m.e, m.f)?;
        Ok(())
    }

    fn set_transform(&self, m: &Matrix) -> Result<()> {
        CanvasRenderingContext2d::set_transform(self, m.a, m.b, m.c, m.d, m.e, m.f)?;
        Ok(())
    }

    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn device_size(&self) -> (f64, f64) {
        self.canvas()
            .map(|c| (f64::from(c.width()), f64::from(c.height())))
            .unwrap_or((0.0, 0.0))
    }
}
