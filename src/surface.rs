//! The drawing-surface seam.
//!
//! [`DrawSurface`] is the subset of a 2D context the viewport needs: the
//! transform stack, the transform-mutating calls, clearing, and the surface's
//! pixel size. Path/fill/stroke primitives are not part of the trait; draw
//! callbacks reach them through [`crate::tracker::TrackedSurface::with_surface`].
//!
//! # Untracked transforms
//!
//! Any transform change made on the raw surface, through this trait or the
//! surface's own methods, bypasses the shadow matrix. `with_surface` wraps
//! raw access in a surface-level `save`/`restore`, so such changes last only
//! until the closure returns. Inside the closure they still desynchronise
//! `transformed_point`; go through [`crate::tracker::TrackedSurface`] to
//! change the view.
//!
//! The browser implementation over `CanvasRenderingContext2d` lives in
//! [`crate::web::context`].

use crate::error::Result;
use crate::geometry::Matrix;

/// A 2D drawing surface with a canvas-style transform model.
///
/// Methods take `&self` because real contexts are shared handles; the
/// [`crate::tracker::TrackedSurface`] wrapper is what enforces exclusive,
/// tracked access to the transform.
///
/// Like a 2D canvas, an implementation should ignore transform calls with
/// non-finite arguments; the tracker assumes it does.
pub trait DrawSurface {
    fn save(&self);

    fn restore(&self);

    fn scale(&self, sx: f64, sy: f64) -> Result<()>;

    /// Rotate by `angle` radians.
    fn rotate(&self, angle: f64) -> Result<()>;

    fn translate(&self, dx: f64, dy: f64) -> Result<()>;

    /// Post-multiply the current transform by `m`.
    fn transform(&self, m: &Matrix) -> Result<()>;

    /// Replace the current transform with `m`.
    fn set_transform(&self, m: &Matrix) -> Result<()>;

    /// Clear a rectangle given in the current (logical) coordinate space.
    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);

    /// Surface size in device pixels as `(width, height)`.
    fn device_size(&self) -> (f64, f64);
}
