//! Shadow-matrix tracking for a [`DrawSurface`].
//!
//! [`TrackedSurface`] forwards every transform-affecting call to the wrapped
//! surface and mirrors it into a shadow [`Matrix`], so the current transform
//! can be read back and inverted without querying the surface. The underlying
//! call always runs first; the shadow is only updated when it succeeds, which
//! keeps the shadow equal to the surface's true transform. Calls with
//! non-finite arguments still reach the surface but leave the shadow alone,
//! matching a 2D canvas, which ignores them.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::error::Result;
use crate::geometry::{Matrix, Point, Rect};
use crate::surface::DrawSurface;

pub struct TrackedSurface<S> {
    inner: S,
    matrix: Matrix,
    saved: Vec<Matrix>,
}

impl<S: DrawSurface> TrackedSurface<S> {
    /// Wrap `inner`, resetting its transform to identity so the shadow matrix
    /// starts in sync.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects `set_transform`.
    pub fn new(inner: S) -> Result<Self> {
        inner.set_transform(&Matrix::IDENTITY)?;
        Ok(Self { inner, matrix: Matrix::IDENTITY, saved: Vec::new() })
    }

    /// Run `f` against the wrapped surface for primitive drawing calls.
    ///
    /// The call is bracketed by a surface `save`/`restore`, so a transform
    /// change made on the raw surface is undone when `f` returns and the
    /// shadow matrix stays correct afterwards.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.inner.save();
        let out = f(&self.inner);
        self.inner.restore();
        out
    }

    pub fn save(&mut self) {
        self.saved.push(self.matrix);
        self.inner.save();
    }

    /// Pop the saved transform. An unbalanced restore leaves the shadow matrix
    /// unchanged, mirroring a canvas context where it is a no-op.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(m) => self.matrix = m,
            None => log::warn!("restore() without a matching save(); transform unchanged"),
        }
        self.inner.restore();
    }

    /// # Errors
    ///
    /// Propagates a failing surface call; the shadow matrix is left untouched.
    pub fn scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        self.inner.scale(sx, sy)?;
        if sx.is_finite() && sy.is_finite() {
            self.matrix = self.matrix.scale(sx, sy);
        }
        Ok(())
    }

    /// Rotate by `angle` radians.
    ///
    /// # Errors
    ///
    /// Propagates a failing surface call; the shadow matrix is left untouched.
    pub fn rotate(&mut self, angle: f64) -> Result<()> {
        self.inner.rotate(angle)?;
        if angle.is_finite() {
            self.matrix = self.matrix.rotate(angle);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates a failing surface call; the shadow matrix is left untouched.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.inner.translate(dx, dy)?;
        if dx.is_finite() && dy.is_finite() {
            self.matrix = self.matrix.translate(dx, dy);
        }
        Ok(())
    }

    /// Post-multiply by `m`.
    ///
    /// # Errors
    ///
    /// Propagates a failing surface call; the shadow matrix is left untouched.
    pub fn transform(&mut self, m: Matrix) -> Result<()> {
        self.inner.transform(&m)?;
        if m.is_finite() {
            self.matrix = self.matrix.multiply(&m);
        }
        Ok(())
    }

    /// Replace the transform outright. The saved stack is not affected.
    ///
    /// # Errors
    ///
    /// Propagates a failing surface call; the shadow matrix is left untouched.
    pub fn set_transform(&mut self, m: Matrix) -> Result<()> {
        self.inner.set_transform(&m)?;
        if m.is_finite() {
            self.matrix = m;
        }
        Ok(())
    }

    /// The current shadow matrix.
    #[must_use]
    pub fn get_transform(&self) -> Matrix {
        self.matrix
    }

    /// Map device point `(x, y)` into logical space.
    ///
    /// A singular transform yields `NaN` coordinates; use
    /// [`Self::checked_transformed_point`] to detect that case.
    #[must_use]
    pub fn transformed_point(&self, x: f64, y: f64) -> Point {
        self.checked_transformed_point(x, y).unwrap_or(Point::new(f64::NAN, f64::NAN))
    }

    /// Like [`Self::transformed_point`], returning `None` for a singular transform.
    #[must_use]
    pub fn checked_transformed_point(&self, x: f64, y: f64) -> Option<Point> {
        self.matrix.invert().map(|inv| inv.apply(Point::new(x, y)))
    }

    pub(crate) fn logical(&self, device: Point) -> Point {
        self.transformed_point(device.x, device.y)
    }

    /// Logical-space bounding box of the surface's four device corners.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        let (w, h) = self.inner.device_size();
        let corners = [
            self.transformed_point(0.0, 0.0),
            self.transformed_point(w, 0.0),
            self.transformed_point(0.0, h),
            self.transformed_point(w, h),
        ];
        Rect::bounding(&corners).unwrap_or_default()
    }

    /// Clear a rectangle given in logical space.
    pub fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.inner.clear_rect(x, y, width, height);
    }

    #[must_use]
    pub fn device_size(&self) -> (f64, f64) {
        self.inner.device_size()
    }
}
