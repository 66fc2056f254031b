//! Gesture-to-transform logic.
//!
//! [`Viewport`] owns a [`TrackedSurface`] and the draw callback, and turns
//! [`InputEvent`]s into `translate`/`scale` calls on the tracked surface. It
//! has no knowledge of how events arrive or how frames are scheduled; that is
//! [`crate::canvas::InteractiveCanvas`]'s job. Keeping it host-free is what
//! lets the whole gesture model be tested natively.
//!
//! Every handler works in logical space through
//! [`TrackedSurface::transformed_point`]:
//!
//! - **Drag** translates by `current − origin`, where `origin` is the logical
//!   point grabbed at pointer-down. Afterwards the grabbed point sits under the
//!   pointer again, and `origin` is re-read from the new transform.
//! - **Zoom** scales about a pivot with `translate(p); scale(k, k);
//!   translate(−p)` so the pivot stays put on screen. `k` is reduced so the
//!   view scale stays within `min_scale..=max_scale`, which keeps the
//!   transform invertible however long a zoom runs.
//! - **Pinch** measures the touches' average spread around their centroid in
//!   logical space. The baseline is taken when the touch set changes and is
//!   not reset per move: after each scale the fingers' logical spread equals
//!   the baseline again, so `spread / baseline` is always the ratio since the
//!   previous move and never compounds.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::ViewportConfig;
use crate::consts::{MIN_PINCH_SPREAD, MIN_ZOOM_CHANGE};
use crate::error::{Error, Result};
use crate::geometry::{Matrix, Point, Rect};
use crate::input::{InputEvent, PointerInput, TouchPoint, WheelInput};
use crate::state::{DragState, TouchState, WheelState, average_distance, centroid};
use crate::surface::DrawSurface;
use crate::tracker::TrackedSurface;

pub struct Viewport<S, D> {
    surface: TrackedSurface<S>,
    draw: D,
    config: ViewportConfig,
    drag: DragState,
    touch: TouchState,
    wheel: WheelState,
}

impl<S, D> Viewport<S, D>
where
    S: DrawSurface,
    D: FnMut(&mut TrackedSurface<S>) -> Result<()>,
{
    /// Wrap `surface` and draw the first frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid `config`, or if the surface rejects the
    /// initial transform reset or the first redraw fails.
    pub fn new(surface: S, draw: D, config: ViewportConfig) -> Result<Self> {
        config.validate()?;
        let surface = TrackedSurface::new(surface)?;
        let (w, h) = surface.device_size();
        let mut viewport = Self {
            surface,
            draw,
            config,
            drag: DragState::new(Point::new(w * 0.5, h * 0.5)),
            touch: TouchState::default(),
            wheel: WheelState::default(),
        };
        viewport.redraw()?;
        Ok(viewport)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &TrackedSurface<S> {
        &self.surface
    }

    #[must_use]
    pub fn get_transform(&self) -> Matrix {
        self.surface.get_transform()
    }

    #[must_use]
    pub fn transformed_point(&self, x: f64, y: f64) -> Point {
        self.surface.transformed_point(x, y)
    }

    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.surface.visible_rect()
    }

    /// Device position used as the pivot by [`Self::zoom`].
    #[must_use]
    pub fn last_pointer(&self) -> Point {
        self.drag.last
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touch.len()
    }

    // --- Drawing ---

    /// Clear the visible logical rectangle.
    pub fn clear(&self) {
        let r = self.surface.visible_rect();
        self.surface.clear_rect(r.min.x, r.min.y, r.width(), r.height());
    }

    /// Clear, then run the draw callback against the tracked surface.
    ///
    /// # Errors
    ///
    /// Propagates the draw callback's error.
    pub fn redraw(&mut self) -> Result<()> {
        self.clear();
        (self.draw)(&mut self.surface)
    }

    // --- View operations ---

    /// Zoom `clicks` steps about the last known pointer position.
    ///
    /// # Errors
    ///
    /// See [`Self::zoom_at`].
    pub fn zoom(&mut self, clicks: i32) -> Result<()> {
        self.zoom_at(clicks, self.drag.last)
    }

    /// Zoom `clicks` steps about the device point `pivot`. Positive zooms in.
    /// `clicks` is clamped to `±max_zoom_steps`; zero does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoom`] if the factor is degenerate, or a
    /// surface error from the transform calls or redraw.
    pub fn zoom_at(&mut self, clicks: i32, pivot: Point) -> Result<()> {
        let max = self.config.max_zoom_steps;
        let clicks = clicks.clamp(-max, max);
        if clicks == 0 {
            return Ok(());
        }
        let factor = self.config.scale_factor.powi(clicks);
        let pt = self.surface.logical(pivot);
        self.scale_about(pt, factor)?;
        self.redraw()
    }

    /// Return to the identity view and drop any gesture in progress.
    ///
    /// # Errors
    ///
    /// Returns a surface error from `set_transform` or the redraw.
    pub fn reset_view(&mut self) -> Result<()> {
        self.cancel_gestures();
        self.surface.set_transform(Matrix::IDENTITY)?;
        self.redraw()
    }

    /// Current view scale, `sqrt(|det|)` of the transform.
    fn view_scale(&self) -> f64 {
        self.surface.get_transform().determinant().abs().sqrt()
    }

    /// Scale by `factor` about the logical point `pt`, limited so the view
    /// scale stays within the configured bounds.
    fn scale_about(&mut self, pt: Point, factor: f64) -> Result<()> {
        let current = self.view_scale();
        if !factor.is_finite() || factor <= 0.0 || !current.is_finite() || current <= 0.0 {
            return Err(Error::InvalidZoom(factor));
        }
        if !pt.is_finite() {
            return Err(Error::NonFinite("zoom pivot"));
        }
        let factor = self.config.clamp_zoom_factor(current, factor);
        if (factor - 1.0).abs() <= MIN_ZOOM_CHANGE {
            return Ok(());
        }
        self.surface.translate(pt.x, pt.y)?;
        self.surface.scale(factor, factor)?;
        self.surface.translate(-pt.x, -pt.y)
    }

    fn pan(&mut self, dx: f64, dy: f64) -> Result<()> {
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(Error::NonFinite("pan offset"));
        }
        self.surface.translate(dx, dy)
    }

    // --- Input ---

    /// Route one input event to its handler.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error.
    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::PointerDown(input) => {
                self.on_pointer_down(input);
                Ok(())
            }
            InputEvent::PointerMove(input) => self.on_pointer_move(input),
            InputEvent::PointerUp(input) => self.on_pointer_up(input),
            InputEvent::Wheel(input) => self.on_wheel(input),
            InputEvent::TouchStart(touches) => {
                self.on_touch_start(&touches);
                Ok(())
            }
            InputEvent::TouchMove(touches) => self.on_touch_move(&touches),
            InputEvent::TouchEnd(touches) | InputEvent::TouchCancel(touches) => {
                self.on_touch_end(&touches);
                Ok(())
            }
        }
    }

    pub fn on_pointer_down(&mut self, input: PointerInput) {
        self.drag.last = input.pos;
        self.drag.origin = Some(self.surface.logical(input.pos));
        self.drag.moved = false;
    }

    /// # Errors
    ///
    /// Returns a surface error from the pan or the redraw.
    pub fn on_pointer_move(&mut self, input: PointerInput) -> Result<()> {
        let previous = self.drag.last;
        self.drag.last = input.pos;
        let Some(origin) = self.drag.origin else {
            return Ok(());
        };
        if input.pos != previous {
            self.drag.moved = true;
        }
        let pt = self.surface.logical(input.pos);
        self.pan(pt.x - origin.x, pt.y - origin.y)?;
        self.drag.origin = Some(self.surface.logical(input.pos));
        self.redraw()
    }

    /// Ends a drag. A click without movement zooms one step, out with shift.
    ///
    /// # Errors
    ///
    /// Returns an error from the click zoom.
    pub fn on_pointer_up(&mut self, input: PointerInput) -> Result<()> {
        self.drag.last = input.pos;
        let was_click = self.drag.end();
        if was_click && self.config.click_to_zoom {
            let clicks = if input.modifiers.shift { -1 } else { 1 };
            return self.zoom_at(clicks, input.pos);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error from the zoom.
    pub fn on_wheel(&mut self, input: WheelInput) -> Result<()> {
        self.drag.last = input.pos;
        let steps = self.config.wheel_steps(input.delta);
        let clicks = self.wheel.accumulate(steps, self.config.max_zoom_steps);
        self.zoom_at(clicks, input.pos)
    }

    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        for t in touches {
            self.touch.insert(t.id, t.pos);
        }
        self.restart_touch_gesture();
    }

    /// Pan by the centroid's movement and, with two or more touches, pinch
    /// about the centroid.
    ///
    /// # Errors
    ///
    /// Returns a surface error from the transform calls or the redraw.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) -> Result<()> {
        let mut known = 0;
        for t in touches {
            if self.touch.update(t.id, t.pos) {
                known += 1;
            } else {
                log::warn!("touch {} moved without a matching start; ignoring", t.id);
            }
        }
        if known == 0 {
            return Ok(());
        }

        let device = self.touch.positions();
        let Some(device_center) = centroid(&device) else {
            return Ok(());
        };
        self.drag.last = device_center;
        let logical: Vec<Point> = device.iter().map(|p| self.surface.logical(*p)).collect();
        let Some(center) = centroid(&logical) else {
            return Ok(());
        };

        if let Some(origin) = self.touch.origin {
            self.pan(center.x - origin.x, center.y - origin.y)?;
        }

        if logical.len() >= 2 {
            let spread = average_distance(&logical, center);
            match self.touch.baseline {
                Some(baseline) if spread > MIN_PINCH_SPREAD => {
                    let pivot = self.surface.logical(device_center);
                    self.scale_about(pivot, spread / baseline)?;
                }
                None if spread > MIN_PINCH_SPREAD => self.touch.baseline = Some(spread),
                _ => {}
            }
        }

        self.touch.origin = Some(self.surface.logical(device_center));
        self.redraw()
    }

    /// Lift touches. The gesture restarts from whatever touches remain.
    pub fn on_touch_end(&mut self, touches: &[TouchPoint]) {
        for t in touches {
            if !self.touch.remove(t.id) {
                log::warn!("touch {} ended without a matching start; ignoring", t.id);
            }
        }
        if self.touch.is_empty() {
            self.touch.reset();
        } else {
            self.restart_touch_gesture();
        }
    }

    /// Re-anchor the touch gesture on the current active set.
    fn restart_touch_gesture(&mut self) {
        let device = self.touch.positions();
        let logical: Vec<Point> = device.iter().map(|p| self.surface.logical(*p)).collect();
        let (Some(device_center), Some(center)) = (centroid(&device), centroid(&logical)) else {
            self.touch.reset();
            return;
        };
        self.drag.last = device_center;
        self.touch.origin = Some(center);
        self.touch.baseline = if logical.len() >= 2 {
            Some(average_distance(&logical, center)).filter(|d| *d > MIN_PINCH_SPREAD)
        } else {
            None
        };
        log::debug!("touch gesture anchored on {} touch(es)", logical.len());
    }
}

impl<S, D> Viewport<S, D> {
    /// Forget any drag, touch or wheel state. The pointer position is kept.
    pub fn cancel_gestures(&mut self) {
        self.drag.origin = None;
        self.drag.moved = false;
        self.touch.reset();
        self.wheel.reset();
    }
}
