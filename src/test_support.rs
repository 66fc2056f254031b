//! Recording surface shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::geometry::Matrix;
use crate::surface::DrawSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Save,
    Restore,
    Scale(f64, f64),
    Rotate(f64),
    Translate(f64, f64),
    Transform(Matrix),
    SetTransform(Matrix),
    ClearRect(f64, f64, f64, f64),
}

/// A surface that records every call and can be told to reject transforms.
///
/// Clones share the same log, so a test can keep a handle after moving the
/// surface into a tracker.
#[derive(Clone)]
pub struct RecordingSurface {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail: Rc<Cell<bool>>,
    pub width: f64,
    pub height: f64,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { calls: Rc::default(), fail: Rc::default(), width, height }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) -> Result<()> {
        if self.fail.get() {
            return Err(Error::Surface("rejected".into()));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&self) {
        self.calls.borrow_mut().push(Call::Save);
    }

    fn restore(&self) {
        self.calls.borrow_mut().push(Call::Restore);
    }

    fn scale(&self, sx: f64, sy: f64) -> Result<()> {
        self.record(Call::Scale(sx, sy))
    }

    fn rotate(&self, angle: f64) -> Result<()> {
        self.record(Call::Rotate(angle))
    }

    fn translate(&self, dx: f64, dy: f64) -> Result<()> {
        self.record(Call::Translate(dx, dy))
    }

    fn transform(&self, m: &Matrix) -> Result<()> {
        self.record(Call::Transform(*m))
    }

    fn set_transform(&self, m: &Matrix) -> Result<()> {
        self.record(Call::SetTransform(*m))
    }

    fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.borrow_mut().push(Call::ClearRect(x, y, width, height));
    }

    fn device_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
