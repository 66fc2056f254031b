// Mouse drag gesture state
use crate::geometry::Point;

#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Last known device-space pointer position; the pivot for `zoom`.
    pub last: Point,
    /// Logical point grabbed at pointer-down, `None` while idle.
    pub origin: Option<Point>,
    /// Pointer moved since pointer-down; suppresses click-to-zoom.
    pub moved: bool,
}

impl DragState {
    #[must_use]
    pub fn new(last: Point) -> Self {
        Self { last, origin: None, moved: false }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// End the drag, returning whether it was a click (no movement).
    pub fn end(&mut self) -> bool {
        let was_click = self.origin.take().is_some() && !self.moved;
        self.moved = false;
        was_click
    }
}
