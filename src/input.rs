//! Input events consumed by the viewport.
//!
//! These are host-neutral: the browser binding in [`crate::web::input`]
//! translates DOM events into them, and tests construct them directly. All
//! positions are device-space pixels relative to the surface's top-left corner.

use crate::geometry::Point;

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };
}

/// A mouse/pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pos: Point,
    pub modifiers: Modifiers,
}

impl PointerInput {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { pos: Point::new(x, y), modifiers: Modifiers::NONE }
    }

    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}

/// Raw wheel delta in whichever form the host reported it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// Standard `wheel` event, `DOM_DELTA_PIXEL`; positive scrolls down.
    Pixels(f64),
    /// Standard `wheel` event, `DOM_DELTA_LINE`; positive scrolls down.
    Lines(f64),
    /// Standard `wheel` event, `DOM_DELTA_PAGE`; positive scrolls down.
    Pages(f64),
    /// Legacy `mousewheel` `wheelDelta`; positive scrolls up.
    LegacyWheelDelta(f64),
    /// Legacy `DOMMouseScroll` `detail`; positive scrolls down.
    LegacyDetail(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub pos: Point,
    pub delta: WheelDelta,
}

/// Host-assigned touch identifier, stable for the lifetime of one touch.
pub type TouchId = i32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub pos: Point,
}

impl TouchPoint {
    #[must_use]
    pub fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self { id, pos: Point::new(x, y) }
    }
}

/// One input event. Touch variants carry the touches that *changed*.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    Wheel(WheelInput),
    TouchStart(Vec<TouchPoint>),
    TouchMove(Vec<TouchPoint>),
    TouchEnd(Vec<TouchPoint>),
    TouchCancel(Vec<TouchPoint>),
}
