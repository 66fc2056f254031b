//! Interactive pan/zoom viewport for a 2D drawing surface.
//!
//! A caller supplies a drawing surface and a draw callback that works in a
//! stable *logical* coordinate space. The crate tracks the surface's affine
//! transform, turns mouse, wheel and touch input into translate/scale calls,
//! and redraws once per display frame while running.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, rectangles and the affine [`geometry::Matrix`] |
//! | [`surface`] | The [`surface::DrawSurface`] seam over a real 2D context |
//! | [`tracker`] | [`tracker::TrackedSurface`], the shadow-matrix decorator |
//! | [`input`] | Input event types consumed by the viewport |
//! | [`state`] | Drag, touch and wheel gesture state |
//! | [`viewport`] | Gesture-to-transform logic and redraw ([`viewport::Viewport`]) |
//! | [`host`] | The [`host::InputSource`] and [`host::FrameScheduler`] seams |
//! | [`canvas`] | Start/stop lifecycle over injected input and frame seams |
//! | [`web`] | Browser implementations of the seams via `web-sys` |
//! | [`config`] | Tunables, loadable from JSON |
//! | [`util`] | Browser logging setup and transform formatting |
//! | [`error`] | Crate error type |

pub mod canvas;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod state;
pub mod surface;
pub mod tracker;
pub mod util;
pub mod viewport;
pub mod web;

#[cfg(test)]
mod test_support;

pub use canvas::InteractiveCanvas;
pub use config::ViewportConfig;
pub use error::{Error, Result};
pub use geometry::{Matrix, Point, Rect};
pub use host::{FrameCallback, FrameScheduler, InputSink, InputSource};
pub use tracker::TrackedSurface;
pub use viewport::Viewport;
