//! Browser implementations of the surface, input and frame seams.
//!
//! [`mount`] is the one-call entry point: it takes a `<canvas>` element and a
//! draw callback and returns a stopped [`WebCanvas`].

pub mod context;
pub mod frame;
pub mod input;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::canvas::InteractiveCanvas;
use crate::config::ViewportConfig;
use crate::error::{Error, Result};
use crate::tracker::TrackedSurface;

pub use context::context_2d;
pub use frame::WebFrameScheduler;
pub use input::{CanvasInput, CanvasSubscription};

/// An [`InteractiveCanvas`] backed by a DOM canvas.
pub type WebCanvas<D> = InteractiveCanvas<CanvasRenderingContext2d, D, WebFrameScheduler, CanvasInput>;

/// Build an interactive canvas over `canvas`'s 2d context. Call
/// [`InteractiveCanvas::start`] to begin handling input and redrawing.
///
/// # Errors
///
/// Returns `Err` when there is no window, the canvas has no 2d context, the
/// config is invalid, or the first draw fails.
pub fn mount<D>(canvas: &HtmlCanvasElement, draw: D, config: ViewportConfig) -> Result<WebCanvas<D>>
where
    D: FnMut(&mut TrackedSurface<CanvasRenderingContext2d>) -> Result<()> + 'static,
{
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let ctx = context_2d(canvas)?;
    let scheduler = WebFrameScheduler::new(window.clone());
    let input = CanvasInput::new(canvas.clone(), window);
    InteractiveCanvas::new(ctx, draw, scheduler, input, config)
}
