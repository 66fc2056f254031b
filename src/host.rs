//! Host seams: where input comes from and how frames are scheduled.
//!
//! Both seams take a callback that the caller creates once and reuses, so an
//! implementation can wrap it a single time and later remove exactly the
//! function it registered.

use std::rc::Rc;

use crate::error::Result;
use crate::input::InputEvent;

/// Receives every input event from an [`InputSource`].
pub type InputSink = Rc<dyn Fn(InputEvent)>;

/// Invoked once per scheduled frame.
pub type FrameCallback = Rc<dyn Fn()>;

/// A source of pointer, wheel and touch events.
pub trait InputSource {
    /// Token returned by `subscribe` and consumed by `unsubscribe`.
    type Subscription;

    /// Start delivering events to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a listener cannot be registered.
    fn subscribe(&self, sink: &InputSink) -> Result<Self::Subscription>;

    /// Stop delivering events for `subscription`.
    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// The host's per-display-refresh scheduling primitive.
pub trait FrameScheduler {
    type Handle;

    /// Run `tick` once at the next frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host refuses the request.
    fn request_frame(&self, tick: &FrameCallback) -> Result<Self::Handle>;

    /// Cancel a pending request. Cancelling a request that already ran is a no-op.
    fn cancel_frame(&self, handle: Self::Handle);
}
