//! Start/stop lifecycle: binds a [`Viewport`] to an input source and a
//! frame scheduler.
//!
//! While running, every input event is routed to the viewport and the scene
//! is redrawn once per frame. `start` and `stop` are idempotent, and after
//! `stop` returns no tick or input event reaches the viewport: the pending
//! frame is cancelled, the input subscription is dropped, and every callback
//! also checks the `running` flag before doing work.
//!
//! The frame loop's bookkeeping lives apart from the viewport, so a tick that
//! finds the viewport busy skips one redraw but still schedules the next frame.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::ViewportConfig;
use crate::error::Result;
use crate::geometry::{Matrix, Point, Rect};
use crate::host::{FrameCallback, FrameScheduler, InputSink, InputSource};
use crate::input::InputEvent;
use crate::surface::DrawSurface;
use crate::tracker::TrackedSurface;
use crate::viewport::Viewport;

struct FrameLoop<H> {
    tick: Option<FrameCallback>,
    pending: Option<H>,
}

/// Ask for the next frame with the loop's tick, if it still has one.
fn schedule_next<F: FrameScheduler>(frames: &RefCell<FrameLoop<F::Handle>>, scheduler: &F) -> Result<()> {
    let Some(tick) = frames.borrow().tick.clone() else {
        return Ok(());
    };
    let handle = scheduler.request_frame(&tick)?;
    frames.borrow_mut().pending = Some(handle);
    Ok(())
}

pub struct InteractiveCanvas<S, D, F: FrameScheduler, I: InputSource> {
    viewport: Rc<RefCell<Viewport<S, D>>>,
    running: Rc<Cell<bool>>,
    frames: Rc<RefCell<FrameLoop<F::Handle>>>,
    subscription: RefCell<Option<I::Subscription>>,
    scheduler: Rc<F>,
    input: I,
}

impl<S, D, F, I> InteractiveCanvas<S, D, F, I>
where
    S: DrawSurface + 'static,
    D: FnMut(&mut TrackedSurface<S>) -> Result<()> + 'static,
    F: FrameScheduler + 'static,
    I: InputSource + 'static,
{
    /// Build a stopped canvas. The scene is drawn once immediately.
    ///
    /// # Errors
    ///
    /// See [`Viewport::new`].
    pub fn new(surface: S, draw: D, scheduler: F, input: I, config: ViewportConfig) -> Result<Self> {
        let viewport = Viewport::new(surface, draw, config)?;
        Ok(Self {
            viewport: Rc::new(RefCell::new(viewport)),
            running: Rc::new(Cell::new(false)),
            frames: Rc::new(RefCell::new(FrameLoop { tick: None, pending: None })),
            subscription: RefCell::new(None),
            scheduler: Rc::new(scheduler),
            input,
        })
    }

    /// Subscribe to input, draw a frame and schedule the next one. No-op when
    /// already running.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input source cannot subscribe or the first frame
    /// cannot be scheduled; the canvas is left stopped.
    pub fn start(&self) -> Result<()> {
        if self.running.get() {
            return Ok(());
        }
        let subscription = self.input.subscribe(&self.input_sink())?;
        *self.subscription.borrow_mut() = Some(subscription);
        self.frames.borrow_mut().tick = Some(self.frame_tick());
        self.running.set(true);

        if let Err(e) = self.viewport.borrow_mut().redraw() {
            log::warn!("redraw failed: {e}");
        }
        if let Err(e) = schedule_next(&self.frames, &*self.scheduler) {
            self.stop();
            return Err(e);
        }
        log::debug!("interactive canvas started");
        Ok(())
    }

    /// Feed one event as if it came from the input source. Ignored while stopped.
    ///
    /// # Errors
    ///
    /// Propagates the viewport handler's error.
    pub fn dispatch(&self, event: InputEvent) -> Result<()> {
        if !self.running.get() {
            return Ok(());
        }
        self.viewport.borrow_mut().handle(event)
    }

    /// # Errors
    ///
    /// See [`Viewport::redraw`].
    pub fn redraw(&self) -> Result<()> {
        self.viewport.borrow_mut().redraw()
    }

    /// # Errors
    ///
    /// See [`Viewport::zoom`].
    pub fn zoom(&self, clicks: i32) -> Result<()> {
        self.viewport.borrow_mut().zoom(clicks)
    }

    /// # Errors
    ///
    /// See [`Viewport::zoom_at`].
    pub fn zoom_at(&self, clicks: i32, pivot: Point) -> Result<()> {
        self.viewport.borrow_mut().zoom_at(clicks, pivot)
    }

    /// # Errors
    ///
    /// See [`Viewport::reset_view`].
    pub fn reset_view(&self) -> Result<()> {
        self.viewport.borrow_mut().reset_view()
    }

    #[must_use]
    pub fn get_transform(&self) -> Matrix {
        self.viewport.borrow().get_transform()
    }

    #[must_use]
    pub fn transformed_point(&self, x: f64, y: f64) -> Point {
        self.viewport.borrow().transformed_point(x, y)
    }

    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.viewport.borrow().visible_rect()
    }

    fn input_sink(&self) -> InputSink {
        let viewport = Rc::downgrade(&self.viewport);
        let running = Rc::downgrade(&self.running);
        Rc::new(move |event: InputEvent| {
            let (Some(cell), Some(running)) = (viewport.upgrade(), running.upgrade()) else {
                return;
            };
            if !running.get() {
                return;
            }
            let Ok(mut viewport) = cell.try_borrow_mut() else {
                log::warn!("input event arrived during a redraw; dropped");
                return;
            };
            if let Err(e) = viewport.handle(event) {
                log::warn!("input handling failed: {e}");
            }
        })
    }

    /// One frame: redraw, then ask for the next frame with the same callback.
    fn frame_tick(&self) -> FrameCallback {
        let viewport: Weak<RefCell<Viewport<S, D>>> = Rc::downgrade(&self.viewport);
        let running = Rc::downgrade(&self.running);
        let frames = Rc::downgrade(&self.frames);
        let scheduler = Rc::downgrade(&self.scheduler);
        Rc::new(move || {
            let (Some(running), Some(frames), Some(scheduler)) =
                (running.upgrade(), frames.upgrade(), scheduler.upgrade())
            else {
                return;
            };
            if !running.get() {
                return;
            }
            frames.borrow_mut().pending = None;
            if let Some(cell) = viewport.upgrade() {
                match cell.try_borrow_mut() {
                    Ok(mut viewport) => {
                        if let Err(e) = viewport.redraw() {
                            log::warn!("redraw failed: {e}");
                        }
                    }
                    Err(_) => log::debug!("viewport busy; skipping this frame's redraw"),
                }
            }
            if let Err(e) = schedule_next(&frames, &*scheduler) {
                log::warn!("could not schedule the next frame: {e}");
            }
        })
    }
}

impl<S, D, F: FrameScheduler, I: InputSource> InteractiveCanvas<S, D, F, I> {
    /// Cancel the pending frame and unsubscribe from input. No-op when stopped.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        let pending = {
            let mut frames = self.frames.borrow_mut();
            frames.tick = None;
            frames.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            self.input.unsubscribe(subscription);
        }
        match self.viewport.try_borrow_mut() {
            Ok(mut viewport) => viewport.cancel_gestures(),
            Err(_) => log::warn!("viewport busy while stopping; gesture state kept"),
        }
        log::debug!("interactive canvas stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl<S, D, F: FrameScheduler, I: InputSource> Drop for InteractiveCanvas<S, D, F, I> {
    fn drop(&mut self) {
        self.stop();
    }
}
