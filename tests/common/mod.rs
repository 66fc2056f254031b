//! Host doubles for driving an `InteractiveCanvas` without a browser.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use interactive_canvas::error::{Error, Result};
use interactive_canvas::host::{FrameCallback, FrameScheduler, InputSink, InputSource};
use interactive_canvas::input::InputEvent;
use interactive_canvas::surface::DrawSurface;
use interactive_canvas::{Matrix, TrackedSurface};

/// A surface that accepts everything and draws nothing.
pub struct NullSurface {
    pub width: f64,
    pub height: f64,
}

impl NullSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl DrawSurface for NullSurface {
    fn save(&self) {}
    fn restore(&self) {}
    fn scale(&self, _sx: f64, _sy: f64) -> Result<()> {
        Ok(())
    }
    fn rotate(&self, _angle: f64) -> Result<()> {
        Ok(())
    }
    fn translate(&self, _dx: f64, _dy: f64) -> Result<()> {
        Ok(())
    }
    fn transform(&self, _m: &Matrix) -> Result<()> {
        Ok(())
    }
    fn set_transform(&self, _m: &Matrix) -> Result<()> {
        Ok(())
    }
    fn clear_rect(&self, _x: f64, _y: f64, _width: f64, _height: f64) {}
    fn device_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// A draw callback that counts its invocations.
pub fn counting_draw(count: &Rc<Cell<usize>>) -> impl FnMut(&mut TrackedSurface<NullSurface>) -> Result<()> + 'static {
    let count = count.clone();
    move |_surface| {
        count.set(count.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct Frames {
    next_id: u32,
    pending: Vec<(u32, FrameCallback)>,
    requested: usize,
    cancelled: usize,
}

/// Frames run only when the test calls [`ManualScheduler::run_frame`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    frames: Rc<RefCell<Frames>>,
    pub refuse: Rc<Cell<bool>>,
}

impl ManualScheduler {
    /// Run every callback that is due now. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut self.frames.borrow_mut().pending);
        for (_, tick) in &due {
            tick();
        }
        due.len()
    }

    pub fn pending(&self) -> usize {
        self.frames.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.frames.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.frames.borrow().cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&self, tick: &FrameCallback) -> Result<u32> {
        if self.refuse.get() {
            return Err(Error::Surface("frame refused".into()));
        }
        let mut frames = self.frames.borrow_mut();
        frames.next_id += 1;
        let id = frames.next_id;
        frames.pending.push((id, tick.clone()));
        frames.requested += 1;
        Ok(id)
    }

    fn cancel_frame(&self, handle: u32) {
        let mut frames = self.frames.borrow_mut();
        let before = frames.pending.len();
        frames.pending.retain(|(id, _)| *id != handle);
        if frames.pending.len() != before {
            frames.cancelled += 1;
        }
    }
}

#[derive(Default)]
struct Subscribers {
    next_id: u32,
    sinks: Vec<(u32, InputSink)>,
    subscribed: usize,
    unsubscribed: usize,
}

/// Input that the test injects with [`ScriptedInput::emit`].
#[derive(Clone, Default)]
pub struct ScriptedInput {
    subscribers: Rc<RefCell<Subscribers>>,
    pub refuse: Rc<Cell<bool>>,
}

impl ScriptedInput {
    /// Deliver `event` to every current subscriber.
    pub fn emit(&self, event: InputEvent) {
        for sink in self.sinks() {
            sink(event.clone());
        }
    }

    pub fn sinks(&self) -> Vec<InputSink> {
        self.subscribers.borrow().sinks.iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn listeners(&self) -> usize {
        self.subscribers.borrow().sinks.len()
    }

    pub fn subscribed(&self) -> usize {
        self.subscribers.borrow().subscribed
    }

    pub fn unsubscribed(&self) -> usize {
        self.subscribers.borrow().unsubscribed
    }
}

impl InputSource for ScriptedInput {
    type Subscription = u32;

    fn subscribe(&self, sink: &InputSink) -> Result<u32> {
        if self.refuse.get() {
            return Err(Error::Surface("listener refused".into()));
        }
        let mut subs = self.subscribers.borrow_mut();
        subs.next_id += 1;
        let id = subs.next_id;
        subs.sinks.push((id, sink.clone()));
        subs.subscribed += 1;
        Ok(id)
    }

    fn unsubscribe(&self, subscription: u32) {
        let mut subs = self.subscribers.borrow_mut();
        subs.sinks.retain(|(id, _)| *id != subscription);
        subs.unsubscribed += 1;
    }
}
