//! `requestAnimationFrame` as a [`FrameScheduler`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::Result;
use crate::host::{FrameCallback, FrameScheduler};

pub struct WebFrameScheduler {
    window: Window,
    // The JS function handed to requestAnimationFrame, built once per tick callback.
    wrapped: RefCell<Option<(FrameCallback, Closure<dyn FnMut()>)>>,
}

impl WebFrameScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, wrapped: RefCell::new(None) }
    }
}

fn same_callback(a: &FrameCallback, b: &FrameCallback) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl FrameScheduler for WebFrameScheduler {
    /// The id returned by `requestAnimationFrame`.
    type Handle = i32;

    fn request_frame(&self, tick: &FrameCallback) -> Result<i32> {
        let mut wrapped = self.wrapped.borrow_mut();
        if wrapped.as_ref().is_none_or(|(cb, _)| !same_callback(cb, tick)) {
            let cb = tick.clone();
            let closure = Closure::wrap(Box::new(move || cb()) as Box<dyn FnMut()>);
            *wrapped = Some((tick.clone(), closure));
        }
        match wrapped.as_ref() {
            Some((_, closure)) => Ok(self.window.request_animation_frame(closure.as_ref().unchecked_ref())?),
            None => Ok(0),
        }
    }

    fn cancel_frame(&self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({handle}) failed: {e:?}");
        }
    }
}
