//! DOM events as an [`InputSource`].
//!
//! Mouse presses and moves are taken from the canvas, releases from the
//! window so a drag that leaves the canvas still ends. Wheel input uses the
//! standard `wheel` event when the browser has it and falls back to the
//! legacy `mousewheel`/`DOMMouseScroll` pair otherwise, never both. Positions
//! are converted from client coordinates to canvas pixels.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent, Window};

use crate::error::Result;
use crate::geometry::Point;
use crate::host::{InputSink, InputSource};
use crate::input::{InputEvent, Modifiers, PointerInput, TouchPoint, WheelDelta, WheelInput};

pub struct CanvasInput {
    canvas: HtmlCanvasElement,
    window: Window,
}

/// The listeners registered by one `subscribe` call.
pub struct CanvasSubscription {
    listeners: Vec<Listener>,
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn remove(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("could not remove {} listener: {e:?}", self.event);
        }
    }
}

impl CanvasInput {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, window: Window) -> Self {
        Self { canvas, window }
    }

    fn has_standard_wheel(&self) -> bool {
        js_sys::Reflect::has(&self.canvas, &JsValue::from_str("onwheel")).unwrap_or(false)
    }
}

fn listen(
    listeners: &mut Vec<Listener>,
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    listeners.push(Listener { target: target.clone(), event, closure });
    Ok(())
}

/// Client coordinates to canvas pixels, accounting for CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let sx = if rect.width() > 0.0 { f64::from(canvas.width()) / rect.width() } else { 1.0 };
    let sy = if rect.height() > 0.0 { f64::from(canvas.height()) / rect.height() } else { 1.0 };
    Point::new((f64::from(client_x) - rect.left()) * sx, (f64::from(client_y) - rect.top()) * sy)
}

fn modifiers(e: &MouseEvent) -> Modifiers {
    Modifiers { shift: e.shift_key(), ctrl: e.ctrl_key(), alt: e.alt_key(), meta: e.meta_key() }
}

fn pointer(canvas: &HtmlCanvasElement, e: &MouseEvent) -> PointerInput {
    PointerInput { pos: canvas_point(canvas, e.client_x(), e.client_y()), modifiers: modifiers(e) }
}

fn wheel_delta(e: &WheelEvent) -> WheelDelta {
    match e.delta_mode() {
        WheelEvent::DOM_DELTA_LINE => WheelDelta::Lines(e.delta_y()),
        WheelEvent::DOM_DELTA_PAGE => WheelDelta::Pages(e.delta_y()),
        _ => WheelDelta::Pixels(e.delta_y()),
    }
}

fn number_property(e: &Event, name: &str) -> f64 {
    js_sys::Reflect::get(e, &JsValue::from_str(name)).ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// The touches that changed in this event.
fn changed_touches(canvas: &HtmlCanvasElement, e: &TouchEvent) -> Vec<TouchPoint> {
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint { id: t.identifier(), pos: canvas_point(canvas, t.client_x(), t.client_y()) })
        .collect()
}

impl InputSource for CanvasInput {
    type Subscription = CanvasSubscription;

    fn subscribe(&self, sink: &InputSink) -> Result<CanvasSubscription> {
        let mut listeners = Vec::new();
        match self.register(&mut listeners, sink) {
            Ok(()) => Ok(CanvasSubscription { listeners }),
            Err(e) => {
                for l in &listeners {
                    l.remove();
                }
                Err(e)
            }
        }
    }

    fn unsubscribe(&self, subscription: CanvasSubscription) {
        for l in &subscription.listeners {
            l.remove();
        }
    }
}

impl CanvasInput {
    fn register(&self, listeners: &mut Vec<Listener>, sink: &InputSink) -> Result<()> {
        let canvas_target: &EventTarget = self.canvas.as_ref();
        let window_target: &EventTarget = self.window.as_ref();

        let mouse = |make: fn(PointerInput) -> InputEvent| {
            let canvas = self.canvas.clone();
            let sink = sink.clone();
            move |e: Event| {
                let e: MouseEvent = e.unchecked_into();
                sink(make(pointer(&canvas, &e)));
            }
        };
        listen(listeners, canvas_target, "mousedown", mouse(InputEvent::PointerDown))?;
        listen(listeners, canvas_target, "mousemove", mouse(InputEvent::PointerMove))?;
        listen(listeners, window_target, "mouseup", mouse(InputEvent::PointerUp))?;

        if self.has_standard_wheel() {
            let canvas = self.canvas.clone();
            let sink = sink.clone();
            listen(listeners, canvas_target, "wheel", move |e: Event| {
                e.prevent_default();
                let e: WheelEvent = e.unchecked_into();
                let pos = canvas_point(&canvas, e.client_x(), e.client_y());
                sink(InputEvent::Wheel(WheelInput { pos, delta: wheel_delta(&e) }));
            })?;
        } else {
            log::debug!("no standard wheel event; using mousewheel/DOMMouseScroll");
            let legacy = |name: &'static str, make: fn(f64) -> WheelDelta| {
                let canvas = self.canvas.clone();
                let sink = sink.clone();
                move |e: Event| {
                    e.prevent_default();
                    let delta = make(number_property(&e, name));
                    let e: MouseEvent = e.unchecked_into();
                    let pos = canvas_point(&canvas, e.client_x(), e.client_y());
                    sink(InputEvent::Wheel(WheelInput { pos, delta }));
                }
            };
            listen(listeners, canvas_target, "mousewheel", legacy("wheelDelta", WheelDelta::LegacyWheelDelta))?;
            listen(listeners, canvas_target, "DOMMouseScroll", legacy("detail", WheelDelta::LegacyDetail))?;
        }

        let touch = |make: fn(Vec<TouchPoint>) -> InputEvent| {
            let canvas = self.canvas.clone();
            let sink = sink.clone();
            move |e: Event| {
                e.prevent_default();
                let e: TouchEvent = e.unchecked_into();
                sink(make(changed_touches(&canvas, &e)));
            }
        };
        listen(listeners, canvas_target, "touchstart", touch(InputEvent::TouchStart))?;
        listen(listeners, canvas_target, "touchmove", touch(InputEvent::TouchMove))?;
        listen(listeners, canvas_target, "touchend", touch(InputEvent::TouchEnd))?;
        listen(listeners, canvas_target, "touchcancel", touch(InputEvent::TouchCancel))?;
        Ok(())
    }
}
