use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use interactive_canvas::error::Result;
use interactive_canvas::web::{WebCanvas, mount};
use interactive_canvas::{TrackedSurface, ViewportConfig};

use super::scene::draw_scene;
use super::view_controls::ViewControls;

type SceneFn = Box<dyn FnMut(&mut TrackedSurface<CanvasRenderingContext2d>) -> Result<()>>;
type DemoCanvas = WebCanvas<SceneFn>;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasViewProps {
    pub config: ViewportConfig,
    #[prop_or(800)]
    pub width: u32,
    #[prop_or(600)]
    pub height: u32,
}

#[function_component(CanvasView)]
pub fn canvas_view(props: &CanvasViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let handle = use_mut_ref(|| None::<DemoCanvas>);
    let running = use_state(|| false);

    // (Re)mount whenever the config changes; dropping the old canvas stops it.
    {
        let canvas_ref = canvas_ref.clone();
        let handle = handle.clone();
        let running = running.clone();
        use_effect_with(props.config.clone(), move |config| {
            handle.borrow_mut().take();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match mount(&canvas, Box::new(draw_scene) as SceneFn, config.clone()) {
                    Ok(view) => {
                        match view.start() {
                            Ok(()) => running.set(true),
                            Err(e) => log::error!("could not start the canvas: {e}"),
                        }
                        *handle.borrow_mut() = Some(view);
                    }
                    Err(e) => log::error!("could not mount the canvas: {e}"),
                }
            }
            move || {
                handle.borrow_mut().take();
            }
        });
    }

    let on_toggle = {
        let handle = handle.clone();
        let running = running.clone();
        Callback::from(move |_| {
            let guard = handle.borrow();
            let Some(view) = guard.as_ref() else { return };
            if view.is_running() {
                view.stop();
                running.set(false);
            } else if let Err(e) = view.start() {
                log::error!("could not start the canvas: {e}");
            } else {
                running.set(true);
            }
        })
    };
    let zoom_by = |clicks: i32| {
        let handle = handle.clone();
        Callback::from(move |_| {
            if let Some(view) = handle.borrow().as_ref() {
                if let Err(e) = view.zoom(clicks) {
                    log::warn!("zoom failed: {e}");
                }
            }
        })
    };
    let on_reset = {
        let handle = handle.clone();
        Callback::from(move |_| {
            if let Some(view) = handle.borrow().as_ref() {
                if let Err(e) = view.reset_view() {
                    log::warn!("reset failed: {e}");
                }
            }
        })
    };

    html! {
        <div style="position:relative; display:inline-block;">
            <canvas ref={canvas_ref} width={props.width.to_string()} height={props.height.to_string()}
                style="background:#0e1116; border:1px solid #30363d; border-radius:8px; touch-action:none; display:block;" />
            <ViewControls running={*running} {on_toggle} on_zoom_in={zoom_by(1)} on_zoom_out={zoom_by(-1)} {on_reset} />
        </div>
    }
}
