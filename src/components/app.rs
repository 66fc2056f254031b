use interactive_canvas::ViewportConfig;
use yew::prelude::*;

use super::canvas_view::CanvasView;

const CONFIG_KEY: &str = "ic_viewport_config";

/// Viewport config override from `localStorage`, if any and valid.
fn stored_config() -> ViewportConfig {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(CONFIG_KEY).ok().flatten());
    let Some(raw) = raw else {
        return ViewportConfig::default();
    };
    match ViewportConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("using viewport config from localStorage");
            config
        }
        Err(e) => {
            log::warn!("ignoring stored viewport config: {e}");
            ViewportConfig::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(stored_config);

    html! {
        <div style="font-family:sans-serif; color:#c9d1d9; background:#0d1117; min-height:100vh; padding:16px;">
            <h2 style="margin:0 0 8px 0;">{"Interactive canvas"}</h2>
            <p style="margin:0 0 12px 0; font-size:13px; opacity:0.8;">
                {"Drag to pan, scroll or click to zoom (shift-click zooms out), pinch on touch screens."}
            </p>
            <CanvasView config={(*config).clone()} />
        </div>
    }
}
