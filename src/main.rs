mod components;

use components::app::App;

fn main() {
    interactive_canvas::util::init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
