mod bindings;
mod components;
mod config;
mod controller;
mod error;
mod keymap;
mod logging;
mod state;
mod surface;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("mini-video-cam starting");
    yew::Renderer::<App>::new().render();
}
