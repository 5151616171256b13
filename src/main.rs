use yew::prelude::*;
use log::info;

mod config;
mod countdown;
mod story {
    pub mod draft;
    pub mod error;
    pub mod upload;
}
mod components {
    pub mod countdown;
    pub mod notification;
    pub mod story_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
