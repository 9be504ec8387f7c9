mod app;
mod viewport;

mod components {
    pub mod fallback_image;
    pub mod layout;
    pub mod particles;
    pub mod typewriter;
}

mod pages {
    pub mod landing;
    pub mod portfolio;
    pub mod project_detail;
}

use crate::app::App;
use leptos::*;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    viewport::install();

    log::info!("mounting portfolio app");
    mount_to_body(|| view! { <App/> });
}
