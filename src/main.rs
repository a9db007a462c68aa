use std::cell::RefCell;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

mod anchors;
mod config;
mod controller;
mod dom;
mod header;
mod lightbox;
mod nav;
mod parallax;
mod reveal;
mod slider;
mod ui_state;

use controller::PageController;

thread_local! {
    // Lives until the page unloads
    static CONTROLLER: RefCell<Option<PageController>> = RefCell::new(None);
}

fn start() {
    let Some(window) = window() else {
        error!("No window, not attaching page behaviours");
        return;
    };
    match PageController::init(window) {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(e) => error!("Failed to attach page behaviours: {:?}", e),
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page controller");

    let Some(document) = window().and_then(|w| w.document()) else {
        error!("No document, not attaching page behaviours");
        return;
    };
    if document.ready_state() != "loading" {
        start();
        return;
    }

    // Markup isn't parsed yet, wait for it once
    let on_ready = Closure::once(start);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
        return;
    }
    on_ready.forget();
}
