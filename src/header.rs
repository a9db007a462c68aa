use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsValue;

use crate::config::{HEADER_SCROLLED_CLASS, HEADER_SCROLL_THRESHOLD, HEADER_SELECTOR};
use crate::dom::{self, Listener};
use crate::ui_state::UiState;

// Inclusive: exactly 50px already counts as scrolled
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SCROLL_THRESHOLD
}

/// Keeps the header's `scrolled` class in sync with the scroll offset.
pub fn init(ui: &Rc<UiState>) -> Result<Option<Listener>, JsValue> {
    let Some(header) = dom::query(&ui.document, HEADER_SELECTOR) else {
        debug!("No header on page, skipping scroll styling");
        return Ok(None);
    };

    let state = ui.clone();
    let listener = Listener::passive(ui.window.as_ref(), "scroll", move |_| {
        let _ = header
            .class_list()
            .toggle_with_force(HEADER_SCROLLED_CLASS, is_scrolled(state.scroll_y()));
    })?;

    // Initial check, the page may load already scrolled
    listener.fire()?;
    info!("Header scroll styling ready");
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_from_threshold_up() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(is_scrolled(50.0));
        assert!(is_scrolled(1200.0));
    }
}
