use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config::{HERO_PATTERN_SELECTOR, HERO_SELECTOR, PARALLAX_RATE};
use crate::dom::{self, Listener};
use crate::ui_state::UiState;

/// Vertical shift for the hero pattern, or `None` once the hero has scrolled
/// out of view and the last offset should be kept.
pub fn offset_for(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * PARALLAX_RATE)
}

pub fn init(ui: &Rc<UiState>) -> Result<Option<Listener>, JsValue> {
    let Some(hero) = dom::query(&ui.document, HERO_SELECTOR) else {
        debug!("No hero on page, skipping parallax");
        return Ok(None);
    };

    let state = ui.clone();
    let listener = Listener::passive(ui.window.as_ref(), "scroll", move |_| {
        let Some(pattern) = dom::query(&hero, HERO_PATTERN_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        if let Some(offset) = offset_for(state.scroll_y(), state.viewport_height()) {
            let _ = pattern
                .style()
                .set_property("transform", &format!("translateY({}px)", offset));
        }
    })?;

    info!("Hero parallax ready");
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_at_a_fifth_of_scroll() {
        assert_eq!(offset_for(0.0, 800.0), Some(0.0));
        assert_eq!(offset_for(100.0, 800.0), Some(20.0));
    }

    #[test]
    fn holds_once_past_the_viewport() {
        assert_eq!(offset_for(799.0, 800.0), Some(799.0 * 0.2));
        assert_eq!(offset_for(800.0, 800.0), None);
        assert_eq!(offset_for(5000.0, 800.0), None);
    }
}
