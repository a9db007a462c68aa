use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::ANCHOR_SELECTOR;
use crate::dom::{self, Listener};
use crate::ui_state::UiState;

/// Id named by an in-page `href`, or `None` for a bare `#` and anything
/// that isn't a fragment link.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Smooth-scrolls fragment links whose target exists. Everything else keeps
/// the browser's default navigation.
pub fn init(ui: &Rc<UiState>) -> Result<Vec<Listener>, JsValue> {
    let anchors = dom::query_all(&ui.document, ANCHOR_SELECTOR);
    let mut listeners = Vec::with_capacity(anchors.len());

    for anchor in anchors {
        let state = ui.clone();
        let link = anchor.clone();
        listeners.push(Listener::new(anchor.as_ref(), "click", move |e| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(|id| state.document.get_element_by_id(id))
            else {
                debug!("No target for {}, using default navigation", href);
                return;
            };
            e.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?);
    }

    if !listeners.is_empty() {
        info!("Smooth scrolling {} anchor links", listeners.len());
    }
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_intercepted() {
        assert_eq!(fragment_id("#"), None);
    }

    #[test]
    fn fragment_yields_id() {
        assert_eq!(fragment_id("#gallery"), Some("gallery"));
        assert_eq!(fragment_id("#order-now"), Some("order-now"));
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(fragment_id("/menu#cakes"), None);
        assert_eq!(fragment_id(""), None);
    }
}
