//! Thin helpers over `web_sys` shared by every feature.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList};

/// Anything `querySelector` can be called on.
pub trait Queryable {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Queryable for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Queryable for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First match for `selector` under `root`, or `None` when nothing matches
/// or the selector is rejected by the browser.
pub fn query(root: &impl Queryable, selector: &str) -> Option<Element> {
    root.select(selector).ok().flatten()
}

/// Every match for `selector` under `root`, in document order.
pub fn query_all(root: &impl Queryable, selector: &str) -> Vec<Element> {
    let Ok(list) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// An event listener that stays attached for as long as this value lives.
///
/// Dropping it removes the callback from its target.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Same as [`Listener::new`] but tells the browser the handler never
    /// calls `preventDefault`, which keeps scrolling on the fast path.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Run the handler once right now with a synthetic event.
    pub fn fire(&self) -> Result<(), JsValue> {
        let event = Event::new(self.event)?;
        self.callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call1(&JsValue::NULL, &event)?;
        Ok(())
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map_or(false, |e| e.key() == "Escape")
}
