use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::dom::Listener;
use crate::reveal::Reveal;
use crate::ui_state::UiState;
use crate::{anchors, header, lightbox, nav, parallax, slider};

/// Everything the page enhancements keep alive. Dropping it detaches all
/// listeners, disconnects the reveal observer and stops the slider.
pub struct PageController {
    _ui: Rc<UiState>,
    _listeners: Vec<Listener>,
    _reveal: Option<Reveal>,
    _slider: Option<Interval>,
}

impl PageController {
    pub fn init(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let ui = Rc::new(UiState::new(window, document));

        let mut listeners = Vec::new();
        listeners.extend(header::init(&ui)?);
        let reveal = Reveal::init(&ui)?;
        let slider = slider::init(&ui);
        listeners.extend(nav::init(&ui)?);
        listeners.extend(anchors::init(&ui)?);
        listeners.extend(lightbox::init(&ui)?);
        listeners.extend(parallax::init(&ui)?);

        info!("Page controller attached {} listeners", listeners.len());
        Ok(Self {
            _ui: ui,
            _listeners: listeners,
            _reveal: reveal,
            _slider: slider,
        })
    }
}
