use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::{NAV_LINK_SELECTOR, NAV_SELECTOR, NAV_TOGGLE_SELECTOR, OPEN_CLASS};
use crate::dom::{self, Listener};
use crate::ui_state::{Transition, UiState};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> Transition {
        if self.open {
            return Transition::Unchanged;
        }
        self.open = true;
        Transition::Opened
    }

    pub fn close(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        self.open = false;
        Transition::Closed
    }

    pub fn toggle(&mut self) -> Transition {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }
}

/// The mobile navigation drawer and the handles it styles.
pub struct NavDrawer {
    nav: Option<Element>,
    toggle: Option<Element>,
    state: RefCell<DrawerState>,
    ui: Rc<UiState>,
}

impl NavDrawer {
    pub fn toggle(&self) {
        let transition = self.state.borrow_mut().toggle();
        self.apply(transition);
    }

    pub fn close(&self) {
        let transition = self.state.borrow_mut().close();
        self.apply(transition);
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn apply(&self, transition: Transition) {
        let open = match transition {
            Transition::Opened => true,
            Transition::Closed => false,
            Transition::Unchanged => return,
        };
        debug!("Nav drawer {}", if open { "opened" } else { "closed" });

        if let Some(nav) = &self.nav {
            let _ = nav.class_list().toggle_with_force(OPEN_CLASS, open);
        }
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
        if open {
            self.ui.lock_scroll();
        } else {
            self.ui.unlock_scroll();
        }
    }
}

/// Wires the toggle button, every nav link and the Escape key.
pub fn init(ui: &Rc<UiState>) -> Result<Vec<Listener>, JsValue> {
    let nav = dom::query(&ui.document, NAV_SELECTOR);
    let toggle = dom::query(&ui.document, NAV_TOGGLE_SELECTOR);
    if nav.is_none() && toggle.is_none() {
        debug!("No nav drawer on page");
        return Ok(Vec::new());
    }

    let drawer = Rc::new(NavDrawer {
        nav,
        toggle: toggle.clone(),
        state: RefCell::new(DrawerState::default()),
        ui: ui.clone(),
    });
    let mut listeners = Vec::new();

    if let Some(toggle) = toggle {
        let drawer = drawer.clone();
        listeners.push(Listener::new(toggle.as_ref(), "click", move |_| {
            drawer.toggle();
        })?);
    }

    for link in dom::query_all(&ui.document, NAV_LINK_SELECTOR) {
        let drawer = drawer.clone();
        listeners.push(Listener::new(link.as_ref(), "click", move |_| {
            drawer.close();
        })?);
    }

    {
        let drawer = drawer.clone();
        listeners.push(Listener::new(ui.document.as_ref(), "keydown", move |e| {
            if dom::is_escape(&e) && drawer.is_open() {
                drawer.close();
            }
        })?);
    }

    info!("Nav drawer ready");
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        let mut state = DrawerState::default();
        assert_eq!(state.toggle(), Transition::Opened);
        assert!(state.is_open());
        assert_eq!(state.toggle(), Transition::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_close_is_idempotent() {
        let mut state = DrawerState::default();
        state.open();
        assert_eq!(state.close(), Transition::Closed);
        assert_eq!(state.close(), Transition::Unchanged);
        assert_eq!(state.close(), Transition::Unchanged);
        assert!(!state.is_open());
    }

    #[test]
    fn open_twice_only_opens_once() {
        let mut state = DrawerState::default();
        assert_eq!(state.open(), Transition::Opened);
        assert_eq!(state.open(), Transition::Unchanged);
    }
}
