//! Gallery lightbox.
//!
//! Clicking a gallery card shows its image and title in the overlay. The
//! overlay fades out on close and is only hidden and emptied once the fade
//! has had [`LIGHTBOX_HIDE_DELAY_MS`] to run. That delayed hide is held as a
//! cancellable timer so a quick reopen can't be wiped by a stale close.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::config::{
    GALLERY_IMAGE_SELECTOR, GALLERY_LINK_SELECTOR, GALLERY_TITLE_SELECTOR, LIGHTBOX_CAPTION_SELECTOR,
    LIGHTBOX_CLOSE_SELECTOR, LIGHTBOX_HIDE_DELAY_MS, LIGHTBOX_IMAGE_SELECTOR, LIGHTBOX_SELECTOR,
    OPEN_CLASS,
};
use crate::dom::{self, Listener};
use crate::ui_state::{Transition, UiState};

/// Image and caption currently in the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub src: String,
    pub caption: String,
}

impl Shown {
    /// Content for a gallery card, if it has both an image source and a title.
    pub fn from_card(src: &str, title: Option<String>) -> Option<Self> {
        if src.is_empty() {
            return None;
        }
        Some(Self {
            src: src.to_string(),
            caption: title?.trim().to_string(),
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LightboxState {
    open: bool,
    shown: Option<Shown>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }

    /// Swapping the content of an already open overlay is not a new opening.
    pub fn open(&mut self, content: Shown) -> Transition {
        self.shown = Some(content);
        if self.open {
            return Transition::Unchanged;
        }
        self.open = true;
        Transition::Opened
    }

    /// Leaves the content in place for the fade-out.
    pub fn close(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        self.open = false;
        Transition::Closed
    }

    /// Drops the content once the overlay is hidden. No-op while open.
    pub fn clear(&mut self) -> bool {
        if self.open || self.shown.is_none() {
            return false;
        }
        self.shown = None;
        true
    }
}

pub struct Lightbox {
    overlay: HtmlElement,
    close_button: Option<HtmlElement>,
    image: HtmlImageElement,
    caption: Element,
    state: RefCell<LightboxState>,
    pending_hide: RefCell<Option<Timeout>>,
    ui: Rc<UiState>,
}

impl Lightbox {
    pub fn open(&self, content: Shown) {
        // A reopen during the fade-out wins over the scheduled hide
        self.pending_hide.borrow_mut().take();

        self.image.set_src(&content.src);
        self.image.set_alt(&content.caption);
        self.caption.set_text_content(Some(&content.caption));
        debug!("Opening lightbox for {}", content.src);

        let transition = self.state.borrow_mut().open(content);
        self.overlay.set_hidden(false);
        let _ = self.overlay.class_list().add_1(OPEN_CLASS);
        if transition == Transition::Opened {
            self.ui.lock_scroll();
        }
        if let Some(close_button) = &self.close_button {
            let _ = close_button.focus();
        }
    }

    pub fn close(self: &Rc<Self>) {
        if self.state.borrow_mut().close() == Transition::Unchanged {
            return;
        }
        debug!("Closing lightbox");
        let _ = self.overlay.class_list().remove_1(OPEN_CLASS);
        self.ui.unlock_scroll();

        let lightbox: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(LIGHTBOX_HIDE_DELAY_MS, move || {
            if let Some(lightbox) = lightbox.upgrade() {
                lightbox.finish_hide();
            }
        });
        // Replacing an earlier handle cancels it
        *self.pending_hide.borrow_mut() = Some(timeout);
    }

    fn finish_hide(&self) {
        if !self.state.borrow_mut().clear() {
            return;
        }
        self.overlay.set_hidden(true);
        self.image.set_src("");
        self.image.set_alt("");
        self.caption.set_text_content(Some(""));
    }
}

fn card_content(card: &Element) -> Option<Shown> {
    let src = dom::query(card, GALLERY_IMAGE_SELECTOR)
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
        .map(|img| img.src())?;
    let title = dom::query(card, GALLERY_TITLE_SELECTOR).map(|t| t.text_content().unwrap_or_default());
    Shown::from_card(&src, title)
}

/// Wires gallery cards, the close button, backdrop clicks and Escape.
pub fn init(ui: &Rc<UiState>) -> Result<Vec<Listener>, JsValue> {
    let Some(overlay) = dom::query(&ui.document, LIGHTBOX_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No lightbox on page");
        return Ok(Vec::new());
    };
    let root: &Element = &overlay;
    let image = dom::query(root, LIGHTBOX_IMAGE_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
    let caption = dom::query(root, LIGHTBOX_CAPTION_SELECTOR);
    let (Some(image), Some(caption)) = (image, caption) else {
        debug!("Lightbox is missing its image or caption slot");
        return Ok(Vec::new());
    };
    let close_button =
        dom::query(root, LIGHTBOX_CLOSE_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let lightbox = Rc::new(Lightbox {
        overlay: overlay.clone(),
        close_button: close_button.clone(),
        image,
        caption,
        state: RefCell::new(LightboxState::default()),
        pending_hide: RefCell::new(None),
        ui: ui.clone(),
    });
    let mut listeners = Vec::new();

    for card in dom::query_all(&ui.document, GALLERY_LINK_SELECTOR) {
        let lightbox = lightbox.clone();
        let link = card.clone();
        listeners.push(Listener::new(card.as_ref(), "click", move |e| {
            e.prevent_default();
            match card_content(&link) {
                Some(content) => lightbox.open(content),
                None => debug!("Gallery card has no image or title"),
            }
        })?);
    }

    if let Some(close_button) = close_button {
        let lightbox = lightbox.clone();
        listeners.push(Listener::new(close_button.as_ref(), "click", move |_| {
            lightbox.close();
        })?);
    }

    {
        let lightbox = lightbox.clone();
        let backdrop: JsValue = overlay.clone().into();
        listeners.push(Listener::new(overlay.as_ref(), "click", move |e| {
            // Clicks inside the content bubble up with a different target
            if e.target().map_or(false, |t| JsValue::from(t) == backdrop) {
                lightbox.close();
            }
        })?);
    }

    {
        let lightbox = lightbox.clone();
        listeners.push(Listener::new(ui.document.as_ref(), "keydown", move |e| {
            if dom::is_escape(&e) && lightbox.state.borrow().is_open() {
                lightbox.close();
            }
        })?);
    }

    info!("Lightbox ready");
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake() -> Shown {
        Shown::from_card("a.jpg", Some("Chocolate Cake".to_string())).unwrap()
    }

    #[test]
    fn card_needs_source_and_title() {
        assert_eq!(Shown::from_card("", Some("Chocolate Cake".to_string())), None);
        assert_eq!(Shown::from_card("a.jpg", None), None);
        assert_eq!(
            cake(),
            Shown {
                src: "a.jpg".to_string(),
                caption: "Chocolate Cake".to_string(),
            }
        );
    }

    #[test]
    fn caption_is_trimmed() {
        let shown = Shown::from_card("a.jpg", Some("\n  Lemon Tart ".to_string())).unwrap();
        assert_eq!(shown.caption, "Lemon Tart");
    }

    #[test]
    fn open_shows_exact_card() {
        let mut state = LightboxState::default();
        assert_eq!(state.open(cake()), Transition::Opened);
        assert!(state.is_open());
        assert_eq!(state.shown(), Some(&cake()));
    }

    #[test]
    fn content_survives_close_until_cleared() {
        let mut state = LightboxState::default();
        state.open(cake());
        assert_eq!(state.close(), Transition::Closed);
        assert_eq!(state.shown(), Some(&cake()));
        assert!(state.clear());
        assert_eq!(state.shown(), None);
    }

    #[test]
    fn second_close_is_ignored() {
        let mut state = LightboxState::default();
        state.open(cake());
        state.close();
        assert_eq!(state.close(), Transition::Unchanged);
    }

    #[test]
    fn clear_never_empties_an_open_overlay() {
        let mut state = LightboxState::default();
        state.open(cake());
        state.close();
        // reopened before the hide fired
        state.open(cake());
        assert!(!state.clear());
        assert_eq!(state.shown(), Some(&cake()));
    }

    #[test]
    fn swapping_content_while_open_does_not_reopen() {
        let mut state = LightboxState::default();
        state.open(cake());
        let tart = Shown::from_card("b.jpg", Some("Lemon Tart".to_string())).unwrap();
        assert_eq!(state.open(tart.clone()), Transition::Unchanged);
        assert_eq!(state.shown(), Some(&tart));
    }
}
