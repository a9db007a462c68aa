use std::cell::RefCell;

use log::debug;
use web_sys::{Document, HtmlElement, Window};

/// Outcome of asking an open/closed widget to change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

/// Reference count of features currently holding the page scroll lock.
///
/// Only the 0 -> 1 and 1 -> 0 edges touch the body style.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollLock {
    holders: u32,
}

impl ScrollLock {
    /// Returns true when this call is the one that locked the page.
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns true when this call is the one that unlocked the page.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

/// Handles shared by every feature, built once at startup.
pub struct UiState {
    pub window: Window,
    pub document: Document,
    body: Option<HtmlElement>,
    scroll_lock: RefCell<ScrollLock>,
}

impl UiState {
    pub fn new(window: Window, document: Document) -> Self {
        let body = document.body();
        Self {
            window,
            document,
            body,
            scroll_lock: RefCell::new(ScrollLock::default()),
        }
    }

    pub fn lock_scroll(&self) {
        if self.scroll_lock.borrow_mut().acquire() {
            debug!("Locking page scroll");
            if let Some(body) = &self.body {
                let _ = body.style().set_property("overflow", "hidden");
            }
        }
    }

    pub fn unlock_scroll(&self) {
        if self.scroll_lock.borrow_mut().release() {
            debug!("Unlocking page scroll");
            if let Some(body) = &self.body {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acquire_and_last_release_flip_the_lock() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.is_locked());

        assert!(!lock.release());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
    }

    #[test]
    fn release_without_holders_is_a_no_op() {
        let mut lock = ScrollLock::default();
        assert!(!lock.release());
        assert!(!lock.release());
        assert!(!lock.is_locked());
        // still locks normally afterwards
        assert!(lock.acquire());
    }
}
