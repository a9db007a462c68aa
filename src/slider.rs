use std::cell::Cell;

use gloo_timers::callback::Interval;
use log::{debug, info};
use web_sys::Element;

use crate::config::{HERO_SLIDE_ACTIVE_CLASS, HERO_SLIDE_SELECTOR, SLIDE_INTERVAL_MS};
use crate::dom;
use crate::ui_state::UiState;

/// Circular position over `count` slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideCycle {
    current: usize,
    count: usize,
}

impl SlideCycle {
    /// A single slide (or none) has nothing to rotate.
    pub fn new(start: usize, count: usize) -> Option<Self> {
        if count < 2 {
            return None;
        }
        Some(Self {
            current: start % count,
            count,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves to the next slide and returns `(previous, next)`.
    pub fn advance(&mut self) -> (usize, usize) {
        let previous = self.current;
        self.current = (self.current + 1) % self.count;
        (previous, self.current)
    }
}

/// The first slide the markup already marks active, else the first slide.
pub fn start_index(active: &[bool]) -> usize {
    active.iter().position(|&a| a).unwrap_or(0)
}

/// Starts the hero rotation. The returned interval runs until it is dropped.
pub fn init(ui: &UiState) -> Option<Interval> {
    let slides = dom::query_all(&ui.document, HERO_SLIDE_SELECTOR);
    let active: Vec<bool> = slides
        .iter()
        .map(|s| s.class_list().contains(HERO_SLIDE_ACTIVE_CLASS))
        .collect();
    let Some(cycle) = SlideCycle::new(start_index(&active), slides.len()) else {
        debug!("Fewer than two hero slides, not rotating");
        return None;
    };

    // Exactly one slide is active before the first tick
    for (i, slide) in slides.iter().enumerate() {
        set_active(slide, i == cycle.current());
    }

    let cycle = Cell::new(cycle);
    let count = slides.len();
    let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
        let mut c = cycle.get();
        let (previous, next) = c.advance();
        cycle.set(c);
        set_active(&slides[previous], false);
        set_active(&slides[next], true);
    });
    info!("Rotating {} hero slides every {}ms", count, SLIDE_INTERVAL_MS);
    Some(interval)
}

fn set_active(slide: &Element, active: bool) {
    let _ = slide
        .class_list()
        .toggle_with_force(HERO_SLIDE_ACTIVE_CLASS, active);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_more_than_one_slide() {
        assert_eq!(SlideCycle::new(0, 0), None);
        assert_eq!(SlideCycle::new(0, 1), None);
        assert!(SlideCycle::new(0, 2).is_some());
    }

    #[test]
    fn index_after_k_ticks_is_k_mod_n() {
        let n = 3;
        let mut cycle = SlideCycle::new(0, n).unwrap();
        for k in 1..=10 {
            let (previous, next) = cycle.advance();
            assert_eq!(previous, (k - 1) % n);
            assert_eq!(next, k % n);
            assert_eq!(cycle.current(), k % n);
        }
    }

    #[test]
    fn wraps_from_last_to_first() {
        let mut cycle = SlideCycle::new(3, 4).unwrap();
        assert_eq!(cycle.advance(), (3, 0));
    }

    #[test]
    fn starts_from_first_slide_when_none_active() {
        assert_eq!(start_index(&[false, false, false]), 0);
        assert_eq!(start_index(&[]), 0);
    }

    #[test]
    fn starts_from_premarked_slide() {
        assert_eq!(start_index(&[false, true, false]), 1);
    }

    #[test]
    fn several_marked_keeps_the_first() {
        assert_eq!(start_index(&[false, true, true, false]), 1);
        assert_eq!(start_index(&[true, false, true]), 0);
    }

    #[test]
    fn exactly_one_slide_active_before_first_tick() {
        let marked = [false, true, false, true];
        let cycle = SlideCycle::new(start_index(&marked), marked.len()).unwrap();
        let active = (0..marked.len()).filter(|&i| i == cycle.current()).count();
        assert_eq!(active, 1);
        assert_eq!(cycle.current(), 1);
    }

    #[test]
    fn start_is_kept_in_range() {
        let cycle = SlideCycle::new(5, 4).unwrap();
        assert_eq!(cycle.current(), 1);
    }
}
