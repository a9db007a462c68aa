use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Header
pub const HEADER_SELECTOR: &str = "#header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "revealed";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Hero slider
pub const HERO_SLIDE_SELECTOR: &str = ".hero-slide";
pub const HERO_SLIDE_ACTIVE_CLASS: &str = "hero-slide--active";
pub const SLIDE_INTERVAL_MS: u32 = 5500;

// Mobile nav
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

// Anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Gallery + lightbox
pub const GALLERY_LINK_SELECTOR: &str = ".gallery-card .card-link";
pub const GALLERY_IMAGE_SELECTOR: &str = ".card-img-wrap img";
pub const GALLERY_TITLE_SELECTOR: &str = ".card-title";
pub const LIGHTBOX_SELECTOR: &str = "#lightbox";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox-close";
pub const LIGHTBOX_IMAGE_SELECTOR: &str = ".lightbox-img";
pub const LIGHTBOX_CAPTION_SELECTOR: &str = ".lightbox-caption";
pub const LIGHTBOX_HIDE_DELAY_MS: u32 = 400; // matches the css fade-out

// Shared by nav and lightbox
pub const OPEN_CLASS: &str = "is-open";

// Parallax
pub const HERO_SELECTOR: &str = "#hero";
pub const HERO_PATTERN_SELECTOR: &str = ".hero-pattern";
pub const PARALLAX_RATE: f64 = 0.2;
