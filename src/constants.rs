// DOM hooks and style names used by the web frontend.
// Kept free of `web_sys` so host-side tests can `include!` this file.

// Default page carousel
pub const CAROUSEL_CONTAINER_ID: &str = "propertiesCarousel";
pub const CAROUSEL_PREV_ID: &str = "carouselPrev";
pub const CAROUSEL_NEXT_ID: &str = "carouselNext";
pub const CAROUSEL_DOTS_ID: &str = "carouselDots";

// Selectors resolved inside the container / dots container
pub const TRACK_SELECTOR: &str = ".carousel-track";
pub const CARD_SELECTOR: &str = ".property-card";
pub const DOT_SELECTOR: &str = ".dot";

// Class toggled on the dot matching the current slide
pub const ACTIVE_CLASS: &str = "active";

// Style properties written by the carousel
pub const STYLE_FLEX: &str = "flex";
pub const STYLE_TRANSFORM: &str = "transform";
// Computed style property read from the track
pub const STYLE_GAP: &str = "gap";
