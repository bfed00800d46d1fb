// Shared carousel tuning constants. The web frontend reads these through
// `CarouselConfig::default()` and may override them per carousel.

// Viewport breakpoints (window inner width, CSS px)
pub const TABLET_BREAKPOINT_PX: f64 = 768.0; // two cards from here
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0; // three cards from here

// Cards shown side by side at each breakpoint
pub const MOBILE_CARDS_VISIBLE: usize = 1;
pub const TABLET_CARDS_VISIBLE: usize = 2;
pub const DESKTOP_CARDS_VISIBLE: usize = 3;

// Minimum horizontal travel (px) before a touch counts as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Settle delay after the last resize event before relayout
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

// Gap used when the track's computed `gap` cannot be parsed
pub const FALLBACK_GAP_PX: f64 = 24.0;
