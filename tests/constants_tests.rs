// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use landing_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_ascend() {
    assert!(TABLET_BREAKPOINT_PX > 0.0);
    assert!(DESKTOP_BREAKPOINT_PX > TABLET_BREAKPOINT_PX);
    assert!(MOBILE_CARDS_VISIBLE < TABLET_CARDS_VISIBLE);
    assert!(TABLET_CARDS_VISIBLE < DESKTOP_CARDS_VISIBLE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_tuning_is_positive() {
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(FALLBACK_GAP_PX >= 0.0);
}

#[test]
fn selectors_are_well_formed() {
    for sel in [TRACK_SELECTOR, CARD_SELECTOR, DOT_SELECTOR] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
    for id in [
        CAROUSEL_CONTAINER_ID,
        CAROUSEL_PREV_ID,
        CAROUSEL_NEXT_ID,
        CAROUSEL_DOTS_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
}

#[test]
fn override_attributes_are_data_attributes() {
    for key in OVERRIDE_ATTRIBUTES {
        assert!(key.starts_with("data-"));
    }
}
