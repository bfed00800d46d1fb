// Host-side tests for CSS value helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;

#[test]
fn leading_int_matches_parse_int() {
    assert_eq!(parse_leading_int("24px"), Some(24.0));
    assert_eq!(parse_leading_int("  32px"), Some(32.0));
    assert_eq!(parse_leading_int("1.5rem"), Some(1.0));
    assert_eq!(parse_leading_int("0px"), Some(0.0));
    assert_eq!(parse_leading_int("-8px"), Some(-8.0));
    assert_eq!(parse_leading_int("+12"), Some(12.0));
}

#[test]
fn leading_int_rejects_non_numeric() {
    assert_eq!(parse_leading_int("normal"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("px"), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn gap_falls_back_only_when_unparseable() {
    assert_eq!(gap_px("16px", 24.0), 16.0);
    assert_eq!(gap_px("normal", 24.0), 24.0);
    assert_eq!(gap_px("", 24.0), 24.0);
    // An explicit zero gap is honoured
    assert_eq!(gap_px("0px", 24.0), 0.0);
    assert_eq!(gap_px("-4px", 24.0), 0.0);
}

#[test]
fn style_values_format_like_the_page_expects() {
    assert_eq!(translate_x(0.0), "translateX(-0px)");
    assert_eq!(translate_x(816.0), "translateX(-816px)");
    assert_eq!(translate_x(408.5), "translateX(-408.5px)");
    assert_eq!(flex_basis(384.0), "0 0 384px");
    assert_eq!(flex_basis(0.0), "0 0 0px");
}
