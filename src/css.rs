// Small CSS value helpers. Pure string handling, tested on the host.

/// Leading integer of a CSS length such as `"24px"`, parsed the way
/// `parseInt` does: optional whitespace and sign, then digits up to the first
/// non-digit. Values with no leading digits (`"normal"`, `""`) yield `None`.
pub fn parse_leading_int(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: f64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Gap in px from a computed `gap` value, or `fallback` when unparseable.
/// Negative values are clamped to zero.
#[inline]
pub fn gap_px(computed: &str, fallback: f64) -> f64 {
    parse_leading_int(computed).map_or(fallback, |g| g.max(0.0))
}

/// `transform` value shifting the track left by `offset_px`.
#[inline]
pub fn translate_x(offset_px: f64) -> String {
    format!("translateX(-{}px)", offset_px)
}

/// `flex` shorthand pinning a card to `width_px`.
#[inline]
pub fn flex_basis(width_px: f64) -> String {
    format!("0 0 {}px", width_px)
}
