//! Viewport-dependent layout math for the carousel.
//!
//! Everything here is a pure function of a [`Measurements`] snapshot, so the
//! frontend can read the DOM once per relayout and hand the numbers over.

use crate::constants::*;

/// Viewport widths at which the carousel shows more cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub tablet: f64,
    pub desktop: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: TABLET_BREAKPOINT_PX,
            desktop: DESKTOP_BREAKPOINT_PX,
        }
    }
}

impl Breakpoints {
    /// Number of cards shown side by side for a given window inner width.
    #[inline]
    pub fn cards_visible(&self, viewport_width: f64) -> usize {
        if viewport_width >= self.desktop {
            DESKTOP_CARDS_VISIBLE
        } else if viewport_width >= self.tablet {
            TABLET_CARDS_VISIBLE
        } else {
            MOBILE_CARDS_VISIBLE
        }
    }
}

/// One DOM reading taken at relayout time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Window inner width, used for breakpoints.
    pub viewport_width: f64,
    /// Offset width of the carousel container.
    pub container_width: f64,
    /// Gap between cards on the track.
    pub gap: f64,
}

/// Derived layout applied to every card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cards_visible: usize,
    pub card_width: f64,
    pub gap: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cards_visible: MOBILE_CARDS_VISIBLE,
            card_width: 0.0,
            gap: 0.0,
        }
    }
}

impl Layout {
    pub fn compute(breakpoints: &Breakpoints, m: Measurements) -> Self {
        let cards_visible = breakpoints.cards_visible(m.viewport_width);
        let gap = sanitize_px(m.gap);
        Self {
            cards_visible,
            card_width: card_width(sanitize_px(m.container_width), gap, cards_visible),
            gap,
        }
    }

    /// Horizontal distance from one card's left edge to the next.
    #[inline]
    pub fn stride(&self) -> f64 {
        self.card_width + self.gap
    }
}

/// Width of one card so that `cards_visible` cards and their gaps fill the
/// container exactly. Degenerates to 0 for tiny or empty containers.
#[inline]
pub fn card_width(container_width: f64, gap: f64, cards_visible: usize) -> f64 {
    let n = cards_visible.max(1) as f64;
    ((container_width - gap * (n - 1.0)) / n).max(0.0)
}

#[inline]
fn sanitize_px(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_card_counts() {
        let bp = Breakpoints::default();
        assert_eq!(bp.cards_visible(320.0), 1);
        assert_eq!(bp.cards_visible(767.9), 1);
        assert_eq!(bp.cards_visible(768.0), 2);
        assert_eq!(bp.cards_visible(1023.0), 2);
        assert_eq!(bp.cards_visible(1024.0), 3);
        assert_eq!(bp.cards_visible(2560.0), 3);
    }

    #[test]
    fn card_width_fills_container() {
        // 3 cards, 2 gaps of 24px in 1200px
        assert!((card_width(1200.0, 24.0, 3) - 384.0).abs() < 1e-9);
        assert!((card_width(700.0, 24.0, 1) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn zero_container_degenerates_without_failing() {
        let l = Layout::compute(
            &Breakpoints::default(),
            Measurements {
                viewport_width: 1280.0,
                container_width: 0.0,
                gap: 24.0,
            },
        );
        assert_eq!(l.cards_visible, 3);
        assert_eq!(l.card_width, 0.0);
    }

    #[test]
    fn non_finite_readings_are_treated_as_zero() {
        let l = Layout::compute(
            &Breakpoints::default(),
            Measurements {
                viewport_width: 500.0,
                container_width: f64::NAN,
                gap: f64::INFINITY,
            },
        );
        assert_eq!(l.card_width, 0.0);
        assert_eq!(l.gap, 0.0);
    }
}
