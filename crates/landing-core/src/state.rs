//! Carousel index state.
//!
//! `Carousel` owns the leftmost visible card and the current layout. Every
//! navigation intent (buttons, dots, swipes, resize) funnels through
//! [`Carousel::go_to_slide`], which is the only place `current_index` is
//! assigned, so the index can never be observed out of range.

use crate::config::CarouselConfig;
use crate::layout::{Layout, Measurements};
use crate::swipe::{classify_swipe, SwipeDirection};

/// Where the track should sit after a navigation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePosition {
    /// Leftmost visible card; also the index of the active dot.
    pub index: usize,
    /// Leftward translation of the track in px.
    pub offset_px: f64,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    card_count: usize,
    layout: Layout,
    current_index: usize,
    config: CarouselConfig,
}

impl Carousel {
    pub fn new(card_count: usize, config: CarouselConfig) -> Self {
        Self {
            card_count,
            layout: Layout::default(),
            current_index: 0,
            config,
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn cards_visible(&self) -> usize {
        self.layout.cards_visible
    }

    #[inline]
    pub fn card_width(&self) -> f64 {
        self.layout.card_width
    }

    #[inline]
    pub fn gap(&self) -> f64 {
        self.layout.gap
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Largest valid `current_index`.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.card_count.saturating_sub(self.layout.cards_visible)
    }

    #[inline]
    pub fn offset_px(&self) -> f64 {
        self.current_index as f64 * self.layout.stride()
    }

    #[inline]
    pub fn position(&self) -> SlidePosition {
        SlidePosition {
            index: self.current_index,
            offset_px: self.offset_px(),
        }
    }

    /// Recompute `cards_visible`, `card_width` and `gap` from a fresh reading.
    /// The index is re-clamped since the valid range may have shrunk.
    pub fn recalculate_layout(&mut self, m: Measurements) -> Layout {
        self.layout = Layout::compute(&self.config.breakpoints, m);
        self.current_index = self.clamp(self.current_index as isize);
        log::debug!(
            "[carousel] layout visible={} card_width={:.1} gap={:.1} max_index={}",
            self.layout.cards_visible,
            self.layout.card_width,
            self.layout.gap,
            self.max_index()
        );
        self.layout
    }

    /// Move to `index`, clamped into `[0, max_index]`.
    ///
    /// Returns `None` when the clamped index equals the current one, in which
    /// case neither offset nor active dot need touching.
    pub fn go_to_slide(&mut self, index: isize) -> Option<SlidePosition> {
        let clamped = self.clamp(index);
        if clamped == self.current_index {
            return None;
        }
        self.current_index = clamped;
        log::debug!("[carousel] slide {} (requested {})", clamped, index);
        Some(self.position())
    }

    pub fn go_next(&mut self) -> Option<SlidePosition> {
        self.go_to_slide(self.current_index as isize + 1)
    }

    pub fn go_prev(&mut self) -> Option<SlidePosition> {
        self.go_to_slide(self.current_index as isize - 1)
    }

    /// Horizontal swipe from `start_x` to `end_x` (screen px). Moving left
    /// beyond the threshold advances; moving right goes back.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> Option<SlidePosition> {
        match classify_swipe(start_x, end_x, self.config.swipe_threshold)? {
            SwipeDirection::Next => self.go_next(),
            SwipeDirection::Prev => self.go_prev(),
        }
    }

    /// Relayout after the viewport settles and return to the first slide.
    ///
    /// The previous offset is meaningless once card width changes, so the
    /// position is always returned for re-application even if the index did
    /// not move.
    pub fn settle_resize(&mut self, m: Measurements) -> (Layout, SlidePosition) {
        let layout = self.recalculate_layout(m);
        self.go_to_slide(0);
        (layout, self.position())
    }

    #[inline]
    fn clamp(&self, index: isize) -> usize {
        if index <= 0 {
            0
        } else {
            (index as usize).min(self.max_index())
        }
    }
}
