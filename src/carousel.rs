use crate::constants::*;
use crate::css;
use crate::dom;
use crate::events;
use landing_core::{
    Carousel, CarouselConfig, Layout, Measurements, MountError, SlidePosition,
    OVERRIDE_ATTRIBUTES,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Element ids locating one carousel on the page.
#[derive(Clone, Debug)]
pub struct CarouselSelectors {
    pub container_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub dots_id: String,
}

impl Default for CarouselSelectors {
    fn default() -> Self {
        Self {
            container_id: CAROUSEL_CONTAINER_ID.to_string(),
            prev_id: CAROUSEL_PREV_ID.to_string(),
            next_id: CAROUSEL_NEXT_ID.to_string(),
            dots_id: CAROUSEL_DOTS_ID.to_string(),
        }
    }
}

/// Optional inputs; a carousel works without any of them.
pub struct Controls {
    pub prev: Option<web::HtmlElement>,
    pub next: Option<web::HtmlElement>,
}

/// One mounted carousel: the core state plus the elements it drives.
pub struct DomCarousel {
    name: String,
    container: web::HtmlElement,
    track: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
    state: Carousel,
}

impl DomCarousel {
    fn find(
        document: &web::Document,
        selectors: &CarouselSelectors,
    ) -> Result<(Self, Controls), MountError> {
        let name = selectors.container_id.clone();
        let container = dom::html_element_by_id(document, &name)
            .ok_or_else(|| MountError::MissingContainer(name.clone()))?;
        let track = dom::query_html(&container, TRACK_SELECTOR)
            .ok_or_else(|| MountError::MissingTrack(name.clone(), TRACK_SELECTOR.to_string()))?;
        let cards = dom::query_all_html(&container, CARD_SELECTOR);
        if cards.is_empty() {
            return Err(MountError::NoCards(name, CARD_SELECTOR.to_string()));
        }
        let dots = document
            .get_element_by_id(&selectors.dots_id)
            .map(|el| dom::query_all_html(&el, DOT_SELECTOR))
            .unwrap_or_default();
        let controls = Controls {
            prev: dom::html_element_by_id(document, &selectors.prev_id),
            next: dom::html_element_by_id(document, &selectors.next_id),
        };
        let state = Carousel::new(cards.len(), read_config(&container, &name));
        Ok((
            Self {
                name,
                container,
                track,
                cards,
                dots,
                state,
            },
            controls,
        ))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn track(&self) -> &web::HtmlElement {
        &self.track
    }

    #[inline]
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        self.state.config()
    }

    fn measure(&self) -> Measurements {
        let gap = dom::computed_style_value(&self.track, STYLE_GAP)
            .map(|v| css::gap_px(&v, self.config().fallback_gap))
            .unwrap_or(self.config().fallback_gap);
        Measurements {
            viewport_width: dom::viewport_width(),
            container_width: self.container.offset_width() as f64,
            gap,
        }
    }

    fn apply_layout(&self, layout: Layout) {
        let flex = css::flex_basis(layout.card_width);
        for card in &self.cards {
            dom::set_style(card, STYLE_FLEX, &flex);
        }
    }

    fn apply_position(&self, pos: SlidePosition) {
        dom::set_style(&self.track, STYLE_TRANSFORM, &css::translate_x(pos.offset_px));
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == pos.index);
        }
    }

    #[inline]
    fn apply_if_moved(&self, moved: Option<SlidePosition>) {
        if let Some(pos) = moved {
            self.apply_position(pos);
        }
    }

    /// Initial layout and position.
    pub fn render(&mut self) {
        let layout = self.state.recalculate_layout(self.measure());
        self.apply_layout(layout);
        self.apply_position(self.state.position());
    }

    pub fn go_to_slide(&mut self, index: isize) {
        let moved = self.state.go_to_slide(index);
        self.apply_if_moved(moved);
    }

    pub fn go_next(&mut self) {
        let moved = self.state.go_next();
        self.apply_if_moved(moved);
    }

    pub fn go_prev(&mut self) {
        let moved = self.state.go_prev();
        self.apply_if_moved(moved);
    }

    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) {
        let moved = self.state.handle_swipe(start_x, end_x);
        self.apply_if_moved(moved);
    }

    /// Relayout for the new viewport and return to the first slide.
    pub fn settle_resize(&mut self) {
        let (layout, pos) = self.state.settle_resize(self.measure());
        self.apply_layout(layout);
        self.apply_position(pos);
    }
}

/// Read `data-` overrides from the container, falling back to defaults.
fn read_config(container: &web::HtmlElement, name: &str) -> CarouselConfig {
    let present: Vec<(&str, String)> = OVERRIDE_ATTRIBUTES
        .iter()
        .filter_map(|&key| container.get_attribute(key).map(|v| (key, v)))
        .collect();
    let overrides = present.iter().map(|(k, v)| (*k, v.as_str()));
    match CarouselConfig::default().with_overrides(overrides) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[carousel] #{} ignoring overrides: {}", name, e);
            CarouselConfig::default()
        }
    }
}

/// Find a carousel, render it and wire its inputs.
///
/// Returns `MountError` when the page does not carry this carousel.
pub fn mount(
    document: &web::Document,
    selectors: &CarouselSelectors,
) -> Result<Rc<RefCell<DomCarousel>>, MountError> {
    let (mut carousel, controls) = DomCarousel::find(document, selectors)?;
    carousel.render();
    log::info!(
        "[carousel] #{} mounted: cards={} dots={} visible={}",
        carousel.name(),
        carousel.state.card_count(),
        carousel.dot_count(),
        carousel.state.cards_visible()
    );

    let dots = carousel.dots.clone();
    let track = carousel.track().clone();
    let delay_ms = carousel.config().resize_debounce_ms;
    let carousel = Rc::new(RefCell::new(carousel));

    events::wire_buttons(&carousel, &controls);
    events::wire_dots(&carousel, &dots);
    events::wire_swipe(&carousel, &track);
    events::wire_resize(&carousel, delay_ms);
    Ok(carousel)
}
