use crate::carousel::DomCarousel;
use crate::dom;
use landing_core::TouchTracker;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Screen x of the first changed touch, if any.
#[inline]
fn first_changed_screen_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().item(0).map(|t| t.screen_x() as f64)
}

/// Passive touchstart/touchend on the track feeding `handle_swipe`.
pub fn wire_swipe(carousel: &Rc<RefCell<DomCarousel>>, track: &web::HtmlElement) {
    let tracker = Rc::new(RefCell::new(TouchTracker::default()));

    let start_tracker = tracker.clone();
    dom::add_passive_listener(track, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_changed_screen_x(&ev) {
            start_tracker.borrow_mut().start(x);
        }
    });

    let c = carousel.clone();
    dom::add_passive_listener(track, "touchend", move |ev: web::TouchEvent| {
        let Some(x) = first_changed_screen_x(&ev) else {
            return;
        };
        let gesture = tracker.borrow_mut().end(x);
        if let Some((start_x, end_x)) = gesture {
            c.borrow_mut().handle_swipe(start_x, end_x);
        }
    });
}
