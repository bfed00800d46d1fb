use crate::carousel::{Controls, DomCarousel};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_buttons(carousel: &Rc<RefCell<DomCarousel>>, controls: &Controls) {
    if let Some(prev) = &controls.prev {
        let c = carousel.clone();
        dom::add_click_listener(prev, move || c.borrow_mut().go_prev());
    }
    if let Some(next) = &controls.next {
        let c = carousel.clone();
        dom::add_click_listener(next, move || c.borrow_mut().go_next());
    }
}

// Dot i jumps to slide i; dots past the last position clamp like any request.
pub fn wire_dots(carousel: &Rc<RefCell<DomCarousel>>, dots: &[web::HtmlElement]) {
    for (i, dot) in dots.iter().enumerate() {
        let c = carousel.clone();
        let index = isize::try_from(i).unwrap_or(isize::MAX);
        dom::add_click_listener(dot, move || c.borrow_mut().go_to_slide(index));
    }
}
