use crate::carousel::DomCarousel;
use crate::timer::Debouncer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Debounced window resize: once resizing settles, relayout and reset to the
/// first slide.
pub fn wire_resize(carousel: &Rc<RefCell<DomCarousel>>, delay_ms: u32) {
    let Some(window) = web::window() else {
        return;
    };
    let debouncer = Debouncer::new(delay_ms);
    let carousel = carousel.clone();
    let closure = Closure::wrap(Box::new(move || {
        let c = carousel.clone();
        debouncer.restart(move |settled| {
            let mut c = c.borrow_mut();
            log::debug!(
                "[resize] #{} settled after {} events in {:?}",
                c.name(),
                settled.events,
                settled.elapsed
            );
            c.settle_resize();
        });
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
