use landing_core::{Debounce, Settled};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `setTimeout` callback that is cleared when dropped.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: u32, f: impl FnOnce() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay)
            .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// Runs an action once input pauses for `delay_ms`. Each `restart` cancels
/// the pending run, so only the last call in a burst executes.
///
/// The pending `Timeout` is replaced, never dropped, from inside its own
/// callback, which keeps the running closure alive.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
    state: Rc<RefCell<Debounce>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            state: Rc::new(RefCell::new(Debounce::new())),
        }
    }

    pub fn restart(&self, action: impl FnOnce(Settled) + 'static) {
        let ticket = self.state.borrow_mut().schedule();
        let state = self.state.clone();
        let timeout = Timeout::schedule(self.delay_ms, move || {
            let settled = state.borrow_mut().fire(ticket);
            if let Some(settled) = settled {
                action(settled);
            }
        });
        match timeout {
            // Assigning drops (and clears) the superseded timeout.
            Ok(t) => *self.pending.borrow_mut() = Some(t),
            Err(e) => {
                log::warn!("[timer] debounce not scheduled: {:?}", e);
                self.state.borrow_mut().cancel();
            }
        }
    }
}
