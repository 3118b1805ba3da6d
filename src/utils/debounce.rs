use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for `event` on the window and runs `callback` once the events stop
/// arriving for `delay_ms`.
///
/// Returns `None` when there is no window (outside a browser). Dropping the
/// listener detaches it and cancels any pending call.
///
/// ```rust,ignore
/// let listener = debounced_window_listener("resize", 150, move || redraw());
/// move || drop(listener)
/// ```
pub fn debounced_window_listener<F>(
    event: &'static str,
    delay_ms: u32,
    callback: F,
) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, event, move |_| {
        let cb = callback.clone();
        // Replacing the handle drops (and cancels) the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
