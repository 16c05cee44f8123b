//! Window listener plumbing shared by the scroll-driven components.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Runs `recompute` once on mount and again after every scroll or resize.
/// Event bursts are coalesced to at most one call per animation frame: the
/// handlers only schedule a frame callback, never recompute inline.
/// Listeners and any pending frame are torn down with the owning component.
pub fn on_viewport_change(recompute: impl Fn() + Clone + 'static) {
    Effect::new(move |_| {
        let Some(win) = web_sys::window() else {
            return;
        };
        let pending = Rc::new(Cell::new(false));
        let frame = Rc::new(Cell::new(None::<i32>));

        let tick = Rc::new(Closure::<dyn FnMut()>::new({
            let pending = pending.clone();
            let recompute = recompute.clone();
            move || {
                pending.set(false);
                recompute();
            }
        }));

        let schedule = {
            let pending = pending.clone();
            let frame = frame.clone();
            let tick = tick.clone();
            move || {
                if pending.get() {
                    return;
                }
                if let Some(win) = web_sys::window() {
                    if let Ok(handle) =
                        win.request_animation_frame((*tick).as_ref().unchecked_ref())
                    {
                        pending.set(true);
                        frame.set(Some(handle));
                    }
                }
            }
        };

        let on_scroll = Closure::<dyn FnMut()>::new({
            let schedule = schedule.clone();
            move || schedule()
        });
        let on_resize = Closure::<dyn FnMut()>::new(move || schedule());
        let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

        recompute();

        on_cleanup(move || {
            if let Some(win) = web_sys::window() {
                let _ = win
                    .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                let _ = win
                    .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                if let Some(handle) = frame.get() {
                    let _ = win.cancel_animation_frame(handle);
                }
            }
            drop(tick);
        });
    });
}

/// Current viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
