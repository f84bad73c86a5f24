//! Window and element observation helpers shared by the scroll-driven
//! components. Each returns a teardown closure suitable as an effect
//! destructor.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Registers a window scroll listener that receives the current scroll
/// offset. The handler is also invoked once immediately so components start
/// out consistent with a restored scroll position.
pub fn listen_to_scroll(handler: impl Fn(f64) + 'static) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    if let Ok(y) = window.scroll_y() {
        handler(y);
    }
    let callback = Closure::<dyn Fn()>::new(move || {
        if let Some(win) = web_sys::window() {
            if let Ok(y) = win.scroll_y() {
                handler(y);
            }
        }
    });
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .unwrap();
    Box::new(move || {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    })
}

/// Fires `on_visible` the first time the referenced element intersects the
/// viewport at the given threshold, then stops observing it.
pub fn observe_once(node: &NodeRef, threshold: f64, on_visible: Callback<()>) -> Box<dyn FnOnce()> {
    let Some(element) = node.cast::<Element>() else {
        return Box::new(|| ());
    };
    let fallback = on_visible.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible.emit(());
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            // Without observer support the content should still show up.
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            fallback.emit(());
            Box::new(|| ())
        }
    }
}
