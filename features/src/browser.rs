//! Browser-side collaborators (`csr` feature).
//!
//! Viewport observation for [`InView`] and destination dispatch for the
//! smart [`Navigator`](crate::Navigator). Failures here are logged and
//! degrade gracefully; they never reach the components.

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::navigation::Destination;
use crate::visibility::InView;

/// Latch that flips the first time `target` intersects the viewport by at
/// least `threshold`. The observer disconnects after that first hit.
pub fn use_in_view(target: NodeRef<Div>, threshold: f64) -> InView {
    let in_view = InView::new();

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if in_view.get_untracked() {
            return;
        }

        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if entered {
                    in_view.mark_seen();
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                // Owned by the observer from here on.
                on_intersect.forget();
            }
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable, revealing features immediately");
                in_view.mark_seen();
            }
        }
    });

    in_view
}

/// Smart navigation for one destination string.
pub fn dispatch(destination: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(destination, "no window, navigation dropped");
        return;
    };

    match Destination::classify(destination) {
        Destination::Anchor("") => window.scroll_to_with_x_and_y(0.0, 0.0),
        Destination::Anchor(id) => scroll_to_anchor(&window, id),
        Destination::External(url) => load(&window, url),
        Destination::Route(path) => push_route(&window, path),
    }
}

fn scroll_to_anchor(window: &Window, id: &str) {
    match window.document().and_then(|document| document.get_element_by_id(id)) {
        Some(element) => element.scroll_into_view(),
        None => tracing::warn!(anchor = id, "navigation anchor not found"),
    }
}

fn load(window: &Window, url: &str) {
    if let Err(err) = window.location().set_href(url) {
        tracing::warn!(url, ?err, "failed to load external destination");
    }
}

// leptos_router follows popstate, so a pushed entry plus a synthetic
// popstate is a client-side route change.
fn push_route(window: &Window, path: &str) {
    let routed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)))
        .and_then(|()| Event::new("popstate"))
        .and_then(|event| window.dispatch_event(&event));

    if let Err(err) = routed {
        tracing::warn!(path, ?err, "history push failed, falling back to a page load");
        load(window, path);
    }
}
