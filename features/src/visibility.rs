//! Trigger-once visibility.
//!
//! [`InView`] is a reactive latch: it starts `false`, may flip to `true`
//! once, and never flips back. Components only read it; the observer (or a
//! static renderer) is the only writer.

use leptos::html::Div;
use leptos::prelude::*;

/// Fraction of the section that must intersect the viewport to count as seen.
pub const IN_VIEW_THRESHOLD: f64 = 0.1;

/// One-way "has been seen" flag.
#[derive(Clone, Copy, Debug)]
pub struct InView(RwSignal<bool>);

impl InView {
    /// Not seen yet.
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Already seen, e.g. for static rendering of the settled page.
    pub fn seen() -> Self {
        Self(RwSignal::new(true))
    }

    /// Seen or not, from a plain flag.
    pub fn with_state(visible: bool) -> Self {
        if visible { Self::seen() } else { Self::new() }
    }

    /// Tracked read, re-runs the caller when the latch flips.
    pub fn get(self) -> bool {
        self.0.get()
    }

    /// Current value without subscribing.
    pub fn get_untracked(self) -> bool {
        self.0.get_untracked()
    }

    /// Flip to seen. Later calls are no-ops and there is no way back.
    pub fn mark_seen(self) {
        if !self.0.get_untracked() {
            tracing::trace!("features section entered the viewport");
            self.0.set(true);
        }
    }
}

impl Default for InView {
    fn default() -> Self {
        Self::new()
    }
}

/// Latch for `target`, driven by an `IntersectionObserver` in the browser.
///
/// Without the `csr` feature nothing observes the DOM and the latch stays
/// unseen, matching the first paint of the live page.
pub fn observe_in_view(target: NodeRef<Div>) -> InView {
    #[cfg(feature = "csr")]
    {
        crate::browser::use_in_view(target, IN_VIEW_THRESHOLD)
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
        InView::new()
    }
}
