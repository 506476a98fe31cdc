//! Navigation dispatch for the call-to-action buttons.
//!
//! Components never route by themselves. A button hands its destination to
//! the [`Navigator`] found in context, verbatim, and forgets about it.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use features_section::{FeatureContent, Navigator};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&seen);
//! let navigator = Navigator::new(move |to| log.lock().unwrap().push(to.to_owned()));
//!
//! FeatureContent::default().cta.primary.activate(&navigator);
//! assert_eq!(*seen.lock().unwrap(), ["/"]);
//! ```

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::content::CtaLink;

/// Performs a navigation for a destination string.
#[derive(Clone)]
pub struct Navigator(Arc<dyn Fn(&str) + Send + Sync>);

impl Navigator {
    /// Wrap a dispatch function.
    pub fn new(dispatch: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(dispatch))
    }

    /// Logs the destination and does nothing else. Used outside a browser.
    pub fn detached() -> Self {
        Self::new(|destination| {
            tracing::debug!(destination, "no browser navigator, dropping navigation");
        })
    }

    /// Browser navigator: anchors scroll, external URLs load, everything else
    /// is pushed onto the history for the client-side router.
    #[cfg(feature = "csr")]
    pub fn smart() -> Self {
        Self::new(crate::browser::dispatch)
    }

    /// Hand `destination` to the dispatcher unchanged.
    pub fn navigate(&self, destination: &str) {
        tracing::debug!(destination, "navigating");
        (self.0)(destination);
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

/// Make `navigator` the dispatcher for sections rendered below this owner.
pub fn provide_navigator(navigator: Navigator) {
    provide_context(navigator);
}

/// Navigator from context, else the default for the current build.
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(default_navigator)
}

fn default_navigator() -> Navigator {
    #[cfg(feature = "csr")]
    {
        Navigator::smart()
    }

    #[cfg(not(feature = "csr"))]
    {
        Navigator::detached()
    }
}

impl CtaLink {
    /// Button activation: dispatch `href` exactly as configured.
    pub fn activate(&self, navigator: &Navigator) {
        navigator.navigate(&self.href);
    }
}

const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "//"];

/// How the browser navigator treats a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// `#id`: scroll to the element, `#` alone scrolls to the top
    Anchor(&'a str),
    /// Another origin or scheme: full page load
    External(&'a str),
    /// Same-origin path handled by the client-side router
    Route(&'a str),
}

impl<'a> Destination<'a> {
    /// Sort a destination string by its leading characters.
    pub fn classify(destination: &'a str) -> Self {
        if let Some(id) = destination.strip_prefix('#') {
            return Self::Anchor(id);
        }

        let external = EXTERNAL_PREFIXES.iter().any(|prefix| {
            destination
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        });
        if external { Self::External(destination) } else { Self::Route(destination) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording() -> (Navigator, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let navigator = Navigator::new(move |to| log.lock().unwrap().push(to.to_owned()));
        (navigator, seen)
    }

    #[test]
    fn activation_passes_href_verbatim() {
        let (navigator, seen) = recording();
        let link = CtaLink {
            label: "Talk to us".into(),
            href: "/contact".into(),
        };
        link.activate(&navigator);
        assert_eq!(*seen.lock().unwrap(), ["/contact"]);
    }

    #[test]
    fn context_navigator_wins() {
        let (navigator, seen) = recording();
        Owner::new().with(|| {
            provide_navigator(navigator);
            use_navigator().navigate("#features");
        });
        assert_eq!(*seen.lock().unwrap(), ["#features"]);
    }

    #[test]
    fn falls_back_without_context() {
        Owner::new().with(|| use_navigator().navigate("/"));
    }

    #[test]
    fn classifies_destinations() {
        assert_eq!(Destination::classify("#features"), Destination::Anchor("features"));
        assert_eq!(Destination::classify("#"), Destination::Anchor(""));
        assert_eq!(Destination::classify("/contact"), Destination::Route("/contact"));
        assert_eq!(Destination::classify("/"), Destination::Route("/"));
        assert_eq!(Destination::classify(""), Destination::Route(""));
        assert_eq!(Destination::classify("pricing#plans"), Destination::Route("pricing#plans"));
        assert_eq!(
            Destination::classify("https://example.com/demo"),
            Destination::External("https://example.com/demo")
        );
        assert_eq!(Destination::classify("HTTP://x.io"), Destination::External("HTTP://x.io"));
        assert_eq!(Destination::classify("mailto:sales@example.com"), Destination::External("mailto:sales@example.com"));
        assert_eq!(Destination::classify("//cdn.example.com"), Destination::External("//cdn.example.com"));
    }
}
