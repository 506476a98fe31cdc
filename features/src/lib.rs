//! # features-section
//!
//! The "Features" section of the robotics landing page, as Leptos components.
//!
//! A caller supplies partial content ([`ContentOverrides`]), which is laid
//! over the default robotics copy ([`FeatureContent`]). The merged content
//! becomes nine feature cards ([`build_feature_list`]), a header and a
//! two-button call to action. Entrance animations wait for a trigger-once
//! visibility latch ([`InView`]); buttons dispatch through a [`Navigator`].
//!
//! ## Quick Start
//!
//! ```rust
//! use features_section::{render_section, ContentOverrides, Field};
//!
//! let overrides = ContentOverrides::new().with(Field::PrimaryCtaHref, "/contact");
//! let html = render_section(&overrides, true);
//!
//! assert!(html.contains(r#"data-href="/contact""#));
//! assert!(html.contains("Robotic Solutions"));
//! ```
//!
//! ## Architecture
//!
//! - [`field`] - typed flat field names (`feature3Title`, `primaryCTAHref`, ...)
//! - [`content`] / [`overrides`] - total content, partial overrides, the merge
//! - [`items`] - nine card view-models and the fixed icon table
//! - [`motion`] / [`visibility`] - reveal timing and the one-way latch
//! - [`navigation`] - dispatcher for button destinations
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Features
//!
//! - `ssr` (default) - static rendering via [`render_section`] / [`render_document`]
//! - `csr` - `IntersectionObserver` visibility and browser navigation
//!
//! ---
//!
//! Developed with 💀 by The Robotic Solutions Web Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(feature = "csr")]
mod browser;
pub mod components;
pub mod content;
pub mod error;
pub mod field;
pub mod items;
pub mod motion;
pub mod navigation;
pub mod overrides;
pub mod styles;
pub mod visibility;

pub use components::{FeatureCard, FeaturesDocument, FeaturesSection, SECTION_ID};
pub use content::{CallToAction, CtaKind, CtaLink, FeatureContent, FeatureText, HeaderText, merge};
pub use error::{ContentError, FieldNameError};
pub use field::{FEATURE_COUNT, FeaturePart, FeatureSlot, Field};
pub use items::{FEATURE_ICONS, FeatureIcon, FeatureItem, build_feature_list};
pub use motion::{Reveal, RevealPhase};
pub use navigation::{Destination, Navigator, provide_navigator, use_navigator};
pub use overrides::ContentOverrides;
pub use visibility::{IN_VIEW_THRESHOLD, InView, observe_in_view};

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the section markup alone.
///
/// `visible` selects the animation state: `false` is the first paint before
/// the section scrolls into view, `true` the settled state after it.
///
/// # Example
///
/// ```rust
/// use features_section::{render_section, ContentOverrides};
///
/// let html = render_section(&ContentOverrides::new(), false);
/// assert!(html.contains(r#"data-reveal="hidden""#));
/// ```
#[cfg(feature = "ssr")]
pub fn render_section(overrides: &ContentOverrides, visible: bool) -> String {
    Owner::new().with(|| {
        let in_view = InView::with_state(visible);
        view! { <FeaturesSection overrides=overrides.clone() in_view=in_view /> }.to_html()
    })
}

/// Render a complete HTML page with embedded styles.
///
/// # Example
///
/// ```rust
/// use features_section::{render_document, ContentOverrides};
///
/// let html = render_document(&ContentOverrides::new(), true);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_document(overrides: &ContentOverrides, visible: bool) -> String {
    let html = Owner::new().with(|| {
        let in_view = InView::with_state(visible);
        view! { <FeaturesDocument overrides=overrides.clone() in_view=in_view /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    /// Text inside the element carrying `data-editable="<name>"`.
    fn editable_text<'a>(html: &'a str, name: &str) -> Option<&'a str> {
        let marker = format!(r#"data-editable="{name}">"#);
        let start = html.find(&marker)? + marker.len();
        let len = html[start..].find('<')?;
        Some(&html[start..start + len])
    }

    #[test]
    fn renders_document_shell() {
        let html = render_document(&ContentOverrides::new(), false);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<title>Advanced Robotics Technology</title>"));
        assert!(html.contains(r#"id="features""#));
    }

    #[test]
    fn renders_default_header() {
        let html = render_section(&ContentOverrides::new(), false);

        assert_eq!(editable_text(&html, "badge"), Some("Robotic Solutions"));
        assert_eq!(editable_text(&html, "mainTitle"), Some("Advanced Robotics Technology"));
        assert_eq!(editable_text(&html, "mainTitleHighlight"), Some("Built for the Future"));
        assert!(html.contains(r#"data-editable="features""#));
    }

    #[test]
    fn every_text_field_is_addressable() {
        let html = render_section(&ContentOverrides::new(), true);
        let defaults = FeatureContent::default();

        for field in Field::all().filter(|field| !field.is_link()) {
            let name = field.to_string();
            assert_eq!(editable_text(&html, &name), Some(defaults.get(field)), "{name}");
        }
    }

    #[test]
    fn every_image_and_href_is_addressable() {
        let html = render_section(&ContentOverrides::new(), true);

        for slot in FeatureSlot::all() {
            let marker = format!(r#"data-editable-src="feature{}Image""#, slot.number());
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
        }
        assert!(html.contains(r#"data-editable-href="primaryCTAHref""#));
        assert!(html.contains(r#"data-editable-href="secondaryCTAHref""#));
    }

    #[test]
    fn default_images_are_rendered() {
        let html = render_section(&ContentOverrides::new(), false);

        for text in &FeatureContent::default().features {
            let escaped = text.image.replace('&', "&amp;");
            assert!(html.contains(&format!(r#"src="{escaped}""#)), "{}", text.image);
        }
    }

    #[test]
    fn custom_third_title() {
        let overrides = ContentOverrides::from_json_str(r#"{"feature3Title": "Custom Title"}"#).unwrap();
        let html = render_section(&overrides, false);

        assert_eq!(editable_text(&html, "feature3Title"), Some("Custom Title"));
        assert_eq!(editable_text(&html, "feature1Title"), Some("AI-Powered Automation"));
        assert!(!html.contains("Mobile Control Interface"));
    }

    #[test]
    fn cards_render_in_position_order() {
        let html = render_section(&ContentOverrides::new(), true);
        let positions: Vec<usize> = FeatureSlot::all()
            .map(|slot| {
                let marker = format!(r#"data-editable="feature{}Title""#, slot.number());
                html.find(&marker).unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn icons_follow_the_position_table() {
        let html = render_section(&ContentOverrides::new(), true);
        let mut from = 0;
        for icon in FEATURE_ICONS {
            let marker = format!(r#"data-icon="{}""#, icon.name());
            let at = html[from..].find(&marker).unwrap();
            from += at + marker.len();
        }
    }

    #[test]
    fn hidden_before_visible() {
        let html = render_section(&ContentOverrides::new(), false);

        // header + nine cards + call to action
        assert_eq!(html.matches(r#"data-reveal="hidden""#).count(), 11);
        assert_eq!(html.matches(r#"data-reveal="settled""#).count(), 0);
        assert!(html.contains("opacity:0;transform:translateY(30px)"));
    }

    #[test]
    fn settled_after_visible() {
        let html = render_section(&ContentOverrides::new(), true);

        assert_eq!(html.matches(r#"data-reveal="settled""#).count(), 11);
        assert_eq!(html.matches(r#"data-reveal="hidden""#).count(), 0);
        assert!(!html.contains("opacity:0"));
    }

    #[test]
    fn settled_render_is_idempotent() {
        let overrides = ContentOverrides::new().with(Field::CtaQuestion, "Questions?");
        assert_eq!(render_section(&overrides, true), render_section(&overrides, true));
    }

    #[test]
    fn cta_buttons_carry_destinations() {
        let overrides = ContentOverrides::new()
            .with(Field::PrimaryCtaHref, "/contact")
            .with(Field::SecondaryCta, "Watch the demo");
        let html = render_section(&overrides, true);

        assert!(html.contains(r#"data-href="/contact""#));
        assert!(html.contains(r#"data-href="/""#));
        assert_eq!(editable_text(&html, "primaryCTA"), Some("Start Free Consultation"));
        assert_eq!(editable_text(&html, "secondaryCTA"), Some("Watch the demo"));
    }
}
