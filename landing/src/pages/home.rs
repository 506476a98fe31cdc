// Home page - intro + features section
use features_section::{ContentOverrides, FeaturesSection};
use leptos::prelude::*;

// Site-specific copy on top of the section defaults
const CONTENT_OVERRIDES: &str = include_str!("../../content/features.json");

/// Parse site copy; a broken file falls back to the section defaults.
fn load_overrides(json: &str) -> ContentOverrides {
    ContentOverrides::from_json_str(json).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default features content");
        ContentOverrides::default()
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let overrides = load_overrides(CONTENT_OVERRIDES);

    view! {
        <section class="intro">
            <h1>"Robotic Solutions"</h1>
            <a href="#features">"Explore features ↓"</a>
        </section>
        <FeaturesSection overrides=overrides />
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="intro">
            <h1>"Page not found"</h1>
            <a href="/">"Back home"</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use features_section::Field;

    #[test]
    fn bundled_content_parses() {
        let overrides = load_overrides(CONTENT_OVERRIDES);
        assert_eq!(overrides.get(Field::PrimaryCtaHref), Some("/contact"));
        assert_eq!(overrides.get(Field::SecondaryCtaHref), Some("#features"));
    }

    #[test]
    fn broken_content_falls_back_to_defaults() {
        assert!(load_overrides("{ not json").is_empty());
    }
}
