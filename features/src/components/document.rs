//! Standalone HTML page around the section, for static rendering.

use leptos::prelude::*;

use super::FeaturesSection;
use crate::content::FeatureContent;
use crate::overrides::ContentOverrides;
use crate::styles::FEATURES_CSS;
use crate::visibility::InView;

/// The complete HTML document: head with embedded styles, section in body.
#[component]
pub fn FeaturesDocument(overrides: ContentOverrides, in_view: InView) -> impl IntoView {
    let title = FeatureContent::resolve(&overrides).header.title;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{FEATURES_CSS}</style>
            </head>
            <body>
                <main>
                    <FeaturesSection overrides=overrides in_view=in_view />
                </main>
            </body>
        </html>
    }
}
