//! A single feature card.

use leptos::prelude::*;

use super::Icon;
use super::icons::feature_icon_path;
use crate::field::{FeaturePart, Field};
use crate::items::FeatureItem;
use crate::motion::Reveal;
use crate::visibility::InView;

/// Image, badge, icon, title and description for one grid position.
///
/// Every text node and the image carry their flat field name so editing
/// tooling can address them.
#[component]
pub fn FeatureCard(item: FeatureItem, in_view: InView) -> impl IntoView {
    let FeatureItem {
        slot,
        icon,
        title,
        description,
        badge,
        image,
    } = item;
    let reveal = Reveal::card(slot.index());
    let marker = move |part| Field::Feature(slot, part).to_string();
    let alt = title.clone();

    view! {
        <article
            class="feature-card"
            data-reveal=move || reveal.phase(in_view.get()).as_str()
            style=move || reveal.style(in_view.get())
        >
            <div class="feature-card-glow"></div>
            <div class="feature-media">
                <img
                    src=image
                    alt=alt
                    loading="lazy"
                    data-editable-src=marker(FeaturePart::Image)
                />
                <div class="feature-media-shade"></div>
                <span class="feature-badge">
                    <span data-editable=marker(FeaturePart::Badge)>{badge}</span>
                </span>
            </div>
            <header class="feature-card-header">
                <div class="feature-icon" data-icon=icon.name()>
                    <Icon path=feature_icon_path(icon) class="feature-icon-svg" />
                </div>
                <h3 class="feature-title">
                    <span data-editable=marker(FeaturePart::Title)>{title}</span>
                </h3>
            </header>
            <p class="feature-description">
                <span data-editable=marker(FeaturePart::Description)>{description}</span>
            </p>
        </article>
    }
}
