//! The features section: header, card grid and call to action.

use leptos::html::Div;
use leptos::prelude::*;

use super::FeatureCard;
use crate::content::{CallToAction, CtaKind, CtaLink, FeatureContent, HeaderText};
use crate::field::Field;
use crate::items::build_feature_list;
use crate::motion::Reveal;
use crate::navigation::{Navigator, use_navigator};
use crate::overrides::ContentOverrides;
use crate::visibility::{InView, observe_in_view};

/// Anchor id of the section root.
pub const SECTION_ID: &str = "features";

/// Robotics features section.
///
/// Content is `overrides` laid over the defaults. Entrance animations wait
/// for `in_view`; when it is not supplied the section observes its own
/// container. Buttons dispatch through the navigator in context.
#[component]
pub fn FeaturesSection(
    /// Partial content merged over the defaults
    #[prop(optional, into)]
    overrides: ContentOverrides,
    /// Externally driven visibility latch
    #[prop(optional)]
    in_view: Option<InView>,
) -> impl IntoView {
    let content = FeatureContent::resolve(&overrides);
    let items = build_feature_list(&content);
    let navigator = use_navigator();
    let container = NodeRef::<Div>::new();
    let in_view = in_view.unwrap_or_else(|| observe_in_view(container));
    let FeatureContent { header, cta, .. } = content;

    let cards = items
        .into_iter()
        .map(|item| view! { <FeatureCard item=item in_view=in_view /> })
        .collect_view();

    view! {
        <section id=SECTION_ID class="features-section" data-editable="features">
            <div class="features-container" node_ref=container>
                <SectionHeader header=header in_view=in_view />
                <div class="features-grid">{cards}</div>
                <CallToActionBlock cta=cta in_view=in_view navigator=navigator />
            </div>
        </section>
    }
}

#[component]
fn SectionHeader(header: HeaderText, in_view: InView) -> impl IntoView {
    let reveal = Reveal::HEADER;
    let HeaderText {
        badge,
        title,
        title_highlight,
        description,
    } = header;

    view! {
        <div
            class="features-header"
            data-reveal=move || reveal.phase(in_view.get()).as_str()
            style=move || reveal.style(in_view.get())
        >
            <span class="features-badge">
                <span data-editable=Field::Badge.to_string()>{badge}</span>
            </span>
            <h2 class="features-title">
                <span data-editable=Field::MainTitle.to_string()>{title}</span>
                <span class="features-title-highlight">
                    <span data-editable=Field::MainTitleHighlight.to_string()>{title_highlight}</span>
                </span>
            </h2>
            <p class="features-description">
                <span data-editable=Field::MainDescription.to_string()>{description}</span>
            </p>
        </div>
    }
}

#[component]
fn CallToActionBlock(cta: CallToAction, in_view: InView, navigator: Navigator) -> impl IntoView {
    let reveal = Reveal::CTA;
    let CallToAction {
        question,
        primary,
        secondary,
    } = cta;

    view! {
        <div
            class="features-cta"
            data-reveal=move || reveal.phase(in_view.get()).as_str()
            style=move || reveal.style(in_view.get())
        >
            <p class="features-cta-question">
                <span data-editable=Field::CtaQuestion.to_string()>{question}</span>
            </p>
            <div class="features-cta-actions">
                <CtaButton link=primary kind=CtaKind::Primary navigator=navigator.clone() />
                <CtaButton link=secondary kind=CtaKind::Secondary navigator=navigator />
            </div>
        </div>
    }
}

#[component]
fn CtaButton(link: CtaLink, kind: CtaKind, navigator: Navigator) -> impl IntoView {
    let label = link.label.clone();
    let href = link.href.clone();
    let on_click = move |_| link.activate(&navigator);

    view! {
        <button
            type="button"
            class=kind.class()
            data-editable-href=kind.href_field().to_string()
            data-href=href
            on:click=on_click
        >
            <span data-editable=kind.label_field().to_string()>{label}</span>
        </button>
    }
}
