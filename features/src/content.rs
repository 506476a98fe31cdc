//! Section content: the default robotics copy and the overlay merge.
//!
//! [`FeatureContent`] is always total. Callers supply a partial
//! [`ContentOverrides`] and [`FeatureContent::resolve`] lays it over the
//! defaults. The merge is shallow and right-biased: a field present in the
//! overrides wins even when it is an empty string, an absent field keeps
//! its default.
//!
//! ```rust
//! use features_section::{ContentOverrides, FeatureContent, Field};
//!
//! let overrides = ContentOverrides::new().with(Field::Badge, "Now shipping");
//! let content = FeatureContent::resolve(&overrides);
//!
//! assert_eq!(content.header.badge, "Now shipping");
//! assert_eq!(content.header.title, "Advanced Robotics Technology");
//! ```

use crate::field::{FEATURE_COUNT, FeaturePart, Field};
use crate::overrides::ContentOverrides;

/// Header block copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderText {
    /// Small label above the title
    pub badge: String,
    /// First title line
    pub title: String,
    /// Second, highlighted title line
    pub title_highlight: String,
    /// Paragraph under the title
    pub description: String,
}

/// Copy and image for one feature card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureText {
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
    /// Label pinned over the image
    pub badge: String,
    /// Image URL
    pub image: String,
}

/// A button label and where it leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtaLink {
    /// Button text
    pub label: String,
    /// Destination handed to the navigator verbatim
    pub href: String,
}

/// Trailing call-to-action block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    /// Prompt above the buttons
    pub question: String,
    /// Filled button
    pub primary: CtaLink,
    /// Outlined button
    pub secondary: CtaLink,
}

/// Which of the two call-to-action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaKind {
    /// Filled button
    Primary,
    /// Outlined button
    Secondary,
}

impl CtaKind {
    /// Field holding the button label.
    pub const fn label_field(self) -> Field {
        match self {
            Self::Primary => Field::PrimaryCta,
            Self::Secondary => Field::SecondaryCta,
        }
    }

    /// Field holding the button destination.
    pub const fn href_field(self) -> Field {
        match self {
            Self::Primary => Field::PrimaryCtaHref,
            Self::Secondary => Field::SecondaryCtaHref,
        }
    }

    /// CSS classes for the button.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-outline",
        }
    }
}

/// The complete, merged content of the section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureContent {
    /// Header block
    pub header: HeaderText,
    /// The nine cards in display order
    pub features: [FeatureText; FEATURE_COUNT],
    /// Call-to-action block
    pub cta: CallToAction,
}

// (title, description, badge, image) per card
const DEFAULT_FEATURES: [(&str, &str, &str, &str); FEATURE_COUNT] = [
    (
        "AI-Powered Automation",
        "Intelligent robots that learn and adapt to optimize workflows with machine learning algorithms.",
        "AI",
        "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Industrial Grade Security",
        "Military-grade encryption and secure communication protocols for industrial environments.",
        "Security",
        "https://images.unsplash.com/photo-1518709268805-4e9042af2176?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Mobile Control Interface",
        "Control and monitor your robotic fleet from anywhere with our advanced mobile application.",
        "Mobile",
        "https://images.unsplash.com/photo-1559827260-dc66d52bef19?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Multi-Robot Coordination",
        "Seamlessly coordinate multiple robots across different locations and production lines.",
        "Coordination",
        "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Real-Time Analytics",
        "Monitor performance, efficiency, and predictive maintenance with advanced analytics dashboard.",
        "Analytics",
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Custom Programming",
        "Program custom behaviors and workflows to match your specific operational requirements.",
        "Programming",
        "https://images.unsplash.com/photo-1518709268805-4e9042af2176?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "System Integration",
        "Seamlessly integrate with existing ERP, MES, and industrial control systems.",
        "Integration",
        "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "24/7 Technical Support",
        "Round-the-clock technical support from robotics engineers and automation specialists.",
        "Support",
        "https://images.unsplash.com/photo-1559136555-9303baea8ebd?q=80&w=400&auto=format&fit=crop",
    ),
    (
        "Data Protection",
        "Enterprise-grade data protection with encrypted storage and secure cloud backup.",
        "Privacy",
        "https://images.unsplash.com/photo-1563206767-5b18f218e8de?q=80&w=400&auto=format&fit=crop",
    ),
];

impl Default for FeatureContent {
    fn default() -> Self {
        Self {
            header: HeaderText {
                badge: "Robotic Solutions".into(),
                title: "Advanced Robotics Technology".into(),
                title_highlight: "Built for the Future".into(),
                description: "Transform your operations with cutting-edge robotic solutions designed for manufacturing, logistics, and automation industries.".into(),
            },
            features: DEFAULT_FEATURES.map(|(title, description, badge, image)| FeatureText {
                title: title.into(),
                description: description.into(),
                badge: badge.into(),
                image: image.into(),
            }),
            cta: CallToAction {
                question: "Ready to revolutionize your operations with robotics?".into(),
                primary: CtaLink {
                    label: "Start Free Consultation".into(),
                    href: "/".into(),
                },
                secondary: CtaLink {
                    label: "View Demo".into(),
                    href: "/".into(),
                },
            },
        }
    }
}

impl FeatureContent {
    /// Lay `overrides` over the default content.
    pub fn resolve(overrides: &ContentOverrides) -> Self {
        merge(&Self::default(), overrides)
    }

    /// Current value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Badge => &self.header.badge,
            Field::MainTitle => &self.header.title,
            Field::MainTitleHighlight => &self.header.title_highlight,
            Field::MainDescription => &self.header.description,
            Field::Feature(slot, part) => {
                let card = &self.features[slot.index()];
                match part {
                    FeaturePart::Title => &card.title,
                    FeaturePart::Description => &card.description,
                    FeaturePart::Badge => &card.badge,
                    FeaturePart::Image => &card.image,
                }
            }
            Field::CtaQuestion => &self.cta.question,
            Field::PrimaryCta => &self.cta.primary.label,
            Field::PrimaryCtaHref => &self.cta.primary.href,
            Field::SecondaryCta => &self.cta.secondary.label,
            Field::SecondaryCtaHref => &self.cta.secondary.href,
        }
    }

    /// Every field with its current value, in [`Field::all`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::all().map(move |field| (field, self.get(field)))
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Badge => &mut self.header.badge,
            Field::MainTitle => &mut self.header.title,
            Field::MainTitleHighlight => &mut self.header.title_highlight,
            Field::MainDescription => &mut self.header.description,
            Field::Feature(slot, part) => {
                let card = &mut self.features[slot.index()];
                match part {
                    FeaturePart::Title => &mut card.title,
                    FeaturePart::Description => &mut card.description,
                    FeaturePart::Badge => &mut card.badge,
                    FeaturePart::Image => &mut card.image,
                }
            }
            Field::CtaQuestion => &mut self.cta.question,
            Field::PrimaryCta => &mut self.cta.primary.label,
            Field::PrimaryCtaHref => &mut self.cta.primary.href,
            Field::SecondaryCta => &mut self.cta.secondary.label,
            Field::SecondaryCtaHref => &mut self.cta.secondary.href,
        }
    }
}

/// Shallow right-biased overlay of `overrides` onto `base`.
pub fn merge(base: &FeatureContent, overrides: &ContentOverrides) -> FeatureContent {
    let mut merged = base.clone();
    for (field, value) in overrides.iter() {
        value.clone_into(merged.field_mut(field));
    }
    tracing::debug!(overridden = overrides.len(), "resolved feature content");
    merged
}
