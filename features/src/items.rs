//! Feature card view-models.
//!
//! [`build_feature_list`] turns the merged content into exactly nine
//! [`FeatureItem`]s. Card N takes the `featureN*` fields; its icon comes
//! from the fixed [`FEATURE_ICONS`] table and is not configurable.

use crate::content::FeatureContent;
use crate::field::{FEATURE_COUNT, FeatureSlot};

/// Symbolic icon shown on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    /// Lightning bolt
    Zap,
    /// Shield
    Shield,
    /// Phone
    Smartphone,
    /// Globe
    Globe,
    /// Bar chart
    BarChart,
    /// Paint palette
    Palette,
    /// Angle brackets
    Code,
    /// Headset
    Headphones,
    /// Padlock
    Lock,
}

impl FeatureIcon {
    /// Stable identifier, rendered as `data-icon`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zap => "zap",
            Self::Shield => "shield",
            Self::Smartphone => "smartphone",
            Self::Globe => "globe",
            Self::BarChart => "bar-chart",
            Self::Palette => "palette",
            Self::Code => "code",
            Self::Headphones => "headphones",
            Self::Lock => "lock",
        }
    }
}

/// Icon per card position.
pub const FEATURE_ICONS: [FeatureIcon; FEATURE_COUNT] = [
    FeatureIcon::Zap,
    FeatureIcon::Shield,
    FeatureIcon::Smartphone,
    FeatureIcon::Globe,
    FeatureIcon::BarChart,
    FeatureIcon::Palette,
    FeatureIcon::Code,
    FeatureIcon::Headphones,
    FeatureIcon::Lock,
];

/// Display data for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    /// Position in the grid
    pub slot: FeatureSlot,
    /// Fixed icon for the position
    pub icon: FeatureIcon,
    /// Card heading
    pub title: String,
    /// Body copy
    pub description: String,
    /// Label over the image
    pub badge: String,
    /// Image URL
    pub image: String,
}

/// The nine cards, in display order.
pub fn build_feature_list(content: &FeatureContent) -> [FeatureItem; FEATURE_COUNT] {
    std::array::from_fn(|index| {
        let text = &content.features[index];
        FeatureItem {
            slot: FeatureSlot::ALL[index],
            icon: FEATURE_ICONS[index],
            title: text.title.clone(),
            description: text.description.clone(),
            badge: text.badge.clone(),
            image: text.image.clone(),
        }
    })
}
