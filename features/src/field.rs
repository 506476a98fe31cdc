//! Typed names for every editable content field.
//!
//! Content-editing tooling addresses fields by flat names such as
//! `feature3Title` or `primaryCTAHref`. [`Field`] is the typed form of those
//! names. It converts to and from the flat spelling and enumerates the full
//! recognised set, so the flat naming lives only at the boundary while the
//! content model itself stays a native array of nine records.
//!
//! ```rust
//! use features_section::{Field, FeaturePart, FeatureSlot};
//!
//! let field: Field = "feature3Title".parse().unwrap();
//! assert_eq!(field, Field::Feature(FeatureSlot::new(2).unwrap(), FeaturePart::Title));
//! assert_eq!(field.to_string(), "feature3Title");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FieldNameError;

/// Number of feature cards in the section.
pub const FEATURE_COUNT: usize = 9;

/// Position of a feature card, always in `0..FEATURE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureSlot(u8);

impl FeatureSlot {
    /// Every slot in display order.
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Slot for a zero-based index, `None` past the last card.
    pub const fn new(index: usize) -> Option<Self> {
        if index < FEATURE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based position.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based number used in flat field names (`feature1` .. `feature9`).
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    /// Iterator over [`Self::ALL`].
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

/// One of the four per-card text fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeaturePart {
    /// Card heading
    Title,
    /// Card body text
    Description,
    /// Short label over the image
    Badge,
    /// Image URL
    Image,
}

impl FeaturePart {
    /// Parts in flat-name order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Description, Self::Badge, Self::Image];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Badge => "Badge",
            Self::Image => "Image",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.suffix() == suffix)
    }
}

/// A single recognised content field.
///
/// The derived ordering matches [`Field::all`]: header fields, then the nine
/// cards (title, description, badge, image each), then the call to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Header badge (`badge`)
    Badge,
    /// Header title (`mainTitle`)
    MainTitle,
    /// Highlighted second title line (`mainTitleHighlight`)
    MainTitleHighlight,
    /// Header paragraph (`mainDescription`)
    MainDescription,
    /// One field of one card (`feature{1..9}{Title,Description,Badge,Image}`)
    Feature(FeatureSlot, FeaturePart),
    /// Text above the buttons (`ctaQuestion`)
    CtaQuestion,
    /// Primary button label (`primaryCTA`)
    PrimaryCta,
    /// Primary button destination (`primaryCTAHref`)
    PrimaryCtaHref,
    /// Secondary button label (`secondaryCTA`)
    SecondaryCta,
    /// Secondary button destination (`secondaryCTAHref`)
    SecondaryCtaHref,
}

const HEADER_FIELDS: [(Field, &str); 4] = [
    (Field::Badge, "badge"),
    (Field::MainTitle, "mainTitle"),
    (Field::MainTitleHighlight, "mainTitleHighlight"),
    (Field::MainDescription, "mainDescription"),
];

const CTA_FIELDS: [(Field, &str); 5] = [
    (Field::CtaQuestion, "ctaQuestion"),
    (Field::PrimaryCta, "primaryCTA"),
    (Field::PrimaryCtaHref, "primaryCTAHref"),
    (Field::SecondaryCta, "secondaryCTA"),
    (Field::SecondaryCtaHref, "secondaryCTAHref"),
];

impl Field {
    /// Total number of recognised fields.
    pub const COUNT: usize = HEADER_FIELDS.len() + FEATURE_COUNT * FeaturePart::ALL.len() + CTA_FIELDS.len();

    /// Every recognised field, in flat-name order.
    pub fn all() -> impl Iterator<Item = Self> {
        let cards = FeatureSlot::all()
            .flat_map(|slot| FeaturePart::ALL.into_iter().map(move |part| Self::Feature(slot, part)));

        HEADER_FIELDS
            .into_iter()
            .map(|(field, _)| field)
            .chain(cards)
            .chain(CTA_FIELDS.into_iter().map(|(field, _)| field))
    }

    /// Whether the field holds a URL or route rather than display text.
    pub const fn is_link(self) -> bool {
        matches!(
            self,
            Self::Feature(_, FeaturePart::Image) | Self::PrimaryCtaHref | Self::SecondaryCtaHref
        )
    }

    fn fixed_name(self) -> Option<&'static str> {
        HEADER_FIELDS
            .iter()
            .chain(CTA_FIELDS.iter())
            .find(|(field, _)| *field == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature(slot, part) => write!(f, "feature{}{}", slot.number(), part.suffix()),
            other => f.write_str(other.fixed_name().unwrap_or_default()),
        }
    }
}

impl FromStr for Field {
    type Err = FieldNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some((field, _)) = HEADER_FIELDS
            .iter()
            .chain(CTA_FIELDS.iter())
            .find(|(_, fixed)| *fixed == name)
        {
            return Ok(*field);
        }

        parse_card_field(name).ok_or_else(|| FieldNameError { name: name.to_owned() })
    }
}

/// `feature<N><Part>` with N in 1..=9 and no leading zero.
fn parse_card_field(name: &str) -> Option<Field> {
    let rest = name.strip_prefix("feature")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (number, suffix) = rest.split_at(digits);
    if number.starts_with('0') {
        return None;
    }

    let slot = FeatureSlot::new(number.parse::<usize>().ok()?.checked_sub(1)?)?;
    let part = FeaturePart::from_suffix(suffix)?;
    Some(Field::Feature(slot, part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_recognised_field() {
        assert_eq!(Field::COUNT, 45);
        assert_eq!(Field::all().count(), Field::COUNT);
    }

    #[test]
    fn all_is_sorted_and_unique() {
        let fields: Vec<Field> = Field::all().collect();
        let mut sorted = fields.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(fields, sorted);
    }

    #[test]
    fn names_round_trip() {
        for field in Field::all() {
            let name = field.to_string();
            assert_eq!(name.parse::<Field>(), Ok(field), "{name}");
        }
    }

    #[test]
    fn uses_external_cta_spelling() {
        assert_eq!(Field::PrimaryCta.to_string(), "primaryCTA");
        assert_eq!(Field::SecondaryCtaHref.to_string(), "secondaryCTAHref");
        let ninth = FeatureSlot::new(8).unwrap();
        assert_eq!(Field::Feature(ninth, FeaturePart::Image).to_string(), "feature9Image");
    }

    #[test]
    fn rejects_unknown_names() {
        for name in [
            "",
            "feature",
            "feature0Title",
            "feature10Title",
            "feature01Title",
            "feature3title",
            "feature3",
            "primaryCta",
            "Badge",
        ] {
            assert_eq!(
                name.parse::<Field>(),
                Err(FieldNameError { name: name.to_owned() }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn links_are_images_and_hrefs() {
        let links: Vec<String> = Field::all().filter(|f| f.is_link()).map(|f| f.to_string()).collect();
        assert_eq!(links.len(), FEATURE_COUNT + 2);
        assert!(links.contains(&"feature1Image".to_owned()));
        assert!(links.contains(&"primaryCTAHref".to_owned()));
        assert!(!links.contains(&"primaryCTA".to_owned()));
    }

    #[test]
    fn slot_bounds() {
        assert!(FeatureSlot::new(FEATURE_COUNT).is_none());
        let last = FeatureSlot::new(FEATURE_COUNT - 1).unwrap();
        assert_eq!(last.number(), 9);
        assert_eq!(FeatureSlot::all().count(), FEATURE_COUNT);
    }
}
