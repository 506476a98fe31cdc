//! Leptos UI components for the features section.
//!
//! # Component Hierarchy
//!
//! ```text
//! FeaturesDocument (static pages only)
//! └── FeaturesSection
//!     ├── SectionHeader        badge, title, highlight, description
//!     ├── FeatureCard x 9      image, badge, icon, title, description
//!     └── CallToActionBlock    question
//!         └── CtaButton x 2    primary / secondary
//! ```
//!
//! # Usage
//!
//! In a client-side app, mount the section and let it observe itself:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use features_section::{ContentOverrides, Field, FeaturesSection};
//!
//! let overrides = ContentOverrides::new().with(Field::PrimaryCtaHref, "/contact");
//! view! { <FeaturesSection overrides=overrides /> }
//! ```

mod card;
mod document;
pub mod icons;
mod section;

pub use card::FeatureCard;
pub use document::FeaturesDocument;
pub use icons::Icon;
pub use section::{FeaturesSection, SECTION_ID};
