//! SVG icon component and the card icon set.
//!
//! Paths are drawn for a 256x256 viewBox in the Phosphor style (Regular
//! weight) and rendered with `fill-rule="evenodd"` so inner outlines cut
//! holes.

use leptos::prelude::*;

use crate::items::FeatureIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path fill-rule="evenodd"></path>
        </svg>
    }
}

// =============================================================================
// Card icons
// =============================================================================

/// SVG path data for a card icon.
pub const fn feature_icon_path(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Zap => ICON_LIGHTNING,
        FeatureIcon::Shield => ICON_SHIELD,
        FeatureIcon::Smartphone => ICON_DEVICE_MOBILE,
        FeatureIcon::Globe => ICON_GLOBE,
        FeatureIcon::BarChart => ICON_CHART_BAR,
        FeatureIcon::Palette => ICON_PALETTE,
        FeatureIcon::Code => ICON_CODE,
        FeatureIcon::Headphones => ICON_HEADPHONES,
        FeatureIcon::Lock => ICON_LOCK,
    }
}

/// Lightning bolt (automation)
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Shield (security)
pub const ICON_SHIELD: &str = "M208,40H48A16,16,0,0,0,32,56v56c0,52.72,25.52,84.67,46.93,102.19,23.06,18.86,46,25.26,47,25.53a8,8,0,0,0,4.2,0c1-.27,23.91-6.67,47-25.53C198.48,196.67,224,164.72,224,112V56A16,16,0,0,0,208,40Zm0,72c0,37.07-13.66,64.27-41.52,85.08A152.57,152.57,0,0,1,128,222.45a152.31,152.31,0,0,1-38.48-25.37C61.66,176.27,48,149.07,48,112V56H208Z";

/// Phone outline (mobile control)
pub const ICON_DEVICE_MOBILE: &str = "M176,16H80A24,24,0,0,0,56,40V216a24,24,0,0,0,24,24h96a24,24,0,0,0,24-24V40A24,24,0,0,0,176,16Zm8,200a8,8,0,0,1-8,8H80a8,8,0,0,1-8-8V40a8,8,0,0,1,8-8h96a8,8,0,0,1,8,8ZM116,60a12,12,0,1,1,12,12A12,12,0,0,1,116,60Z";

/// Globe with equator and meridian (coordination)
pub const ICON_GLOBE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,16a88,88,0,0,1,87.6,80H136V40.36C133.36,40.13,130.69,40,128,40ZM120,40.36V120H40.4A88.12,88.12,0,0,1,120,40.36ZM40.4,136H120v79.64A88.12,88.12,0,0,1,40.4,136ZM136,215.64V136h79.6A88.12,88.12,0,0,1,136,215.64Z";

/// Bar chart on an axis (analytics)
pub const ICON_CHART_BAR: &str = "M32,216V40H48V200H224v16ZM72,184V144H96v40Zm44,0V104h24v80Zm44,0V64h24V184Z";

/// Paint palette (custom programming)
pub const ICON_PALETTE: &str = "M128,24A104,104,0,0,0,24,128c0,57.44,46.56,104,96,104,17.67,0,24-12,24-24s-8-20-8-32,8-24,24-24h24c26.51,0,48-21.49,48-48C232,62.38,185.61,24,128,24ZM76,140a16,16,0,1,1,16-16A16,16,0,0,1,76,140Zm28-48a16,16,0,1,1,16-16A16,16,0,0,1,104,92Zm56,0a16,16,0,1,1,16-16A16,16,0,0,1,160,92Z";

/// Angle brackets with slash (integration)
pub const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

/// Headset (support)
pub const ICON_HEADPHONES: &str = "M128,32A104,104,0,0,0,24,136v56a24,24,0,0,0,24,24H64a24,24,0,0,0,24-24V152a24,24,0,0,0-24-24H40.36a88,88,0,0,1,175.28,0H192a24,24,0,0,0-24,24v40a24,24,0,0,0,24,24h16a24,24,0,0,0,24-24V136A104,104,0,0,0,128,32ZM64,144a8,8,0,0,1,8,8v40a8,8,0,0,1-8,8H48a8,8,0,0,1-8-8V144Zm152,48a8,8,0,0,1-8,8H192a8,8,0,0,1-8-8V152a8,8,0,0,1,8-8h24Z";

/// Padlock (data protection)
pub const ICON_LOCK: &str = "M208,80H176V56a48,48,0,0,0-96,0V80H48A16,16,0,0,0,32,96V208a16,16,0,0,0,16,16H208a16,16,0,0,0,16-16V96A16,16,0,0,0,208,80ZM96,56a32,32,0,0,1,64,0V80H96ZM208,208H48V96H208Z";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::FEATURE_ICONS;

    #[test]
    fn every_card_icon_has_its_own_path() {
        let paths: Vec<&str> = FEATURE_ICONS.iter().map(|&icon| feature_icon_path(icon)).collect();

        assert!(paths.iter().all(|path| path.starts_with('M')));
        for (i, path) in paths.iter().enumerate() {
            assert!(!paths[i + 1..].contains(path), "{:?} shares a path", FEATURE_ICONS[i]);
        }
        assert_eq!(feature_icon_path(FEATURE_ICONS[0]), ICON_LIGHTNING);
    }
}
