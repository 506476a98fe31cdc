//! Entrance transitions.
//!
//! Every revealed block starts offset and transparent and settles once the
//! section has been seen. The style is a pure function of the visibility
//! flag, so re-rendering the settled state is idempotent.

use std::time::Duration;

const ENTRANCE: Duration = Duration::from_millis(600);
const OFFSET_PX: u32 = 30;
const CARD_LEAD_IN: Duration = Duration::from_millis(200);
const CARD_STAGGER: Duration = Duration::from_millis(100);
const CTA_DELAY: Duration = Duration::from_millis(800);

/// Where a revealed block currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet seen: offset and transparent
    Hidden,
    /// Seen: in place and opaque
    Settled,
}

impl RevealPhase {
    /// Value of the `data-reveal` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Settled => "settled",
        }
    }
}

/// Timing and offset of one entrance transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Wait after the section is seen
    pub delay: Duration,
    /// Transition length
    pub duration: Duration,
    /// Vertical offset while hidden
    pub offset_px: u32,
}

impl Reveal {
    /// Header block.
    pub const HEADER: Self = Self::after(Duration::ZERO);
    /// Call-to-action block, after the cards.
    pub const CTA: Self = Self::after(CTA_DELAY);

    const fn after(delay: Duration) -> Self {
        Self {
            delay,
            duration: ENTRANCE,
            offset_px: OFFSET_PX,
        }
    }

    /// Card at `index`, staggered in position order.
    pub fn card(index: usize) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self::after(CARD_LEAD_IN.saturating_add(CARD_STAGGER.saturating_mul(steps)))
    }

    /// Phase for the current visibility flag.
    pub const fn phase(self, visible: bool) -> RevealPhase {
        if visible { RevealPhase::Settled } else { RevealPhase::Hidden }
    }

    /// Inline CSS for the current phase.
    pub fn style(self, visible: bool) -> String {
        let duration = self.duration.as_millis();
        let delay = self.delay.as_millis();
        let transition = format!(
            "opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms"
        );

        match self.phase(visible) {
            RevealPhase::Hidden => format!(
                "opacity:0;transform:translateY({}px);transition:{transition}",
                self.offset_px
            ),
            RevealPhase::Settled => format!("opacity:1;transform:none;transition:{transition}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FEATURE_COUNT;

    #[test]
    fn hidden_is_offset_and_transparent() {
        let style = Reveal::HEADER.style(false);
        assert!(style.starts_with("opacity:0;transform:translateY(30px)"));
    }

    #[test]
    fn settled_is_in_place_and_opaque() {
        let style = Reveal::HEADER.style(true);
        assert!(style.starts_with("opacity:1;transform:none"));
    }

    #[test]
    fn settled_style_is_idempotent() {
        assert_eq!(Reveal::card(4).style(true), Reveal::card(4).style(true));
        assert_eq!(Reveal::card(4).phase(true), RevealPhase::Settled);
    }

    #[test]
    fn cards_stagger_in_position_order() {
        let delays: Vec<Duration> = (0..FEATURE_COUNT).map(|i| Reveal::card(i).delay).collect();
        assert_eq!(delays[0], Duration::from_millis(200));
        assert_eq!(delays[8], Duration::from_millis(1000));
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cta_follows_header() {
        assert!(Reveal::CTA.delay > Reveal::HEADER.delay);
        assert!(Reveal::CTA.style(false).contains("ease-out 800ms"));
    }

    #[test]
    fn phase_names() {
        assert_eq!(RevealPhase::Hidden.as_str(), "hidden");
        assert_eq!(RevealPhase::Settled.as_str(), "settled");
    }
}
