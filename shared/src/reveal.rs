//! One-shot entrance animations.

use std::collections::HashSet;

/// Elements that fade in when they first scroll into view.
pub const SELECTOR: &str = ".card, .c-card, .accordion-item, img, .c-button, section";
/// Opt-out attribute.
pub const OPT_OUT_ATTR: &str = "data-no-animate";
/// Visible fraction that triggers the reveal.
pub const THRESHOLD: f64 = 0.1;
/// Root margin: trigger slightly before the bottom edge.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline styles applied in order to animate an element in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyles {
    /// Starting opacity.
    pub hidden_opacity: &'static str,
    /// Starting offset.
    pub hidden_transform: &'static str,
    /// Transition installed on the next frame.
    pub transition: &'static str,
    /// Final opacity.
    pub shown_opacity: &'static str,
    /// Final offset.
    pub shown_transform: &'static str,
}

/// Styles used for every revealed element.
pub const STYLES: RevealStyles = RevealStyles {
    hidden_opacity: "0",
    hidden_transform: "translateY(30px)",
    transition: "opacity 0.8s ease-out, transform 0.8s ease-out",
    shown_opacity: "1",
    shown_transform: "translateY(0)",
};

/// Remembers which elements were already revealed, so an element never
/// animates twice even if the observer reports it again.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection for element `index`. Returns `true` only for
    /// the first intersecting report; the caller then animates and
    /// unobserves the element.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }

    /// Whether `index` has been revealed.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Number of revealed elements.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// `true` before any reveal.
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_per_element() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection(3, false));
        assert!(tracker.on_intersection(3, true));
        assert!(!tracker.on_intersection(3, true));
        assert!(tracker.on_intersection(4, true));
        assert!(tracker.is_revealed(3));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn leaving_the_viewport_does_not_reverse() {
        let mut tracker = RevealTracker::new();
        tracker.on_intersection(0, true);
        tracker.on_intersection(0, false);
        assert!(tracker.is_revealed(0));
    }
}
