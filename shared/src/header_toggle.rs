//! Standalone header nav toggle (`.dr-header`).
//!
//! The DOM attribute is the source of truth: the state is read back from
//! `aria-expanded` on every click.

/// Class set on the header while its nav list is open.
pub const NAV_OPEN_CLASS: &str = "dr-header-nav-open";

/// Expanded/collapsed state of the header toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderToggle {
    expanded: bool,
}

impl HeaderToggle {
    /// Rebuild the state from the toggle's `aria-expanded` attribute.
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    /// Whether the nav is currently expanded.
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Flip and return the new state.
    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    /// Value to write back to `aria-expanded`.
    pub fn aria_value(self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_means_collapsed() {
        assert!(!HeaderToggle::from_aria(None).is_expanded());
        assert!(!HeaderToggle::from_aria(Some("yes")).is_expanded());
    }

    #[test]
    fn toggling_flips_aria_value() {
        let next = HeaderToggle::from_aria(Some("false")).toggled();
        assert!(next.is_expanded());
        assert_eq!(next.aria_value(), "true");
        assert_eq!(next.toggled().aria_value(), "false");
    }
}
