//! Accordion expand/collapse with explicit heights.

/// Class on an expanded panel.
pub const PANEL_OPEN_CLASS: &str = "show";
/// Class on a collapsed button.
pub const BUTTON_COLLAPSED_CLASS: &str = "collapsed";

/// Selector for the panel controlled by a button, from `data-bs-target` or
/// `aria-controls`. Bare ids get a `#` prefix.
pub fn panel_selector(data_target: Option<&str>, aria_controls: Option<&str>) -> Option<String> {
    let target = data_target
        .filter(|t| !t.is_empty())
        .or(aria_controls.filter(|t| !t.is_empty()))?;
    if target.starts_with('#') {
        Some(target.to_string())
    } else {
        Some(format!("#{target}"))
    }
}

/// DOM changes for one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionChange {
    /// New `aria-expanded` state of the button.
    pub expanded: bool,
    /// Inline `max-height` for the panel.
    pub max_height: String,
}

impl AccordionChange {
    /// `aria-expanded` attribute value.
    pub fn aria_value(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }
}

/// Compute the change for a click, given the button's current
/// `aria-expanded` and the panel's `scrollHeight`.
pub fn toggle(aria_expanded: Option<&str>, scroll_height: i32) -> AccordionChange {
    if aria_expanded == Some("true") {
        AccordionChange {
            expanded: false,
            max_height: "0".to_string(),
        }
    } else {
        AccordionChange {
            expanded: true,
            max_height: format!("{scroll_height}px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_target_from_either_attribute() {
        assert_eq!(panel_selector(Some("#faq-1"), None).as_deref(), Some("#faq-1"));
        assert_eq!(panel_selector(None, Some("faq-2")).as_deref(), Some("#faq-2"));
        assert_eq!(panel_selector(Some(""), Some("faq-3")).as_deref(), Some("#faq-3"));
        assert_eq!(panel_selector(None, None), None);
    }

    #[test]
    fn expands_to_content_height_then_collapses() {
        let open = toggle(Some("false"), 240);
        assert_eq!(open, AccordionChange {
            expanded: true,
            max_height: "240px".to_string(),
        });
        let closed = toggle(Some(open.aria_value()), 240);
        assert!(!closed.expanded);
        assert_eq!(closed.max_height, "0");
    }
}
