//! Geometry and styles for click ripples and hover lifts.

/// Elements that get a ripple on click.
pub const RIPPLE_SELECTOR: &str = ".c-button, .btn, .nav-link, .c-nav__item";
/// Lifetime of a ripple span.
pub const RIPPLE_DURATION_MS: u32 = 600;

/// Cards that lift on hover.
pub const CARD_SELECTOR: &str = ".card, .c-card";
/// Links that nudge on hover.
pub const LINK_SELECTOR: &str = "a:not(.c-button):not(.btn)";

/// Position and size of a ripple relative to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Diameter.
    pub size: f64,
    /// Left offset.
    pub x: f64,
    /// Top offset.
    pub y: f64,
}

impl Ripple {
    /// Center a circle covering the host on the click point.
    pub fn at(host_left: f64, host_top: f64, host_width: f64, host_height: f64, client_x: f64, client_y: f64) -> Self {
        let size = host_width.max(host_height);
        Self {
            size,
            x: client_x - host_left - size / 2.0,
            y: client_y - host_top - size / 2.0,
        }
    }

    /// Inline `cssText` for the ripple span.
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; border-radius: 50%; \
             background: rgba(255, 255, 255, 0.6); top: {y}px; left: {x}px; \
             pointer-events: none; animation: rippleEffect 0.6s ease-out;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Transform and shadow pair applied on hover transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    /// Inline `transform`.
    pub transform: &'static str,
    /// Inline `box-shadow`, if the element changes it.
    pub box_shadow: Option<&'static str>,
}

/// Card on `mouseenter`.
pub const CARD_HOVER: HoverStyle = HoverStyle {
    transform: "translateY(-8px) scale(1.02)",
    box_shadow: Some("var(--shadow-lg)"),
};
/// Card on `mouseleave`.
pub const CARD_REST: HoverStyle = HoverStyle {
    transform: "translateY(0) scale(1)",
    box_shadow: Some("var(--shadow-sm)"),
};
/// Link on `mouseenter`.
pub const LINK_HOVER: HoverStyle = HoverStyle {
    transform: "translateX(3px)",
    box_shadow: None,
};
/// Link on `mouseleave`.
pub const LINK_REST: HoverStyle = HoverStyle {
    transform: "translateX(0)",
    box_shadow: None,
};
/// Transition installed on links before their first nudge.
pub const LINK_TRANSITION: &str = "color 0.2s ease-in-out, transform 0.2s ease-in-out";
/// Scroll-to-top button on `mouseenter`.
pub const SCROLL_TOP_HOVER: HoverStyle = HoverStyle {
    transform: "scale(1.1) translateY(-5px)",
    box_shadow: Some("var(--shadow-glow-hover)"),
};
/// Scroll-to-top button on `mouseleave`.
pub const SCROLL_TOP_REST: HoverStyle = HoverStyle {
    transform: "scale(1) translateY(0)",
    box_shadow: Some("var(--shadow-lg)"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_click() {
        let ripple = Ripple::at(100.0, 50.0, 120.0, 40.0, 160.0, 70.0);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.x, 0.0);
        assert_eq!(ripple.y, -40.0);
        assert!(ripple.css_text().contains("width: 120px; height: 120px"));
        assert!(ripple.css_text().contains("top: -40px; left: 0px"));
    }
}
