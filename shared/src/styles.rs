//! Stylesheet injected once at boot.
//!
//! Colors and shadows come from CSS custom properties defined by the host
//! page (`--color-primary`, `--shadow-lg`, ...).

/// `id` of the injected `<style>` element, used to avoid injecting twice.
pub const STYLE_ELEMENT_ID: &str = "site-enhance-keyframes";

/// Keyframes and transitions shared by the notifications, reveal, ripple
/// and menu code.
pub const SHARED_CSS: &str = r#"
@keyframes slideInRight {
  from { transform: translateX(100%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(100%); opacity: 0; }
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.05); }
}

@keyframes rippleEffect {
  to { transform: scale(4); opacity: 0; }
}

.navbar-collapse {
  transition: max-height 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}

.card, .c-card {
  transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
}

.c-button, .btn {
  position: relative;
  overflow: hidden;
  transition: all 0.3s ease-out;
}

.u-no-scroll {
  overflow: hidden !important;
}
"#;

/// Inline style of the generated scroll-to-top button.
pub const SCROLL_TOP_BUTTON_CSS: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; \
     height: 50px; border-radius: 50%; background: var(--color-primary); color: \
     var(--color-white); border: none; font-size: 24px; cursor: pointer; transition: all 0.3s \
     ease-in-out; z-index: 999;";

/// Inline style of the notification container.
pub const NOTIFICATION_CONTAINER_CSS: &str =
    "position: fixed; top: 100px; right: 20px; z-index: 9999; max-width: 400px;";

/// Inline style of the modal backdrop (opacity is driven separately).
pub const MODAL_BACKDROP_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: \
     100%; background: rgba(0, 0, 0, 0.8); display: flex; align-items: center; \
     justify-content: center; z-index: 10000; transition: opacity 0.3s ease-in-out;";

/// Inline style of the modal panel (transform is driven separately).
pub const MODAL_PANEL_CSS: &str = "background: white; padding: 2rem; border-radius: \
     var(--border-radius-lg); max-width: 600px; max-height: 80vh; overflow-y: auto; \
     box-shadow: var(--shadow-lg); transition: transform 0.3s ease-out;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_css_defines_every_animation_used() {
        for name in ["slideInRight", "slideOutRight", "fadeIn", "pulse", "rippleEffect"] {
            assert!(SHARED_CSS.contains(&format!("@keyframes {name}")), "{name} missing");
        }
        assert!(SHARED_CSS.contains(".u-no-scroll"));
    }
}
