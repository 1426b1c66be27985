//! Lazy loading and broken-image fallback.

use std::collections::HashSet;

/// Images that opt out of lazy loading.
pub const CRITICAL_ATTR: &str = "data-critical";

/// Inline SVG shown in place of an image that failed to load.
pub const FALLBACK_SRC: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" \
     width=\"400\" height=\"300\"%3E%3Crect fill=\"%23e9ecef\" width=\"400\" \
     height=\"300\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\" \
     fill=\"%236c757d\"%3EImage not available%3C/text%3E%3C/svg%3E";

/// Whether an `<img>` should get `loading="lazy"`.
pub fn wants_lazy_loading(has_loading_attr: bool, is_critical: bool) -> bool {
    !has_loading_attr && !is_critical
}

/// Tracks which images already received the fallback, so a failing
/// placeholder cannot trigger an error loop.
#[derive(Debug, Clone, Default)]
pub struct FallbackTracker {
    replaced: HashSet<usize>,
}

impl FallbackTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load error for image `index`. Returns the replacement source
    /// the first time and `None` afterwards.
    pub fn on_error(&mut self, index: usize) -> Option<&'static str> {
        if self.replaced.insert(index) {
            tracing::debug!(index, "image failed to load, using fallback");
            Some(FALLBACK_SRC)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_loading_respects_explicit_and_critical() {
        assert!(wants_lazy_loading(false, false));
        assert!(!wants_lazy_loading(true, false));
        assert!(!wants_lazy_loading(false, true));
    }

    #[test]
    fn fallback_is_applied_once() {
        let mut tracker = FallbackTracker::new();
        assert_eq!(tracker.on_error(0), Some(FALLBACK_SRC));
        assert_eq!(tracker.on_error(0), None);
        assert_eq!(tracker.on_error(1), Some(FALLBACK_SRC));
    }

    #[test]
    fn fallback_is_a_single_line_data_uri() {
        assert!(FALLBACK_SRC.starts_with("data:image/svg+xml,"));
        assert!(!FALLBACK_SRC.contains('\n'));
        assert!(FALLBACK_SRC.contains("Image not available"));
    }
}
