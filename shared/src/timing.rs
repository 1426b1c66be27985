//! Rate limiting for high-frequency browser events.
//!
//! Debounce needs no state here: the frontend keeps one pending timer and
//! replacing it cancels the previous one. Throttle needs a clock, so it is
//! modelled as a gate over caller-supplied timestamps.

/// Lets at most one call through per window.
#[derive(Debug, Clone)]
pub struct Throttle {
    window_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    /// Gate with a window of `window_ms` milliseconds.
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            open_at: None,
        }
    }

    /// Whether a call at `now_ms` should run. A passing call closes the
    /// gate for the rest of the window.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.window_ms);
                true
            },
        }
    }
}

/// Visibility rule for the scroll-to-top affordance.
pub fn scroll_top_visible(page_y: f64, threshold: f64) -> bool {
    page_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(50.0));
        assert!(!throttle.try_acquire(99.9));
        assert!(throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(150.0));
        assert!(throttle.try_acquire(450.0));
    }

    #[test]
    fn scroll_top_shows_past_threshold() {
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }
}
