//! Count-up animation for `[data-count-up]` elements.

/// Attribute holding the target value.
pub const ATTR: &str = "data-count-up";
/// Visible fraction that starts the animation.
pub const THRESHOLD: f64 = 0.5;
/// Nominal frame length used to derive the per-frame increment.
pub const FRAME_MS: f64 = 16.0;

/// Parse a target the way `parseInt` would: optional leading whitespace and
/// sign, then the longest run of ASCII digits. Anything else yields 0.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

/// What to display after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value; request another frame.
    Running(i64),
    /// Final value, always equal to the target.
    Done(i64),
}

impl CounterFrame {
    /// Value to render.
    pub fn value(self) -> i64 {
        match self {
            CounterFrame::Running(value) | CounterFrame::Done(value) => value,
        }
    }
}

/// Linear interpolation from 0 to the target, one increment per frame.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    /// Animation reaching `target` in roughly `duration_ms`.
    pub fn new(target: i64, duration_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / FRAME_MS).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    /// Target value.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Whether the final frame has been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one frame.
    pub fn step(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as i64)
        } else {
            self.done = true;
            CounterFrame::Done(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_target_mimics_parse_int() {
        assert_eq!(parse_target(Some("1500")), 1500);
        assert_eq!(parse_target(Some("  42px")), 42);
        assert_eq!(parse_target(Some("-7")), -7);
        assert_eq!(parse_target(Some("+9")), 9);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(Some("")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn zero_and_negative_targets_finish_immediately() {
        assert_eq!(CounterAnimation::new(0, 2000).step(), CounterFrame::Done(0));
        assert_eq!(CounterAnimation::new(-5, 2000).step(), CounterFrame::Done(-5));
    }

    #[test]
    fn runs_for_about_duration_over_frame_length() {
        let mut counter = CounterAnimation::new(250, 2000);
        let mut frames = 1;
        while let CounterFrame::Running(value) = counter.step() {
            assert!(value < 250);
            frames += 1;
        }
        assert_eq!(frames, 125);
        assert!(counter.is_done());
        assert_eq!(counter.step(), CounterFrame::Done(250));
    }

    proptest! {
        #[test]
        fn always_ends_exactly_on_target(target in 0i64..5_000_000, duration in 1u32..5000) {
            let mut counter = CounterAnimation::new(target, duration);
            let budget = (f64::from(duration) / FRAME_MS).ceil() as usize + 2;
            let mut last = None;
            for _ in 0..budget {
                let frame = counter.step();
                prop_assert!(frame.value() <= target);
                last = Some(frame);
                if counter.is_done() {
                    break;
                }
            }
            prop_assert_eq!(last, Some(CounterFrame::Done(target)));
        }
    }
}
