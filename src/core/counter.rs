//! Stat counter ramp
//!
//! A [`CounterRamp`] yields the value to display on each timer tick, climbing
//! in equal increments from zero and stopping exactly on the target.

/// Attribute holding a counter's final value
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// Section whose visibility starts the counters
pub const STATS_SELECTOR: &str = ".stats";

/// Elements that display a counter
pub const COUNTER_SELECTOR: &str = ".stat-number";

/// Parse a counter target attribute. Missing or non-numeric values yield `None`.
pub fn parse_target(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterRamp {
    target: u64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterRamp {
    /// Ramp to `target` over `duration_ms` with one update every `tick_ms`
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            finished: false,
        }
    }

    /// Advance one tick and return the value to display, or `None` once done
    pub fn advance(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
            return Some(self.target);
        }
        Some((self.current.floor() as u64).min(self.target))
    }
}

impl Iterator for CounterRamp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_converges_to_target() {
        let values: Vec<u64> = CounterRamp::new(1280, 2000, 16).collect();

        assert_eq!(values.last(), Some(&1280));
        assert!(values.iter().all(|&v| v <= 1280));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // 2000 / 16 = 125 ticks, float rounding may add one
        assert!((125..=126).contains(&values.len()));
    }

    #[test]
    fn test_ramp_stops_after_target() {
        let mut ramp = CounterRamp::new(10, 160, 16);
        let mut last = None;
        while let Some(value) = ramp.advance() {
            last = Some(value);
        }

        assert_eq!(last, Some(10));
        assert_eq!(ramp.advance(), None);
        assert_eq!(ramp.advance(), None);
    }

    #[test]
    fn test_zero_target() {
        let values: Vec<u64> = CounterRamp::new(0, 2000, 16).collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_duration_shorter_than_tick() {
        let values: Vec<u64> = CounterRamp::new(50, 5, 16).collect();
        assert_eq!(values, vec![50]);
    }

    #[test]
    fn test_small_target_many_ticks() {
        let values: Vec<u64> = CounterRamp::new(3, 2000, 16).collect();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&3));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("1280")), Some(1280));
        assert_eq!(parse_target(Some(" 42 ")), Some(42));
        assert_eq!(parse_target(Some("lots")), None);
        assert_eq!(parse_target(Some("-5")), None);
        assert_eq!(parse_target(None), None);
    }
}
