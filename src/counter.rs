pub const COUNT_DURATION_MS: u32 = 1500;
pub const COUNT_TICK_MS: u64 = 30;

/// Count-up animation for a stat. Each tick moves a fixed step toward the
/// target; the step that reaches or passes the target lands exactly on it
/// and the counter stops.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    step: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: u32, tick_ms: u64) -> Self {
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self {
            target,
            step: target / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn for_stat(target: f64) -> Self {
        Self::new(target, COUNT_DURATION_MS, COUNT_TICK_MS)
    }

    /// Advance one tick and return the value to display.
    pub fn tick(&mut self) -> f64 {
        if !self.done {
            self.current += self.step;
            // a non-positive or NaN step can never climb, so it lands at once
            if self.current >= self.target || self.step.is_nan() || self.step <= 0.0 {
                self.current = self.target;
                self.done = true;
            }
        }
        self.displayed()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current value rounded to one decimal place, never past the target.
    pub fn displayed(&self) -> f64 {
        let rounded = (self.current * 10.0).round() / 10.0;
        if self.target >= 0.0 {
            rounded.min(self.target)
        } else {
            rounded.max(self.target)
        }
    }
}

/// Format a displayed count with the shortest exact decimal form, so whole
/// numbers print without a point and the target prints as written.
pub fn format_count(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut CountUp) -> Vec<f64> {
        let mut seen = Vec::new();
        // bounded so a broken counter fails instead of hanging
        for _ in 0..5000 {
            seen.push(counter.tick());
            if counter.is_done() {
                break;
            }
        }
        seen
    }

    #[test]
    fn test_reaches_fractional_target() {
        let mut counter = CountUp::for_stat(99.9);
        let seen = run(&mut counter);
        assert!(counter.is_done());
        assert_eq!(counter.displayed(), 99.9);
        assert!(seen.iter().all(|v| *v <= 99.9));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(format_count(counter.displayed()), "99.9");
    }

    #[test]
    fn test_two_decimal_target_not_exceeded() {
        let mut counter = CountUp::for_stat(15.06);
        let seen = run(&mut counter);
        assert!(counter.is_done());
        let max = seen.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max <= 15.06, "displayed {max} exceeds target 15.06");
        assert_eq!(counter.displayed(), 15.06);
        assert_eq!(format_count(counter.displayed()), "15.06");
    }

    #[test]
    fn test_negative_target_not_exceeded() {
        let counter = CountUp::for_stat(-2.55);
        assert!(counter.displayed() >= -2.55);
        let mut counter = counter;
        assert_eq!(counter.tick(), -2.55);
    }

    #[test]
    fn test_stops_at_target() {
        let mut counter = CountUp::for_stat(15.0);
        let seen = run(&mut counter);
        // 1500ms / 30ms ticks
        assert!(seen.len() >= 50 && seen.len() <= 51);
        assert_eq!(counter.tick(), 15.0);
        assert_eq!(counter.tick(), 15.0);
        assert_eq!(format_count(counter.displayed()), "15");
    }

    #[test]
    fn test_degenerate_targets() {
        let mut zero = CountUp::for_stat(0.0);
        assert_eq!(zero.tick(), 0.0);
        assert!(zero.is_done());

        let mut negative = CountUp::for_stat(-3.0);
        assert_eq!(negative.tick(), -3.0);
        assert!(negative.is_done());

        let mut no_tick = CountUp::new(10.0, 1500, 0);
        run(&mut no_tick);
        assert_eq!(no_tick.displayed(), 10.0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(20.0), "20");
        assert_eq!(format_count(4.5), "4.5");
        assert_eq!(format_count(-0.0), "0");
    }
}
