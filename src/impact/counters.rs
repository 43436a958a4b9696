//! Frame math for the impact counter animation.
//!
//! Frames are computed with integer arithmetic so the last frame lands on the
//! final values exactly, whatever the step count.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub water: u64,
    pub co2: u64,
    pub properties: u64,
    pub area: u64,
}

pub const FINAL: Counters = Counters {
    water: config::FINAL_WATER_LITERS,
    co2: config::FINAL_CO2_TONS,
    properties: config::FINAL_PROPERTIES,
    area: config::FINAL_AREA_HECTARES,
};

impl Counters {
    /// Values shown after `step` of `steps` ticks. Snaps to `target` once
    /// `step >= steps`.
    pub fn frame(target: Counters, step: u32, steps: u32) -> Counters {
        if steps == 0 || step >= steps {
            return target;
        }
        let scale = |value: u64| value * u64::from(step) / u64::from(steps);
        Counters {
            water: scale(target.water),
            co2: scale(target.co2),
            properties: scale(target.properties),
            area: scale(target.area),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    step: u32,
    steps: u32,
    target: Counters,
}

impl Animation {
    pub fn new(target: Counters, steps: u32) -> Self {
        Animation {
            step: 0,
            steps,
            target,
        }
    }

    /// Milliseconds between ticks for an animation lasting `duration_ms`.
    pub fn tick_interval(duration_ms: u32, steps: u32) -> u32 {
        duration_ms / steps.max(1)
    }

    /// Advance one tick and return the values to display.
    pub fn tick(&mut self) -> Counters {
        if self.step < self.steps {
            self.step += 1;
        }
        Counters::frame(self.target, self.step, self.steps)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

/// Group digits the way pt-BR does: `2500000` -> `2.500.000`.
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_start_at_zero_and_end_on_target() {
        assert_eq!(Counters::frame(FINAL, 0, 60), Counters::default());
        assert_eq!(Counters::frame(FINAL, 60, 60), FINAL);
        assert_eq!(Counters::frame(FINAL, 61, 60), FINAL);
    }

    #[test]
    fn halfway_frame_floors() {
        let half = Counters::frame(FINAL, 30, 60);
        assert_eq!(half.water, 1_250_000);
        assert_eq!(half.co2, 925);
        assert_eq!(half.properties, 160);
        assert_eq!(half.area, 7_500);

        // 1850 * 1 / 60 = 30.83...
        assert_eq!(Counters::frame(FINAL, 1, 60).co2, 30);
    }

    #[test]
    fn animation_is_monotone_and_never_overshoots() {
        let mut animation = Animation::new(FINAL, config::COUNTER_STEPS);
        let mut previous = Counters::default();
        let mut ticks = 0;
        while !animation.is_finished() {
            let current = animation.tick();
            ticks += 1;
            for (now, before, last) in [
                (current.water, previous.water, FINAL.water),
                (current.co2, previous.co2, FINAL.co2),
                (current.properties, previous.properties, FINAL.properties),
                (current.area, previous.area, FINAL.area),
            ] {
                assert!(now >= before);
                assert!(now <= last);
            }
            previous = current;
        }
        assert_eq!(ticks, config::COUNTER_STEPS);
        assert_eq!(previous, FINAL);
        assert_eq!(animation.tick(), FINAL);
    }

    #[test]
    fn odd_step_counts_still_finish_exactly() {
        let target = Counters {
            water: 7,
            co2: 13,
            properties: 1,
            area: 999_999,
        };
        let mut animation = Animation::new(target, 7);
        let mut last = Counters::default();
        while !animation.is_finished() {
            last = animation.tick();
        }
        assert_eq!(last, target);
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        let mut animation = Animation::new(FINAL, 0);
        assert!(animation.is_finished());
        assert_eq!(animation.tick(), FINAL);
        assert_eq!(Animation::tick_interval(2000, 0), 2000);
    }

    #[test]
    fn tick_interval_splits_duration() {
        assert_eq!(
            Animation::tick_interval(config::COUNTER_DURATION_MS, config::COUNTER_STEPS),
            33
        );
    }

    #[test]
    fn formats_with_dot_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(320), "320");
        assert_eq!(format_number(1_850), "1.850");
        assert_eq!(format_number(15_000), "15.000");
        assert_eq!(format_number(2_500_000), "2.500.000");
        assert_eq!(format_number(123_456_789), "123.456.789");
    }
}
