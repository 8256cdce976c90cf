//! Cosmetic count-up model for the dashboard's headline figure.
//!
//! The displayed total steps toward its target over a fixed wall-clock
//! duration. The value here is never authoritative; the engine's output is.
//! A monotonic generation counter makes restarts clean: whenever the inputs
//! change, the counter is retargeted, the generation is bumped, and ticks
//! carrying a stale generation are ignored, so no timer fires for a state it
//! no longer corresponds to.

use std::time::Duration;

use rust_decimal::Decimal;

/// Total animation duration in milliseconds.
pub const COUNT_UP_DURATION_MS: u64 = 2000;

/// Number of fixed increments over the animation.
pub const COUNT_UP_STEPS: u32 = 60;

/// Steppable count-up value.
///
/// Each tick recomputes the display value as `target × step / 60` rather
/// than accumulating a per-tick increment; accumulated division remainders
/// would otherwise leave the value short of the target after the final step.
#[derive(Debug, Clone, Default)]
pub struct CountUp {
    target: Decimal,
    current: Decimal,
    step: u32,
    generation: u64,
    done: bool,
}

impl CountUp {
    /// A finished counter resting at zero.
    pub fn new() -> Self {
        Self {
            done: true,
            ..Self::default()
        }
    }

    /// Restarts the animation toward `target` from zero, invalidating any
    /// in-flight ticks. Returns the new generation.
    pub fn retarget(&mut self, target: Decimal) -> u64 {
        self.generation += 1;
        self.target = target;
        self.current = Decimal::ZERO;
        self.step = 0;
        self.done = false;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current display value.
    pub fn value(&self) -> Decimal {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one step and returns the new display value.
    ///
    /// Returns `None` for ticks carrying a stale generation, and once the
    /// target has been reached. The final step lands exactly on the target.
    pub fn tick(&mut self, generation: u64) -> Option<Decimal> {
        if generation != self.generation || self.done {
            return None;
        }

        self.step += 1;
        self.current = self.target * Decimal::from(self.step) / Decimal::from(COUNT_UP_STEPS);
        if self.step >= COUNT_UP_STEPS || self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current)
    }

    /// Wall-clock delay between ticks.
    pub fn tick_interval() -> Duration {
        Duration::from_millis(COUNT_UP_DURATION_MS / COUNT_UP_STEPS as u64)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn reaches_target_within_step_budget() {
        let mut counter = CountUp::new();
        let generation = counter.retarget(dec!(800.00));

        let mut ticks = 0;
        while counter.tick(generation).is_some() {
            ticks += 1;
            assert!(ticks <= COUNT_UP_STEPS);
        }

        assert_eq!(counter.value(), dec!(800.00));
        assert!(counter.is_done());
        assert_eq!(ticks, COUNT_UP_STEPS);
    }

    #[test]
    fn indivisible_target_lands_exactly_on_final_step() {
        // 1000 / 60 has no finite decimal expansion; the final step must
        // still land exactly on the target with no residual.
        let mut counter = CountUp::new();
        let generation = counter.retarget(dec!(1000));

        let mut last = Decimal::ZERO;
        let mut ticks = 0;
        while let Some(value) = counter.tick(generation) {
            assert!(value >= last);
            last = value;
            ticks += 1;
        }

        assert_eq!(ticks, COUNT_UP_STEPS);
        assert_eq!(last, dec!(1000));
        assert_eq!(counter.value(), dec!(1000));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CountUp::new();
        let generation = counter.retarget(Decimal::ZERO);

        assert_eq!(counter.tick(generation), Some(Decimal::ZERO));
        assert_eq!(counter.tick(generation), None);
    }

    #[test]
    fn stale_generation_ticks_are_ignored() {
        let mut counter = CountUp::new();
        let old = counter.retarget(dec!(100));
        counter.tick(old);

        let new = counter.retarget(dec!(900));

        // The old timer keeps firing; its ticks must not move the value.
        assert_eq!(counter.tick(old), None);
        assert_eq!(counter.value(), Decimal::ZERO);

        assert_eq!(counter.tick(new), Some(dec!(15)));
    }

    #[test]
    fn retarget_restarts_from_zero() {
        let mut counter = CountUp::new();
        let first = counter.retarget(dec!(600));
        for _ in 0..30 {
            counter.tick(first);
        }
        assert_eq!(counter.value(), dec!(300));

        counter.retarget(dec!(600));
        assert_eq!(counter.value(), Decimal::ZERO);
    }

    #[test]
    fn new_counter_is_inert() {
        let mut counter = CountUp::new();

        assert!(counter.is_done());
        assert_eq!(counter.tick(0), None);
    }
}
