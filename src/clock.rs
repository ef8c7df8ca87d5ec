//! Game time source.

use bevy_ecs::prelude::{Res, ResMut, Resource};

/// Monotonic simulated time in engine ticks.
///
/// The host advances the clock; the toolkit only reads it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    /// A clock reading `now`.
    #[must_use]
    pub const fn starting_at(now: u64) -> Self {
        Self { now }
    }

    /// Current game time.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Moves time forward by `ticks`.
    pub const fn advance(&mut self, ticks: u64) {
        self.now = self.now.saturating_add(ticks);
    }
}

/// Per-update clock step, in ticks.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStep(pub u64);

/// Bevy system advancing the clock by the configured [`ClockStep`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn advance_clock_system(step: Res<ClockStep>, mut clock: ResMut<SimClock>) {
    clock.advance(step.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn advance_accumulates() {
        let mut clock = SimClock::starting_at(100);
        clock.advance(50);
        clock.advance(25);
        assert_eq!(clock.now(), 175);
    }

    #[rstest]
    fn advance_saturates() {
        let mut clock = SimClock::starting_at(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now(), u64::MAX);
    }
}
