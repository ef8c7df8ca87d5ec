//! Bevy plugin wiring the toolkit's context objects into a host app.

use bevy_app::{App, Plugin, Update};
use bevy_ecs::prelude::*;
use log::debug;

use crate::attack_log::AttackLog;
use crate::clock::{advance_clock_system, ClockStep, SimClock};
use crate::config::CampaignConfig;
use crate::entity::GameObject;
use crate::once::CallOnceRegistry;

/// Event raised by the host's damage handler for every hit.
///
/// Either participant may be missing when it was destroyed by the time the
/// engine reported the hit; such events are ignored.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReported {
    /// The entity that took damage.
    pub victim: Option<GameObject>,
    /// The entity that dealt it.
    pub attacker: Option<GameObject>,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn record_attack(event: On<AttackReported>, clock: Res<SimClock>, mut log: ResMut<AttackLog>) {
    let AttackReported { victim, attacker } = event.event();
    log.record(victim.as_ref(), attacker.as_ref(), clock.now());
}

/// Bevy system forgetting attacks older than the configured horizon.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn prune_attack_log_system(
    clock: Res<SimClock>,
    config: Res<CampaignConfig>,
    mut log: ResMut<AttackLog>,
) {
    let removed = log.prune(clock.now(), config.attack_horizon());
    if removed > 0 {
        debug!("pruned {removed} stale attacks at t={}", clock.now());
    }
}

/// Bevy plugin installing the attack log and its periodic pruning.
///
/// A [`CampaignConfig`] already present in the world takes precedence over
/// the plugin's own. With a zero `clock_step` the host advances
/// [`SimClock`] itself.
#[derive(Debug, Clone, Default)]
pub struct CampaignPlugin {
    /// Config inserted when the app has none.
    pub config: CampaignConfig,
    /// Ticks added to the clock on every update.
    pub clock_step: u64,
}

impl Plugin for CampaignPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<CampaignConfig>() {
            app.insert_resource(self.config.clone());
        }

        app.init_resource::<SimClock>()
            .init_resource::<AttackLog>()
            .init_resource::<CallOnceRegistry>()
            .insert_resource(ClockStep(self.clock_step));

        app.add_observer(record_attack);
        app.add_systems(Update, (advance_clock_system, prune_attack_log_system).chain());
    }
}
