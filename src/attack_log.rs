//! Short-term memory of who attacked whom.
//!
//! Combat handlers append events as they happen, retaliation logic asks who
//! is hitting a given entity, and a periodic tick forgets anything older than
//! the configured horizon.

use bevy_ecs::prelude::Resource;

use crate::entity::{EntityId, GameObject};

/// One recorded hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEvent {
    /// Identity of the entity that was hit.
    pub victim: EntityId,
    /// Handle of the entity responsible.
    pub attacker: GameObject,
    /// Game time when the hit was recorded.
    pub at: u64,
}

/// Append-only, time-bounded list of [`AttackEvent`]s in recording order.
#[derive(Resource, Debug, Default, Clone)]
pub struct AttackLog {
    events: Vec<AttackEvent>,
}

impl AttackLog {
    /// An empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Records `attacker` hitting `victim` at game time `now`.
    ///
    /// Missing participants are normal while units die mid-combat, so such
    /// events are dropped without a diagnostic. Returns whether the event was
    /// stored.
    pub fn record(
        &mut self,
        victim: Option<&GameObject>,
        attacker: Option<&GameObject>,
        now: u64,
    ) -> bool {
        let (Some(target), Some(source)) = (victim, attacker) else {
            return false;
        };
        self.events.push(AttackEvent {
            victim: target.id,
            attacker: *source,
            at: now,
        });
        true
    }

    /// The attacker of the oldest surviving event against `victim`.
    ///
    /// Only one attacker is reported even when several units hit the victim
    /// within the window.
    #[must_use]
    pub fn who_attacked(&self, victim: EntityId) -> Option<&GameObject> {
        self.events
            .iter()
            .find(|event| event.victim == victim)
            .map(|event| &event.attacker)
    }

    /// Drops events recorded before `now - horizon`, keeping survivor order.
    ///
    /// Returns how many events were removed.
    pub fn prune(&mut self, now: u64, horizon: u64) -> usize {
        let cutoff = now.saturating_sub(horizon);
        let before = self.events.len();
        self.events.retain(|event| event.at >= cutoff);
        before - self.events.len()
    }

    /// Surviving events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &AttackEvent> {
        self.events.iter()
    }

    /// Number of surviving events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events survive.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
