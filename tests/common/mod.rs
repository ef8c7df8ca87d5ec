//! Shared test fixtures and helpers for campaign integration tests.

#![expect(dead_code, reason = "Each test binary uses a different subset of helpers.")]

use anyhow::{ensure, Context, Result};
use bevy_app::App;
use fieldsense::{
    AttackLog, CampaignConfig, CampaignPlugin, EntityId, GameObject, GroupId, Scenario, SimClock,
    WorldHandle, WorldView,
};

/// JSON for the two-base skirmish map shipped with the crate.
pub const SKIRMISH: &str = include_str!("../../scenarios/skirmish.json");

/// Load the skirmish scenario into an in-memory world.
pub fn skirmish() -> Result<(CampaignConfig, WorldHandle)> {
    let scenario = Scenario::from_json_str(SKIRMISH).context("skirmish scenario should parse")?;
    scenario.config.validate().context("skirmish config should validate")?;
    let config = scenario.config.clone();
    Ok((config, WorldHandle::from_scenario(scenario)))
}

/// Look up a live object, failing the test if it is gone.
pub fn object(world: &WorldHandle, id: u32) -> Result<GameObject> {
    world
        .object(EntityId(id))
        .copied()
        .with_context(|| format!("object {id} missing from world"))
}

/// Ids of a group's members in insertion order.
pub fn member_ids(world: &WorldHandle, group: GroupId) -> Vec<u32> {
    world
        .group_members(group)
        .iter()
        .map(|o| o.id.into_inner())
        .collect()
}

/// Builder for test `App` instances with the campaign plugin installed.
pub struct CampaignTestAppBuilder {
    app: App,
}

impl CampaignTestAppBuilder {
    /// Create a new test app using `config`.
    #[must_use]
    pub fn new(config: CampaignConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(CampaignPlugin {
            config,
            clock_step: 0,
        });
        Self { app }
    }

    /// Start the simulated clock at `now`.
    #[must_use]
    pub fn at_time(mut self, now: u64) -> Self {
        self.app.insert_resource(SimClock::starting_at(now));
        self
    }

    /// Build and return the configured `App`.
    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

/// Assertion helpers for attack log checks.
pub struct AttackAssertions;

impl AttackAssertions {
    /// Fetch the `AttackLog` resource.
    pub fn log(app: &App) -> Result<&AttackLog> {
        app.world()
            .get_resource::<AttackLog>()
            .context("AttackLog resource missing")
    }

    /// Assert `victim` is attributed to `attacker`.
    pub fn assert_attacked_by(app: &App, victim: u32, attacker: u32) -> Result<()> {
        let found = Self::log(app)?
            .who_attacked(EntityId(victim))
            .map(|a| a.id.into_inner());
        ensure!(
            found == Some(attacker),
            "Expected {victim} attacked by {attacker}, got {found:?}"
        );
        Ok(())
    }

    /// Assert nothing is remembered about `victim`.
    pub fn assert_unattributed(app: &App, victim: u32) -> Result<()> {
        let found = Self::log(app)?.who_attacked(EntityId(victim));
        ensure!(found.is_none(), "Expected no attacker for {victim}, got {found:?}");
        Ok(())
    }
}
