//! Per-player enumeration over the query layer.
//!
//! The engine enumerates one player at a time. These wrappers accept a
//! [`PlayerFilter`] instead, so `All` and `Enemies` also cover the scavenger
//! slot.

use crate::config::CampaignConfig;
use crate::entity::GameObject;
use crate::player::PlayerFilter;
use crate::world::WorldView;

/// Droids of every player selected by `filter`, player by player.
pub fn enum_droids<W>(world: &W, config: &CampaignConfig, filter: PlayerFilter) -> Vec<GameObject>
where
    W: WorldView + ?Sized,
{
    filter
        .players(config)
        .into_iter()
        .flat_map(|player| world.droids_of(player))
        .collect()
}

/// Structures of every player selected by `filter`, player by player.
pub fn enum_structures<W>(
    world: &W,
    config: &CampaignConfig,
    filter: PlayerFilter,
) -> Vec<GameObject>
where
    W: WorldView + ?Sized,
{
    filter
        .players(config)
        .into_iter()
        .flat_map(|player| world.structures_of(player))
        .collect()
}
