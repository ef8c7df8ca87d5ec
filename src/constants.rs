//! Campaign defaults shared across the toolkit.
//!
//! These mirror the values the scripted campaign layer assumes when no
//! [`CampaignConfig`](crate::config::CampaignConfig) overrides them.

/// Player index the relationship filters treat as "self".
pub const DEFAULT_CONTROLLER: i32 = 0;
/// Number of regular player slots. The scavenger slot sits at this index.
pub const DEFAULT_MAX_PLAYERS: i32 = 8;
/// Game-time units elapsing per logical frame.
pub const DEFAULT_TICKS_PER_FRAME: u64 = 100;
/// Frames an attack stays attributable before pruning drops it.
pub const DEFAULT_ATTACK_HORIZON_FRAMES: u64 = 100;
