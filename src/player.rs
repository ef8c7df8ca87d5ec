//! Player relationship filters.

use serde::{Deserialize, Serialize};

use crate::config::CampaignConfig;

/// Restricts which owners qualify during group construction and enumeration.
///
/// The relationship variants are relative to the configured controller, not
/// to live alliance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerFilter {
    /// Every owner, including invalid indices such as the feature owner.
    All,
    /// Exactly the controlling player.
    Allies,
    /// Any valid player index other than the controller.
    #[default]
    Enemies,
    /// A single concrete player index.
    Player(i32),
}

impl PlayerFilter {
    /// Tests whether `player` satisfies this filter under `config`.
    #[must_use]
    pub fn matches(self, player: i32, config: &CampaignConfig) -> bool {
        match self {
            Self::All => true,
            Self::Allies => player == config.controller,
            Self::Enemies => {
                (0..config.max_players).contains(&player) && player != config.controller
            }
            Self::Player(index) => player == index,
        }
    }

    /// Player indices this filter selects when enumerating per-player lists.
    ///
    /// Enumeration spans `0..=max_players`, so `All` and `Enemies` both cover
    /// the scavenger slot at `max_players`. [`matches`](Self::matches) treats
    /// that slot as an invalid owner, which keeps scavengers out of groups
    /// built with `Enemies`.
    #[must_use]
    pub fn players(self, config: &CampaignConfig) -> Vec<i32> {
        let every = 0..=config.max_players;
        match self {
            Self::All => every.collect(),
            Self::Allies => vec![config.controller],
            Self::Enemies => every.filter(|&player| player != config.controller).collect(),
            Self::Player(index) => vec![index],
        }
    }
}

impl From<i32> for PlayerFilter {
    fn from(player: i32) -> Self {
        Self::Player(player)
    }
}
