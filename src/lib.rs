#![cfg_attr(docsrs, feature(doc_cfg))]
//! Spatial reasoning and combat attribution for scripted RTS factions.
//! Normalises map references into positions and unit groups, finds
//! concentrations of units and remembers recent attacks.
pub mod attack_log;
pub mod clock;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod entity;
pub mod enumerate;
pub mod group;
pub mod logging;
pub mod once;
pub mod player;
pub mod plugin;
pub mod position;
pub mod spatial;
pub mod world;
pub mod world_handle;

// Re-export commonly used items
pub use attack_log::{AttackEvent, AttackLog};
pub use clock::SimClock;
pub use cluster::{find_clusters, Cluster, Clusters, Located};
pub use config::{CampaignConfig, ConfigError};
pub use entity::{
    is_system_droid, remove_duplicates, DroidType, EntityId, GameObject, ObjectKind,
    StructureType,
};
pub use enumerate::{enum_droids, enum_structures};
pub use group::make_group;
pub use logging::init as init_logging;
pub use once::CallOnceRegistry;
pub use player::PlayerFilter;
pub use plugin::{AttackReported, CampaignPlugin};
pub use position::{make_pos, Area, EntityRef, GroupId, MapObject, Position, Radius, ResolveError};
pub use spatial::{
    area_secure, count_structures_in_area, dist, within_area, AreaRef, DistanceArgs,
    DistanceOperand,
};
pub use world::{WorldMut, WorldView};
pub use world_handle::{Scenario, WorldHandle};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use fieldsense::prelude::*;
    //! ```

    pub use crate::cluster::find_clusters;
    pub use crate::group::make_group;
    pub use crate::position::make_pos;
    pub use crate::spatial::within_area;
    pub use crate::AttackLog;
    pub use crate::CampaignConfig;
    pub use crate::PlayerFilter;
    pub use crate::{WorldMut, WorldView};
}
