//! Live game objects as seen by the scripting layer.
//! Includes identifiers, object categories and the owning player of each handle.
use serde::{Deserialize, Serialize};

/// Entity identifier with type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl EntityId {
    /// The raw engine id.
    #[must_use]
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

/// Role of a droid, deciding which scripted behaviours may command it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroidType {
    /// Armed combat unit.
    Weapon,
    /// Spotter for artillery.
    Sensor,
    /// Truck. Builds structures and never joins combat groups.
    Construct,
    /// Field repair unit.
    Repair,
    /// Commander leading other droids.
    Command,
    /// Infantry.
    Cyborg,
    /// Air or ground transport.
    Transporter,
}

/// Structure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    /// Command centre.
    Hq,
    /// Unit factory.
    Factory,
    /// Power generator.
    PowerGen,
    /// Research facility.
    Research,
    /// Defensive emplacement.
    Defense,
    /// Wall segment.
    Wall,
    /// Anything else.
    Other,
}

/// Category of a live object together with its category-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    /// A mobile unit.
    Droid {
        /// Role of the droid.
        droid_type: DroidType,
    },
    /// A building.
    Structure {
        /// Building category.
        stat_type: StructureType,
        /// `false` while the structure is still a blueprint or under construction.
        built: bool,
    },
    /// Scenery such as trees, wrecks or oil resources.
    Feature,
}

impl ObjectKind {
    /// Short tag used in diagnostics.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Droid { .. } => "droid",
            Self::Structure { .. } => "structure",
            Self::Feature => "feature",
        }
    }
}

/// Snapshot of a unit, structure or feature handle.
///
/// Handles are copied out of the world on every query, so holding one never
/// keeps engine state alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameObject {
    /// Engine id.
    pub id: EntityId,
    /// Category and category-specific data.
    #[serde(flatten)]
    pub kind: ObjectKind,
    /// Owning player. Features use `-1`.
    pub player: i32,
    /// Map x coordinate in tiles.
    pub x: i32,
    /// Map y coordinate in tiles.
    pub y: i32,
}

impl GameObject {
    /// A droid snapshot.
    #[must_use]
    pub const fn droid(id: u32, droid_type: DroidType, player: i32, x: i32, y: i32) -> Self {
        Self {
            id: EntityId(id),
            kind: ObjectKind::Droid { droid_type },
            player,
            x,
            y,
        }
    }

    /// A structure snapshot.
    #[must_use]
    pub const fn structure(
        id: u32,
        stat_type: StructureType,
        built: bool,
        player: i32,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            id: EntityId(id),
            kind: ObjectKind::Structure { stat_type, built },
            player,
            x,
            y,
        }
    }

    /// A feature snapshot, owned by no player.
    #[must_use]
    pub const fn feature(id: u32, x: i32, y: i32) -> Self {
        Self {
            id: EntityId(id),
            kind: ObjectKind::Feature,
            player: -1,
            x,
            y,
        }
    }

    /// The droid's role, or `None` for structures and features.
    #[must_use]
    pub const fn droid_type(&self) -> Option<DroidType> {
        match self.kind {
            ObjectKind::Droid { droid_type } => Some(droid_type),
            _ => None,
        }
    }

    /// Whether this is a droid.
    #[must_use]
    pub const fn is_droid(&self) -> bool {
        matches!(self.kind, ObjectKind::Droid { .. })
    }

    /// Whether this is a feature.
    #[must_use]
    pub const fn is_feature(&self) -> bool {
        matches!(self.kind, ObjectKind::Feature)
    }
}

/// Returns `true` for droids without a weapon: sensors, trucks and repair units.
///
/// Non-droids are never system droids; asking about one is logged at trace
/// level since callers usually pass mixed enumerations.
#[must_use]
pub fn is_system_droid(object: &GameObject) -> bool {
    match object.droid_type() {
        Some(DroidType::Sensor | DroidType::Construct | DroidType::Repair) => true,
        Some(_) => false,
        None => {
            log::trace!(
                "non-droid {} of player {} is not a system droid",
                object.kind.tag(),
                object.player
            );
            false
        }
    }
}

/// Removes repeated handles, keeping the first occurrence of each id.
#[must_use]
pub fn remove_duplicates(objects: &[GameObject]) -> Vec<GameObject> {
    let mut seen = hashbrown::HashSet::with_capacity(objects.len());
    objects
        .iter()
        .filter(|object| seen.insert(object.id))
        .copied()
        .collect()
}
