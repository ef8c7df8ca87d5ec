//! Position resolution for everything a script can point at.
//!
//! Scripts refer to locations through labels, live handles, map areas, radii
//! and plain coordinates. [`make_pos`] folds all of them into a [`Position`]
//! value snapshot. References without a location fail with a [`ResolveError`]
//! after a diagnostic is logged, so a malformed directive never halts the
//! caller.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{EntityId, GameObject};
use crate::world::WorldView;

/// Failure to interpret an [`EntityRef`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The query layer knows no object under this label.
    #[error("no object labelled {0:?}")]
    UnknownLabel(String),
    /// A label resolved, but not to an area.
    #[error("label {0:?} does not name an area")]
    NotAnArea(String),
    /// The reference shape carries no information this operation can use.
    #[error("cannot interpret {0} reference")]
    Unsupported(&'static str),
    /// A loose distance operand list matched none of the calling conventions.
    #[error("malformed distance operands: {0}")]
    DistanceOperands(String),
}

/// A map location, optionally tagged with the entity it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Map x coordinate in tiles.
    pub x: i32,
    /// Map y coordinate in tiles.
    pub y: i32,
    /// The entity this position was read from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
}

impl Position {
    /// The two-literal form: a bare coordinate pair.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, id: None }
    }

    /// Tags the position with the entity it belongs to.
    #[must_use]
    pub const fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<&GameObject> for Position {
    fn from(object: &GameObject) -> Self {
        Self::new(object.x, object.y).with_id(object.id)
    }
}

/// Axis-aligned map rectangle spanning `(x, y)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Right edge.
    pub x2: i32,
    /// Bottom edge.
    pub y2: i32,
}

impl Area {
    /// Rectangle from the corner `(x, y)` to the opposite corner `(x2, y2)`.
    #[must_use]
    pub const fn new(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        Self { x, y, x2, y2 }
    }

    /// Floor-divided midpoint of the two corners.
    #[must_use]
    pub fn centre(&self) -> Position {
        Position::new(midpoint(self.x, self.x2), midpoint(self.y, self.y2))
    }

    /// Inclusive on all four bounds.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x2 && y >= self.y && y <= self.y2
    }
}

/// `floor((a + b) / 2)` without overflowing `i32`.
fn midpoint(a: i32, b: i32) -> i32 {
    let mid = (i64::from(a) + i64::from(b)).div_euclid(2);
    // Lies between `a` and `b`, so it always fits.
    i32::try_from(mid).unwrap_or(a)
}

/// Circular map region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Radius {
    /// Centre x coordinate.
    pub x: i32,
    /// Centre y coordinate.
    pub y: i32,
    /// Reach in tiles, boundary included.
    pub radius: i32,
}

impl Radius {
    /// Circle of `radius` tiles around `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }
}

/// Opaque handle to an engine-owned unit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// Anything a label can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MapObject {
    /// A droid, structure or feature snapshot.
    Entity(GameObject),
    /// A bare map point.
    Position(Position),
    /// A rectangle.
    Area(Area),
    /// A circle.
    Radius(Radius),
    /// A unit group, with the location the engine reports for it when known.
    Group {
        /// The group handle.
        id: GroupId,
        /// Reported x coordinate.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<i32>,
        /// Reported y coordinate.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<i32>,
    },
}

impl MapObject {
    /// Short tag used in diagnostics.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Entity(object) => object.kind.tag(),
            Self::Position(_) => "position",
            Self::Area(_) => "area",
            Self::Radius(_) => "radius",
            Self::Group { .. } => "group",
        }
    }

    /// A group handle with no known location.
    #[must_use]
    pub const fn group(id: GroupId) -> Self {
        Self::Group { id, x: None, y: None }
    }

    /// A group handle placed at `(x, y)`.
    #[must_use]
    pub const fn group_at(id: GroupId, x: i32, y: i32) -> Self {
        Self::Group {
            id,
            x: Some(x),
            y: Some(y),
        }
    }

    fn position(&self) -> Result<Position, ResolveError> {
        match *self {
            // Keep the id so attack attribution can find the entity again.
            Self::Entity(object) => Ok(Position::from(&object)),
            Self::Position(position) => Ok(position),
            Self::Radius(radius) => Ok(Position::new(radius.x, radius.y)),
            Self::Area(area) => Ok(area.centre()),
            Self::Group {
                x: Some(x),
                y: Some(y),
                ..
            } => Ok(Position::new(x, y)),
            Self::Group { .. } => Err(ResolveError::Unsupported(self.tag())),
        }
    }
}

/// The argument shape accepted by the resolver and the group builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    /// A map label, resolved through the query layer.
    Label(String),
    /// An already resolved object.
    Object(MapObject),
    /// A raw list of candidate handles. Entries may be missing.
    Collection(Vec<Option<GameObject>>),
}

impl EntityRef {
    /// Short tag used in diagnostics.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Label(_) => "label",
            Self::Object(object) => object.tag(),
            Self::Collection(_) => "collection",
        }
    }
}

impl From<&str> for EntityRef {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for EntityRef {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<MapObject> for EntityRef {
    fn from(object: MapObject) -> Self {
        Self::Object(object)
    }
}

impl From<GameObject> for EntityRef {
    fn from(object: GameObject) -> Self {
        Self::Object(MapObject::Entity(object))
    }
}

impl From<Position> for EntityRef {
    fn from(position: Position) -> Self {
        Self::Object(MapObject::Position(position))
    }
}

impl From<(i32, i32)> for EntityRef {
    fn from(coords: (i32, i32)) -> Self {
        Self::from(Position::from(coords))
    }
}

impl From<Area> for EntityRef {
    fn from(area: Area) -> Self {
        Self::Object(MapObject::Area(area))
    }
}

impl From<Radius> for EntityRef {
    fn from(radius: Radius) -> Self {
        Self::Object(MapObject::Radius(radius))
    }
}

impl From<GroupId> for EntityRef {
    fn from(id: GroupId) -> Self {
        Self::Object(MapObject::group(id))
    }
}

impl From<Vec<GameObject>> for EntityRef {
    fn from(objects: Vec<GameObject>) -> Self {
        Self::Collection(objects.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<GameObject>>> for EntityRef {
    fn from(objects: Vec<Option<GameObject>>) -> Self {
        Self::Collection(objects)
    }
}

/// Looks up `label`, logging a diagnostic when it is unknown.
///
/// # Errors
/// Returns [`ResolveError::UnknownLabel`] when the query layer has no such
/// object.
pub fn lookup_label<W>(world: &W, label: &str) -> Result<MapObject, ResolveError>
where
    W: WorldView + ?Sized,
{
    world.object_by_label(label).ok_or_else(|| {
        warn!("failed to resolve label {label:?}");
        ResolveError::UnknownLabel(label.to_owned())
    })
}

/// Normalises any reference into a [`Position`].
///
/// Handles keep their id and areas collapse to their centre. Positions,
/// radii and located groups pass their coordinates through unchanged, so
/// resolving a resolved position is a no-op. Raw collections and groups
/// without a reported location have no position.
///
/// # Errors
/// Returns [`ResolveError::UnknownLabel`] for unknown labels and
/// [`ResolveError::Unsupported`] for references without a location. Both
/// are logged before returning.
pub fn make_pos<W>(world: &W, reference: impl Into<EntityRef>) -> Result<Position, ResolveError>
where
    W: WorldView + ?Sized,
{
    let what = reference.into();
    let object = match &what {
        EntityRef::Label(label) => lookup_label(world, label)?,
        EntityRef::Object(object) => *object,
        EntityRef::Collection(_) => {
            warn!("position of {} reference is not implemented", what.tag());
            return Err(ResolveError::Unsupported(what.tag()));
        }
    };
    object
        .position()
        .inspect_err(|err| warn!("failed to resolve {what:?}: {err}"))
}
