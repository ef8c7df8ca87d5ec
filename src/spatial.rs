//! Spatial predicates built on the position resolver.
//!
//! Covers the distance primitive and its script-facing calling conventions,
//! the inclusive point-in-area test, and area security checks.

use glam::DVec2;
use log::warn;

use crate::config::CampaignConfig;
use crate::entity::{ObjectKind, StructureType};
use crate::position::{lookup_label, make_pos, Area, EntityRef, MapObject, Position, ResolveError};
use crate::world::WorldView;

/// Euclidean distance between two raw coordinate pairs.
///
/// # Examples
/// ```
/// use fieldsense::spatial::dist_between_two_points;
/// let d = dist_between_two_points(0.0, 0.0, 3.0, 4.0);
/// assert!((d - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn dist_between_two_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    DVec2::new(x1, y1).distance(DVec2::new(x2, y2))
}

/// Distance between two positions.
#[must_use]
pub fn dist(a: Position, b: Position) -> f64 {
    DistanceArgs::Positions(a, b).distance()
}

/// One loose operand of a script-level distance call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceOperand {
    /// A raw coordinate.
    Number(i32),
    /// A resolved position standing for a coordinate pair.
    Position(Position),
}

impl From<i32> for DistanceOperand {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<Position> for DistanceOperand {
    fn from(position: Position) -> Self {
        Self::Position(position)
    }
}

/// The four supported ways of asking for a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceArgs {
    /// `x1, y1, x2, y2`
    Coords(i32, i32, i32, i32),
    /// `pos1, x2, y2`
    PosCoords(Position, i32, i32),
    /// `x1, y1, pos2`
    CoordsPos(i32, i32, Position),
    /// `pos1, pos2`
    Positions(Position, Position),
}

impl DistanceArgs {
    /// Classifies a loose operand list.
    ///
    /// A fourth operand means four raw numbers. Shorter lists are read as
    /// positions wherever an operand is position-shaped, falling back to
    /// numbers elsewhere.
    ///
    /// # Errors
    /// Returns [`ResolveError::DistanceOperands`] when the operands fit none
    /// of the conventions.
    pub fn parse(operands: &[DistanceOperand]) -> Result<Self, ResolveError> {
        use DistanceOperand::{Number as N, Position as P};
        match *operands {
            [N(x1), N(y1), N(x2), N(y2)] => Ok(Self::Coords(x1, y1, x2, y2)),
            [N(x1), N(y1), P(pos2)] => Ok(Self::CoordsPos(x1, y1, pos2)),
            [P(pos1), N(x2), N(y2)] => Ok(Self::PosCoords(pos1, x2, y2)),
            [P(pos1), P(pos2)] => Ok(Self::Positions(pos1, pos2)),
            _ => {
                warn!("cannot compute distance from {operands:?}");
                Err(ResolveError::DistanceOperands(format!("{operands:?}")))
            }
        }
    }

    /// Normalises to the two-point form.
    #[must_use]
    pub const fn points(&self) -> (i32, i32, i32, i32) {
        match *self {
            Self::Coords(x1, y1, x2, y2) => (x1, y1, x2, y2),
            Self::PosCoords(pos1, x2, y2) => (pos1.x, pos1.y, x2, y2),
            Self::CoordsPos(x1, y1, pos2) => (x1, y1, pos2.x, pos2.y),
            Self::Positions(pos1, pos2) => (pos1.x, pos1.y, pos2.x, pos2.y),
        }
    }

    /// Euclidean distance between the two points.
    #[must_use]
    pub fn distance(&self) -> f64 {
        let (x1, y1, x2, y2) = self.points();
        dist_between_two_points(f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2))
    }
}

/// An area given literally or by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaRef {
    /// A map label that should name an area.
    Label(String),
    /// A literal rectangle.
    Area(Area),
}

impl From<&str> for AreaRef {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for AreaRef {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<Area> for AreaRef {
    fn from(area: Area) -> Self {
        Self::Area(area)
    }
}

/// Resolves an [`AreaRef`] to a rectangle.
///
/// # Errors
/// Returns [`ResolveError::UnknownLabel`] or [`ResolveError::NotAnArea`],
/// both logged.
pub fn resolve_area<W>(world: &W, region: impl Into<AreaRef>) -> Result<Area, ResolveError>
where
    W: WorldView + ?Sized,
{
    match region.into() {
        AreaRef::Area(area) => Ok(area),
        AreaRef::Label(label) => match lookup_label(world, &label)? {
            MapObject::Area(area) => Ok(area),
            other => {
                warn!("label {label:?} names a {}, not an area", other.tag());
                Err(ResolveError::NotAnArea(label))
            }
        },
    }
}

/// Whether `pos` lies inside `region`, inclusive on all four bounds.
///
/// # Errors
/// Fails when either the position or the area cannot be resolved.
pub fn within_area<W>(
    world: &W,
    pos: impl Into<EntityRef>,
    region: impl Into<AreaRef>,
) -> Result<bool, ResolveError>
where
    W: WorldView + ?Sized,
{
    let p = make_pos(world, pos)?;
    let area = resolve_area(world, region)?;
    Ok(area.contains(p.x, p.y))
}

/// True when `region` holds nothing hostile to `player`.
///
/// Features never count; every other object must belong to a player allied
/// with `player`.
///
/// # Errors
/// Fails when the area cannot be resolved.
pub fn area_secure<W>(
    world: &W,
    region: impl Into<AreaRef>,
    player: i32,
) -> Result<bool, ResolveError>
where
    W: WorldView + ?Sized,
{
    let area = resolve_area(world, region)?;
    Ok(world
        .objects_in_area(&area)
        .iter()
        .all(|object| object.is_feature() || world.alliance_exists(object.player, player)))
}

/// Counts finished, non-wall structures of `owner` inside `region`.
///
/// `owner` defaults to the configured controller.
///
/// # Errors
/// Fails when the area cannot be resolved.
pub fn count_structures_in_area<W>(
    world: &W,
    config: &CampaignConfig,
    region: impl Into<AreaRef>,
    owner: Option<i32>,
) -> Result<usize, ResolveError>
where
    W: WorldView + ?Sized,
{
    let player = owner.unwrap_or(config.controller);
    let area = resolve_area(world, region)?;
    Ok(world
        .objects_in_area(&area)
        .iter()
        .filter(|object| object.player == player)
        .filter(|object| {
            matches!(
                object.kind,
                ObjectKind::Structure { stat_type, built: true } if stat_type != StructureType::Wall
            )
        })
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DroidType, GameObject};
    use crate::world_handle::WorldHandle;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn world() -> WorldHandle {
        let mut world = WorldHandle::default();
        world.insert_label("base", MapObject::Area(Area::new(10, 10, 20, 20)));
        world.insert_label("rally", MapObject::Position(Position::new(1, 1)));
        world
    }

    #[rstest]
    #[case(DistanceArgs::Coords(0, 0, 3, 4))]
    #[case(DistanceArgs::PosCoords(Position::new(0, 0), 3, 4))]
    #[case(DistanceArgs::CoordsPos(0, 0, Position::new(3, 4)))]
    #[case(DistanceArgs::Positions(Position::new(0, 0), Position::new(3, 4)))]
    fn every_convention_measures_the_same(#[case] args: DistanceArgs) {
        assert_relative_eq!(args.distance(), 5.0);
    }

    #[rstest]
    fn loose_operands_are_classified() {
        let p = Position::new(3, 4);
        let n = DistanceOperand::Number;
        assert_eq!(
            DistanceArgs::parse(&[n(0), n(0), n(3), n(4)]),
            Ok(DistanceArgs::Coords(0, 0, 3, 4))
        );
        assert_eq!(
            DistanceArgs::parse(&[n(0), n(0), p.into()]),
            Ok(DistanceArgs::CoordsPos(0, 0, p))
        );
        assert_eq!(
            DistanceArgs::parse(&[p.into(), n(0), n(0)]),
            Ok(DistanceArgs::PosCoords(p, 0, 0))
        );
        assert_eq!(DistanceArgs::parse(&[p.into(), p.into()]), Ok(DistanceArgs::Positions(p, p)));
        assert!(matches!(
            DistanceArgs::parse(&[n(1), p.into()]),
            Err(ResolveError::DistanceOperands(_))
        ));
    }

    #[rstest]
    #[case((10, 10), true)]
    #[case((20, 20), true)]
    #[case((20, 15), true)]
    #[case((15, 20), true)]
    #[case((21, 15), false)]
    #[case((15, 9), false)]
    fn within_area_is_inclusive(world: WorldHandle, #[case] point: (i32, i32), #[case] inside: bool) {
        assert_eq!(within_area(&world, point, "base"), Ok(inside));
        assert_eq!(within_area(&world, point, Area::new(10, 10, 20, 20)), Ok(inside));
    }

    #[rstest]
    fn bad_area_references_are_reported(world: WorldHandle) {
        assert_eq!(
            within_area(&world, (0, 0), "missing"),
            Err(ResolveError::UnknownLabel("missing".into()))
        );
        assert_eq!(
            within_area(&world, (0, 0), "rally"),
            Err(ResolveError::NotAnArea("rally".into()))
        );
    }

    #[rstest]
    fn area_secure_ignores_features_and_allies(mut world: WorldHandle) {
        world.insert_object(GameObject::feature(1, 12, 12));
        world.insert_object(GameObject::droid(2, DroidType::Weapon, 0, 13, 13));
        world.insert_object(GameObject::droid(3, DroidType::Weapon, 1, 14, 14));
        world.set_alliance(0, 1, true);
        assert_eq!(area_secure(&world, "base", 0), Ok(true));

        world.insert_object(GameObject::droid(4, DroidType::Weapon, 2, 15, 15));
        assert_eq!(area_secure(&world, "base", 0), Ok(false));
        assert_eq!(area_secure(&world, Area::new(0, 0, 5, 5), 0), Ok(true));
    }

    #[rstest]
    fn structure_count_skips_walls_and_blueprints(mut world: WorldHandle) {
        let config = CampaignConfig::default();
        world.insert_object(GameObject::structure(1, StructureType::Factory, true, 0, 11, 11));
        world.insert_object(GameObject::structure(2, StructureType::Wall, true, 0, 12, 11));
        world.insert_object(GameObject::structure(3, StructureType::Research, false, 0, 13, 11));
        world.insert_object(GameObject::structure(4, StructureType::Defense, true, 0, 14, 11));
        world.insert_object(GameObject::structure(5, StructureType::Factory, true, 2, 15, 11));
        world.insert_object(GameObject::droid(6, DroidType::Weapon, 0, 16, 11));
        assert_eq!(count_structures_in_area(&world, &config, "base", None), Ok(2));
        assert_eq!(count_structures_in_area(&world, &config, "base", Some(2)), Ok(1));
    }
}
