//! Builds unit groups from loosely specified references.
//!
//! A script may name what it wants grouped in many ways: a label, a single
//! handle, a list of handles, a spot on the map, an area, a radius or an
//! existing group. [`make_group`] expands the reference into candidates,
//! keeps the combat droids whose owner passes a [`PlayerFilter`] and adds them
//! to a fresh group.

use log::{debug, warn};

use crate::config::CampaignConfig;
use crate::entity::{DroidType, GameObject};
use crate::player::PlayerFilter;
use crate::position::{lookup_label, EntityRef, GroupId, MapObject, ResolveError};
use crate::world::{WorldMut, WorldView};

/// Expands `what` into the candidate objects it covers.
///
/// Areas, radii and groups are enumerated for every owner; filtering happens
/// later. A position stands for whatever object sits exactly there, and a
/// missing object becomes an empty slot rather than an error.
///
/// # Errors
/// Returns [`ResolveError::UnknownLabel`] for unknown labels.
pub fn candidates<W>(world: &W, what: &EntityRef) -> Result<Vec<Option<GameObject>>, ResolveError>
where
    W: WorldView + ?Sized,
{
    let target = match what {
        EntityRef::Label(label) => lookup_label(world, label)?,
        EntityRef::Collection(objects) => return Ok(objects.clone()),
        EntityRef::Object(object) => *object,
    };
    let found = match target {
        MapObject::Position(position) => vec![world.object_at(position.x, position.y)],
        MapObject::Entity(object) => vec![Some(object)],
        MapObject::Area(area) => world.objects_in_area(&area).into_iter().map(Some).collect(),
        MapObject::Radius(radius) => world.objects_in_range(&radius).into_iter().map(Some).collect(),
        MapObject::Group { id, .. } => world.group_members(id).into_iter().map(Some).collect(),
    };
    Ok(found)
}

/// Whether `object` may join a scripted combat group.
///
/// Only droids qualify, trucks never do, and the owner must pass `filter`.
#[must_use]
pub fn is_group_eligible(object: &GameObject, filter: PlayerFilter, config: &CampaignConfig) -> bool {
    object
        .droid_type()
        .is_some_and(|droid_type| droid_type != DroidType::Construct)
        && filter.matches(object.player, config)
}

/// Creates a new group holding every eligible droid covered by `reference`.
///
/// `owners` defaults to [`PlayerFilter::Enemies`]. Empty candidate slots are
/// logged and skipped without aborting the build.
///
/// # Errors
/// Returns a [`ResolveError`] when `reference` cannot be expanded. The original
/// reference is logged and no group is created.
pub fn make_group<W>(
    world: &mut W,
    config: &CampaignConfig,
    reference: impl Into<EntityRef>,
    owners: Option<PlayerFilter>,
) -> Result<GroupId, ResolveError>
where
    W: WorldMut + ?Sized,
{
    let what = reference.into();
    let filter = owners.unwrap_or_default();
    let found =
        candidates(&*world, &what).inspect_err(|err| warn!("cannot parse {what:?}: {err}"))?;

    let group = world.new_group();
    let mut added = 0_usize;
    for candidate in found {
        let Some(object) = candidate else {
            debug!("skipping empty candidate while grouping {}", what.tag());
            continue;
        };
        if is_group_eligible(&object, filter, config) {
            world.group_add(group, &object);
            added += 1;
        }
    }
    debug!("group {group:?} built from {} with {added} droids", what.tag());
    Ok(group)
}
