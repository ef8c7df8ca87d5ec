//! Narrow interface to the engine's entity and world query layer.
//!
//! The toolkit never owns game objects. Everything it knows about the map is
//! asked through these traits, so hosts can back them with a live engine and
//! tests with [`WorldHandle`](crate::world_handle::WorldHandle).

use crate::entity::GameObject;
use crate::position::{Area, GroupId, MapObject, Radius};

/// Read-only world queries.
pub trait WorldView {
    /// Resolves a map label to the object it names.
    fn object_by_label(&self, label: &str) -> Option<MapObject>;

    /// The object standing exactly at `(x, y)`, if any.
    fn object_at(&self, x: i32, y: i32) -> Option<GameObject>;

    /// All objects inside `area`, border included, regardless of owner.
    fn objects_in_area(&self, area: &Area) -> Vec<GameObject>;

    /// All objects within `radius.radius` of the centre, regardless of owner.
    fn objects_in_range(&self, radius: &Radius) -> Vec<GameObject>;

    /// Current members of a group.
    fn group_members(&self, group: GroupId) -> Vec<GameObject>;

    /// Droids owned by `player`.
    fn droids_of(&self, player: i32) -> Vec<GameObject>;

    /// Structures owned by `player`.
    fn structures_of(&self, player: i32) -> Vec<GameObject>;

    /// Whether the two players are currently allied. Players are allied with
    /// themselves.
    fn alliance_exists(&self, a: i32, b: i32) -> bool;
}

/// Group creation and population.
pub trait WorldMut: WorldView {
    /// Creates an empty group and hands its handle to the caller.
    fn new_group(&mut self) -> GroupId;

    /// Adds `object` to `group`.
    fn group_add(&mut self, group: GroupId, object: &GameObject);
}
