//! In-memory world state answering the query layer traits.
//!
//! This handle stores objects, labels, alliances and groups for hosts that do
//! not run a full engine, such as the command-line tool and the tests. It
//! can be loaded from a JSON [`Scenario`].

use bevy_ecs::prelude::Resource;
use hashbrown::{HashMap, HashSet};
use serde::Deserialize;

use crate::config::CampaignConfig;
use crate::entity::{EntityId, GameObject, ObjectKind};
use crate::position::{Area, GroupId, MapObject, Radius};
use crate::spatial::dist_between_two_points;
use crate::world::{WorldMut, WorldView};

/// Serialised description of a map used to seed a [`WorldHandle`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Player layout and clock settings.
    pub config: CampaignConfig,
    /// Live objects in insertion order.
    pub objects: Vec<GameObject>,
    /// Named map objects.
    pub labels: HashMap<String, MapObject>,
    /// Pairs of allied players.
    pub alliances: Vec<(i32, i32)>,
}

impl Scenario {
    /// Parses a scenario from JSON.
    ///
    /// # Errors
    /// Returns the underlying parse error when the JSON does not match.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Resource, Debug, Default)]
/// In-memory snapshot of the map queried by the toolkit.
pub struct WorldHandle {
    /// Live objects in insertion order; enumerations follow this order.
    objects: Vec<GameObject>,
    /// Named map objects.
    labels: HashMap<String, MapObject>,
    /// Allied player pairs stored with the smaller index first.
    alliances: HashSet<(i32, i32)>,
    /// Group membership by entity id.
    groups: HashMap<GroupId, Vec<EntityId>>,
    next_group: u32,
}

impl WorldHandle {
    /// Builds a world from a parsed scenario.
    #[must_use]
    pub fn from_scenario(scenario: Scenario) -> Self {
        let mut world = Self::default();
        for object in scenario.objects {
            world.insert_object(object);
        }
        for (label, object) in scenario.labels {
            world.insert_label(label, object);
        }
        for (a, b) in scenario.alliances {
            world.set_alliance(a, b, true);
        }
        world
    }

    /// Adds an object, replacing any object with the same id in place.
    pub fn insert_object(&mut self, object: GameObject) {
        if let Some(existing) = self.objects.iter_mut().find(|o| o.id == object.id) {
            *existing = object;
        } else {
            self.objects.push(object);
        }
    }

    /// Removes an object; it disappears from every group as well.
    pub fn remove_object(&mut self, id: EntityId) -> Option<GameObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        for members in self.groups.values_mut() {
            members.retain(|&member| member != id);
        }
        Some(self.objects.remove(index))
    }

    /// Looks up a live object by id.
    #[must_use]
    pub fn object(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Names `object` as `label`, replacing any previous meaning.
    pub fn insert_label(&mut self, label: impl Into<String>, object: MapObject) {
        self.labels.insert(label.into(), object);
    }

    /// Makes `a` and `b` allies, or breaks their alliance.
    pub fn set_alliance(&mut self, a: i32, b: i32, allied: bool) {
        let key = (a.min(b), a.max(b));
        if allied {
            self.alliances.insert(key);
        } else {
            self.alliances.remove(&key);
        }
    }

    /// Labels in sorted order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    fn owned_by(&self, player: i32, pred: impl Fn(&ObjectKind) -> bool) -> Vec<GameObject> {
        self.objects
            .iter()
            .filter(|o| o.player == player && pred(&o.kind))
            .copied()
            .collect()
    }
}

impl WorldView for WorldHandle {
    fn object_by_label(&self, label: &str) -> Option<MapObject> {
        self.labels.get(label).copied()
    }

    fn object_at(&self, x: i32, y: i32) -> Option<GameObject> {
        self.objects.iter().find(|o| o.x == x && o.y == y).copied()
    }

    fn objects_in_area(&self, area: &Area) -> Vec<GameObject> {
        self.objects
            .iter()
            .filter(|o| area.contains(o.x, o.y))
            .copied()
            .collect()
    }

    fn objects_in_range(&self, radius: &Radius) -> Vec<GameObject> {
        let reach = f64::from(radius.radius);
        self.objects
            .iter()
            .filter(|o| {
                dist_between_two_points(
                    f64::from(radius.x),
                    f64::from(radius.y),
                    f64::from(o.x),
                    f64::from(o.y),
                ) <= reach
            })
            .copied()
            .collect()
    }

    fn group_members(&self, group: GroupId) -> Vec<GameObject> {
        self.groups
            .get(&group)
            .map(|members| members.iter().filter_map(|&id| self.object(id)).copied().collect())
            .unwrap_or_default()
    }

    fn droids_of(&self, player: i32) -> Vec<GameObject> {
        self.owned_by(player, |kind| matches!(kind, ObjectKind::Droid { .. }))
    }

    fn structures_of(&self, player: i32) -> Vec<GameObject> {
        self.owned_by(player, |kind| matches!(kind, ObjectKind::Structure { .. }))
    }

    fn alliance_exists(&self, a: i32, b: i32) -> bool {
        a == b || self.alliances.contains(&(a.min(b), a.max(b)))
    }
}

impl WorldMut for WorldHandle {
    fn new_group(&mut self) -> GroupId {
        self.next_group += 1;
        let id = GroupId(self.next_group);
        self.groups.insert(id, Vec::new());
        id
    }

    fn group_add(&mut self, group: GroupId, object: &GameObject) {
        let members = self.groups.entry(group).or_default();
        if !members.contains(&object.id) {
            members.push(object.id);
        }
    }
}
