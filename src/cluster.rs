//! Single-pass greedy clustering of positioned items.
//!
//! Items are visited once, in input order. Each item joins the first cluster
//! whose running centroid lies strictly closer than the clustering radius, or
//! starts a new cluster. The result is approximate: there is no rebalancing
//! pass and the outcome depends on input order. Cost is O(n·k) for n items
//! and k clusters, so callers should bound the input to a region.

use log::{debug, warn};

use crate::entity::GameObject;
use crate::position::Position;
use crate::spatial::dist;

/// Anything with a map location.
pub trait Located {
    /// Where the item currently stands.
    fn location(&self) -> Position;
}

impl Located for Position {
    fn location(&self) -> Position {
        *self
    }
}

impl Located for GameObject {
    fn location(&self) -> Position {
        Position::from(self)
    }
}

/// A group of nearby items and their running centroid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster<T> {
    /// Members in insertion order.
    pub members: Vec<T>,
    /// Running floor-mean of member coordinates.
    pub centroid: Position,
}

impl<T> Cluster<T> {
    fn seed(item: T, at: Position) -> Self {
        Self {
            members: vec![item],
            centroid: Position::new(at.x, at.y),
        }
    }

    /// Appends `item`, moving the centroid by the incremental mean.
    fn absorb(&mut self, item: T, at: Position) {
        let n = self.members.len();
        self.centroid = Position::new(
            running_mean(self.centroid.x, n, at.x),
            running_mean(self.centroid.y, n, at.y),
        );
        self.members.push(item);
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members. Never true for a cluster built
    /// by [`find_clusters`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of a clustering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clusters<T> {
    /// Clusters in creation order.
    pub clusters: Vec<Cluster<T>>,
    /// Index of the first cluster to reach the largest size.
    pub max_idx: usize,
    /// Size of that cluster; zero when there were no items.
    pub max_count: usize,
}

impl<T> Default for Clusters<T> {
    fn default() -> Self {
        Self {
            clusters: Vec::new(),
            max_idx: 0,
            max_count: 0,
        }
    }
}

impl<T> Clusters<T> {
    /// The largest cluster, earliest first on ties.
    #[must_use]
    pub fn largest(&self) -> Option<&Cluster<T>> {
        if self.max_count == 0 {
            return None;
        }
        self.clusters.get(self.max_idx)
    }

    const fn note_size(&mut self, index: usize, size: usize) {
        if size > self.max_count {
            self.max_idx = index;
            self.max_count = size;
        }
    }
}

/// `floor((n * mean + value) / (n + 1))`, where `n` counts the values
/// already averaged into `mean`.
///
/// # Examples
/// ```
/// use fieldsense::cluster::running_mean;
/// assert_eq!(running_mean(0, 1, 1), 0);
/// assert_eq!(running_mean(10, 5, 0), 8);
/// ```
#[must_use]
pub fn running_mean(mean: i32, n: usize, value: i32) -> i32 {
    let count = i64::try_from(n).unwrap_or(i64::MAX - 1);
    let next = count
        .saturating_mul(i64::from(mean))
        .saturating_add(i64::from(value))
        .div_euclid(count + 1);
    // A mean of i32 values always fits back into i32.
    i32::try_from(next).unwrap_or(mean)
}

/// Partitions `items` into clusters of radius `size`.
///
/// A non-positive `size` is logged and yields one cluster per item.
pub fn find_clusters<T>(items: &[T], size: f64) -> Clusters<T>
where
    T: Located + Clone,
{
    if size <= 0.0 || size.is_nan() {
        warn!("clustering radius should be positive, got {size}");
    }

    let mut result = Clusters::default();
    for item in items {
        let at = item.location();
        let home = result
            .clusters
            .iter()
            .position(|cluster| dist(cluster.centroid, at) < size);

        if let Some((index, cluster)) =
            home.and_then(|index| result.clusters.get_mut(index).map(|cluster| (index, cluster)))
        {
            cluster.absorb(item.clone(), at);
            let grown = cluster.len();
            result.note_size(index, grown);
            continue;
        }
        result.clusters.push(Cluster::seed(item.clone(), at));
        result.note_size(result.clusters.len() - 1, 1);
    }

    debug!(
        "clustered {} items into {} clusters, largest #{} with {}",
        items.len(),
        result.clusters.len(),
        result.max_idx,
        result.max_count
    );
    result
}
