//! A `Metric` decorator that serves distances from a precomputed table.

use std::{collections::HashMap, hash::Hash};

use super::{Metric, ParMetric};

/// A `Metric` that precomputes all pairwise distances over a fixed set of
/// instances and serves them with O(1) lookups.
///
/// Every instance is assigned a dense index at construction. Duplicate
/// instances share one index. The table is symmetric and only the upper
/// triangle is computed with the wrapped metric; the rest is mirrored.
///
/// Querying an instance that was not part of the construction set is a
/// contract violation. [`try_distance`](CachedMetric::try_distance) reports it
/// as an error and [`distance`](Metric::distance) panics. Centroid-based
/// linkages create synthetic instances, so they should wrap the base metric
/// rather than a cache unless the centroids are known in advance.
///
/// # Example
///
/// ```rust
/// use aglomera::metric::{AbsoluteDifference, CachedMetric, Metric};
///
/// let cached = CachedMetric::new(AbsoluteDifference, [1_i32, 4, 9]).unwrap();
///
/// assert_eq!(cached.len(), 3);
/// assert_eq!(cached.distance(&1, &9), 8.0);
/// assert!(cached.try_distance(&1, &2).is_err());
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct CachedMetric<I, M> {
    /// The wrapped metric.
    metric: M,
    /// The dense index of each cached instance.
    indices: HashMap<I, usize>,
    /// The row-major `n x n` table of distances.
    table: Vec<f64>,
}

impl<I: Eq + Hash + Clone, M: Metric<I>> CachedMetric<I, M> {
    /// Creates a new `CachedMetric` and fills its table.
    ///
    /// # Arguments
    ///
    /// * `metric` - The metric to cache.
    /// * `instances` - Every instance that will ever be queried.
    ///
    /// # Errors
    ///
    /// * If `instances` is empty.
    /// * If the metric is not symmetric.
    pub fn new<It: IntoIterator<Item = I>>(metric: M, instances: It) -> Result<Self, String> {
        let (indices, items) = Self::index(&metric, instances)?;
        let n = items.len();

        let mut table = vec![0.0; n * n];
        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate().skip(i) {
                let d = metric.distance(a, b);
                table[i * n + j] = d;
                table[j * n + i] = d;
            }
        }

        ftlog::debug!("Cached {n} x {n} {} distances.", metric.name());
        Ok(Self { metric, indices, table })
    }

    /// Assigns dense indices to the unique instances.
    fn index<It: IntoIterator<Item = I>>(metric: &M, instances: It) -> Result<(HashMap<I, usize>, Vec<I>), String> {
        if !metric.has_symmetry() {
            return Err(format!("Cannot cache the asymmetric metric {}", metric.name()));
        }

        let mut indices = HashMap::new();
        let mut items = Vec::new();
        for item in instances {
            if !indices.contains_key(&item) {
                indices.insert(item.clone(), items.len());
                items.push(item);
            }
        }

        if items.is_empty() {
            return Err("Cannot cache distances for an empty set of instances".to_string());
        }

        Ok((indices, items))
    }

    /// Returns the cached distance between two instances.
    ///
    /// # Errors
    ///
    /// If either instance was not part of the construction set, or if the
    /// cache has been cleared.
    pub fn try_distance(&self, a: &I, b: &I) -> Result<f64, String> {
        let n = self.indices.len();
        match (self.indices.get(a), self.indices.get(b)) {
            (Some(&i), Some(&j)) => Ok(self.table[i * n + j]),
            _ => Err(format!(
                "Instance not indexed by the cached {} metric ({n} instances cached)",
                self.metric.name()
            )),
        }
    }

    /// Returns the dense index of an instance, if it is cached.
    #[must_use]
    pub fn index_of(&self, instance: &I) -> Option<usize> {
        self.indices.get(instance).copied()
    }

    /// Whether the instance is cached.
    #[must_use]
    pub fn contains(&self, instance: &I) -> bool {
        self.indices.contains_key(instance)
    }

    /// Returns the number of unique cached instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the cache holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the wrapped metric.
    #[must_use]
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Releases the table and the index map.
    ///
    /// Every later query fails.
    pub fn clear(&mut self) {
        self.indices = HashMap::new();
        self.table = Vec::new();
    }
}

impl<I: Eq + Hash + Clone, M: Metric<I>> Metric<I> for CachedMetric<I, M> {
    #[allow(clippy::panic)]
    fn distance(&self, a: &I, b: &I) -> f64 {
        self.try_distance(a, b).unwrap_or_else(|e| panic!("{e}"))
    }

    fn name(&self) -> &str {
        self.metric.name()
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn is_expensive(&self) -> bool {
        false
    }
}

impl<I: Eq + Hash + Clone + Send + Sync, M: ParMetric<I>> ParMetric<I> for CachedMetric<I, M> {}
