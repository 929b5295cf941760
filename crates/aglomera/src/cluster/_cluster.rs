//! The `Cluster` is the node type of the dendrogram.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use std::{collections::hash_map::DefaultHasher, sync::Arc};

use crate::utils;

/// An immutable, canonically ordered bag of instances.
///
/// A `Cluster` is either built directly from instances, in which case it has
/// no parents, or by merging two existing clusters at some dissimilarity, in
/// which case it keeps shared handles to both parents. The instances are
/// always kept sorted, and the parents are always kept in a canonical order,
/// so that merging `a` with `b` gives the same cluster as merging `b` with
/// `a`.
///
/// # Equality
///
/// Two clusters are equal when they are the same object, or when both have
/// parents that are pairwise equal and their dissimilarities agree within
/// [`EPSILON`](crate::utils::EPSILON), or when neither has parents and they
/// hold the same instances at the same dissimilarity. The hash is computed
/// once at construction from the instances (no parents) or from the hashes of
/// the parents, so it agrees with equality.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use aglomera::Cluster;
///
/// let a = Arc::new(Cluster::new(3));
/// let b = Arc::new(Cluster::new(1));
///
/// let ab = Cluster::merged(Arc::clone(&a), Arc::clone(&b), 2.0);
/// let ba = Cluster::merged(b, a, 2.0);
///
/// assert_eq!(ab, ba);
/// assert_eq!(ab.instances(), &[1, 3]);
/// assert_eq!(ab.dissimilarity(), 2.0);
/// assert_eq!(ab.to_string(), "(1;3)");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cluster<I> {
    /// The sorted instances of the `Cluster`.
    instances: Vec<I>,
    /// The canonically ordered parents, if the `Cluster` came from a merge.
    parents: Option<(Arc<Cluster<I>>, Arc<Cluster<I>>)>,
    /// The dissimilarity at which the `Cluster` was formed.
    dissimilarity: f64,
    /// The structural hash.
    #[cfg_attr(feature = "serde", serde(skip))]
    hash: u64,
}

impl<I: core::fmt::Debug> core::fmt::Debug for Cluster<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cluster")
            .field("cardinality", &self.instances.len())
            .field("dissimilarity", &self.dissimilarity)
            .field("instances", &self.instances)
            .field("parents", &self.parents.is_some())
            .finish()
    }
}

impl<I: Ord + Hash + Clone> Cluster<I> {
    /// Creates a singleton `Cluster` at dissimilarity 0.
    #[must_use]
    pub fn new(instance: I) -> Self {
        Self::leaf(vec![instance], 0.0)
    }

    /// Creates a `Cluster` without parents from the given instances.
    ///
    /// The instances are sorted. Duplicates are kept.
    #[must_use]
    pub fn from_instances<It: IntoIterator<Item = I>>(instances: It, dissimilarity: f64) -> Self {
        let mut instances = instances.into_iter().collect::<Vec<_>>();
        instances.sort();
        Self::leaf(instances, dissimilarity)
    }

    /// Creates the empty `Cluster`.
    ///
    /// It is the identity of [`union`](Cluster::union).
    #[must_use]
    pub fn empty() -> Self {
        Self::leaf(Vec::new(), 0.0)
    }

    /// Creates a `Cluster` by merging two parents at the given dissimilarity.
    ///
    /// The instances are the sorted union of the instances of the parents.
    #[must_use]
    pub fn merged(parent1: Arc<Self>, parent2: Arc<Self>, dissimilarity: f64) -> Self {
        let (parent1, parent2) = if parent2.canonical_cmp(&parent1) == Ordering::Less {
            (parent2, parent1)
        } else {
            (parent1, parent2)
        };

        let instances = utils::merge_sorted(&parent1.instances, &parent2.instances);

        let mut hasher = DefaultHasher::new();
        hasher.write_u8(1);
        hasher.write_u64(parent1.hash);
        hasher.write_u64(parent2.hash);

        Self {
            instances,
            parents: Some((parent1, parent2)),
            dissimilarity,
            hash: hasher.finish(),
        }
    }

    /// Returns a `Cluster`, without parents, holding the instances of both
    /// clusters at the larger of their dissimilarities.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let instances = utils::merge_sorted(&self.instances, &other.instances);
        Self::leaf(instances, self.dissimilarity.max(other.dissimilarity))
    }

    /// Builds a `Cluster` without parents from already sorted instances.
    fn leaf(instances: Vec<I>, dissimilarity: f64) -> Self {
        let mut hasher = DefaultHasher::new();
        hasher.write_u8(0);
        instances.hash(&mut hasher);

        Self {
            instances,
            parents: None,
            dissimilarity,
            hash: hasher.finish(),
        }
    }

    /// Whether the `Cluster` contains the given instance.
    #[must_use]
    pub fn contains(&self, instance: &I) -> bool {
        self.instances.binary_search(instance).is_ok()
    }

    /// The total order used to canonicalize parents.
    ///
    /// Instances are compared lexicographically, then dissimilarities. Equal
    /// bags of instances that differ in structure put clusters without
    /// parents first and then compare structural hashes.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.instances
            .cmp(&other.instances)
            .then_with(|| self.dissimilarity.total_cmp(&other.dissimilarity))
            .then_with(|| self.parents.is_some().cmp(&other.parents.is_some()))
            .then_with(|| self.hash.cmp(&other.hash))
    }
}

impl<I> Cluster<I> {
    /// Returns the number of instances in the `Cluster`.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.instances.len()
    }

    /// Whether the `Cluster` has no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the sorted instances.
    #[must_use]
    pub fn instances(&self) -> &[I] {
        &self.instances
    }

    /// Returns an iterator over the sorted instances.
    pub fn iter(&self) -> core::slice::Iter<'_, I> {
        self.instances.iter()
    }

    /// Returns the dissimilarity at which the `Cluster` was formed.
    #[must_use]
    pub const fn dissimilarity(&self) -> f64 {
        self.dissimilarity
    }

    /// Returns the parents, if the `Cluster` came from a merge.
    #[must_use]
    pub fn parents(&self) -> Option<(&Self, &Self)> {
        self.parents.as_ref().map(|(a, b)| (a.as_ref(), b.as_ref()))
    }

    /// Returns the shared handles to the parents, if any.
    #[must_use]
    pub const fn shared_parents(&self) -> Option<&(Arc<Self>, Arc<Self>)> {
        self.parents.as_ref()
    }

    /// Whether the `Cluster` has no parents.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.parents.is_none()
    }

    /// Returns the clusters without parents that this one was built from.
    ///
    /// For a dendrogram built from raw instances, these are the singletons.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        let mut leaves = Vec::new();
        let mut frontier = vec![self];
        while let Some(c) = frontier.pop() {
            match c.parents() {
                Some((a, b)) => {
                    frontier.push(b);
                    frontier.push(a);
                }
                None => leaves.push(c),
            }
        }
        leaves
    }

    /// Returns the height of the merge tree below this `Cluster`.
    ///
    /// Clusters without parents have depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frontier = vec![(self, 0)];
        while let Some((c, d)) = frontier.pop() {
            depth = depth.max(d);
            if let Some((a, b)) = c.parents() {
                frontier.push((a, d + 1));
                frontier.push((b, d + 1));
            }
        }
        depth
    }
}

impl<I: PartialEq> PartialEq for Cluster<I> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        if self.hash != other.hash || !utils::approx_eq(self.dissimilarity, other.dissimilarity) {
            return false;
        }
        match (&self.parents, &other.parents) {
            (Some((a1, a2)), Some((b1, b2))) => a1 == b1 && a2 == b2,
            (None, None) => self.instances == other.instances,
            _ => false,
        }
    }
}

impl<I: Eq> Eq for Cluster<I> {}

impl<I> Hash for Cluster<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<'a, I> IntoIterator for &'a Cluster<I> {
    type Item = &'a I;
    type IntoIter = core::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

impl<I: core::fmt::Display> core::fmt::Display for Cluster<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, instance) in self.instances.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{instance}")?;
        }
        write!(f, ")")
    }
}
