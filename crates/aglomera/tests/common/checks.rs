//! Checking properties of clustering results.

use core::hash::Hash;
use std::{collections::HashMap, sync::Arc};

use aglomera::{Cluster, ClusteringResult};

/// Checks the number and sizes of the levels, and the first and last levels.
pub fn check_levels<I: Ord + Hash + Clone + core::fmt::Debug>(result: &ClusteringResult<I>, instances: &[I]) {
    let n = instances.len();
    assert_eq!(result.len(), n);
    for (i, set) in result.iter().enumerate() {
        assert_eq!(set.len(), n - i, "Level {i} has {} clusters", set.len());
    }

    assert_eq!(result[0].dissimilarity(), 0.0);
    assert!(result[0].iter().all(|c| c.cardinality() == 1 && c.is_leaf()));

    let root = result.single_cluster();
    assert_eq!(result[n - 1].len(), 1);
    assert_eq!(root.cardinality(), n);

    let mut sorted = instances.to_vec();
    sorted.sort();
    assert_eq!(root.instances(), sorted.as_slice());
}

/// Checks that every instance is in exactly one cluster of every level.
pub fn check_partitions<I: Ord + Hash + Clone + core::fmt::Debug>(result: &ClusteringResult<I>, instances: &[I]) {
    for (i, set) in result.iter().enumerate() {
        let mut counts = HashMap::new();
        for cluster in set {
            for instance in cluster {
                *counts.entry(instance.clone()).or_insert(0_usize) += 1;
            }
        }
        assert_eq!(counts.len(), instances.len(), "Level {i} misses instances");
        assert!(counts.values().all(|&c| c == 1), "Level {i} repeats instances");
        assert_eq!(set.num_instances(), instances.len());
    }
}

/// Checks that merge dissimilarities never decrease.
pub fn check_monotonic<I>(result: &ClusteringResult<I>) {
    let dissimilarities = result.dissimilarities();
    for (i, w) in dissimilarities.windows(2).enumerate() {
        assert!(w[0] <= w[1] + 1e-9, "Level {} at {} after {}", i + 1, w[1], w[0]);
    }
    assert!(result.is_monotonic());
    assert!(result.inversions().is_empty());
}

/// Checks that every merged cluster holds exactly the instances of its
/// parents and that its parents come from the previous level.
pub fn check_lineage<I: Ord + Hash + Clone + core::fmt::Debug>(result: &ClusteringResult<I>) {
    for i in 1..result.len() {
        let previous = &result[i - 1];
        let merged = result[i]
            .iter()
            .filter(|c| !previous.iter().any(|p| core::ptr::eq(*c, p)))
            .collect::<Vec<_>>();
        assert_eq!(merged.len(), 1, "Level {i} should create exactly one cluster");

        let merged = merged[0];
        let (a, b) = merged
            .shared_parents()
            .unwrap_or_else(|| unreachable!("Merged clusters have parents"));
        assert!(previous.shared().iter().any(|p| Arc::ptr_eq(p, a)));
        assert!(previous.shared().iter().any(|p| Arc::ptr_eq(p, b)));
        assert_eq!(merged.dissimilarity(), result[i].dissimilarity());

        let union = a.union(b);
        assert_eq!(merged.instances(), union.instances());
        assert_eq!(merged, &Cluster::merged(Arc::clone(b), Arc::clone(a), merged.dissimilarity()));
    }
}
