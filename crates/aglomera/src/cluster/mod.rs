//! Provides the `Cluster`, `ClusterSet` and `ClusteringResult` structs, which
//! together describe a dendrogram.
//!
//! A `Cluster` is a node of the dendrogram. A `ClusterSet` is the partition of
//! the instances after some number of merges, and a `ClusteringResult` is the
//! sequence of all such partitions from the initial clusters to the root.

#[allow(clippy::module_name_repetitions)]
mod _cluster;
mod cluster_set;
mod clustering_result;

pub use _cluster::Cluster;
pub use cluster_set::ClusterSet;
pub use clustering_result::{ClusteringResult, Merge};
