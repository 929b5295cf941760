#![deny(clippy::correctness)]
#![doc = include_str!("../README.md")]

pub mod agnes;
pub mod cluster;
mod data_point;
pub mod linkage;
pub mod metric;
pub mod utils;

pub use agnes::{Agnes, TieBreak};
pub use cluster::{Cluster, ClusterSet, ClusteringResult};
pub use data_point::DataPoint;
pub use linkage::Linkage;
pub use metric::Metric;

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
