//! Data generation utilities for testing.

use aglomera::DataPoint;
use rand::prelude::*;

/// The seven points of the textbook example, labeled by their coordinates.
pub fn example_points() -> Vec<DataPoint> {
    [(2.0, 2.0), (5.5, 4.0), (5.0, 5.0), (1.5, 2.5), (1.0, 1.0), (7.0, 5.0), (5.75, 6.5)]
        .iter()
        .map(|&(x, y)| DataPoint::new(format!("({x},{y})"), vec![x, y]))
        .collect()
}

/// Uniformly random points in `[0, 10)^dim`.
pub fn random_points(car: usize, dim: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|i| {
            let coordinates = (0..dim).map(|_| rng.gen_range(0.0..10.0)).collect();
            DataPoint::new(format!("p{i:04}"), coordinates)
        })
        .collect()
}

/// Two well separated blobs of `car` points each.
pub fn two_blobs(car: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..(2 * car))
        .map(|i| {
            let offset = if i < car { 0.0 } else { 100.0 };
            let coordinates = (0..2).map(|_| offset + rng.gen_range(0.0..1.0)).collect();
            DataPoint::new(format!("b{i:04}"), coordinates)
        })
        .collect()
}
