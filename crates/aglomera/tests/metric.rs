//! Tests for the metrics and the distance cache.

mod common;

use std::sync::Arc;

use aglomera::{
    linkage::{AverageLinkage, CompleteLinkage, SingleLinkage},
    metric::{CachedMetric, Euclidean, Manhattan, Metric, SquaredEuclidean},
    Agnes, DataPoint,
};
use float_cmp::approx_eq;
use test_case::test_case;

use common::data_gen;

#[test]
fn vector_metrics() {
    let a = DataPoint::new("a", vec![0.0, 0.0]);
    let b = DataPoint::new("b", vec![3.0, 4.0]);

    assert!(approx_eq!(f64, Euclidean.distance(&a, &b), 5.0, ulps = 2));
    assert!(approx_eq!(f64, SquaredEuclidean.distance(&a, &b), 25.0, ulps = 2));
    assert!(approx_eq!(f64, Manhattan.distance(&a, &b), 7.0, ulps = 2));
    assert_eq!(Euclidean.distance(&a, &a), 0.0);
}

#[test_case(1; "single")]
#[test_case(25; "small")]
#[test_case(100; "large")]
fn cache_matches_metric(car: usize) -> Result<(), String> {
    let points = data_gen::random_points(car, 3, 23);
    let cached = CachedMetric::new(Euclidean, points.clone())?;
    assert_eq!(cached.len(), car);

    for a in &points {
        for b in &points {
            let expected = Euclidean.distance(a, b);
            assert_eq!(cached.try_distance(a, b)?, expected);
            assert_eq!(cached.distance(a, b), expected);
        }
    }

    Ok(())
}

#[test]
fn cache_is_strict() -> Result<(), String> {
    let points = data_gen::random_points(5, 2, 1);
    let outsider = DataPoint::new("outsider", vec![0.0, 0.0]);

    let mut cached = CachedMetric::new(Euclidean, points.clone())?;
    assert!(!cached.contains(&outsider));
    assert!(cached.try_distance(&points[0], &outsider).is_err());

    cached.clear();
    assert!(cached.is_empty());
    assert!(cached.try_distance(&points[0], &points[1]).is_err());

    assert!(CachedMetric::new(Euclidean, Vec::<DataPoint>::new()).is_err());

    Ok(())
}

#[test]
fn cached_clustering_matches_direct() -> Result<(), String> {
    let points = data_gen::random_points(30, 2, 99);
    let cached = Arc::new(CachedMetric::new(Euclidean, points.clone())?);

    let direct = Agnes::new(AverageLinkage::new(Euclidean)).cluster_instances(points.clone())?;
    let through_cache = Agnes::new(AverageLinkage::new(Arc::clone(&cached))).cluster_instances(points.clone())?;
    for (a, b) in direct.iter().zip(through_cache.iter()) {
        assert_eq!(a, b);
    }

    // One cache can serve several linkages.
    let single = Agnes::new(SingleLinkage::new(Arc::clone(&cached))).par_cluster_instances(points.clone())?;
    let complete = Agnes::new(CompleteLinkage::new(cached)).par_cluster_instances(points)?;
    assert!(single.single_cluster().dissimilarity() <= complete.single_cluster().dissimilarity());

    Ok(())
}
