//! Tests for the agglomerative clustering driver.

mod common;

use aglomera::{
    linkage::{
        AverageLinkage, CentroidLinkage, CompleteLinkage, Mean, MinimumEnergyLinkage, ParLinkage, SingleLinkage,
        WardsLinkage,
    },
    metric::{AbsoluteDifference, Euclidean},
    Agnes, DataPoint, Linkage,
};
use float_cmp::approx_eq;
use test_case::test_case;

use common::{checks, data_gen};

/// Clusters random points with both entry points and checks every invariant.
fn check_linkage<L: ParLinkage<DataPoint>>(linkage: L, car: usize, dim: usize, monotonic: bool) -> Result<(), String> {
    let points = data_gen::random_points(car, dim, 42);
    let agnes = Agnes::new(linkage);

    let result = agnes.cluster_instances(points.clone())?;
    checks::check_levels(&result, &points);
    checks::check_partitions(&result, &points);
    checks::check_lineage(&result);
    if monotonic {
        checks::check_monotonic(&result);
    }

    let par_result = agnes.par_cluster_instances(points)?;
    assert_eq!(par_result.len(), result.len());
    for (set, par_set) in result.iter().zip(par_result.iter()) {
        assert_eq!(set, par_set);
        assert_eq!(set.dissimilarity().to_bits(), par_set.dissimilarity().to_bits());
    }

    Ok(())
}

#[test_case(1, 2; "1x2")]
#[test_case(10, 2; "10x2")]
#[test_case(40, 3; "40x3")]
fn single(car: usize, dim: usize) -> Result<(), String> {
    check_linkage(SingleLinkage::new(Euclidean), car, dim, true)
}

#[test_case(1, 2; "1x2")]
#[test_case(10, 2; "10x2")]
#[test_case(40, 3; "40x3")]
fn complete(car: usize, dim: usize) -> Result<(), String> {
    check_linkage(CompleteLinkage::new(Euclidean), car, dim, true)
}

#[test_case(1, 2; "1x2")]
#[test_case(10, 2; "10x2")]
#[test_case(40, 3; "40x3")]
fn average(car: usize, dim: usize) -> Result<(), String> {
    check_linkage(AverageLinkage::new(Euclidean), car, dim, true)
}

#[test_case(1, 2; "1x2")]
#[test_case(10, 2; "10x2")]
#[test_case(40, 3; "40x3")]
fn wards(car: usize, dim: usize) -> Result<(), String> {
    check_linkage(WardsLinkage::new(Euclidean, Mean), car, dim, true)
}

#[test_case(10, 2; "10x2")]
#[test_case(40, 3; "40x3")]
fn centroid(car: usize, dim: usize) -> Result<(), String> {
    check_linkage(CentroidLinkage::new(Euclidean, Mean), car, dim, false)
}

#[test_case(10, 2, 1.0; "10x2 alpha 1")]
#[test_case(20, 3, 0.5; "20x3 alpha 0.5")]
#[test_case(20, 3, 2.0; "20x3 alpha 2")]
fn minimum_energy(car: usize, dim: usize, exponent: f64) -> Result<(), String> {
    check_linkage(MinimumEnergyLinkage::with_exponent(Euclidean, exponent)?, car, dim, false)
}

#[test]
fn textbook_example() -> Result<(), String> {
    let points = data_gen::example_points();
    let agnes = Agnes::new(SingleLinkage::new(Euclidean));
    let result = agnes.cluster_instances(points.clone())?;

    // The closest pair is (2,2) and (1.5,2.5).
    let first = result[1]
        .iter()
        .find(|c| c.cardinality() == 2)
        .ok_or("The first merge should create a pair")?;
    let ids = first.iter().map(DataPoint::id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["(1.5,2.5)", "(2,2)"]);

    let expected = [0.0, 0.5, 1.25, 2.0, 2.8125, 3.25, 16.25].map(f64::sqrt);
    for (actual, expected) in result.dissimilarities().into_iter().zip(expected) {
        assert!(approx_eq!(f64, actual, expected, epsilon = 1e-12), "{actual} != {expected}");
    }

    let max = result
        .dissimilarities()
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(result.single_cluster().dissimilarity(), max);

    // The two well separated groups.
    let two = result.cut(2)?;
    let mut sizes = two.iter().map(|c| c.cardinality()).collect::<Vec<_>>();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 4]);
    let left = two
        .cluster_of(&points[0])
        .ok_or("Every point belongs to a cluster")?;
    for i in [3, 4] {
        assert_eq!(two.cluster_of(&points[i]), Some(left));
    }

    Ok(())
}

#[test]
fn textbook_example_average() -> Result<(), String> {
    let points = data_gen::example_points();
    let result = Agnes::new(AverageLinkage::new(Euclidean)).cluster_instances(points)?;

    let first = result[1]
        .iter()
        .find(|c| c.cardinality() == 2)
        .ok_or("The first merge should create a pair")?;
    assert!(approx_eq!(f64, first.dissimilarity(), 0.5_f64.sqrt(), ulps = 2));
    assert_eq!(first.iter().map(DataPoint::id).collect::<Vec<_>>(), vec!["(1.5,2.5)", "(2,2)"]);

    let max = result.dissimilarities().into_iter().fold(0.0, f64::max);
    assert_eq!(result.single_cluster().dissimilarity(), max);
    checks::check_monotonic(&result);

    Ok(())
}

#[test_case(0; "from leaves")]
#[test_case(5; "from step 5")]
#[test_case(13; "from step 13")]
fn resumes_from_any_step(step: usize) -> Result<(), String> {
    let points = data_gen::random_points(20, 2, 7);
    let agnes = Agnes::new(AverageLinkage::new(Euclidean));
    let result = agnes.cluster_instances(points)?;

    let resumed = agnes.cluster_set(&result[step])?;
    assert_eq!(resumed.len(), result.len() - step);
    for (i, set) in resumed.iter().enumerate() {
        assert_eq!(set, &result[step + i]);
    }

    let par_resumed = agnes.par_cluster_set(&result[step])?;
    for (i, set) in par_resumed.iter().enumerate() {
        assert_eq!(set, &result[step + i]);
    }

    Ok(())
}

#[test]
fn deterministic() -> Result<(), String> {
    let points = data_gen::random_points(30, 2, 3);
    let agnes = Agnes::new(CompleteLinkage::new(Euclidean));

    let first = agnes.cluster_instances(points.clone())?;
    let second = agnes.cluster_instances(points.into_iter().rev())?;

    // Singletons are ordered by instance, so the input order does not matter.
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a, b);
    }
    assert_eq!(first.merges(), second.merges());

    Ok(())
}

#[test]
fn separates_blobs() -> Result<(), String> {
    let points = data_gen::two_blobs(15, 11);
    let agnes = Agnes::new(WardsLinkage::new(Euclidean, Mean));
    let result = agnes.par_cluster_instances(points.clone())?;

    let two = result.cut(2)?;
    for cluster in two {
        let first = cluster.instances()[0].coordinates()[0] < 50.0;
        assert!(cluster.iter().all(|p| (p.coordinates()[0] < 50.0) == first));
        assert_eq!(cluster.cardinality(), 15);
    }

    // The last merge joins the blobs and dwarfs every other merge.
    let dissimilarities = result.dissimilarities();
    let (last, rest) = dissimilarities
        .split_last()
        .ok_or("A result is never empty")?;
    assert!(rest.iter().all(|&d| d * 100.0 < *last));

    Ok(())
}

#[test]
fn dynamic_linkages() -> Result<(), String> {
    let linkages: Vec<Box<dyn Linkage<i32>>> = vec![
        Box::new(SingleLinkage::new(AbsoluteDifference)),
        Box::new(CompleteLinkage::new(AbsoluteDifference)),
        Box::new(AverageLinkage::new(AbsoluteDifference)),
        Box::new(MinimumEnergyLinkage::new(AbsoluteDifference)),
    ];
    let instances = [1, 2, 4, 8, 16, 32];

    for linkage in linkages {
        let name = linkage.name().to_string();
        let result = Agnes::new(linkage).cluster_instances(instances)?;
        assert_eq!(result.len(), instances.len(), "{name}");
        assert_eq!(result.single_cluster().instances(), &instances, "{name}");
        checks::check_partitions(&result, &instances);
    }

    Ok(())
}

#[test]
fn clusters_given_clusters() -> Result<(), String> {
    let clusters = [vec![1, 2], vec![10, 11, 12], vec![5]]
        .into_iter()
        .map(|instances| aglomera::Cluster::from_instances(instances, 1.0));

    let agnes = Agnes::new(SingleLinkage::new(AbsoluteDifference));
    let result = agnes.cluster_clusters(clusters, 1.0)?;

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].dissimilarity(), 1.0);
    assert_eq!(result[1].dissimilarity(), 3.0);
    assert_eq!(result[2].dissimilarity(), 5.0);
    assert_eq!(result.single_cluster().instances(), &[1, 2, 5, 10, 11, 12]);

    assert!(agnes.cluster_clusters(Vec::<aglomera::Cluster<i32>>::new(), 0.0).is_err());

    Ok(())
}
