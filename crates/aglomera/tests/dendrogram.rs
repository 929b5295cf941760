//! Tests for querying the dendrogram.

use aglomera::{cluster::Merge, linkage::SingleLinkage, metric::AbsoluteDifference, Agnes, ClusteringResult};

fn clustered() -> Result<ClusteringResult<i32>, String> {
    Agnes::new(SingleLinkage::new(AbsoluteDifference)).cluster_instances([1, 2, 4, 8, 16])
}

#[test]
fn merges() -> Result<(), String> {
    let result = clustered()?;
    let merges = result.merges();

    // Parents are ordered by their instances, so the merged cluster comes first.
    let expected = [(0, 1, 1.0, 2), (5, 2, 2.0, 3), (6, 3, 4.0, 4), (7, 4, 8.0, 5)]
        .map(|(cluster_a, cluster_b, dissimilarity, size)| Merge {
            cluster_a,
            cluster_b,
            dissimilarity,
            size,
        });
    assert_eq!(merges, expected);

    Ok(())
}

#[test]
fn cut() -> Result<(), String> {
    let result = clustered()?;

    assert!(result.cut(0).is_err());
    assert!(result.cut(6).is_err());
    assert_eq!(result.cut(5)?, result.first());
    assert_eq!(result.cut(1)?.len(), 1);

    let three = result.cut(3)?;
    assert_eq!(three.len(), 3);
    // Surviving clusters keep their order and the merged cluster goes last.
    assert_eq!(three.labels(&[1, 2, 4, 8, 16, 32]), vec![Some(2), Some(2), Some(2), Some(0), Some(1), None]);

    Ok(())
}

#[test]
fn at_dissimilarity() -> Result<(), String> {
    let result = clustered()?;

    assert_eq!(result.at_dissimilarity(-1.0).len(), 5);
    assert_eq!(result.at_dissimilarity(0.5).len(), 5);
    assert_eq!(result.at_dissimilarity(1.0).len(), 4);
    assert_eq!(result.at_dissimilarity(3.9).len(), 3);
    assert_eq!(result.at_dissimilarity(100.0).len(), 1);

    Ok(())
}

#[test]
fn lineage() -> Result<(), String> {
    let result = clustered()?;
    let root = result.single_cluster();

    assert_eq!(root.depth(), 4);
    let leaves = root.leaves().iter().map(|c| c.instances()[0]).collect::<Vec<_>>();
    assert_eq!(leaves.len(), 5);

    let (a, b) = root.parents().ok_or("The root has parents")?;
    assert_eq!(a.instances(), &[1, 2, 4, 8]);
    assert_eq!(b.instances(), &[16]);
    assert!(result[3].iter().any(|c| c == a));

    Ok(())
}

#[test]
fn display() -> Result<(), String> {
    let result = clustered()?;
    let lines = result.to_string();
    let lines = lines.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "0.000\t{(1), (2), (4), (8), (16)}");
    assert_eq!(lines[2], "2.000\t{(8), (16), (1;2;4)}");
    assert_eq!(lines[4], "8.000\t{(1;2;4;8;16)}");

    Ok(())
}
