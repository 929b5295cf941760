//! A labeled point with `f64` coordinates.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A labeled point with `f64` coordinates.
///
/// Equality, ordering and hashing only look at the `id`, so ids are expected
/// to be unique within one clustering. Coordinates are exposed through
/// `AsRef<[f64]>` so that the vector metrics in [`metric`](crate::metric) can
/// be used directly.
///
/// # Example
///
/// ```rust
/// use aglomera::{metric::Euclidean, DataPoint, Metric};
///
/// let a = DataPoint::new("a", vec![0.0, 0.0]);
/// let b = DataPoint::new("b", vec![3.0, 4.0]);
///
/// assert_eq!(Euclidean.distance(&a, &b), 5.0);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "a");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataPoint {
    /// The unique identifier of the point.
    id: String,
    /// The coordinates of the point.
    coordinates: Vec<f64>,
}

impl DataPoint {
    /// Creates a new `DataPoint`.
    #[must_use]
    pub fn new<S: Into<String>>(id: S, coordinates: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            coordinates,
        }
    }

    /// Returns the identifier of the point.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the coordinates of the point.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.coordinates.len()
    }
}

impl AsRef<[f64]> for DataPoint {
    fn as_ref(&self) -> &[f64] {
        &self.coordinates
    }
}

impl PartialEq for DataPoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DataPoint {}

impl PartialOrd for DataPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DataPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for DataPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for DataPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.id)
    }
}
