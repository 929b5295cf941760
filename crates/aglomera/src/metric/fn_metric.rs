//! A `Metric` built from a plain distance function.

use super::{Metric, ParMetric};

/// Wraps a closure or function `Fn(&I, &I) -> f64` as a named `Metric`.
///
/// # Example
///
/// ```rust
/// use aglomera::metric::{FnMetric, Metric};
///
/// let metric = FnMetric::new("length-difference", |a: &String, b: &String| a.len().abs_diff(b.len()) as f64, true);
///
/// assert_eq!(metric.distance(&"cat".to_string(), &"horse".to_string()), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct FnMetric<F> {
    /// The name of the metric.
    name: String,
    /// The distance function.
    f: F,
    /// Whether `f(a, b) = f(b, a)`.
    symmetric: bool,
    /// Whether `f` costs more than linear time.
    expensive: bool,
}

impl<F> FnMetric<F> {
    /// Creates a new `FnMetric`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the metric.
    /// * `f` - The distance function.
    /// * `symmetric` - Whether `f(a, b) = f(b, a)` for all instances.
    pub fn new<S: Into<String>>(name: S, f: F, symmetric: bool) -> Self {
        Self {
            name: name.into(),
            f,
            symmetric,
            expensive: false,
        }
    }

    /// Marks the metric as expensive to compute.
    #[must_use]
    pub fn with_expensive(mut self, expensive: bool) -> Self {
        self.expensive = expensive;
        self
    }
}

impl<I, F: Fn(&I, &I) -> f64> Metric<I> for FnMetric<F> {
    fn distance(&self, a: &I, b: &I) -> f64 {
        (self.f)(a, b)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_symmetry(&self) -> bool {
        self.symmetric
    }

    fn is_expensive(&self) -> bool {
        self.expensive
    }
}

impl<I: Send + Sync, F: Fn(&I, &I) -> f64 + Send + Sync> ParMetric<I> for FnMetric<F> {}
