//! Some macros for implementing `Metric` and `ParMetric` for smart pointers.

/// Implements `Metric` for a smart pointer.
macro_rules! impl_metric_block {
    () => {
        fn distance(&self, a: &I, b: &I) -> f64 {
            (**self).distance(a, b)
        }

        fn name(&self) -> &str {
            (**self).name()
        }

        fn has_symmetry(&self) -> bool {
            (**self).has_symmetry()
        }

        fn is_expensive(&self) -> bool {
            (**self).is_expensive()
        }
    };
}

/// Implements `ParMetric` for a smart pointer.
macro_rules! impl_par_metric_block {
    () => {
        fn par_distance(&self, a: &I, b: &I) -> f64 {
            (**self).par_distance(a, b)
        }
    };
}

pub(crate) use impl_metric_block;
pub(crate) use impl_par_metric_block;
