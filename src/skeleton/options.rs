//! Centerline construction parameters.

use crate::error::CenterlineError;
use num_traits::Float;

/// Options for centerline construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterlineOptions<F> {
    /// Arc-length step used to resample every ring. The absolute value is
    /// used. Smaller steps give a denser Voronoi diagram at a higher cost.
    pub interpolation_distance: F,
}

impl<F: Float> Default for CenterlineOptions<F> {
    fn default() -> Self {
        Self {
            interpolation_distance: F::from(0.5).unwrap(),
        }
    }
}

impl<F: Float> CenterlineOptions<F> {
    /// Creates options with the given interpolation distance.
    pub fn with_interpolation_distance(interpolation_distance: F) -> Self {
        Self {
            interpolation_distance,
        }
    }

    /// Returns the absolute interpolation distance.
    ///
    /// # Errors
    ///
    /// [`CenterlineError::InvalidInterpolationDistance`] if it is zero or not
    /// finite.
    pub fn step(&self) -> Result<F, CenterlineError> {
        let step = self.interpolation_distance.abs();
        if step.is_finite() && step > F::zero() {
            Ok(step)
        } else {
            Err(CenterlineError::InvalidInterpolationDistance {
                distance: self.interpolation_distance.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}
