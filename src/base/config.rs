use crate::base::{Error, Result};
use crate::Real;

/// Parameters of a projection run
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionConfig<T: Real> {
    /// Trapezoid grid step
    pub dx: T,
}

impl<T: Real> ProjectionConfig<T> {
    pub fn new(dx: T) -> Self {
        Self { dx }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(from_f64!(1.0e-3))
    }

    pub fn with_step(self, dx: T) -> Self {
        Self { dx, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dx > T::zero() && self.dx.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration {
                reason: format!("grid step must be positive and finite, got {}", self.dx),
            })
        }
    }
}

impl<T: Real> Default for ProjectionConfig<T> {
    fn default() -> Self {
        Self::new_with_defaults()
    }
}
