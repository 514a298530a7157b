//! Orthogonal polynomial bases over a finite interval and lazy least-squares
//! projection of real functions onto them.
//!
//! A [`Basis`] grows one vector at a time, either by Gram-Schmidt on the
//! monomials ([`GramSchmidt`]) or by the Chebyshev recurrence ([`Chebyshev`]).
//! [`Basis::project`] returns a [`Projector`], an iterator that yields the
//! projections of a target function onto the first `0, 1, 2, ...` basis
//! vectors, extending the basis only when a new vector is needed.
//!
//! ```
//! use orthopoly::{Basis, Domain, GramSchmidt, Pointwise};
//!
//! let mut basis = Basis::new(GramSchmidt, Domain::new(-1.0, 1.0).unwrap());
//! let approx: Vec<_> = basis
//!     .project(Pointwise(|x: f64| x * x), 1.0e-3)
//!     .unwrap()
//!     .take(4)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert!((approx[3].eval(0.5) - 0.25).abs() < 1.0e-5);
//! ```

use approx::{AbsDiffEq, RelativeEq};
use ndarray::ScalarOperand;
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Convert an `f64` literal into the scalar type `T` in scope
#[macro_export]
macro_rules! from_f64 {
    ($x:expr) => {
        <T as $crate::Real>::lit($x)
    };
}

pub mod lc;
pub mod poly;
pub mod quad;
pub mod impls;
mod base;

pub use base::*;
pub use lc::LinearCombinationSpace;
pub use poly::Polynomial;
pub use quad::{Quadrature, TrapezoidQuad};

/// Real scalar field used for coefficients, grid points and samples
pub trait Real:
    Float + FromPrimitive + Debug + Display + ScalarOperand
    + AbsDiffEq<Epsilon = Self> + RelativeEq + Send + Sync + 'static
{
    /// Exact or nearest representation of an `f64` constant
    fn lit(x: f64) -> Self;
}

impl Real for f64 {
    #[inline]
    fn lit(x: f64) -> Self {
        x
    }
}

impl Real for f32 {
    #[inline]
    fn lit(x: f64) -> Self {
        x as f32
    }
}
