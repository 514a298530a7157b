use crate::base::{BasisGenerator, Domain, Result};
use crate::lc::LinearCombinationSpace;
use crate::poly::Polynomial;
use crate::Real;

/// Chebyshev polynomials of the first kind from T_{n+1} = 2x T_n - T_{n-1}.
///
/// These are orthogonal only under the weight 1/sqrt(1 - x^2) on [-1, 1]. On
/// any other domain, or under the unweighted inner product, they still span
/// the polynomials of each degree but projection coefficients computed against
/// them are not least-squares optimal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl<T: Real> BasisGenerator<T> for Chebyshev {
    fn generate(&self, vectors: &[Polynomial<T>], _domain: &Domain<T>) -> Result<Vec<Polynomial<T>>> {
        match vectors {
            [] => Ok(vec![Polynomial::one(), Polynomial::x()]),
            [_] => Ok(vec![Polynomial::x()]),
            [.., t_prev, t_last] => {
                let mut t_next = Polynomial::x().multiply(t_last);
                t_next.scale(from_f64!(2.0));
                t_next.delta(t_prev);
                Ok(vec![t_next])
            }
        }
    }

    fn is_orthonormal(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}
