use log::warn;

use crate::base::{BasisGenerator, Domain, Error, Result};
use crate::lc::LinearCombinationSpace;
use crate::poly::Polynomial;
use crate::Real;

/// Orthonormal basis from the classical Gram-Schmidt process on 1, x, x^2, ...
/// under the exact domain inner product
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GramSchmidt;

impl<T: Real> BasisGenerator<T> for GramSchmidt {
    fn generate(&self, vectors: &[Polynomial<T>], domain: &Domain<T>) -> Result<Vec<Polynomial<T>>> {
        let n = vectors.len();
        let mut poly = Polynomial::monomial(n);
        for e in vectors {
            let k = domain.inner_product(&poly, e);
            poly.add_scalar_mul(-k, e);
        }
        let norm_sq = domain.inner_product(&poly, &poly);
        if !(norm_sq > T::zero()) || !norm_sq.is_finite() {
            warn!("Gram-Schmidt vector {} on {} has squared norm {}", n, domain, norm_sq);
            return Err(Error::NumericalDegeneracy {
                index: n,
                norm_sq: norm_sq.to_f64().unwrap_or(f64::NAN),
            });
        }
        poly.scale(norm_sq.sqrt().recip());

        Ok(vec![poly])
    }

    fn is_orthonormal(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "gram-schmidt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Basis;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_orthonormal(){
        for &(a, b) in &[(-1.0, 1.0), (0.0, 1.0), (-2.0, 3.0)] {
            let mut basis = Basis::new(GramSchmidt, Domain::new(a, b).unwrap());
            basis.extend_to(7).unwrap();
            let dom = *basis.domain();
            for (i, ei) in basis.vectors().iter().enumerate() {
                assert_eq!(ei.degree(), i);
                for (j, ej) in basis.vectors().iter().enumerate() {
                    let ip = dom.inner_product(ei, ej);
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(ip, expected, epsilon = 1.0e-8);
                }
            }
        }
    }

    #[test]
    fn test_legendre_on_unit_interval(){
        // Normalized Legendre polynomials: sqrt(1/2), sqrt(3/2) x, sqrt(5/2) (3x^2 - 1)/2
        let mut basis = Basis::new(GramSchmidt, Domain::<f64>::default());
        basis.extend_to(3).unwrap();
        let v = basis.vectors();
        assert_abs_diff_eq!(v[0], Polynomial::from_slice(&[0.5_f64.sqrt()]), epsilon = 1.0e-12);
        assert_abs_diff_eq!(v[1], Polynomial::from_slice(&[0.0, 1.5_f64.sqrt()]), epsilon = 1.0e-12);
        let c = 2.5_f64.sqrt() / 2.0;
        assert_abs_diff_eq!(v[2], Polynomial::from_slice(&[-c, 0.0, 3.0 * c]), epsilon = 1.0e-12);
    }

    #[test]
    fn test_non_finite_norm_is_rejected(){
        let dom = Domain::new(0.0, 1.0).unwrap();
        let prior = vec![Polynomial::from_slice(&[f64::NAN])];
        match GramSchmidt.generate(&prior, &dom) {
            Err(Error::NumericalDegeneracy { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NumericalDegeneracy, got {:?}", other),
        }
    }

    #[test]
    fn test_underflowing_domain_is_rejected(){
        // int_0^b x^2 dx underflows to zero for b this small
        let mut basis = Basis::new(GramSchmidt, Domain::new(0.0, 1.0e-200).unwrap());
        basis.extend().unwrap();
        match basis.extend() {
            Err(Error::NumericalDegeneracy { index, norm_sq }) => {
                assert_eq!(index, 1);
                assert!(norm_sq <= 0.0);
            }
            other => panic!("expected NumericalDegeneracy, got {:?}", other),
        }
        assert_eq!(basis.dim(), 1);
    }
}
