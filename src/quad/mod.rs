use itertools::{zip_eq, Itertools};
use ndarray::{Array1, ArrayView1};

use crate::base::{Domain, Error, Result, Target};
use crate::poly::Polynomial;
use crate::Real;

/// Composite trapezoidal rule over (possibly) unevenly spaced nodes x
pub fn trapezoid<T: Real>(x: ArrayView1<T>, y: ArrayView1<T>) -> T {
    let half = from_f64!(0.5);
    zip_eq(x.iter().tuple_windows(), y.iter().tuple_windows())
        .fold(T::zero(), |acc, ((&x0, &x1), (&y0, &y1))| {
            acc + (x1 - x0) * (y0 + y1) * half
        })
}

/// A fixed set of nodes over which sampled functions are integrated
pub trait Quadrature<T: Real> {
    fn nodes(&self) -> ArrayView1<T>;

    /// Integrate samples y taken at `nodes()`
    fn integrate(&self, y: ArrayView1<T>) -> T;

    /// Integral of the product of two sampled functions
    fn inner_product(&self, f: ArrayView1<T>, g: ArrayView1<T>) -> T {
        let y = &f * &g;
        self.integrate(y.view())
    }
}

/// Trapezoidal quadrature on the grid a, a+dx, a+2dx, ... < b with b appended,
/// so the final interval may be shorter than dx
#[derive(Clone, Debug)]
pub struct TrapezoidQuad<T: Real> {
    x: Array1<T>,
    dx: T,
}

impl<T: Real> TrapezoidQuad<T> {
    pub fn new(domain: &Domain<T>, dx: T) -> Result<Self> {
        if !(dx > T::zero()) || !dx.is_finite() {
            return Err(Error::InvalidConfiguration {
                reason: format!("grid step must be positive and finite, got {}", dx),
            });
        }
        let (a, b) = domain.bounds();
        let n = ((b - a) / dx).ceil().to_usize().ok_or_else(|| Error::InvalidConfiguration {
            reason: format!("grid step {} is too small for the domain {}", dx, domain),
        })?;
        let mut x: Vec<T> = (0..n)
            .map(|k| a + from_f64!(k as f64) * dx)
            .take_while(|&xk| xk < b)
            .collect();
        x.push(b);

        Ok(Self { x: Array1::from(x), dx })
    }

    pub fn step(&self) -> T {
        self.dx
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample a target on the grid, checking its length and finiteness
    pub fn sample<F: Target<T>>(&self, target: &mut F) -> Result<Array1<T>> {
        let y = target.sample(&self.x)?;
        if y.len() != self.x.len() {
            return Err(Error::InvalidFunction {
                reason: format!("expected {} samples, got {}", self.x.len(), y.len()),
            });
        }
        if let Some(i) = y.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidFunction {
                reason: format!("non-finite value {} at x = {}", y[i], self.x[i]),
            });
        }
        Ok(y)
    }

    /// Trapezoid approximation of the inner product of sampled values f with
    /// the polynomial e
    pub fn project_samples(&self, f: ArrayView1<T>, e: &Polynomial<T>) -> T {
        let ex = e.eval_array(self.x.view());
        self.inner_product(f, ex.view())
    }
}

impl<T: Real> Quadrature<T> for TrapezoidQuad<T> {
    fn nodes(&self) -> ArrayView1<T> {
        self.x.view()
    }

    fn integrate(&self, y: ArrayView1<T>) -> T {
        trapezoid(self.x.view(), y)
    }
}

/// One-shot trapezoid inner product of a target with a basis vector over
/// the domain grid with step dx
pub fn trapz_inner_product<T, F>(target: &mut F, e: &Polynomial<T>, domain: &Domain<T>, dx: T) -> Result<T>
where T: Real, F: Target<T>
{
    let quad = TrapezoidQuad::new(domain, dx)?;
    let fx = quad.sample(target)?;
    Ok(quad.project_samples(fx.view(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pointwise, Vectorized};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    #[test]
    fn test_grid_appends_endpoint() {
        let dom = Domain::new(0.0, 1.0).unwrap();
        let quad = TrapezoidQuad::new(&dom, 0.3).unwrap();
        let expected = [0.0, 0.3, 0.6, 0.9, 1.0];
        assert_eq!(quad.len(), expected.len());
        for (x, e) in quad.nodes().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*x, *e, epsilon = 1.0e-12);
        }
        assert_eq!(quad.nodes()[4], 1.0);
        let widths = quad.nodes().iter().tuple_windows().map(|(a, b)| b - a).collect_vec();
        assert_abs_diff_eq!(widths[3], 0.1, epsilon = 1.0e-12);
    }

    #[test]
    fn test_grid_exact_multiple() {
        let dom = Domain::new(-1.0, 1.0).unwrap();
        let quad = TrapezoidQuad::new(&dom, 0.5).unwrap();
        assert_eq!(quad.nodes(), array![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_trapezoid_uneven() {
        let x = array![0.0, 1.0, 3.0];
        let y = array![1.0, 3.0, 3.0];
        // 1 * (1+3)/2 + 2 * (3+3)/2
        assert_relative_eq!(trapezoid(x.view(), y.view()), 8.0);
        // linear functions are integrated exactly
        let dom = Domain::new(0.0, 1.0).unwrap();
        let quad = TrapezoidQuad::new(&dom, 0.3).unwrap();
        let y = quad.nodes().mapv(|x| 2.0 * x + 1.0);
        assert_relative_eq!(quad.integrate(y.view()), 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_trapz_inner_product_converges() {
        let dom = Domain::new(0.0, std::f64::consts::PI).unwrap();
        let e = Polynomial::one();
        let coarse = trapz_inner_product(&mut Pointwise(f64::sin), &e, &dom, 0.1).unwrap();
        let fine = trapz_inner_product(&mut Pointwise(f64::sin), &e, &dom, 0.001).unwrap();
        assert!((fine - 2.0).abs() < (coarse - 2.0).abs());
        assert_abs_diff_eq!(fine, 2.0, epsilon = 1.0e-6);
    }

    #[test]
    fn test_invalid_step() {
        let dom = Domain::<f64>::default();
        for &dx in &[0.0, -0.1, f64::NAN, f64::INFINITY] {
            match TrapezoidQuad::new(&dom, dx) {
                Err(Error::InvalidConfiguration { .. }) => {}
                other => panic!("expected InvalidConfiguration, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_sample_rejects_bad_output() {
        let dom = Domain::<f64>::default();
        let quad = TrapezoidQuad::new(&dom, 0.5).unwrap();
        let mut short = Vectorized(|_x: &Array1<f64>| array![1.0, 2.0]);
        assert!(matches!(quad.sample(&mut short), Err(Error::InvalidFunction { .. })));
        let mut pole = Pointwise(|x: f64| 1.0 / x);
        assert!(matches!(quad.sample(&mut pole), Err(Error::InvalidFunction { .. })));
    }
}
