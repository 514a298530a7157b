use log::{debug, trace};
use ndarray::Array1;

use crate::base::{Basis, BasisGenerator, Result, Target};
use crate::lc::LinearCombinationSpace;
use crate::poly::Polynomial;
use crate::quad::{Quadrature, TrapezoidQuad};
use crate::Real;

/// Lazy sequence of projections of a target onto the first 0, 1, 2, ...
/// vectors of a basis.
///
/// The first item is the zero polynomial. Item k adds the trapezoid
/// projection coefficient of the target on basis vector k-1, extending the
/// basis only if that vector does not exist yet. The target is sampled once,
/// on a grid fixed at construction, and every coefficient uses those samples.
///
/// The projector holds the basis mutably for its whole lifetime, so vectors
/// appended while iterating remain in the basis afterwards and are reused by
/// later projections. After an error is yielded the iterator is exhausted.
pub struct Projector<'a, T, G, F>
where T: Real, G: BasisGenerator<T>, F: Target<T>
{
    basis: &'a mut Basis<T, G>,
    target: F,
    quad: TrapezoidQuad<T>,
    fx: Option<Array1<T>>,
    approx: Polynomial<T>,
    terms: usize,
    started: bool,
    done: bool,
}

impl<'a, T, G, F> Projector<'a, T, G, F>
where T: Real, G: BasisGenerator<T>, F: Target<T>
{
    pub fn new(basis: &'a mut Basis<T, G>, target: F, dx: T) -> Result<Self> {
        let quad = TrapezoidQuad::new(basis.domain(), dx)?;
        if !basis.generator().is_orthonormal() {
            debug!(
                "projecting onto a {} basis on {}: coefficients are not least-squares optimal",
                basis.generator().name(), basis.domain()
            );
        }
        Ok(Self {
            basis,
            target,
            quad,
            fx: None,
            approx: Polynomial::zero(),
            terms: 0,
            started: false,
            done: false,
        })
    }

    /// Number of vectors currently in the underlying basis
    pub fn dim(&self) -> usize {
        self.basis.dim()
    }

    /// Number of basis vectors used by the latest approximation
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// The latest approximation, zero before any term is added
    pub fn current(&self) -> &Polynomial<T> {
        &self.approx
    }

    pub fn basis(&self) -> &Basis<T, G> {
        &*self.basis
    }

    pub fn quadrature(&self) -> &TrapezoidQuad<T> {
        &self.quad
    }

    /// Samples of the target on the grid, taken on first use
    fn take_samples(&mut self) -> Result<Array1<T>> {
        match self.fx.take() {
            Some(fx) => Ok(fx),
            None => self.quad.sample(&mut self.target),
        }
    }

    /// Trapezoid estimate of the squared residual int (f - p)^2 of the latest
    /// approximation p
    pub fn residual_sq(&mut self) -> Result<T> {
        let fx = self.take_samples()?;
        let mut r = fx.clone();
        self.fx = Some(fx);
        r.delta(&self.approx.eval_array(self.quad.nodes()));
        Ok(self.quad.inner_product(r.view(), r.view()))
    }

    fn step(&mut self) -> Result<Polynomial<T>> {
        let fx = self.take_samples()?;
        let i = self.terms;
        let extended = self.basis.extend_to(i + 1);
        let fx = self.fx.insert(fx);
        extended?;

        let e = &self.basis.vectors()[i];
        let coef = self.quad.project_samples(fx.view(), e);
        trace!("projection term {}: coefficient {}", i, coef);
        self.approx.add_scalar_mul(coef, e);
        self.terms = i + 1;

        Ok(self.approx.clone())
    }
}

impl<'a, T, G, F> Iterator for Projector<'a, T, G, F>
where T: Real, G: BasisGenerator<T>, F: Target<T>
{
    type Item = Result<Polynomial<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(self.approx.clone()));
        }
        let res = self.step();
        if res.is_err() {
            self.done = true;
        }
        Some(res)
    }
}
