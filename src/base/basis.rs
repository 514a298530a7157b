use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::base::{
    Chebyshev, Domain, Error, GramSchmidt, ProjectionConfig, Projector, Result, Target,
};
use crate::lc::LinearCombinationSpace;
use crate::poly::Polynomial;
use crate::quad::TrapezoidQuad;
use crate::Real;

/// Strategy producing the next basis vector(s) from the ones already present
pub trait BasisGenerator<T: Real> {
    /// Vectors to append after `vectors`, in index order. Must not depend on
    /// anything other than the domain and the existing vectors.
    fn generate(&self, vectors: &[Polynomial<T>], domain: &Domain<T>) -> Result<Vec<Polynomial<T>>>;

    /// Whether generated vectors are orthonormal under the domain inner product
    fn is_orthonormal(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Runtime choice between the built-in strategies
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasisKind {
    GramSchmidt,
    Chebyshev,
}

impl Default for BasisKind {
    fn default() -> Self {
        BasisKind::GramSchmidt
    }
}

impl<T: Real> BasisGenerator<T> for BasisKind {
    fn generate(&self, vectors: &[Polynomial<T>], domain: &Domain<T>) -> Result<Vec<Polynomial<T>>> {
        match self {
            BasisKind::GramSchmidt => GramSchmidt.generate(vectors, domain),
            BasisKind::Chebyshev => Chebyshev.generate(vectors, domain),
        }
    }

    fn is_orthonormal(&self) -> bool {
        match self {
            BasisKind::GramSchmidt => BasisGenerator::<T>::is_orthonormal(&GramSchmidt),
            BasisKind::Chebyshev => BasisGenerator::<T>::is_orthonormal(&Chebyshev),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BasisKind::GramSchmidt => BasisGenerator::<T>::name(&GramSchmidt),
            BasisKind::Chebyshev => BasisGenerator::<T>::name(&Chebyshev),
        }
    }
}

impl FromStr for BasisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "gram-schmidt" | "gramschmidt" => Ok(BasisKind::GramSchmidt),
            "chebyshev" => Ok(BasisKind::Chebyshev),
            other => Err(Error::InvalidConfiguration {
                reason: format!("unknown basis kind '{}'", other),
            }),
        }
    }
}

impl fmt::Display for BasisKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", BasisGenerator::<f64>::name(self))
    }
}

/// An append-only sequence of polynomials over a fixed domain.
///
/// Vectors are only ever added at the end, one `extend` at a time, so index
/// `i` always refers to the same polynomial once it exists. A `Projector`
/// borrows the basis mutably and extends it while it is iterated; share a
/// basis across threads only behind a lock held for the whole projection.
#[derive(Clone, Debug)]
pub struct Basis<T: Real, G: BasisGenerator<T>> {
    domain: Domain<T>,
    vectors: Vec<Polynomial<T>>,
    generator: G,
}

pub type GramSchmidtBasis<T = f64> = Basis<T, GramSchmidt>;
pub type ChebyshevBasis<T = f64> = Basis<T, Chebyshev>;

impl<T: Real, G: BasisGenerator<T>> Basis<T, G> {
    pub fn new(generator: G, domain: Domain<T>) -> Self {
        Self { domain, vectors: Vec::new(), generator }
    }

    /// Construct over [a, b], failing if the interval is empty or unbounded
    pub fn with_bounds(generator: G, a: T, b: T) -> Result<Self> {
        Ok(Self::new(generator, Domain::new(a, b)?))
    }

    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn dim(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[Polynomial<T>] {
        &self.vectors
    }

    pub fn get(&self, i: usize) -> Option<&Polynomial<T>> {
        self.vectors.get(i)
    }

    pub fn into_vectors(self) -> Vec<Polynomial<T>> {
        self.vectors
    }

    /// Exact polynomial inner product over the basis domain
    pub fn inner_product(&self, p: &Polynomial<T>, q: &Polynomial<T>) -> T {
        self.domain.inner_product(p, q)
    }

    /// Append the next vector(s) and return the new dimension.
    /// On failure the basis is left unchanged.
    pub fn extend(&mut self) -> Result<usize> {
        let new = self.generator.generate(&self.vectors, &self.domain)?;
        for v in new {
            debug!(
                "{} basis on {}: appended vector {} of degree {}",
                self.generator.name(), self.domain, self.vectors.len(), v.degree()
            );
            self.vectors.push(v);
        }
        Ok(self.vectors.len())
    }

    /// Extend until the basis holds at least n vectors
    pub fn extend_to(&mut self, n: usize) -> Result<()> {
        while self.vectors.len() < n {
            self.extend()?;
        }
        Ok(())
    }

    /// Lazily project a target onto the growing basis with grid step dx
    pub fn project<F: Target<T>>(&mut self, target: F, dx: T) -> Result<Projector<'_, T, G, F>> {
        Projector::new(self, target, dx)
    }

    pub fn project_with<F: Target<T>>(
        &mut self, target: F, config: &ProjectionConfig<T>,
    ) -> Result<Projector<'_, T, G, F>> {
        config.validate()?;
        Projector::new(self, target, config.dx)
    }

    /// Project a target onto the vectors already present, without extending
    pub fn project_current<F: Target<T>>(&self, mut target: F, dx: T) -> Result<Polynomial<T>> {
        let quad = TrapezoidQuad::new(&self.domain, dx)?;
        let fx = quad.sample(&mut target)?;
        let coefs: Vec<T> = self.vectors
            .iter()
            .map(|e| quad.project_samples(fx.view(), e))
            .collect();
        let mut poly = Polynomial::zero();
        poly.linear_combination(&self.vectors, &coefs);
        Ok(poly)
    }
}

impl<T: Real, G: BasisGenerator<T> + Default> Default for Basis<T, G> {
    fn default() -> Self {
        Self::new(G::default(), Domain::default())
    }
}
