use std::fmt;

use crate::base::{Error, Result};
use crate::poly::Polynomial;
use crate::Real;

/// Closed interval [a, b] carrying the inner product <f, g> = int_a^b f g dx
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain<T: Real> {
    a: T,
    b: T,
}

impl<T: Real> Domain<T> {
    pub fn new(a: T, b: T) -> Result<Self> {
        if !(a < b) || !a.is_finite() || !b.is_finite() {
            return Err(Error::InvalidDomain {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { a, b })
    }

    pub fn bounds(&self) -> (T, T) {
        (self.a, self.b)
    }

    pub fn lower(&self) -> T {
        self.a
    }

    pub fn upper(&self) -> T {
        self.b
    }

    pub fn width(&self) -> T {
        self.b - self.a
    }

    pub fn contains(&self, x: T) -> bool {
        self.a <= x && x <= self.b
    }

    /// Exact inner product of two polynomials: the integrand p*q is itself a
    /// polynomial, so no quadrature error is introduced
    pub fn inner_product(&self, p: &Polynomial<T>, q: &Polynomial<T>) -> T {
        p.multiply(q).definite_integral(self.a, self.b)
    }

    pub fn norm(&self, p: &Polynomial<T>) -> T {
        self.inner_product(p, p).sqrt()
    }
}

impl<T: Real> Default for Domain<T> {
    fn default() -> Self {
        Self { a: -T::one(), b: T::one() }
    }
}

impl<T: Real> fmt::Display for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}
