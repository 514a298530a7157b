use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use itertools::{EitherOrBoth, Itertools};

use crate::lc::LinearCombinationSpace;
use crate::Real;

/// A real polynomial sum_i coef[i] x^i stored by ascending power.
///
/// The coefficient vector is never empty; the zero polynomial is `[0]`.
/// Trailing zeros are allowed and are ignored by `degree`, evaluation
/// and comparisons.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T: Real> {
    coef: Vec<T>,
}

impl<T: Real> Polynomial<T> {
    pub fn new(coef: Vec<T>) -> Self {
        if coef.is_empty() {
            return Self::zero();
        }
        Self { coef }
    }

    pub fn from_slice(coef: &[T]) -> Self {
        Self::new(coef.to_vec())
    }

    pub fn zero() -> Self {
        Self { coef: vec![T::zero()] }
    }

    pub fn one() -> Self {
        Self { coef: vec![T::one()] }
    }

    /// The identity polynomial x
    pub fn x() -> Self {
        Self::monomial(1)
    }

    /// x^n, stored with n leading zeros
    pub fn monomial(n: usize) -> Self {
        let mut coef = vec![T::zero(); n + 1];
        coef[n] = T::one();
        Self { coef }
    }

    pub fn coef(&self) -> &[T] {
        &self.coef
    }

    pub fn into_coef(self) -> Vec<T> {
        self.coef
    }

    /// Index of the highest non-zero coefficient, 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coef
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coef.iter().all(|c| c.is_zero())
    }

    /// Drop trailing zero coefficients
    pub fn trim(mut self) -> Self {
        self.coef.truncate(self.degree() + 1);
        self
    }

    /// Evaluate at a point by Horner's rule
    pub fn eval(&self, x: T) -> T {
        self.coef
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Discrete convolution of the coefficient sequences
    pub fn multiply(&self, other: &Self) -> Self {
        let mut coef = vec![T::zero(); self.coef.len() + other.coef.len() - 1];
        for (i, &a) in self.coef.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.coef.iter().enumerate() {
                coef[i + j] = coef[i + j] + a * b;
            }
        }
        Self { coef }
    }

    /// Antiderivative with the integration constant fixed to zero
    pub fn antiderivative(&self) -> Self {
        let mut coef = Vec::with_capacity(self.coef.len() + 1);
        coef.push(T::zero());
        for (i, &c) in self.coef.iter().enumerate() {
            coef.push(c / from_f64!((i + 1) as f64));
        }
        Self { coef }
    }

    pub fn derivative(&self) -> Self {
        if self.coef.len() < 2 {
            return Self::zero();
        }
        let coef = self.coef
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * from_f64!(i as f64))
            .collect_vec();
        Self { coef }
    }

    /// Exact integral over [a, b]
    pub fn definite_integral(&self, a: T, b: T) -> T {
        let big_f = self.antiderivative();
        big_f.eval(b) - big_f.eval(a)
    }
}

impl<T: Real> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> From<Vec<T>> for Polynomial<T> {
    fn from(coef: Vec<T>) -> Self {
        Self::new(coef)
    }
}

impl<T: Real> LinearCombinationSpace<T> for Polynomial<T> {
    fn scale(&mut self, k: T) {
        for c in self.coef.iter_mut() {
            *c = *c * k;
        }
    }

    fn scalar_multiply_to(&self, k: T, target: &mut Self) {
        target.coef.clear();
        target.coef.extend(self.coef.iter().map(|&c| c * k));
    }

    fn add_scalar_mul(&mut self, k: T, u: &Self) {
        if self.coef.len() < u.coef.len() {
            self.coef.resize(u.coef.len(), T::zero());
        }
        for (s, &c) in self.coef.iter_mut().zip(u.coef.iter()) {
            *s = *s + k * c;
        }
    }

    fn add_assign_ref(&mut self, u: &Self) {
        self.add_scalar_mul(T::one(), u);
    }

    fn delta(&mut self, y: &Self) {
        self.add_scalar_mul(-T::one(), y);
    }
}

fn zip_pad<T: Real, F>(p: &[T], q: &[T], f: F) -> Vec<T>
where F: Fn(T, T) -> T
{
    p.iter()
        .zip_longest(q.iter())
        .map(|pair| match pair {
            EitherOrBoth::Both(&a, &b) => f(a, b),
            EitherOrBoth::Left(&a) => f(a, T::zero()),
            EitherOrBoth::Right(&b) => f(T::zero(), b),
        })
        .collect_vec()
}

impl<'a, T: Real> Add<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        Polynomial { coef: zip_pad(&self.coef, &rhs.coef, |a, b| a + b) }
    }
}

impl<T: Real> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self + &rhs
    }
}

impl<'a, T: Real> Sub<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        Polynomial { coef: zip_pad(&self.coef, &rhs.coef, |a, b| a - b) }
    }
}

impl<T: Real> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self - &rhs
    }
}

impl<T: Real> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Polynomial<T> {
        self.scale(-T::one());
        self
    }
}

impl<'a, T: Real> Mul<&'a Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        self.multiply(rhs)
    }
}

impl<T: Real> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self.multiply(&rhs)
    }
}

impl<T: Real> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(mut self, k: T) -> Polynomial<T> {
        self.scale(k);
        self
    }
}

impl<'a, T: Real> Mul<T> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, k: T) -> Polynomial<T> {
        self.clone() * k
    }
}

impl<T: Real> AbsDiffEq for Polynomial<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.coef
            .iter()
            .zip_longest(other.coef.iter())
            .all(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.abs_diff_eq(b, epsilon),
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => c.abs_diff_eq(&T::zero(), epsilon),
            })
    }
}

impl<T: Real> RelativeEq for Polynomial<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.coef
            .iter()
            .zip_longest(other.coef.iter())
            .all(|pair| match pair {
                EitherOrBoth::Both(a, b) => a.relative_eq(b, epsilon, max_relative),
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) =>
                    c.relative_eq(&T::zero(), epsilon, max_relative),
            })
    }
}

impl<T: Real> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let deg = self.degree();
        for (i, c) in self.coef.iter().take(deg + 1).enumerate() {
            if i > 0 {
                if c.is_sign_negative() {
                    write!(f, " - {}", c.abs())?;
                } else {
                    write!(f, " + {}", c)?;
                }
            } else {
                write!(f, "{}", c)?;
            }
            match i {
                0 => {}
                1 => write!(f, "·x")?,
                _ => write!(f, "·x^{}", i)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(c: &[f64]) -> Polynomial<f64> {
        Polynomial::from_slice(c)
    }

    #[test]
    fn test_degree() {
        assert_eq!(p(&[0.0]).degree(), 0);
        assert_eq!(p(&[3.0]).degree(), 0);
        assert_eq!(p(&[1.0, 2.0, 0.0, 0.0]).degree(), 1);
        assert_eq!(Polynomial::<f64>::monomial(5).degree(), 5);
        assert_eq!(Polynomial::<f64>::new(vec![]).coef(), &[0.0]);
    }

    #[test]
    fn test_add_pads_shorter_operand() {
        let s = &p(&[1.0, 2.0]) + &p(&[0.5, 0.0, 3.0]);
        assert_eq!(s.coef(), &[1.5, 2.0, 3.0]);
        let d = p(&[1.0]) - p(&[0.0, 1.0]);
        assert_eq!(d.coef(), &[1.0, -1.0]);
    }

    #[test]
    fn test_multiply() {
        // (1 + x)(1 - x) = 1 - x^2
        let m = p(&[1.0, 1.0]) * p(&[1.0, -1.0]);
        assert_eq!(m.coef(), &[1.0, 0.0, -1.0]);
        assert_eq!(m.degree(), 2);
        let z = p(&[0.0]) * p(&[1.0, 2.0]);
        assert!(z.is_zero());
    }

    #[test]
    fn test_antiderivative_and_integral() {
        let q = p(&[1.0, 2.0, 3.0]).antiderivative();
        assert_eq!(q.coef(), &[0.0, 1.0, 1.0, 1.0]);
        // int_{-1}^{1} x^2 dx = 2/3
        assert_relative_eq!(p(&[0.0, 0.0, 1.0]).definite_integral(-1.0, 1.0), 2.0 / 3.0);
        assert_relative_eq!(p(&[0.0, 1.0]).definite_integral(-2.0, 2.0), 0.0);
        assert_eq!(p(&[1.0, 2.0, 3.0]).derivative().coef(), &[2.0, 6.0]);
    }

    #[test]
    fn test_eval_ignores_trailing_zeros() {
        let a = p(&[1.0, -3.0, 2.0]);
        let b = p(&[1.0, -3.0, 2.0, 0.0, 0.0]);
        for &x in &[-1.5, 0.0, 0.25, 2.0] {
            assert_eq!(a.eval(x), b.eval(x));
            assert_relative_eq!(a.eval(x), 1.0 - 3.0 * x + 2.0 * x * x);
        }
        assert_relative_eq!(a, b);
        assert_eq!(b.trim().coef().len(), 3);
    }

    #[test]
    fn test_linear_combination() {
        let mut acc = Polynomial::zero();
        let v = vec![p(&[1.0]), p(&[0.0, 1.0]), p(&[0.0, 0.0, 1.0])];
        acc.linear_combination(&v, &[2.0, -1.0, 0.5]);
        assert_eq!(acc.coef(), &[2.0, -1.0, 0.5]);
        acc.delta(&p(&[2.0]));
        assert_eq!(acc.coef(), &[0.0, -1.0, 0.5]);
        let mut t = Polynomial::zero();
        acc.scalar_multiply_to(2.0, &mut t);
        assert_eq!(t.coef(), &[0.0, -2.0, 1.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", p(&[1.0, -2.0, 0.5, 0.0])), "1 - 2·x + 0.5·x^2");
        assert_eq!(format!("{}", Polynomial::<f64>::zero()), "0");
    }
}
