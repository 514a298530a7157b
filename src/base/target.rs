use std::fmt::Display;

use ndarray::Array1;

use crate::base::{Error, Result};
use crate::Real;

/// A real function to be approximated, sampled on a whole grid at once
pub trait Target<T: Real> {
    /// Values at each point of x. Implementations return one value per point;
    /// the caller checks the length and finiteness of the result.
    fn sample(&mut self, x: &Array1<T>) -> Result<Array1<T>>;
}

impl<'a, T: Real, F: Target<T> + ?Sized> Target<T> for &'a mut F {
    fn sample(&mut self, x: &Array1<T>) -> Result<Array1<T>> {
        (**self).sample(x)
    }
}

/// A function mapping an array of points to an array of values
pub struct Vectorized<F>(pub F);

impl<T, F> Target<T> for Vectorized<F>
where T: Real, F: FnMut(&Array1<T>) -> Array1<T>
{
    fn sample(&mut self, x: &Array1<T>) -> Result<Array1<T>> {
        Ok((self.0)(x))
    }
}

/// A scalar function applied at each point
pub struct Pointwise<F>(pub F);

impl<T, F> Target<T> for Pointwise<F>
where T: Real, F: FnMut(T) -> T
{
    fn sample(&mut self, x: &Array1<T>) -> Result<Array1<T>> {
        let f = &mut self.0;
        Ok(x.mapv(|xi| f(xi)))
    }
}

/// A vectorized function that can fail, e.g. when evaluated outside of its
/// own domain of definition
pub struct Fallible<F>(pub F);

impl<T, F, E> Target<T> for Fallible<F>
where T: Real, F: FnMut(&Array1<T>) -> std::result::Result<Array1<T>, E>, E: Display
{
    fn sample(&mut self, x: &Array1<T>) -> Result<Array1<T>> {
        (self.0)(x).map_err(|e| Error::InvalidFunction { reason: e.to_string() })
    }
}
