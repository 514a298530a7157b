use ndarray::{Array1, ArrayBase, ArrayView1, DataMut, Dimension};

use crate::lc::LinearCombinationSpace;
use crate::poly::Polynomial;
use crate::Real;

impl<A, S, D> LinearCombinationSpace<A> for ArrayBase<S, D>
where   A: Real,
        S: DataMut<Elem=A>,
        D: Dimension
{
    #[inline]
    fn scale(&mut self, k: A) {
        self.map_inplace(|y| *y = *y * k);
    }

    fn scalar_multiply_to(&self, k: A, target: &mut ArrayBase<S, D>) {
        target.zip_mut_with(self, |t, &s| *t = k * s);
    }

    fn add_scalar_mul(&mut self, k: A, rhs: &ArrayBase<S, D>) {
        self.zip_mut_with(rhs, move |y, &x| *y = *y + (k * x));
    }

    fn add_assign_ref(&mut self, other: &Self){
        self.zip_mut_with(other, |y, &x| *y = *y + x);
    }

    fn delta(&mut self, y: &Self) {
        self.zip_mut_with(y, |s, &x| *s = *s - x);
    }
}

impl<T: Real> Polynomial<T> {
    /// Elementwise Horner evaluation over an array of points
    pub fn eval_array(&self, x: ArrayView1<T>) -> Array1<T> {
        x.mapv(|xi| self.eval(xi))
    }

    /// Evaluate in place, overwriting each point with the polynomial value
    pub fn eval_inplace<S, D>(&self, x: &mut ArrayBase<S, D>)
    where S: DataMut<Elem=T>, D: Dimension
    {
        x.map_inplace(|xi| *xi = self.eval(*xi));
    }
}
