use itertools::zip_eq;

/// Linear combination operations on a vector space type with respect to a
/// scalar type S, implemented on the vector type itself.
/// In-place updates go through this trait so that accumulating a projection
/// does not allocate a fresh vector per term.
pub trait LinearCombinationSpace<S>: Sized
    where S: Clone
{
    fn scale(&mut self, k: S);
    /// Overwrite target with k * self
    fn scalar_multiply_to(&self, k: S, target: &mut Self);
    /// self += k * u
    fn add_scalar_mul(&mut self, k: S, u: &Self);
    fn add_assign_ref(&mut self, u: &Self);
    /// Subtracts the vector y from self
    fn delta(&mut self, y: &Self);

    /// Accumulate sum_i k_arr[i] * v_arr[i] into self.
    ///
    /// Panics if the slices have different lengths
    fn linear_combination(&mut self, v_arr: &[Self], k_arr: &[S]){
        for (v, k) in zip_eq(v_arr.iter(), k_arr.iter()){
            self.add_scalar_mul(k.clone(), v);
        }
    }
}
