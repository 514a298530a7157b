pub mod ndarray;
