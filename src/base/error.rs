use thiserror::Error;

/// Failures raised while building a basis or projecting onto it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid domain [{a}, {b}]: expected finite bounds with a < b")]
    InvalidDomain { a: f64, b: f64 },
    #[error("basis vector {index} could not be normalized (squared norm {norm_sq})")]
    NumericalDegeneracy { index: usize, norm_sq: f64 },
    #[error("invalid target function: {reason}")]
    InvalidFunction { reason: String },
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
