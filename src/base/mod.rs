pub mod error;
pub mod domain;
pub mod target;
pub mod config;
pub mod basis;
pub mod gram_schmidt;
pub mod chebyshev;
pub mod project;

pub use error::{Error, Result};
pub use domain::Domain;
pub use target::{Fallible, Pointwise, Target, Vectorized};
pub use config::ProjectionConfig;
pub use basis::{Basis, BasisGenerator, BasisKind, ChebyshevBasis, GramSchmidtBasis};
pub use gram_schmidt::GramSchmidt;
pub use chebyshev::Chebyshev;
pub use project::Projector;
