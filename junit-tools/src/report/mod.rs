//! Reading, flattening and trimming of JUnit XML test reports.

pub mod errors;
pub mod flatten;
pub mod model;
pub mod trim;
pub(crate) mod xml;

use errors::Error;

pub type Result<R> = std::result::Result<R, Error>;
