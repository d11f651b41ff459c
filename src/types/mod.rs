//! Type definitions for cupfinals

mod error;
mod tournament;

pub use error::*;
pub use tournament::*;
