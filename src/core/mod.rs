//! Shared invoice records, structural validation, and numbering.
//!
//! This module provides the input types the fiscal calculator consumes,
//! the validation layer that rejects malformed input before calculation
//! (RD 1619/2012 field rules), and gapless per-serie invoice numbering.

mod error;
mod numbering;
mod types;
mod validation;

pub use error::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
