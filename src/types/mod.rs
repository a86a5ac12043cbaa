//! Type definitions for revtrack

mod error;
mod product;

pub use error::*;
pub use product::*;
