mod basic;
mod error;

pub use basic::*;
pub use error::*;
