//! Strategy implementations.

pub mod alpha_beta;
pub mod random;
mod util;
