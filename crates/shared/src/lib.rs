//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod error;
mod number;
mod precision;
mod step;
mod tolerance;

pub use error::NumberError;
pub use number::safe_number;
pub use precision::Precision;
pub use step::Step;
pub use tolerance::Tolerance;
