//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod error;
mod tolerance;

pub use error::ToleranceError;
pub use tolerance::Tolerance;
