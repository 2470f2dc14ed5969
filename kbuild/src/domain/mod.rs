//! Domain errors for the build driver.

pub mod errors;

pub use errors::BuildError;
