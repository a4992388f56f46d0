//! Setup script execution: environment, runner, and diagnostics.

pub mod colors;
pub mod environment;
pub mod errors;
pub mod runner;

pub use environment::Environment;
pub use errors::RuntimeError;
pub use runner::Runner;
