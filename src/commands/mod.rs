//! Builtin commands available to setup scripts.

pub mod ask;
pub mod command_cmd;
pub mod echo;
pub mod file_cmd;
pub mod registry;
pub mod set_cmd;
pub mod types;

pub use registry::{default_registry, CommandRegistry};
pub use types::{Command, CommandContext};
