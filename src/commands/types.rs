//! Builtin Command Contract
//!
//! Every builtin implements `Command`: a name for registry lookup and an
//! `execute` taking the already-resolved argument strings. Argument parsing
//! (arity, flags) is each builtin's own responsibility; the runner never
//! special-cases a builtin beyond the registry lookup.

use std::path::Path;

use crate::interpreter::environment::Environment;
use crate::interpreter::errors::RuntimeError;

/// Per-invocation context handed to a builtin.
pub struct CommandContext<'a> {
    /// The runner's variable environment; `set` and `ask` write to it.
    pub env: &'a mut Environment,
    /// The setup's owning directory, read-only. `file` copies from here.
    pub directory: &'a Path,
}

/// A builtin command.
pub trait Command {
    fn name(&self) -> &'static str;

    /// Run the command with resolved arguments (the command name excluded).
    fn execute(&self, ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError>;
}
