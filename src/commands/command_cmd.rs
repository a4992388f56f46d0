//! `command` builtin: run a subprocess and wait for it.
//!
//! Usage: `command <argv...>` — runs argv[0] with the remaining strings as
//! arguments, inheriting the interpreter's stdio. A non-zero exit is an
//! error whose exit code passes through to the sequence status.

use std::process;

use crate::commands::types::{Command, CommandContext};
use crate::interpreter::errors::RuntimeError;

pub struct CommandCommand;

fn parse_args(args: &[String]) -> Result<&[String], RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::InvalidArguments { command: "command" });
    }
    Ok(args)
}

impl Command for CommandCommand {
    fn name(&self) -> &'static str {
        "command"
    }

    fn execute(&self, _ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError> {
        let argv = parse_args(args)?;
        let status = process::Command::new(&argv[0]).args(&argv[1..]).status()?;
        if !status.success() {
            // A signal death has no exit code; report it as a plain failure.
            return Err(RuntimeError::CommandFailed {
                code: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::environment::Environment;
    use std::path::Path;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn run(args: &[&str]) -> Result<(), RuntimeError> {
        let mut env = Environment::new();
        let ctx = CommandContext {
            env: &mut env,
            directory: Path::new("."),
        };
        CommandCommand.execute(ctx, &strings(args))
    }

    #[test]
    fn test_requires_at_least_one_argument() {
        let err = parse_args(&[]).unwrap_err();
        assert_eq!(err.to_string(), "invalid arguments for command");
    }

    #[test]
    fn test_successful_subprocess() {
        run(&["true"]).unwrap();
    }

    #[test]
    fn test_exit_code_passes_through() {
        let err = run(&["sh", "-c", "exit 3"]).unwrap_err();
        assert!(matches!(err, RuntimeError::CommandFailed { code: 3 }));
        assert_eq!(err.status(), 3);
    }

    #[test]
    fn test_missing_program_is_an_io_error() {
        let err = run(&["definitely-not-a-real-program"]).unwrap_err();
        assert!(matches!(err, RuntimeError::Io(_)));
        assert_eq!(err.status(), 1);
    }
}
