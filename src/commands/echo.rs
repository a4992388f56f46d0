//! `echo` builtin: print the arguments space-joined.
//!
//! Usage: `echo <args...>`

use crate::commands::types::{Command, CommandContext};
use crate::interpreter::errors::RuntimeError;

pub struct EchoCommand;

fn parse_args(args: &[String]) -> Result<&[String], RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::InvalidArguments { command: "echo" });
    }
    Ok(args)
}

fn render(args: &[String]) -> String {
    args.join(" ")
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, _ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError> {
        let args = parse_args(args)?;
        println!("{}", render(args));
        Ok(())
    }
}
