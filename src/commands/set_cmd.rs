//! `set` builtin: bind a variable for the rest of the run.
//!
//! Usage: `set <variable> <value>`

use crate::commands::types::{Command, CommandContext};
use crate::interpreter::environment::is_valid_name;
use crate::interpreter::errors::RuntimeError;

pub struct SetCommand;

#[derive(Debug)]
struct SetArgs {
    variable: String,
    value: String,
}

fn parse_args(args: &[String]) -> Result<SetArgs, RuntimeError> {
    match args {
        [variable, value] => {
            if !is_valid_name(variable) {
                return Err(RuntimeError::InvalidVariableName {
                    name: variable.clone(),
                });
            }
            Ok(SetArgs {
                variable: variable.clone(),
                value: value.clone(),
            })
        }
        _ => Err(RuntimeError::InvalidArguments { command: "set" }),
    }
}

impl Command for SetCommand {
    fn name(&self) -> &'static str {
        "set"
    }

    fn execute(&self, ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError> {
        let args = parse_args(args)?;
        ctx.env.set(args.variable, args.value);
        Ok(())
    }
}
