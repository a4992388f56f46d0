//! `ask` builtin: prompt the user and store the answer in a variable.
//!
//! Usage: `ask <variable> <query> [--default X | --required]`
//!
//! Empty input selects the default when one is given. `--required` rejects
//! empty input; it cannot be combined with `--default`. End of input without
//! a default is an error.

use std::io::{self, BufRead, Write};

use crate::commands::types::{Command, CommandContext};
use crate::interpreter::environment::is_valid_name;
use crate::interpreter::errors::RuntimeError;

pub struct AskCommand;

struct AskArgs {
    variable: String,
    query: String,
    default: Option<String>,
    required: bool,
}

fn parse_args(args: &[String]) -> Result<AskArgs, RuntimeError> {
    let mut positional = Vec::new();
    let mut default = None;
    let mut required = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--default" {
            match iter.next() {
                Some(value) if default.is_none() => default = Some(value.clone()),
                _ => return Err(RuntimeError::InvalidArguments { command: "ask" }),
            }
        } else if let Some(value) = arg.strip_prefix("--default=") {
            if default.is_some() {
                return Err(RuntimeError::InvalidArguments { command: "ask" });
            }
            default = Some(value.to_string());
        } else if arg == "--required" {
            required = true;
        } else {
            positional.push(arg.clone());
        }
    }
    if default.is_some() && required {
        return Err(RuntimeError::InvalidArguments { command: "ask" });
    }
    let [variable, query] = &positional[..] else {
        return Err(RuntimeError::InvalidArguments { command: "ask" });
    };
    if !is_valid_name(variable) {
        return Err(RuntimeError::InvalidVariableName {
            name: variable.clone(),
        });
    }
    Ok(AskArgs {
        variable: variable.clone(),
        query: query.clone(),
        default,
        required,
    })
}

/// Pick the stored value from what the user typed. `input` is `None` at end
/// of input, `Some` otherwise (without the trailing newline).
fn choose(
    input: Option<String>,
    default: Option<String>,
    required: bool,
) -> Result<String, RuntimeError> {
    match input {
        None => default.ok_or_else(|| RuntimeError::Input("could not read value".to_string())),
        Some(value) if value.is_empty() => {
            if let Some(default) = default {
                Ok(default)
            } else if required {
                Err(RuntimeError::Input("missing required value".to_string()))
            } else {
                Ok(value)
            }
        }
        Some(value) => Ok(value),
    }
}

fn prompt(query: &str, default: Option<&str>) -> Result<Option<String>, RuntimeError> {
    match default {
        Some(default) => print!("{} [{}] ", query, default),
        None => print!("{} ", query),
    }
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(Some(line))
}

impl Command for AskCommand {
    fn name(&self) -> &'static str {
        "ask"
    }

    fn execute(&self, ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError> {
        let args = parse_args(args)?;
        let input = prompt(&args.query, args.default.as_deref())?;
        let value = choose(input, args.default, args.required)?;
        ctx.env.set(args.variable, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_plain() {
        let args = parse_args(&strings(&["NAME", "Project name?"])).unwrap();
        assert_eq!(args.variable, "NAME");
        assert_eq!(args.query, "Project name?");
        assert_eq!(args.default, None);
        assert!(!args.required);
    }

    #[test]
    fn test_parse_default_and_required() {
        let args = parse_args(&strings(&["N", "q", "--default", "x"])).unwrap();
        assert_eq!(args.default.as_deref(), Some("x"));
        let args = parse_args(&strings(&["N", "q", "--required"])).unwrap();
        assert!(args.required);
        // Mutually exclusive.
        assert!(parse_args(&strings(&["N", "q", "--default", "x", "--required"])).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_usage() {
        assert!(parse_args(&strings(&["N"])).is_err());
        assert!(parse_args(&strings(&["N", "q", "extra"])).is_err());
        assert!(parse_args(&strings(&["N", "q", "--default"])).is_err());
        assert!(parse_args(&strings(&["no spaces", "q"])).is_err());
    }

    #[test]
    fn test_choose_typed_value_wins() {
        let value = choose(Some("typed".into()), Some("default".into()), false).unwrap();
        assert_eq!(value, "typed");
    }

    #[test]
    fn test_choose_empty_takes_default() {
        let value = choose(Some("".into()), Some("default".into()), false).unwrap();
        assert_eq!(value, "default");
    }

    #[test]
    fn test_choose_empty_without_default() {
        assert_eq!(choose(Some("".into()), None, false).unwrap(), "");
        let err = choose(Some("".into()), None, true).unwrap_err();
        assert_eq!(err.to_string(), "missing required value");
    }

    #[test]
    fn test_choose_end_of_input() {
        assert_eq!(choose(None, Some("d".into()), false).unwrap(), "d");
        let err = choose(None, None, false).unwrap_err();
        assert_eq!(err.to_string(), "could not read value");
    }
}
