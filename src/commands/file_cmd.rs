//! `file` builtin: copy a file or directory out of the setup directory.
//!
//! Usage: `file <path> [--destination Y]` — copies `<path>` from the setup
//! directory into the current working directory, under its own name unless
//! `--destination` renames it. Directories copy recursively. Copying onto an
//! existing destination is an error.

use std::fs;
use std::path::Path;

use crate::commands::types::{Command, CommandContext};
use crate::interpreter::errors::RuntimeError;

pub struct FileCommand;

struct FileArgs {
    file: String,
    destination: Option<String>,
}

fn parse_args(args: &[String]) -> Result<FileArgs, RuntimeError> {
    let mut file = None;
    let mut destination = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--destination" {
            match iter.next() {
                Some(value) if destination.is_none() => destination = Some(value.clone()),
                _ => return Err(RuntimeError::InvalidArguments { command: "file" }),
            }
        } else if let Some(value) = arg.strip_prefix("--destination=") {
            if destination.is_some() {
                return Err(RuntimeError::InvalidArguments { command: "file" });
            }
            destination = Some(value.to_string());
        } else if file.is_none() {
            file = Some(arg.clone());
        } else {
            return Err(RuntimeError::InvalidArguments { command: "file" });
        }
    }
    match file {
        Some(file) => Ok(FileArgs { file, destination }),
        None => Err(RuntimeError::InvalidArguments { command: "file" }),
    }
}

/// Copy `source` to `destination`, recursively for directories.
/// The destination must not exist yet.
fn copy_path(source: &Path, destination: &Path) -> Result<(), RuntimeError> {
    if destination.exists() {
        return Err(RuntimeError::DestinationExists {
            path: destination.display().to_string(),
        });
    }
    copy_tree(source, destination)
}

fn copy_tree(source: &Path, destination: &Path) -> Result<(), RuntimeError> {
    if source.is_dir() {
        fs::create_dir(destination)?;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            copy_tree(&entry.path(), &destination.join(entry.file_name()))?;
        }
    } else {
        fs::copy(source, destination)?;
    }
    Ok(())
}

impl Command for FileCommand {
    fn name(&self) -> &'static str {
        "file"
    }

    fn execute(&self, ctx: CommandContext<'_>, args: &[String]) -> Result<(), RuntimeError> {
        let args = parse_args(args)?;
        let source = ctx.directory.join(&args.file);
        let name = args.destination.as_ref().unwrap_or(&args.file);
        let destination = std::env::current_dir()?.join(name);
        copy_path(&source, &destination)
    }
}
