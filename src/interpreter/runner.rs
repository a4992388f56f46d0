//! Runner
//!
//! Executes a parsed sequence against a mutable environment and a fixed
//! command registry. Execution is strictly sequential and fail-fast: the
//! first command with a non-zero status stops the sequence and becomes its
//! result.
//!
//! Errors raised while resolving words or running a handler are caught at
//! single-command granularity, reported in red on stderr, and converted to a
//! non-zero status; they never abort the process.

use std::path::{Path, PathBuf};

use crate::ast::types::{CommandNode, Segment, SequenceNode, WordNode};
use crate::commands::{default_registry, CommandContext, CommandRegistry};
use crate::interpreter::colors;
use crate::interpreter::environment::Environment;
use crate::interpreter::errors::RuntimeError;

pub struct Runner {
    environment: Environment,
    commands: CommandRegistry,
    directory: PathBuf,
}

impl Runner {
    /// A runner for the setup rooted at `directory`, with all builtins.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_registry(directory, default_registry())
    }

    pub fn with_registry(directory: impl Into<PathBuf>, commands: CommandRegistry) -> Self {
        Self {
            environment: Environment::new(),
            commands,
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Execute the sequence, returning its exit status. An empty sequence
    /// returns 0.
    pub fn run(&mut self, sequence: &SequenceNode) -> i32 {
        for command in &sequence.commands {
            let status = self.run_command(command);
            if status != 0 {
                return status;
            }
        }
        0
    }

    fn run_command(&mut self, command: &CommandNode) -> i32 {
        match self.execute(command) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", colors::red(&error.to_string()));
                error.status()
            }
        }
    }

    fn execute(&mut self, command: &CommandNode) -> Result<(), RuntimeError> {
        let mut arguments = Vec::with_capacity(command.words.len());
        for word in &command.words {
            arguments.push(self.resolve_word(word)?);
        }
        // The parser guarantees a command has at least one word.
        let Some((name, args)) = arguments.split_first() else {
            return Ok(());
        };
        let handler = self
            .commands
            .get(name)
            .ok_or_else(|| RuntimeError::InvalidCommand { name: name.clone() })?;
        handler.execute(
            CommandContext {
                env: &mut self.environment,
                directory: &self.directory,
            },
            args,
        )
    }

    /// Resolve a word to a concrete string: raw text verbatim, variables via
    /// the environment, quoted groups concatenated without word-splitting.
    fn resolve_word(&self, word: &WordNode) -> Result<String, RuntimeError> {
        let mut resolved = String::new();
        for segment in &word.segments {
            self.resolve_segment(segment, &mut resolved)?;
        }
        Ok(resolved)
    }

    fn resolve_segment(&self, segment: &Segment, out: &mut String) -> Result<(), RuntimeError> {
        match segment {
            Segment::Raw(value) => out.push_str(value),
            Segment::Variable(name) => out.push_str(&self.environment.get(name)?),
            Segment::Quoted(segments) => {
                for inner in segments {
                    self.resolve_segment(inner, out)?;
                }
            }
        }
        Ok(())
    }
}
