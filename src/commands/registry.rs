//! Command Registry
//!
//! String-keyed mapping from builtin name to its implementation. Lookups are
//! by exact name; registration order is irrelevant.

use std::collections::HashMap;

use super::ask::AskCommand;
use super::command_cmd::CommandCommand;
use super::echo::EchoCommand;
use super::file_cmd::FileCommand;
use super::set_cmd::SetCommand;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The registry with all builtins a setup script can use.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(AskCommand));
    registry.register(Box::new(CommandCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(FileCommand));
    registry.register(Box::new(SetCommand));
    registry
}
