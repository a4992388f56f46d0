//! setups - a declarative project-setup script interpreter
//!
//! Parses line-oriented setup scripts into an AST and executes them: copying
//! files, running commands, prompting the user, and setting variables.

pub mod ast;
pub mod commands;
pub mod interpreter;
pub mod parser;
pub mod setups;

pub use ast::types::{CommandNode, Segment, SequenceNode, WordNode};
pub use interpreter::{Environment, Runner, RuntimeError};
pub use parser::{parse, ParseError};
pub use setups::Setups;
