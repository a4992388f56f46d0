//! AST module for setup scripts
//!
//! Re-exports the node types used by the parser and the runner.

pub mod types;

pub use types::{CommandNode, Segment, SequenceNode, WordNode};
