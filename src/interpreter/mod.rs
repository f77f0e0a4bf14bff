//! Interpreter module
//!
//! Reads lines, dispatches them to commands and hands results to the renderer.

pub mod errors;
pub mod interpreter;
pub mod types;

pub use errors::GameError;
pub use interpreter::{parse_line, Interpreter};
pub use types::*;
