//! microinject - a text exploration game over a simulated file system
//!
//! The player walks a tree of files and directories with shell-like commands,
//! unlocking protected entries with passwords found along the way.

pub mod access;
pub mod codec;
pub mod commands;
pub mod fs;
pub mod game;
pub mod interpreter;
pub mod logging;
pub mod render;
pub mod session;

pub use game::{Game, GameOptions};
pub use interpreter::GameError;
pub use session::Session;
