//! File System Module
//!
//! The simulated file tree the player explores:
//! - types: node variants and listing results
//! - game_fs: navigator over the tree for a given session
//! - world: the tree shipped with the game

pub mod types;
pub mod game_fs;
pub mod world;

pub use types::*;
pub use game_fs::GameFs;
pub use world::default_world;
