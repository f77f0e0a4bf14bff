//! Access Control
//!
//! Password checks for locked files and directories.

pub mod unlock;

pub use unlock::{unlock, AccessError, UnlockOutcome};
