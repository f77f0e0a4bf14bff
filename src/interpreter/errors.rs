//! Interpreter Errors
//!
//! Player mistakes never end the loop; they are rendered as messages. Only a
//! broken display or input stream surfaces here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
