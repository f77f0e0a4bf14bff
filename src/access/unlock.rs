use thiserror::Error;
use tracing::{debug, info};

use crate::fs::{FsError, GameFs, Node};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    File { name: String },
    Directory { name: String },
    /// Dev mode is on; nothing was changed.
    Bypassed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Cannot unlock '{name}': No such file or directory.")]
    NoSuchItem { name: String },

    /// Wrong password and unlockable target are reported the same way.
    #[error("Incorrect password or item cannot be unlocked.")]
    Rejected,

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Try `password` against the node called `name` in the current directory.
///
/// Success records the node's full path in the session; nothing ever relocks it.
pub fn unlock(
    fs: &GameFs,
    session: &mut Session,
    name: &str,
    password: &str,
) -> Result<UnlockOutcome, AccessError> {
    if session.dev_mode {
        return Ok(UnlockOutcome::Bypassed);
    }

    let node = fs
        .lookup(session, name)?
        .ok_or_else(|| AccessError::NoSuchItem {
            name: name.to_string(),
        })?;

    let accepted = node.lock().map_or(false, |lock| lock.accepts(password));
    if !accepted {
        debug!(name, "unlock attempt rejected");
        return Err(AccessError::Rejected);
    }

    let full_path = session.full_path(name);
    info!(path = %full_path, "unlocked");
    session.mark_unlocked(full_path);

    Ok(match node {
        Node::LockedDirectory { .. } => UnlockOutcome::Directory {
            name: name.to_string(),
        },
        _ => UnlockOutcome::File {
            name: name.to_string(),
        },
    })
}
