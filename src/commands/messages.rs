//! Shared message lines for navigator errors.

use crate::fs::{FsError, LockedKind};
use crate::render::Line;

use super::CommandResult;

pub fn lock_hint(kind: LockedKind) -> &'static str {
    match kind {
        LockedKind::File => "Use 'unlock [filename] [password]' to open it.",
        LockedKind::Directory => "Use 'unlock [directory] [password]' to open it.",
    }
}

/// Render a navigator error the way `cmd` reports it.
pub fn fs_error(cmd: &str, err: &FsError) -> CommandResult {
    match err {
        FsError::Locked { kind, message, .. } => CommandResult::lines(vec![
            Line::warning(message.clone()),
            Line::plain(lock_hint(*kind)),
        ]),
        other => CommandResult::error(format!("{}: {}", cmd, other)),
    }
}

pub fn missing_operand(cmd: &str) -> CommandResult {
    CommandResult::plain(format!("{}: missing operand", cmd))
}
