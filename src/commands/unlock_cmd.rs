use crate::access::{unlock, AccessError, UnlockOutcome};
use crate::commands::messages::fs_error;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::render::Line;

pub struct UnlockCommand;

fn dev_mode_notice() -> CommandResult {
    CommandResult::line(Line::warning("Dev mode is active. Passwords are not required."))
}

impl Command for UnlockCommand {
    fn name(&self) -> &'static str {
        "unlock"
    }

    fn execute(&self, mut ctx: CommandContext<'_>) -> CommandResult {
        let (name, password) = match (ctx.args.first(), ctx.args.get(1)) {
            (Some(name), Some(password)) => (name, password),
            _ if ctx.session.dev_mode => return dev_mode_notice(),
            _ => return CommandResult::plain("Usage: unlock [filename] [password]"),
        };

        match unlock(ctx.fs, ctx.session, name, password) {
            Ok(UnlockOutcome::File { name }) => CommandResult::line(Line::success(format!(
                "Decryption successful. You can now read '{}' with the 'cat' command.",
                name
            ))),
            Ok(UnlockOutcome::Directory { name }) => CommandResult::line(Line::success(format!(
                "Seal broken. You can now access '{}/' with the 'cd' command.",
                name
            ))),
            Ok(UnlockOutcome::Bypassed) => dev_mode_notice(),
            Err(AccessError::Fs(e)) => fs_error("unlock", &e),
            Err(e) => CommandResult::error(e.to_string()),
        }
    }
}
