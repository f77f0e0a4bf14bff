// src/commands/cat/mod.rs
use crate::commands::messages::{fs_error, missing_operand};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::render::Line;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(target) = ctx.args.first() else {
            return missing_operand("cat");
        };

        match ctx.fs.read_file(ctx.session, target) {
            Ok(content) => CommandResult::lines(content.split('\n').map(Line::plain).collect()).revealed(),
            Err(e) => fs_error("cat", &e),
        }
    }
}
