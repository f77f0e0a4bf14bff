use crate::commands::{Action, Command, CommandContext, CommandResult};
use crate::render::Line;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::lines(vec![
            Line::plain(format!(
                "Terminating the game. Goodbye, {}!",
                ctx.session.player_name()
            )),
            Line::plain("Clearing the console..."),
        ])
        .with_action(Action::Exit)
    }
}
