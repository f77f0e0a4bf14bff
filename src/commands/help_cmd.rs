use crate::commands::{Command, CommandContext, CommandResult};
use crate::render::Line;

pub struct HelpCommand;

const USAGE: &[(&str, &str)] = &[
    ("ls", "List files and directories."),
    ("cd [dir]", "Change directory. Use 'cd ..' to go up."),
    ("cat [file]", "Read the contents of a file."),
    ("unlock [name] [password]", "Unlock a protected file or directory."),
    ("help", "Show this help message."),
    ("exit", "Exit the game."),
    ("clear", "Clear the console."),
    ("dc64 [text]", "Decode Base64 to text."),
    ("ec64 [text]", "Encode text to Base64."),
    ("dc [text]", "Decode text."),
    ("ec [text]", "Encode text."),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let mut lines = vec![Line::plain("Available commands:")];
        for (usage, description) in USAGE {
            lines.push(Line::plain(format!("  {:<24} - {}", usage, description)));
        }
        CommandResult::lines(lines)
    }
}
