//! cd - move through the game's directories
//!
//! Supports:
//! - cd <dir> - enter a child directory (sealed ones must be unlocked first)
//! - cd .. - go up one level; does nothing at the root

use crate::commands::messages::{fs_error, missing_operand};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, mut ctx: CommandContext<'_>) -> CommandResult {
        let Some(target) = ctx.args.first() else {
            return missing_operand("cd");
        };

        match ctx.fs.change_directory(ctx.session, target) {
            Ok(()) => CommandResult::empty(),
            Err(e) => fs_error("cd", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run;
    use crate::fs::{collect_children, GameFs, Node};
    use crate::session::Session;

    fn sample_fs() -> GameFs {
        GameFs::new(collect_children([
            ("a.txt", Node::file("a")),
            ("lab", Node::dir(Vec::<(String, Node)>::new())),
            ("vault", Node::locked_dir(Vec::<(String, Node)>::new(), "pw", "The vault is sealed.")),
        ]))
    }

    #[test]
    fn test_cd_and_back() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        assert!(run(&CdCommand, &["lab"], &mut session, &fs).lines.is_empty());
        assert_eq!(session.display_path(), "/lab");
        assert!(run(&CdCommand, &[".."], &mut session, &fs).lines.is_empty());
        assert!(run(&CdCommand, &[".."], &mut session, &fs).lines.is_empty());
        assert!(session.is_at_root());
    }

    #[test]
    fn test_cd_errors() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        assert_eq!(run(&CdCommand, &[], &mut session, &fs).text(), "cd: missing operand");
        assert_eq!(
            run(&CdCommand, &["a.txt"], &mut session, &fs).text(),
            "cd: no such directory: a.txt"
        );
        assert_eq!(
            run(&CdCommand, &["vault"], &mut session, &fs).text(),
            "The vault is sealed.\nUse 'unlock [directory] [password]' to open it."
        );
        assert!(session.is_at_root());
    }

    #[test]
    fn test_cd_dev_mode_enters_sealed_directory() {
        let fs = sample_fs();
        let mut session = Session::new("p");
        session.dev_mode = true;
        run(&CdCommand, &["vault"], &mut session, &fs);
        assert_eq!(session.display_path(), "/vault");
    }
}
