// src/commands/ls/mod.rs
use crate::commands::messages::fs_error;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{DirEntry, EntryKind, Listing};
use crate::render::{Line, Tone};

pub struct LsCommand;

fn lock_status(unlocked: bool) -> (&'static str, Tone) {
    if unlocked {
        ("[UNLOCKED]", Tone::Success)
    } else {
        ("[LOCKED]", Tone::Error)
    }
}

fn format_entry(owner: &str, entry: &DirEntry) -> Line {
    let mode = if entry.kind.is_directory() { "drw-r--r--" } else { "-rw-r--r--" };
    let line = Line::plain(format!("{}  {}  ", mode, owner));
    match entry.kind {
        EntryKind::Directory => line.push(format!("{}/", entry.name), Tone::Directory),
        EntryKind::LockedDirectory { unlocked } => {
            let (status, tone) = lock_status(unlocked);
            line.push(format!("{}/", entry.name), Tone::Directory)
                .push(" ", Tone::Plain)
                .push(status, tone)
        }
        // Locked files look like any other file until read.
        EntryKind::File | EntryKind::LockedFile { .. } => line.push(entry.name.clone(), Tone::Plain),
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.fs.list(ctx.session) {
            Ok(Listing::Empty) => CommandResult::plain("(empty)"),
            Ok(Listing::Entries(entries)) => {
                let owner = ctx.session.player_name();
                CommandResult::lines(entries.iter().map(|e| format_entry(owner, e)).collect())
            }
            Err(e) => fs_error("ls", &e),
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
            ("notes.txt", Node::file("n")),
            ("lab", Node::dir([("void", Node::dir(Vec::<(String, Node)>::new()))])),
            ("vault", Node::locked_dir([("x", Node::file("x"))], "pw", "sealed")),
            ("key.txt", Node::locked_file("k", "pw", "locked")),
        ]))
    }

    #[test]
    fn test_ls_formats_each_kind() {
        let fs = sample_fs();
        let mut session = Session::new("neo");
        let result = run(&LsCommand, &[], &mut session, &fs);
        let lines: Vec<String> = result.lines.iter().map(|l| l.text()).collect();
        assert_eq!(
            lines,
            vec![
                "-rw-r--r--  neo  notes.txt",
                "drw-r--r--  neo  lab/",
                "drw-r--r--  neo  vault/ [LOCKED]",
                "-rw-r--r--  neo  key.txt",
            ]
        );
        assert_eq!(result.lines[2].spans.last().unwrap().tone, Tone::Error);
    }

    #[test]
    fn test_ls_shows_unlocked_directory() {
        let fs = sample_fs();
        let mut session = Session::new("neo");
        session.mark_unlocked("/vault".to_string());
        let result = run(&LsCommand, &[], &mut session, &fs);
        assert_eq!(result.lines[2].text(), "drw-r--r--  neo  vault/ [UNLOCKED]");
        assert_eq!(result.lines[2].spans.last().unwrap().tone, Tone::Success);
    }

    #[test]
    fn test_ls_empty_directory() {
        let fs = sample_fs();
        let mut session = Session::new("neo");
        session.push("lab");
        session.push("void");
        let result = run(&LsCommand, &[], &mut session, &fs);
        assert_eq!(result.text(), "(empty)");
    }
}
