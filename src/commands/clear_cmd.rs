use crate::commands::{Action, Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::empty().with_action(Action::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run;
    use crate::fs::default_world;
    use crate::session::Session;

    #[test]
    fn test_clear_requests_redraw() {
        let fs = default_world();
        let mut session = Session::new("p");
        let result = run(&ClearCommand, &[], &mut session, &fs);
        assert_eq!(result.action, Action::Clear);
        assert!(result.lines.is_empty());
    }
}
