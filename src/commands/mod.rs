// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod codec_cmd;
pub mod exit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod messages;
pub mod registry;
pub mod types;
pub mod unlock_cmd;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Action, Command, CommandContext, CommandResult};

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::fs::GameFs;
    use crate::session::Session;

    pub fn run(cmd: &dyn Command, args: &[&str], session: &mut Session, fs: &GameFs) -> CommandResult {
        cmd.execute(CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            rest: args.join(" "),
            session,
            fs,
        })
    }
}
