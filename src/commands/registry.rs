// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Look up a command. Names are matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        create_default_registry()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::codec_cmd::{Base64DecodeCommand, Base64EncodeCommand, DecodeCommand, EncodeCommand};
use super::exit_cmd::ExitCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::unlock_cmd::UnlockCommand;

/// Register every game command.
pub fn register_game_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(UnlockCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(Base64DecodeCommand));
    registry.register(Box::new(Base64EncodeCommand));
    registry.register(Box::new(DecodeCommand));
    registry.register(Box::new(EncodeCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(ExitCommand));
}

pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_game_commands(&mut registry);
    registry
}
