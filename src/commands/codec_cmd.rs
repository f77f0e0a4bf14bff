//! dc64/ec64 and dc/ec - text transforms
//!
//! The text is everything after the command name, spacing preserved.

use crate::codec::{decode_base64, decode_substitution, encode_base64, encode_substitution};
use crate::commands::{Command, CommandContext, CommandResult};

fn joined(ctx: &CommandContext<'_>) -> Option<String> {
    (!ctx.rest.is_empty()).then(|| ctx.rest.clone())
}

fn usage(cmd: &str, verb: &str) -> CommandResult {
    CommandResult::plain(format!("Usage: {} [text to {}]", cmd, verb))
}

pub struct Base64DecodeCommand;

impl Command for Base64DecodeCommand {
    fn name(&self) -> &'static str {
        "dc64"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(text) = joined(&ctx) else {
            return usage(self.name(), "decode");
        };
        match decode_base64(&text) {
            Ok(decoded) => CommandResult::plain(format!("Decoded text: {}", decoded)),
            Err(_) => CommandResult::error("Error: Invalid Base64 string provided."),
        }
    }
}

pub struct Base64EncodeCommand;

impl Command for Base64EncodeCommand {
    fn name(&self) -> &'static str {
        "ec64"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(text) = joined(&ctx) else {
            return usage(self.name(), "encode");
        };
        CommandResult::plain(format!("Encoded text: {}", encode_base64(&text)))
    }
}

pub struct DecodeCommand;

impl Command for DecodeCommand {
    fn name(&self) -> &'static str {
        "dc"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(text) = joined(&ctx) else {
            return usage(self.name(), "decode");
        };
        match decode_substitution(&text) {
            Ok(decoded) => CommandResult::plain(format!("Decoded text: {}", decoded)),
            Err(_) => CommandResult::error("Error: Invalid input. Could not decode text."),
        }
    }
}

pub struct EncodeCommand;

impl Command for EncodeCommand {
    fn name(&self) -> &'static str {
        "ec"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(text) = joined(&ctx) else {
            return usage(self.name(), "encode");
        };
        CommandResult::plain(format!("Encoded text: {}", encode_substitution(&text)))
    }
}
