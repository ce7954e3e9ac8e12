//! Slash command declarations.
//!
//! A `CommandSpec` is built once at startup and sent to Discord, overwriting
//! whatever global command set the application had registered before.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// Type of value a command option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A reference to a guild member / user.
    User,
    /// Free-form text.
    String,
}

impl OptionKind {
    /// Human readable name used in validation errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::String => "string",
        }
    }
}

impl From<OptionKind> for CommandOptionType {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::User => CommandOptionType::User,
            OptionKind::String => CommandOptionType::String,
        }
    }
}

/// A single typed option of a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

impl OptionSpec {
    /// Creates a required option.
    pub fn required(name: &'static str, description: &'static str, kind: OptionKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
        }
    }
}

/// Declaration of a slash command and its ordered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionSpec>,
}

impl From<&OptionSpec> for CreateCommandOption {
    fn from(option: &OptionSpec) -> Self {
        CreateCommandOption::new(option.kind.into(), option.name, option.description)
            .required(option.required)
    }
}

/// Converts a declaration into Serenity's command builder.
///
/// Commands are registered as guild-only since both of them act on guild
/// members.
impl From<&CommandSpec> for CreateCommand {
    fn from(spec: &CommandSpec) -> Self {
        spec.options.iter().fold(
            CreateCommand::new(spec.name)
                .description(spec.description)
                .dm_permission(false),
            |command, option| command.add_option(option.into()),
        )
    }
}
