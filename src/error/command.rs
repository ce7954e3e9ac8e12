use thiserror::Error;

/// Problems with the options an interaction was invoked with.
///
/// These are shown to the invoking user as an ephemeral error reply and never
/// reach the remote API.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required option was not supplied.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    /// An option was supplied with a value of the wrong type.
    #[error("option `{name}` must be a {expected}")]
    WrongOptionKind {
        /// Name of the offending option
        name: &'static str,
        /// Human readable name of the expected kind
        expected: &'static str,
    },

    /// The command was invoked outside of a guild.
    #[error("this command can only be used in a server")]
    GuildOnly,
}
