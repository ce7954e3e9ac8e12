use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot authenticate with Discord without a token. Check the
    /// `.env.example` file for the variables the bot reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Optional environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
