use thiserror::Error;

/// All errors that can occur in chiplist-core.
#[derive(Debug, Error)]
pub enum ChiplistError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error from {0}: {1}")]
    Api(String, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Process exit codes used by the `chiplist` binary.
#[repr(i32)]
pub enum ExitCode {
    GeneralError = 1,
    InvalidArgs = 3,
    NetworkError = 6,
}

impl ChiplistError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Http(_) | Self::Api(_, _) => ExitCode::NetworkError,
            Self::InvalidUrl(_) | Self::Config(_) => ExitCode::InvalidArgs,
            _ => ExitCode::GeneralError,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChiplistError>;
