use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] uwopen_core::ApiError),

    #[error("unknown operation '{operation}', see `uwopen list`")]
    UnknownOperation { operation: String },

    #[error("no API key: pass --key or set UWATERLOO_API_KEY")]
    MissingKey,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Api(_) => 3,
            Self::UnknownOperation { .. } => 2,
            Self::MissingKey => 2,
            Self::Serialization(_) => 4,
        }
    }
}
