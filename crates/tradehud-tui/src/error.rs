use thiserror::Error;

/// Shell-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("tracing setup failed: {0}")]
    Tracing(String),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 10,
            Self::Tracing(_) => 2,
        }
    }
}
