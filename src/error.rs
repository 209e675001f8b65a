use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(#[from] server::ServerError),

    #[error("Invalid input: {0}")]
    Input(#[from] classifier::ClassifierError),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Server(err) => err.user_message(),
            Self::Input(err) => err.user_message(),
            Self::JsonParseError(err) => format!("Failed to parse JSON: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Attach a human readable prefix to any error convertible into [`CliError`]
pub trait Context<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<CliError>> Context<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|err| {
            let err: CliError = err.into();
            err.with_context(context)
        })
    }
}
