use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Format error: {0}")]
    Format(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(message.into())
    }

    pub fn missing(field: &str) -> Self {
        Error::Format(format!("missing field `{field}`"))
    }
}
