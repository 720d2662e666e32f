use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenprError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Request failed before a response was received: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub responded with {status}: {body}")]
    HostRejected { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpenprError>;
