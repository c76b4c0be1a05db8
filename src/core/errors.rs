use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MnemoError {
    #[error("no card set with id {0}")]
    NotFound(Uuid),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("generator returned an empty response")]
    EmptyResponse,

    #[error("generator response did not match the expected shape: {0}")]
    InvalidSchema(String),

    #[error("MnemoError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for MnemoError {
    fn from(error: reqwest::Error) -> Self {
        MnemoError::Reqwest(Box::new(error))
    }
}
