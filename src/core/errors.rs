use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipdeckError {
    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FlipdeckError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for FlipdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlipdeckError::Reqwest(Box::new(error))
    }
}
