use thiserror::Error;

#[derive(Error, Debug)]
pub enum JidhrError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HJson error: {0}")]
    HJson(#[from] serde_hjson::Error),

    #[error("Unsupported deck file type: {0}")]
    UnsupportedDeckFormat(String),
}

impl From<std::io::Error> for JidhrError {
    fn from(error: std::io::Error) -> Self {
        JidhrError::Io(Box::new(error))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the deck has no roots to study")]
    EmptyDeck,
}
