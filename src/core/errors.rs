use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnkigenError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Image error: {0}")]
    Image(Box<image::ImageError>),

    #[error("Packaging error: {0}")]
    Packaging(Box<genanki_rs::Error>),

    #[error("Narration failed ({language}): {reason}")]
    Narration { language: String, reason: String },

    #[error("Media file referenced but not on disk: {0}")]
    MissingMedia(String),

    #[error("AnkigenError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AnkigenError {
    fn from(error: std::io::Error) -> Self {
        AnkigenError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AnkigenError {
    fn from(error: reqwest::Error) -> Self {
        AnkigenError::Reqwest(Box::new(error))
    }
}

impl From<image::ImageError> for AnkigenError {
    fn from(error: image::ImageError) -> Self {
        AnkigenError::Image(Box::new(error))
    }
}

impl From<genanki_rs::Error> for AnkigenError {
    fn from(error: genanki_rs::Error) -> Self {
        AnkigenError::Packaging(Box::new(error))
    }
}
