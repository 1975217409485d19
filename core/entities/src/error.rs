use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntitiesError>;

#[derive(Error, Debug)]
pub enum EntitiesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed entity line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("Document has no \"entities\" field")]
    MissingEntities,
    #[error("Document field \"entities\" is not a string")]
    EntitiesNotString,
    #[error("Document root is not a JSON object")]
    NotAnObject,
}
