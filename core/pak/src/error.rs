use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PakError>;

#[derive(Error, Debug)]
pub enum PakError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid PAK signature: expected \"PACK\", got {0:?}")]
    InvalidSignature([u8; 4]),
    #[error("Directory length {0} is not a multiple of 64")]
    InvalidDirectoryLength(u32),
    #[error("File name does not fit a 56-byte directory entry: {0}")]
    NameTooLong(String),
}
