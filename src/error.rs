use std::{io, num::ParseFloatError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid size \"{0}\" - expected WIDTHxHEIGHT")]
    InvalidFormat(String),
    #[error("invalid number in size: {0}")]
    InvalidNumber(#[from] ParseFloatError),
    #[error("size must be finite: \"{0}\"")]
    NonFinite(String),
    #[error("failed to read from file")]
    ReadFailure(#[from] io::Error),
    #[error("malformed size list: {0}")]
    Json(#[from] serde_json::Error),
}
