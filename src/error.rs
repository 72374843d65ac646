use thiserror::Error;

/// Kova SDK error
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("envelope codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("node replied with status {status}: {body}")]
    Status { status: u16, body: String },
}
