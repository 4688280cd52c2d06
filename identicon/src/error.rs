use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdenticonError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
}
