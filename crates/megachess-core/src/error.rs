use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid coordinate range: min {min} must be below max {max}")]
    InvalidRange { min: u8, max: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
