use thiserror::Error;

use crate::conversion::conversionerror::ConversionError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFound(String),
    #[error("{0}")]
    Conversion(#[from] ConversionError),
}
