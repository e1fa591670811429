use crate::ParamId;
use thiserror::Error;

pub type Result<T, E = TransportError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),
    #[error("operation not supported on this backend: {0}")]
    Unsupported(&'static str),
    #[error("invalid parameter: {0}")]
    InvalidParam(ParamId),
}
