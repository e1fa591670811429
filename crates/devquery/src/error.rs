use crate::InfoFormat;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{format:?} value needs {expected} bytes, got {actual}")]
    ShortValue {
        format: InfoFormat,
        expected: usize,
        actual: usize,
    },
    #[error("cannot encode {value} as {format:?}")]
    Unencodable { format: InfoFormat, value: String },
    #[error("unknown parameter: {0}")]
    UnknownParam(String),
}
