use crate::{DeviceSummary, ParamId, Result};

/// A minimal blocking interface to something that answers device information queries.
pub trait InfoSource {
    /// Open a device by name (e.g., "mock0").
    fn open(name: &str) -> Result<Self>
    where
        Self: Sized;

    /// Attempt to list available devices for this backend.
    fn list() -> Result<Vec<DeviceSummary>>;

    /// Query one parameter, returning its raw value bytes.
    fn query(&mut self, id: ParamId) -> Result<Vec<u8>>;

    /// Identifiers this device is known to answer, if the backend can tell.
    fn supported(&self) -> Result<Vec<ParamId>> {
        Err(crate::TransportError::Unsupported("parameter enumeration"))
    }
}
