//! device-transport: identifiers and query backends for compute device information
//!
//! This crate defines the opaque parameter identifier passed to a device query, the raw
//! identifier constants of the query API, and a small blocking trait for backends that
//! answer such queries with raw byte blobs. The default build enables a `mock` backend so
//! that binaries can run on any host without a native driver.

mod types;
pub use types::{DeviceSummary, ParamId};

pub mod ids;

mod error;
pub use error::{Result, TransportError};

mod traits;
pub use traits::InfoSource;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockDevice;
