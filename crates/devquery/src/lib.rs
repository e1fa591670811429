//! devquery: registry of compute device information parameters
//!
//! Resolves free-form parameter names (`CL_DEVICE_NAME`, `NAME`, `name`) to query
//! identifiers, finds parameter families by prefix or substring, and renders the raw bytes
//! returned by a device query as readable text. Nothing here talks to a device; the raw
//! values come from an [`device_transport::InfoSource`] owned by the caller.

mod error;
pub use error::{Error, Result};

mod types;
pub use types::*;

mod table;
pub use table::{info_map, info_map_len, INFO_MAP};

mod resolve;
pub use resolve::{
    list_prefix, match_next, matches, normalize, param_id, resolve_exact, resolve_prefix,
    resolve_range, Matches, SearchCursor,
};

pub mod flags;

mod format;
pub use format::{describe, format_value};

mod encode;
pub use encode::{encode_value, ProfileValue};

mod loader;
pub use loader::{load_profile_file, load_profiles_dir, DeviceProfile, ProfileSet};

mod metrics;
pub use metrics::{MetricsHub, QueryMetrics};
