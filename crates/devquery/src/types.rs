use device_transport::ParamId;
use serde::{Deserialize, Serialize};

/// One row of the parameter registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamInfo {
    /// Canonical lowercase name without the `cl_device_` prefix.
    pub name: &'static str,
    #[serde(serialize_with = "id_as_hex")]
    pub id: ParamId,
    pub description: &'static str,
    pub format: InfoFormat,
    /// Suffix appended to the rendered value; may be empty.
    pub unit: &'static str,
}

/// How the raw bytes of a parameter are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoFormat {
    /// 32-bit unsigned integer.
    Uint,
    /// Raw bytes as hex, most significant byte first.
    Hex,
    /// Platform-width unsigned integer.
    SizeT,
    /// 64-bit byte count with automatic unit scaling.
    UlongBytes,
    /// 32-bit byte count with automatic unit scaling.
    UintBytes,
    /// Platform-width byte count with automatic unit scaling.
    SizeTBytes,
    /// Array of platform-width unsigned integers.
    SizeTVec,
    YesNo,
    /// NUL-terminated string.
    Char,
    Ptr,
    DeviceType,
    FpConfig,
    ExecCapabilities,
    LocalMemType,
    PartitionProperties,
    AffinityDomain,
    CacheType,
    QueueProperties,
}

/// A formatted parameter value, ready for display or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoRecord {
    pub name: String,
    pub id: String,
    pub description: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

fn id_as_hex<S: serde::Serializer>(id: &ParamId, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(id)
}
