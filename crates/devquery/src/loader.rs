use crate::encode::{encode_value, ProfileValue};
use crate::{resolve_exact, Error};
use anyhow::Context;
use device_transport::{MockDevice, ParamId};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameter values for a simulated device, keyed by parameter name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, ProfileValue>,
}

impl DeviceProfile {
    /// Raw blobs for every value, keyed by parameter identifier.
    pub fn encode(&self) -> crate::Result<HashMap<ParamId, Vec<u8>>> {
        let mut out = HashMap::with_capacity(self.values.len());
        for (name, value) in &self.values {
            let info = resolve_exact(name).ok_or_else(|| Error::UnknownParam(name.clone()))?;
            out.insert(info.id, encode_value(info.format, value)?);
        }
        Ok(out)
    }

    pub fn to_mock(&self) -> crate::Result<MockDevice> {
        Ok(MockDevice::with_values(&self.name, self.encode()?))
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProfileSet {
    pub profiles: HashMap<String, DeviceProfile>,
}

impl ProfileSet {
    pub fn insert(&mut self, profile: DeviceProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }
}

pub fn load_profile_file(path: impl AsRef<Path>) -> anyhow::Result<DeviceProfile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading profile: {}", path.display()))?;
    let val: Value =
        serde_yaml::from_str(&raw).with_context(|| format!("parsing yaml: {}", path.display()))?;
    let profile: DeviceProfile = serde_yaml::from_value(val)
        .with_context(|| format!("decoding profile: {}", path.display()))?;
    profile
        .encode()
        .with_context(|| format!("validating profile: {}", path.display()))?;
    tracing::debug!(
        profile = %profile.name,
        values = profile.values.len(),
        "loaded device profile"
    );
    Ok(profile)
}

pub fn load_profiles_dir(dir: impl AsRef<Path>) -> anyhow::Result<ProfileSet> {
    let mut set = ProfileSet::default();
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if let Some(ext) = path.extension() {
            if ext == "yml" || ext == "yaml" {
                entries.push(path);
            }
        }
    }
    entries.sort();
    for p in entries {
        let profile = load_profile_file(&p)?;
        if set.profiles.contains_key(&profile.name) {
            tracing::warn!(profile = %profile.name, path = %p.display(), "duplicate profile name, replacing");
        }
        set.insert(profile);
    }
    Ok(set)
}
