use crate::{ids, DeviceSummary, InfoSource, ParamId, Result, TransportError};
use std::collections::HashMap;

/// A simple in-process mock device. Each instance holds its own parameter values.
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    name: String,
    values: HashMap<ParamId, Vec<u8>>,
}

impl MockDevice {
    /// A device answering only the values given.
    pub fn with_values(name: &str, values: HashMap<ParamId, Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set or replace the raw value returned for `id`.
    pub fn insert(&mut self, id: ParamId, raw: Vec<u8>) {
        self.values.insert(id, raw);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn builtin(name: &str) -> Self {
        let mut dev = Self::with_values(name, HashMap::new());
        dev.insert(ids::DEVICE_NAME, c_string("Mock Compute Device"));
        dev.insert(ids::DEVICE_VENDOR, c_string("Mock Vendor"));
        dev.insert(ids::DEVICE_VERSION, c_string("OpenCL 1.2 mock"));
        dev.insert(ids::DEVICE_TYPE, (1u64 << 2).to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_VENDOR_ID, 0x1002u32.to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_MAX_COMPUTE_UNITS, 16u32.to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_MAX_CLOCK_FREQUENCY, 1200u32.to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_ADDRESS_BITS, 64u32.to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_AVAILABLE, 1u32.to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_GLOBAL_MEM_SIZE, (2u64 << 30).to_ne_bytes().to_vec());
        dev.insert(ids::DEVICE_LOCAL_MEM_SIZE, (32u64 << 10).to_ne_bytes().to_vec());
        let sizes: Vec<u8> = [1024usize, 1024, 64]
            .iter()
            .flat_map(|s| s.to_ne_bytes())
            .collect();
        dev.insert(ids::DEVICE_MAX_WORK_ITEM_SIZES, sizes);
        dev
    }
}

fn c_string(s: &str) -> Vec<u8> {
    let mut out = s.as_bytes().to_vec();
    out.push(0);
    out
}

impl InfoSource for MockDevice {
    fn open(name: &str) -> Result<Self> {
        if !Self::list()?.iter().any(|d| d.name == name) {
            return Err(TransportError::DeviceNotFound(name.to_string()));
        }
        Ok(Self::builtin(name))
    }

    fn list() -> Result<Vec<DeviceSummary>> {
        Ok(vec![DeviceSummary {
            name: "mock0".to_string(),
            driver: "mock".to_string(),
        }])
    }

    fn query(&mut self, id: ParamId) -> Result<Vec<u8>> {
        match self.values.get(&id) {
            Some(raw) => {
                tracing::trace!(device = %self.name, %id, len = raw.len(), "mock query");
                Ok(raw.clone())
            }
            None => Err(TransportError::InvalidParam(id)),
        }
    }

    fn supported(&self) -> Result<Vec<ParamId>> {
        let mut ids: Vec<ParamId> = self.values.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_device_answers_name() {
        let mut dev = MockDevice::open("mock0").unwrap();
        let raw = dev.query(ids::DEVICE_NAME).unwrap();
        assert_eq!(raw.last(), Some(&0));
        assert!(raw.starts_with(b"Mock Compute Device"));
    }

    #[test]
    fn unknown_param_is_rejected() {
        let mut dev = MockDevice::with_values("empty", HashMap::new());
        assert!(dev.is_empty());
        let err = dev.query(ids::DEVICE_TOPOLOGY_AMD).unwrap_err();
        assert!(matches!(err, TransportError::InvalidParam(id) if id == ids::DEVICE_TOPOLOGY_AMD));
    }

    #[test]
    fn open_rejects_unlisted_names() {
        assert!(MockDevice::list().unwrap().iter().all(|d| MockDevice::open(&d.name).is_ok()));
        let err = MockDevice::open("gpu7").unwrap_err();
        assert!(matches!(err, TransportError::DeviceNotFound(ref n) if n == "gpu7"));
    }

    #[test]
    fn supported_is_sorted() {
        let dev = MockDevice::open("mock0").unwrap();
        let ids = dev.supported().unwrap();
        assert_eq!(ids.len(), dev.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn insert_overrides_value() {
        let mut dev = MockDevice::open("mock0").unwrap();
        dev.insert(ids::DEVICE_MAX_COMPUTE_UNITS, 4u32.to_ne_bytes().to_vec());
        let raw = dev.query(ids::DEVICE_MAX_COMPUTE_UNITS).unwrap();
        assert_eq!(raw, 4u32.to_ne_bytes().to_vec());
    }
}
