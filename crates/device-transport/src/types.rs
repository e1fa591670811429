use core::fmt;

/// Opaque identifier of a device information parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ParamId(u32);

impl ParamId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{raw:04X}", raw = self.0)
    }
}

impl From<u32> for ParamId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Debug)]
pub struct DeviceSummary {
    pub name: String,
    pub driver: String,
}
