//! Typed views of the bitmask and enumerated values a device reports.

use bitflags::{bitflags, Flags};
use device_transport::ids;

bitflags! {
    /// Floating-point capabilities (single, double or half precision).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FpConfig: u64 {
        const DENORM = 1 << 0;
        const INF_NAN = 1 << 1;
        const ROUND_TO_NEAREST = 1 << 2;
        const ROUND_TO_ZERO = 1 << 3;
        const ROUND_TO_INF = 1 << 4;
        const FMA = 1 << 5;
        const SOFT_FLOAT = 1 << 6;
        const CORRECTLY_ROUNDED_DIVIDE_SQRT = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExecCapabilities: u64 {
        const KERNEL = 1 << 0;
        const NATIVE_KERNEL = 1 << 1;
    }
}

bitflags! {
    /// Local memory kind. Zero means the device has none.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LocalMemType: u32 {
        const LOCAL = 0x1;
        const GLOBAL = 0x2;
    }
}

bitflags! {
    /// Global memory cache kind. Zero means no cache.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CacheType: u32 {
        const READ_ONLY = 0x1;
        const READ_WRITE = 0x2;
    }
}

bitflags! {
    /// Affinity domains usable when partitioning by affinity domain.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AffinityDomain: u64 {
        const NUMA = 1 << 0;
        const L4_CACHE = 1 << 1;
        const L3_CACHE = 1 << 2;
        const L2_CACHE = 1 << 3;
        const L1_CACHE = 1 << 4;
        const NEXT_PARTITIONABLE = 1 << 5;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct QueueProperties: u64 {
        const OUT_OF_ORDER_EXEC_MODE_ENABLE = 1 << 0;
        const PROFILING_ENABLE = 1 << 1;
    }
}

/// Token for memory kinds whose zero value is meaningful.
pub const NONE_TOKEN: &str = "NONE";

/// Space-separated names of the recognized bits set in `flags`, in declaration order.
pub fn flag_tokens<F: Flags>(flags: F) -> String {
    flags
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse flag names (case-insensitive) back into bits.
pub fn flags_from_tokens<F: Flags + Copy>(tokens: &[String]) -> Option<F> {
    let mut out = F::empty();
    for t in tokens {
        let t = t.trim().to_ascii_uppercase();
        if t == NONE_TOKEN {
            continue;
        }
        out.insert(F::from_name(&t)?);
    }
    Some(out)
}

const DEVICE_TYPES: &[(u64, &str)] = &[
    (1 << 0, "DEFAULT"),
    (1 << 1, "CPU"),
    (1 << 2, "GPU"),
    (1 << 3, "ACCELERATOR"),
    (1 << 4, "CUSTOM"),
    (0xFFFF_FFFF, "ALL"),
];

pub const UNKNOWN_TOKEN: &str = "UNKNOWN";

/// Category name of a device type code.
pub fn device_type_name(code: u64) -> &'static str {
    DEVICE_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, n)| *n)
        .unwrap_or(UNKNOWN_TOKEN)
}

pub fn device_type_code(name: &str) -> Option<u64> {
    DEVICE_TYPES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(c, _)| *c)
}

const PARTITION_PROPERTIES: &[(isize, &str)] = &[
    (ids::PARTITION_EQUALLY, "EQUALLY"),
    (ids::PARTITION_BY_COUNTS, "BY_COUNTS"),
    (ids::PARTITION_BY_AFFINITY_DOMAIN, "BY_AFFINITY_DOMAIN"),
    (ids::PARTITION_EQUALLY_EXT, "EQUALLY_EXT"),
    (ids::PARTITION_BY_COUNTS_EXT, "BY_COUNTS_EXT"),
    (ids::PARTITION_BY_NAMES_EXT, "BY_NAMES_EXT"),
    (ids::PARTITION_BY_AFFINITY_DOMAIN_EXT, "BY_AFFINITY_DOMAIN_EXT"),
];

/// Token for one partition property code; unknown codes keep their value in hex.
pub fn partition_property_token(code: isize) -> String {
    match PARTITION_PROPERTIES.iter().find(|(c, _)| *c == code) {
        Some((_, name)) => (*name).to_string(),
        None => format!("{UNKNOWN_TOKEN}(0x{code:x})"),
    }
}

pub fn partition_property_code(name: &str) -> Option<isize> {
    PARTITION_PROPERTIES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_follow_declaration_order() {
        let fp = FpConfig::FMA | FpConfig::DENORM | FpConfig::ROUND_TO_NEAREST;
        assert_eq!(flag_tokens(fp), "DENORM ROUND_TO_NEAREST FMA");
    }

    #[test]
    fn unrecognized_bits_are_omitted() {
        let q = QueueProperties::from_bits_retain(0b1110);
        assert_eq!(flag_tokens(q), "PROFILING_ENABLE");
        assert_eq!(flag_tokens(ExecCapabilities::empty()), "");
    }

    #[test]
    fn tokens_parse_back() {
        let tokens = vec!["numa".to_string(), "L2_CACHE".to_string()];
        let ad: AffinityDomain = flags_from_tokens(&tokens).unwrap();
        assert_eq!(ad, AffinityDomain::NUMA | AffinityDomain::L2_CACHE);
        let bad = vec!["L5_CACHE".to_string()];
        assert!(flags_from_tokens::<AffinityDomain>(&bad).is_none());
    }

    #[test]
    fn device_type_lookup() {
        assert_eq!(device_type_name(1 << 2), "GPU");
        assert_eq!(device_type_name(1 << 1), "CPU");
        assert_eq!(device_type_name(0), "UNKNOWN");
        assert_eq!(device_type_name((1 << 1) | (1 << 2)), "UNKNOWN");
        assert_eq!(device_type_code("accelerator"), Some(1 << 3));
    }

    #[test]
    fn partition_tokens() {
        assert_eq!(partition_property_token(0x1086), "EQUALLY");
        assert_eq!(partition_property_token(0x4052), "BY_NAMES_EXT");
        assert_eq!(partition_property_token(0x1234), "UNKNOWN(0x1234)");
        assert_eq!(partition_property_code("by_counts"), Some(0x1087));
    }
}
