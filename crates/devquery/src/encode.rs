use crate::flags::{
    device_type_code, flags_from_tokens, partition_property_code, AffinityDomain, CacheType,
    ExecCapabilities, FpConfig, LocalMemType, QueueProperties,
};
use crate::{Error, InfoFormat, Result};
use bitflags::Flags;
use serde::{Deserialize, Serialize};

/// A typed parameter value as written in a device profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Bool(bool),
    Int(u64),
    Text(String),
    List(Vec<ProfileValue>),
}

/// Build the raw bytes a device would return for `value` under `format`.
pub fn encode_value(format: InfoFormat, value: &ProfileValue) -> Result<Vec<u8>> {
    let bad = || Error::Unencodable {
        format,
        value: format!("{value:?}"),
    };
    let out = match (format, value) {
        (InfoFormat::Uint | InfoFormat::UintBytes, ProfileValue::Int(v)) => {
            u32::try_from(*v).map_err(|_| bad())?.to_ne_bytes().to_vec()
        }
        (InfoFormat::YesNo, ProfileValue::Bool(b)) => u32::from(*b).to_ne_bytes().to_vec(),
        (InfoFormat::YesNo, ProfileValue::Int(v)) => {
            u32::from(*v != 0).to_ne_bytes().to_vec()
        }
        (InfoFormat::UlongBytes, ProfileValue::Int(v)) => v.to_ne_bytes().to_vec(),
        (InfoFormat::SizeT | InfoFormat::SizeTBytes | InfoFormat::Ptr, ProfileValue::Int(v)) => {
            usize::try_from(*v).map_err(|_| bad())?.to_ne_bytes().to_vec()
        }
        (InfoFormat::Hex, ProfileValue::Int(v)) => match u32::try_from(*v) {
            Ok(v32) => v32.to_ne_bytes().to_vec(),
            Err(_) => v.to_ne_bytes().to_vec(),
        },
        (InfoFormat::Hex, ProfileValue::List(items)) => items
            .iter()
            .map(|i| match i {
                ProfileValue::Int(b) => u8::try_from(*b).ok(),
                _ => None,
            })
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(bad)?,
        (InfoFormat::SizeTVec, ProfileValue::List(items)) => {
            let mut out = Vec::new();
            for i in items {
                let v = match i {
                    ProfileValue::Int(v) => usize::try_from(*v).map_err(|_| bad())?,
                    _ => return Err(bad()),
                };
                out.extend_from_slice(&v.to_ne_bytes());
            }
            out
        }
        (InfoFormat::Char, ProfileValue::Text(s)) => {
            let mut out = s.as_bytes().to_vec();
            out.push(0);
            out
        }
        (InfoFormat::DeviceType, ProfileValue::Text(s)) => {
            device_type_code(s).ok_or_else(bad)?.to_ne_bytes().to_vec()
        }
        (InfoFormat::DeviceType, ProfileValue::Int(v)) => v.to_ne_bytes().to_vec(),
        (InfoFormat::FpConfig, v) => flags_u64::<FpConfig>(v).ok_or_else(bad)?,
        (InfoFormat::ExecCapabilities, v) => flags_u64::<ExecCapabilities>(v).ok_or_else(bad)?,
        (InfoFormat::AffinityDomain, v) => flags_u64::<AffinityDomain>(v).ok_or_else(bad)?,
        (InfoFormat::QueueProperties, v) => flags_u64::<QueueProperties>(v).ok_or_else(bad)?,
        (InfoFormat::LocalMemType, v) => flags_u32::<LocalMemType>(v).ok_or_else(bad)?,
        (InfoFormat::CacheType, v) => flags_u32::<CacheType>(v).ok_or_else(bad)?,
        (InfoFormat::PartitionProperties, ProfileValue::List(items)) => {
            let mut out = Vec::new();
            for i in items {
                let code = match i {
                    ProfileValue::Text(s) => partition_property_code(s).ok_or_else(bad)?,
                    ProfileValue::Int(v) => isize::try_from(*v).map_err(|_| bad())?,
                    _ => return Err(bad()),
                };
                out.extend_from_slice(&code.to_ne_bytes());
            }
            out
        }
        _ => return Err(bad()),
    };
    Ok(out)
}

/// Flag names from either a whitespace-separated string or a list of strings.
fn tokens(value: &ProfileValue) -> Option<Vec<String>> {
    match value {
        ProfileValue::Text(s) => Some(s.split_whitespace().map(str::to_string).collect()),
        ProfileValue::List(items) => items
            .iter()
            .map(|i| match i {
                ProfileValue::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

fn flags_u64<F: Flags<Bits = u64> + Copy>(value: &ProfileValue) -> Option<Vec<u8>> {
    let bits = match value {
        ProfileValue::Int(v) => *v,
        other => flags_from_tokens::<F>(&tokens(other)?)?.bits(),
    };
    Some(bits.to_ne_bytes().to_vec())
}

fn flags_u32<F: Flags<Bits = u32> + Copy>(value: &ProfileValue) -> Option<Vec<u8>> {
    let bits = match value {
        ProfileValue::Int(v) => u32::try_from(*v).ok()?,
        other => flags_from_tokens::<F>(&tokens(other)?)?.bits(),
    };
    Some(bits.to_ne_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ProfileValue {
        ProfileValue::Text(s.to_string())
    }

    #[test]
    fn encoded_values_render_back() {
        let cases = [
            (InfoFormat::Uint, ProfileValue::Int(32), "32"),
            (InfoFormat::YesNo, ProfileValue::Bool(true), "Yes"),
            (InfoFormat::UlongBytes, ProfileValue::Int(4 << 30), "4.0 GiB (4294967296 bytes)"),
            (InfoFormat::Char, text("Fiji"), "Fiji"),
            (InfoFormat::DeviceType, text("cpu"), "CPU"),
            (InfoFormat::FpConfig, text("INF_NAN DENORM"), "DENORM INF_NAN"),
            (InfoFormat::CacheType, text("NONE"), "NONE"),
            (
                InfoFormat::SizeTVec,
                ProfileValue::List(vec![ProfileValue::Int(256), ProfileValue::Int(16)]),
                "(256, 16)",
            ),
            (
                InfoFormat::PartitionProperties,
                ProfileValue::List(vec![text("EQUALLY"), text("BY_COUNTS")]),
                "EQUALLY BY_COUNTS",
            ),
            (InfoFormat::Hex, ProfileValue::Int(0x1002), "0x1002"),
        ];
        for (format, value, expected) in cases {
            let raw = encode_value(format, &value).unwrap();
            assert_eq!(format.render(&raw, "").unwrap(), expected, "{format:?}");
        }
    }

    #[test]
    fn hex_byte_list_is_raw() {
        let v = ProfileValue::List(vec![ProfileValue::Int(0x01), ProfileValue::Int(0xAB)]);
        assert_eq!(encode_value(InfoFormat::Hex, &v).unwrap(), vec![0x01, 0xAB]);
    }

    #[test]
    fn mismatched_values_are_rejected() {
        assert!(encode_value(InfoFormat::Uint, &text("many")).is_err());
        assert!(encode_value(InfoFormat::Uint, &ProfileValue::Int(u64::MAX)).is_err());
        assert!(encode_value(InfoFormat::DeviceType, &text("quantum")).is_err());
        assert!(encode_value(InfoFormat::FpConfig, &text("DENORM WARP")).is_err());
        let err = encode_value(InfoFormat::Char, &ProfileValue::Int(1)).unwrap_err();
        assert!(matches!(err, Error::Unencodable { format: InfoFormat::Char, .. }));
    }

    #[test]
    fn untagged_values_deserialize() {
        let v: ProfileValue = serde_yaml::from_str("[1024, 1024, 64]").unwrap();
        assert_eq!(
            v,
            ProfileValue::List(vec![
                ProfileValue::Int(1024),
                ProfileValue::Int(1024),
                ProfileValue::Int(64)
            ])
        );
        let b: ProfileValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(b, ProfileValue::Bool(true));
    }
}
