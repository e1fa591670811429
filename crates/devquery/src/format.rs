use crate::flags::{
    device_type_name, flag_tokens, partition_property_token, AffinityDomain, CacheType,
    ExecCapabilities, FpConfig, LocalMemType, QueueProperties, NONE_TOKEN,
};
use crate::{Error, InfoFormat, InfoRecord, ParamInfo, Result};
use bitflags::Flags;
use core::fmt::Write;
use std::mem::size_of;
use time::OffsetDateTime;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

impl InfoFormat {
    /// Number of bytes the format reads, for fixed-width formats.
    pub fn value_width(self) -> Option<usize> {
        match self {
            InfoFormat::Uint
            | InfoFormat::UintBytes
            | InfoFormat::YesNo
            | InfoFormat::LocalMemType
            | InfoFormat::CacheType => Some(size_of::<u32>()),
            InfoFormat::UlongBytes
            | InfoFormat::DeviceType
            | InfoFormat::FpConfig
            | InfoFormat::ExecCapabilities
            | InfoFormat::AffinityDomain
            | InfoFormat::QueueProperties => Some(size_of::<u64>()),
            InfoFormat::SizeT | InfoFormat::SizeTBytes | InfoFormat::Ptr => {
                Some(size_of::<usize>())
            }
            InfoFormat::Hex
            | InfoFormat::SizeTVec
            | InfoFormat::Char
            | InfoFormat::PartitionProperties => None,
        }
    }

    /// Render a raw value. `unit` is appended by the formats that carry one.
    pub fn render(self, raw: &[u8], unit: &str) -> Result<String> {
        let out = match self {
            InfoFormat::Uint => with_unit(read_u32(self, raw)?.to_string(), unit),
            InfoFormat::Hex => with_unit(hex_string(raw), unit),
            InfoFormat::SizeT => with_unit(read_usize(self, raw)?.to_string(), unit),
            InfoFormat::UlongBytes => byte_size(read_u64(self, raw)?),
            InfoFormat::UintBytes => byte_size(u64::from(read_u32(self, raw)?)),
            InfoFormat::SizeTBytes => byte_size(read_usize(self, raw)? as u64),
            InfoFormat::SizeTVec => size_vec(raw),
            InfoFormat::YesNo => yes_no(read_u32(self, raw)? != 0).to_string(),
            InfoFormat::Char => with_unit(c_string(raw), unit),
            InfoFormat::Ptr => format!("{:#x}", read_usize(self, raw)?),
            InfoFormat::DeviceType => device_type_name(read_u64(self, raw)?).to_string(),
            InfoFormat::FpConfig => flag_tokens(FpConfig::from_bits_retain(read_u64(self, raw)?)),
            InfoFormat::ExecCapabilities => {
                flag_tokens(ExecCapabilities::from_bits_retain(read_u64(self, raw)?))
            }
            InfoFormat::LocalMemType => {
                none_or_tokens(LocalMemType::from_bits_retain(read_u32(self, raw)?))
            }
            InfoFormat::PartitionProperties => partition_properties(raw),
            InfoFormat::AffinityDomain => {
                flag_tokens(AffinityDomain::from_bits_retain(read_u64(self, raw)?))
            }
            InfoFormat::CacheType => {
                none_or_tokens(CacheType::from_bits_retain(read_u32(self, raw)?))
            }
            InfoFormat::QueueProperties => {
                flag_tokens(QueueProperties::from_bits_retain(read_u64(self, raw)?))
            }
        };
        Ok(out)
    }
}

/// Render `raw` with the parameter's format and unit, keeping at most `capacity` bytes.
/// `capacity` counts text bytes only; no room is reserved for a terminator.
pub fn format_value(info: &ParamInfo, raw: &[u8], capacity: usize) -> Result<String> {
    let out = info.format.render(raw, info.unit)?;
    Ok(truncate_to(out, capacity))
}

/// Format a value into a record carrying the parameter's identity.
pub fn describe(
    info: &ParamInfo,
    raw: &[u8],
    capacity: usize,
    ts: Option<OffsetDateTime>,
) -> Result<InfoRecord> {
    Ok(InfoRecord {
        name: info.name.to_string(),
        id: info.id.to_string(),
        description: info.description.to_string(),
        value: format_value(info, raw, capacity)?,
        ts: ts.and_then(|t| {
            t.format(&time::format_description::well_known::Rfc3339)
                .ok()
        }),
    })
}

fn truncate_to(mut s: String, capacity: usize) -> String {
    if s.len() > capacity {
        let mut end = capacity;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

fn read_array<const N: usize>(format: InfoFormat, raw: &[u8]) -> Result<[u8; N]> {
    let expected = format.value_width().unwrap_or(N);
    raw.get(..expected)
        .and_then(|s| <[u8; N]>::try_from(s).ok())
        .ok_or(Error::ShortValue {
            format,
            expected,
            actual: raw.len(),
        })
}

fn read_u32(format: InfoFormat, raw: &[u8]) -> Result<u32> {
    read_array(format, raw).map(u32::from_ne_bytes)
}

fn read_u64(format: InfoFormat, raw: &[u8]) -> Result<u64> {
    read_array(format, raw).map(u64::from_ne_bytes)
}

fn read_usize(format: InfoFormat, raw: &[u8]) -> Result<usize> {
    read_array(format, raw).map(usize::from_ne_bytes)
}

fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{value} {unit}")
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

// Most significant byte first; leading zero bytes are dropped, so zero renders as "0x".
fn hex_string(raw: &[u8]) -> String {
    let mut out = String::from("0x");
    for b in raw.iter().rev().skip_while(|b| **b == 0) {
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn byte_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} bytes")
    } else if bytes < MIB {
        format!("{:.1} KiB ({bytes} bytes)", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MiB ({bytes} bytes)", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GiB ({bytes} bytes)", bytes as f64 / GIB as f64)
    }
}

fn size_vec(raw: &[u8]) -> String {
    let items: Vec<String> = raw
        .chunks_exact(size_of::<usize>())
        .filter_map(|c| <[u8; size_of::<usize>()]>::try_from(c).ok())
        .map(|b| usize::from_ne_bytes(b).to_string())
        .collect();
    format!("({})", items.join(", "))
}

fn c_string(raw: &[u8]) -> String {
    let end = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

fn none_or_tokens<F: Flags>(flags: F) -> String {
    if flags.is_empty() {
        NONE_TOKEN.to_string()
    } else {
        flag_tokens(flags)
    }
}

fn partition_properties(raw: &[u8]) -> String {
    raw.chunks_exact(size_of::<isize>())
        .filter_map(|c| <[u8; size_of::<isize>()]>::try_from(c).ok())
        .map(|b| partition_property_token(isize::from_ne_bytes(b)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{info_map, resolve_exact};

    fn usizes(v: &[usize]) -> Vec<u8> {
        v.iter().flat_map(|x| x.to_ne_bytes()).collect()
    }

    fn fmt(name: &str, raw: &[u8]) -> String {
        let info = resolve_exact(name).unwrap();
        format_value(info, raw, 1024).unwrap()
    }

    #[test]
    fn byte_sizes_scale() {
        assert_eq!(InfoFormat::UintBytes.render(&512u32.to_ne_bytes(), "").unwrap(), "512 bytes");
        assert_eq!(
            InfoFormat::UlongBytes.render(&2048u64.to_ne_bytes(), "").unwrap(),
            "2.0 KiB (2048 bytes)"
        );
        assert_eq!(
            InfoFormat::SizeTBytes.render(&1_572_864usize.to_ne_bytes(), "").unwrap(),
            "1.5 MiB (1572864 bytes)"
        );
        assert_eq!(
            InfoFormat::UlongBytes.render(&(3u64 << 30).to_ne_bytes(), "").unwrap(),
            "3.0 GiB (3221225472 bytes)"
        );
        assert_eq!(
            InfoFormat::UintBytes.render(&1023u32.to_ne_bytes(), "").unwrap(),
            "1023 bytes"
        );
        assert_eq!(
            InfoFormat::UintBytes.render(&1024u32.to_ne_bytes(), "").unwrap(),
            "1.0 KiB (1024 bytes)"
        );
    }

    #[test]
    fn yes_no_values() {
        assert_eq!(fmt("available", &1u32.to_ne_bytes()), "Yes");
        assert_eq!(fmt("available", &0u32.to_ne_bytes()), "No");
    }

    #[test]
    fn hex_drops_leading_zero_bytes() {
        // 42 stored little-endian in three bytes
        assert_eq!(InfoFormat::Hex.render(&[0x2A, 0x00, 0x00], "").unwrap(), "0x2a");
        assert_eq!(InfoFormat::Hex.render(&[0x02, 0x00, 0x10, 0x00], "").unwrap(), "0x100002");
        assert_eq!(InfoFormat::Hex.render(&[0, 0, 0, 0], "").unwrap(), "0x");
        assert_eq!(InfoFormat::Hex.render(&[0xFF], "id").unwrap(), "0xff id");
    }

    #[test]
    fn size_vector() {
        assert_eq!(fmt("max_work_item_sizes", &usizes(&[1, 2, 3])), "(1, 2, 3)");
        assert_eq!(InfoFormat::SizeTVec.render(&[], "").unwrap(), "()");
    }

    #[test]
    fn integers_carry_units() {
        assert_eq!(fmt("max_clock_frequency", &1500u32.to_ne_bytes()), "1500 MHz");
        assert_eq!(fmt("max_compute_units", &8u32.to_ne_bytes()), "8");
        assert_eq!(fmt("image2d_max_width", &usizes(&[16384])), "16384 px");
    }

    #[test]
    fn strings_stop_at_nul() {
        assert_eq!(fmt("name", b"Tahiti\0garbage"), "Tahiti");
        assert_eq!(fmt("vendor", b"NoTerminator"), "NoTerminator");
    }

    #[test]
    fn pointers_render_as_hex() {
        assert_eq!(fmt("platform", &usizes(&[0xdead_beef])), "0xdeadbeef");
        assert_eq!(fmt("parent_device", &usizes(&[0])), "0x0");
    }

    #[test]
    fn device_type_names() {
        assert_eq!(fmt("type", &(1u64 << 2).to_ne_bytes()), "GPU");
        assert_eq!(fmt("type", &(1u64 << 9).to_ne_bytes()), "UNKNOWN");
    }

    #[test]
    fn bitmask_formats() {
        let fp = (FpConfig::DENORM | FpConfig::INF_NAN | FpConfig::FMA).bits();
        assert_eq!(fmt("single_fp_config", &fp.to_ne_bytes()), "DENORM INF_NAN FMA");
        assert_eq!(fmt("execution_capabilities", &3u64.to_ne_bytes()), "KERNEL NATIVE_KERNEL");
        assert_eq!(
            fmt("queue_properties", &2u64.to_ne_bytes()),
            "PROFILING_ENABLE"
        );
        assert_eq!(
            fmt("partition_affinity_domain", &0b10_0001u64.to_ne_bytes()),
            "NUMA NEXT_PARTITIONABLE"
        );
        assert_eq!(fmt("local_mem_type", &1u32.to_ne_bytes()), "LOCAL");
        assert_eq!(fmt("local_mem_type", &0u32.to_ne_bytes()), "NONE");
        assert_eq!(fmt("global_mem_cache_type", &2u32.to_ne_bytes()), "READ_WRITE");
        assert_eq!(fmt("global_mem_cache_type", &0u32.to_ne_bytes()), "NONE");
    }

    #[test]
    fn partition_property_list() {
        let raw: Vec<u8> = [0x1086isize, 0x1088, 0x7777]
            .iter()
            .flat_map(|x| x.to_ne_bytes())
            .collect();
        assert_eq!(
            fmt("partition_properties", &raw),
            "EQUALLY BY_AFFINITY_DOMAIN UNKNOWN(0x7777)"
        );
    }

    #[test]
    fn short_values_are_rejected() {
        let err = InfoFormat::UlongBytes.render(&[1, 2], "").unwrap_err();
        assert!(matches!(
            err,
            Error::ShortValue {
                expected: 8,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn fixed_widths_match_readers() {
        for info in info_map() {
            let Some(width) = info.format.value_width() else {
                continue;
            };
            assert!(info.format.render(&vec![0u8; width], "").is_ok(), "{}", info.name);
            match info.format.render(&vec![0u8; width - 1], "") {
                Err(Error::ShortValue { expected, .. }) => assert_eq!(expected, width),
                other => panic!("{}: {other:?}", info.name),
            }
        }
        assert_eq!(InfoFormat::Char.value_width(), None);
    }

    #[test]
    fn output_is_truncated_to_capacity() {
        let info = resolve_exact("name").unwrap();
        assert_eq!(format_value(info, b"Radeon\0", 3).unwrap(), "Rad");
        assert_eq!(format_value(info, "Ärger\0".as_bytes(), 1).unwrap(), "");
        assert_eq!(format_value(info, b"Radeon\0", 0).unwrap(), "");
    }

    #[test]
    fn describe_builds_record() {
        let info = resolve_exact("address_bits").unwrap();
        let rec = describe(info, &64u32.to_ne_bytes(), 64, None).unwrap();
        assert_eq!(rec.name, "address_bits");
        assert_eq!(rec.id, "0x100D");
        assert_eq!(rec.value, "64 bits");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("\"ts\""));
        let stamped = describe(info, &64u32.to_ne_bytes(), 64, Some(OffsetDateTime::UNIX_EPOCH))
            .unwrap();
        assert_eq!(stamped.ts.as_deref(), Some("1970-01-01T00:00:00Z"));
    }
}
