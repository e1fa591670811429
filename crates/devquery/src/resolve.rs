//! Name resolution over the registry: exact lookup, prefix families and substring scans.

use crate::table::INFO_MAP;
use crate::ParamInfo;
use device_transport::ParamId;
use std::cmp::Ordering;
use std::ops::Range;

/// Namespace prefixes accepted in front of a parameter name, most specific first.
const NAME_PREFIXES: &[&str] = &["cl_device_", "cl_"];

/// Canonical registry key for a user-supplied name.
///
/// `CL_DEVICE_ENDIAN_LITTLE`, `ENDIAN_LITTLE` and `endian_little` all map to
/// `endian_little`. Prefixes are stripped until none is left, so the result is a fixed point.
pub fn normalize(name: &str) -> String {
    let mut key = name.to_ascii_lowercase();
    while let Some(rest) = NAME_PREFIXES.iter().find_map(|p| key.strip_prefix(p)) {
        key = rest.to_string();
    }
    key
}

/// Compare `key` against the first `key.len()` bytes of `name`, ignoring ASCII case.
fn cmp_window(key: &str, name: &str) -> Ordering {
    let window = &name.as_bytes()[..name.len().min(key.len())];
    key.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(window.iter().map(|b| b.to_ascii_lowercase()))
}

/// Index of some entry whose name begins with `key` (already normalized).
fn find_index(key: &str) -> Option<usize> {
    INFO_MAP
        .binary_search_by(|e| cmp_window(key, e.name).reverse())
        .ok()
}

fn family(key: &str) -> Option<Range<usize>> {
    let hit = find_index(key)?;
    let start = INFO_MAP[..hit].partition_point(|e| cmp_window(key, e.name) == Ordering::Greater);
    let end = hit + INFO_MAP[hit..].partition_point(|e| cmp_window(key, e.name) == Ordering::Equal);
    Some(start..end)
}

/// Index range of every entry whose name begins with `prefix`.
///
/// The range is the maximal contiguous block of the sorted table sharing the prefix.
/// An empty prefix matches the whole table.
pub fn resolve_range(prefix: &str) -> Option<Range<usize>> {
    let key = normalize(prefix);
    let range = family(&key);
    if range.is_none() {
        tracing::debug!(prefix = %key, "no parameter with prefix");
    }
    range
}

/// Entries whose name begins with `prefix`; empty when there are none.
pub fn list_prefix(prefix: &str) -> &'static [ParamInfo] {
    match resolve_range(prefix) {
        Some(r) => &INFO_MAP[r],
        None => &[],
    }
}

/// The entry whose name equals `name` after normalization.
///
/// A name that only prefixes other entries (e.g. `vendor` vs `vendor_id`) never resolves
/// to one of them.
pub fn resolve_exact(name: &str) -> Option<&'static ParamInfo> {
    let key = normalize(name);
    if key.is_empty() {
        return None;
    }
    let found = family(&key).and_then(|r| {
        INFO_MAP[r]
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(&key))
    });
    if found.is_none() {
        tracing::debug!(name = %key, "no parameter with name");
    }
    found
}

/// Any entry whose name begins with `name`, preferring an exact match.
pub fn resolve_prefix(name: &str) -> Option<&'static ParamInfo> {
    let key = normalize(name);
    resolve_exact(&key).or_else(|| find_index(&key).map(|i| &INFO_MAP[i]))
}

/// Identifier for a parameter name, if the name is known.
pub fn param_id(name: &str) -> Option<ParamId> {
    resolve_exact(name).map(|e| e.id)
}

/// Caller-held position of a resumable substring scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCursor(usize);

impl SearchCursor {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn position(&self) -> usize {
        self.0
    }

    pub fn is_exhausted(&self) -> bool {
        self.0 >= INFO_MAP.len()
    }
}

/// Next entry at or after `cursor` whose name contains `substr`.
///
/// On a match the cursor moves one past it; on exhaustion it moves to the table end and
/// `None` is returned.
pub fn match_next(substr: &str, cursor: &mut SearchCursor) -> Option<&'static ParamInfo> {
    debug_assert!(cursor.0 <= INFO_MAP.len(), "search cursor past end of registry");
    let needle = substr.to_ascii_lowercase();
    let start = cursor.0.min(INFO_MAP.len());
    match INFO_MAP[start..].iter().position(|e| e.name.contains(&needle)) {
        Some(off) => {
            cursor.0 = start + off + 1;
            Some(&INFO_MAP[start + off])
        }
        None => {
            cursor.0 = INFO_MAP.len();
            None
        }
    }
}

/// Lazy, restartable sequence of entries containing a substring.
#[derive(Debug, Clone)]
pub struct Matches {
    needle: String,
    cursor: SearchCursor,
}

impl Iterator for Matches {
    type Item = &'static ParamInfo;

    fn next(&mut self) -> Option<Self::Item> {
        match_next(&self.needle, &mut self.cursor)
    }
}

pub fn matches(substr: &str) -> Matches {
    Matches {
        needle: substr.to_ascii_lowercase(),
        cursor: SearchCursor::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_transport::ids;

    #[test]
    fn normalize_strips_namespace() {
        assert_eq!(normalize("CL_DEVICE_ENDIAN_LITTLE"), "endian_little");
        assert_eq!(normalize("ENDIAN_LITTLE"), "endian_little");
        assert_eq!(normalize("cl_driver_version"), "driver_version");
        assert_eq!(normalize("endian_little"), "endian_little");
        assert_eq!(normalize(""), "");
        assert_eq!(param_id("CL_DEVICE_NAME"), Some(ids::DEVICE_NAME));
        assert_eq!(param_id("NAME"), Some(ids::DEVICE_NAME));
        assert_eq!(param_id("name"), Some(ids::DEVICE_NAME));
        assert_eq!(param_id("DEVICE_NAME"), None);
    }

    #[test]
    fn normalize_is_idempotent() {
        for x in ["CL_CL_DEVICE_NAME", "cl_device_cl_x", "Global_Mem", "cl_", "type"] {
            let once = normalize(x);
            assert_eq!(normalize(&once), once, "input {x}");
        }
    }

    #[test]
    fn every_entry_resolves_to_itself() {
        for e in INFO_MAP {
            assert_eq!(param_id(&normalize(e.name)), Some(e.id), "{}", e.name);
            let upper = format!("CL_DEVICE_{}", e.name.to_ascii_uppercase());
            assert_eq!(param_id(&upper), Some(e.id), "{upper}");
        }
    }

    #[test]
    fn exact_is_not_fooled_by_prefix_family() {
        assert_eq!(param_id("vendor"), Some(ids::DEVICE_VENDOR));
        assert_eq!(param_id("vendor_id"), Some(ids::DEVICE_VENDOR_ID));
        assert_eq!(param_id("name"), Some(ids::DEVICE_NAME));
        assert!(resolve_exact("global_mem").is_none());
        assert!(resolve_exact("").is_none());
        assert!(resolve_exact("no_such_param").is_none());
    }

    #[test]
    fn prefix_lookup_is_lenient() {
        let e = resolve_prefix("global_mem_cache").unwrap();
        assert!(e.name.starts_with("global_mem_cache"));
        assert_eq!(resolve_prefix("vendor").map(|e| e.id), Some(ids::DEVICE_VENDOR));
        assert!(resolve_prefix("zzz").is_none());
    }

    #[test]
    fn range_covers_whole_family() {
        let r = resolve_range("global_mem_cache").unwrap();
        let names: Vec<_> = INFO_MAP[r.clone()].iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            [
                "global_mem_cache_size",
                "global_mem_cache_type",
                "global_mem_cacheline_size"
            ]
        );
        for (i, e) in INFO_MAP.iter().enumerate() {
            let inside = r.contains(&i);
            assert_eq!(e.name.starts_with("global_mem_cache"), inside, "{}", e.name);
        }
    }

    #[test]
    fn range_property_holds_for_every_name_prefix() {
        for e in INFO_MAP {
            for n in 1..=e.name.len() {
                let p = &e.name[..n];
                let r = resolve_range(p).unwrap();
                for (i, other) in INFO_MAP.iter().enumerate() {
                    assert_eq!(other.name.starts_with(p), r.contains(&i), "prefix {p}");
                }
            }
        }
    }

    #[test]
    fn range_accepts_namespaced_prefix() {
        let slice = list_prefix("CL_DEVICE_IMAGE3D");
        assert_eq!(slice.len(), 3);
        assert!(list_prefix("nothing_here").is_empty());
        assert!(resolve_range("nothing_here").is_none());
        assert_eq!(list_prefix("").len(), INFO_MAP.len());
    }

    #[test]
    fn match_next_enumerates_each_match_once() {
        let mut cursor = SearchCursor::new();
        let mut seen = Vec::new();
        while let Some(e) = match_next("width", &mut cursor) {
            seen.push(e.name);
        }
        let expected: Vec<_> = INFO_MAP
            .iter()
            .filter(|e| e.name.contains("width"))
            .map(|e| e.name)
            .collect();
        assert_eq!(seen, expected);
        assert!(seen.len() > 10);
        assert!(cursor.is_exhausted());
        assert!(match_next("width", &mut cursor).is_none());
    }

    #[test]
    fn match_next_finds_inner_substrings() {
        let mut cursor = SearchCursor::new();
        let e = match_next("TIMER", &mut cursor).unwrap();
        assert_eq!(e.name, "profiling_timer_offset_amd");
        assert_eq!(cursor.position(), INFO_MAP.iter().position(|x| x.name == e.name).unwrap() + 1);
        let mut none = SearchCursor::new();
        assert!(match_next("qqq", &mut none).is_none());
        assert_eq!(none.position(), INFO_MAP.len());
    }

    #[test]
    fn matches_is_restartable() {
        let first: Vec<_> = matches("_nv").map(|e| e.name).collect();
        let second: Vec<_> = matches("_nv").map(|e| e.name).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }
}
