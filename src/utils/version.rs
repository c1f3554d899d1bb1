//! Host editor version comparison
//!
//! The editor reports either a dotted version (`"6.8.1"`) or, when the exact
//! version cannot be read, one of two sentinels describing which link-control
//! generation is available.

/// Sentinel: modern link control detected, version unknown
pub const MODERN_SENTINEL: &str = "6.8+";

/// Sentinel: legacy editor, version unknown
pub const LEGACY_SENTINEL: &str = "6.7-";

/// Whether `version` is at least `target`.
///
/// Missing components count as zero, so `"6.8"` equals `"6.8.0"`.
/// Non-numeric components also count as zero.
pub fn is_version_at_least(version: Option<&str>, target: &str) -> bool {
    let version = match version {
        None | Some("") | Some(LEGACY_SENTINEL) => return false,
        Some(MODERN_SENTINEL) => return true,
        Some(v) => v,
    };

    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|part| part.trim().parse().unwrap_or(0))
            .collect()
    };
    let ours = parse(version);
    let theirs = parse(target);

    for i in 0..ours.len().max(theirs.len()) {
        let a = ours.get(i).copied().unwrap_or(0);
        let b = theirs.get(i).copied().unwrap_or(0);
        if a != b {
            return a > b;
        }
    }
    true
}
