//! Canonical asset names.

use chrono::Utc;

/// Prefix for names generated when the caller did not supply one.
pub const GENERATED_PREFIX: &str = "qreeket-media";

/// `{name}-{owner}` for explicit names, otherwise a timestamped generated name.
pub fn asset_name(name: Option<&str>, owner: &str) -> String {
    match name.filter(|name| !name.is_empty()) {
        Some(name) => format!("{}-{}", name, owner),
        None => generated_name(),
    }
}

/// `qreeket-media-{unix nanoseconds}`.
pub fn generated_name() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}", GENERATED_PREFIX, nanos)
}
