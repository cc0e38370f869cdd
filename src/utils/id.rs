use chrono::Utc;

/// Generate an opaque entity id: a prefixed creation timestamp.
/// Callers may also supply their own ids (the store treats them as opaque).
pub fn generate(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos:x}")
}
