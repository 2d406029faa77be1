//! Options Serializer
//!
//! Renders resolution options as an object literal with unquoted keys.

use inject_it_domain::{OptionValue, OptionsRecord};

/// Serialize an options record; empty records serialize to the empty string
///
/// ```
/// use inject_it_application::serialize_options;
/// use inject_it_domain::{OptionsRecord, ResolutionOption};
///
/// let record: OptionsRecord = [ResolutionOption::SelfOnly, ResolutionOption::Optional]
///     .into_iter()
///     .collect();
/// assert_eq!(serialize_options(&record), "{\nself: true,\noptional: true\n}");
/// assert_eq!(serialize_options(&OptionsRecord::new()), "");
/// ```
pub fn serialize_options(record: &OptionsRecord) -> String {
    if record.is_empty() {
        return String::new();
    }
    render_object_literal(record.entries())
}

/// Render key/value pairs as `{\nkey: value,\nkey: value\n}`
///
/// Keys are written bare, values in their literal form. Entry order is kept.
pub fn render_object_literal<K, I>(entries: I) -> String
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, OptionValue)>,
{
    let pairs: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("{}: {value}", key.as_ref()))
        .collect();
    format!("{{\n{}\n}}", pairs.join(",\n"))
}
