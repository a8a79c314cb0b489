//! Helpers for loosely-typed request fields and model output.
//!
//! Clients send strings, numbers, or string arrays for the same field, and the
//! model's JSON drifts between synonym keys. These helpers keep that looseness
//! in one place.

use serde_json::Value;

/// Placeholder rendered into prompts for absent or null optional fields.
pub const NOT_SPECIFIED: &str = "Not specified";

/// True when a required field carries a value.
/// Absent values and falsy ones (null, `false`, `0`, `""`) count as missing.
pub fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Truthiness of a model-supplied value, used for `value || fallback` defaults.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a request value for substitution into a prompt.
///
/// Strings are inserted verbatim, arrays are joined with `,`, objects become
/// compact JSON, and absent/null values render as [`NOT_SPECIFIED`].
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_SPECIFIED.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => join_values(items, ","),
        Some(other) => other.to_string(),
    }
}

/// Joins array elements, rendering strings without quotes.
pub fn join_values(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Returns the first non-null value among `keys`, checked in priority order.
pub fn first_present<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
}

/// Substitutes `{name}` placeholders in a single pass.
///
/// Braces that do not name a known placeholder are copied as-is, and
/// substituted values are never re-scanned, so user text containing
/// `{something}` cannot expand into another field.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substitution = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
