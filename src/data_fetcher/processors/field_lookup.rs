//! Tolerant field access over raw upstream JSON.
//!
//! Every accessor returns `None` for a missing or mistyped value so a partially
//! shaped payload still normalizes, with `null` in the affected fields.

use serde_json::Value;

/// Whether a value counts as "present" for fallback purposes.
///
/// `null`, `false`, zero, empty strings and empty containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Evaluates candidate field names in order; the first truthy value wins.
///
/// When no candidate is truthy the last candidate's value is returned as-is
/// (possibly a zero or `None`), so a genuine `0` under the fallback name is
/// kept rather than turned into `null`.
pub fn first_truthy<'a, F>(candidates: &[&str], lookup: F) -> Option<&'a Value>
where
    F: Fn(&str) -> Option<&'a Value>,
{
    let mut last = None;
    for name in candidates {
        let value = lookup(name);
        if value.is_some_and(is_truthy) {
            return value;
        }
        last = value;
    }
    last
}

/// [`first_truthy`] over JSON pointers into one object.
pub fn first_truthy_at<'a>(value: &'a Value, pointers: &[&str]) -> Option<&'a Value> {
    first_truthy(pointers, |pointer| value.pointer(pointer))
}

/// Integer view of a number or numeric string. Fractions are rounded.
pub fn json_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

/// Float view of a number or numeric string
pub fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// String view of a string, number or boolean
pub fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn i64_at(value: &Value, pointer: &str) -> Option<i64> {
    value.pointer(pointer).and_then(json_i64)
}

pub fn f64_at(value: &Value, pointer: &str) -> Option<f64> {
    value.pointer(pointer).and_then(json_f64)
}

pub fn string_at(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(json_string)
}
