use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

///
/// How two JSON numbers are compared by [first_difference].
///
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum NumberEquality {
    /// Integers and floats never match, even if they denote the same value (``1`` vs. ``1.0``)
    #[default]
    Strict,
    /// Numbers match if they denote the same value, regardless of their representation
    Numeric
}

impl NumberEquality {
    pub fn matches(&self, expected: &Number, actual: &Number) -> bool {
        match self {
            NumberEquality::Strict => expected == actual,
            NumberEquality::Numeric => numeric_eq(expected, actual)
        }
    }
}

fn as_integer(number: &Number) -> Option<i128> {
    number.as_i64().map(i128::from).or_else(|| number.as_u64().map(i128::from))
}

fn numeric_eq(expected: &Number, actual: &Number) -> bool {
    match (as_integer(expected), as_integer(actual)) {
        (Some(e), Some(a)) => e == a,
        // At least one side is a float, finite by construction of serde_json
        _ => match (expected.as_f64(), actual.as_f64()) {
            (Some(e), Some(a)) => e == a,
            _ => false
        }
    }
}

///
/// The first location where two JSON documents diverge.
/// ``path`` uses the usual ``$.field[index]`` notation, the root is ``$``.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JsonDifference {
    pub path: String,
    pub reason: String
}

impl fmt::Display for JsonDifference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.reason, self.path)
    }
}

///
/// Structural comparison of two JSON values: object key order is irrelevant,
/// everything else (key sets, array order, value types and values) must match.
/// Returns ``None`` if both values are equal.
///
pub fn first_difference(expected: &Value, actual: &Value, numbers: NumberEquality) -> Option<JsonDifference> {
    let mut path = String::from("$");
    diff(expected, actual, numbers, &mut path)
}

pub fn structurally_equal(expected: &Value, actual: &Value, numbers: NumberEquality) -> bool {
    first_difference(expected, actual, numbers).is_none()
}

fn diff(expected: &Value, actual: &Value, numbers: NumberEquality, path: &mut String) -> Option<JsonDifference> {
    match (expected, actual) {
        (Value::Null, Value::Null) => None,
        (Value::Bool(e), Value::Bool(a)) if e == a => None,
        (Value::String(e), Value::String(a)) if e == a => None,
        (Value::Number(e), Value::Number(a)) if numbers.matches(e, a) => None,
        (Value::Array(e), Value::Array(a)) => {
            if e.len() != a.len() {
                return Some(difference(path, format!("expected {} array elements but got {}", e.len(), a.len())));
            }
            for (index, (e, a)) in e.iter().zip(a.iter()).enumerate() {
                let len = path.len();
                path.push_str(&format!("[{}]", index));
                let result = diff(e, a, numbers, path);
                path.truncate(len);
                if result.is_some() {
                    return result;
                }
            }
            None
        },
        (Value::Object(e), Value::Object(a)) => {
            if let Some(key) = e.keys().find(|key| !a.contains_key(*key)) {
                return Some(difference(path, format!("missing key {:?}", key)));
            }
            if let Some(key) = a.keys().find(|key| !e.contains_key(*key)) {
                return Some(difference(path, format!("unexpected key {:?}", key)));
            }
            for (key, e) in e {
                // Key presence was checked above
                let a = &a[key];
                let len = path.len();
                path.push('.');
                path.push_str(key);
                let result = diff(e, a, numbers, path);
                path.truncate(len);
                if result.is_some() {
                    return result;
                }
            }
            None
        },
        _ => Some(difference(path, format!("expected {} but got {}", expected, actual)))
    }
}

fn difference(path: &str, reason: String) -> JsonDifference {
    JsonDifference { path: String::from(path), reason }
}
