use serde_json::{Map, Value};

/// A user's preferences bag after normalization.
///
/// The identity provider stores preferences as a JSON object, but older
/// accounts carry them as a JSON-encoded string, and some carry garbage.
#[derive(Debug, Clone, PartialEq)]
pub enum Preferences {
    /// Missing or falsy (`null`, `false`, `0`, `""`).
    Absent,
    Object(Map<String, Value>),
    /// Valid JSON that is not an object. Has no fields.
    Other(Value),
    /// A string that failed to parse as JSON. Has no fields.
    Unparsed(String),
}

impl Preferences {
    pub fn normalize(raw: Option<&Value>) -> Self {
        match raw {
            None => Preferences::Absent,
            Some(value) if !is_truthy(value) => Preferences::Absent,
            Some(Value::String(encoded)) => match parse_encoded(encoded) {
                Ok(Value::Object(map)) => Preferences::Object(map),
                Ok(other) => Preferences::Other(other),
                Err(_) => Preferences::Unparsed(encoded.clone()),
            },
            Some(Value::Object(map)) => Preferences::Object(map.clone()),
            Some(other) => Preferences::Other(other.clone()),
        }
    }

    /// Look up a field. Only objects have fields.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Preferences::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// A field that is a truthy scalar, rendered as a string.
    pub fn scalar(&self, key: &str) -> Option<String> {
        self.field(key).and_then(scalar_string)
    }
}

/// Parse a string-encoded preferences bag.
pub fn parse_encoded(encoded: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(encoded)
}

/// Loose truthiness as the provider's web clients apply it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a truthy scalar as a string; `None` for falsy values and containers.
pub fn scalar_string(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
