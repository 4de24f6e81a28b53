use crate::schema::ParameterKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed parameter value as configured by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Text(String),
    Number(#[serde(with = "lenient_number")] f64),
    Boolean(bool),
    Enum {
        selected: String,
        options: Vec<String>,
    },
}

impl ParamValue {
    /// Converts the value into the plain JSON shape sent to the code generator.
    ///
    /// Integral numbers are written without a fraction, non-finite numbers
    /// become `null` and enums collapse to their selected option.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParamValue::Text(s) => serde_json::Value::String(s.clone()),
            ParamValue::Number(n) => number_to_json(*n),
            ParamValue::Boolean(b) => serde_json::Value::Bool(*b),
            ParamValue::Enum { selected, .. } => serde_json::Value::String(selected.clone()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Enum { selected, .. } => Some(selected),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Number(n) if n.is_nan() => write!(f, "NaN"),
            ParamValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ParamValue::Boolean(b) => write!(f, "{}", b),
            ParamValue::Enum { selected, .. } => write!(f, "{}", selected),
        }
    }
}

/// Largest integer magnitude an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_to_json(n: f64) -> serde_json::Value {
    if !n.is_finite() {
        serde_json::Value::Null
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Coerces raw user input into a typed value according to the declared kind.
///
/// Coercion never fails. A malformed number degrades to NaN and is kept as-is.
pub fn coerce(kind: ParameterKind, raw: &str) -> ParamValue {
    match kind {
        ParameterKind::Boolean => ParamValue::Boolean(raw == "true"),
        ParameterKind::Number => ParamValue::Number(parse_number(raw)),
        ParameterKind::Text => ParamValue::Text(raw.to_string()),
        ParameterKind::Select(options) => ParamValue::Enum {
            selected: raw.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    }
}

/// Lenient numeric parse matching how browsers convert form input to numbers.
///
/// Surrounding whitespace is ignored, an empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix and `Infinity` is accepted. Anything else that does
/// not parse yields NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if body == "Infinity" {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // Rust also accepts "inf" and "nan" spellings, which form input does not.
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Serde adapter for numbers entered through forms.
///
/// Binary formats store the raw `f64`. Human-readable formats cannot hold
/// non-finite numbers, so NaN is written as `null` and infinities as the
/// strings `"Infinity"` and `"-Infinity"`.
pub(crate) mod lenient_number {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Readable {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return value.serialize(serializer);
        }
        if value.is_nan() {
            serializer.serialize_none()
        } else if value.is_infinite() {
            let text = if *value > 0.0 { "Infinity" } else { "-Infinity" };
            serializer.serialize_str(text)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        if !deserializer.is_human_readable() {
            return f64::deserialize(deserializer);
        }
        match Option::<Readable>::deserialize(deserializer)? {
            None => Ok(f64::NAN),
            Some(Readable::Number(n)) => Ok(n),
            Some(Readable::Text(text)) => match text.as_str() {
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid number '{}'", other))),
            },
        }
    }
}
