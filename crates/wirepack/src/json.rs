//! # JSON Mirror
//!
//! Helpers shared by every record's JSON form. Output keys are the declared
//! snake_case field names; input accepts those and their camelCase spelling.
//!
//! Two coercion modes exist. `Lenient` backs `from_json` and accepts the
//! loose shapes other clients produce (numeric strings, `"true"`, numbers
//! where a string was expected). `Strict` backs `from_partial` and rejects a
//! present value of the wrong JSON type.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;

use crate::error::{Error, Result};

pub use serde_json::Value;

/// A JSON object as produced by `serde_json`.
pub type Map = serde_json::Map<String, Value>;

/// How permissive JSON input parsing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lenient,
    Strict,
}

/// Strips the raw identifier prefix from a field name.
pub fn key_name(field: &str) -> &str {
    field.trim_start_matches("r#")
}

/// `send_enabled` -> `sendEnabled`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Finds a field by its snake_case or camelCase key. `null` counts as absent.
pub fn lookup<'v>(obj: &'v Map, field: &str) -> Option<&'v Value> {
    let key = key_name(field);
    obj.get(key)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(&camel_case(key)).filter(|v| !v.is_null()))
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(expected: &str, found: &Value) -> Error {
    Error::Json(format!("expected {}, found {}", expected, type_name(found)))
}

/// Reads a JSON object, as every record body must be.
pub fn object(v: &Value) -> Result<&Map> {
    v.as_object().ok_or_else(|| unexpected("object", v))
}

/// Reads a JSON array backing a repeated field.
pub fn array(v: &Value) -> Result<&[Value]> {
    v.as_array().map(Vec::as_slice).ok_or_else(|| unexpected("array", v))
}

/// Reads a string. Lenient mode also stringifies numbers and booleans.
pub fn string(v: &Value, mode: Mode) -> Result<String> {
    match (v, mode) {
        (Value::String(s), _) => Ok(s.clone()),
        (Value::Number(n), Mode::Lenient) => Ok(n.to_string()),
        (Value::Bool(b), Mode::Lenient) => Ok(b.to_string()),
        (other, _) => Err(unexpected("string", other)),
    }
}

/// Reads a boolean. Lenient mode also accepts `"true"` and `"false"`.
pub fn boolean(v: &Value, mode: Mode) -> Result<bool> {
    match (v, mode) {
        (Value::Bool(b), _) => Ok(*b),
        (Value::String(s), Mode::Lenient) if s == "true" => Ok(true),
        (Value::String(s), Mode::Lenient) if s == "false" => Ok(false),
        (other, _) => Err(unexpected("boolean", other)),
    }
}

fn integral_float(f: f64) -> Option<i128> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e38 {
        Some(f as i128)
    } else {
        None
    }
}

fn parse_integer(s: &str) -> Option<i128> {
    let s = s.trim();
    s.parse::<i128>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral_float))
}

/// Reads an integer of any width. Range checks are left to the caller.
///
/// Lenient mode also accepts numeric strings, which is how 64-bit values are
/// usually quoted.
pub fn integer(v: &Value, mode: Mode) -> Result<i128> {
    match (v, mode) {
        (Value::Number(n), _) => {
            if let Some(i) = n.as_i64() {
                Ok(i as i128)
            } else if let Some(u) = n.as_u64() {
                Ok(u as i128)
            } else {
                n.as_f64()
                    .and_then(integral_float)
                    .ok_or_else(|| Error::Json(format!("{} is not an integer", n)))
            }
        }
        (Value::String(s), Mode::Lenient) => {
            parse_integer(s).ok_or_else(|| Error::Json(format!("{:?} is not an integer", s)))
        }
        (other, _) => Err(unexpected("integer", other)),
    }
}

/// Encodes bytes as padded standard base64.
pub fn base64_encode(bytes: &[u8]) -> Value {
    Value::String(STANDARD.encode(bytes))
}

/// Decodes a base64 string, with or without padding.
pub fn base64_decode(v: &Value) -> Result<Vec<u8>> {
    let Value::String(s) = v else {
        return Err(unexpected("base64 string", v));
    };
    STANDARD
        .decode(s)
        .or_else(|_| STANDARD_NO_PAD.decode(s))
        .map_err(|e| Error::Json(format!("invalid base64: {}", e)))
}
