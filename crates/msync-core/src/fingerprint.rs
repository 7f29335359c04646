//! Canonical fingerprints of remote descriptors.
//!
//! A descriptor is hashed over its canonical serialization: compact JSON with
//! object keys sorted by byte value at every level. The remote service's own
//! key order therefore never affects the result, and neither does whether
//! `serde_json` was built with `preserve_order`.
//!
//! Scalars are written the way Go's `encoding/json` writes a decoded
//! `map[string]interface{}`, so digests computed by Go tooling compare equal:
//! every number is a float64 in shortest form (`1.0` is `1`, exponents only
//! below `1e-6` or from `1e21` up), and strings get HTML-safe escaping
//! (`<` is `\u003c`, U+2028 is `\u2028`).

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::errors::CoreError;

/// Opaque manifest document returned by the remote registry.
///
/// Its schema is never interpreted; only the canonical bytes are hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteDescriptor(Map<String, Value>);

impl RemoteDescriptor {
    /// Parse a descriptor from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDescriptor`] if the body is not a JSON
    /// object.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(CoreError::InvalidDescriptor(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(error) => Err(CoreError::InvalidDescriptor(error.to_string())),
        }
    }

    /// Canonical serialized form of this descriptor.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_object(&self.0, &mut out);
        out
    }
}

impl From<Map<String, Value>> for RemoteDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Base64 (standard alphabet, padded) SHA-256 of a canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint a remote descriptor.
    #[must_use]
    pub fn of(descriptor: &RemoteDescriptor) -> Self {
        Self::of_bytes(&descriptor.canonical_bytes())
    }

    /// Fingerprint already-canonical bytes.
    #[must_use]
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self(STANDARD.encode(digest))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string comparison against a locally stored digest.
    #[must_use]
    pub fn matches(&self, local_digest: &str) -> bool {
        self.0 == local_digest
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a local model with `local_digest` is behind `descriptor`.
#[must_use]
pub fn is_stale(descriptor: &RemoteDescriptor, local_digest: &str) -> bool {
    !Fingerprint::of(descriptor).matches(local_digest)
}

/// Serialize any JSON value canonically.
#[must_use]
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(flag) => out.extend_from_slice(if *flag { "true" } else { "false" }.as_bytes()),
        Value::Number(number) => match number.as_f64() {
            Some(float) => write_float(float, out),
            None => out.extend_from_slice(number.to_string().as_bytes()),
        },
        Value::String(text) => write_string(text, out),
        Value::Array(items) => {
            out.push(b'[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        Value::Object(map) => write_object(map, out),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut Vec<u8>) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    out.push(b'{');
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            out.push(b',');
        }
        write_string(key, out);
        out.push(b':');
        write_value(value, out);
    }
    out.push(b'}');
}

/// Shortest round-trip float64 text, plain decimal unless the magnitude is
/// below `1e-6` or at least `1e21`.
fn write_float(float: f64, out: &mut Vec<u8>) {
    let magnitude = float.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{float:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                out.extend_from_slice(format!("{mantissa}e+{exponent}").as_bytes());
            }
            _ => out.extend_from_slice(text.as_bytes()),
        }
    } else {
        out.extend_from_slice(float.to_string().as_bytes());
    }
}

fn write_string(text: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    for ch in text.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            '\u{8}' => out.extend_from_slice(b"\\b"),
            '\u{c}' => out.extend_from_slice(b"\\f"),
            '\u{0}'..='\u{1f}' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
                out.extend_from_slice(format!("\\u{:04x}", u32::from(ch)).as_bytes());
            }
            other => {
                let mut buf = [0; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
