//! Slash-path navigation over a JSON tree
//!
//! A path like `operation/details/secrets` descends key by key through
//! object nodes. Every step is strict: a missing key, a non-object in the
//! middle, or a leaf of the wrong scalar kind is an `InvalidFormat`
//! failure naming the offending segment. Nothing is coerced and nothing is
//! mutated — resolution is a pure read.

use serde_json::Value;
use vgate_core::{ParseError, ParseResult};

/// Path-based access into a `serde_json::Value` tree.
pub trait Navigate {
    /// Resolve a `/`-delimited path of object keys to the node it names.
    fn at(&self, path: &str) -> ParseResult<&Value>;

    /// Resolve a path and require the leaf to be a JSON string.
    fn string_at(&self, path: &str) -> ParseResult<&str>;

    /// Resolve a path and require the leaf to be an integer-valued number.
    /// Floats, booleans, strings, arrays, and objects all fail.
    fn int_at(&self, path: &str) -> ParseResult<i64>;
}

impl Navigate for Value {
    fn at(&self, path: &str) -> ParseResult<&Value> {
        let mut current = self;
        for segment in path.split('/') {
            let object = current.as_object().ok_or_else(|| {
                ParseError::invalid_format(format!(
                    "expected an object at segment '{segment}' of path '{path}', found {}",
                    kind_of(current)
                ))
            })?;
            current = object.get(segment).ok_or_else(|| {
                ParseError::invalid_format(format!(
                    "missing key '{segment}' in path '{path}'"
                ))
            })?;
        }
        Ok(current)
    }

    fn string_at(&self, path: &str) -> ParseResult<&str> {
        match self.at(path)? {
            Value::String(s) => Ok(s),
            other => Err(ParseError::invalid_format(format!(
                "expected a string at '{path}', found {}",
                kind_of(other)
            ))),
        }
    }

    fn int_at(&self, path: &str) -> ParseResult<i64> {
        match self.at(path)? {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                ParseError::invalid_format(format!(
                    "expected an integer at '{path}', found non-integer number {n}"
                ))
            }),
            other => Err(ParseError::invalid_format(format!(
                "expected an integer at '{path}', found {}",
                kind_of(other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
