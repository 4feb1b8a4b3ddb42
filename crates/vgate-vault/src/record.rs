//! Vault records
//!
//! The decrypted vault document is JSON of the form:
//!
//! ```json
//! {
//!   "operation": {
//!     "result": { "status": "success" },
//!     "details": {
//!       "secrets": [
//!         {
//!           "secretid": "1",
//!           "secretname": "mail",
//!           "secreturl": "https://mail.example.com",
//!           "secretdata": { "username": "me", "password": "hunter2" },
//!           "notes": "personal"
//!         }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Required fields fail loudly when absent or of the wrong kind; only
//! `secreturl` and `notes` may be omitted.

use serde_json::Value;
use vgate_core::{ParseError, ParseResult};

use crate::navigate::Navigate;

/// One decrypted credential entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub note: String,
}

/// Parse every record out of a decrypted vault document.
pub fn parse_records(root: &Value) -> ParseResult<Vec<VaultRecord>> {
    let status = root.string_at("operation/result/status")?;
    if status != "success" {
        return Err(ParseError::invalid_format(format!(
            "vault response status is '{status}', expected 'success'"
        )));
    }

    let secrets = root.at("operation/details/secrets")?;
    let secrets = secrets.as_array().ok_or_else(|| {
        ParseError::invalid_format("'operation/details/secrets' is not an array")
    })?;

    secrets.iter().map(parse_record).collect()
}

fn parse_record(secret: &Value) -> ParseResult<VaultRecord> {
    Ok(VaultRecord {
        id: secret.string_at("secretid")?.to_owned(),
        name: secret.string_at("secretname")?.to_owned(),
        username: secret.string_at("secretdata/username")?.to_owned(),
        password: secret.string_at("secretdata/password")?.to_owned(),
        url: optional_string(secret, "secreturl")?,
        note: optional_string(secret, "notes")?,
    })
}

/// A field that may be absent, but must be a string when present.
fn optional_string(secret: &Value, key: &str) -> ParseResult<String> {
    match secret.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ParseError::invalid_format(format!(
            "'{key}' is present but not a string"
        ))),
    }
}
