//! Account KDF parameters from the service's login-details document
//!
//! The login response carries the salt and iteration count the account's
//! master key must be derived with, under `operation/details`. The salt is
//! used exactly as transmitted (ASCII text bytes); the service never sends
//! it in a decoded form.

use std::num::NonZeroU32;

use serde_json::Value;
use vgate_core::{ParseError, ParseResult};

use crate::navigate::Navigate;

/// KDF parameters for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    pub salt: Vec<u8>,
    pub iterations: NonZeroU32,
    /// Base64 blob that decrypts to the account passphrase, when present.
    pub passphrase_check: Option<String>,
}

impl AuthInfo {
    /// Extract auth parameters from a parsed login-details document.
    pub fn from_json(root: &Value) -> ParseResult<Self> {
        let salt = root.string_at("operation/details/SALT")?;
        let iterations = root.int_at("operation/details/ITERATION")?;

        let iterations = u32::try_from(iterations)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                ParseError::invalid_format(format!(
                    "iteration count out of range: {iterations}"
                ))
            })?;

        let passphrase_check = match root.at("operation/details/PASSPHRASE") {
            Ok(value) => Some(
                value
                    .as_str()
                    .ok_or_else(|| {
                        ParseError::invalid_format("PASSPHRASE field is not a string")
                    })?
                    .to_owned(),
            ),
            Err(_) => None,
        };

        Ok(Self {
            salt: salt.as_bytes().to_vec(),
            iterations,
            passphrase_check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vgate_core::ParseReason;

    #[test]
    fn test_parses_salt_and_iterations() {
        let doc = json!({
            "operation": {
                "details": {
                    "SALT": "f78e6ffce8e57501a02c9be303db2c68",
                    "ITERATION": 1000,
                }
            }
        });

        let info = AuthInfo::from_json(&doc).unwrap();
        assert_eq!(info.salt, b"f78e6ffce8e57501a02c9be303db2c68");
        assert_eq!(info.iterations.get(), 1000);
        assert_eq!(info.passphrase_check, None);
    }

    #[test]
    fn test_parses_optional_passphrase_check() {
        let doc = json!({
            "operation": {
                "details": {
                    "SALT": "abc",
                    "ITERATION": 500,
                    "PASSPHRASE": "c29tZWJsb2I=",
                }
            }
        });

        let info = AuthInfo::from_json(&doc).unwrap();
        assert_eq!(info.passphrase_check.as_deref(), Some("c29tZWJsb2I="));
    }

    #[test]
    fn test_missing_salt_fails() {
        let doc = json!({"operation": {"details": {"ITERATION": 1000}}});
        let err = AuthInfo::from_json(&doc).unwrap_err();
        assert_eq!(err.reason(), ParseReason::InvalidFormat);
    }

    #[test]
    fn test_non_integer_iterations_fail() {
        let doc = json!({
            "operation": {"details": {"SALT": "s", "ITERATION": "1000"}}
        });
        assert!(AuthInfo::from_json(&doc).is_err());
    }

    #[test]
    fn test_zero_or_negative_iterations_fail() {
        for bad in [0, -1] {
            let doc = json!({
                "operation": {"details": {"SALT": "s", "ITERATION": bad}}
            });
            let err = AuthInfo::from_json(&doc).unwrap_err();
            assert!(err.message().contains("out of range"));
        }
    }
}
