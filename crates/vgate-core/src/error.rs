//! Error taxonomy for the vault client
//!
//! Two disjoint hierarchies, mirroring the two phases of the pipeline:
//!
//! - [`FetchError`] — the login/retrieval boundary failed (network, bad
//!   response, rejected credentials, or unclassified).
//! - [`ParseError`] — fetched data could not be decoded, decrypted, or
//!   navigated.
//!
//! Every failure carries exactly one reason code from a closed enum, a
//! human-readable message, and optionally the lower-level error that
//! triggered it. The cause is preserved verbatim through `source()` and is
//! never re-classified. Callers dispatch on the reason code, not on the
//! message text.

use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a fetch (login or vault retrieval) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchReason {
    /// Transport-level failure: timeout, refused connection, DNS.
    NetworkError,
    /// The service answered with something this client cannot interpret.
    InvalidResponse,
    /// The service explicitly rejected the credentials.
    InvalidCredentials,
    /// Anything that does not fit the categories above.
    UnknownError,
}

/// Why parsing fetched data failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseReason {
    /// Structural or type mismatch anywhere in decoding, decrypting, or
    /// tree navigation. Deliberately coarse: the actionable response
    /// (reject and report) is the same for all of them.
    InvalidFormat,
}

/// A failure at the fetch boundary.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    reason: FetchReason,
    message: String,
    #[source]
    source: Option<Cause>,
}

impl FetchError {
    pub fn new(reason: FetchReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        reason: FetchReason,
        message: impl Into<String>,
        source: impl Into<Cause>,
    ) -> Self {
        Self {
            reason,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FetchReason::NetworkError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(FetchReason::InvalidResponse, message)
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(FetchReason::InvalidCredentials, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FetchReason::UnknownError, message)
    }

    pub fn reason(&self) -> FetchReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure while decoding, decrypting, or navigating fetched data.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    reason: ParseReason,
    message: String,
    #[source]
    source: Option<Cause>,
}

impl ParseError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self {
            reason: ParseReason::InvalidFormat,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_format_with(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self {
            reason: ParseReason::InvalidFormat,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn reason(&self) -> ParseReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Umbrella error for callers driving the full fetch-then-open pipeline.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fetch_error_carries_reason_and_message() {
        let err = FetchError::invalid_credentials("passphrase rejected");
        assert_eq!(err.reason(), FetchReason::InvalidCredentials);
        assert_eq!(err.message(), "passphrase rejected");
        assert_eq!(err.to_string(), "passphrase rejected");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_fetch_error_preserves_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connect timed out");
        let err = FetchError::with_source(FetchReason::NetworkError, "vault fetch failed", io);

        assert_eq!(err.reason(), FetchReason::NetworkError);
        let cause = err.source().expect("cause must be preserved");
        assert_eq!(cause.to_string(), "connect timed out");
    }

    #[test]
    fn test_parse_error_reason_is_invalid_format() {
        let err = ParseError::invalid_format("truncated blob");
        assert_eq!(err.reason(), ParseReason::InvalidFormat);
        assert_eq!(err.to_string(), "truncated blob");
    }

    #[test]
    fn test_vault_error_wraps_both_taxonomies() {
        let fetch: VaultError = FetchError::network("no route to host").into();
        let parse: VaultError = ParseError::invalid_format("bad base64").into();

        assert!(matches!(
            fetch,
            VaultError::Fetch(ref e) if e.reason() == FetchReason::NetworkError
        ));
        assert!(matches!(
            parse,
            VaultError::Parse(ref e) if e.reason() == ParseReason::InvalidFormat
        ));
    }
}
