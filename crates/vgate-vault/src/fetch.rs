//! The fetch boundary
//!
//! Login and vault retrieval are an external collaborator's job (HTTP,
//! sessions, retries). This module pins down the shape of what that
//! collaborator must produce: either an [`EncryptedVault`] with the
//! account's KDF parameters, or a [`FetchError`] with one of the four
//! reason codes.

use std::num::NonZeroU32;

use secrecy::SecretString;
use vgate_core::FetchResult;

/// What a user supplies to reach their vault.
pub struct Credentials {
    pub username: String,
    pub passphrase: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

/// A fetched-but-still-encrypted vault plus the parameters needed to
/// derive its key.
#[derive(Debug, Clone)]
pub struct EncryptedVault {
    /// Base64-encoded encrypted vault document.
    pub blob: String,
    /// Per-account KDF salt, exactly as the service supplied it.
    pub salt: Vec<u8>,
    /// PBKDF2 iteration count for this account.
    pub iterations: NonZeroU32,
    /// Optional base64 blob that decrypts to the passphrase itself; used
    /// to detect a wrong passphrase before parsing the vault.
    pub passphrase_check: Option<String>,
}

impl EncryptedVault {
    /// Pair a retrieved blob with the account's auth parameters.
    pub fn new(auth: crate::auth::AuthInfo, blob: String) -> Self {
        Self {
            blob,
            salt: auth.salt,
            iterations: auth.iterations,
            passphrase_check: auth.passphrase_check,
        }
    }
}

/// The external collaborator that performs login and blob retrieval.
///
/// Implementations classify their own failures into the fetch taxonomy;
/// nothing downstream re-interprets them.
pub trait VaultFetcher {
    fn fetch(&self, credentials: &Credentials) -> FetchResult<EncryptedVault>;
}
