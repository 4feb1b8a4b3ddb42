//! Vault-open orchestration
//!
//! Glues the pipeline together: derive the master key from the account's
//! KDF parameters, decrypt the blob, hand the plaintext to serde_json, and
//! parse records out of the tree. The only logging in the workspace
//! happens here; the crypto core stays silent.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};
use vgate_core::{FetchError, ParseError, ParseResult, VaultError};
use vgate_crypto::{decrypt_blob, derive_master_key, MasterKey};

use crate::fetch::{Credentials, VaultFetcher};
use crate::record::{parse_records, VaultRecord};

/// A decrypted vault.
#[derive(Debug)]
pub struct Vault {
    records: Vec<VaultRecord>,
}

impl Vault {
    /// Decrypt and parse an already-fetched vault.
    pub fn open(
        encrypted: &crate::fetch::EncryptedVault,
        passphrase: &SecretString,
    ) -> ParseResult<Self> {
        let master = derive_master_key(passphrase, &encrypted.salt, encrypted.iterations);
        Self::open_with_key(&encrypted.blob, &master)
    }

    /// Decrypt and parse a vault blob with a pre-derived master key.
    pub fn open_with_key(blob: &str, master: &MasterKey) -> ParseResult<Self> {
        let payload = decrypt_blob(blob, master)?;

        let text = String::from_utf8(payload)
            .map_err(|e| ParseError::invalid_format_with("vault payload is not UTF-8", e))?;
        let root: Value = serde_json::from_str(&text)
            .map_err(|e| ParseError::invalid_format_with("vault payload is not JSON", e))?;

        let records = parse_records(&root)?;
        debug!(records = records.len(), "vault opened");
        Ok(Self { records })
    }

    /// Drive the fetch boundary, verify the passphrase when the account
    /// provides a check blob, then open the vault.
    pub fn fetch_and_open(
        fetcher: &impl VaultFetcher,
        credentials: &Credentials,
    ) -> Result<Self, VaultError> {
        debug!(username = %credentials.username, "fetching vault");
        let encrypted = fetcher.fetch(credentials)?;

        let master = derive_master_key(
            &credentials.passphrase,
            &encrypted.salt,
            encrypted.iterations,
        );

        if let Some(check) = &encrypted.passphrase_check {
            verify_passphrase(check, &master, &credentials.passphrase)?;
        }

        Ok(Self::open_with_key(&encrypted.blob, &master)?)
    }

    pub fn records(&self) -> &[VaultRecord] {
        &self.records
    }

    /// Look a record up by its `secretname`.
    pub fn find(&self, name: &str) -> Option<&VaultRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

/// The check blob decrypts to the passphrase itself; anything else means
/// the user typed the wrong passphrase.
fn verify_passphrase(
    check: &str,
    master: &MasterKey,
    passphrase: &SecretString,
) -> Result<(), VaultError> {
    let decrypted = decrypt_blob(check, master).map_err(VaultError::Parse)?;

    if decrypted != passphrase.expose_secret().as_bytes() {
        warn!("passphrase check blob did not match");
        return Err(FetchError::invalid_credentials(
            "the service rejected the passphrase for this account",
        )
        .into());
    }
    Ok(())
}
