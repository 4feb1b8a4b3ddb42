//! vgate-vault: the structured side of the vault client
//!
//! Consumes the decryption pipeline from `vgate-crypto` and turns fetched
//! vault payloads into typed records:
//!
//! ```text
//! VaultFetcher (external) → EncryptedVault → Vault::open
//!   → decrypt_blob → serde_json tree → Navigate → VaultRecord
//! ```
//!
//! Network login and retrieval live behind the [`VaultFetcher`] trait;
//! this crate only owns the failure taxonomy that boundary must honor.

pub mod auth;
pub mod fetch;
pub mod navigate;
pub mod record;
pub mod vault;

pub use auth::AuthInfo;
pub use fetch::{Credentials, EncryptedVault, VaultFetcher};
pub use navigate::Navigate;
pub use record::VaultRecord;
pub use vault::Vault;
