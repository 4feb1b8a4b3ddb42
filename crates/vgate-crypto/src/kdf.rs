//! Key derivation: PBKDF2 passphrase stretch → master key → stream key
//!
//! The service keys AES with the lowercase hex rendering of a 16-byte
//! PBKDF2-HMAC-SHA256 output, so a master key is 32 ASCII-hex bytes rather
//! than raw digest bytes. The stream key used for CTR decryption is a
//! fixed expansion of the master key: AES-256-ECB-encrypt the key's first
//! block under the key itself, then double the result. Both transforms are
//! deterministic; the iteration count is the only cost knob and is honored
//! exactly.

use std::num::NonZeroU32;

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use pbkdf2::pbkdf2_hmac;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{BLOCK_SIZE, KEY_SIZE};

/// Width of the raw PBKDF2 output before hex expansion.
const STRETCH_SIZE: usize = 16;

/// A 256-bit master key derived once per passphrase + salt + iterations.
///
/// Zeroized on drop so the secret does not linger in memory.
#[derive(Clone)]
pub struct MasterKey {
    bytes: [u8; KEY_SIZE],
}

impl MasterKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// The 256-bit key that actually drives CTR decryption. Zeroized on drop.
#[derive(Clone)]
pub struct StreamKey {
    bytes: [u8; KEY_SIZE],
}

impl StreamKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for StreamKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for StreamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the master key from a passphrase and the account's salt and
/// iteration count.
///
/// PBKDF2-HMAC-SHA256 stretched to 16 bytes, then expanded to 32 ASCII-hex
/// bytes to match the service's key shape. Deterministic for identical
/// inputs.
pub fn derive_master_key(
    passphrase: &SecretString,
    salt: &[u8],
    iterations: NonZeroU32,
) -> MasterKey {
    let mut stretched = [0u8; STRETCH_SIZE];
    pbkdf2_hmac::<Sha256>(
        passphrase.expose_secret().as_bytes(),
        salt,
        iterations.get(),
        &mut stretched,
    );

    let mut rendered = hex::encode(stretched);
    stretched.zeroize();

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(rendered.as_bytes());
    rendered.zeroize();

    MasterKey::from_bytes(key)
}

/// Derive the CTR stream key from a master key.
///
/// AES-256-ECB-encrypt `master[0..16]` under the full master key and
/// concatenate the resulting block with itself. Pure function, no salt, no
/// randomness.
pub fn derive_stream_key(master: &MasterKey) -> StreamKey {
    let cipher = Aes256::new(master.as_bytes().into());

    let mut block = Block::clone_from_slice(&master.as_bytes()[..BLOCK_SIZE]);
    cipher.encrypt_block(&mut block);

    let mut key = [0u8; KEY_SIZE];
    key[..BLOCK_SIZE].copy_from_slice(&block);
    key[BLOCK_SIZE..].copy_from_slice(&block);

    StreamKey::from_bytes(key)
}
