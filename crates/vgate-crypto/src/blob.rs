//! Encrypted blob framing
//!
//! Blob format (after base64 decode):
//! ```text
//! [8 bytes: CTR counter seed][N bytes: AES-256-CTR ciphertext]
//! ```
//!
//! The seed occupies the leading (most-significant) half of the 16-byte
//! counter block; the trailing half starts at zero. The cipher key is the
//! stream key derived from the caller's master key, never the master key
//! itself.

use vgate_core::{ParseError, ParseResult};

use crate::kdf::{derive_stream_key, MasterKey};
use crate::{codec, ctr, BLOCK_SIZE, CTR_SEED_SIZE};

/// Decrypt a base64-encoded vault blob into its plaintext bytes.
///
/// Fails with `InvalidFormat` on malformed base64 or a blob shorter than
/// the 8-byte counter seed. Knows nothing about the plaintext's structure;
/// the payload is typically UTF-8 JSON but that is the caller's concern.
pub fn decrypt_blob(encoded: &str, master: &MasterKey) -> ParseResult<Vec<u8>> {
    let raw = codec::decode_base64(encoded)?;

    if raw.len() < CTR_SEED_SIZE {
        return Err(ParseError::invalid_format(format!(
            "encrypted blob too short: {} bytes (minimum {CTR_SEED_SIZE})",
            raw.len()
        )));
    }

    let (seed, ciphertext) = raw.split_at(CTR_SEED_SIZE);
    let mut counter = [0u8; BLOCK_SIZE];
    counter[..CTR_SEED_SIZE].copy_from_slice(seed);

    let stream_key = derive_stream_key(master);
    Ok(ctr::decrypt_aes256_ctr(ciphertext, stream_key.as_bytes(), &counter))
}
