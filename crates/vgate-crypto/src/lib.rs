//! vgate-crypto: decryption pipeline for the vault client
//!
//! Pipeline: passphrase → PBKDF2 stretch → master key → stream key →
//! AES-256-CTR → plaintext vault document (JSON, consumed by vgate-vault).
//!
//! Key hierarchy:
//! ```text
//! Master Key (32 bytes, PBKDF2-HMAC-SHA256 from passphrase + account salt)
//!   └── Stream Key (32 bytes, fixed one-way expansion of the master key)
//!         └── AES-256-CTR (counter seed carried in the blob's first 8 bytes)
//! ```
//!
//! Everything here is synchronous and free of I/O; the only mutation is
//! [`counter::increment`] on a caller-supplied buffer. Key derivation is
//! CPU-bound by design — run it off any latency-sensitive context.

pub mod blob;
pub mod codec;
pub mod counter;
pub mod ctr;
pub mod kdf;

pub use blob::decrypt_blob;
pub use codec::{decode_base64, decode_hex, encode_base64};
pub use ctr::decrypt_aes256_ctr;
pub use kdf::{derive_master_key, derive_stream_key, MasterKey, StreamKey};

/// Size of a master or stream key in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// AES block size in bytes; also the CTR counter width.
pub const BLOCK_SIZE: usize = 16;

/// Number of leading blob bytes that seed the CTR counter.
pub const CTR_SEED_SIZE: usize = 8;
