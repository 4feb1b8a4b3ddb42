//! AES-256-CTR stream cipher
//!
//! The block cipher only ever runs in the encrypt direction: each 16-byte
//! counter value is encrypted to produce a keystream block which is XORed
//! against the input. The same operation therefore both encrypts and
//! decrypts.
//!
//! The counter layout is the service's own (see [`crate::blob`]), so the
//! framing is done here by hand instead of through one of the `ctr` crate's
//! preset counter flavors.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};

use crate::counter;
use crate::{BLOCK_SIZE, KEY_SIZE};

/// Decrypt (or encrypt — CTR is its own inverse) `input` with AES-256-CTR.
///
/// The working counter starts as a copy of `initial_counter` and is
/// advanced by one after every block consumed, including a short final
/// block. Only as many keystream bytes as the final chunk needs are used.
/// Empty input produces empty output without touching the block cipher.
pub fn decrypt_aes256_ctr(
    input: &[u8],
    key: &[u8; KEY_SIZE],
    initial_counter: &[u8; BLOCK_SIZE],
) -> Vec<u8> {
    let cipher = Aes256::new(key.into());
    let mut working = *initial_counter;
    let mut output = Vec::with_capacity(input.len());

    for chunk in input.chunks(BLOCK_SIZE) {
        let mut keystream = Block::from(working);
        cipher.encrypt_block(&mut keystream);
        output.extend(chunk.iter().zip(keystream.iter()).map(|(b, k)| b ^ k));
        counter::increment(&mut working);
    }

    output
}
