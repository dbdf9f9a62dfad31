//! XOR keystream pass for token obfuscation
//!
//! The key is fixed and embedded in every client, so this provides
//! obfuscation and compatibility with the legacy verifier, NOT
//! confidentiality. Do not rely on it to protect sensitive data.

use crate::constants::{CIPHER_KEY_SIZE, SEED_SIZE};

/// Fixed 64-byte XOR key shared with the remote verifier
///
/// Must match the verifier byte-for-byte; never varies at runtime.
pub const CIPHER_KEY: [u8; CIPHER_KEY_SIZE] = [
    0x7C, 0x2A, 0x4E, 0x19, 0xD3, 0x5B, 0x81, 0xF6, 0x0D, 0x97, 0xC4, 0x3E, 0x62, 0xAF, 0x15,
    0xE8, 0x39, 0x8C, 0x51, 0xB7, 0x04, 0xDA, 0x6F, 0x23, 0xF1, 0x48, 0x9E, 0x0B, 0xC7, 0x72,
    0xAD, 0x36, 0x5F, 0xE2, 0x18, 0x94, 0x4B, 0xD0, 0x27, 0xBC, 0x63, 0x0E, 0xF9, 0x85, 0x31,
    0xA6, 0x7A, 0xCE, 0x12, 0x58, 0xEB, 0x47, 0x9D, 0x20, 0xB3, 0x6C, 0xF4, 0x09, 0x8E, 0x55,
    0xD1, 0x3A, 0xA2, 0x77,
];

/// Apply the XOR keystream to a token buffer in-place
///
/// Every byte from offset 4 onward is XORed against the key (cycling over
/// 64 bytes) and against the seed prefix (cycling over 4 bytes). Indices
/// 0-3 are never written, so the `i % 4` term always reads the original
/// seed bytes and a second pass over the same buffer restores the
/// plaintext payload.
pub fn apply_keystream(buffer: &mut [u8]) {
    for i in SEED_SIZE..buffer.len() {
        buffer[i] ^= CIPHER_KEY[i % CIPHER_KEY_SIZE] ^ buffer[i % SEED_SIZE];
    }
}
