use crate::constants::SEED_SIZE;

/// 4-byte token seed derived from a timestamp
///
/// The seed is a pure function of the timestamp and nothing else. The
/// derivation was ported from a 32-bit host: every arithmetic step is an
/// `i32` operation with two's-complement wraparound, and timestamps
/// outside the 32-bit range must already have been truncated by the
/// caller. Using a wider integer type here silently diverges from the
/// remote verifier for large or negative timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Seed {
    bytes: [u8; SEED_SIZE],
}

impl Seed {
    /// Derive the seed from a timestamp (seconds since epoch)
    pub fn from_timestamp(timestamp: i32) -> Self {
        let mut r = timestamp;

        // Shift-XOR mix. Left shifts discard overflow bits, matching the
        // source host's 32-bit behaviour.
        r = (r << 21) ^ (r << 19) ^ r;

        // Scramble, wrapping at 32 bits
        r = r.wrapping_mul(251).wrapping_add(19);

        // Big-endian byte extraction
        let mut b = [(r >> 24) as u8, (r >> 16) as u8, (r >> 8) as u8, r as u8];

        // Chained XOR permutation; tmp holds the original b0
        let tmp = b[0];
        b[0] ^= b[1];
        b[1] ^= b[2];
        b[2] ^= b[3];
        b[3] ^= tmp;

        Self { bytes: b }
    }

    /// Create a Seed from raw bytes (e.g. the prefix of a decoded token)
    pub fn from_bytes(bytes: [u8; SEED_SIZE]) -> Self {
        Self { bytes }
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.bytes))
    }
}
