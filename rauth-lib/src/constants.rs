// Protocol constants for the R-Auth token codec

/// Size of the seed prefix at the front of every token (4 bytes)
pub const SEED_SIZE: usize = 4;

/// Size of the fixed XOR cipher key (64 bytes)
pub const CIPHER_KEY_SIZE: usize = 64;

/// Delimiter between payload fields
pub const FIELD_DELIMITER: &str = "|";

/// Number of fields in a well-formed payload
pub const FIELD_COUNT: usize = 8;

/// Platform tag carried in every token
pub const PLATFORM_TAG: &str = "Web";

/// API version carried in every token
pub const API_VERSION: u32 = 3;

/// Prefix applied to client fingerprints to form the device identifier
pub const FINGERPRINT_PREFIX: &str = "web-fingerprint-";

/// Device identifier fallback when no fingerprint is available
pub const FALLBACK_DEVICE_ID: &str = "web-fingerprint-unknown";

/// Serial number fallback
pub const FALLBACK_SERIAL: &str = "unknown-serial";

/// Device model fallback
pub const FALLBACK_MODEL: &str = "web";

/// OS string fallback
pub const FALLBACK_OS: &str = "web";

/// Header name the token travels under
pub const AUTH_HEADER: &str = "R-Auth";

/// Header name for the separately obtained bearer credential
pub const BEARER_HEADER: &str = "Authorization";
