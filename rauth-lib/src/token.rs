//! Token assembly and the encode/decode entry points
//!
//! A token is `seed (4 bytes) ‖ UTF-8 payload`, run through the XOR
//! keystream and rendered as standard base64 (RFC 4648 alphabet, with
//! padding). The remote verifier runs the identical algorithm; any
//! deviation here produces a token it silently rejects, so the byte
//! layout and field order are load-bearing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::{BufMut, BytesMut};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher::apply_keystream;
use crate::constants::{
    API_VERSION, AUTH_HEADER, BEARER_HEADER, FIELD_COUNT, FIELD_DELIMITER, PLATFORM_TAG,
    SEED_SIZE,
};
use crate::device::DeviceProfile;
use crate::error::RauthError;
use crate::seed::Seed;

/// Codec input with the wire contract's default policy already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInput {
    pub device_identifier: String,
    pub serial_number: String,
    /// Seconds since epoch as a 32-bit signed integer (the verifier's
    /// host width); out-of-range values must be truncated before here
    pub timestamp: i32,
    pub device_model: String,
    pub os: String,
    pub is_development: bool,
}

impl TokenInput {
    /// Build an input from an injected device profile
    ///
    /// Missing metadata resolves to the fixed fallback literals; a missing
    /// timestamp resolves to the current wall clock.
    pub fn from_profile(profile: &DeviceProfile, timestamp: Option<i32>) -> Self {
        Self {
            device_identifier: profile.device_identifier(),
            serial_number: profile.serial().to_string(),
            timestamp: timestamp.unwrap_or_else(current_timestamp),
            device_model: profile.model().to_string(),
            os: profile.os().to_string(),
            is_development: cfg!(debug_assertions),
        }
    }

    /// Parse a textual timestamp (base-10 seconds since epoch)
    ///
    /// Unparsable input falls back to the current wall clock; this never
    /// reports an error to the caller.
    pub fn parse_timestamp(text: &str) -> i32 {
        text.trim().parse().unwrap_or_else(|_| current_timestamp())
    }

    /// The pipe-delimited field string carried in the token payload
    ///
    /// Field order is fixed: identifier, serial, timestamp, model, os,
    /// platform tag, API version, development flag.
    pub fn payload(&self) -> String {
        let timestamp = self.timestamp.to_string();
        let api_version = API_VERSION.to_string();
        let is_development = self.is_development.to_string();
        [
            self.device_identifier.as_str(),
            self.serial_number.as_str(),
            timestamp.as_str(),
            self.device_model.as_str(),
            self.os.as_str(),
            PLATFORM_TAG,
            api_version.as_str(),
            is_development.as_str(),
        ]
        .join(FIELD_DELIMITER)
    }
}

/// Current wall clock, truncated to the verifier's 32-bit width
fn current_timestamp() -> i32 {
    Utc::now().timestamp() as i32
}

/// Encode a token from the given input
///
/// Deterministic: identical inputs (including the timestamp) always yield
/// an identical token. This function cannot fail.
pub fn encode_token(input: &TokenInput) -> String {
    let seed = Seed::from_timestamp(input.timestamp);
    let payload = input.payload();

    let mut buffer = BytesMut::with_capacity(SEED_SIZE + payload.len());
    buffer.put_slice(seed.as_bytes());
    buffer.put_slice(payload.as_bytes());

    apply_keystream(&mut buffer);
    debug!(
        payload_len = payload.len(),
        seed = %seed,
        "encoded R-Auth token"
    );

    STANDARD.encode(&buffer)
}

/// A token decoded back into its seed and field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub seed: Seed,
    pub device_identifier: String,
    pub serial_number: String,
    pub timestamp: i32,
    pub device_model: String,
    pub os: String,
    /// Platform tag as carried on the wire (expected `"Web"`)
    pub platform_tag: String,
    /// API version as carried on the wire (expected `"3"`)
    pub api_version: String,
    pub is_development: bool,
}

impl DecodedToken {
    /// Check that the seed prefix matches a re-derivation from the
    /// decoded timestamp, as the remote verifier does
    pub fn verify_seed(&self) -> bool {
        self.seed == Seed::from_timestamp(self.timestamp)
    }
}

/// Decode a token produced by [`encode_token`] (or by the verifier)
///
/// Runs the identical keystream pass: the cipher is its own inverse over
/// the payload region because the seed prefix is never rewritten.
pub fn decode_token(token: &str) -> Result<DecodedToken, RauthError> {
    let mut buffer = STANDARD.decode(token)?;
    if buffer.len() <= SEED_SIZE {
        return Err(RauthError::TokenTooShort {
            expected: SEED_SIZE + 1,
            actual: buffer.len(),
        });
    }

    apply_keystream(&mut buffer);

    let seed = Seed::from_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]);
    let payload = std::str::from_utf8(&buffer[SEED_SIZE..])?;

    let fields: Vec<&str> = payload.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RauthError::FieldCountMismatch {
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let timestamp = fields[2]
        .parse::<i32>()
        .map_err(|_| RauthError::InvalidTimestamp(fields[2].to_string()))?;

    debug!(payload_len = payload.len(), "decoded R-Auth token");

    Ok(DecodedToken {
        seed,
        device_identifier: fields[0].to_string(),
        serial_number: fields[1].to_string(),
        timestamp,
        device_model: fields[3].to_string(),
        os: fields[4].to_string(),
        platform_tag: fields[5].to_string(),
        api_version: fields[6].to_string(),
        is_development: fields[7] == "true",
    })
}

/// Header pairs a client attaches when opening an authorised connection:
/// the token under `R-Auth` plus the separately obtained bearer credential
pub fn auth_headers(token: &str, bearer: &str) -> [(&'static str, String); 2] {
    [
        (AUTH_HEADER, token.to_string()),
        (BEARER_HEADER, format!("Bearer {bearer}")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_input() -> TokenInput {
        TokenInput {
            device_identifier: "web-fingerprint-test".to_string(),
            serial_number: "sn-1".to_string(),
            timestamp: 0,
            device_model: "model-1".to_string(),
            os: "linux".to_string(),
            is_development: false,
        }
    }

    #[test]
    fn test_payload_field_order() {
        assert_eq!(
            fixture_input().payload(),
            "web-fingerprint-test|sn-1|0|model-1|linux|Web|3|false"
        );
    }

    #[test]
    fn test_payload_delimiter_matches_decode_side() {
        // Encode and decode must split on the same constant
        let payload = fixture_input().payload();
        assert_eq!(payload.split(FIELD_DELIMITER).count(), FIELD_COUNT);
        assert_eq!(payload.matches(FIELD_DELIMITER).count(), FIELD_COUNT - 1);
    }

    #[test]
    fn test_development_flag_renders_as_bool_literal() {
        let mut input = fixture_input();
        input.is_development = true;
        assert!(input.payload().ends_with("|Web|3|true"));
    }

    #[test]
    fn test_parse_timestamp_decimal() {
        assert_eq!(TokenInput::parse_timestamp("1234567890"), 1_234_567_890);
        assert_eq!(TokenInput::parse_timestamp(" -5 "), -5);
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers("tok", "cred");
        assert_eq!(headers[0], ("R-Auth", "tok".to_string()));
        assert_eq!(headers[1], ("Authorization", "Bearer cred".to_string()));
    }
}
