//! Tests for decode failures and 32-bit wraparound regressions

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rauth_lib::cipher::apply_keystream;
use rauth_lib::{RauthError, Seed, TokenInput, decode_token};

/// Build a token around an arbitrary payload byte string, bypassing the
/// field formatting, to exercise the decode error paths
fn forge_token(payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(4 + payload.len());
    buffer.extend_from_slice(Seed::from_timestamp(0).as_bytes());
    buffer.extend_from_slice(payload);
    apply_keystream(&mut buffer);
    STANDARD.encode(&buffer)
}

#[test]
fn test_decode_rejects_invalid_base64() {
    let result = decode_token("not base64!!");
    assert!(matches!(result, Err(RauthError::Base64(_))));
}

#[test]
fn test_decode_rejects_short_buffers() {
    // Seed-only and shorter: nothing to decode
    for len in 0..=4 {
        let token = STANDARD.encode(vec![0u8; len]);
        match decode_token(&token) {
            Err(RauthError::TokenTooShort { expected, actual }) => {
                assert_eq!(expected, 5);
                assert_eq!(actual, len);
            }
            other => panic!("expected TokenTooShort for len {}, got {:?}", len, other),
        }
    }
}

#[test]
fn test_decode_rejects_non_utf8_payload() {
    let token = forge_token(&[0xFF, 0xFE, 0x80, 0x80, 0x80]);
    assert!(matches!(decode_token(&token), Err(RauthError::Utf8(_))));
}

#[test]
fn test_decode_rejects_wrong_field_count() {
    let token = forge_token(b"only|three|fields");
    match decode_token(&token) {
        Err(RauthError::FieldCountMismatch { expected, actual }) => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 3);
        }
        other => panic!("expected FieldCountMismatch, got {:?}", other),
    }
}

#[test]
fn test_decode_rejects_non_numeric_timestamp() {
    let token = forge_token(b"id|sn|soon|model|os|Web|3|false");
    assert!(matches!(
        decode_token(&token),
        Err(RauthError::InvalidTimestamp(t)) if t == "soon"
    ));
}

#[test]
fn test_seed_wraparound_fixtures() {
    // Large and negative timestamps overflow the 32-bit intermediate
    // products; these values pin the two's-complement behaviour
    assert_eq!(Seed::from_timestamp(-1).as_bytes(), &[159, 136, 231, 240]);
    assert_eq!(Seed::from_timestamp(i32::MAX).as_bytes(), &[31, 136, 231, 112]);
    assert_eq!(Seed::from_timestamp(i32::MIN).as_bytes(), &[128, 0, 19, 147]);
    assert_eq!(
        Seed::from_timestamp(1_700_000_000).as_bytes(),
        &[28, 6, 88, 66]
    );
}

#[test]
fn test_negative_timestamp_round_trips() {
    let input = TokenInput {
        device_identifier: "web-fingerprint-test".to_string(),
        serial_number: "sn-1".to_string(),
        timestamp: -1,
        device_model: "model-1".to_string(),
        os: "linux".to_string(),
        is_development: true,
    };
    let decoded = decode_token(&rauth_lib::encode_token(&input)).unwrap();
    assert_eq!(decoded.timestamp, -1);
    assert!(decoded.is_development);
    assert!(decoded.verify_seed());
}

#[test]
fn test_unparsable_timestamp_falls_back_to_wall_clock() {
    // No error is raised; the current time is substituted instead. The
    // exact value is time-dependent, so only bound it loosely.
    let ts = TokenInput::parse_timestamp("half past nine");
    assert!(ts > 1_700_000_000);
}

#[test]
fn test_unicode_metadata_survives_the_codec() {
    let input = TokenInput {
        device_identifier: "web-fingerprint-tëst".to_string(),
        serial_number: "序列号".to_string(),
        timestamp: 42,
        device_model: "modèle".to_string(),
        os: "линукс".to_string(),
        is_development: false,
    };
    let decoded = decode_token(&rauth_lib::encode_token(&input)).unwrap();
    assert_eq!(decoded.serial_number, "序列号");
    assert_eq!(decoded.os, "линукс");
    assert!(decoded.verify_seed());
}
