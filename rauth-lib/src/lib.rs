//! R-Auth device/session token codec
//!
//! Derives a 4-byte seed from a timestamp, assembles a pipe-delimited
//! device metadata payload behind it, obfuscates the payload with a fixed
//! 64-byte XOR key, and renders the result as standard base64. The output
//! must match the remote verifier bit for bit.

pub mod cipher;
pub mod constants;
pub mod device;
pub mod error;
pub mod seed;
pub mod token;

// Re-export the codec entry points for easy access
pub use device::DeviceProfile;
pub use error::RauthError;
pub use seed::Seed;
pub use token::{DecodedToken, TokenInput, auth_headers, decode_token, encode_token};
