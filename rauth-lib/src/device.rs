use serde::{Deserialize, Serialize};

use crate::constants::{
    FALLBACK_DEVICE_ID, FALLBACK_MODEL, FALLBACK_OS, FALLBACK_SERIAL, FINGERPRINT_PREFIX,
};

/// Device metadata supplied by the host environment
///
/// Every field is optional. The client fingerprint comes from an external
/// session/cookie source and is injected here rather than read from a
/// side channel, which keeps the codec a pure function of its inputs.
/// Missing fields resolve to fixed fallback literals that the remote
/// verifier also knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Client fingerprint, if the session layer supplied one
    pub fingerprint: Option<String>,
    /// Device serial number
    pub serial_number: Option<String>,
    /// Device model name (e.g. browser product string)
    pub device_model: Option<String>,
    /// Operating system string
    pub os: Option<String>,
}

impl DeviceProfile {
    /// Resolve the device identifier: prefixed fingerprint when present,
    /// fixed fallback otherwise
    pub fn device_identifier(&self) -> String {
        match &self.fingerprint {
            Some(fp) => format!("{FINGERPRINT_PREFIX}{fp}"),
            None => FALLBACK_DEVICE_ID.to_string(),
        }
    }

    /// Serial number with fallback applied
    pub fn serial(&self) -> &str {
        self.serial_number.as_deref().unwrap_or(FALLBACK_SERIAL)
    }

    /// Device model with fallback applied
    pub fn model(&self) -> &str {
        self.device_model.as_deref().unwrap_or(FALLBACK_MODEL)
    }

    /// OS string with fallback applied
    pub fn os(&self) -> &str {
        self.os.as_deref().unwrap_or(FALLBACK_OS)
    }
}
