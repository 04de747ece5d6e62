use serde::{Deserialize, Serialize};

/// Device-authorization session as returned by `POST /oauth/device/code`.
///
/// Held until the user approves in a browser and the device code is
/// exchanged for the first token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCodeSession {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub verification_uri_complete: String,
    pub expires_in: u64,
    pub interval: u64,
}
