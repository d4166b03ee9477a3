//! Payload encoding for definitions.
//!
//! The plaintext inside a container is a JSON document:
//!
//! ```json
//! {"format":"device-auth-define","version":1,"devices":[
//!   {"name":"PC-1","serial_number":"SN12345","device_instance_path":"VID_1234/PID_5678/SN12345","comment":null}
//! ]}
//! ```
//!
//! Field order is fixed by the struct definitions, so encoding the same
//! definition always yields the same bytes. Decoding rejects unknown
//! fields, a foreign format tag and unsupported versions, which catches a
//! payload that happened to decrypt with valid padding under the wrong key.

use crate::define::{Device, DeviceAuthDefine};
use crate::error::{DefineError, DefineResult};
use serde::{Deserialize, Serialize};

/// Format tag written into every payload.
pub const FORMAT_TAG: &str = "device-auth-define";

/// Current payload version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct PayloadRef<'a> {
    format: &'a str,
    version: u32,
    devices: &'a [Device],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Payload {
    format: String,
    version: u32,
    devices: Vec<Device>,
}

/// Encodes a definition into its canonical payload bytes.
pub fn encode(define: &DeviceAuthDefine) -> DefineResult<Vec<u8>> {
    let payload = PayloadRef {
        format: FORMAT_TAG,
        version: FORMAT_VERSION,
        devices: define.devices(),
    };
    Ok(serde_json::to_vec(&payload)?)
}

/// Decodes payload bytes into a definition.
pub fn decode(bytes: &[u8]) -> DefineResult<DeviceAuthDefine> {
    let payload: Payload =
        serde_json::from_slice(bytes).map_err(|e| DefineError::Format(e.to_string()))?;

    if payload.format != FORMAT_TAG {
        return Err(DefineError::Format(format!(
            "unexpected format tag {:?}",
            payload.format
        )));
    }
    if payload.version != FORMAT_VERSION {
        return Err(DefineError::Format(format!(
            "unsupported version {} (expected {})",
            payload.version, FORMAT_VERSION
        )));
    }

    Ok(payload.devices.into())
}
