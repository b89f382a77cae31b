//! Response objects printed to stdout.
//!
//! The host process parses this output as a contract, so field names and
//! per-branch presence are fixed. Serialization goes through serde rather
//! than string building, which also covers JSON escaping of quotes,
//! backslashes and control characters.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Shape shared by `init` and `cleanup`: one vendor call, one raw code.
#[derive(Debug, Serialize)]
pub struct SdkCallResponse {
    pub action: &'static str,
    pub status: Status,
    pub message: &'static str,
    pub result_code: i32,
}

#[derive(Debug, Serialize)]
pub struct DeviceEntry {
    pub id: u32,
    pub name: String,
    pub vendor_name: String,
    pub product_name: String,
    pub serial_number: String,
    /// Duplicate of `product_name`, kept because the host reads both.
    pub model: String,
    pub connected: bool,
}

/// The `query` response. The error branch omits `devices` and `deviceCount`
/// entirely instead of sending empty values.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub action: &'static str,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceEntry>>,
    #[serde(rename = "deviceCount", skip_serializing_if = "Option::is_none")]
    pub device_count: Option<u32>,
    pub message: &'static str,
    pub result_code: i32,
}

/// The placeholder `capture` response; no hardware is touched.
#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub action: &'static str,
    pub status: Status,
    pub quality: &'static str,
    #[serde(rename = "deviceName")]
    pub device_name: &'static str,
    pub timestamp: u64,
    pub message: &'static str,
    #[serde(rename = "simulatedData")]
    pub simulated_data: String,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UnknownResponse {
    pub action: &'static str,
    pub status: Status,
    pub message: String,
}

/// In-band report for faults raised while handling a command.
#[derive(Debug, Serialize)]
pub struct FaultResponse {
    pub action: String,
    pub status: Status,
    pub message: String,
}
