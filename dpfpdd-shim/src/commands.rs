//! Dispatch of the four host commands onto the vendor library.
//!
//! One process invocation handles exactly one command. Every path produces a
//! complete response object; vendor failures travel in-band as
//! `status: "error"` with the raw return code, never as a nonzero exit.

use crate::response::{
    CaptureResponse, DeviceEntry, FaultResponse, QueryResponse, SdkCallResponse, Status,
    UnknownResponse,
};
use crate::sdk::ReaderSdk;
use crate::ticks;

pub const CMD_INIT: &str = "init";
pub const CMD_QUERY: &str = "query";
pub const CMD_CAPTURE: &str = "capture";
pub const CMD_CLEANUP: &str = "cleanup";

/// Runs one command against the SDK and always yields a response value.
/// Faults raised while building a response (the vendor calls themselves
/// signal via return codes, not errors) are caught here and reported
/// in-band, so the caller still prints output and exits normally.
pub fn execute(sdk: &dyn ReaderSdk, command: &str) -> serde_json::Value {
    match run(sdk, command) {
        Ok(value) => value,
        Err(fault) => {
            eprintln!("[dpfpdd-shim] command {:?} faulted: {}", command, fault);

            serde_json::to_value(FaultResponse {
                action: command.to_string(),
                status: Status::Error,
                message: format!("Internal error: {}", fault),
            })
            .unwrap_or_else(|_| {
                serde_json::json!({
                    "action": "unknown",
                    "status": "error",
                    "message": "Internal error",
                })
            })
        }
    }
}

fn run(sdk: &dyn ReaderSdk, command: &str) -> Result<serde_json::Value, failure::Error> {
    let value = match command {
        CMD_INIT => serde_json::to_value(init(sdk))?,
        CMD_QUERY => serde_json::to_value(query(sdk))?,
        CMD_CAPTURE => serde_json::to_value(capture())?,
        CMD_CLEANUP => serde_json::to_value(cleanup(sdk))?,
        unknown => serde_json::to_value(UnknownResponse {
            action: "unknown",
            status: Status::Error,
            message: format!("Unknown command: {}", unknown),
        })?,
    };

    Ok(value)
}

fn init(sdk: &dyn ReaderSdk) -> SdkCallResponse {
    match sdk.initialize() {
        Ok(()) => SdkCallResponse {
            action: CMD_INIT,
            status: Status::Success,
            message: "DigitalPersona Win32 SDK initialized successfully",
            result_code: 0,
        },
        Err(err) => SdkCallResponse {
            action: CMD_INIT,
            status: Status::Error,
            message: "Failed to initialize DigitalPersona Win32 SDK",
            result_code: err.code(),
        },
    }
}

fn query(sdk: &dyn ReaderSdk) -> QueryResponse {
    let count = match sdk.count_devices() {
        Ok(0) => return empty_query(0),
        // A failed count pass is reported like an empty bus, with the
        // vendor code preserved; absence of readers is not an error.
        Err(err) => return empty_query(err.code()),
        Ok(count) => count,
    };

    match sdk.enumerate_devices(count) {
        Ok(devices) => {
            let devices = devices
                .into_iter()
                .enumerate()
                .map(|(id, device)| DeviceEntry {
                    id: id as u32,
                    name: device.name,
                    vendor_name: device.vendor_name,
                    product_name: device.product_name.clone(),
                    serial_number: device.serial_number,
                    model: device.product_name,
                    // Enumeration does not probe liveness; the host treats
                    // presence in the list as connected.
                    connected: true,
                })
                .collect::<Vec<_>>();

            QueryResponse {
                action: CMD_QUERY,
                status: Status::Success,
                device_count: Some(devices.len() as u32),
                devices: Some(devices),
                message: "Device enumeration completed",
                result_code: 0,
            }
        }
        Err(err) => QueryResponse {
            action: CMD_QUERY,
            status: Status::Error,
            devices: None,
            device_count: None,
            message: "Failed to query device details",
            result_code: err.code(),
        },
    }
}

fn empty_query(result_code: i32) -> QueryResponse {
    QueryResponse {
        action: CMD_QUERY,
        status: Status::Success,
        devices: Some(Vec::new()),
        device_count: Some(0),
        message: "No DigitalPersona devices found",
        result_code,
    }
}

/// Placeholder capture: no reader is opened and no capture entry point is
/// invoked. The response discloses the simulation in its `note` field; the
/// host keys off `quality == "simulated"`.
fn capture() -> CaptureResponse {
    let ticks = ticks::tick_count_ms();

    CaptureResponse {
        action: CMD_CAPTURE,
        status: Status::Success,
        quality: "simulated",
        device_name: "DigitalPersona Reader (Win32)",
        timestamp: ticks,
        message: "Fingerprint capture simulated - native win32 library communication successful",
        simulated_data: format!("DP_WIN32_FINGERPRINT_DATA_{}", ticks),
        note: "This is a simulated response from native win32 libraries",
    }
}

fn cleanup(sdk: &dyn ReaderSdk) -> SdkCallResponse {
    match sdk.shutdown() {
        Ok(()) => SdkCallResponse {
            action: CMD_CLEANUP,
            status: Status::Success,
            message: "DigitalPersona Win32 SDK cleaned up successfully",
            result_code: 0,
        },
        Err(err) => SdkCallResponse {
            action: CMD_CLEANUP,
            status: Status::Error,
            message: "Failed to cleanup DigitalPersona Win32 SDK",
            result_code: err.code(),
        },
    }
}
