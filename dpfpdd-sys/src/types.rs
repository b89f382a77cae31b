//! Fixed-layout records exchanged with the vendor library.
//!
//! These mirror the flattened `dpfpdd.h` layouts byte for byte; the library
//! writes into caller-allocated buffers of exactly these shapes.

use std::os::raw::{c_char, c_int, c_uint, c_ushort};

/// Length of the reader name field in [`DPFPDD_DEV_INFO`].
pub const MAX_DEVICE_NAME_LENGTH: usize = 1024;
/// Length of the descriptor string fields in [`DPFPDD_DEV_INFO`].
pub const MAX_STR_LENGTH: usize = 128;

/// Hardware modality values reported in [`DPFPDD_DEV_INFO::modality`].
pub const DPFPDD_HW_MODALITY_UNKNOWN: c_uint = 0;
pub const DPFPDD_HW_MODALITY_SWIPE: c_uint = 1;
pub const DPFPDD_HW_MODALITY_AREA: c_uint = 2;

/// Hardware technology values reported in [`DPFPDD_DEV_INFO::technology`].
pub const DPFPDD_HW_TECHNOLOGY_UNKNOWN: c_uint = 0;
pub const DPFPDD_HW_TECHNOLOGY_OPTICAL: c_uint = 1;
pub const DPFPDD_HW_TECHNOLOGY_CAPACITIVE: c_uint = 2;
pub const DPFPDD_HW_TECHNOLOGY_THERMAL: c_uint = 3;
pub const DPFPDD_HW_TECHNOLOGY_PRESSURE: c_uint = 4;

/// One enumerated reader, as filled in by `dpfpdd_query_devices`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct DPFPDD_DEV_INFO {
    /// Must be set to `size_of::<DPFPDD_DEV_INFO>()` before the call.
    pub size: c_uint,
    pub name: [c_char; MAX_DEVICE_NAME_LENGTH],
    pub vendor_name: [c_char; MAX_STR_LENGTH],
    pub product_name: [c_char; MAX_STR_LENGTH],
    pub serial_num: [c_char; MAX_STR_LENGTH],
    pub vendor_id: c_ushort,
    pub product_id: c_ushort,
    pub modality: c_uint,
    pub technology: c_uint,
}

impl DPFPDD_DEV_INFO {
    pub fn zeroed() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Reader status, as filled in by `dpfpdd_get_device_status`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct DPFPDD_DEV_STATUS {
    pub size: c_uint,
    pub status: c_uint,
    pub finger_detected: c_int,
}

impl DPFPDD_DEV_STATUS {
    pub fn zeroed() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Capture request parameters for `dpfpdd_capture`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct DPFPDD_CAPTURE_PARAM {
    pub size: c_uint,
    pub image_fmt: c_uint,
    pub image_proc: c_uint,
    pub image_res: c_uint,
}

/// Capture outcome reported by `dpfpdd_capture`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct DPFPDD_CAPTURE_RESULT {
    pub size: c_uint,
    pub success: c_int,
    pub quality: c_uint,
    pub score: c_uint,
    pub width: c_uint,
    pub height: c_uint,
    pub res: c_uint,
    pub bpp: c_uint,
}

impl DPFPDD_CAPTURE_RESULT {
    pub fn zeroed() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    // The library writes into caller-allocated buffers, so any drift in
    // these layouts corrupts the stack.

    #[test]
    fn dev_info_layout_matches_header() {
        assert_eq!(size_of::<DPFPDD_DEV_INFO>(), 4 + 1024 + 128 * 3 + 2 + 2 + 4 + 4);
    }

    #[test]
    fn dev_status_layout_matches_header() {
        assert_eq!(size_of::<DPFPDD_DEV_STATUS>(), 12);
    }

    #[test]
    fn capture_param_layout_matches_header() {
        assert_eq!(size_of::<DPFPDD_CAPTURE_PARAM>(), 16);
    }

    #[test]
    fn capture_result_layout_matches_header() {
        assert_eq!(size_of::<DPFPDD_CAPTURE_RESULT>(), 32);
    }
}
