#![warn(clippy::all)]
#![allow(non_camel_case_types)]

//! Raw declarations for the DigitalPersona `dpfpdd` reader library.
//!
//! Layouts and entry points are transcribed from the vendor's `dpfpdd.h`;
//! everything uses the library's stdcall convention (`extern "system"`).
//! The vendor only ships the library for Windows. On every other target this
//! crate exposes the same symbols as stubs that report
//! [`DPFPDD_E_NOT_IMPLEMENTED`], so callers keep their error-code handling
//! instead of growing platform branches.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_void};

mod types;

pub use crate::types::*;

/// Every entry point returns this on success.
pub const DPFPDD_SUCCESS: c_int = 0;

/// DigitalPersona facility word; vendor error codes are `DPERROR(n)`.
pub const DP_FACILITY: c_int = 0x05BA;

const fn dperror(err: c_int) -> c_int {
    (DP_FACILITY << 16) | err
}

/// Unspecified failure inside the library.
pub const DPFPDD_E_FAILURE: c_int = dperror(0x0a);
/// No data is available.
pub const DPFPDD_E_NO_DATA: c_int = dperror(0x0b);
/// The caller's buffer is too small; `dev_cnt` holds the required count.
pub const DPFPDD_E_MORE_DATA: c_int = dperror(0x0c);
/// One of the parameters was rejected.
pub const DPFPDD_E_INVALID_PARAMETER: c_int = dperror(0x14);
/// The device handle is not valid.
pub const DPFPDD_E_INVALID_DEVICE: c_int = dperror(0x15);
/// The requested entry point is not implemented. Also reported by the
/// non-Windows stubs below.
pub const DPFPDD_E_NOT_IMPLEMENTED: c_int = dperror(0x16);
/// The reader is busy with another operation.
pub const DPFPDD_E_DEVICE_BUSY: c_int = dperror(0x1e);
/// The reader failed.
pub const DPFPDD_E_DEVICE_FAILURE: c_int = dperror(0x1f);

/// Opaque reader handle produced by `dpfpdd_open_ext`.
pub type DPFPDD_DEV = *mut c_void;

#[cfg(windows)]
#[link(name = "dpfpdd")]
extern "system" {
    pub fn dpfpdd_init() -> c_int;

    pub fn dpfpdd_exit() -> c_int;

    /// Two-pass enumeration: with `dev_infos` null the call stores the
    /// attached reader count in `dev_cnt`; with a buffer it fills `dev_cnt`
    /// records.
    pub fn dpfpdd_query_devices(dev_cnt: *mut c_uint, dev_infos: *mut DPFPDD_DEV_INFO) -> c_int;

    pub fn dpfpdd_open_ext(dev_name: *const c_char, priority: c_uint, pdev: *mut DPFPDD_DEV)
        -> c_int;

    pub fn dpfpdd_close(dev: DPFPDD_DEV) -> c_int;

    pub fn dpfpdd_get_device_status(dev: DPFPDD_DEV, dev_status: *mut DPFPDD_DEV_STATUS) -> c_int;

    pub fn dpfpdd_capture(
        dev: DPFPDD_DEV,
        capture_parm: *const DPFPDD_CAPTURE_PARAM,
        timeout_cnt: c_uint,
        capture_result: *mut DPFPDD_CAPTURE_RESULT,
        image_size: *mut c_uint,
        image_data: *mut c_uchar,
    ) -> c_int;
}

#[cfg(not(windows))]
mod stubs {
    use super::*;

    pub unsafe extern "system" fn dpfpdd_init() -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_exit() -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_query_devices(
        dev_cnt: *mut c_uint,
        _dev_infos: *mut DPFPDD_DEV_INFO,
    ) -> c_int {
        if !dev_cnt.is_null() {
            *dev_cnt = 0;
        }

        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_open_ext(
        _dev_name: *const c_char,
        _priority: c_uint,
        _pdev: *mut DPFPDD_DEV,
    ) -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_close(_dev: DPFPDD_DEV) -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_get_device_status(
        _dev: DPFPDD_DEV,
        _dev_status: *mut DPFPDD_DEV_STATUS,
    ) -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }

    pub unsafe extern "system" fn dpfpdd_capture(
        _dev: DPFPDD_DEV,
        _capture_parm: *const DPFPDD_CAPTURE_PARAM,
        _timeout_cnt: c_uint,
        _capture_result: *mut DPFPDD_CAPTURE_RESULT,
        _image_size: *mut c_uint,
        _image_data: *mut c_uchar,
    ) -> c_int {
        DPFPDD_E_NOT_IMPLEMENTED
    }
}

#[cfg(not(windows))]
pub use crate::stubs::*;
