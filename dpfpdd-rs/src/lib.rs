#![warn(clippy::all)]

mod device_info;
mod errors;

pub use crate::{device_info::*, errors::*};

pub type Result<T> = std::result::Result<T, SdkError>;

/// Safe surface over the vendor `dpfpdd` entry points.
///
/// The library keeps process-wide state between `dpfpdd_init` and
/// `dpfpdd_exit`. That lifecycle is deliberately not tied to this value:
/// the host process drives it with explicit `init` and `cleanup` commands,
/// and nothing here enforces that `init` ran before the other calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dpfpdd;

impl Dpfpdd {
    pub fn new() -> Self {
        Dpfpdd
    }

    /// Initialise the vendor library.
    pub fn init(&self) -> crate::Result<()> {
        let code = unsafe { dpfpdd_sys::dpfpdd_init() };
        log::debug!("dpfpdd_init returned {:#x}", code);

        if code == dpfpdd_sys::DPFPDD_SUCCESS {
            Ok(())
        } else {
            Err(SdkError::Init(code))
        }
    }

    /// First enumeration pass: asks the library how many readers are
    /// attached, without fetching their records.
    pub fn count_devices(&self) -> crate::Result<u32> {
        let mut count: u32 = 0;
        let code = unsafe { dpfpdd_sys::dpfpdd_query_devices(&mut count, std::ptr::null_mut()) };
        log::debug!("dpfpdd_query_devices (count pass) returned {:#x}, count {}", code, count);

        if code == dpfpdd_sys::DPFPDD_SUCCESS {
            Ok(count)
        } else {
            Err(SdkError::CountDevices(code))
        }
    }

    /// Second enumeration pass: fetches full records for `count` readers.
    /// The library may report fewer readers than requested if one was
    /// unplugged between the passes; the returned list reflects what it
    /// actually filled in.
    pub fn enumerate_devices(&self, count: u32) -> crate::Result<Vec<DeviceInfo>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut raw = vec![dpfpdd_sys::DPFPDD_DEV_INFO::zeroed(); count as usize];
        for info in &mut raw {
            info.size = std::mem::size_of::<dpfpdd_sys::DPFPDD_DEV_INFO>() as u32;
        }

        let mut filled = count;
        let code = unsafe { dpfpdd_sys::dpfpdd_query_devices(&mut filled, raw.as_mut_ptr()) };
        log::debug!("dpfpdd_query_devices (detail pass) returned {:#x}, count {}", code, filled);

        if code != dpfpdd_sys::DPFPDD_SUCCESS {
            return Err(SdkError::EnumerateDevices(code));
        }

        raw.truncate(filled as usize);

        Ok(raw.iter().map(DeviceInfo::from_raw).collect())
    }

    /// Release the vendor library.
    pub fn exit(&self) -> crate::Result<()> {
        let code = unsafe { dpfpdd_sys::dpfpdd_exit() };
        log::debug!("dpfpdd_exit returned {:#x}", code);

        if code == dpfpdd_sys::DPFPDD_SUCCESS {
            Ok(())
        } else {
            Err(SdkError::Exit(code))
        }
    }
}
