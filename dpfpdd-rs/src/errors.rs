use failure::Fail;

/// Failures reported by the vendor entry points. Every variant keeps the raw
/// return code because callers forward it verbatim to the host process.
#[derive(Debug, Fail)]
pub enum SdkError {
    #[fail(display = "dpfpdd_init failed with code {:#x}", _0)]
    Init(i32),
    #[fail(display = "device count query failed with code {:#x}", _0)]
    CountDevices(i32),
    #[fail(display = "device detail query failed with code {:#x}", _0)]
    EnumerateDevices(i32),
    #[fail(display = "dpfpdd_exit failed with code {:#x}", _0)]
    Exit(i32),
}

impl SdkError {
    /// The raw code the entry point returned.
    pub fn code(&self) -> i32 {
        match self {
            SdkError::Init(code)
            | SdkError::CountDevices(code)
            | SdkError::EnumerateDevices(code)
            | SdkError::Exit(code) => *code,
        }
    }
}
