use dpfpdd_rs::{DeviceInfo, Dpfpdd};

/// The subset of vendor operations the command set drives. The dispatcher
/// works against this seam so it can be exercised without the vendor
/// library loaded.
pub trait ReaderSdk {
    fn initialize(&self) -> dpfpdd_rs::Result<()>;
    fn count_devices(&self) -> dpfpdd_rs::Result<u32>;
    fn enumerate_devices(&self, count: u32) -> dpfpdd_rs::Result<Vec<DeviceInfo>>;
    fn shutdown(&self) -> dpfpdd_rs::Result<()>;
}

impl ReaderSdk for Dpfpdd {
    fn initialize(&self) -> dpfpdd_rs::Result<()> {
        self.init()
    }

    fn count_devices(&self) -> dpfpdd_rs::Result<u32> {
        Dpfpdd::count_devices(self)
    }

    fn enumerate_devices(&self, count: u32) -> dpfpdd_rs::Result<Vec<DeviceInfo>> {
        Dpfpdd::enumerate_devices(self, count)
    }

    fn shutdown(&self) -> dpfpdd_rs::Result<()> {
        self.exit()
    }
}
