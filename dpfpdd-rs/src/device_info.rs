use std::fmt::{Display, Error, Formatter};
use std::os::raw::c_char;

/// One enumerated reader, with the fixed C arrays decoded into owned strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub vendor_name: String,
    pub product_name: String,
    pub serial_number: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub modality: Modality,
    pub technology: Technology,
}

impl DeviceInfo {
    pub(crate) fn from_raw(raw: &dpfpdd_sys::DPFPDD_DEV_INFO) -> Self {
        DeviceInfo {
            name: decode_field(&raw.name),
            vendor_name: decode_field(&raw.vendor_name),
            product_name: decode_field(&raw.product_name),
            serial_number: decode_field(&raw.serial_num),
            vendor_id: raw.vendor_id,
            product_id: raw.product_id,
            modality: Modality::from(raw.modality),
            technology: Technology::from(raw.technology),
        }
    }
}

/// Decodes a NUL-terminated fixed array. The library zero-fills the tail of
/// each field, so everything up to the first NUL is the value.
fn decode_field(field: &[c_char]) -> String {
    let bytes = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect::<Vec<_>>();

    String::from_utf8_lossy(&bytes).into_owned()
}

/// How the reader acquires a print. Unmapped descriptor words collapse to
/// `Unknown` rather than failing the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Unknown,
    /// The finger is swiped across a strip sensor.
    Swipe,
    /// The reader has a surface area that covers the whole finger.
    Area,
}

impl From<u32> for Modality {
    fn from(value: u32) -> Self {
        match value {
            dpfpdd_sys::DPFPDD_HW_MODALITY_SWIPE => Modality::Swipe,
            dpfpdd_sys::DPFPDD_HW_MODALITY_AREA => Modality::Area,
            _ => Modality::Unknown,
        }
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let string = match self {
            Modality::Unknown => "unknown",
            Modality::Swipe => "swipe",
            Modality::Area => "area",
        };

        write!(f, "{}", string)
    }
}

/// The sensing technology of the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technology {
    Unknown,
    Optical,
    Capacitive,
    Thermal,
    Pressure,
}

impl From<u32> for Technology {
    fn from(value: u32) -> Self {
        match value {
            dpfpdd_sys::DPFPDD_HW_TECHNOLOGY_OPTICAL => Technology::Optical,
            dpfpdd_sys::DPFPDD_HW_TECHNOLOGY_CAPACITIVE => Technology::Capacitive,
            dpfpdd_sys::DPFPDD_HW_TECHNOLOGY_THERMAL => Technology::Thermal,
            dpfpdd_sys::DPFPDD_HW_TECHNOLOGY_PRESSURE => Technology::Pressure,
            _ => Technology::Unknown,
        }
    }
}

impl Display for Technology {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let string = match self {
            Technology::Unknown => "unknown",
            Technology::Optical => "optical",
            Technology::Capacitive => "capacitive",
            Technology::Thermal => "thermal",
            Technology::Pressure => "pressure",
        };

        write!(f, "{}", string)
    }
}
