use serde::{Deserialize, Serialize};

/// How the device picks its page length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    /// A driver-defined form, identified by the driver's own code.
    Standard(u16),
    /// Length and width come from the explicit millimetre fields.
    #[default]
    Custom,
}

/// Page geometry of an output device. Lengths are in tenths of a millimetre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeviceConfig {
    pub paper_size: PaperSize,
    pub paper_length_mm10: Option<u32>,
    pub paper_width_mm10: Option<u32>,
    /// Width of the drawable area in device pixels, when known.
    pub printable_width_px: Option<u32>,
}

impl DeviceConfig {
    pub fn is_custom(&self) -> bool {
        self.paper_size == PaperSize::Custom
    }

    /// Returns a copy switched to a custom roll of `length_mm10`, keeping the
    /// width and every other setting.
    pub fn with_roll_length(&self, length_mm10: u32) -> Self {
        Self {
            paper_size: PaperSize::Custom,
            paper_length_mm10: Some(length_mm10),
            ..self.clone()
        }
    }

    /// Returns a copy whose drawable area is `width_px` pixels wide.
    pub fn with_printable_width(&self, width_px: u32) -> Self {
        Self {
            printable_width_px: Some(width_px),
            ..self.clone()
        }
    }
}
