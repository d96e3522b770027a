use crate::config::DeviceConfig;
use crate::driver::PrinterDriver;
use crate::error::DeviceError;

pub const DEFAULT_DPI: u32 = 96;

const MM_PER_INCH: f64 = 25.4;

/// Converts a content height in device pixels to the physical roll length
/// the device must be set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizer {
    dpi: u32,
}

impl Default for PageSizer {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

impl PageSizer {
    pub fn new(dpi: u32) -> Result<Self, DeviceError> {
        if dpi == 0 {
            return Err(DeviceError::InvalidResolution(dpi));
        }
        Ok(Self { dpi })
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Pixels to inches to tenths of a millimetre, truncated.
    pub fn paper_length_mm10(&self, height: u32) -> u32 {
        let inches = f64::from(height) / f64::from(self.dpi);
        (inches * MM_PER_INCH * 10.0) as u32
    }

    /// The device geometry for a document `height` pixels tall.
    pub fn apply(&self, height: u32, current: &DeviceConfig) -> DeviceConfig {
        current.with_roll_length(self.paper_length_mm10(height))
    }

    /// Reads the current geometry of `device` and returns it resized for a
    /// document `height` pixels tall. The driver applies it when the surface
    /// is opened.
    pub fn configure(
        &self,
        driver: &dyn PrinterDriver,
        device: &str,
        height: u32,
    ) -> Result<DeviceConfig, DeviceError> {
        let current = driver.query(device)?;
        let config = self.apply(height, &current);
        log::info!(
            "Sizing '{}' via {}: {} px at {} dpi -> {} (0.1 mm).",
            device,
            driver.name(),
            height,
            self.dpi,
            config.paper_length_mm10.unwrap_or_default()
        );
        Ok(config)
    }
}
