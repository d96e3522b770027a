use crate::helpers::mm10_to_px;
use crate::surface::PdfRollSurface;
use rollprint_device::{
    BoxedSurface, DEFAULT_DPI, DeviceConfig, DeviceError, PaperSize, PrinterDriver,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Optional per-device file holding the stored `DeviceConfig` as JSON.
pub const CAPABILITIES_FILE: &str = "capabilities.json";
/// 80 mm, the usual thermal roll.
pub const DEFAULT_ROLL_WIDTH_MM10: u32 = 800;

/// A printer driver whose devices are directories under `root`.
///
/// A device exists when `root/<device name>` is a directory. Its stored
/// geometry is read from [`CAPABILITIES_FILE`] when present; jobs are written
/// next to it as `job-<timestamp>-<seq>.pdf`. The page is as wide as the
/// configured printable width, or the whole roll when none is given.
#[derive(Debug)]
pub struct PdfSpoolDriver {
    root: PathBuf,
    dpi: u32,
    sequence: AtomicU64,
}

impl PdfSpoolDriver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_dpi(root, DEFAULT_DPI)
    }

    pub fn with_dpi(root: impl Into<PathBuf>, dpi: u32) -> Self {
        Self {
            root: root.into(),
            dpi,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the spool directory for `device` if it does not exist yet.
    pub fn install(&self, device: &str) -> Result<PathBuf, DeviceError> {
        let dir = self.root.join(device);
        fs::create_dir_all(&dir).map_err(|e| DeviceError::configuration(device, e))?;
        Ok(dir)
    }

    fn device_dir(&self, device: &str) -> Result<PathBuf, DeviceError> {
        if device.is_empty() || device.contains(['/', '\\']) || device == ".." {
            return Err(DeviceError::unavailable(device, "invalid device name"));
        }
        let dir = self.root.join(device);
        if !dir.is_dir() {
            return Err(DeviceError::unavailable(
                device,
                format!("no spool directory at {}", dir.display()),
            ));
        }
        Ok(dir)
    }

    fn job_path(&self, dir: &Path) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        dir.join(format!("job-{stamp}-{seq}.pdf"))
    }
}

impl PrinterDriver for PdfSpoolDriver {
    fn name(&self) -> &str {
        "pdf-spool"
    }

    fn query(&self, device: &str) -> Result<DeviceConfig, DeviceError> {
        let dir = self.device_dir(device)?;
        let path = dir.join(CAPABILITIES_FILE);
        if !path.exists() {
            return Ok(DeviceConfig {
                paper_size: PaperSize::Custom,
                paper_length_mm10: None,
                paper_width_mm10: Some(DEFAULT_ROLL_WIDTH_MM10),
                printable_width_px: None,
            });
        }
        let raw = fs::read_to_string(&path).map_err(|e| DeviceError::configuration(device, e))?;
        serde_json::from_str(&raw).map_err(|e| DeviceError::configuration(device, e))
    }

    fn open_surface(
        &self,
        device: &str,
        config: &DeviceConfig,
    ) -> Result<BoxedSurface, DeviceError> {
        let dir = self.device_dir(device)?;
        let length = match (config.paper_size, config.paper_length_mm10) {
            (PaperSize::Custom, Some(length)) if length > 0 => length,
            _ => {
                return Err(DeviceError::configuration(
                    device,
                    "a roll printer needs a custom, non-zero paper length",
                ));
            }
        };
        let width = config.printable_width_px.unwrap_or_else(|| {
            let roll = config.paper_width_mm10.unwrap_or(DEFAULT_ROLL_WIDTH_MM10);
            mm10_to_px(roll, self.dpi)
        });
        let output = self.job_path(&dir);
        log::debug!(
            "Opening {} for '{}' ({} px wide, {} (0.1 mm) long).",
            output.display(),
            device,
            width,
            length
        );
        Ok(Box::new(PdfRollSurface::new(output, self.dpi, width, length)))
    }
}
