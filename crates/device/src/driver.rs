use crate::config::DeviceConfig;
use crate::error::DeviceError;
use rollprint_render_core::DrawingSurface;

pub type BoxedSurface = Box<dyn DrawingSurface + Send>;

/// Access to named output devices.
///
/// Implementations must be shareable across request threads; the caller
/// serialises jobs per device.
pub trait PrinterDriver: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Opens `device` and reads its current page geometry.
    fn query(&self, device: &str) -> Result<DeviceConfig, DeviceError>;

    /// Reopens `device` with `config` and returns a fresh drawing surface
    /// bound to that geometry. Nothing has been started on the surface yet.
    fn open_surface(&self, device: &str, config: &DeviceConfig)
    -> Result<BoxedSurface, DeviceError>;
}
