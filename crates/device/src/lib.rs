//! Output devices for roll printers.
//!
//! A [`PrinterDriver`] opens named devices, reports their current page
//! geometry and hands out drawing surfaces bound to a given geometry. The
//! [`PageSizer`] turns a measured content height into the roll length the
//! device must be configured with before any surface is created.

mod config;
mod driver;
mod error;
mod sizer;

pub use config::{DeviceConfig, PaperSize};
pub use driver::{BoxedSurface, PrinterDriver};
pub use error::DeviceError;
pub use sizer::{DEFAULT_DPI, PageSizer};
