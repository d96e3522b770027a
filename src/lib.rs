//! Prints receipts and debt statements on continuous-roll printers.
//!
//! Every job runs in two passes over one shared layout template: a dry run
//! that measures the content height, then, after the device has been set to
//! a roll of exactly that length, the draw pass.
//!
//! ```no_run
//! use rollprint::{PrintOrchestrator, PrinterProfile};
//! use rollprint_render_lopdf::PdfSpoolDriver;
//! use std::sync::Arc;
//!
//! let driver = Arc::new(PdfSpoolDriver::new("spool"));
//! let orchestrator = PrintOrchestrator::new(PrinterProfile::default(), driver)?;
//! let report = orchestrator.print_value(&serde_json::json!({"numeroRecu": "R-1"}))?;
//! println!("{} px", report.content_height);
//! # Ok::<(), rollprint::PrintError>(())
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod scope;
pub mod server;

pub use config::{AppConfig, ConfigError, PrinterProfile};
pub use error::{ErrorKind, PrintError};
pub use orchestrator::{DeviceLocks, Measurement, PrintOrchestrator, PrintReport};
pub use scope::SurfaceScope;

pub use rollprint_device::{DeviceConfig, DeviceError, PageSizer, PaperSize, PrinterDriver};
pub use rollprint_layout::{LayoutCalculator, LayoutConfig, LayoutError, Template};
pub use rollprint_render_core::{DocumentRenderer, DrawingSurface, RenderError};
pub use rollprint_types::{Document, DocumentKind, ModelError};
