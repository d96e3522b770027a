//! A virtual roll printer backed by `lopdf`.
//!
//! Each named device is a directory under a spool root. Every job sent to it
//! is written as a one-page PDF whose height is the roll length the device
//! was configured with, so the output shows exactly what a physical roll
//! printer would have cut. Text is shaped with `rustybuzz` and drawn with
//! embedded DejaVu Sans faces, so labels in any covered script keep their
//! characters and true advances.

mod fonts;
mod helpers;
mod spool;
mod surface;

pub use fonts::{FaceStyle, ShapedGlyph, ShapedText, shape};
pub use helpers::{mm10_to_pt, mm10_to_px, px_to_pt};
pub use spool::{CAPABILITIES_FILE, DEFAULT_ROLL_WIDTH_MM10, PdfSpoolDriver};
pub use surface::PdfRollSurface;
