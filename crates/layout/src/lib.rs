//! Layout for roll-paper documents.
//!
//! Each document variant maps to a [`Template`]: an ordered sequence of
//! [`Block`]s whose conditional lines have already been decided from the
//! document data. The same template value feeds the dry-run height pass
//! ([`LayoutCalculator`]) and the draw pass in `rollprint-render-core`, so the
//! two passes cannot disagree about which blocks exist or how tall they are.

pub mod block;
pub mod calculator;
pub mod config;
pub mod error;
pub mod fonts;
pub mod metrics;
pub mod template;

pub use block::{Block, RowCells, RowKind};
pub use calculator::{Cursor, LayoutCalculator};
pub use config::{ColumnOffsets, Labels, LayoutConfig};
pub use error::LayoutError;
pub use fonts::{FontRole, FontSpec, FontTable};
pub use template::Template;
