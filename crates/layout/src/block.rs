use crate::config::ColumnOffsets;
use crate::fonts::FontRole;

/// Whether a table row is the column heading or one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Heading,
    Item,
}

/// The four cells of a table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
}

/// One vertical region of a document.
///
/// Blocks only exist in a template when their inclusion rule held for the
/// document, and each carries the advance it moves the cursor by.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Text centered on the roll.
    Centered {
        text: String,
        font: FontRole,
        advance: u32,
    },
    /// Label right-aligned at the right margin, value left-aligned at the left.
    LabelValue {
        label: String,
        value: String,
        font: FontRole,
        advance: u32,
    },
    /// Horizontal line across the printable width.
    Rule { advance: u32 },
    /// A four-column table row.
    Row {
        kind: RowKind,
        cells: RowCells,
        font: FontRole,
        columns: ColumnOffsets,
        advance: u32,
    },
    /// Blank vertical space.
    Gap { advance: u32 },
}

impl Block {
    pub fn advance(&self) -> u32 {
        match self {
            Block::Centered { advance, .. }
            | Block::LabelValue { advance, .. }
            | Block::Rule { advance }
            | Block::Row { advance, .. }
            | Block::Gap { advance } => *advance,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Block::Centered { .. } => "centered",
            Block::LabelValue { .. } => "label_value",
            Block::Rule { .. } => "rule",
            Block::Row {
                kind: RowKind::Heading,
                ..
            } => "table_heading",
            Block::Row {
                kind: RowKind::Item,
                ..
            } => "table_row",
            Block::Gap { .. } => "gap",
        }
    }

    pub fn is_item_row(&self) -> bool {
        matches!(
            self,
            Block::Row {
                kind: RowKind::Item,
                ..
            }
        )
    }
}
