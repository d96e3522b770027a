use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Page width {width} leaves no printable area with a margin of {margin}.")]
    NoPrintableArea { width: u32, margin: u32 },
    #[error("Column offset '{column}' ({offset}) lies outside the printable width {printable}.")]
    ColumnOutOfBounds {
        column: &'static str,
        offset: u32,
        printable: u32,
    },
    #[error("Font '{0}' must have a non-zero height.")]
    ZeroFontHeight(&'static str),
}
