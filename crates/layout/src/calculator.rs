//! The dry-run pass: sums block advances without touching any device.

use crate::config::LayoutConfig;
use crate::template::Template;
use rollprint_types::Document;

/// The single vertical offset both passes advance.
///
/// It starts at the top margin and only ever moves down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    y: u32,
}

impl Cursor {
    pub fn at(y: u32) -> Self {
        Self { y }
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn advance(&mut self, by: u32) {
        self.y = self.y.saturating_add(by);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutCalculator<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutCalculator<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Total content height of `document` in device pixels, margins included.
    pub fn compute_height(&self, document: &Document) -> u32 {
        self.measure(&Template::for_document(document, self.config))
    }

    /// Height of an already-built template: the cursor after the last block
    /// plus the bottom margin.
    pub fn measure(&self, template: &Template) -> u32 {
        let mut cursor = Cursor::at(self.config.margin);
        for block in template {
            cursor.advance(block.advance());
        }
        let height = cursor.y().saturating_add(self.config.margin);
        log::debug!(
            "Measured {} template: {} blocks, {} px.",
            template.kind(),
            template.len(),
            height
        );
        height
    }
}
