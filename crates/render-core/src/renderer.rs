use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::types::TextAlign;
use rollprint_layout::{Block, Cursor, FontRole, LayoutConfig, Template};
use rollprint_types::Document;

/// The draw pass: walks a template top to bottom, issuing surface primitives
/// and advancing one shared cursor by each block's advance.
///
/// The renderer never opens, ends or releases the surface; the caller owns
/// the surface lifecycle.
pub struct DocumentRenderer<'a> {
    config: &'a LayoutConfig,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Builds the template for `document` and draws it.
    pub fn render_document(
        &self,
        document: &Document,
        surface: &mut dyn DrawingSurface,
    ) -> Result<u32, RenderError> {
        let template = Template::for_document(document, self.config);
        self.render(&template, surface)
    }

    /// Draws every block of `template` and returns the final cursor position.
    ///
    /// The first failing primitive aborts the pass.
    pub fn render(
        &self,
        template: &Template,
        surface: &mut dyn DrawingSurface,
    ) -> Result<u32, RenderError> {
        let mut cursor = Cursor::at(self.config.margin);
        for block in template {
            self.draw_block(block, cursor.y(), surface)?;
            cursor.advance(block.advance());
        }
        log::debug!(
            "Drew {} template: {} blocks, cursor ended at {}.",
            template.kind(),
            template.len(),
            cursor.y()
        );
        Ok(cursor.y())
    }

    fn draw_block(
        &self,
        block: &Block,
        y: u32,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), RenderError> {
        let left = self.config.left();
        let right = self.config.right();
        match block {
            Block::Centered { text, font, .. } => {
                self.select(*font, surface)?;
                surface.set_text_align(TextAlign::Center)?;
                surface.text_out(self.config.center(), y, text)
            }
            Block::LabelValue {
                label, value, font, ..
            } => {
                self.select(*font, surface)?;
                surface.set_text_align(TextAlign::Right)?;
                surface.text_out(right, y, label)?;
                surface.set_text_align(TextAlign::Left)?;
                surface.text_out(left, y, value)
            }
            Block::Rule { .. } => {
                surface.move_to(left, y)?;
                surface.line_to(right, y)
            }
            Block::Row {
                cells,
                font,
                columns,
                ..
            } => {
                self.select(*font, surface)?;
                surface.set_text_align(TextAlign::Right)?;
                surface.text_out(right, y, &cells.name)?;
                surface.set_text_align(TextAlign::Center)?;
                let quantity_x = left.saturating_add(columns.quantity);
                let price_x = left.saturating_add(columns.price);
                surface.text_out(quantity_x, y, &cells.quantity)?;
                surface.text_out(price_x, y, &cells.price)?;
                surface.set_text_align(TextAlign::Left)?;
                surface.text_out(left, y, &cells.total)
            }
            Block::Gap { .. } => Ok(()),
        }
    }

    fn select(
        &self,
        role: FontRole,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), RenderError> {
        surface.select_font(self.config.fonts.get(role))
    }
}
