//! An in-memory surface that records every primitive it receives.
//!
//! Used for dry inspection of a draw pass and for exercising the surface
//! lifecycle without a device. Failures can be injected per primitive.

use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::types::{Primitive, TextAlign};
use rollprint_layout::FontSpec;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StartDoc(String),
    StartPage,
    Font(FontSpec),
    Text {
        x: u32,
        y: u32,
        align: TextAlign,
        text: String,
    },
    MoveTo {
        x: u32,
        y: u32,
    },
    LineTo {
        x: u32,
        y: u32,
    },
    EndPage,
    EndDoc,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    align: TextAlign,
    fail_on: Option<Primitive>,
    releases: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the first call of `primitive` fail.
    pub fn fail_on(mut self, primitive: Primitive) -> Self {
        self.fail_on = Some(primitive);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn is_released(&self) -> bool {
        self.releases > 0
    }

    fn check(&mut self, primitive: Primitive) -> Result<(), RenderError> {
        if primitive != Primitive::Release && self.is_released() {
            return Err(RenderError::Released);
        }
        if self.fail_on == Some(primitive) {
            self.fail_on = None;
            return Err(RenderError::primitive(primitive.name(), "injected failure"));
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn start_doc(&mut self, name: &str) -> Result<(), RenderError> {
        self.check(Primitive::StartDoc)?;
        self.ops.push(DrawOp::StartDoc(name.to_string()));
        Ok(())
    }

    fn start_page(&mut self) -> Result<(), RenderError> {
        self.check(Primitive::StartPage)?;
        self.ops.push(DrawOp::StartPage);
        Ok(())
    }

    fn select_font(&mut self, font: &FontSpec) -> Result<(), RenderError> {
        self.check(Primitive::SelectFont)?;
        self.ops.push(DrawOp::Font(font.clone()));
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) -> Result<(), RenderError> {
        self.check(Primitive::SetTextAlign)?;
        self.align = align;
        Ok(())
    }

    fn text_out(&mut self, x: u32, y: u32, text: &str) -> Result<(), RenderError> {
        self.check(Primitive::TextOut)?;
        self.ops.push(DrawOp::Text {
            x,
            y,
            align: self.align,
            text: text.to_string(),
        });
        Ok(())
    }

    fn move_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.check(Primitive::MoveTo)?;
        self.ops.push(DrawOp::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.check(Primitive::LineTo)?;
        self.ops.push(DrawOp::LineTo { x, y });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.check(Primitive::EndPage)?;
        self.ops.push(DrawOp::EndPage);
        Ok(())
    }

    fn end_doc(&mut self) -> Result<(), RenderError> {
        self.check(Primitive::EndDoc)?;
        self.ops.push(DrawOp::EndDoc);
        Ok(())
    }

    fn release(&mut self) -> Result<(), RenderError> {
        self.releases += 1;
        self.check(Primitive::Release)
    }
}
