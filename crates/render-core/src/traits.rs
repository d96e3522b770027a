use crate::error::RenderError;
use crate::types::TextAlign;
use rollprint_layout::FontSpec;

/// A scoped drawing context bound to one output device for one document.
///
/// Coordinates are device pixels with the origin at the top-left corner of
/// the roll. The page geometry is fixed for the lifetime of the surface.
pub trait DrawingSurface {
    fn start_doc(&mut self, name: &str) -> Result<(), RenderError>;

    fn start_page(&mut self) -> Result<(), RenderError>;

    fn select_font(&mut self, font: &FontSpec) -> Result<(), RenderError>;

    fn set_text_align(&mut self, align: TextAlign) -> Result<(), RenderError>;

    /// Draws `text` anchored at `(x, y)` according to the current alignment.
    fn text_out(&mut self, x: u32, y: u32, text: &str) -> Result<(), RenderError>;

    fn move_to(&mut self, x: u32, y: u32) -> Result<(), RenderError>;

    /// Strokes a line from the current position to `(x, y)`.
    fn line_to(&mut self, x: u32, y: u32) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn end_doc(&mut self) -> Result<(), RenderError>;

    /// Releases the device context. Nothing may be drawn afterwards.
    fn release(&mut self) -> Result<(), RenderError>;
}

macro_rules! forward_surface {
    ($ty:ty) => {
        impl<S: DrawingSurface + ?Sized> DrawingSurface for $ty {
            fn start_doc(&mut self, name: &str) -> Result<(), RenderError> {
                (**self).start_doc(name)
            }

            fn start_page(&mut self) -> Result<(), RenderError> {
                (**self).start_page()
            }

            fn select_font(&mut self, font: &FontSpec) -> Result<(), RenderError> {
                (**self).select_font(font)
            }

            fn set_text_align(&mut self, align: TextAlign) -> Result<(), RenderError> {
                (**self).set_text_align(align)
            }

            fn text_out(&mut self, x: u32, y: u32, text: &str) -> Result<(), RenderError> {
                (**self).text_out(x, y, text)
            }

            fn move_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
                (**self).move_to(x, y)
            }

            fn line_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
                (**self).line_to(x, y)
            }

            fn end_page(&mut self) -> Result<(), RenderError> {
                (**self).end_page()
            }

            fn end_doc(&mut self) -> Result<(), RenderError> {
                (**self).end_doc()
            }

            fn release(&mut self) -> Result<(), RenderError> {
                (**self).release()
            }
        }
    };
}

forward_surface!(Box<S>);
forward_surface!(&mut S);
