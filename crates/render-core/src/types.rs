use std::fmt;

/// Horizontal anchoring of text relative to the x coordinate it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Names of the surface primitives, used for error reporting and for
/// failure injection in instrumented surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    StartDoc,
    StartPage,
    SelectFont,
    SetTextAlign,
    TextOut,
    MoveTo,
    LineTo,
    EndPage,
    EndDoc,
    Release,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::StartDoc => "start_doc",
            Primitive::StartPage => "start_page",
            Primitive::SelectFont => "select_font",
            Primitive::SetTextAlign => "set_text_align",
            Primitive::TextOut => "text_out",
            Primitive::MoveTo => "move_to",
            Primitive::LineTo => "line_to",
            Primitive::EndPage => "end_page",
            Primitive::EndDoc => "end_doc",
            Primitive::Release => "release",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
