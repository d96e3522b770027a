use crate::fonts::{self, FaceStyle, FaceUsage};
use crate::helpers::{ASCENT, mm10_to_pt, px_to_pt};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use rollprint_layout::FontSpec;
use rollprint_render_core::{DrawingSurface, RenderError, TextAlign};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    DocOpen,
    PageOpen,
    PageClosed,
    Done,
    Released,
}

struct PdfDocument {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    faces: BTreeMap<FaceStyle, FaceUsage>,
}

/// A drawing surface that lays one roll job onto a single PDF page.
///
/// Coordinates arrive in device pixels with a top-left origin and are scaled
/// to points with a bottom-left origin, both axes at the same `72 / dpi`. The
/// page is as wide as the printable width in pixels, so nothing the layout
/// places inside it is clipped. Text is shaped and drawn with embedded faces.
/// The file is only written by `end_doc`; releasing an unfinished surface
/// discards the job.
pub struct PdfRollSurface {
    output: PathBuf,
    dpi: u32,
    page_width: f32,
    page_height: f32,
    phase: Phase,
    pdf: Option<PdfDocument>,
    content: Content,
    font: Option<(FaceStyle, f32)>,
    align: TextAlign,
}

impl PdfRollSurface {
    pub fn new(output: impl Into<PathBuf>, dpi: u32, width_px: u32, length_mm10: u32) -> Self {
        Self {
            output: output.into(),
            dpi,
            page_width: px_to_pt(width_px, dpi),
            page_height: mm10_to_pt(length_mm10),
            phase: Phase::Idle,
            pdf: None,
            content: Content { operations: vec![] },
            font: None,
            align: TextAlign::Left,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Page size in points.
    pub fn page_size(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    fn require(&self, phase: Phase, primitive: &'static str) -> Result<(), RenderError> {
        if self.phase == Phase::Released {
            return Err(RenderError::Released);
        }
        if self.phase != phase {
            return Err(RenderError::primitive(
                primitive,
                format!("not allowed while {:?}", self.phase),
            ));
        }
        Ok(())
    }

    fn pt(&self, px: u32) -> f32 {
        px_to_pt(px, self.dpi)
    }

    fn flip(&self, y_pt: f32) -> f32 {
        self.page_height - y_pt
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

impl DrawingSurface for PdfRollSurface {
    fn start_doc(&mut self, name: &str) -> Result<(), RenderError> {
        self.require(Phase::Idle, "start_doc")?;
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        let info_id = document.add_object(dictionary! { "Title" => lopdf::text_string(name) });
        document.trailer.set("Info", info_id);

        self.pdf = Some(PdfDocument {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            faces: BTreeMap::new(),
        });
        self.phase = Phase::DocOpen;
        Ok(())
    }

    fn start_page(&mut self) -> Result<(), RenderError> {
        self.require(Phase::DocOpen, "start_page")?;
        self.content.operations.clear();
        self.push("w", vec![0.75.into()]);
        self.phase = Phase::PageOpen;
        Ok(())
    }

    fn select_font(&mut self, font: &FontSpec) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "select_font")?;
        self.font = Some((FaceStyle::for_font(font), self.pt(font.height)));
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "set_text_align")?;
        self.align = align;
        Ok(())
    }

    fn text_out(&mut self, x: u32, y: u32, text: &str) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "text_out")?;
        let (style, size) = match self.font {
            Some((style, size)) if size > 0.0 => (style, size),
            _ => return Err(RenderError::primitive("text_out", "no font selected")),
        };
        let shaped =
            fonts::shape(style, text).map_err(|e| RenderError::primitive("text_out", e))?;
        if shaped.has_missing_glyphs() {
            log::warn!("'{}' has characters the {:?} face cannot draw.", text, style);
        }
        let width = shaped.width() * size / 1000.0;
        let anchor = self.pt(x);
        let left = match self.align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - width / 2.0,
            TextAlign::Right => anchor - width,
        };
        let baseline = self.flip(self.pt(y) + size * ASCENT);
        let (operator, operands) = shaped.show_operation();
        if let Some(pdf) = self.pdf.as_mut() {
            pdf.faces.entry(style).or_default().record(&shaped);
        }
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(style.resource().as_bytes().to_vec()), size.into()]);
        self.push("Td", vec![left.into(), baseline.into()]);
        self.push(operator, operands);
        self.push("ET", vec![]);
        Ok(())
    }

    fn move_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "move_to")?;
        let (x, y) = (self.pt(x), self.flip(self.pt(y)));
        self.push("m", vec![x.into(), y.into()]);
        Ok(())
    }

    fn line_to(&mut self, x: u32, y: u32) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "line_to")?;
        let (x, y) = (self.pt(x), self.flip(self.pt(y)));
        self.push("l", vec![x.into(), y.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.require(Phase::PageOpen, "end_page")?;
        let encoded = self
            .content
            .encode()
            .map_err(|e| RenderError::primitive("end_page", e.to_string()))?;
        let (width, height) = (self.page_width, self.page_height);
        let pdf = self
            .pdf
            .as_mut()
            .ok_or_else(|| RenderError::primitive("end_page", "document not started"))?;
        let content_id = pdf.document.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = pdf.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pdf.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => pdf.resources_id,
        });
        pdf.page_ids.push(page_id);
        self.phase = Phase::PageClosed;
        Ok(())
    }

    fn end_doc(&mut self) -> Result<(), RenderError> {
        self.require(Phase::PageClosed, "end_doc")?;
        let mut pdf = self
            .pdf
            .take()
            .ok_or_else(|| RenderError::primitive("end_doc", "document not started"))?;
        let mut font_resources = Dictionary::new();
        for (style, usage) in pdf.faces.iter().filter(|(_, usage)| !usage.is_empty()) {
            let font_id = fonts::embed(&mut pdf.document, *style, usage)
                .map_err(|e| RenderError::primitive("end_doc", e))?;
            font_resources.set(style.resource(), font_id);
        }
        pdf.document.objects.insert(
            pdf.resources_id,
            Object::Dictionary(dictionary! { "Font" => font_resources }),
        );

        let kids: Vec<Object> = pdf.page_ids.iter().map(|id| Object::from(*id)).collect();
        let count = kids.len() as i64;
        pdf.document.objects.insert(
            pdf.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        pdf.document
            .save(&self.output)
            .map_err(|e| RenderError::Spool(format!("{}: {e}", self.output.display())))?;
        log::info!("Spooled job to {}.", self.output.display());
        self.phase = Phase::Done;
        Ok(())
    }

    fn release(&mut self) -> Result<(), RenderError> {
        if self.phase == Phase::Released {
            return Err(RenderError::Released);
        }
        if self.phase != Phase::Done && self.phase != Phase::Idle {
            log::warn!(
                "Releasing unfinished job for {}; nothing was spooled.",
                self.output.display()
            );
        }
        self.pdf = None;
        self.content.operations.clear();
        self.phase = Phase::Released;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(dir: &Path) -> PdfRollSurface {
        PdfRollSurface::new(dir.join("job.pdf"), 96, 576, 2540)
    }

    #[test]
    fn page_is_sized_from_printable_width_and_roll_length() {
        let dir = tempfile::tempdir().unwrap();
        let s = surface(dir.path());
        let (width, height) = s.page_size();
        assert_eq!(width, 432.0);
        assert_eq!(height, 720.0);
    }

    #[test]
    fn drawing_before_page_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = surface(dir.path());
        s.start_doc("job").unwrap();
        let err = s.move_to(0, 0).unwrap_err();
        assert!(matches!(err, RenderError::Primitive { primitive: "move_to", .. }));
    }

    #[test]
    fn unfinished_job_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = surface(dir.path());
        s.start_doc("job").unwrap();
        s.start_page().unwrap();
        s.release().unwrap();
        assert!(!s.output().exists());
        assert_eq!(s.start_doc("again"), Err(RenderError::Released));
    }

    #[test]
    fn finished_job_is_a_loadable_single_page_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = surface(dir.path());
        s.start_doc("job").unwrap();
        s.start_page().unwrap();
        s.select_font(&FontSpec::new("Tahoma", 28, 700)).unwrap();
        s.set_text_align(TextAlign::Center).unwrap();
        s.text_out(288, 20, "Total 1,500").unwrap();
        s.move_to(20, 100).unwrap();
        s.line_to(556, 100).unwrap();
        s.end_page().unwrap();
        s.end_doc().unwrap();
        s.release().unwrap();

        let doc = Document::load(s.output()).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let operators: Vec<&str> = content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect();
        assert!(operators.contains(&"Tj") || operators.contains(&"TJ"));
        assert!(operators.contains(&"l"));
    }

    #[test]
    fn non_latin_labels_round_trip_through_to_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = surface(dir.path());
        s.start_doc("job").unwrap();
        s.start_page().unwrap();
        s.select_font(&FontSpec::new("Tahoma", 28, 400)).unwrap();
        s.set_text_align(TextAlign::Right).unwrap();
        s.text_out(556, 20, "Итого").unwrap();
        s.text_out(556, 60, "المجموع").unwrap();
        s.end_page().unwrap();
        s.end_doc().unwrap();

        let doc = Document::load(s.output()).unwrap();
        let fonts = doc.get_page_fonts(doc.page_iter().next().unwrap()).unwrap();
        let font = fonts.get(b"F1".as_slice()).unwrap();
        assert_eq!(font.get(b"Subtype").unwrap().as_name().unwrap(), b"Type0");
        assert!(font.has(b"ToUnicode"));

        let text: String = doc
            .extract_text(&[1])
            .unwrap()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(text.contains("Итого"), "extracted {text:?}");
        // Arabic glyphs are stored in visual order.
        let visual: String = "المجموع".chars().rev().collect();
        assert!(text.contains(&visual), "extracted {text:?}");
        assert!(!text.contains('?'));
    }

    #[test]
    fn right_aligned_text_ends_at_its_anchor() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = surface(dir.path());
        s.start_doc("job").unwrap();
        s.start_page().unwrap();
        s.select_font(&FontSpec::new("Tahoma", 28, 400)).unwrap();
        s.set_text_align(TextAlign::Right).unwrap();
        s.text_out(576, 0, "Итого").unwrap();

        let shaped = fonts::shape(FaceStyle::Regular, "Итого").unwrap();
        let size = px_to_pt(28, 96);
        let expected = 432.0 - shaped.width() * size / 1000.0;
        let td = s
            .content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        let x = td.operands[0].as_float().unwrap();
        assert!((x - expected).abs() < 0.01, "{x} != {expected}");
    }
}
