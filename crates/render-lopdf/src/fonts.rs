//! Embedded TrueType faces, shaped with `rustybuzz` and written as Type0
//! fonts so any script the face covers survives into the spooled PDF.

use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use rollprint_layout::FontSpec;
use rustybuzz::{Face, UnicodeBuffer};
use std::collections::BTreeMap;
use ttf_parser::GlyphId;

static REGULAR_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
static BOLD_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

/// PDF glyph space: widths are given per 1000 units of text space.
const GLYPH_SPACE: f32 = 1000.0;

/// The two faces every spooled job can draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FaceStyle {
    Regular,
    Bold,
}

impl FaceStyle {
    pub fn for_font(font: &FontSpec) -> Self {
        if font.is_bold() {
            FaceStyle::Bold
        } else {
            FaceStyle::Regular
        }
    }

    /// Name of the font in the page resources.
    pub fn resource(self) -> &'static str {
        match self {
            FaceStyle::Regular => "F1",
            FaceStyle::Bold => "F2",
        }
    }

    fn postscript_name(self) -> &'static str {
        match self {
            FaceStyle::Regular => "DejaVuSans",
            FaceStyle::Bold => "DejaVuSans-Bold",
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            FaceStyle::Regular => REGULAR_DATA,
            FaceStyle::Bold => BOLD_DATA,
        }
    }

    pub(crate) fn face(self) -> Result<Face<'static>, String> {
        Face::from_slice(self.data(), 0)
            .ok_or_else(|| format!("embedded face {} is unreadable", self.postscript_name()))
    }
}

/// One positioned glyph, in glyph space units.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedGlyph {
    pub id: u16,
    /// Advance the shaper chose for this occurrence.
    pub advance: f32,
    /// Advance stored in the face's `hmtx`, which is what the `W` array says.
    pub default_advance: f32,
    /// Source text of the cluster this glyph belongs to.
    pub text: String,
}

/// A run of glyphs in visual order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapedText {
    pub glyphs: Vec<ShapedGlyph>,
}

impl ShapedText {
    /// Total advance in glyph space units; multiply by `size / 1000` for points.
    pub fn width(&self) -> f32 {
        self.glyphs.iter().map(|g| g.advance).sum()
    }

    pub fn has_missing_glyphs(&self) -> bool {
        self.glyphs.iter().any(|g| g.id == 0)
    }

    /// The glyph ids as a two-byte Identity-H string.
    fn encode(glyphs: &[ShapedGlyph]) -> Object {
        let bytes = glyphs.iter().flat_map(|g| g.id.to_be_bytes()).collect();
        Object::String(bytes, StringFormat::Hexadecimal)
    }

    /// Operands for the text showing operator: a plain `Tj` string when the
    /// shaper kept every `hmtx` advance, otherwise a `TJ` array carrying the
    /// corrections.
    pub fn show_operation(&self) -> (&'static str, Vec<Object>) {
        let adjusted = self
            .glyphs
            .iter()
            .any(|g| (g.default_advance - g.advance).abs() >= 0.5);
        if !adjusted {
            return ("Tj", vec![Self::encode(&self.glyphs)]);
        }

        let mut parts = Vec::new();
        let mut start = 0;
        for (i, glyph) in self.glyphs.iter().enumerate() {
            let correction = glyph.default_advance - glyph.advance;
            if correction.abs() >= 0.5 {
                parts.push(Self::encode(&self.glyphs[start..=i]));
                parts.push(Object::Real(correction));
                start = i + 1;
            }
        }
        if start < self.glyphs.len() {
            parts.push(Self::encode(&self.glyphs[start..]));
        }
        ("TJ", vec![Object::Array(parts)])
    }
}

/// Shapes `text` with `style`, letting the shaper guess script and direction.
pub fn shape(style: FaceStyle, text: &str) -> Result<ShapedText, String> {
    let face = style.face()?;
    let scale = GLYPH_SPACE / face.units_per_em() as f32;

    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    buffer.guess_segment_properties();
    let output = rustybuzz::shape(&face, &[], buffer);

    let mut starts: Vec<usize> = output
        .glyph_infos()
        .iter()
        .map(|info| info.cluster as usize)
        .collect();
    starts.sort_unstable();
    starts.dedup();
    let cluster_text = |start: usize| {
        let end = starts
            .iter()
            .copied()
            .find(|&s| s > start)
            .unwrap_or(text.len());
        text.get(start..end).unwrap_or_default().to_string()
    };

    let glyphs = output
        .glyph_infos()
        .iter()
        .zip(output.glyph_positions())
        .map(|(info, pos)| {
            let id = u16::try_from(info.glyph_id).unwrap_or(0);
            let default_advance = face.glyph_hor_advance(GlyphId(id)).unwrap_or(0);
            ShapedGlyph {
                id,
                advance: pos.x_advance as f32 * scale,
                default_advance: default_advance as f32 * scale,
                text: cluster_text(info.cluster as usize),
            }
        })
        .collect();
    Ok(ShapedText { glyphs })
}

/// Glyphs a job drew with one face: id to (`hmtx` width, source text).
#[derive(Debug, Clone, Default)]
pub struct FaceUsage {
    glyphs: BTreeMap<u16, (f32, String)>,
}

impl FaceUsage {
    pub fn record(&mut self, shaped: &ShapedText) {
        for glyph in &shaped.glyphs {
            self.glyphs
                .entry(glyph.id)
                .or_insert_with(|| (glyph.default_advance, glyph.text.clone()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    fn widths(&self) -> Vec<Object> {
        let mut w = Vec::with_capacity(self.glyphs.len() * 2);
        for (id, (width, _)) in &self.glyphs {
            w.push(Object::Integer(i64::from(*id)));
            w.push(Object::Array(vec![Object::Real(*width)]));
        }
        w
    }

    fn to_unicode(&self) -> String {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
        );
        let mapped: Vec<_> = self
            .glyphs
            .iter()
            .filter(|(_, (_, text))| !text.is_empty())
            .collect();
        for chunk in mapped.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for (id, (_, text)) in chunk {
                let utf16: String = text.encode_utf16().map(|u| format!("{u:04X}")).collect();
                cmap.push_str(&format!("<{id:04X}> <{utf16}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
        cmap
    }
}

/// Writes `style` into `document` as a Type0 font with an embedded
/// `FontFile2`, a `W` array for the used glyphs and a `ToUnicode` map.
pub fn embed(
    document: &mut Document,
    style: FaceStyle,
    usage: &FaceUsage,
) -> Result<ObjectId, String> {
    let face = style.face()?;
    let scale = GLYPH_SPACE / face.units_per_em() as f32;
    let scaled = |v: i16| (f32::from(v) * scale).round() as i64;
    let data = style.data();
    let name = style.postscript_name();

    let mut file = Stream::new(dictionary! { "Length1" => data.len() as i64 }, data.to_vec());
    file.compress().map_err(|e| format!("compressing {name}: {e}"))?;
    let file_id = document.add_object(file);

    let bbox = face.global_bounding_box();
    let descriptor_id = document.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => name,
        "Flags" => 32,
        "FontBBox" => vec![
            scaled(bbox.x_min).into(),
            scaled(bbox.y_min).into(),
            scaled(bbox.x_max).into(),
            scaled(bbox.y_max).into(),
        ],
        "ItalicAngle" => 0,
        "Ascent" => scaled(face.ascender()),
        "Descent" => scaled(face.descender()),
        "CapHeight" => scaled(face.capital_height().unwrap_or(face.ascender())),
        "StemV" => if style == FaceStyle::Bold { 120 } else { 80 },
        "FontFile2" => file_id,
    });

    let cid_font_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => name,
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor_id,
        "W" => usage.widths(),
        "CIDToGIDMap" => "Identity",
    });

    let to_unicode_id = document.add_object(Stream::new(
        dictionary! {},
        usage.to_unicode().into_bytes(),
    ));

    Ok(document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => name,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![Object::Reference(cid_font_id)],
        "ToUnicode" => to_unicode_id,
    }))
}
