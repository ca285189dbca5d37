//! Fonts
//!
//! Two fonts cover everything a practice sheet shows: Helvetica (built-in
//! Type1, WinAnsi) for Latin decorations, and STSong-Light as a predefined
//! CID-keyed font from the Adobe-GB1 collection for Chinese glyphs and
//! pinyin. The CID font is declared, not embedded; viewers supply the
//! standard CJK collections. CJK text is shown as UTF-16BE hex strings via
//! the UniGB-UCS2-H encoding.

use crate::objects::{Dict, Object};

/// The fonts available on every page, by resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica, resource `/F1`
    Latin,
    /// STSong-Light, resource `/F2`
    Cjk,
}

impl Font {
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Latin => "F1",
            Font::Cjk => "F2",
        }
    }

    /// Estimated width of `text` at `size`, for centering.
    ///
    /// Fixed-metric approximation: Helvetica averages half an em per
    /// character; the CID font is a full em for full-width characters and
    /// half an em for ASCII.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        match self {
            Font::Latin => text.chars().count() as f64 * 0.5 * size,
            Font::Cjk => text
                .chars()
                .map(|c| if c.is_ascii() { 0.5 } else { 1.0 })
                .sum::<f64>()
                * size,
        }
    }
}

/// Parameters of a predefined CID-keyed font.
#[derive(Debug, Clone)]
pub struct CidFont {
    pub base_font: &'static str,
    pub encoding: &'static str,
    pub registry: &'static str,
    pub ordering: &'static str,
    pub supplement: i64,
    pub flags: i64,
    pub font_bbox: [i64; 4],
    pub italic_angle: i64,
    pub ascent: i64,
    pub descent: i64,
    pub cap_height: i64,
    pub stem_v: i64,
    /// Default glyph width (1000 = one em)
    pub default_width: i64,
    /// Width applied to the proportional ASCII CID range
    pub ascii_width: i64,
}

/// STSong-Light from the Adobe-GB1-2 collection, simplified Chinese.
pub fn stsong_light() -> CidFont {
    CidFont {
        base_font: "STSong-Light",
        encoding: "UniGB-UCS2-H",
        registry: "Adobe",
        ordering: "GB1",
        supplement: 2,
        flags: 4,
        font_bbox: [-25, -254, 1000, 880],
        italic_angle: 0,
        ascent: 880,
        descent: -254,
        cap_height: 880,
        stem_v: 58,
        default_width: 1000,
        ascii_width: 500,
    }
}

/// The Helvetica font dictionary.
pub fn latin_font_dict() -> Dict {
    let mut dict = Dict::of_type("Font");
    dict.set("Subtype", Object::name("Type1"));
    dict.set("BaseFont", Object::name("Helvetica"));
    dict.set("Encoding", Object::name("WinAnsiEncoding"));
    dict
}

/// The Type0 (composite) font dictionary pointing at its descendant.
pub fn type0_font_dict(font: &CidFont, descendant_ref: u32) -> Dict {
    let mut dict = Dict::of_type("Font");
    dict.set("Subtype", Object::name("Type0"));
    dict.set("BaseFont", Object::name(font.base_font));
    dict.set("Encoding", Object::name(font.encoding));
    dict.set(
        "DescendantFonts",
        Object::Array(vec![Object::Ref(descendant_ref)]),
    );
    dict
}

/// The CIDFontType0 descendant dictionary.
pub fn cid_font_dict(font: &CidFont, descriptor_ref: u32) -> Dict {
    let mut system_info = Dict::new();
    system_info.set("Registry", Object::literal(font.registry));
    system_info.set("Ordering", Object::literal(font.ordering));
    system_info.set("Supplement", Object::Integer(font.supplement));

    let mut dict = Dict::of_type("Font");
    dict.set("Subtype", Object::name("CIDFontType0"));
    dict.set("BaseFont", Object::name(font.base_font));
    dict.set("CIDSystemInfo", Object::Dict(system_info));
    dict.set("FontDescriptor", Object::Ref(descriptor_ref));
    dict.set("DW", Object::Integer(font.default_width));
    // CIDs 1..95 are the proportional ASCII range of Adobe-GB1.
    dict.set(
        "W",
        Object::Array(vec![
            Object::Integer(1),
            Object::Integer(95),
            Object::Integer(font.ascii_width),
        ]),
    );
    dict
}

/// The font descriptor the format requires even for non-embedded fonts.
pub fn font_descriptor_dict(font: &CidFont) -> Dict {
    let mut dict = Dict::of_type("FontDescriptor");
    dict.set("FontName", Object::name(font.base_font));
    dict.set("Flags", Object::Integer(font.flags));
    dict.set(
        "FontBBox",
        Object::Array(font.font_bbox.iter().map(|&v| Object::Integer(v)).collect()),
    );
    dict.set("ItalicAngle", Object::Integer(font.italic_angle));
    dict.set("Ascent", Object::Integer(font.ascent));
    dict.set("Descent", Object::Integer(font.descent));
    dict.set("CapHeight", Object::Integer(font.cap_height));
    dict.set("StemV", Object::Integer(font.stem_v));
    dict
}

/// Encode text as UTF-16BE for the UniGB-UCS2-H encoding.
pub fn encode_ucs2(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}
