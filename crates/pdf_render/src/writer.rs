//! PDF writer
//!
//! The low-level file structure (header, numbered indirect objects,
//! cross-reference table, trailer) and the document assembly that turns
//! finished page canvases into a complete file.

use std::io::Write;

use crate::canvas::PageCanvas;
use crate::document::{catalog_dict, page_tree_dict, DocumentInfo};
use crate::error::{PdfError, Result};
use crate::fonts::{
    cid_font_dict, font_descriptor_dict, latin_font_dict, stsong_light, type0_font_dict, Font,
};
use crate::objects::{Dict, Object, Stream};

/// Low-level writer tracking byte offsets for the cross-reference table.
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    offsets: Vec<(u32, u64)>,
    next_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Reserve the next object number.
    pub fn allocate(&mut self) -> u32 {
        let num = self.next_num;
        self.next_num += 1;
        num
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.4\n")?;
        // Binary marker so transports treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object.
    pub fn write_object(&mut self, num: u32, object: &Object) -> Result<()> {
        self.offsets.push((num, self.position));
        self.write_bytes(format!("{num} 0 obj\n").as_bytes())?;
        let mut body = Vec::new();
        object.write_to(&mut body);
        self.write_bytes(&body)?;
        self.write_bytes(b"\nendobj\n")
    }

    /// Write a stream object, compressing its data if enabled.
    pub fn write_stream(&mut self, num: u32, mut stream: Stream) -> Result<()> {
        if self.compress {
            stream.data = deflate(&stream.data)?;
            stream.dict.set("Filter", Object::name("FlateDecode"));
        }
        stream
            .dict
            .set("Length", Object::Integer(stream.data.len() as i64));
        self.write_object(num, &Object::Stream(stream))
    }

    /// Write the cross-reference table, trailer, and end-of-file marker.
    pub fn write_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        self.offsets.sort_by_key(|&(num, _)| num);

        self.write_bytes(format!("xref\n0 {}\n", self.next_num).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;
        let entries: Vec<u64> = self.offsets.iter().map(|&(_, offset)| offset).collect();
        for offset in entries {
            self.write_bytes(format!("{offset:010} 00000 n \n").as_bytes())?;
        }

        let mut trailer = Dict::new();
        trailer.set("Size", Object::Integer(self.next_num as i64));
        trailer.set("Root", Object::Ref(catalog_ref));
        trailer.set("Info", Object::Ref(info_ref));
        let mut body = Vec::new();
        trailer.write_to(&mut body);

        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&body)?;
        self.write_bytes(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// A complete document: metadata plus finished page canvases.
pub struct Document {
    info: DocumentInfo,
    compress: bool,
    pages: Vec<PageCanvas>,
}

impl Document {
    pub fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            compress: true,
            pages: Vec::new(),
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    pub fn add_page(&mut self, page: PageCanvas) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document in one pass.
    pub fn write<W: Write>(self, writer: W) -> Result<()> {
        if self.pages.is_empty() {
            return Err(PdfError::InvalidDocument("no pages to write".to_string()));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate();
        let pages_ref = pdf.allocate();
        let info_ref = pdf.allocate();
        let latin_ref = pdf.allocate();
        let type0_ref = pdf.allocate();
        let cid_ref = pdf.allocate();
        let descriptor_ref = pdf.allocate();

        let mut page_refs = Vec::with_capacity(self.pages.len());
        let mut content_refs = Vec::with_capacity(self.pages.len());
        for _ in &self.pages {
            page_refs.push(pdf.allocate());
            content_refs.push(pdf.allocate());
        }

        pdf.write_object(catalog_ref, &Object::Dict(catalog_dict(pages_ref)))?;
        pdf.write_object(pages_ref, &Object::Dict(page_tree_dict(&page_refs)))?;
        pdf.write_object(info_ref, &Object::Dict(self.info.to_dict()))?;

        let cjk = stsong_light();
        pdf.write_object(latin_ref, &Object::Dict(latin_font_dict()))?;
        pdf.write_object(type0_ref, &Object::Dict(type0_font_dict(&cjk, cid_ref)))?;
        pdf.write_object(cid_ref, &Object::Dict(cid_font_dict(&cjk, descriptor_ref)))?;
        pdf.write_object(descriptor_ref, &Object::Dict(font_descriptor_dict(&cjk)))?;

        for (i, page) in self.pages.into_iter().enumerate() {
            let size = page.size();
            let alphas = page.alphas().to_vec();

            let mut page_dict = Dict::of_type("Page");
            page_dict.set("Parent", Object::Ref(pages_ref));
            page_dict.set("MediaBox", size.media_box());
            page_dict.set("Contents", Object::Ref(content_refs[i]));
            page_dict.set(
                "Resources",
                Object::Dict(page_resources(latin_ref, type0_ref, &alphas)),
            );
            pdf.write_object(page_refs[i], &Object::Dict(page_dict))?;

            let stream = Stream::new(page.into_content().into_bytes());
            pdf.write_stream(content_refs[i], stream)?;
        }

        pdf.write_trailer(catalog_ref, info_ref)?;
        pdf.finish()?;
        Ok(())
    }

    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

fn page_resources(latin_ref: u32, type0_ref: u32, alphas: &[f64]) -> Dict {
    let mut fonts = Dict::new();
    fonts.set(Font::Latin.resource_name(), Object::Ref(latin_ref));
    fonts.set(Font::Cjk.resource_name(), Object::Ref(type0_ref));

    let mut resources = Dict::new();
    resources.set("Font", Object::Dict(fonts));

    if !alphas.is_empty() {
        let mut states = Dict::new();
        for (i, alpha) in alphas.iter().enumerate() {
            let mut state = Dict::of_type("ExtGState");
            state.set("ca", Object::Real(*alpha));
            states.set(format!("GS{i}"), Object::Dict(state));
        }
        resources.set("ExtGState", Object::Dict(states));
    }

    resources.set(
        "ProcSet",
        Object::Array(vec![Object::name("PDF"), Object::name("Text")]),
    );
    resources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageSize;

    fn one_page_document(compress: bool) -> Vec<u8> {
        let mut canvas = PageCanvas::new(PageSize::a4());
        canvas.set_fill_alpha(0.5);
        canvas.draw_string(Font::Latin, 10.0, 482.0, 800.0, "(Page 1 of 1)");
        let mut doc = Document::new(DocumentInfo::new().with_title("test"));
        doc.set_compression(compress);
        doc.add_page(canvas);
        doc.to_bytes().unwrap()
    }

    #[test]
    fn test_file_structure() {
        let bytes = one_page_document(true);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Type /Pages"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("xref"));
        assert!(text.contains("trailer"));
        assert!(text.contains("startxref"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_fonts_and_states_are_declared() {
        let bytes = one_page_document(true);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/BaseFont /STSong-Light"));
        assert!(text.contains("/Encoding /UniGB-UCS2-H"));
        assert!(text.contains("/ExtGState"));
        assert!(text.contains("/ca 0.5"));
    }

    #[test]
    fn test_uncompressed_content_is_readable() {
        let bytes = one_page_document(false);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("BT\n"));
        assert!(text.contains(r"(\(Page 1 of 1\)) Tj"));
        assert!(!text.contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_compressed_content_is_not_plain() {
        let bytes = one_page_document(true);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
        assert!(!text.contains("(\\(Page 1 of 1\\)) Tj"));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let doc = Document::new(DocumentInfo::new());
        assert!(doc.to_bytes().is_err());
    }

    #[test]
    fn test_xref_entry_count_matches_objects() {
        let bytes = one_page_document(true);
        let text = String::from_utf8_lossy(&bytes);
        // 7 fixed objects + 1 page + 1 content stream, plus the free entry
        assert!(text.contains("xref\n0 10\n"));
    }
}
