//! Content stream builder
//!
//! Emits the operator subset the sheet renderer uses:
//!
//! - graphics state: `q`/`Q`, `w` (line width), `d` (dash), `gs` (named state)
//! - paths: `m`, `l`, `S`
//! - text: `BT`/`ET`, `Tf`, `Td`, `Tj` (literal and hex strings)

use std::io::Write;

use crate::objects::format_real;

/// Builder for one page's content stream.
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Save the graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.put(format_args!("q\n"))
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.put(format_args!("Q\n"))
    }

    /// Set the line width (w)
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.put(format_args!("{} w\n", format_real(width)))
    }

    /// Set the dash pattern (d)
    pub fn set_dash(&mut self, pattern: &[f64], phase: f64) -> &mut Self {
        self.data.push(b'[');
        for (i, value) in pattern.iter().enumerate() {
            if i > 0 {
                self.data.push(b' ');
            }
            self.data.extend_from_slice(format_real(*value).as_bytes());
        }
        self.put(format_args!("] {} d\n", format_real(phase)))
    }

    /// Install a named graphics state from the page resources (gs)
    pub fn set_graphics_state(&mut self, name: &str) -> &mut Self {
        self.put(format_args!("/{name} gs\n"))
    }

    /// Begin a path at a point (m)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.put(format_args!("{} {} m\n", format_real(x), format_real(y)))
    }

    /// Append a line segment (l)
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.put(format_args!("{} {} l\n", format_real(x), format_real(y)))
    }

    /// Stroke the current path (S)
    pub fn stroke(&mut self) -> &mut Self {
        self.put(format_args!("S\n"))
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.put(format_args!("BT\n"))
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.put(format_args!("ET\n"))
    }

    /// Select a font from the page resources (Tf)
    pub fn set_font(&mut self, name: &str, size: f64) -> &mut Self {
        self.put(format_args!("/{name} {} Tf\n", format_real(size)))
    }

    /// Move the text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.put(format_args!("{} {} Td\n", format_real(tx), format_real(ty)))
    }

    /// Show a literal text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.data.push(b'(');
        for byte in text.bytes() {
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                _ => self.data.push(byte),
            }
        }
        self.put(format_args!(") Tj\n"))
    }

    /// Show a hex text string (Tj), e.g. UTF-16BE codes for a CID font
    pub fn show_text_hex(&mut self, codes: &[u8]) -> &mut Self {
        self.data.push(b'<');
        for byte in codes {
            let _ = write!(self.data, "{byte:02X}");
        }
        self.put(format_args!("> Tj\n"))
    }

    fn put(&mut self, args: std::fmt::Arguments<'_>) -> &mut Self {
        // Writing to a Vec cannot fail.
        let _ = self.data.write_fmt(args);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(cs: ContentStream) -> String {
        String::from_utf8(cs.into_bytes()).unwrap()
    }

    #[test]
    fn test_path_ops() {
        let mut cs = ContentStream::new();
        cs.set_line_width(0.3)
            .set_dash(&[2.0], 0.0)
            .move_to(50.0, 100.0)
            .line_to(90.0, 100.0)
            .stroke();
        let text = text_of(cs);
        assert!(text.contains("0.3 w\n"));
        assert!(text.contains("[2] 0 d\n"));
        assert!(text.contains("50 100 m\n"));
        assert!(text.contains("90 100 l\n"));
        assert!(text.contains("S\n"));
    }

    #[test]
    fn test_dash_with_phase() {
        let mut cs = ContentStream::new();
        cs.set_dash(&[1.0], 2.0);
        assert!(text_of(cs).contains("[1] 2 d\n"));
    }

    #[test]
    fn test_graphics_state() {
        let mut cs = ContentStream::new();
        cs.save_state().set_graphics_state("GS0").restore_state();
        let text = text_of(cs);
        assert!(text.contains("q\n"));
        assert!(text.contains("/GS0 gs\n"));
        assert!(text.contains("Q\n"));
    }

    #[test]
    fn test_literal_text() {
        let mut cs = ContentStream::new();
        cs.begin_text()
            .set_font("F1", 10.0)
            .move_text(482.0, 41.89)
            .show_text("(Page 1 of 2)")
            .end_text();
        let text = text_of(cs);
        assert!(text.contains("BT\n"));
        assert!(text.contains("/F1 10 Tf\n"));
        assert!(text.contains("482 41.89 Td\n"));
        assert!(text.contains(r"(\(Page 1 of 2\)) Tj"));
        assert!(text.contains("ET\n"));
    }

    #[test]
    fn test_hex_text() {
        let mut cs = ContentStream::new();
        cs.show_text_hex(&[0x4F, 0x60]);
        assert!(text_of(cs).contains("<4F60> Tj\n"));
    }
}
