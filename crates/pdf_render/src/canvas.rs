//! Page canvas
//!
//! A per-page drawing surface with the y axis growing downward from the top
//! of the page, matching the layout engine's coordinates. The flip against
//! the page height happens here, at emission, so text stays upright.
//!
//! Fill alpha is expressed through named ExtGState resources; the canvas
//! records every alpha it used so the writer can build the page's resource
//! dictionary.

use crate::content::ContentStream;
use crate::document::PageSize;
use crate::fonts::{encode_ucs2, Font};

/// One page being drawn, in top-down coordinates.
#[derive(Debug)]
pub struct PageCanvas {
    size: PageSize,
    content: ContentStream,
    alphas: Vec<f64>,
}

impl PageCanvas {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            content: ContentStream::new(),
            alphas: Vec::new(),
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Fill alphas used on this page, in first-use order. The i-th entry
    /// corresponds to the `/GSi` graphics state.
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Set the fill opacity for subsequent text, registering a graphics
    /// state on first use.
    pub fn set_fill_alpha(&mut self, alpha: f64) {
        let index = match self
            .alphas
            .iter()
            .position(|a| a.to_bits() == alpha.to_bits())
        {
            Some(index) => index,
            None => {
                self.alphas.push(alpha);
                self.alphas.len() - 1
            }
        };
        self.content.set_graphics_state(&format!("GS{index}"));
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.content.set_line_width(width);
    }

    pub fn set_dash(&mut self, pattern: &[f64], phase: f64) {
        self.content.set_dash(pattern, phase);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.content.move_to(x, self.size.height - y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.content.line_to(x, self.size.height - y);
    }

    pub fn stroke(&mut self) {
        self.content.stroke();
    }

    /// Draw `text` with its baseline start at (x, y).
    pub fn draw_string(&mut self, font: Font, font_size: f64, x: f64, y: f64, text: &str) {
        self.content
            .begin_text()
            .set_font(font.resource_name(), font_size)
            .move_text(x, self.size.height - y);
        match font {
            Font::Latin => self.content.show_text(text),
            Font::Cjk => self.content.show_text_hex(&encode_ucs2(text)),
        };
        self.content.end_text();
    }

    /// Draw `text` horizontally centered on x, baseline at y.
    pub fn draw_centred_string(&mut self, font: Font, font_size: f64, x: f64, y: f64, text: &str) {
        let width = font.text_width(text, font_size);
        self.draw_string(font, font_size, x - width / 2.0, y, text);
    }

    pub fn into_content(self) -> ContentStream {
        self.content
    }

    #[cfg(test)]
    pub(crate) fn content_text(&self) -> String {
        String::from_utf8_lossy(self.content.as_bytes()).into_owned()
    }
}
