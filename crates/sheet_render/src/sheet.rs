//! Page composer
//!
//! Walks the input rows, asks the layout engine where each row lands,
//! draws it with the per-column fade, and finalizes pages with their
//! decorations. Both sheet kinds paginate the same way; in phrase mode
//! every vertical repeat counts as one row against page capacity.

use pdf_render::{Document, DocumentInfo, PageCanvas, PageSize, Result};
use sheet_layout::SheetLayout;
use sheet_model::{CharacterRow, PhraseRow};

use crate::boxes::{draw_character_box, draw_phrase_box};
use crate::decorations::{draw_footer, draw_opening};
use crate::options::SheetOptions;

const DEFAULT_CJK_TITLE: &str = "汉字练习纸";
const DEFAULT_CHARACTER_TITLE: &str = "Chinese Character Writing Sheet";
const DEFAULT_PHRASE_TITLE: &str = "Chinese Phrase Writing Sheet";

/// Render a character sheet to PDF bytes.
pub fn character_sheet(
    rows: &[CharacterRow],
    layout: &SheetLayout,
    options: &SheetOptions,
) -> Result<Vec<u8>> {
    let mut composer = Composer::new(layout, options, DEFAULT_CHARACTER_TITLE, rows.len());
    tracing::info!(
        "Rendering character sheet: {} rows over {} pages",
        rows.len(),
        composer.total_pages
    );

    for (index, row) in rows.iter().enumerate() {
        let canvas = composer.canvas_for_row(index);
        for col in 0..layout.columns {
            canvas.set_fill_alpha(layout.fade(col));
            draw_character_box(
                canvas,
                layout,
                layout.column_x(col),
                layout.row_slot(index).y,
                &row.pinyin,
                &row.glyph,
            );
        }
    }

    composer.finish()
}

/// Render a phrase sheet to PDF bytes. Each input phrase is repeated
/// vertically with the same fade curve character columns use.
pub fn phrase_sheet(
    rows: &[PhraseRow],
    layout: &SheetLayout,
    options: &SheetOptions,
) -> Result<Vec<u8>> {
    let total_rows = rows.len() * layout.repeats;
    let mut composer = Composer::new(layout, options, DEFAULT_PHRASE_TITLE, total_rows);
    tracing::info!(
        "Rendering phrase sheet: {} phrases over {} pages",
        rows.len(),
        composer.total_pages
    );

    for (phrase_index, row) in rows.iter().enumerate() {
        for repeat in 0..layout.repeats {
            let index = phrase_index * layout.repeats + repeat;
            let y = layout.row_slot(index).y;
            let canvas = composer.canvas_for_row(index);
            canvas.set_fill_alpha(layout.fade(repeat));
            draw_phrase_box(canvas, layout, y, &row.pinyin, &row.slots);
        }
    }

    composer.finish()
}

/// Shared page bookkeeping for both sheet kinds.
struct Composer<'a> {
    layout: &'a SheetLayout,
    options: &'a SheetOptions,
    total_pages: usize,
    pages: Vec<PageCanvas>,
    latin_title: String,
}

impl<'a> Composer<'a> {
    fn new(
        layout: &'a SheetLayout,
        options: &'a SheetOptions,
        default_title: &str,
        total_rows: usize,
    ) -> Self {
        let latin_title = options
            .latin_title
            .clone()
            .unwrap_or_else(|| default_title.to_string());
        let mut composer = Self {
            layout,
            options,
            total_pages: layout.page_count(total_rows),
            pages: Vec::new(),
            latin_title,
        };
        composer.open_page();
        composer
    }

    /// Canvas for the page the given row lands on, opening pages as needed.
    fn canvas_for_row(&mut self, index: usize) -> &mut PageCanvas {
        let page = self.layout.row_slot(index).page;
        while page >= self.pages.len() {
            self.open_page();
        }
        &mut self.pages[page]
    }

    fn open_page(&mut self) {
        let mut canvas = PageCanvas::new(PageSize::new(
            self.layout.page_width,
            self.layout.page_height,
        ));
        if self.pages.is_empty() {
            let cjk_title = self
                .options
                .cjk_title
                .as_deref()
                .unwrap_or(DEFAULT_CJK_TITLE);
            draw_opening(&mut canvas, &self.latin_title, cjk_title);
        }
        draw_footer(&mut canvas, self.pages.len() + 1, self.total_pages);
        tracing::debug!("Opened page {} of {}", self.pages.len() + 1, self.total_pages);
        self.pages.push(canvas);
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        // A trailing break on an exactly-filled page still opens a page.
        while self.pages.len() < self.total_pages {
            self.open_page();
        }

        let info = DocumentInfo::new().with_title(self.latin_title.as_str());
        let mut document = Document::new(info);
        document.set_compression(self.options.compress);
        for page in self.pages {
            document.add_page(page);
        }
        document.to_bytes()
    }
}
