//! Box drawing
//!
//! One shared primitive draws the subdivided practice cell (inner 3x3 grid
//! plus the centered guide glyph); the character box and the phrase box
//! both build on it.

use pdf_render::{Font, PageCanvas};
use sheet_layout::SheetLayout;
use sheet_model::PhraseSlot;

const GLYPH_SIZE: f64 = 25.0;
const LABEL_SIZE: f64 = 11.0;
/// Distance of the label baseline above the box top
const LABEL_RISE: f64 = 3.0;
const BOX_LINE_WIDTH: f64 = 0.3;
/// Dash for outer box edges
const OUTER_DASH: [f64; 1] = [2.0];
/// Dash (and phase) for the inner grid
const INNER_DASH: [f64; 1] = [1.0];
const INNER_DASH_PHASE: f64 = 2.0;

/// Draw the inner 3x3 dashed grid inset by the inner padding, then the
/// guide glyph centered in it. `(x, y)` is the top-left corner of the
/// surrounding outer box.
pub fn draw_subdivided_cell(canvas: &mut PageCanvas, layout: &SheetLayout, x: f64, y: f64, glyph: &str) {
    let left = x + layout.inner_padding;
    let right = x + layout.outer_width - layout.inner_padding;
    let top = y + layout.inner_padding;
    let bottom = y + layout.outer_height - layout.inner_padding;

    canvas.set_dash(&INNER_DASH, INNER_DASH_PHASE);
    canvas.set_line_width(BOX_LINE_WIDTH);

    canvas.move_to(left, top);
    canvas.line_to(right, top);
    canvas.line_to(right, bottom);
    canvas.line_to(left, bottom);
    canvas.line_to(left, top);

    for row in 1..3 {
        let grid_y = top + row as f64 * layout.cell_height;
        canvas.move_to(left, grid_y);
        canvas.line_to(right, grid_y);
    }
    for col in 1..3 {
        let grid_x = left + col as f64 * layout.cell_width;
        canvas.move_to(grid_x, top);
        canvas.line_to(grid_x, bottom);
    }
    canvas.stroke();

    canvas.draw_centred_string(
        Font::Cjk,
        GLYPH_SIZE,
        layout.glyph_center_x(x),
        layout.glyph_baseline_y(y),
        glyph,
    );
}

/// Draw one character practice box at `(x, y)`: pinyin label above, dashed
/// outer square, subdivided cell, glyph.
pub fn draw_character_box(
    canvas: &mut PageCanvas,
    layout: &SheetLayout,
    x: f64,
    y: f64,
    pinyin: &str,
    glyph: &str,
) {
    canvas.draw_centred_string(
        Font::Cjk,
        LABEL_SIZE,
        x + layout.outer_width / 2.0,
        y - LABEL_RISE,
        pinyin,
    );

    draw_outer_rect(canvas, x, y, layout.outer_width, layout.outer_height);
    draw_subdivided_cell(canvas, layout, x, y, glyph);
}

/// Draw one phrase practice row starting at the layout's horizontal origin:
/// pinyin label above, one long dashed rectangle, then a subdivided cell per
/// non-blank slot. Returns the final horizontal cursor position.
pub fn draw_phrase_box(
    canvas: &mut PageCanvas,
    layout: &SheetLayout,
    y: f64,
    pinyin: &str,
    slots: &[PhraseSlot],
) -> f64 {
    canvas.draw_string(Font::Cjk, LABEL_SIZE, layout.hor_start, y - LABEL_RISE, pinyin);

    draw_outer_rect(canvas, layout.hor_start, y, layout.phrase_box_width, layout.outer_height);

    let mut cursor = layout.hor_start;
    for slot in slots {
        match slot {
            PhraseSlot::Glyph(glyph) => {
                draw_subdivided_cell(canvas, layout, cursor, y, glyph);
            }
            PhraseSlot::Blank => {
                cursor += layout.phrase_blank_width;
            }
        }
        cursor += layout.outer_width - layout.phrase_inner_padding;
    }
    cursor
}

fn draw_outer_rect(canvas: &mut PageCanvas, x: f64, y: f64, width: f64, height: f64) {
    canvas.set_dash(&OUTER_DASH, 0.0);
    canvas.set_line_width(BOX_LINE_WIDTH);
    canvas.move_to(x, y);
    canvas.line_to(x + width, y);
    canvas.line_to(x + width, y + height);
    canvas.line_to(x, y + height);
    canvas.line_to(x, y);
    canvas.stroke();
}
