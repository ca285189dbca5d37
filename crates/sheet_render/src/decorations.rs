//! Static page decorations
//!
//! The opening block drawn once at the top of page 1 and the footer drawn
//! on every page.

use pdf_render::{Font, PageCanvas};

/// Fixed label in every footer
pub const FOOTER_LABEL: &str = "汉字练习纸";

const NAME_LABEL_CJK: &str = "姓名";
const NAME_LABEL_LATIN: &str = "(Name): ";

/// Draw the title block and the name-entry line.
pub fn draw_opening(canvas: &mut PageCanvas, latin_title: &str, cjk_title: &str) {
    let center = canvas.size().width / 2.0;

    canvas.draw_centred_string(Font::Latin, 15.0, center, 90.0, latin_title);
    canvas.draw_centred_string(Font::Cjk, 15.0, center, 70.0, cjk_title);

    canvas.draw_centred_string(Font::Cjk, 12.0, 62.0, 130.0, NAME_LABEL_CJK);
    canvas.draw_centred_string(Font::Latin, 15.0, 105.0, 130.0, NAME_LABEL_LATIN);

    canvas.set_dash(&[], 0.0);
    canvas.set_line_width(0.3);
    canvas.move_to(135.0, 130.0);
    canvas.line_to(540.0, 130.0);
    canvas.stroke();
}

/// Draw the page indicator, the fixed label, and the separator rule.
pub fn draw_footer(canvas: &mut PageCanvas, page: usize, total: usize) {
    canvas.draw_string(
        Font::Latin,
        10.0,
        482.0,
        800.0,
        &format!("(Page {page} of {total})"),
    );
    canvas.draw_string(Font::Cjk, 10.0, 425.0, 800.0, FOOTER_LABEL);

    canvas.set_dash(&[], 0.0);
    canvas.set_line_width(0.5);
    canvas.move_to(50.0, 785.0);
    canvas.line_to(540.0, 785.0);
    canvas.stroke();
}
