//! Immutable layout configuration
//!
//! All geometric constants for both sheet shapes live here, bundled into one
//! value that is passed into the paginator and the row renderer instead of
//! being shared module state. Distances are in PDF points with the y axis
//! growing downward from the top of the page.

use serde::{Deserialize, Serialize};

/// Geometric configuration for practice sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetLayout {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Width of the outer character box
    pub outer_width: f64,
    /// Height of the outer character box
    pub outer_height: f64,
    /// Padding between the outer box and the inner 3x3 grid
    pub inner_padding: f64,
    /// Width of one inner grid cell
    pub cell_width: f64,
    /// Height of one inner grid cell
    pub cell_height: f64,
    /// Width of the outer box spanning a whole phrase row
    pub phrase_box_width: f64,
    /// Amount subtracted from the slot advance in phrase rows
    pub phrase_inner_padding: f64,
    /// Extra horizontal shift applied for a blank phrase slot (negative)
    pub phrase_blank_width: f64,
    /// Number of character slots in a phrase payload
    pub phrase_slots: usize,
    /// Horizontal position of the first column on every page
    pub hor_start: f64,
    /// Vertical position of the first row on page 1 (below the title block)
    pub first_page_vert_start: f64,
    /// Vertical position of the first row on inner pages
    pub inner_page_vert_start: f64,
    /// Distance between top-left corners of consecutive columns
    pub hor_increment: f64,
    /// Distance between top-left corners of consecutive rows
    pub vert_increment: f64,
    /// Row capacity of page 1
    pub first_page_rows: usize,
    /// Row capacity of inner pages
    pub inner_page_rows: usize,
    /// Number of practice columns per character row
    pub columns: usize,
    /// Number of vertical repeats per phrase row
    pub repeats: usize,
    /// Column span over which the fade falls from 1 to 0
    pub fade_span: f64,
}

impl Default for SheetLayout {
    fn default() -> Self {
        let outer_width = 40.0;
        let outer_height = 40.0;
        Self {
            // A4 at 72 dpi
            page_width: 595.276,
            page_height: 841.89,
            outer_width,
            outer_height,
            inner_padding: 5.0,
            cell_width: 10.0,
            cell_height: 10.0,
            phrase_box_width: 489.0,
            phrase_inner_padding: 9.0,
            phrase_blank_width: -20.0,
            phrase_slots: 12,
            hor_start: 50.0,
            first_page_vert_start: 170.0,
            inner_page_vert_start: 70.0,
            hor_increment: outer_width + 5.0,
            vert_increment: outer_height + 20.0,
            first_page_rows: 10,
            inner_page_rows: 12,
            columns: 11,
            repeats: 10,
            fade_span: 10.0,
        }
    }
}

impl SheetLayout {
    /// Fill opacity for the i-th column (or repeat): starts at 1 and falls
    /// linearly, clamped at zero.
    pub fn fade(&self, index: usize) -> f64 {
        (1.0 - index as f64 / self.fade_span).max(0.0)
    }

    /// Horizontal cursor advance after one phrase slot. A blank slot still
    /// advances, just by less.
    pub fn phrase_slot_advance(&self, blank: bool) -> f64 {
        let step = self.outer_width - self.phrase_inner_padding;
        if blank {
            self.phrase_blank_width + step
        } else {
            step
        }
    }

    /// Horizontal center of the glyph inside a box whose left edge is `box_x`.
    pub fn glyph_center_x(&self, box_x: f64) -> f64 {
        box_x + self.inner_padding + 1.5 * self.cell_width
    }

    /// Baseline of the glyph inside a box whose top edge is `box_y`.
    pub fn glyph_baseline_y(&self, box_y: f64) -> f64 {
        box_y + self.inner_padding + 2.3 * self.cell_height
    }
}
