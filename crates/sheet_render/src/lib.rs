//! Sheet Render - row renderer and page composer
//!
//! Draws character and phrase rows onto page canvases and orchestrates
//! pagination, the opening block, and per-page footers into a finished
//! document.

mod boxes;
mod decorations;
mod options;
mod sheet;

pub use boxes::*;
pub use decorations::*;
pub use options::*;
pub use sheet::*;
