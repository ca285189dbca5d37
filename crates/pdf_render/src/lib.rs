//! PDF Rendering Backend
//!
//! This crate emits the paginated PDF documents the sheet composer draws
//! into. It is a small, hand-written backend covering exactly what practice
//! sheets need:
//!
//! - `objects`: PDF object model (dictionaries, arrays, streams, references)
//! - `content`: content stream builder (paths, dashes, text, fill alpha)
//! - `document`: page sizes, info dictionary, catalog and page tree
//! - `fonts`: built-in Latin font plus a predefined CJK CID font
//! - `canvas`: per-page drawing surface with a top-down y axis
//! - `writer`: file structure (header, body, xref, trailer) and assembly

mod canvas;
mod content;
mod document;
mod error;
mod fonts;
mod objects;
mod writer;

pub use canvas::*;
pub use content::*;
pub use document::*;
pub use error::*;
pub use fonts::*;
pub use objects::*;
pub use writer::*;
