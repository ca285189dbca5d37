//! Sheet Layout - pagination arithmetic and box geometry
//!
//! This crate computes where everything on a practice sheet goes before any
//! drawing happens: how many pages an input needs, which page and vertical
//! offset a row lands on, the horizontal offsets of character columns, and
//! the per-column fade.

mod config;
mod paginator;

pub use config::*;
pub use paginator::*;
