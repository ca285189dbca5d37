//! Sheet options

use serde::{Deserialize, Serialize};

/// Presentation options for a generated sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetOptions {
    /// Latin title of the opening block; defaults per sheet kind
    pub latin_title: Option<String>,
    /// CJK title of the opening block
    pub cjk_title: Option<String>,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            latin_title: None,
            cjk_title: None,
            compress: true,
        }
    }
}

impl SheetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latin_title(mut self, title: impl Into<String>) -> Self {
        self.latin_title = Some(title.into());
        self
    }

    pub fn with_cjk_title(mut self, title: impl Into<String>) -> Self {
        self.cjk_title = Some(title.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
