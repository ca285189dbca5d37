//! Document structure
//!
//! Page size, the info dictionary, and the catalog/page-tree dictionaries
//! that tie a file together.

use chrono::Utc;

use crate::objects::{Dict, Object};

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// ISO A4 (210mm x 297mm at 72 dpi)
    pub fn a4() -> Self {
        Self::new(595.276, 841.89)
    }

    /// The `/MediaBox` array for this size.
    pub fn media_box(&self) -> Object {
        Object::Array(vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(self.width),
            Object::Real(self.height),
        ])
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

/// Document metadata written to the info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// PDF date string (`D:YYYYMMDDHHmmSSZ`); filled at construction
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            title: None,
            author: None,
            creator: Some("sheetgen".to_string()),
            producer: Some("sheetgen pdf_render".to_string()),
            creation_date: Some(format!("D:{}Z", Utc::now().format("%Y%m%d%H%M%S"))),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(title) = &self.title {
            dict.set("Title", Object::literal(title));
        }
        if let Some(author) = &self.author {
            dict.set("Author", Object::literal(author));
        }
        if let Some(creator) = &self.creator {
            dict.set("Creator", Object::literal(creator));
        }
        if let Some(producer) = &self.producer {
            dict.set("Producer", Object::literal(producer));
        }
        if let Some(date) = &self.creation_date {
            dict.set("CreationDate", Object::literal(date));
        }
        dict
    }
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// The document catalog (root object).
pub fn catalog_dict(pages_ref: u32) -> Dict {
    let mut dict = Dict::of_type("Catalog");
    dict.set("Pages", Object::Ref(pages_ref));
    dict
}

/// The page-tree root listing every page.
pub fn page_tree_dict(page_refs: &[u32]) -> Dict {
    let mut dict = Dict::of_type("Pages");
    dict.set(
        "Kids",
        Object::Array(page_refs.iter().map(|&r| Object::Ref(r)).collect()),
    );
    dict.set("Count", Object::Integer(page_refs.len() as i64));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let a4 = PageSize::a4();
        assert_eq!(a4.width, 595.276);
        assert_eq!(a4.height, 841.89);
    }

    #[test]
    fn test_info_dict() {
        let info = DocumentInfo::new().with_title("Practice sheet");
        let dict = info.to_dict();
        assert!(dict.get("Title").is_some());
        assert!(dict.get("Creator").is_some());
        assert!(dict.get("CreationDate").is_some());
        assert!(dict.get("Author").is_none());
    }

    #[test]
    fn test_catalog_and_page_tree() {
        let catalog = catalog_dict(2);
        assert!(matches!(catalog.get("Pages"), Some(Object::Ref(2))));

        let tree = page_tree_dict(&[4, 6, 8]);
        assert!(matches!(tree.get("Count"), Some(Object::Integer(3))));
    }
}
