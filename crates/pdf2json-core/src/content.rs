//! The extracted document record and the extraction result that carries it.

use crate::error::PageWarning;

/// Plain text of a whole document, concatenated in page order.
///
/// Serializes as a JSON object with exactly one key, `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DocumentContent {
    /// Concatenated page text.
    pub content: String,
}

impl DocumentContent {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the text of the next page.
    ///
    /// Callers must push pages in ascending page order.
    pub fn push_page(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// The concatenated text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns true if no text has been collected.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<String> for DocumentContent {
    fn from(content: String) -> Self {
        Self { content }
    }
}

/// Outcome of one extraction pass: the document text plus the pages that
/// failed along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// The collected document text.
    pub document: DocumentContent,
    /// Total page count reported by the backend.
    pub page_count: usize,
    /// One entry per page whose text could not be read.
    pub warnings: Vec<PageWarning>,
}

impl Extraction {
    /// Returns true if every page was read without error.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// 1-based numbers of the pages that failed.
    pub fn failed_pages(&self) -> Vec<usize> {
        self.warnings.iter().map(|w| w.page).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_page_appends_in_call_order() {
        let mut doc = DocumentContent::new();
        doc.push_page("A");
        doc.push_page("");
        doc.push_page("B");
        assert_eq!(doc.as_str(), "AB");
    }

    #[test]
    fn new_document_is_empty() {
        let doc = DocumentContent::new();
        assert!(doc.is_empty());
        assert_eq!(doc.as_str(), "");
    }

    #[test]
    fn extraction_failed_pages() {
        let extraction = Extraction {
            document: DocumentContent::from("AC".to_string()),
            page_count: 3,
            warnings: vec![PageWarning::new(2, "broken")],
        };
        assert!(!extraction.is_clean());
        assert_eq!(extraction.failed_pages(), vec![2]);
    }

    #[test]
    fn default_extraction_is_clean() {
        assert!(Extraction::default().is_clean());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_under_single_content_key() {
        let doc = DocumentContent::from("hello".to_string());
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["content"], "hello");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_unknown_fields() {
        let result: Result<DocumentContent, _> =
            serde_json::from_str(r#"{"content": "x", "pages": 2}"#);
        assert!(result.is_err());
    }
}
