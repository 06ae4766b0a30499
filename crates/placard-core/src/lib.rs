//! Core domain types for placard.
//!
//! This crate provides the types shared between the placard client and
//! server:
//!
//! - [`Page`] and [`Element`] — an in-memory stand-in for a rendered page
//! - [`PageError`] — error type for page mutations
//! - [`loose`] — field access on loosely typed values
//!
//! # Example
//!
//! ```rust
//! use placard_core::{Page, RESPONSE_ELEMENT_ID};
//!
//! let mut page = Page::new();
//! page.set_text(RESPONSE_ELEMENT_ID, "hello").unwrap();
//! assert_eq!(page.text(RESPONSE_ELEMENT_ID), Some("hello"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod loose;

/// Id of the element the demo page renders fetched messages into.
pub const RESPONSE_ELEMENT_ID: &str = "response";

/// Errors that can occur when mutating a [`Page`].
#[derive(Error, Debug)]
pub enum PageError {
    /// The page has no element with the given id.
    #[error("no element with id: {0}")]
    NoSuchElement(String),
}

/// A single addressable node of a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Element id, unique within its page.
    pub id: String,
    /// Current text content.
    pub text: String,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
        }
    }
}

/// An in-memory page: a fixed set of elements addressed by id.
///
/// The element set is fixed at construction. Writes overwrite the whole text
/// content of one element; interleaved writers are not guarded against, the
/// last write wins.
#[derive(Debug, Clone)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    /// Creates the demo page, containing the `response` element.
    pub fn new() -> Self {
        Self::with_elements([RESPONSE_ELEMENT_ID])
    }

    /// Creates a page containing the given element ids, all with empty text.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| {
                let element = Element::new(id);
                (element.id.clone(), element)
            })
            .collect();
        Self { elements }
    }

    /// Replaces the text content of the element with the given id.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), PageError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| PageError::NoSuchElement(id.to_string()))?;
        element.text = text.into();
        Ok(())
    }

    /// Returns the text content of the element with the given id.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    /// Returns true if the page contains an element with the given id.
    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_overwrites() {
        let mut page = Page::new();
        page.set_text(RESPONSE_ELEMENT_ID, "first").unwrap();
        page.set_text(RESPONSE_ELEMENT_ID, "second").unwrap();
        assert_eq!(page.text(RESPONSE_ELEMENT_ID), Some("second"));
    }

    #[test]
    fn test_unknown_element_leaves_page_untouched() {
        let mut page = Page::new();
        page.set_text(RESPONSE_ELEMENT_ID, "kept").unwrap();

        let err = page.set_text("missing", "lost").unwrap_err();
        assert!(matches!(err, PageError::NoSuchElement(id) if id == "missing"));
        assert_eq!(page.text(RESPONSE_ELEMENT_ID), Some("kept"));
        assert_eq!(page.text("missing"), None);
    }

    #[test]
    fn test_custom_element_set() {
        let page = Page::with_elements(["header", "footer"]);
        assert!(page.has_element("header"));
        assert!(page.has_element("footer"));
        assert!(!page.has_element(RESPONSE_ELEMENT_ID));
    }
}
