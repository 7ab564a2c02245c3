// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only markup tree built on top of `scraper`.
//!
//! The tree is parsed once per analysis and then only queried. Parsing uses
//! HTML5 error recovery, so unclosed tags, stray end tags or a missing
//! doctype still produce a usable tree. The only hard failure is input that
//! cannot be decoded as text in the first place.

use crate::error::{AnalyzerError, Result};
use scraper::{ElementRef, Html};
use tracing::debug;

/// Parsed markup document
pub struct Tree {
    document: Html,
    recovered_errors: usize,
}

impl Tree {
    /// Parse raw bytes as an HTML document.
    ///
    /// Fails with [`AnalyzerError::MalformedMarkup`] when the bytes are not
    /// valid UTF-8 and therefore cannot be tokenized.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(input).map_err(|e| {
            AnalyzerError::MalformedMarkup(format!("input is not valid UTF-8 text: {}", e))
        })?;
        Ok(Self::parse_str(text))
    }

    /// Parse already-decoded text. Never fails.
    pub fn parse_str(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let document = Html::parse_document(text);
        let recovered_errors = document.errors.len();
        if recovered_errors > 0 {
            debug!("Recovered from {} markup parse error(s)", recovered_errors);
        }
        Self {
            document,
            recovered_errors,
        }
    }

    /// Number of parse errors the HTML5 parser recovered from
    pub fn recovered_errors(&self) -> usize {
        self.recovered_errors
    }

    /// All elements satisfying `predicate`, in document order
    pub fn select<P>(&self, mut predicate: P) -> Vec<Element<'_>>
    where
        P: FnMut(&Element<'_>) -> bool,
    {
        self.elements().filter(|e| predicate(e)).collect()
    }

    /// All elements with the given tag name, in document order
    pub fn select_by_tag(&self, name: &str) -> Vec<Element<'_>> {
        self.select(|e| e.is(name))
    }

    /// All elements whose tag is one of `names`, in document order
    pub fn select_by_tags(&self, names: &[&str]) -> Vec<Element<'_>> {
        self.select(|e| names.iter().any(|name| e.is(name)))
    }

    /// Whether at least one element with the given tag exists
    pub fn contains_tag(&self, name: &str) -> bool {
        self.elements().any(|e| e.is(name))
    }

    /// Total number of elements, including the implied html/head/body
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        self.document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .enumerate()
            .map(move |(ordinal, node)| Element {
                tree: self,
                node,
                ordinal: Some(ordinal),
            })
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("elements", &self.element_count())
            .field("recovered_errors", &self.recovered_errors)
            .finish()
    }
}

/// Borrowed view of one element in a [`Tree`]
#[derive(Clone, Copy)]
pub struct Element<'a> {
    tree: &'a Tree,
    node: ElementRef<'a>,
    /// Known when reached through a document-order scan; parent/ancestor
    /// walks leave it unset and `ordinal()` resolves it on demand.
    ordinal: Option<usize>,
}

impl<'a> Element<'a> {
    /// Lower-case tag name
    pub fn tag_name(&self) -> &'a str {
        self.node.value().name()
    }

    /// Case-insensitive tag comparison
    pub fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// Attribute value; names are matched case-insensitively
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node
            .value()
            .attrs()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Attribute value, treating an empty string as absent
    pub fn non_empty_attribute(&self, name: &str) -> Option<&'a str> {
        self.attribute(name).filter(|value| !value.is_empty())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// All attributes in source order
    pub fn attributes(&self) -> Vec<(&'a str, &'a str)> {
        self.node.value().attrs().collect()
    }

    /// Zero-based position among all elements in document order.
    ///
    /// Elements obtained from `parent()` or `ancestors()` pay one tree scan
    /// here; selection results already carry it.
    pub fn ordinal(&self) -> usize {
        match self.ordinal {
            Some(ordinal) => ordinal,
            None => self
                .tree
                .elements()
                .position(|e| e.node == self.node)
                .unwrap_or_default(),
        }
    }

    /// Enclosing element, if any
    pub fn parent(&self) -> Option<Element<'a>> {
        let parent = self.node.parent().and_then(ElementRef::wrap)?;
        Some(self.adopt(parent))
    }

    /// Enclosing elements, nearest first
    pub fn ancestors(&self) -> Vec<Element<'a>> {
        self.node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(|node| self.adopt(node))
            .collect()
    }

    fn adopt(&self, node: ElementRef<'a>) -> Element<'a> {
        Element {
            tree: self.tree,
            node,
            ordinal: None,
        }
    }

    /// Whether any enclosing element has the given tag
    pub fn has_ancestor(&self, tag: &str) -> bool {
        self.node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|a| a.value().name().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .field("ordinal", &self.ordinal())
            .field("attributes", &self.attributes())
            .finish()
    }
}
