//! Core content extraction.
//!
//! Turns a parsed HTML tree into an [`ExtractResult`] with four independent
//! sub-extractions (title, main text, headings, links) plus price detection
//! over the main text. Every function here is a read-only walk over the
//! document; none of them can fail, they return empty values instead.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::dom::{self, Document, NodeRef, Visit};
use crate::options::Options;
use crate::patterns::{PRICE, WHITESPACE_NORMALIZE};
use crate::result::ExtractResult;

/// Main entry point for content extraction over a parsed document.
#[must_use]
pub fn extract_document(document: &Document, options: &Options) -> ExtractResult {
    let root = document.root();

    let title = get_title(root);
    let text = get_main_text(root, options);
    let headings = get_headings(root, options);
    let links = get_links(root);
    let prices = find_prices(&text);

    debug!(
        title_len = title.len(),
        text_len = text.len(),
        headings = headings.len(),
        links = links.len(),
        prices = prices.len(),
        "extracted document"
    );

    ExtractResult {
        url: options.url.clone().unwrap_or_default(),
        title,
        text,
        headings,
        links,
        prices,
    }
}

/// Trimmed text of the first `<title>` element that has a child.
///
/// A `<title>` without children does not end the search.
#[must_use]
pub fn get_title(root: NodeRef) -> String {
    let mut title = String::new();

    dom::walk(root, |node| {
        if dom::is_element_named(node, "title") {
            if let Some(first) = node.first_child() {
                title = first.text().trim().to_string();
                return Visit::Stop;
            }
        }
        Visit::Descend
    });

    title
}

/// Visible text of the document outside skipped subtrees.
///
/// Text nodes are trimmed and joined with single spaces, then whitespace
/// runs are collapsed. This is a plain heuristic: there is no density
/// scoring or block classification.
#[must_use]
pub fn get_main_text(root: NodeRef, options: &Options) -> String {
    let mut parts: Vec<String> = Vec::new();

    dom::walk(root, |node| {
        if let Some(tag) = dom::element_name(node) {
            if options.is_skipped(&tag) {
                return Visit::Skip;
            }
        }
        if let Some(text) = dom::text_payload(node) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
        Visit::Descend
    });

    let joined = parts.join(" ");
    WHITESPACE_NORMALIZE
        .replace_all(&joined, " ")
        .trim()
        .to_string()
}

/// Flattened text of every heading element that has at least one child.
///
/// Nested headings each contribute; empty strings are kept.
#[must_use]
pub fn get_headings(root: NodeRef, options: &Options) -> Vec<String> {
    let mut out = Vec::new();

    dom::walk(root, |node| {
        let is_heading = dom::element_name(node).is_some_and(|tag| options.is_heading(&tag));
        if is_heading && node.first_child().is_some() {
            out.push(dom::inner_text(node).trim().to_string());
        }
        Visit::Descend
    });

    out
}

/// Distinct non-empty `href` values of `<a>` elements, sorted ascending.
///
/// Values are trimmed of surrounding whitespace and otherwise kept verbatim
/// (no resolution, query and fragment untouched).
#[must_use]
pub fn get_links(root: NodeRef) -> Vec<String> {
    let mut seen = BTreeSet::new();

    dom::walk(root, |node| {
        if dom::is_element_named(node, "a") {
            if let Some(href) = dom::get_attribute(node, "href") {
                let href = href.trim();
                if !href.is_empty() {
                    seen.insert(href.to_string());
                }
            }
        }
        Visit::Descend
    });

    seen.into_iter().collect()
}

/// Price-like substrings of `text` in first-occurrence order, deduplicated.
#[must_use]
pub fn find_prices(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for m in PRICE.find_iter(text) {
        if seen.insert(m.as_str()) {
            out.push(m.as_str().to_string());
        }
    }

    out
}
