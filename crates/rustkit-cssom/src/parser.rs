//! Best-effort CSS text parser.
//!
//! Produces a [`Document`] from raw stylesheet text. This is a block parser,
//! not a validator: comments are stripped, rule headers run up to `{`,
//! declarations split on top-level `;`, and nested blocks recurse. Malformed
//! declarations are skipped; unbalanced braces are the one structural error
//! that is reported rather than guessed around.

use tracing::trace;

use crate::document::Document;
use crate::node::{Node, NodeId};
use crate::property::Property;
use crate::selector::Selector;
use crate::vendor::Vendor;
use crate::CssError;

/// Parse stylesheet text into a document tree.
pub fn parse(text: &str) -> Result<Document, CssError> {
    let mut doc = Document::new();
    let source = strip_comments(text);
    let root = doc.root();
    parse_block(&mut doc, root, &source)?;
    Ok(doc)
}

/// Remove `/* … */` comments. An unterminated comment swallows the tail,
/// which is what browsers do.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("/*") {
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("*/") {
            Some(close) => rest = &rest[open + 2 + close + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// The next `{`, `}` or `;` at paren depth zero. Parens are tracked so that
/// `url(data:image/png;base64,…)` does not terminate a declaration early.
fn next_boundary(input: &str) -> Option<(usize, char)> {
    let mut depth = 0usize;
    for (index, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '{' | '}' | ';' if depth == 0 => return Some((index, ch)),
            _ => {}
        }
    }
    None
}

/// The index of the `}` closing a block whose `{` has already been consumed.
fn matching_brace(input: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (index, ch) in input.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the contents of one block (or the whole sheet) into `parent`.
fn parse_block(doc: &mut Document, parent: NodeId, source: &str) -> Result<(), CssError> {
    let mut rest = source;
    loop {
        let Some((at, delimiter)) = next_boundary(rest) else {
            // Trailing declaration without its `;`.
            parse_statement(doc, parent, rest);
            return Ok(());
        };

        match delimiter {
            ';' => {
                parse_statement(doc, parent, &rest[..at]);
                rest = &rest[at + 1..];
            }
            '{' => {
                let selector = parse_selector(&rest[..at])?;
                let body_start = at + 1;
                let close = matching_brace(&rest[body_start..])
                    .ok_or(CssError::UnbalancedBraces)?;

                let node = doc.alloc(Node::new(selector));
                doc.add_child(parent, node, None);
                parse_block(doc, node, &rest[body_start..body_start + close])?;

                rest = &rest[body_start + close + 1..];
            }
            _ => return Err(CssError::UnbalancedBraces),
        }
    }
}

/// One `;`-terminated segment: a declaration, a statement at-rule
/// (`@import …`), or junk to skip.
fn parse_statement(doc: &mut Document, parent: NodeId, segment: &str) {
    let segment = segment.trim();
    if segment.is_empty() {
        return;
    }

    if segment.starts_with('@') {
        if let Ok(selector) = parse_selector(segment) {
            let node = doc.alloc(Node::new(selector));
            doc.add_child(parent, node, None);
        }
        return;
    }

    let Some((name, value)) = segment.split_once(':') else {
        trace!(declaration = segment, "skipping malformed declaration");
        return;
    };
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        trace!(declaration = segment, "skipping empty declaration");
        return;
    }

    // Tag the declaration when either side carries a vendor prefix, so the
    // transform's vendor gates keep working over re-parsed output.
    let vendor = Vendor::of_ident(name).or_else(|| Vendor::in_text(value));
    doc.add_property(parent, Property::new(name, value).with_vendor(vendor), None);
}

/// Turn a rule header into a selector, normalizing interior whitespace.
fn parse_selector(header: &str) -> Result<Selector, CssError> {
    let header = header.split_whitespace().collect::<Vec<_>>().join(" ");
    if header.is_empty() {
        return Err(CssError::MissingSelector);
    }

    if header.starts_with('@') {
        let mut parts = header.splitn(2, ' ');
        let at_type = parts.next().unwrap_or(&header).to_string();
        let text = parts.next().unwrap_or("").to_string();
        let vendor = Vendor::of_ident(at_type.trim_start_matches('@'));
        Ok(Selector::at_rule(at_type, text).with_vendor(vendor))
    } else {
        let vendor = Vendor::in_text(&header);
        Ok(Selector::new(header).with_vendor(vendor))
    }
}
