//! Tree-mutating insertion handlers.
//!
//! Every handler is a guarded mutator: it either inserts a cloned sibling
//! (property clones directly after their original, node clones directly
//! before theirs) or does nothing. The guards are what make the whole
//! transform idempotent.

use rustkit_cssom::{
    prefix_word_occurrences, Document, NodeId, PropertyId, Selector, Vendor,
};
use tracing::trace;

/// Insert a `-{vendor}-{name}` clone for each vendor, unless a property of
/// that name already exists on the node.
pub(crate) fn add_property_prefixes(
    doc: &mut Document,
    node: NodeId,
    property: PropertyId,
    prefixes: &[Vendor],
) {
    let Some(position) = doc.node(node).property_position(property) else {
        return;
    };
    let source = doc.node(node).properties()[position].clone();

    let mut offset = 1;
    for &vendor in prefixes {
        let name = format!("{}{}", vendor.prefix(), source.name);
        if doc.node(node).has_property(&name, None) {
            continue;
        }
        let mut clone = source.clone();
        clone.name = name;
        clone.vendor = Some(vendor);
        doc.add_property(node, clone, Some(position + offset));
        offset += 1;
    }
}

/// Insert a clone under a wholly different name for each vendor the source
/// property could apply to.
pub(crate) fn add_renamed_property(
    doc: &mut Document,
    node: NodeId,
    property: PropertyId,
    names: &[(Vendor, &str)],
) {
    let Some(position) = doc.node(node).property_position(property) else {
        return;
    };
    let source = doc.node(node).properties()[position].clone();

    let mut offset = 1;
    for &(vendor, name) in names {
        if source.vendor.map_or(false, |tag| tag != vendor) {
            continue;
        }
        if doc.node(node).has_property(name, None) {
            continue;
        }
        let mut clone = source.clone();
        clone.name = name.to_string();
        clone.vendor = Some(vendor);
        doc.add_property(node, clone, Some(position + offset));
        offset += 1;
    }
}

/// Clone the node as a sibling (inserted immediately before it) for each
/// vendor, substring-replacing `match_text` in the selector.
pub(crate) fn add_renamed_selector(
    doc: &mut Document,
    node: NodeId,
    match_text: &str,
    names: &[(Vendor, &str)],
) {
    let Some(parent) = doc.node(node).parent() else {
        return;
    };

    for &(vendor, replacement) in names {
        let source = &doc.node(node).selector;
        if source.vendor.map_or(false, |tag| tag != vendor) {
            continue;
        }
        let expected = Selector {
            text: source.text.replace(match_text, replacement),
            at_type: source.at_type.clone(),
            vendor: Some(vendor),
        };
        if sibling_exists(doc, parent, &expected) {
            continue;
        }

        let clone = doc.clone_detached(node);
        doc.node_mut(clone).selector = expected;
        let position = doc.child_position(parent, node);
        doc.add_child(parent, clone, position);
        trace!(vendor = %vendor, selector = replacement, "inserted renamed selector");
    }
}

/// Clone the node as a sibling (inserted immediately before it) for each
/// vendor, replacing its at-rule type wholesale. At-rule type rewrites are
/// unconditional: there is no vendor gate, only the idempotence guard.
pub(crate) fn add_renamed_type(
    doc: &mut Document,
    node: NodeId,
    names: &[(Vendor, &str)],
) {
    let Some(parent) = doc.node(node).parent() else {
        return;
    };

    for &(vendor, at_type) in names {
        let source = &doc.node(node).selector;
        let expected = Selector {
            text: source.text.clone(),
            at_type: Some(at_type.to_string()),
            vendor: Some(vendor),
        };
        if sibling_exists(doc, parent, &expected) {
            continue;
        }

        let clone = doc.clone_detached(node);
        doc.node_mut(clone).selector = expected;
        let position = doc.child_position(parent, node);
        doc.add_child(parent, clone, position);
        trace!(vendor = %vendor, at_type, "inserted renamed at-rule");
    }
}

/// Insert clones whose value has every whole-word `match_text` occurrence
/// vendor-prefixed, one per applicable vendor.
pub(crate) fn add_value_prefixes(
    doc: &mut Document,
    node: NodeId,
    property: PropertyId,
    match_text: &str,
    prefixes: &[Vendor],
) {
    let Some(position) = doc.node(node).property_position(property) else {
        return;
    };
    let source = doc.node(node).properties()[position].clone();

    let mut offset = 1;
    for &vendor in prefixes {
        if source.vendor.map_or(false, |tag| tag != vendor) {
            continue;
        }
        let value = prefix_word_occurrences(&source.value, match_text, vendor.prefix());
        if doc.node(node).has_property(&source.name, Some(&value)) {
            continue;
        }
        let mut clone = source.clone();
        clone.value = value;
        clone.vendor = Some(vendor);
        doc.add_property(node, clone, Some(position + offset));
        offset += 1;
    }
}

/// Whether `parent` already has a child with exactly this selector.
fn sibling_exists(doc: &Document, parent: NodeId, expected: &Selector) -> bool {
    doc.node(parent)
        .children()
        .iter()
        .any(|&child| doc.node(child).selector == *expected)
}
