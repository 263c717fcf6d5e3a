//! The rule-table-driven prefix engine.

use rustkit_cssom::{Document, NodeId, PropertyId, Transform};
use tracing::debug;

use crate::gradient::{normalize_linear_gradient, old_linear_gradient, webkit_linear_gradient};
use crate::handlers::{
    add_property_prefixes, add_renamed_property, add_renamed_selector, add_renamed_type,
    add_value_prefixes,
};
use crate::resolve::resolve_vendors;
use crate::rules::{NodeHandler, PropertyHandler, Rule, RULES};

/// The vendor-prefix transform.
///
/// Walks the whole tree once per rule, in table order, so every rule sees
/// the siblings inserted by the rules before it; finishes with the vendor
/// resolve pass.
#[derive(Debug, Default)]
pub struct VendorPrefixes;

impl VendorPrefixes {
    /// Convenience wrapper around [`Transform::transform`].
    pub fn apply(doc: &mut Document) {
        VendorPrefixes.transform(doc);
    }
}

impl Transform for VendorPrefixes {
    fn transform(&self, doc: &mut Document) {
        for (index, rule) in RULES.iter().enumerate() {
            debug!(rule = index, "applying prefix rule");
            apply_rule(doc, rule);
        }
        resolve_vendors(doc);
    }
}

fn apply_rule(doc: &mut Document, rule: &Rule) {
    let root = doc.root();
    doc.walk(root, &mut (), &mut |doc, id, _| match *rule {
        Rule::AtRuleType { at_type, handlers } => {
            if doc.node(id).selector.at_type.as_deref() == Some(at_type) {
                run_node_handlers(doc, id, "", handlers);
            }
        }
        Rule::SelectorContains { text, handlers } => {
            let selector = &doc.node(id).selector;
            if !selector.is_empty() && selector.render().contains(text) {
                run_node_handlers(doc, id, text, handlers);
            }
        }
        Rule::PropertyNames { names, handlers } => {
            for property in matched_properties(doc, id, |name, _| names.contains(&name)) {
                run_property_handlers(doc, id, property, "", handlers);
            }
        }
        Rule::ValueContains { text, handlers } => {
            for property in matched_properties(doc, id, |_, value| value.contains(text)) {
                run_property_handlers(doc, id, property, text, handlers);
            }
        }
    });
}

/// Snapshot the identities of the matching properties before any handler
/// runs, so handler-inserted siblings are not revisited by the same rule at
/// the same node.
fn matched_properties(
    doc: &Document,
    node: NodeId,
    matches: impl Fn(&str, &str) -> bool,
) -> Vec<PropertyId> {
    doc.node(node)
        .properties()
        .iter()
        .filter(|property| matches(&property.name, &property.value))
        .map(|property| property.id())
        .collect()
}

fn run_node_handlers(doc: &mut Document, node: NodeId, match_text: &str, handlers: &[NodeHandler]) {
    for handler in handlers {
        match *handler {
            NodeHandler::RenameSelector(names) => {
                add_renamed_selector(doc, node, match_text, names);
            }
            NodeHandler::RenameType(names) => add_renamed_type(doc, node, names),
        }
    }
}

fn run_property_handlers(
    doc: &mut Document,
    node: NodeId,
    property: PropertyId,
    match_text: &str,
    handlers: &[PropertyHandler],
) {
    for handler in handlers {
        match *handler {
            PropertyHandler::Prefixes(prefixes) => {
                add_property_prefixes(doc, node, property, prefixes);
            }
            PropertyHandler::Rename(names) => add_renamed_property(doc, node, property, names),
            PropertyHandler::ValuePrefixes(prefixes) => {
                add_value_prefixes(doc, node, property, match_text, prefixes);
            }
            PropertyHandler::NormalizeLinearGradient => {
                normalize_linear_gradient(doc, node, property);
            }
            PropertyHandler::WebkitLinearGradient => webkit_linear_gradient(doc, node, property),
            PropertyHandler::OldLinearGradient(prefixes) => {
                old_linear_gradient(doc, node, property, prefixes);
            }
        }
    }
}
