//! Text rendering and JSON conversion.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::document::Document;
use crate::node::NodeId;

/// One indentation level.
const INDENT: &str = "  ";

impl Document {
    /// Render the subtree at `id` as CSS text.
    ///
    /// Properties render one level deeper than their selector; blocks with
    /// content render as `selector { … }`, empty headers render as
    /// `selector;`, and the selector-less root renders its content raw.
    pub fn to_css(&self, id: NodeId, indent: usize) -> String {
        let node = self.node(id);
        let pad = INDENT.repeat(indent);
        let header = node.selector.render();

        let mut content = String::new();
        let property_pad = if header.is_empty() {
            pad.clone()
        } else {
            format!("{pad}{INDENT}")
        };
        for property in node.properties() {
            content.push_str(&property_pad);
            content.push_str(&property.name);
            content.push_str(": ");
            content.push_str(&property.value);
            content.push_str(";\n");
        }

        let child_indent = if header.is_empty() { indent } else { indent + 1 };
        for &child in node.children() {
            let rendered = self.to_css(child, child_indent);
            if !rendered.is_empty() {
                content.push('\n');
                content.push_str(&rendered);
            }
        }

        if !content.is_empty() && !header.is_empty() {
            format!("{pad}{header} {{\n{content}{pad}}}\n")
        } else if !content.is_empty() {
            content
        } else if !header.is_empty() {
            format!("{pad}{header};\n")
        } else {
            String::new()
        }
    }

    /// Convert the subtree at `id` to a JSON record of the shape
    /// `{ selector, properties, children }`. Duplicate property names keep
    /// the last value.
    pub fn to_json(&self, id: NodeId) -> Value {
        let node = self.node(id);

        let mut properties = Map::new();
        for property in node.properties() {
            properties.insert(property.name.clone(), Value::String(property.value.clone()));
        }

        let children: Vec<Value> = node
            .children()
            .iter()
            .map(|&child| self.to_json(child))
            .collect();

        json!({
            "selector": node.selector.render(),
            "properties": properties,
            "children": children,
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(self.root(), 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::property::Property;
    use crate::selector::Selector;

    fn sample() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let rule = doc.alloc(Node::new(Selector::new(".box")));
        doc.add_child(root, rule, None);
        doc.add_property(rule, Property::new("color", "red"), None);
        doc.add_property(rule, Property::new("width", "10px"), None);
        doc
    }

    #[test]
    fn test_to_css_rule_block() {
        let doc = sample();
        assert_eq!(
            doc.to_string().trim(),
            ".box {\n  color: red;\n  width: 10px;\n}"
        );
    }

    #[test]
    fn test_to_css_statement_and_nesting() {
        let mut doc = Document::new();
        let root = doc.root();
        let import = doc.alloc(Node::new(Selector::at_rule("@import", "url(\"a.css\")")));
        doc.add_child(root, import, None);

        let media = doc.alloc(Node::new(Selector::at_rule("@media", "screen")));
        doc.add_child(root, media, None);
        let rule = doc.alloc(Node::new(Selector::new(".a")));
        doc.add_child(media, rule, None);
        doc.add_property(rule, Property::new("margin", "0"), None);

        let css = doc.to_string();
        assert!(css.contains("@import url(\"a.css\");\n"));
        assert!(css.contains("@media screen {\n"));
        assert!(css.contains("  .a {\n    margin: 0;\n  }\n"));
    }

    #[test]
    fn test_to_css_round_trips_through_parse() {
        let doc = sample();
        let reparsed = crate::parse(&doc.to_string()).expect("rendered output should parse");
        assert_eq!(doc.to_string(), reparsed.to_string());
    }

    #[test]
    fn test_to_json_shape() {
        let mut doc = sample();
        let rule = doc.node(doc.root()).children()[0];
        // Duplicate name: last write wins.
        doc.add_property(rule, Property::new("color", "blue"), None);

        let value = doc.to_json(doc.root());
        assert_eq!(value["children"][0]["selector"], ".box");
        assert_eq!(value["children"][0]["properties"]["color"], "blue");
        assert_eq!(value["children"][0]["properties"]["width"], "10px");
        assert_eq!(value["selector"], "");
    }
}
