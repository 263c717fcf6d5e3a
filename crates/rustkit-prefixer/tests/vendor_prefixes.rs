//! End-to-end vendor-prefix tests: parse → transform → render.
//!
//! ```bash
//! # Run all integration tests
//! cargo test --package rustkit-prefixer --test vendor_prefixes
//!
//! # Run with tracing output
//! RUST_LOG=rustkit_prefixer=trace cargo test --package rustkit-prefixer \
//!     --test vendor_prefixes -- --nocapture
//! ```

use rustkit_cssom::{parse, Document, NodeId, SelectorFilter, Vendor};
use rustkit_prefixer::VendorPrefixes;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn transformed(css: &str) -> Document {
    init_tracing();
    let mut doc = parse(css).expect("test stylesheet should parse");
    VendorPrefixes::apply(&mut doc);
    doc
}

fn first_rule(doc: &Document) -> NodeId {
    doc.node(doc.root()).children()[0]
}

fn property_names(doc: &Document, node: NodeId) -> Vec<String> {
    doc.node(node)
        .properties()
        .iter()
        .map(|property| property.name.clone())
        .collect()
}

#[test]
fn border_radius_expands_to_three_adjacent_siblings() {
    let doc = transformed(".box { border-radius: 4px; }");
    let node = first_rule(&doc);

    assert_eq!(
        property_names(&doc, node),
        [
            "border-radius",
            "-moz-border-radius",
            "-webkit-border-radius",
            "-o-border-radius",
        ]
    );
    for property in doc.node(node).properties() {
        assert_eq!(property.value, "4px");
    }
}

#[test]
fn transform_family_gets_four_vendors() {
    let doc = transformed(".box { transform: rotate(45deg); }");
    let node = first_rule(&doc);
    assert_eq!(
        property_names(&doc, node),
        [
            "transform",
            "-moz-transform",
            "-webkit-transform",
            "-o-transform",
            "-ms-transform",
        ]
    );
}

#[test]
fn corner_radius_combines_prefix_and_rename() {
    let doc = transformed(".box { border-top-left-radius: 2px; }");
    let node = first_rule(&doc);
    // Both handlers insert directly after the original, so the rename (run
    // second) lands between the original and the webkit clone.
    assert_eq!(
        property_names(&doc, node),
        [
            "border-top-left-radius",
            "-moz-border-radius-topleft",
            "-webkit-border-top-left-radius",
        ]
    );
}

#[test]
fn selection_selector_clone_lands_before_the_original() {
    let doc = transformed(".foo::selection { color: red; }");
    let root = doc.root();
    let children = doc.node(root).children().to_vec();
    assert_eq!(children.len(), 2);

    let clone = children[0];
    let original = children[1];
    assert_eq!(doc.node(clone).selector.text, ".foo::-moz-selection");
    assert_eq!(doc.node(clone).selector.vendor, Some(Vendor::Moz));
    assert!(doc.node(clone).has_property("color", Some("red")));
    assert_eq!(doc.node(original).selector.text, ".foo::selection");
}

#[test]
fn input_placeholder_expands_per_vendor() {
    let doc = transformed("input::input-placeholder { color: gray; }");
    let root = doc.root();
    let texts: Vec<String> = doc
        .node(root)
        .children()
        .iter()
        .map(|&child| doc.node(child).selector.text.clone())
        .collect();
    assert_eq!(
        texts,
        [
            "input:-moz-placeholder",
            "input::-webkit-input-placeholder",
            "input::-ms-input-placeholder",
            "input::input-placeholder",
        ]
    );
}

#[test]
fn keyframes_are_cloned_per_vendor_and_resolved() {
    let doc = transformed("@keyframes spin { from { transform: rotate(0deg); } }");
    let root = doc.root();

    let types: Vec<Option<String>> = doc
        .node(root)
        .children()
        .iter()
        .map(|&child| doc.node(child).selector.at_type.clone())
        .collect();
    assert_eq!(
        types,
        [
            Some("@-moz-keyframes".to_string()),
            Some("@-webkit-keyframes".to_string()),
            Some("@-ms-keyframes".to_string()),
            Some("@-o-keyframes".to_string()),
            Some("@keyframes".to_string()),
        ]
    );

    // Inside each vendor clone the resolve pass keeps only that vendor's
    // variant plus the canonical declaration.
    let webkit = doc.children_where(root, SelectorFilter::at_rule("@-webkit-keyframes"))[0];
    let from = doc.node(webkit).children()[0];
    assert_eq!(
        property_names(&doc, from),
        ["transform", "-webkit-transform"]
    );

    // The canonical block keeps everything.
    let original = doc.children_where(root, SelectorFilter::at_rule("@keyframes"))[0];
    let from = doc.node(original).children()[0];
    assert_eq!(
        property_names(&doc, from),
        [
            "transform",
            "-moz-transform",
            "-webkit-transform",
            "-o-transform",
            "-ms-transform",
        ]
    );
}

#[test]
fn gradient_value_is_normalized_and_expanded() {
    let doc = transformed(".g { background: linear-gradient(top, red, blue); }");
    let node = first_rule(&doc);
    let values: Vec<String> = doc
        .node(node)
        .properties()
        .iter()
        .map(|property| property.value.clone())
        .collect();

    assert_eq!(
        values,
        [
            "linear-gradient(to bottom, red, blue)",
            "-moz-linear-gradient(top, red, blue)",
            "-webkit-linear-gradient(top, red, blue)",
            "-o-linear-gradient(top, red, blue)",
            "-webkit-gradient(linear, left top, left bottom, from(red), to(blue))",
        ]
    );
}

#[test]
fn gradient_stops_render_the_stop_aware_webkit_forms() {
    let doc = transformed(".g { background: linear-gradient(to right, red 0%, green 50%, blue 100%); }");
    let node = first_rule(&doc);
    let webkit = doc
        .node(node)
        .properties()
        .iter()
        .find(|property| property.value.starts_with("-webkit-gradient"))
        .expect("webkit gradient sibling should exist");
    assert_eq!(
        webkit.value,
        "-webkit-gradient(linear, left top, right top, from(0%, red), color-stop(50%, green), to(100%, blue))"
    );
    assert_eq!(webkit.vendor, Some(Vendor::Webkit));
}

#[test]
fn calc_values_gain_prefixed_clones() {
    let doc = transformed(".box { width: calc(100% - 20px); }");
    let node = first_rule(&doc);
    let values: Vec<String> = doc
        .node(node)
        .properties()
        .iter()
        .map(|property| property.value.clone())
        .collect();
    assert_eq!(
        values,
        [
            "calc(100% - 20px)",
            "-moz-calc(100% - 20px)",
            "-webkit-calc(100% - 20px)",
        ]
    );
}

#[test]
fn full_transform_is_idempotent_over_rendered_output() {
    let source = "\
        .box { border-radius: 4px; width: calc(100% - 2px); display: inline-block; }\n\
        .foo::selection { color: red; }\n\
        input::input-placeholder { color: gray; }\n\
        @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }\n\
        .g { background: linear-gradient(left, rgba(0, 0, 0, 0.5), blue 100%); }";

    let once = transformed(source);
    let mut twice = parse(source).expect("test stylesheet should parse");
    VendorPrefixes::apply(&mut twice);
    VendorPrefixes::apply(&mut twice);

    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn transformed_output_reparses_to_the_same_rendering() {
    let source = ".box { border-radius: 4px; }\n\
                  @keyframes spin { from { transform: none; } }";
    let doc = transformed(source);

    let rendered = doc.to_string();
    let mut reparsed = parse(&rendered).expect("rendered output should parse");
    VendorPrefixes::apply(&mut reparsed);
    assert_eq!(rendered, reparsed.to_string());
}

#[test]
fn untouched_rules_render_unchanged() {
    let doc = transformed(".plain { color: red; margin: 0 auto; }");
    assert_eq!(
        doc.to_string().trim(),
        ".plain {\n  color: red;\n  margin: 0 auto;\n}"
    );
}

#[test]
fn to_json_reflects_expanded_properties() {
    let doc = transformed(".box { border-radius: 4px; }");
    let value = doc.to_json(doc.root());
    assert_eq!(value["children"][0]["selector"], ".box");
    assert_eq!(value["children"][0]["properties"]["-moz-border-radius"], "4px");
}
