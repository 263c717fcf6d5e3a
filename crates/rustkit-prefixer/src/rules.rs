//! The static prefixing rule table.
//!
//! Rules are data, handlers are code: each entry pairs a match kind with the
//! ordered handler invocations to run on every match. Table order is
//! significant — later rules see what earlier rules inserted.

use rustkit_cssom::Vendor;
use rustkit_cssom::Vendor::{Epub, Moz, Ms, O, Webkit};

/// A handler applied to a matched node (selector or at-rule type match).
#[derive(Debug, Clone, Copy)]
pub enum NodeHandler {
    /// Clone the node as a sibling per vendor, substring-replacing the
    /// matched text in its selector.
    RenameSelector(&'static [(Vendor, &'static str)]),
    /// Clone the node as a sibling per vendor, replacing its at-rule type
    /// wholesale.
    RenameType(&'static [(Vendor, &'static str)]),
}

/// A handler applied to a matched property.
#[derive(Debug, Clone, Copy)]
pub enum PropertyHandler {
    /// Insert `-{vendor}-{name}` clones after the original.
    Prefixes(&'static [Vendor]),
    /// Insert clones under entirely different names, per vendor.
    Rename(&'static [(Vendor, &'static str)]),
    /// Insert clones whose value has the matched token vendor-prefixed.
    ValuePrefixes(&'static [Vendor]),
    /// Rewrite a legacy `linear-gradient()` direction to the modern phrase,
    /// in place.
    NormalizeLinearGradient,
    /// Insert the old `-webkit-gradient(linear, …)` rendition.
    WebkitLinearGradient,
    /// Insert legacy-direction `linear-gradient()` clones, vendor-prefixed.
    OldLinearGradient(&'static [Vendor]),
}

/// One table entry. The four match kinds are mutually exclusive, and each
/// kind only accepts the handler family that fits its match target.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Matches a node whose at-rule type equals the literal.
    AtRuleType {
        at_type: &'static str,
        handlers: &'static [NodeHandler],
    },
    /// Matches a node whose rendered selector contains the literal.
    SelectorContains {
        text: &'static str,
        handlers: &'static [NodeHandler],
    },
    /// Matches every property whose name is in the set.
    PropertyNames {
        names: &'static [&'static str],
        handlers: &'static [PropertyHandler],
    },
    /// Matches every property whose value contains the literal.
    ValueContains {
        text: &'static str,
        handlers: &'static [PropertyHandler],
    },
}

/// The vendor-prefix expansion rules, applied in order.
pub static RULES: &[Rule] = &[
    Rule::PropertyNames {
        names: &[
            "animation",
            "animation-delay",
            "animation-direction",
            "animation-duration",
            "animation-fill-mode",
            "animation-iteration-count",
            "animation-name",
            "animation-play-state",
            "animation-timing-function",
            "backface-visibility",
            "transform",
            "transform-origin",
        ],
        handlers: &[PropertyHandler::Prefixes(&[Moz, Webkit, O, Ms])],
    },
    Rule::PropertyNames {
        names: &[
            "appearance",
            "background-clip",
            "background-origin",
            "box-sizing",
            "column-count",
            "column-gap",
            "column-rule",
            "column-rule-color",
            "column-rule-style",
            "column-rule-width",
            "column-span",
            "column-width",
            "columns",
            "opacity",
            "user-select",
        ],
        handlers: &[PropertyHandler::Prefixes(&[Moz, Webkit])],
    },
    Rule::PropertyNames {
        names: &[
            "background-size",
            "border-bottom-image",
            "border-bottom-left-image",
            "border-bottom-right-image",
            "border-corner-image",
            "border-image",
            "border-left-image",
            "border-top-image",
            "border-top-left-image",
            "border-top-right-image",
            "border-radius",
            "border-right-image",
            "box-shadow",
            "transition",
            "transition-delay",
            "transition-duration",
            "transition-property",
            "transition-timing-function",
        ],
        handlers: &[PropertyHandler::Prefixes(&[Moz, Webkit, O])],
    },
    Rule::PropertyNames {
        names: &[
            "border-after",
            "border-after-color",
            "border-after-style",
            "border-after-width",
            "border-before",
            "border-before-color",
            "border-before-style",
            "border-before-width",
        ],
        handlers: &[PropertyHandler::Prefixes(&[Webkit])],
    },
    Rule::PropertyNames {
        names: &[
            "filter",
            "grid-column",
            "grid-column-align",
            "grid-column-span",
            "grid-columns",
            "grid-layer",
            "grid-row",
            "grid-row-align",
            "grid-row-span",
            "grid-rows",
        ],
        handlers: &[PropertyHandler::Prefixes(&[Ms])],
    },
    Rule::PropertyNames {
        names: &["hyphens"],
        handlers: &[PropertyHandler::Prefixes(&[Moz, Webkit, Epub, Ms])],
    },
    Rule::PropertyNames {
        names: &["text-overflow"],
        handlers: &[PropertyHandler::Prefixes(&[O])],
    },
    Rule::PropertyNames {
        names: &["text-size-adjust"],
        handlers: &[PropertyHandler::Prefixes(&[Moz, Webkit, Ms])],
    },
    Rule::PropertyNames {
        names: &["border-top-left-radius"],
        handlers: &[
            PropertyHandler::Prefixes(&[Webkit]),
            PropertyHandler::Rename(&[(Moz, "-moz-border-radius-topleft")]),
        ],
    },
    Rule::PropertyNames {
        names: &["border-top-right-radius"],
        handlers: &[
            PropertyHandler::Prefixes(&[Webkit]),
            PropertyHandler::Rename(&[(Moz, "-moz-border-radius-topright")]),
        ],
    },
    Rule::PropertyNames {
        names: &["border-bottom-left-radius"],
        handlers: &[
            PropertyHandler::Prefixes(&[Webkit]),
            PropertyHandler::Rename(&[(Moz, "-moz-border-radius-bottomleft")]),
        ],
    },
    Rule::PropertyNames {
        names: &["border-bottom-right-radius"],
        handlers: &[
            PropertyHandler::Prefixes(&[Webkit]),
            PropertyHandler::Rename(&[(Moz, "-moz-border-radius-bottomright")]),
        ],
    },
    Rule::SelectorContains {
        text: "::selection",
        handlers: &[NodeHandler::RenameSelector(&[(Moz, "::-moz-selection")])],
    },
    Rule::SelectorContains {
        text: "::input-placeholder",
        handlers: &[NodeHandler::RenameSelector(&[
            (Moz, ":-moz-placeholder"),
            (Webkit, "::-webkit-input-placeholder"),
            (Ms, "::-ms-input-placeholder"),
        ])],
    },
    Rule::AtRuleType {
        at_type: "@keyframes",
        handlers: &[NodeHandler::RenameType(&[
            (Moz, "@-moz-keyframes"),
            (Webkit, "@-webkit-keyframes"),
            (Ms, "@-ms-keyframes"),
            (O, "@-o-keyframes"),
        ])],
    },
    Rule::AtRuleType {
        at_type: "@document",
        handlers: &[NodeHandler::RenameType(&[(Moz, "@-moz-document")])],
    },
    Rule::ValueContains {
        text: "inline-block",
        handlers: &[PropertyHandler::ValuePrefixes(&[Moz])],
    },
    Rule::ValueContains {
        text: "calc",
        handlers: &[PropertyHandler::ValuePrefixes(&[Moz, Webkit])],
    },
    Rule::ValueContains {
        text: "linear-gradient",
        handlers: &[
            PropertyHandler::NormalizeLinearGradient,
            PropertyHandler::WebkitLinearGradient,
            PropertyHandler::OldLinearGradient(&[Moz, Webkit, O]),
        ],
    },
];
