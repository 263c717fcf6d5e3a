//! Rule headers.

use std::fmt;

use crate::vendor::Vendor;

/// The header of one rule block: `.foo:hover`, `@keyframes spin`, `@import …`.
///
/// At-rules carry their keyword in `at_type` and the remaining header text in
/// `text` (which may be empty, as for `@font-face`). Ordinary style rules
/// have no `at_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Raw selector body, e.g. `.foo:hover` or the `spin` of `@keyframes spin`.
    pub text: String,
    /// At-rule keyword including the `@`, e.g. `@keyframes`; `None` for
    /// ordinary style rules.
    pub at_type: Option<String>,
    /// Vendor tag when this header is a prefixed variant.
    pub vendor: Option<Vendor>,
}

impl Selector {
    /// An ordinary style-rule header.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at_type: None,
            vendor: None,
        }
    }

    /// An at-rule header.
    pub fn at_rule(at_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at_type: Some(at_type.into()),
            vendor: None,
        }
    }

    /// The empty header used by the document root.
    pub fn none() -> Self {
        Self::new("")
    }

    /// Tag the header with a vendor.
    pub fn with_vendor(mut self, vendor: Option<Vendor>) -> Self {
        self.vendor = vendor;
        self
    }

    /// Whether this header renders to nothing (the root case).
    pub fn is_empty(&self) -> bool {
        self.at_type.is_none() && self.text.is_empty()
    }

    /// The rendered header text, e.g. `@keyframes spin`.
    pub fn render(&self) -> String {
        match &self.at_type {
            Some(at_type) if self.text.is_empty() => at_type.clone(),
            Some(at_type) => format!("{at_type} {}", self.text),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Matching predicate used by [`crate::Document::children_where`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorFilter<'a> {
    /// Exact at-rule keyword, if constrained.
    pub at_type: Option<&'a str>,
    /// Substring of the rendered header, if constrained.
    pub contains: Option<&'a str>,
    /// Vendor tag, if constrained. `Some(None)` matches only canonical
    /// headers.
    pub vendor: Option<Option<Vendor>>,
}

impl<'a> SelectorFilter<'a> {
    /// Filter by at-rule keyword only.
    pub fn at_rule(at_type: &'a str) -> Self {
        Self {
            at_type: Some(at_type),
            ..Self::default()
        }
    }

    /// Filter by header substring only.
    pub fn containing(text: &'a str) -> Self {
        Self {
            contains: Some(text),
            ..Self::default()
        }
    }

    /// Whether `selector` satisfies every constrained field.
    pub fn matches(&self, selector: &Selector) -> bool {
        self.at_type
            .map_or(true, |at_type| selector.at_type.as_deref() == Some(at_type))
            && self
                .contains
                .map_or(true, |text| selector.render().contains(text))
            && self.vendor.map_or(true, |vendor| selector.vendor == vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_forms() {
        assert_eq!(Selector::new(".foo:hover").render(), ".foo:hover");
        assert_eq!(
            Selector::at_rule("@keyframes", "spin").render(),
            "@keyframes spin"
        );
        assert_eq!(Selector::at_rule("@font-face", "").render(), "@font-face");
        assert_eq!(Selector::none().render(), "");
        assert!(Selector::none().is_empty());
    }

    #[test]
    fn test_filter_matching() {
        let keyframes = Selector::at_rule("@keyframes", "spin");
        assert!(SelectorFilter::at_rule("@keyframes").matches(&keyframes));
        assert!(!SelectorFilter::at_rule("@media").matches(&keyframes));

        let selection = Selector::new(".foo::selection");
        assert!(SelectorFilter::containing("::selection").matches(&selection));
        assert!(!SelectorFilter::containing("::placeholder").matches(&selection));
    }

    #[test]
    fn test_filter_vendor_dimension() {
        let prefixed = Selector::new("::-moz-selection").with_vendor(Some(Vendor::Moz));
        let canonical_only = SelectorFilter {
            vendor: Some(None),
            ..SelectorFilter::default()
        };
        assert!(!canonical_only.matches(&prefixed));
    }
}
