//! Property declarations.

use crate::vendor::Vendor;

/// Stable identity of a property within its document.
///
/// Insertion and removal shift list indices; ids never change, so handlers
/// can re-locate a property after mutating its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(pub(crate) u32);

/// One `name: value` declaration, possibly vendor-tagged.
#[derive(Debug, Clone)]
pub struct Property {
    pub(crate) id: PropertyId,
    pub name: String,
    pub value: String,
    pub vendor: Option<Vendor>,
}

impl Property {
    /// Create a detached, untagged declaration. The id is assigned when the
    /// property is added to a document.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: PropertyId(0),
            name: name.into(),
            value: value.into(),
            vendor: None,
        }
    }

    /// Tag the declaration with a vendor.
    pub fn with_vendor(mut self, vendor: Option<Vendor>) -> Self {
        self.vendor = vendor;
        self
    }

    /// The document-unique identity of this declaration.
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Name match, optionally narrowed to an exact value.
    pub fn is(&self, name: &str, value: Option<&str>) -> bool {
        self.name == name && value.map_or(true, |value| self.value == value)
    }
}

/// Name-or-name-plus-value predicate used by [`crate::Document::properties_where`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFilter<'a> {
    /// Exact property name, if constrained.
    pub name: Option<&'a str>,
    /// Exact value, if constrained.
    pub value: Option<&'a str>,
    /// Vendor tag, if constrained. `Some(None)` matches only canonical
    /// declarations.
    pub vendor: Option<Option<Vendor>>,
}

impl<'a> PropertyFilter<'a> {
    /// Filter by name only.
    pub fn named(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Whether `property` satisfies every constrained field.
    pub fn matches(&self, property: &Property) -> bool {
        self.name.map_or(true, |name| property.name == name)
            && self.value.map_or(true, |value| property.value == value)
            && self.vendor.map_or(true, |vendor| property.vendor == vendor)
    }
}
