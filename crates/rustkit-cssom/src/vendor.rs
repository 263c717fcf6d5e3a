//! Browser vendor prefix tags.

use std::fmt;

/// A rendering-engine prefix convention.
///
/// The set is closed: every vendor variant the toolkit can produce or
/// recognize carries one of these tags. Untagged selectors and properties are
/// the canonical (unprefixed) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Moz,
    Webkit,
    O,
    Ms,
    Epub,
}

impl Vendor {
    /// Every known vendor, in no particular order of preference.
    pub const ALL: [Vendor; 5] = [
        Vendor::Moz,
        Vendor::Webkit,
        Vendor::O,
        Vendor::Ms,
        Vendor::Epub,
    ];

    /// The bare tag, e.g. `moz`.
    pub fn tag(self) -> &'static str {
        match self {
            Vendor::Moz => "moz",
            Vendor::Webkit => "webkit",
            Vendor::O => "o",
            Vendor::Ms => "ms",
            Vendor::Epub => "epub",
        }
    }

    /// The dash-wrapped prefix form, e.g. `-moz-`.
    pub fn prefix(self) -> &'static str {
        match self {
            Vendor::Moz => "-moz-",
            Vendor::Webkit => "-webkit-",
            Vendor::O => "-o-",
            Vendor::Ms => "-ms-",
            Vendor::Epub => "-epub-",
        }
    }

    /// Detect the vendor of a prefixed identifier (`-moz-border-radius`).
    pub fn of_ident(ident: &str) -> Option<Vendor> {
        Self::ALL
            .into_iter()
            .find(|vendor| ident.starts_with(vendor.prefix()))
    }

    /// Detect a vendor prefix occurring anywhere in a larger text, such as a
    /// selector (`p::-webkit-input-placeholder`) or a property value
    /// (`-moz-linear-gradient(top, red, blue)`).
    pub fn in_text(text: &str) -> Option<Vendor> {
        Self::ALL
            .into_iter()
            .find(|vendor| text.contains(vendor.prefix()))
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_forms() {
        assert_eq!(Vendor::Moz.prefix(), "-moz-");
        assert_eq!(Vendor::Webkit.tag(), "webkit");
        assert_eq!(Vendor::O.prefix(), "-o-");
    }

    #[test]
    fn test_of_ident() {
        assert_eq!(Vendor::of_ident("-moz-border-radius"), Some(Vendor::Moz));
        assert_eq!(Vendor::of_ident("-epub-hyphens"), Some(Vendor::Epub));
        assert_eq!(Vendor::of_ident("border-radius"), None);
    }

    #[test]
    fn test_in_text() {
        assert_eq!(
            Vendor::in_text("p::-webkit-input-placeholder"),
            Some(Vendor::Webkit)
        );
        assert_eq!(Vendor::in_text(".box:hover"), None);
    }
}
