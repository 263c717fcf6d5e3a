//! The vendor resolve pass.
//!
//! Expansion runs rule by rule and leaves every vendor variant in place, even
//! where an enclosing block already pins the tree to one vendor. This pass
//! walks the finished tree once, carrying the current vendor scope as the
//! branch context, and drops whatever can never apply: a `-webkit-` tagged
//! property inside `@-moz-keyframes` is unreachable output.
//!
//! Canonical (untagged) nodes and properties survive every scope.

use rustkit_cssom::{Document, Vendor};
use tracing::debug;

/// Remove vendor-tagged nodes and properties that contradict the vendor
/// scope established by their ancestors.
pub fn resolve_vendors(doc: &mut Document) {
    let root = doc.root();
    let mut removed = 0usize;

    doc.walk(root, &mut None::<Vendor>, &mut |doc, id, scope| {
        let vendor = doc.node(id).selector.vendor;
        if let (Some(scope), Some(vendor)) = (*scope, vendor) {
            if vendor != scope {
                doc.remove_self(id);
                removed += 1;
                return;
            }
        }
        if let Some(vendor) = vendor {
            *scope = Some(vendor);
        }

        if let Some(scope) = *scope {
            let before = doc.node(id).properties().len();
            doc.retain_properties(id, |property| {
                property.vendor.map_or(true, |tag| tag == scope)
            });
            removed += before - doc.node(id).properties().len();
        }
    });

    debug!(removed, "vendor resolve pass finished");
}
