//! # RustKit Prefixer
//!
//! Vendor-prefix expansion for the RustKit CSS object model.
//!
//! ## Design Goals
//!
//! 1. **Rules as data**: a closed, typed rule table drives everything
//! 2. **Guarded mutation**: every insertion is duplicate-checked, so the
//!    transform is idempotent
//! 3. **Pipeline-friendly**: the engine is one [`rustkit_cssom::Transform`]
//!    unit among potentially many
//!
//! ```
//! use rustkit_cssom::parse;
//! use rustkit_prefixer::VendorPrefixes;
//!
//! let mut doc = parse(".box { border-radius: 4px; }").expect("valid css");
//! VendorPrefixes::apply(&mut doc);
//! assert!(doc.to_string().contains("-moz-border-radius: 4px;"));
//! ```

mod engine;
mod gradient;
mod handlers;
mod resolve;
mod rules;

pub use engine::VendorPrefixes;
pub use resolve::resolve_vendors;
pub use rules::{NodeHandler, PropertyHandler, Rule, RULES};
