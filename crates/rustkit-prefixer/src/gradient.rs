//! `linear-gradient()` syntax rewriting.
//!
//! Three cooperating handlers cover the three historical syntaxes: the
//! modern directional phrase (`to bottom`), the pre-standard single keyword
//! (`top`), and the original WebKit `-webkit-gradient(linear, …)` function.

use rustkit_cssom::{
    prefix_word_occurrences, rewrite_function, Document, NodeId, PropertyId, Vendor,
};

const FUNCTION: &str = "linear-gradient";

/// Legacy leading keyword → modern directional phrase.
fn modern_direction(legacy: &str) -> Option<&'static str> {
    match legacy {
        "top" | "center top" => Some("to bottom"),
        "bottom" | "center bottom" => Some("to top"),
        "left" | "left top" => Some("to right"),
        "right" | "right top" => Some("to left"),
        _ => None,
    }
}

/// Modern directional phrase → legacy single keyword.
fn legacy_direction(modern: &str) -> Option<&'static str> {
    match modern {
        "to bottom" => Some("top"),
        "to top" => Some("bottom"),
        "to right" => Some("left"),
        "to left" => Some("right"),
        _ => None,
    }
}

fn assemble(first: &str, rest: &[&str]) -> String {
    let mut params = Vec::with_capacity(rest.len() + 1);
    params.push(first);
    params.extend_from_slice(rest);
    format!("{FUNCTION}({})", params.join(", "))
}

/// Rewrite a legacy first argument to the modern phrase, in place.
///
/// Any unrecognized first argument leaves the value untouched — the rewrite
/// is deliberately conservative, passing unknown syntax through verbatim.
pub(crate) fn normalize_linear_gradient(doc: &mut Document, node: NodeId, property: PropertyId) {
    let Some(source) = doc.property(node, property) else {
        return;
    };
    let value = source.value.clone();

    let rewritten = rewrite_function(&value, FUNCTION, |args| {
        let first = *args.first()?;
        let direction = modern_direction(first)?;
        Some(assemble(direction, &args[1..]))
    });

    if rewritten != value {
        if let Some(target) = doc.property_mut(node, property) {
            target.value = rewritten;
        }
    }
}

/// Insert legacy-direction clones of an (already normalized) gradient value,
/// vendor-prefixed, directly after the original.
///
/// When the value has no recognizable modern direction the legacy rendition
/// equals the original, and the clones are plain vendor-prefixed copies —
/// exactly right for angle or color-only gradients.
pub(crate) fn old_linear_gradient(
    doc: &mut Document,
    node: NodeId,
    property: PropertyId,
    prefixes: &[Vendor],
) {
    let Some(position) = doc.node(node).property_position(property) else {
        return;
    };
    let source = doc.node(node).properties()[position].clone();

    let legacy = rewrite_function(&source.value, FUNCTION, |args| {
        let first = *args.first()?;
        let direction = legacy_direction(first)?;
        Some(assemble(direction, &args[1..]))
    });

    let mut offset = 1;
    for &vendor in prefixes {
        if source.vendor.map_or(false, |tag| tag != vendor) {
            continue;
        }
        let value = prefix_word_occurrences(&legacy, FUNCTION, vendor.prefix());
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

/// A token that names a gradient start point or angle.
fn is_point_token(token: &str) -> bool {
    ["top", "bottom", "left", "right", "deg"]
        .iter()
        .any(|needle| token.contains(needle))
}

/// `45deg`-style tokens, returned verbatim so the angle text carries through.
fn angle_token(token: &str) -> Option<&str> {
    let digits = token.strip_suffix("deg")?;
    let numeric = !digits.is_empty()
        && digits
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-');
    numeric.then_some(token)
}

/// Split one color-stop argument into its color and optional stop position.
/// The split happens at the first top-level space, so color functions like
/// `rgba(0, 0, 0, 0.5)` stay in one piece.
fn split_stop(raw: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (index, ch) in raw.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ch if ch.is_whitespace() && depth == 0 => {
                let position = raw[index + 1..].trim();
                return (&raw[..index], (!position.is_empty()).then_some(position));
            }
            _ => {}
        }
    }
    (raw, None)
}

fn webkit_gradient(args: &[&str]) -> Option<String> {
    let mut stops = args;
    let mut point = "top";
    if let Some((&first, rest)) = args.split_first() {
        if is_point_token(first) {
            point = first;
            stops = rest;
        }
    }
    if stops.is_empty() {
        return None;
    }

    // Direction phrase → explicit start/end points; a numeric angle carries
    // through instead.
    let points = match point {
        "to bottom" => Some(("left top", "left bottom")),
        "to top" => Some(("left bottom", "left top")),
        "to right" => Some(("left top", "right top")),
        "to left" => Some(("right top", "left top")),
        other => angle_token(other)
            .is_none()
            .then_some(("left top", "left bottom")),
    };

    let last = stops.len() - 1;
    let mut rendered = Vec::with_capacity(stops.len());
    for (index, stop) in stops.iter().enumerate() {
        let (color, position) = split_stop(stop);
        if color.is_empty() {
            return None;
        }

        let kind = if index == 0 {
            "from"
        } else if index == last {
            "to"
        } else {
            "color-stop"
        };
        rendered.push(match position {
            Some(position) => format!("{kind}({position}, {color})"),
            None => format!("{kind}({color})"),
        });
    }
    let rendered = rendered.join(", ");

    Some(match points {
        Some((start, end)) => format!("-webkit-gradient(linear, {start}, {end}, {rendered})"),
        None => format!("-webkit-gradient(linear, {point}, {rendered})"),
    })
}

/// Insert the oldest WebKit-only gradient syntax as a `webkit`-tagged clone,
/// directly after the original — but only when the rewrite actually changed
/// something.
pub(crate) fn webkit_linear_gradient(doc: &mut Document, node: NodeId, property: PropertyId) {
    let Some(position) = doc.node(node).property_position(property) else {
        return;
    };
    let source = doc.node(node).properties()[position].clone();

    let rewritten = rewrite_function(&source.value, FUNCTION, webkit_gradient);
    if rewritten == source.value {
        return;
    }
    if doc.node(node).has_property(&source.name, Some(&rewritten)) {
        return;
    }

    let mut clone = source.clone();
    clone.value = rewritten;
    clone.vendor = Some(Vendor::Webkit);
    doc.add_property(node, clone, Some(position + 1));
}
