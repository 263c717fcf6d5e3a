//! Depth-aware helpers for CSS value strings.

use smallvec::SmallVec;

/// Split a function argument list on top-level commas.
///
/// Commas nested inside parentheses (`rgba(0, 0, 0, 0.5)`) do not split.
/// Arguments are trimmed; a trailing empty argument is dropped.
pub fn split_args(input: &str) -> SmallVec<[&str; 8]> {
    let mut args = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(input[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    let last = input[start..].trim();
    if !last.is_empty() {
        args.push(last);
    }
    args
}

/// A character that continues a CSS identifier for word-boundary purposes.
/// Hyphens count, so `linear-gradient` inside `-moz-linear-gradient` is not
/// a whole-word occurrence.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Prefix every whole-word occurrence of `word` in `value` with `prefix`.
///
/// `prefix_word_occurrences("width: calc(1px)", "calc", "-moz-")` yields
/// `width: -moz-calc(1px)`; an occurrence already carrying a prefix is left
/// alone because the preceding hyphen breaks the word boundary.
pub fn prefix_word_occurrences(value: &str, word: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(value.len() + prefix.len());
    let mut last = 0;

    for (at, _) in value.match_indices(word) {
        if at < last {
            continue;
        }
        let end = at + word.len();
        let before_ok = value[..at].chars().next_back().map_or(true, |ch| !is_word_char(ch));
        let after_ok = value[end..].chars().next().map_or(true, |ch| !is_word_char(ch));
        if before_ok && after_ok {
            out.push_str(&value[last..at]);
            out.push_str(prefix);
            out.push_str(word);
            last = end;
        }
    }

    out.push_str(&value[last..]);
    out
}

/// Rewrite every whole-word `name(…)` call inside `value`.
///
/// For each call the balanced argument span is located, split with
/// [`split_args`], and handed to `rewrite`, which returns the full
/// replacement text for the call or `None` to leave that call untouched.
/// An unbalanced argument list stops the scan and leaves the remainder of
/// the value as-is, so a malformed call never corrupts anything beyond
/// itself.
pub fn rewrite_function<F>(value: &str, name: &str, rewrite: F) -> String
where
    F: Fn(&[&str]) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut pos = 0;

    while let Some(found) = value[pos..].find(name) {
        let at = pos + found;
        let end_name = at + name.len();
        let whole_word = value[..at].chars().next_back().map_or(true, |ch| !is_word_char(ch));

        if !whole_word || !value[end_name..].starts_with('(') {
            out.push_str(&value[pos..end_name]);
            pos = end_name;
            continue;
        }

        // Locate the matching close paren.
        let mut depth = 0usize;
        let mut close = None;
        for (offset, ch) in value[end_name..].char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(end_name + offset);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(close) = close else {
            out.push_str(&value[pos..]);
            return out;
        };

        let args = split_args(&value[end_name + 1..close]);
        match rewrite(&args) {
            Some(replacement) => {
                out.push_str(&value[pos..at]);
                out.push_str(&replacement);
            }
            None => out.push_str(&value[pos..=close]),
        }
        pos = close + 1;
    }

    out.push_str(&value[pos..]);
    out
}
