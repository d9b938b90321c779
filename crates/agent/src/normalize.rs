//! Input cleanup before classification.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of `?`/`!` at the start of the text or right after a non-word character.
static PUNCT_RUN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(^|[^\w])[?!]+").ok());

/// Drops redundant `?`/`!` runs that do not directly follow a word character.
///
/// `"what??"` is kept as is, `"?? hi !!"` becomes `" hi "`. Whitespace is not touched.
pub fn clean_input(input: &str) -> String {
    match PUNCT_RUN_RE.as_ref() {
        Some(re) => re.replace_all(input, "${1}").into_owned(),
        None => input.to_string(),
    }
}
