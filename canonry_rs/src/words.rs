//! Identifier word splitting.
//!
//! Every identifier-to-word comparison in the crate goes through [`split_words`]
//! so filename, directory and cluster matching agree on tokenization.

use std::sync::OnceLock;

use regex::Regex;

/// Words shorter than this are dropped.
pub const MIN_WORD_LEN: usize = 3;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_lower_upper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"([a-z0-9])([A-Z])"))
}

fn regex_acronym() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"([A-Z]+)([A-Z][a-z])"))
}

fn regex_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"[\s_\-]+"))
}

/// Split an identifier into lowercase words.
///
/// `handleHTTPError` becomes `["handle", "http", "error"]`; `get_user-id`
/// becomes `["get", "user"]` because words of two characters or less are
/// discarded.
pub fn split_words(identifier: &str) -> Vec<String> {
    let spaced = regex_lower_upper().replace_all(identifier, "$1 $2");
    let spaced = regex_acronym().replace_all(&spaced, "$1 $2");

    regex_separators()
        .split(&spaced)
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect()
}
