use std::collections::BTreeSet;

use regex::Regex;

/// Scan free text for known skills and return the matched subset of the
/// vocabulary, lowercase-normalized.
///
/// Two passes are unioned: a tokenized exact match, which catches single-word
/// skills (including ones with regex-hostile characters like `c++`), and a
/// whole-word regex match per skill, which additionally recovers multi-word
/// skills such as "machine learning". Either pass matching is enough.
pub fn extract_skills(text: &str, vocabulary: &BTreeSet<String>) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let lowered = text.to_lowercase();
    if lowered.trim().is_empty() {
        return found;
    }

    for token in tokenize(&lowered) {
        if vocabulary.contains(token) {
            found.insert(token.to_string());
        }
    }

    for skill in vocabulary {
        if found.contains(skill) {
            continue;
        }
        if let Some(pattern) = whole_word_pattern(skill) {
            if pattern.is_match(&lowered) {
                found.insert(skill.clone());
            }
        }
    }

    found
}

/// Split lowercased text into word units. `+` and `#` stay inside tokens so
/// that skills like "c++" and "c#" survive tokenization.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|token| !token.is_empty())
}

/// Build a `\b…\b` whole-word pattern with the skill escaped so it is
/// treated literally. Word-boundary semantics reject partial-word hits
/// ("java" inside "javascript").
fn whole_word_pattern(skill: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(skill))).ok()
}
