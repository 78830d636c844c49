//! Static phrasings the template responders and the query summarizer draw from.

/// Confirmation phrasings.
pub const CONFIRM_RESPONSES: &[&str] = &[
    "You got it",
    "As you wish",
    "You don't have to ask me twice",
    "Of course",
    "Okay",
    "Acknowledged",
];

/// Affirmative phrasings ("yes").
pub const AFFIRM_RESPONSES: &[&str] = &["Yes", "Yeah", "Very much so", "Affirmative"];

/// Negative phrasings ("no").
pub const DECLINE_RESPONSES: &[&str] = &["No", "Nah", "Negative", "I'm afraid not"];

/// Synonyms for the summarizer's main verb.
pub const SEARCH_VERBS: &[&str] = &["look for", "search for", "bring you", "seek", "find"];

pub const SEARCH_EVERYTHING: &str = "I will just look for every recipe we have.";

pub const GREETING_ANONYMOUS: &str = "Hello there!";

/// Sentence-ending punctuation choices for template replies.
pub const TERMINATORS: &[&str] = &[".", "!"];

pub const CUISINE_SUFFIX: &str = " dishes";
pub const INCLUDE_PREPOSITION: &str = "that contain";
pub const EXCLUDE_PREPOSITION: &str = "but do not contain";
pub const CONSTRAINT_LEAD: &str = "recipes that require ";

/// Immutable bundle of the lists above. A generator borrows one for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub confirm: &'static [&'static str],
    pub affirm: &'static [&'static str],
    pub decline: &'static [&'static str],
    pub search_verbs: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            confirm: CONFIRM_RESPONSES,
            affirm: AFFIRM_RESPONSES,
            decline: DECLINE_RESPONSES,
            search_verbs: SEARCH_VERBS,
        }
    }
}
