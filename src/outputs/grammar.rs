//! English morphology for the rule realizer: agreement, verb inflection, list joining.

use crate::kernel::phrase::types::Tense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    pub person: Person,
    pub plural: bool,
}

impl Agreement {
    pub const SECOND: Agreement = Agreement { person: Person::Second, plural: false };

    fn third_singular(&self) -> bool {
        self.person == Person::Third && !self.plural
    }

    fn first_singular(&self) -> bool {
        self.person == Person::First && !self.plural
    }
}

/// Person/number of a subject head. Only the last word of the head counts.
pub fn agreement_of(head: &str) -> Agreement {
    let word = head.split_whitespace().last().unwrap_or("");
    // Proper nouns ("James", "Paris") are never guessed plural
    let proper = word.starts_with(|c: char| c.is_uppercase());
    let last = word.to_lowercase();
    match last.as_str() {
        "i" | "me" => Agreement { person: Person::First, plural: false },
        "we" | "us" => Agreement { person: Person::First, plural: true },
        "you" => Agreement::SECOND,
        "they" | "them" | "people" | "children" => Agreement { person: Person::Third, plural: true },
        "he" | "she" | "it" | "this" | "that" => Agreement { person: Person::Third, plural: false },
        word => Agreement {
            person: Person::Third,
            plural: !proper && looks_plural(word),
        },
    }
}

fn looks_plural(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
}

pub fn be_form(tense: Tense, agr: Agreement) -> &'static str {
    match tense {
        Tense::Present if agr.first_singular() => "am",
        Tense::Present if agr.third_singular() => "is",
        Tense::Present => "are",
        Tense::Past if agr.first_singular() || agr.third_singular() => "was",
        Tense::Past => "were",
        Tense::Future => "be",
    }
}

pub fn do_form(tense: Tense, agr: Agreement) -> &'static str {
    match tense {
        Tense::Past => "did",
        Tense::Present if agr.third_singular() => "does",
        _ => "do",
    }
}

/// Finite form of a (possibly multi-word) verb without auxiliaries.
pub fn finite(verb: &str, tense: Tense, agr: Agreement) -> String {
    match tense {
        Tense::Present if agr.third_singular() => inflect_head(verb, third_singular),
        Tense::Present => verb.to_string(),
        Tense::Past => inflect_head(verb, past),
        Tense::Future => format!("will {}", verb),
    }
}

pub fn participle(verb: &str) -> String {
    inflect_head(verb, present_participle)
}

/// Applies `f` to the first word only: "look for" -> "looking for".
fn inflect_head(verb: &str, f: fn(&str) -> String) -> String {
    match verb.split_once(' ') {
        Some((head, rest)) => format!("{} {}", f(head), rest),
        None => f(verb),
    }
}

const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("be", "was"),
    ("bring", "brought"),
    ("buy", "bought"),
    ("come", "came"),
    ("do", "did"),
    ("eat", "ate"),
    ("find", "found"),
    ("get", "got"),
    ("give", "gave"),
    ("go", "went"),
    ("have", "had"),
    ("know", "knew"),
    ("make", "made"),
    ("mean", "meant"),
    ("put", "put"),
    ("say", "said"),
    ("see", "saw"),
    ("seek", "sought"),
    ("take", "took"),
    ("tell", "told"),
    ("think", "thought"),
    ("understand", "understood"),
];

// Stressed final syllable: the consonant doubles despite two vowels.
const DOUBLES_FINAL: &[&str] = &["prefer", "refer", "occur", "admit", "commit", "begin", "forget", "omit"];

fn third_singular(word: &str) -> String {
    match word {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        "do" => return "does".to_string(),
        "go" => return "goes".to_string(),
        _ => {}
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        format!("{}es", word)
    } else if ends_consonant_y(word) {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{}s", word)
    }
}

fn past(word: &str) -> String {
    if let Some((_, p)) = IRREGULAR_PAST.iter().find(|(base, _)| *base == word) {
        return p.to_string();
    }
    if word.ends_with('e') {
        format!("{}d", word)
    } else if ends_consonant_y(word) {
        format!("{}ied", &word[..word.len() - 1])
    } else if doubles_final_consonant(word) {
        format!("{}{}ed", word, &word[word.len() - 1..])
    } else {
        format!("{}ed", word)
    }
}

fn present_participle(word: &str) -> String {
    if word == "be" {
        return "being".to_string();
    }
    if let Some(stem) = word.strip_suffix("ie") {
        return format!("{}ying", stem);
    }
    if word.ends_with("ee") || word.ends_with("ye") || word.ends_with("oe") {
        return format!("{}ing", word);
    }
    if word.len() > 2 && word.ends_with('e') {
        return format!("{}ing", &word[..word.len() - 1]);
    }
    if doubles_final_consonant(word) {
        return format!("{}{}ing", word, &word[word.len() - 1..]);
    }
    format!("{}ing", word)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn doubles_final_consonant(word: &str) -> bool {
    if DOUBLES_FINAL.contains(&word) {
        return true;
    }
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 || !chars.iter().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    let n = chars.len();
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    let vowel_groups = chars
        .iter()
        .zip(std::iter::once(&'_').chain(chars.iter()))
        .filter(|(cur, prev)| is_vowel(**cur) && !is_vowel(**prev))
        .count();
    vowel_groups == 1 && !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

/// "a", "a and b", "a, b and c".
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ");
            format!("{} and {}", head, last.as_ref())
        }
    }
}

/// Uppercases the first alphabetic character.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut done = false;
    for c in text.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participles() {
        assert_eq!(participle("look for"), "looking for");
        assert_eq!(participle("bring you"), "bringing you");
        assert_eq!(participle("seek"), "seeking");
        assert_eq!(participle("make"), "making");
        assert_eq!(participle("stop"), "stopping");
        assert_eq!(participle("prefer"), "preferring");
        assert_eq!(participle("see"), "seeing");
        assert_eq!(participle("lie"), "lying");
    }

    #[test]
    fn finite_forms() {
        let third = agreement_of("Ava");
        assert_eq!(finite("like", Tense::Present, third), "likes");
        assert_eq!(finite("search for", Tense::Present, third), "searches for");
        assert_eq!(finite("carry", Tense::Present, third), "carries");
        assert_eq!(finite("like", Tense::Present, agreement_of("you")), "like");
        assert_eq!(finite("say", Tense::Past, third), "said");
        assert_eq!(finite("bake", Tense::Past, third), "baked");
        assert_eq!(finite("fry", Tense::Past, third), "fried");
        assert_eq!(finite("chop", Tense::Past, third), "chopped");
        assert_eq!(finite("cook", Tense::Future, third), "will cook");
    }

    #[test]
    fn agreement() {
        assert_eq!(be_form(Tense::Present, agreement_of("I")), "am");
        assert_eq!(be_form(Tense::Present, agreement_of("the recipes")), "are");
        assert_eq!(be_form(Tense::Present, agreement_of("soup")), "is");
        assert_eq!(be_form(Tense::Past, agreement_of("we")), "were");
        assert_eq!(do_form(Tense::Present, agreement_of("the chef")), "does");
        assert_eq!(do_form(Tense::Present, agreement_of("you")), "do");
    }

    #[test]
    fn proper_nouns_ending_in_s_are_singular() {
        assert_eq!(finite("cook", Tense::Present, agreement_of("James")), "cooks");
        assert_eq!(be_form(Tense::Present, agreement_of("Doris")), "is");
        assert_eq!(be_form(Tense::Present, agreement_of("the onions")), "are");
    }

    #[test]
    fn lists() {
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["salt"]), "salt");
        assert_eq!(join_list(&["dishwashing soap", "salt"]), "dishwashing soap and salt");
        assert_eq!(join_list(&["a", "b", "c"]), "a, b and c");
    }
}
