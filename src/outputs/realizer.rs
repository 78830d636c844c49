use std::future::Future;

use super::grammar::{agreement_of, be_form, capitalize, do_form, finite, join_list, participle, Agreement};
use crate::error::Result;
use crate::kernel::phrase::types::{Clause, Document, Mood, NounPhrase, PrepPhrase, Tense};

/// Renders a phrase-structure document into surface text.
///
/// Implementations own agreement, conjunction insertion and terminal
/// punctuation. Failures should map to `NlgError::RealizerUnavailable`.
pub trait SurfaceRealizer {
    fn realize(&self, document: &Document) -> impl Future<Output = Result<String>> + Send;
}

/// In-process rule-based English realizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleRealizer;

impl SurfaceRealizer for RuleRealizer {
    async fn realize(&self, document: &Document) -> Result<String> {
        Ok(realize(document))
    }
}

/// PURE FUNCTION: Document -> text.
pub fn realize(document: &Document) -> String {
    let conjunction = document.conjunction.trim();
    let punctuated = !conjunction.is_empty() && conjunction.chars().all(|c| c.is_ascii_punctuation());

    // Clauses after a word conjunction continue the sentence
    let sentences: Vec<String> = document
        .clauses
        .iter()
        .map(realize_clause)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| if i == 0 || punctuated { capitalize(&s) } else { s })
        .collect();

    if sentences.is_empty() {
        return String::new();
    }

    let separator = if conjunction.is_empty() {
        " ".to_string()
    } else if punctuated {
        format!("{} ", conjunction)
    } else {
        format!(" {} ", conjunction)
    };

    let mut text = sentences.join(&separator);

    let interrogative = document
        .clauses
        .last()
        .map(|c| matches!(c.mood, Mood::Interrogative(_)))
        .unwrap_or(false);
    if !text.ends_with(|c: char| matches!(c, '.' | '!' | '?')) {
        text.push(if interrogative { '?' } else { '.' });
    }

    text
}

/// One clause without terminal punctuation or capitalization.
pub fn realize_clause(clause: &Clause) -> String {
    let agr = clause
        .subject
        .as_ref()
        .map(|s| agreement_of(&s.head))
        .unwrap_or(Agreement::SECOND);
    let subject = clause.subject.as_ref().map(render_noun_phrase);
    let (aux, main) = verb_group(clause, agr);

    let mut parts: Vec<String> = Vec::new();
    match clause.mood {
        Mood::Declarative => {
            parts.extend(subject);
            parts.extend(aux);
            if clause.negated {
                parts.push("not".to_string());
            }
        }
        Mood::Interrogative(kind) => {
            parts.extend(kind.wh_word().map(str::to_string));
            parts.extend(aux);
            parts.extend(subject);
            if clause.negated {
                parts.push("not".to_string());
            }
        }
        Mood::Imperative => {
            // "please" leads, ahead of any do-support
            parts.extend(clause.premodifiers.iter().cloned());
            parts.extend(aux);
            if clause.negated {
                parts.push("not".to_string());
            }
        }
    }
    if clause.mood != Mood::Imperative {
        parts.extend(clause.premodifiers.iter().cloned());
    }
    parts.extend(clause.adverbs.iter().cloned());
    parts.push(main);

    let complements: Vec<String> = clause.complements.iter().map(render_noun_phrase).collect();
    parts.push(join_list(&complements));
    parts.extend(clause.modifiers.iter().map(render_prep_phrase));
    parts.extend(clause.postmodifier.clone());

    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits the verb into (first auxiliary, rest of the verb group).
fn verb_group(clause: &Clause, agr: Agreement) -> (Option<String>, String) {
    let verb = clause.verb.as_deref().unwrap_or("be").trim();
    let (head, rest) = match verb.split_once(' ') {
        Some((h, r)) => (h, r),
        None => (verb, ""),
    };
    let is_be = head == "be";
    let needs_do = clause.negated || matches!(clause.mood, Mood::Interrogative(_));

    if clause.mood == Mood::Imperative {
        let aux = clause.negated.then(|| "do".to_string());
        return (aux, verb.to_string());
    }

    if clause.tense == Tense::Future {
        let main = if clause.progressive {
            format!("be {}", participle(verb))
        } else {
            verb.to_string()
        };
        return (Some("will".to_string()), main);
    }

    if clause.progressive {
        return (Some(be_form(clause.tense, agr).to_string()), participle(verb));
    }

    if is_be {
        return (Some(be_form(clause.tense, agr).to_string()), rest.to_string());
    }

    if needs_do {
        return (Some(do_form(clause.tense, agr).to_string()), verb.to_string());
    }

    (None, finite(verb, clause.tense, agr))
}

fn render_noun_phrase(np: &NounPhrase) -> String {
    let mut parts: Vec<String> = np.modifiers.clone();
    parts.push(np.head.clone());
    parts.extend(np.postmodifiers.iter().map(render_prep_phrase));
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_prep_phrase(pp: &PrepPhrase) -> String {
    let complements = join_list(&pp.complements);
    match (pp.preposition.trim(), complements.as_str()) {
        ("", c) => c.to_string(),
        (p, "") => p.to_string(),
        (p, c) => format!("{} {}", p, c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::phrase::types::InterrogativeType;

    fn clause(subject: &str, verb: &str, object: &str) -> Clause {
        let mut c = Clause::new();
        c.set_subject(subject);
        c.set_verb(verb);
        c.add_complement(object);
        c
    }

    #[test]
    fn declarative_agreement() {
        assert_eq!(realize(&Document::single(clause("Ava", "like", "pasta"))), "Ava likes pasta.");
        assert_eq!(realize(&Document::single(clause("you", "like", "pasta"))), "You like pasta.");
    }

    #[test]
    fn negated_past_uses_do_support() {
        let mut c = clause("I", "understand", "what you");
        c.tense = Tense::Past;
        c.negated = true;
        c.set_postmodifier("just said");
        assert_eq!(realize(&Document::single(c)), "I did not understand what you just said.");
    }

    #[test]
    fn be_inverts_without_do() {
        let mut c = clause("the soup", "be", "ready");
        c.mood = Mood::Interrogative(InterrogativeType::YesNo);
        assert_eq!(realize(&Document::single(c)), "Is the soup ready?");
    }

    #[test]
    fn progressive_with_premodifier() {
        let mut c = clause("I", "search for", "recipes");
        c.progressive = true;
        c.add_premodifier("also");
        assert_eq!(realize(&Document::single(c)), "I am also searching for recipes.");
    }

    #[test]
    fn future_negated() {
        let mut c = clause("we", "cook", "fish");
        c.tense = Tense::Future;
        c.negated = true;
        assert_eq!(realize(&Document::single(c)), "We will not cook fish.");
    }

    #[test]
    fn imperative_with_please() {
        let mut c = Clause::new();
        c.mood = Mood::Imperative;
        c.set_verb("rephrase");
        c.add_premodifier("please");
        c.add_complement("what you");
        c.set_postmodifier("just said");
        assert_eq!(realize(&Document::single(c)), "Please rephrase what you just said.");
    }

    #[test]
    fn document_joins_with_conjunction() {
        let doc = Document::joined(vec![clause("I", "like", "rice"), clause("you", "like", "beans")], ".");
        assert_eq!(realize(&doc), "I like rice. You like beans.");
        let doc = Document::joined(vec![clause("I", "like", "rice"), clause("you", "like", "beans")], "but");
        assert_eq!(realize(&doc), "I like rice but you like beans.");
    }
}
