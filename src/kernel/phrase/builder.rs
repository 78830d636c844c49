use super::types::{Clause, NounPhrase, PrepPhrase};
use crate::error::{NlgError, Result};
use crate::kernel::frame::KeywordFrame;

/// PURE FUNCTION: KeywordFrame -> Clause.
/// Mood is left declarative; the router decides it.
pub fn build_clause(frame: &KeywordFrame) -> Result<Clause> {
    let subject_head = required(&frame.subject, "subject")?;
    let verb = required(&frame.verb, "verb")?;
    let object_head = required(&frame.object, "object")?;

    // 1. Subject
    let mut subject = NounPhrase::new(subject_head);
    for modifier in &frame.submodifiers {
        subject.add_modifier(modifier);
    }

    // 2. Object, optionally trailed by the prepositional phrase
    let mut target = NounPhrase::new(object_head);
    for modifier in &frame.objmodifiers {
        target.add_modifier(modifier);
    }
    if let Some(preposition) = &frame.preposition {
        let mut pp = PrepPhrase::new(preposition);
        for complement in &frame.prepmodifiers {
            pp.add_complement(complement);
        }
        target.add_postmodifier(pp);
    }

    // 3. Verb + adverbs
    let mut clause = Clause::new();
    clause.subject = Some(subject);
    clause.set_verb(verb);
    clause.adverbs = frame.adverbs.clone();
    clause.complements.push(target);

    Ok(clause)
}

fn required<'a>(slot: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    match slot.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(NlgError::MissingRequiredField(field)),
    }
}
