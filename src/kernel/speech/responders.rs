use rand::seq::SliceRandom;
use rand::Rng;

use crate::kernel::lexicon::TERMINATORS;
use crate::kernel::phrase::types::{Clause, Document, InterrogativeType, Mood, Tense};

/// Uniform pick from a non-empty template list.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Template reply: phrasing, optional ", {name}" (coin flip), then "." or "!".
/// Shared by acknowledgement, affirmation and decline.
pub fn template_reply<R: Rng + ?Sized>(rng: &mut R, phrasings: &[&str], name: Option<&str>) -> String {
    let mut reply = pick(rng, phrasings).to_string();

    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        if rng.gen_bool(0.5) {
            reply.push_str(", ");
            reply.push_str(name);
        }
    }

    reply.push_str(pick(rng, TERMINATORS));
    reply
}

/// Three equivalent ways of asking the user to repeat themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClarificationStrategy {
    /// "I did not understand what you just said."
    DidNotUnderstand,
    /// "What did you say?"
    WhatDidYouSay,
    /// "Please rephrase what you just said."
    PleaseRephrase,
}

impl ClarificationStrategy {
    pub const ALL: [ClarificationStrategy; 3] = [
        ClarificationStrategy::DidNotUnderstand,
        ClarificationStrategy::WhatDidYouSay,
        ClarificationStrategy::PleaseRephrase,
    ];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn clause(&self) -> Clause {
        let mut clause = Clause::new();
        match self {
            ClarificationStrategy::DidNotUnderstand => {
                clause.set_subject("I");
                clause.set_verb("understand");
                clause.tense = Tense::Past;
                clause.negated = true;
                clause.add_complement("what you");
                clause.set_postmodifier("just said");
            }
            ClarificationStrategy::WhatDidYouSay => {
                clause.mood = Mood::Interrogative(InterrogativeType::What);
                clause.set_subject("you");
                clause.set_verb("say");
                clause.tense = Tense::Past;
            }
            ClarificationStrategy::PleaseRephrase => {
                clause.mood = Mood::Imperative;
                clause.add_premodifier("please");
                clause.set_verb("rephrase");
                clause.add_complement("what you");
                clause.set_postmodifier("just said");
            }
        }
        clause
    }

    pub fn document(&self) -> Document {
        Document::single(self.clause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::lexicon::CONFIRM_RESPONSES;
    use crate::outputs::realizer::realize;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn strategies_realize_as_requests_to_repeat() {
        let texts: Vec<String> = ClarificationStrategy::ALL.iter().map(|s| realize(&s.document())).collect();
        assert_eq!(
            texts,
            vec![
                "I did not understand what you just said.",
                "What did you say?",
                "Please rephrase what you just said.",
            ]
        );
    }

    #[test]
    fn blank_name_is_ignored() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..50 {
            let reply = template_reply(&mut rng, CONFIRM_RESPONSES, Some("  "));
            assert!(!reply.contains(", "), "got {:?}", reply);
        }
    }
}
