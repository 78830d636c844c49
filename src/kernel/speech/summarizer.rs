use rand::Rng;

use super::responders::pick;
use crate::kernel::frame::{non_empty, RecipeQuery};
use crate::kernel::lexicon::{CONSTRAINT_LEAD, CUISINE_SUFFIX, EXCLUDE_PREPOSITION, INCLUDE_PREPOSITION};
use crate::kernel::phrase::types::{Clause, Document, PrepPhrase};

/// PURE FUNCTION (given the rng): RecipeQuery -> Document.
///
/// Returns `None` for the empty query, which has a fixed wording and needs no
/// realizer.
pub fn build_summary<R: Rng + ?Sized>(query: &RecipeQuery, search_verbs: &[&str], rng: &mut R) -> Option<Document> {
    if query.is_empty() {
        return None;
    }

    let mut clauses = vec![primary_clause(query, search_verbs, rng)];
    if let Some(secondary) = constraint_clause(query, search_verbs, rng) {
        clauses.push(secondary);
    }

    Some(Document::joined(clauses, "."))
}

/// "I am looking for Mexican and Thai dishes that contain ... but do not contain ..."
fn primary_clause<R: Rng + ?Sized>(query: &RecipeQuery, search_verbs: &[&str], rng: &mut R) -> Clause {
    let mut clause = searching_clause(search_verbs, rng);

    match non_empty(&query.include_cuisines) {
        Some(cuisines) => {
            // Only the final cuisine carries the suffix: "Mexican, Chinese and Thai dishes"
            let last = cuisines.len() - 1;
            for (i, cuisine) in cuisines.iter().enumerate() {
                if i == last {
                    clause.add_complement(&format!("{}{}", cuisine, CUISINE_SUFFIX));
                } else {
                    clause.add_complement(cuisine);
                }
            }
        }
        None => clause.add_complement("recipes"),
    }

    if let Some(ingredients) = non_empty(&query.include_ingredients) {
        clause.add_modifier(prep_phrase(INCLUDE_PREPOSITION, ingredients));
    }
    if let Some(ingredients) = non_empty(&query.exclude_ingredients) {
        clause.add_modifier(prep_phrase(EXCLUDE_PREPOSITION, ingredients));
    }

    clause
}

/// "I am also finding recipes that require 20 minutes to prepare and 5 steps to complete"
fn constraint_clause<R: Rng + ?Sized>(query: &RecipeQuery, search_verbs: &[&str], rng: &mut R) -> Option<Clause> {
    let phrases = constraint_phrases(query);
    if phrases.is_empty() {
        return None;
    }

    let mut clause = searching_clause(search_verbs, rng);
    clause.add_premodifier("also");
    for (i, phrase) in phrases.iter().enumerate() {
        if i == 0 {
            clause.add_complement(&format!("{}{}", CONSTRAINT_LEAD, phrase));
        } else {
            clause.add_complement(phrase);
        }
    }
    Some(clause)
}

/// Constraint phrases in fixed priority order:
/// prep -> cook -> total -> steps -> ingredient count.
pub fn constraint_phrases(query: &RecipeQuery) -> Vec<String> {
    let slots = [
        (query.prep_time, "minutes to prepare"),
        (query.cook_time, "minutes to cook"),
        (query.total_time, "total minutes to make"),
        (query.num_steps, "steps to complete"),
        (query.num_ingredients, "ingredients"),
    ];

    slots
        .iter()
        .filter_map(|(value, label)| value.map(|v| format!("{} {}", v, label)))
        .collect()
}

fn searching_clause<R: Rng + ?Sized>(search_verbs: &[&str], rng: &mut R) -> Clause {
    let mut clause = Clause::new();
    clause.set_subject("I");
    clause.set_verb(pick(rng, search_verbs));
    clause.progressive = true;
    clause
}

fn prep_phrase(preposition: &str, complements: &[String]) -> PrepPhrase {
    let mut pp = PrepPhrase::new(preposition);
    for complement in complements {
        pp.add_complement(complement);
    }
    pp
}
