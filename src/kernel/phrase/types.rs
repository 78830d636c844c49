use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterrogativeType {
    YesNo,
    How,
    What,
    Where,
    Who,
    Why,
}

impl InterrogativeType {
    /// Leading wh-word, `None` for yes/no questions.
    pub fn wh_word(&self) -> Option<&'static str> {
        match self {
            InterrogativeType::YesNo => None,
            InterrogativeType::How => Some("how"),
            InterrogativeType::What => Some("what"),
            InterrogativeType::Where => Some("where"),
            InterrogativeType::Who => Some("who"),
            InterrogativeType::Why => Some("why"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Declarative,
    Imperative,
    Interrogative(InterrogativeType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tense {
    Past,
    #[default]
    Present,
    Future,
}

/// Preposition plus ordered complements ("that contain chicken, pineapple").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepPhrase {
    pub preposition: String,
    pub complements: Vec<String>,
}

impl PrepPhrase {
    pub fn new(preposition: &str) -> Self {
        Self {
            preposition: preposition.to_string(),
            complements: Vec::new(),
        }
    }

    pub fn add_complement(&mut self, complement: &str) {
        self.complements.push(complement.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounPhrase {
    pub head: String,
    /// Premodifiers, rendered before the head in order.
    pub modifiers: Vec<String>,
    /// Trailing prepositional phrases.
    pub postmodifiers: Vec<PrepPhrase>,
}

impl NounPhrase {
    pub fn new(head: &str) -> Self {
        Self {
            head: head.to_string(),
            ..Self::default()
        }
    }

    pub fn add_modifier(&mut self, modifier: &str) {
        self.modifiers.push(modifier.to_string());
    }

    pub fn add_postmodifier(&mut self, phrase: PrepPhrase) {
        self.postmodifiers.push(phrase);
    }
}

/// One sentence worth of structure. Built per call and handed to a realizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub mood: Mood,
    pub tense: Tense,
    pub negated: bool,
    pub progressive: bool,
    pub subject: Option<NounPhrase>,
    pub verb: Option<String>,
    /// Words placed right before the main verb ("also", "please").
    pub premodifiers: Vec<String>,
    /// Verb modifiers, after premodifiers.
    pub adverbs: Vec<String>,
    pub complements: Vec<NounPhrase>,
    /// Clause-level prepositional modifiers, after the complements.
    pub modifiers: Vec<PrepPhrase>,
    pub postmodifier: Option<String>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.subject = Some(NounPhrase::new(subject));
    }

    pub fn set_verb(&mut self, verb: &str) {
        self.verb = Some(verb.to_string());
    }

    pub fn add_complement(&mut self, complement: &str) {
        self.complements.push(NounPhrase::new(complement));
    }

    pub fn add_premodifier(&mut self, word: &str) {
        self.premodifiers.push(word.to_string());
    }

    pub fn add_modifier(&mut self, phrase: PrepPhrase) {
        self.modifiers.push(phrase);
    }

    pub fn set_postmodifier(&mut self, text: &str) {
        self.postmodifier = Some(text.to_string());
    }

    /// Flattened complement texts, for inspection.
    pub fn complement_texts(&self) -> Vec<String> {
        self.complements.iter().map(|np| np.head.clone()).collect()
    }
}

/// One or more clauses joined by `conjunction` when realized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub clauses: Vec<Clause>,
    pub conjunction: String,
}

impl Document {
    pub fn single(clause: Clause) -> Self {
        Self {
            clauses: vec![clause],
            conjunction: ".".to_string(),
        }
    }

    pub fn joined(clauses: Vec<Clause>, conjunction: &str) -> Self {
        Self {
            clauses,
            conjunction: conjunction.to_string(),
        }
    }
}
