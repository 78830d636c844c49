use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NlgError, Result};

/// Frame-and-slot description of a single utterance.
///
/// Absent optional slots disable the matching clause augmentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordFrame {
    pub subject: Option<String>,
    pub verb: Option<String>,
    pub object: Option<String>,
    pub preposition: Option<String>,
    /// Complements of the preposition, in order.
    pub prepmodifiers: Vec<String>,
    pub submodifiers: Vec<String>,
    pub objmodifiers: Vec<String>,
    pub adverbs: Vec<String>,
    /// Used for greetings and personalized acknowledgements.
    pub name: Option<String>,
    /// Used by `echo`.
    pub lastinput: Option<String>,
}

impl KeywordFrame {
    pub fn new(subject: &str, verb: &str, object: &str) -> Self {
        Self {
            subject: Some(subject.to_string()),
            verb: Some(verb.to_string()),
            object: Some(object.to_string()),
            ..Self::default()
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_preposition(mut self, preposition: &str, complements: &[&str]) -> Self {
        self.preposition = Some(preposition.to_string());
        self.prepmodifiers = complements.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Demo frame: "Do you confidently prefer Thai recipes that contains ...?"
    pub fn example() -> Self {
        Self {
            name: Some("Jeraziah".to_string()),
            subject: Some("you".to_string()),
            verb: Some("prefer".to_string()),
            object: Some("recipes".to_string()),
            preposition: Some("that contains".to_string()),
            objmodifiers: vec!["Thai".to_string()],
            prepmodifiers: vec![
                "potatoes".to_string(),
                "celery".to_string(),
                "carrots".to_string(),
            ],
            adverbs: vec!["confidently".to_string()],
            lastinput: Some("Sing me a song.".to_string()),
            ..Self::default()
        }
    }
}

/// Structured recipe-search criteria. `null` and absent keys are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RecipeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cuisines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ingredients: Option<u32>,
}

const LIST_FIELDS: [&str; 3] = ["include_ingredients", "exclude_ingredients", "include_cuisines"];
const COUNT_FIELDS: [&str; 5] = ["prep_time", "cook_time", "total_time", "num_steps", "num_ingredients"];

impl RecipeQuery {
    /// True for the "match everything" query.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.include_ingredients).is_none()
            && non_empty(&self.exclude_ingredients).is_none()
            && non_empty(&self.include_cuisines).is_none()
            && !self.has_constraints()
    }

    /// True when any timing or count constraint is set.
    pub fn has_constraints(&self) -> bool {
        self.prep_time.is_some()
            || self.cook_time.is_some()
            || self.total_time.is_some()
            || self.num_steps.is_some()
            || self.num_ingredients.is_some()
    }

    /// Validating parse from a JSON object. Errors name the offending field.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(NlgError::malformed(
                    "query",
                    format!("expected an object, got {}", type_name(other)),
                ))
            }
        };

        let mut lists: [Option<Vec<String>>; 3] = Default::default();
        for (slot, field) in lists.iter_mut().zip(LIST_FIELDS) {
            *slot = map.get(field).map(|v| parse_list(field, v)).transpose()?.flatten();
        }

        let mut counts: [Option<u32>; 5] = Default::default();
        for (slot, field) in counts.iter_mut().zip(COUNT_FIELDS) {
            *slot = map.get(field).map(|v| parse_count(field, v)).transpose()?.flatten();
        }

        let [include_ingredients, exclude_ingredients, include_cuisines] = lists;
        let [prep_time, cook_time, total_time, num_steps, num_ingredients] = counts;

        Ok(Self {
            include_ingredients,
            exclude_ingredients,
            include_cuisines,
            prep_time,
            cook_time,
            total_time,
            num_steps,
            num_ingredients,
        })
    }

    /// Demo query used by the interactive driver.
    pub fn example() -> Self {
        Self {
            include_ingredients: Some(vec![
                "chicken".to_string(),
                "pineapple".to_string(),
                "pepper".to_string(),
            ]),
            exclude_ingredients: Some(vec!["dishwashing soap".to_string(), "salt".to_string()]),
            include_cuisines: Some(vec![
                "Mexican".to_string(),
                "Chinese".to_string(),
                "Thai".to_string(),
            ]),
            ..Self::default()
        }
    }
}

impl TryFrom<Value> for RecipeQuery {
    type Error = NlgError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

/// A list slot that carries criteria: `None` and `Some([])` both count as absent.
pub(crate) fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|l| !l.is_empty())
}

fn parse_list(field: &str, value: &Value) -> Result<Option<Vec<String>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => {
                        return Err(NlgError::malformed(
                            field,
                            format!("entry {} must be a string, got {}", i, type_name(other)),
                        ))
                    }
                }
            }
            // Empty lists carry no criteria
            Ok(if out.is_empty() { None } else { Some(out) })
        }
        other => Err(NlgError::malformed(
            field,
            format!("expected a list of strings, got {}", type_name(other)),
        )),
    }
}

fn parse_count(field: &str, value: &Value) -> Result<Option<u32>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v)
                    .map(Some)
                    .map_err(|_| NlgError::malformed(field, format!("{} is out of range", v)))
            } else if n.as_i64().is_some() {
                Err(NlgError::malformed(field, format!("must be non-negative, got {}", n)))
            } else {
                Err(NlgError::malformed(field, format!("must be an integer, got {}", n)))
            }
        }
        other => Err(NlgError::malformed(
            field,
            format!("expected a non-negative integer, got {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
