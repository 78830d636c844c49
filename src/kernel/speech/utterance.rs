use std::fmt;
use std::str::FromStr;

use crate::error::NlgError;
use crate::kernel::phrase::types::InterrogativeType;

/// What kind of reply the dialogue manager wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtteranceType {
    Greet,
    Echo,
    Question(InterrogativeType),
    /// Plain declarative sentence from the frame.
    Statement,
    Confirm,
    Affirm,
    Decline,
    Unknown,
    Summarize,
}

impl UtteranceType {
    pub fn tag(&self) -> &'static str {
        match self {
            UtteranceType::Greet => "greet",
            UtteranceType::Echo => "echo",
            UtteranceType::Question(InterrogativeType::YesNo) => "yes_no",
            UtteranceType::Question(InterrogativeType::How) => "how",
            UtteranceType::Question(InterrogativeType::What) => "what",
            UtteranceType::Question(InterrogativeType::Where) => "where",
            UtteranceType::Question(InterrogativeType::Who) => "who",
            UtteranceType::Question(InterrogativeType::Why) => "why",
            UtteranceType::Statement => "statement",
            UtteranceType::Confirm => "confirm",
            UtteranceType::Affirm => "affirm",
            UtteranceType::Decline => "decline",
            UtteranceType::Unknown => "unknown",
            UtteranceType::Summarize => "summarize",
        }
    }
}

impl FromStr for UtteranceType {
    type Err = NlgError;

    /// Case-insensitive. `yes/no` and `none` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "greet" => UtteranceType::Greet,
            "echo" => UtteranceType::Echo,
            "yes_no" | "yes/no" => UtteranceType::Question(InterrogativeType::YesNo),
            "how" => UtteranceType::Question(InterrogativeType::How),
            "what" => UtteranceType::Question(InterrogativeType::What),
            "where" => UtteranceType::Question(InterrogativeType::Where),
            "who" => UtteranceType::Question(InterrogativeType::Who),
            "why" => UtteranceType::Question(InterrogativeType::Why),
            "statement" | "none" => UtteranceType::Statement,
            "confirm" => UtteranceType::Confirm,
            "affirm" => UtteranceType::Affirm,
            "decline" => UtteranceType::Decline,
            "unknown" => UtteranceType::Unknown,
            "summarize" => UtteranceType::Summarize,
            _ => return Err(NlgError::UnrecognizedUtteranceType(s.to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for UtteranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
