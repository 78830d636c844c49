pub mod responders;
pub mod router;
pub mod summarizer;
pub mod utterance;

pub use router::Generator;
pub use utterance::UtteranceType;
