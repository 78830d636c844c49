use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use super::responders::{template_reply, ClarificationStrategy};
use super::summarizer::build_summary;
use super::utterance::UtteranceType;
use crate::config::GeneratorConfig;
use crate::error::{NlgError, Result};
use crate::kernel::frame::{KeywordFrame, RecipeQuery};
use crate::kernel::lexicon::{Lexicon, GREETING_ANONYMOUS, SEARCH_EVERYTHING};
use crate::kernel::phrase::builder::build_clause;
use crate::kernel::phrase::types::{Document, Mood};
use crate::outputs::realizer::{RuleRealizer, SurfaceRealizer};
use crate::outputs::recipe::{render_recipe, Recipe};
use crate::services::realizer::ConfiguredRealizer;

/// One initial call plus one retry.
const REALIZER_ATTEMPTS: u32 = 2;

/// Frame-to-utterance engine.
///
/// Holds read-only lexical resources, a realizer and its own seedable rng.
/// No state carries over between calls apart from the rng stream, so one
/// engine can be shared (e.g. behind an `Arc`) by concurrent conversations.
pub struct Generator<R = ConfiguredRealizer> {
    realizer: R,
    lexicon: Lexicon,
    config: GeneratorConfig,
    // Locked only around synchronous picks, never across an await
    rng: Mutex<SmallRng>,
}

impl Generator<ConfiguredRealizer> {
    /// Realizer and seed both come from `config`.
    pub fn from_config(config: GeneratorConfig) -> Self {
        let realizer = ConfiguredRealizer::from_config(&config);
        Self::with_realizer(realizer, config)
    }
}

impl Generator<RuleRealizer> {
    /// Rule realizer with a deterministic seed (useful for tests).
    pub fn seeded(seed: u64) -> Self {
        let config = GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        };
        Self::with_realizer(RuleRealizer, config)
    }
}

impl<R: SurfaceRealizer> Generator<R> {
    pub fn with_realizer(realizer: R, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            realizer,
            lexicon: Lexicon::default(),
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Swaps in a caller-provided random source.
    pub fn with_rng(mut self, rng: SmallRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    fn rng(&self) -> MutexGuard<'_, SmallRng> {
        // A panic mid-pick leaves the rng usable
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Main entry point. `utterance_type` is matched case-insensitively.
    pub async fn generate(
        &self,
        utterance_type: &str,
        frame: &KeywordFrame,
        query: Option<&RecipeQuery>,
    ) -> Result<String> {
        let kind: UtteranceType = utterance_type.parse()?;
        self.generate_utterance(kind, frame, query).await
    }

    /// Like `generate`, but frame and query arrive as JSON and are validated
    /// before anything else runs.
    pub async fn generate_from_json(
        &self,
        utterance_type: &str,
        frame: &Value,
        query: Option<&Value>,
    ) -> Result<String> {
        let query = query.map(RecipeQuery::from_value).transpose()?;
        let frame: KeywordFrame = match frame {
            Value::Null => KeywordFrame::default(),
            other => serde_json::from_value(other.clone()).map_err(|e| NlgError::MalformedFrame(e.to_string()))?,
        };
        self.generate(utterance_type, &frame, query.as_ref()).await
    }

    /// Conversation-loop variant: a dead realizer yields the fallback text
    /// instead of an error. Caller bugs still propagate.
    pub async fn respond(
        &self,
        utterance_type: &str,
        frame: &KeywordFrame,
        query: Option<&RecipeQuery>,
    ) -> Result<String> {
        self.or_fallback(self.generate(utterance_type, frame, query).await)
    }

    /// `respond` for JSON input, as read by the interactive driver.
    pub async fn respond_from_json(
        &self,
        utterance_type: &str,
        frame: &Value,
        query: Option<&Value>,
    ) -> Result<String> {
        self.or_fallback(self.generate_from_json(utterance_type, frame, query).await)
    }

    fn or_fallback(&self, result: Result<String>) -> Result<String> {
        match result {
            Err(NlgError::RealizerUnavailable(reason)) => {
                warn!("Realizer unavailable, using fallback: {}", reason);
                Ok(self.config.fallback_text.clone())
            }
            other => other,
        }
    }

    pub async fn generate_utterance(
        &self,
        kind: UtteranceType,
        frame: &KeywordFrame,
        query: Option<&RecipeQuery>,
    ) -> Result<String> {
        debug!("Routing utterance: {}", kind);

        match kind {
            UtteranceType::Greet => Ok(greet(frame)),
            UtteranceType::Echo => frame
                .lastinput
                .clone()
                .ok_or(NlgError::MissingRequiredField("lastinput")),
            UtteranceType::Question(interrogative) => {
                let mut clause = build_clause(frame)?;
                clause.mood = Mood::Interrogative(interrogative);
                self.realize(&Document::single(clause)).await
            }
            UtteranceType::Statement => {
                let clause = build_clause(frame)?;
                self.realize(&Document::single(clause)).await
            }
            UtteranceType::Confirm => Ok(self.acknowledge(frame)),
            UtteranceType::Affirm => Ok(self.affirm(frame)),
            UtteranceType::Decline => Ok(self.decline(frame)),
            UtteranceType::Unknown => self.clarify().await,
            UtteranceType::Summarize => {
                let mut output = String::new();
                let prefixed = self.rng().gen_bool(0.5);
                if prefixed {
                    output.push_str(&self.acknowledge(frame));
                    output.push('\n');
                }
                let empty = RecipeQuery::default();
                output.push_str(&self.summarize(query.unwrap_or(&empty)).await?);
                Ok(output)
            }
        }
    }

    /// Random confirmation phrasing.
    pub fn acknowledge(&self, frame: &KeywordFrame) -> String {
        template_reply(&mut *self.rng(), self.lexicon.confirm, frame.name.as_deref())
    }

    /// Random "yes".
    pub fn affirm(&self, frame: &KeywordFrame) -> String {
        template_reply(&mut *self.rng(), self.lexicon.affirm, frame.name.as_deref())
    }

    /// Random "no".
    pub fn decline(&self, frame: &KeywordFrame) -> String {
        template_reply(&mut *self.rng(), self.lexicon.decline, frame.name.as_deref())
    }

    /// Asks the user to repeat the last input, one of three phrasings.
    pub async fn clarify(&self) -> Result<String> {
        let strategy = ClarificationStrategy::choose(&mut *self.rng());
        debug!("Clarification strategy: {:?}", strategy);
        self.realize(&strategy.document()).await
    }

    /// Restates a search query. The empty query never touches the realizer.
    pub async fn summarize(&self, query: &RecipeQuery) -> Result<String> {
        let document = build_summary(query, self.lexicon.search_verbs, &mut *self.rng());
        match document {
            None => Ok(SEARCH_EVERYTHING.to_string()),
            Some(document) => self.realize(&document).await,
        }
    }

    pub fn render_recipe(&self, recipe: &Recipe) -> String {
        render_recipe(recipe)
    }

    /// Bounded realizer call with a single retry after backoff.
    async fn realize(&self, document: &Document) -> Result<String> {
        let limit = self.config.realizer_timeout();
        let mut last_error = String::new();

        for attempt in 1..=REALIZER_ATTEMPTS {
            match timeout(limit, self.realizer.realize(document)).await {
                Ok(Ok(text)) => return Ok(text.trim().to_string()),
                Ok(Err(e)) => {
                    warn!("Realizer attempt {}/{} failed: {}", attempt, REALIZER_ATTEMPTS, e);
                    last_error = e.to_string();
                }
                Err(_) => {
                    warn!("Realizer attempt {}/{} timed out after {:?}", attempt, REALIZER_ATTEMPTS, limit);
                    last_error = format!("timed out after {:?}", limit);
                }
            }

            if attempt < REALIZER_ATTEMPTS {
                sleep(self.config.retry_backoff()).await;
            }
        }

        Err(NlgError::RealizerUnavailable(last_error))
    }
}

fn greet(frame: &KeywordFrame) -> String {
    match frame.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Hello, {}!", name),
        None => GREETING_ANONYMOUS.to_string(),
    }
}
