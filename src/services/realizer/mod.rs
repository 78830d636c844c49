pub mod client;

pub use client::RemoteRealizer;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::kernel::phrase::types::Document;
use crate::outputs::realizer::{RuleRealizer, SurfaceRealizer};

/// Realizer picked from configuration: remote when a URL is set, rules otherwise.
#[derive(Clone)]
pub enum ConfiguredRealizer {
    Rule(RuleRealizer),
    Remote(RemoteRealizer),
}

impl ConfiguredRealizer {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match &config.realizer_url {
            Some(url) => Self::Remote(RemoteRealizer::new(url, config.realizer_timeout())),
            None => Self::Rule(RuleRealizer),
        }
    }
}

impl SurfaceRealizer for ConfiguredRealizer {
    async fn realize(&self, document: &Document) -> Result<String> {
        match self {
            Self::Rule(r) => r.realize(document).await,
            Self::Remote(r) => r.realize(document).await,
        }
    }
}
