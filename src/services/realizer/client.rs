use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{NlgError, Result};
use crate::kernel::phrase::types::Document;
use crate::outputs::realizer::SurfaceRealizer;

/// Client for an out-of-process surface realizer.
#[derive(Clone)]
pub struct RemoteRealizer {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct RealizeResponse {
    text: String,
}

impl RemoteRealizer {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout) // Network-level bound; the generator adds its own
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base_url}/realize` with the document itself as the JSON body.
    fn request(&self, document: &Document) -> RequestBuilder {
        self.client.post(format!("{}/realize", self.base_url)).json(document)
    }
}

impl SurfaceRealizer for RemoteRealizer {
    async fn realize(&self, document: &Document) -> Result<String> {
        let response = self
            .request(document)
            .send()
            .await
            .map_err(|e| NlgError::RealizerUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NlgError::RealizerUnavailable(format!(
                "Realizer Server Error: {}",
                response.status()
            )));
        }

        let body: RealizeResponse = response
            .json()
            .await
            .map_err(|e| NlgError::RealizerUnavailable(e.to_string()))?;
        Ok(body.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::phrase::types::Clause;
    use serde_json::Value;

    #[test]
    fn posts_bare_document() {
        let realizer = RemoteRealizer::new("http://localhost:9900/", Duration::from_secs(1));
        let mut clause = Clause::new();
        clause.set_subject("you");
        clause.set_verb("like");
        clause.add_complement("soup");
        let document = Document::single(clause);

        let request = realizer.request(&document).build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:9900/realize");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: Value = serde_json::from_slice(body).unwrap();
        assert_eq!(sent, serde_json::to_value(&document).unwrap());
        assert!(sent.get("document").is_none());
    }
}
