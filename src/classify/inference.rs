use url::Url;

use crate::{
    classify::{
        Classification, ClassifyFuture, SentimentClassifier, SentimentLabel,
        wire::{ClassifyRequest, ClassifyResponse},
    },
    core::{
        ClassifyError, ConfigError, SentimentClient, client::constants::DEFAULT_INFERENCE_ENDPOINT,
    },
};

/// A classifier backed by a hosted text-classification model.
///
/// Defaults to the `ahmedrachid/FinancialBERT-Sentiment-Analysis` model. Each call posts
/// `{"inputs": text}` and keeps the highest-scoring label.
#[derive(Debug, Clone)]
pub struct InferenceClassifier {
    client: SentimentClient,
    endpoint: Url,
    token: Option<String>,
}

impl InferenceClassifier {
    /// Create a new builder that shares `client`'s connection pool.
    pub fn builder(client: &SentimentClient) -> InferenceClassifierBuilder {
        InferenceClassifierBuilder {
            client: client.clone(),
            endpoint: None,
            token: None,
        }
    }

    async fn classify_text(&self, text: &str) -> Result<Classification, ClassifyError> {
        let mut req = self
            .client
            .http()
            .post(self.endpoint.clone())
            .json(&ClassifyRequest { inputs: text });
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(ClassifyError::Status {
                status: resp.status().as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = resp.text().await?;
        let parsed: ClassifyResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifyError::Data(format!("classification json parse: {e}")))?;

        parsed
            .into_scores()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|best| {
                Classification::new(SentimentLabel::parse(&best.label), best.score.clamp(0.0, 1.0))
            })
            .ok_or_else(|| ClassifyError::Data("empty label list".to_string()))
    }
}

impl SentimentClassifier for InferenceClassifier {
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a> {
        Box::pin(self.classify_text(text))
    }
}

pub struct InferenceClassifierBuilder {
    client: SentimentClient,
    endpoint: Option<Url>,
    token: Option<String>,
}

impl InferenceClassifierBuilder {
    /// Override the classification endpoint.
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Send `token` as a bearer token on every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<InferenceClassifier, ConfigError> {
        let endpoint = match self.endpoint {
            Some(url) => url,
            None => Url::parse(DEFAULT_INFERENCE_ENDPOINT)?,
        };
        Ok(InferenceClassifier {
            client: self.client,
            endpoint,
            token: self.token,
        })
    }
}
