use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notifier::SocialPoster,
};
use crate::config::SocialSettings;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[derive(Serialize)]
struct PostBody<'a> {
    text: &'a str,
}

/// Posts status updates with a bearer token to a tweet-style JSON endpoint.
pub struct HttpSocialPoster {
    client: reqwest::Client,
    api_url: String,
    bearer_token: SecretString,
}

impl HttpSocialPoster {
    pub fn new(settings: &SocialSettings) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApplicationError::infrastructure(format!("http client: {e}")))?;
        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            bearer_token: settings.bearer_token.clone(),
        })
    }
}

#[async_trait]
impl SocialPoster for HttpSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        let response = self
            .client
            .post(&self.api_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.bearer_token.expose_secret()),
            )
            .json(&PostBody { text })
            .send()
            .await
            .map_err(|e| ApplicationError::delivery("social", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApplicationError::delivery(
                "social",
                format!("platform returned {status}: {detail}"),
            ));
        }
        tracing::debug!(%status, "social post accepted");
        Ok(())
    }
}
