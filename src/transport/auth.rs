use std::time::Duration;

use crate::error::{Error, Result};

const ISSUE_TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Exchanges a long-lived subscription key for a short-lived bearer token.
///
/// One outbound request per [`issue_token`](TokenClient::issue_token) call;
/// the token is never cached, refreshed, or inspected for expiry.
#[derive(Clone, Debug)]
pub struct TokenClient {
    client: reqwest::Client,
}

impl TokenClient {
    /// Create a token client with the default request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::new_with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a token client with a custom request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new_with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Auth)?;

        Ok(Self { client })
    }

    /// Request an access token for the translation endpoint.
    ///
    /// The response body is the bearer token, returned verbatim.
    ///
    /// # Errors
    /// Returns [`Error::Auth`] on any transport or HTTP-status failure.
    pub async fn issue_token(&self, subscription_key: &str) -> Result<String> {
        tracing::debug!("requesting access token for translation endpoint");

        let res = self
            .client
            .post(ISSUE_TOKEN_URL)
            .header(SUBSCRIPTION_KEY_HEADER, subscription_key)
            .send()
            .await
            .map_err(Error::Auth)?
            .error_for_status()
            .map_err(Error::Auth)?;

        let token = res.text().await.map_err(Error::Auth)?;
        tracing::debug!("acquired access token for translation endpoint");
        Ok(token)
    }
}
