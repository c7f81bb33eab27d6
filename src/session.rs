//! The session facade: one authenticate-connect-stream-close lifecycle.

use crate::TranslatorClient;
use crate::config::SpeechConfig;
use crate::error::{Error, Result};
use crate::transport::auth::TokenClient;

/// Owns a session's configuration and, once started, its live connection.
///
/// One logical session at a time: `start` sequences token fetch then connect,
/// and nothing is sent before connect succeeds. `stop` is the only sanctioned
/// release path for the connection and is safe to call at any point.
pub struct Translator {
    config: SpeechConfig,
    token_client: TokenClient,
    connection: Option<TranslatorClient>,
}

impl Translator {
    /// Create a facade over the given configuration.
    ///
    /// # Errors
    /// Returns an error if the token HTTP client cannot be built.
    pub fn new(config: SpeechConfig) -> Result<Self> {
        Ok(Self {
            config,
            token_client: TokenClient::new()?,
            connection: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SpeechConfig {
        &self.config
    }

    /// The live connection, if `start` has succeeded and `stop` has not run.
    pub fn connection(&mut self) -> Option<&mut TranslatorClient> {
        self.connection.as_mut()
    }

    /// Detach the live connection from the facade, e.g. to `split` it.
    ///
    /// A detached connection is no longer closed by [`stop`](Self::stop).
    pub fn take_connection(&mut self) -> Option<TranslatorClient> {
        self.connection.take()
    }

    /// Authenticate and connect.
    ///
    /// Fetches a bearer token, then opens the WebSocket; the stored live
    /// connection is returned for sending audio and reading results.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the subscription key is missing
    /// (checked before any network call) or a connection is already live,
    /// [`Error::Auth`] if the token request fails, and [`Error::Connection`]
    /// if the WebSocket handshake fails. No failure is retried; any failure
    /// leaves the facade not connected.
    pub async fn start(&mut self) -> Result<&mut TranslatorClient> {
        if self.connection.is_some() {
            return Err(Error::Configuration(
                "session already started - call stop() before starting again".to_string(),
            ));
        }

        let Some(key) = self.config.subscription_key() else {
            return Err(Error::Configuration(
                "missing subscription key - please find your key via the Azure portal".to_string(),
            ));
        };

        let token = self.token_client.issue_token(key).await?;
        let client = TranslatorClient::connect(&self.config, &token).await?;

        Ok(self.connection.insert(client))
    }

    /// Close the live connection, waiting for the close acknowledgment.
    ///
    /// Trivially succeeds if no connection exists, including before any
    /// `start` and after a previous `stop`.
    ///
    /// # Errors
    /// Returns an error if sending the close frame fails.
    pub async fn stop(&mut self) -> Result<()> {
        match self.connection.take() {
            None => Ok(()),
            Some(client) => client.close().await,
        }
    }

    /// Languages supported by the service.
    ///
    /// Not wired up to the service catalog endpoint yet; always empty.
    #[must_use]
    pub const fn supported_languages() -> Vec<String> {
        Vec::new()
    }
}
