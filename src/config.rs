//! Session configuration and endpoint URL derivation.
//!
//! A [`SpeechConfig`] is immutable once built. The streaming endpoint URL is
//! derived from it exactly once, at build time, with the query parameters in
//! the order the service expects.

use uuid::Uuid;

pub const DEFAULT_API_VERSION: &str = "1.0";
pub const DEFAULT_LANGUAGE: &str = "en";

const SPEECH_TRANSLATE_BASE_URL: &str = "wss://dev.microsofttranslator.com/speech/translate";

/// How the service treats detected profanity in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfanityAction {
    /// Keep the profanity, marked with the configured [`ProfanityMarker`].
    Marked,
    /// Remove the profanity from results.
    Deleted,
    /// Pass results through untouched.
    NoAction,
}

impl ProfanityAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marked => "Marked",
            Self::Deleted => "Deleted",
            Self::NoAction => "NoAction",
        }
    }
}

/// The glyph used when profanity is marked rather than filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfanityMarker {
    Asterisk,
    Tag,
}

impl ProfanityMarker {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asterisk => "Asterisk",
            Self::Tag => "Tag",
        }
    }
}

/// Immutable configuration for one translation session.
///
/// Built through [`SpeechConfig::builder`]; every field except the
/// subscription key has a documented default. The endpoint URL is computed in
/// `build()` and never changes afterwards.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    api_version: String,
    subscription_key: Option<String>,
    from_language: String,
    to_language: String,
    features: Vec<(String, bool)>,
    profanity_action: ProfanityAction,
    profanity_marker: ProfanityMarker,
    voice: String,
    format: String,
    client_trace_id: Uuid,
    endpoint_url: String,
}

impl SpeechConfig {
    #[must_use]
    pub fn builder() -> SpeechConfigBuilder {
        SpeechConfigBuilder::new()
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    #[must_use]
    pub fn subscription_key(&self) -> Option<&str> {
        self.subscription_key.as_deref()
    }

    #[must_use]
    pub fn from_language(&self) -> &str {
        &self.from_language
    }

    #[must_use]
    pub fn to_language(&self) -> &str {
        &self.to_language
    }

    /// Named feature flags in the order they were set.
    #[must_use]
    pub fn features(&self) -> &[(String, bool)] {
        &self.features
    }

    #[must_use]
    pub const fn profanity_action(&self) -> ProfanityAction {
        self.profanity_action
    }

    #[must_use]
    pub const fn profanity_marker(&self) -> ProfanityMarker {
        self.profanity_marker
    }

    #[must_use]
    pub fn voice(&self) -> &str {
        &self.voice
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Client-generated id sent as the `X-ClientTraceId` header, for request
    /// correlation on the service side.
    #[must_use]
    pub const fn client_trace_id(&self) -> Uuid {
        self.client_trace_id
    }

    /// The derived streaming endpoint URL.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

/// Builder for [`SpeechConfig`].
pub struct SpeechConfigBuilder {
    api_version: String,
    subscription_key: Option<String>,
    from_language: String,
    to_language: String,
    features: Vec<(String, bool)>,
    profanity_action: ProfanityAction,
    profanity_marker: ProfanityMarker,
    voice: String,
    format: String,
}

impl SpeechConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            subscription_key: None,
            from_language: DEFAULT_LANGUAGE.to_string(),
            to_language: DEFAULT_LANGUAGE.to_string(),
            features: Vec::new(),
            profanity_action: ProfanityAction::Marked,
            profanity_marker: ProfanityMarker::Asterisk,
            voice: String::new(),
            format: String::new(),
        }
    }

    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// The Azure subscription key. Required before `start`, not before build.
    #[must_use]
    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn from_language(mut self, language: impl Into<String>) -> Self {
        self.from_language = language.into();
        self
    }

    #[must_use]
    pub fn to_language(mut self, language: impl Into<String>) -> Self {
        self.to_language = language.into();
        self
    }

    /// Set a named feature flag (e.g. `"TextToSpeech"`, `"Partial"`,
    /// `"TimingInfo"`). Only enabled flags appear in the endpoint URL,
    /// lower-cased, in the order they were set here.
    #[must_use]
    pub fn feature(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.features.push((name.into(), enabled));
        self
    }

    #[must_use]
    pub const fn profanity_action(mut self, action: ProfanityAction) -> Self {
        self.profanity_action = action;
        self
    }

    #[must_use]
    pub const fn profanity_marker(mut self, marker: ProfanityMarker) -> Self {
        self.profanity_marker = marker;
        self
    }

    /// Voice for synthesized output, e.g. `"en-AU-Catherine"`. Meaningful
    /// together with the text-to-speech feature flag.
    #[must_use]
    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Output audio format for synthesized speech, e.g. `"audio/wav"`.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Freeze the configuration, generating the trace id and deriving the
    /// endpoint URL.
    #[must_use]
    pub fn build(self) -> SpeechConfig {
        let endpoint_url = derive_endpoint_url(
            &self.api_version,
            &self.from_language,
            &self.to_language,
            &self.features,
            self.profanity_marker,
            self.profanity_action,
            &self.voice,
            &self.format,
        );

        SpeechConfig {
            api_version: self.api_version,
            subscription_key: self.subscription_key,
            from_language: self.from_language,
            to_language: self.to_language,
            features: self.features,
            profanity_action: self.profanity_action,
            profanity_marker: self.profanity_marker,
            voice: self.voice,
            format: self.format,
            client_trace_id: Uuid::new_v4(),
            endpoint_url,
        }
    }
}

impl Default for SpeechConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// The service is picky about parameter order, so the query string is
// assembled by hand rather than through a generic query encoder.
#[allow(clippy::too_many_arguments)]
fn derive_endpoint_url(
    api_version: &str,
    from_language: &str,
    to_language: &str,
    features: &[(String, bool)],
    marker: ProfanityMarker,
    action: ProfanityAction,
    voice: &str,
    format: &str,
) -> String {
    let enabled: Vec<String> = features
        .iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| name.to_lowercase())
        .collect();

    let feature_query = if enabled.is_empty() {
        String::new()
    } else {
        format!("&features={}", enabled.join(","))
    };

    format!(
        "{SPEECH_TRANSLATE_BASE_URL}?api-version={api_version}&from={from_language}&to={to_language}{feature_query}&ProfanityMarker={}&ProfanityAction={}&voice={voice}&format={format}",
        marker.as_str(),
        action.as_str(),
    )
}
