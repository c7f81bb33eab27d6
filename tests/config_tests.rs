use translator_speech_rs::{ProfanityAction, ProfanityMarker, SpeechConfig};

#[test]
fn defaults_are_set_correctly() {
    let config = SpeechConfig::builder().build();

    assert_eq!(config.api_version(), "1.0");
    assert_eq!(config.subscription_key(), None);
    assert_eq!(config.from_language(), "en");
    assert_eq!(config.to_language(), "en");
    assert!(config.features().is_empty());
    assert_eq!(config.profanity_action(), ProfanityAction::Marked);
    assert_eq!(config.profanity_marker(), ProfanityMarker::Asterisk);
    assert_eq!(config.voice(), "");
    assert_eq!(config.format(), "");
    assert!(!config.client_trace_id().is_nil());
}

#[test]
fn endpoint_url_construction() {
    let config = SpeechConfig::builder()
        .subscription_key("abc1234")
        .to_language("fr")
        .from_language("fr")
        .feature("timinginfo", true)
        .feature("partial", true)
        .profanity_marker(ProfanityMarker::Tag)
        .profanity_action(ProfanityAction::Marked)
        .build();

    assert_eq!(
        config.endpoint_url(),
        "wss://dev.microsofttranslator.com/speech/translate?api-version=1.0&from=fr&to=fr&features=timinginfo,partial&ProfanityMarker=Tag&ProfanityAction=Marked&voice=&format="
    );
}

#[test]
fn features_segment_omitted_when_no_flags_set() {
    let config = SpeechConfig::builder().build();

    assert!(!config.endpoint_url().contains("features"));
    assert_eq!(
        config.endpoint_url(),
        "wss://dev.microsofttranslator.com/speech/translate?api-version=1.0&from=en&to=en&ProfanityMarker=Asterisk&ProfanityAction=Marked&voice=&format="
    );
}

#[test]
fn features_segment_omitted_when_all_flags_disabled() {
    let config = SpeechConfig::builder()
        .feature("TextToSpeech", false)
        .feature("Partial", false)
        .build();

    assert!(!config.endpoint_url().contains("features"));
}

#[test]
fn enabled_features_are_lowercased_and_comma_joined() {
    let config = SpeechConfig::builder()
        .feature("TextToSpeech", true)
        .feature("Partial", false)
        .feature("TimingInfo", true)
        .build();

    assert!(
        config
            .endpoint_url()
            .contains("&features=texttospeech,timinginfo&")
    );
}

#[test]
fn voice_and_format_are_rendered_when_set() {
    let config = SpeechConfig::builder()
        .feature("TextToSpeech", true)
        .voice("en-AU-Catherine")
        .format("audio/wav")
        .build();

    assert_eq!(
        config.endpoint_url(),
        "wss://dev.microsofttranslator.com/speech/translate?api-version=1.0&from=en&to=en&features=texttospeech&ProfanityMarker=Asterisk&ProfanityAction=Marked&voice=en-AU-Catherine&format=audio/wav"
    );
}

#[test]
fn api_version_is_configurable() {
    let config = SpeechConfig::builder().api_version("2.0").build();

    assert!(config.endpoint_url().contains("api-version=2.0&"));
}

#[test]
fn trace_ids_are_unique_per_config() {
    let a = SpeechConfig::builder().build();
    let b = SpeechConfig::builder().build();

    assert_ne!(a.client_trace_id(), b.client_trace_id());
}

#[test]
fn profanity_values_render_vendor_casing() {
    assert_eq!(ProfanityAction::Marked.as_str(), "Marked");
    assert_eq!(ProfanityAction::Deleted.as_str(), "Deleted");
    assert_eq!(ProfanityAction::NoAction.as_str(), "NoAction");
    assert_eq!(ProfanityMarker::Asterisk.as_str(), "Asterisk");
    assert_eq!(ProfanityMarker::Tag.as_str(), "Tag");
}
