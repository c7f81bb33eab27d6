//! Speech-to-speech: translate an audio file and save the synthesized voice.
//!
//! Usage: TRANSLATION_KEY=<azure key> cargo run --example to_speech -- sample01.wav

use translator_speech_rs::{SpeechConfig, TranslationMessage, Translator};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("TRANSLATION_KEY")?;
    let audio_file = std::env::args()
        .nth(1)
        .ok_or("usage: to_speech <audio file>")?;

    let config = SpeechConfig::builder()
        .subscription_key(key)
        .from_language("en")
        .to_language("en")
        .feature("TextToSpeech", true)
        .voice("en-AU-Catherine")
        .format("audio/wav")
        .build();

    let mut translator = Translator::new(config)?;
    let connection = translator.start().await?;

    connection.send_file(&audio_file).await?;

    let mut synthesized = Vec::new();
    while let Some(message) = connection.next_message().await? {
        match message {
            TranslationMessage::Text(json) => println!("{json}"),
            TranslationMessage::Audio(bytes) => synthesized.extend_from_slice(&bytes),
        }
    }

    if !synthesized.is_empty() {
        std::fs::write("translation.wav", &synthesized)?;
        println!("saved translation.wav ({} bytes)", synthesized.len());
    }

    if let Err(e) = translator.stop().await {
        eprintln!("close after server hangup: {e}");
    }
    Ok(())
}
