//! Translate a spoken audio file, printing results as they arrive.
//!
//! Usage: TRANSLATION_KEY=<azure key> cargo run --example send_file -- sample01.wav

use translator_speech_rs::{ResultKind, SpeechConfig, Translator, TranslatorClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("TRANSLATION_KEY")?;
    let audio_file = std::env::args()
        .nth(1)
        .ok_or("usage: send_file <audio file>")?;

    let config = SpeechConfig::builder()
        .subscription_key(key)
        .from_language("en")
        .to_language("fr")
        .build();

    let mut translator = Translator::new(config)?;
    translator.start().await?;

    // Split so the file upload and the result stream run concurrently.
    let Some(connection) = translator.take_connection() else {
        return Err("no live connection after start".into());
    };
    let (mut sender, mut receiver) = connection.split();

    let upload = tokio::spawn(async move {
        sender.send_file(&audio_file).await?;
        Ok::<_, translator_speech_rs::Error>(sender)
    });

    let mut done = false;
    while !done {
        match receiver.next_message().await? {
            None => break,
            Some(message) => {
                if let Some(result) = message.result() {
                    let result = result?;
                    println!("[{:?}] {} -> {}", result.kind, result.recognition, result.translation);
                    done = result.kind == ResultKind::Final;
                }
            }
        }
    }

    let sender = upload.await??;
    TranslatorClient::unsplit(sender, receiver)?.close().await?;
    println!("translator stopped.");
    Ok(())
}
