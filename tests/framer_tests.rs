use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Sink;
use tokio_tungstenite::tungstenite::protocol::Message;
use translator_speech_rs::audio::{
    CHUNK_SIZE, TRAILING_SILENCE_BYTES, forward, load_padded, pump,
};
use translator_speech_rs::Error;

/// A sink standing in for the connection's binary-send primitive.
#[derive(Default)]
struct CaptureSink {
    frames: Vec<Message>,
}

impl Sink<Message> for CaptureSink {
    type Error = tokio_tungstenite::tungstenite::Error;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: Message) -> Result<(), Self::Error> {
        self.get_mut().frames.push(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

fn frame_lens(sink: &CaptureSink) -> Vec<usize> {
    sink.frames
        .iter()
        .map(|frame| match frame {
            Message::Binary(data) => data.len(),
            other => panic!("unexpected frame: {other:?}"),
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn pump_emits_fixed_size_chunks() {
    let mut sink = CaptureSink::default();
    let audio = vec![7u8; CHUNK_SIZE * 2 + 6_000];

    pump(&mut sink, &audio).await.unwrap();

    assert_eq!(frame_lens(&sink), vec![CHUNK_SIZE, CHUNK_SIZE, 6_000]);
}

#[tokio::test(start_paused = true)]
async fn pump_sends_small_buffer_as_one_chunk() {
    let mut sink = CaptureSink::default();

    pump(&mut sink, &[1, 2, 3]).await.unwrap();

    assert_eq!(frame_lens(&sink), vec![3]);
}

#[tokio::test(start_paused = true)]
async fn pump_preserves_byte_order_across_chunks() {
    let mut sink = CaptureSink::default();
    let audio: Vec<u8> = (0..CHUNK_SIZE + 10).map(|i| (i % 251) as u8).collect();

    pump(&mut sink, &audio).await.unwrap();

    let mut rejoined = Vec::new();
    for frame in &sink.frames {
        if let Message::Binary(data) = frame {
            rejoined.extend_from_slice(data);
        }
    }
    assert_eq!(rejoined, audio);
}

#[tokio::test]
async fn forward_relays_chunks_unpaced_in_order() {
    let mut sink = CaptureSink::default();
    let input = futures::stream::iter(vec![vec![1u8; 10], vec![2u8; 20], vec![3u8; 5]]);

    forward(&mut sink, input).await.unwrap();

    assert_eq!(frame_lens(&sink), vec![10, 20, 5]);
}

#[tokio::test]
async fn forward_completes_on_empty_stream() {
    let mut sink = CaptureSink::default();
    let input = futures::stream::iter(Vec::<Vec<u8>>::new());

    forward(&mut sink, input).await.unwrap();

    assert!(sink.frames.is_empty());
}

#[tokio::test]
async fn load_padded_missing_file_fails_before_any_send() {
    let err = load_padded("/path/to/fakefile.wav").await.unwrap_err();

    assert!(matches!(err, Error::FileNotFound(_)));
    assert!(err.to_string().contains("/path/to/fakefile.wav"));
}

#[tokio::test]
async fn load_padded_appends_trailing_silence() {
    let path = std::env::temp_dir().join(format!("framer-test-{}.raw", std::process::id()));
    let content: Vec<u8> = (1..=64).collect();
    std::fs::write(&path, &content).unwrap();

    let padded = load_padded(&path).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(padded.len(), content.len() + TRAILING_SILENCE_BYTES);
    assert_eq!(&padded[..content.len()], &content[..]);
    assert!(padded[content.len()..].iter().all(|&b| b == 0));
}
