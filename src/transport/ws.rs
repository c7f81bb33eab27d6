use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};

const CLIENT_TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-clienttraceid");
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct WsStream(WebSocketStream<MaybeTlsStream<TcpStream>>);

impl WsStream {
    pub(crate) const fn new(stream: WebSocketStream<MaybeTlsStream<TcpStream>>) -> Self {
        Self(stream)
    }
}

impl futures::Stream for WsStream {
    type Item = std::result::Result<
        tokio_tungstenite::tungstenite::Message,
        tokio_tungstenite::tungstenite::Error,
    >;

    fn poll_next(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        std::pin::Pin::new(&mut self.0).poll_next(cx)
    }
}

impl futures::Sink<tokio_tungstenite::tungstenite::Message> for WsStream {
    type Error = tokio_tungstenite::tungstenite::Error;

    fn poll_ready(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        std::pin::Pin::new(&mut self.0).poll_ready(cx)
    }

    fn start_send(
        mut self: std::pin::Pin<&mut Self>,
        item: tokio_tungstenite::tungstenite::Message,
    ) -> std::result::Result<(), Self::Error> {
        std::pin::Pin::new(&mut self.0).start_send(item)
    }

    fn poll_flush(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        std::pin::Pin::new(&mut self.0).poll_flush(cx)
    }

    fn poll_close(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        std::pin::Pin::new(&mut self.0).poll_close(cx)
    }
}

/// Open the streaming WebSocket, authenticated with a bearer token.
///
/// Single attempt with an explicit timeout; exactly one terminal outcome.
///
/// # Errors
/// Returns [`Error::Connection`] if the handshake fails, or
/// [`Error::Timeout`] if it does not complete within the connect timeout.
pub async fn connect(endpoint_url: &str, access_token: &str, trace_id: Uuid) -> Result<WsStream> {
    let url = Url::parse(endpoint_url)?;

    let auth_header = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
    let trace_header = HeaderValue::from_str(&trace_id.to_string())?;

    let mut req = tokio_tungstenite::tungstenite::client::IntoClientRequest::into_client_request(
        url.as_str(),
    )
    .map_err(Error::Connection)?;
    let h = req.headers_mut();
    h.insert(AUTHORIZATION, auth_header);
    h.insert(CLIENT_TRACE_ID_HEADER, trace_header);

    tracing::debug!("connecting to translation endpoint");
    let (ws_stream, _) = tokio::time::timeout(CONNECT_TIMEOUT, connect_async(req))
        .await
        .map_err(|_| Error::Timeout("websocket connect"))?
        .map_err(Error::Connection)?;

    tracing::info!("connected to translation endpoint");

    Ok(WsStream::new(ws_stream))
}
