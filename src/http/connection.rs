use std::path::PathBuf;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::mime;
use crate::http::parser::{ParseError, parse_request_head};
use crate::http::request::{Method, RequestHead};
use crate::http::response::{NOT_FOUND_DOCUMENT, ResponseHead};
use crate::http::writer::{ResponseWriter, copy_body};
use crate::sandbox;

/// Hard cap on the request head; a peer that never sends the blank line
/// cannot grow the buffer forever.
const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Handles exactly one request/response exchange on one accepted
/// connection, then closes it. The stream is released on every exit path
/// when the connection is dropped.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    root: Arc<PathBuf>,
}

impl Connection {
    pub fn new(stream: TcpStream, root: Arc<PathBuf>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            root,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let head = match self.read_head().await? {
            Some(head) => head,
            // Peer closed (or sent garbage) before completing the head
            None => return self.close().await,
        };

        if head.method != Method::GET {
            // No lookup and no response for anything but GET
            debug!(method = ?head.method, "non-GET request, closing");
            return self.close().await;
        }

        self.respond(&head).await?;
        self.close().await
    }

    /// Reads until the head terminator arrives, then parses.
    ///
    /// Returns `None` when no response should be attempted: the peer
    /// disconnected mid-head, the head was malformed, or it outgrew the cap.
    async fn read_head(&mut self) -> anyhow::Result<Option<RequestHead>> {
        loop {
            // Try parsing whatever we already have
            match parse_request_head(&self.buffer) {
                Ok((head, _consumed)) => return Ok(Some(head)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    debug!(error = ?e, "malformed request head, closing");
                    return Ok(None);
                }
            }

            if self.buffer.len() > MAX_HEAD_BYTES {
                debug!("request head too large, closing");
                return Ok(None);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }
        }
    }

    async fn respond(&mut self, head: &RequestHead) -> anyhow::Result<()> {
        // Unknown extensions are refused before touching the filesystem
        let Some(mime) = head.extension().and_then(mime::content_type) else {
            debug!(target = %head.target, "extension not served");
            return self.send_not_found().await;
        };

        match sandbox::resolve(&self.root, head.path()).await {
            Ok(mut resolved) => {
                let response = ResponseHead::ok_file(mime, resolved.len);
                let mut writer = ResponseWriter::new(&response);
                writer.write_to_stream(&mut self.stream).await?;

                let n = copy_body(&mut resolved.file, &mut self.stream).await?;
                debug!(path = %resolved.path.display(), bytes = n, "served file");
                Ok(())
            }

            Err(e) => {
                // Missing, unreadable, traversal: all the same 404 on the wire
                debug!(target = %head.target, error = ?e, "resolution failed");
                self.send_not_found().await
            }
        }
    }

    async fn send_not_found(&mut self) -> anyhow::Result<()> {
        let mut writer = ResponseWriter::from_bytes(NOT_FOUND_DOCUMENT);
        writer.write_to_stream(&mut self.stream).await
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        // The peer may already be gone; a failed shutdown changes nothing
        self.stream.shutdown().await.ok();
        Ok(())
    }
}
