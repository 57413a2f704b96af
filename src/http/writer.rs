use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::ResponseHead;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &head.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Head/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(head: &ResponseHead) -> Self {
        Self {
            buffer: serialize_head(head),
            written: 0,
        }
    }

    /// Wraps pre-serialized response bytes, used for the fixed 404 document.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.to_vec(),
            written: 0,
        }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Copies the file's bytes to the client verbatim, returning the count
/// written. Backpressure is the transport's: the copy suspends whenever
/// the socket cannot take more.
pub async fn copy_body(file: &mut File, stream: &mut TcpStream) -> anyhow::Result<u64> {
    let n = tokio::io::copy(file, stream).await?;
    stream.flush().await?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_ok_head_in_order() {
        let head = ResponseHead::ok_file("text/html", 1234);
        let bytes = serialize_head(&head);

        assert_eq!(
            bytes,
            b"HTTP/1.1 200 OK\r\n\
              Content-Type: text/html\r\n\
              Content-Length: 1234\r\n\
              Connection: close\r\n\
              \r\n"
        );
    }
}
