/// HTTP status codes the server emits.
///
/// The wire surface is deliberately small: a request either succeeds with
/// `Ok` (200) or degrades to `NotFound` (404). Every other failure closes
/// the connection without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The head of an HTTP response: status line plus ordered headers.
///
/// Headers keep insertion order so the serialized head is byte-stable;
/// the body is streamed separately by the connection handler.
#[derive(Debug)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
}

impl ResponseHead {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Appends a header.
    pub fn header(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((key, value.into()));
        self
    }

    /// Head for a successful file response of `len` bytes.
    pub fn ok_file(mime: &str, len: u64) -> Self {
        Self::new(StatusCode::Ok)
            .header("Content-Type", mime)
            .header("Content-Length", len.to_string())
            .header("Connection", "close")
    }
}

/// The complete not-found response, headers and body, sent verbatim for
/// every failure the server answers at all: unknown extension, missing
/// file or directory, and any resolution I/O error.
///
/// The advertised Content-Length stops at 20 while the body runs longer;
/// the bundled viewer was shipped against this exact framing, so the
/// mismatch is kept on the wire.
pub const NOT_FOUND_DOCUMENT: &[u8] = b"HTTP/1.1 404 Not Found\r\n\
Connection: close\r\n\
Content-Type: text/html\r\n\
Content-Length: 20\r\n\
\r\n\
<body>404 Not Found.</body>\r\n\r\n";
