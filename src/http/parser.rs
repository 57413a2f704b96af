use crate::http::request::{Method, RequestHead};

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    Incomplete,
}

/// Parses a request head from the front of `buf`.
///
/// Returns the parsed head and the number of bytes consumed, or
/// `ParseError::Incomplete` when the terminating blank line has not
/// arrived yet.
pub fn parse_request_head(buf: &[u8]) -> Result<(RequestHead, usize), ParseError> {
    // Look for the end of the header block
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Remaining header lines are kept verbatim; nothing downstream reads them
    let raw_lines = lines
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let head = RequestHead {
        method,
        target: target.to_string(),
        version: version.to_string(),
        lines: raw_lines,
    };

    let consumed = headers_end + 4;
    Ok((head, consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
