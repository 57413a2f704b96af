/// HTTP request methods.
///
/// The server only serves GET; every other method is parsed, then the
/// connection is closed without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string (case-sensitive).
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// The head of a parsed HTTP request.
///
/// Only the request line is ever interpreted; the remaining header lines are
/// kept as received and ignored by the handler.
#[derive(Debug, Clone)]
pub struct RequestHead {
    /// The HTTP method (GET, POST, ...)
    pub method: Method,
    /// The request target, path plus optional query string
    pub target: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Raw header lines after the request line, in order
    pub lines: Vec<String>,
}

impl RequestHead {
    /// The request path: the target with everything after `?` stripped.
    pub fn path(&self) -> &str {
        match self.target.split_once('?') {
            Some((path, _query)) => path,
            None => &self.target,
        }
    }

    /// The file extension of the path's final segment, leading dot included.
    ///
    /// `None` when the final segment has no dot at all.
    pub fn extension(&self) -> Option<&str> {
        let path = self.path();
        let name = path.rsplit('/').next().unwrap_or(path);
        name.rfind('.').map(|i| &name[i..])
    }
}
