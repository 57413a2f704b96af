use kiosk::http::parser::{ParseError, parse_request_head};
use kiosk::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /web/viewer.html HTTP/1.1\r\nHost: localhost:8088\r\n\r\n";
    let (head, consumed) = parse_request_head(req).unwrap();

    assert_eq!(head.method, Method::GET);
    assert_eq!(head.target, "/web/viewer.html");
    assert_eq!(head.version, "HTTP/1.1");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_keeps_header_lines_in_order() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost\r\nUser-Agent: webview\r\nAccept: */*\r\n\r\n";
    let (head, _) = parse_request_head(req).unwrap();

    assert_eq!(
        head.lines,
        vec![
            "Host: localhost".to_string(),
            "User-Agent: webview".to_string(),
            "Accept: */*".to_string(),
        ]
    );
}

#[test]
fn test_parse_target_keeps_query_string() {
    let req = b"GET /web/viewer.html?file=/pdf/mysample.pdf HTTP/1.1\r\n\r\n";
    let (head, _) = parse_request_head(req).unwrap();

    assert_eq!(head.target, "/web/viewer.html?file=/pdf/mysample.pdf");
}

#[test]
fn test_parse_incomplete_without_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost\r\n";
    let result = parse_request_head(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_empty_buffer() {
    let result = parse_request_head(b"");

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_unknown_method_token() {
    let req = b"BREW / HTTP/1.1\r\n\r\n";
    let result = parse_request_head(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_missing_target() {
    let req = b"GET\r\n\r\n";
    let result = parse_request_head(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_non_utf8_head() {
    let req = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";
    let result = parse_request_head(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (head, _) = parse_request_head(req.as_bytes()).unwrap();
        assert_eq!(head.method, expected_method);
    }
}

#[test]
fn test_parse_consumed_excludes_trailing_bytes() {
    let req = b"GET / HTTP/1.1\r\n\r\nleftover";
    let (_, consumed) = parse_request_head(req).unwrap();

    assert_eq!(consumed, req.len() - "leftover".len());
}
