use kiosk::http::response::{NOT_FOUND_DOCUMENT, ResponseHead, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_ok_file_header_order() {
    let head = ResponseHead::ok_file("application/pdf", 42);

    assert_eq!(head.status, StatusCode::Ok);
    assert_eq!(
        head.headers,
        vec![
            ("Content-Type", "application/pdf".to_string()),
            ("Content-Length", "42".to_string()),
            ("Connection", "close".to_string()),
        ]
    );
}

#[test]
fn test_header_appends_in_order() {
    let head = ResponseHead::new(StatusCode::Ok)
        .header("Content-Type", "text/css")
        .header("Connection", "close");

    assert_eq!(head.headers[0].0, "Content-Type");
    assert_eq!(head.headers[1].0, "Connection");
}

#[test]
fn test_not_found_document_exact_bytes() {
    let expected = b"HTTP/1.1 404 Not Found\r\n\
Connection: close\r\n\
Content-Type: text/html\r\n\
Content-Length: 20\r\n\
\r\n\
<body>404 Not Found.</body>\r\n\r\n";

    assert_eq!(NOT_FOUND_DOCUMENT, &expected[..]);
}

#[test]
fn test_not_found_document_understates_body_length() {
    // The framing ships a 31-byte body behind a Content-Length of 20;
    // clients that honor the header read "<body>404 Not Found."
    let pos = NOT_FOUND_DOCUMENT
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .unwrap();
    let body = &NOT_FOUND_DOCUMENT[pos + 4..];

    assert_eq!(body.len(), 31);
    assert_eq!(&body[..20], b"<body>404 Not Found.");
}
