/// Maps a file extension to its MIME type.
///
/// The table is fixed: it covers exactly the asset types the bundled viewer
/// ships (markup, scripts, styles, images, PDF and its locale files).
/// Extensions are matched case-sensitively, leading dot included.
///
/// # Example
///
/// ```
/// # use kiosk::http::mime::content_type;
/// assert_eq!(content_type(".pdf"), Some("application/pdf"));
/// assert_eq!(content_type(".txt"), None);
/// ```
pub fn content_type(extension: &str) -> Option<&'static str> {
    match extension {
        ".html" | ".htm" => Some("text/html"),
        ".js" => Some("text/javascript"),
        ".css" => Some("text/css"),
        ".png" => Some("image/png"),
        ".jpeg" | ".jpg" => Some("image/jpeg"),
        ".gif" => Some("image/gif"),
        ".bmp" => Some("image/bmp"),
        ".pdf" => Some("application/pdf"),
        ".properties" => Some("application/l10n"),
        _ => None,
    }
}
