use std::path::Path;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guesses a media type from the file extension (case-insensitive).
///
/// # Example
///
/// ```
/// # use filedock::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.HTML"), "text/html");
/// assert_eq!(content_type_for("archive.tar"), "application/octet-stream");
/// ```
pub fn content_type_for(file_name: impl AsRef<Path>) -> &'static str {
    let ext = file_name
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => OCTET_STREAM,
    }
}
