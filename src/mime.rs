//! Extension → MIME lookup for presenting decrypted output.
//!
//! Purely cosmetic: the table lets a caller re-wrap a decrypted buffer
//! with a sensible content type. It has no security role.

/// Map a filename's extension to a MIME type. Unknown extensions (and
/// names without one) fall back to `application/octet-stream`.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}
