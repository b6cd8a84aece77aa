//! Data-URL encoding for media previews.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// MIME type from the file extension. The attach surface only promises an
/// image/video accept filter; anything else falls back to a generic
/// binary type rather than being rejected.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_common_extensions() {
        assert_eq!(mime_for_path(Path::new("cat.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("cat.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(mime_for_path(Path::new("clip.mov")), "video/quicktime");
    }

    #[test]
    fn test_mime_ignores_extension_case() {
        assert_eq!(mime_for_path(Path::new("CAT.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("clip.WebM")), "video/webm");
    }

    #[test]
    fn test_mime_falls_back_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/png", b"abc"),
            "data:image/png;base64,YWJj"
        );
    }

    #[test]
    fn test_encode_data_url_empty_payload() {
        assert_eq!(encode_data_url("image/gif", b""), "data:image/gif;base64,");
    }
}
