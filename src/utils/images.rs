use sha2::{Digest, Sha256};
use std::fmt;

/// Extension used when the content type maps to no known extension
pub const FALLBACK_EXTENSION: &str = ".jpg";

const IMAGE_PREFIX: &str = "image/";

/// Hex-encoded SHA-256 digest of a response payload, used as the dedupe key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(pub(crate) String);

impl ContentHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 hex characters, used when synthesizing filenames
    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash the full payload
pub fn hash_content(content: &[u8]) -> ContentHash {
    let digest = Sha256::digest(content);
    ContentHash(hex::encode(digest))
}

/// Whether a declared content type is an image.
///
/// Only the header is consulted; the payload is never sniffed here. A missing
/// header is treated as "not an image".
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.starts_with(IMAGE_PREFIX))
}

/// Map a content type (parameters allowed) to a file extension, dot included
pub fn guess_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let ext = match essence.as_str() {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/apng" => ".apng",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "image/bmp" => ".bmp",
        "image/tiff" => ".tiff",
        "image/svg+xml" => ".svg",
        "image/vnd.microsoft.icon" => ".ico",
        "image/avif" => ".avif",
        "image/heic" => ".heic",
        "image/heif" => ".heif",
        "image/ief" => ".ief",
        "image/x-cmu-raster" => ".ras",
        "image/x-portable-anymap" => ".pnm",
        "image/x-portable-bitmap" => ".pbm",
        "image/x-portable-graymap" => ".pgm",
        "image/x-portable-pixmap" => ".ppm",
        "image/x-rgb" => ".rgb",
        "image/x-xbitmap" => ".xbm",
        "image/x-xpixmap" => ".xpm",
        "image/x-xwindowdump" => ".xwd",
        _ => return None,
    };
    Some(ext)
}

/// Extension for a synthesized filename: the content type's, or the fallback
pub fn image_extension(content_type: Option<&str>) -> &'static str {
    content_type
        .and_then(guess_extension)
        .unwrap_or(FALLBACK_EXTENSION)
}
