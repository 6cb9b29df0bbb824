//! MIME type detection for files loaded with [`from_file`](crate::from_file).

use std::path::Path;

use crate::constants::{DEFAULT_MIME_TYPE, FALLBACK_MIME_TYPE};

/// Determines the MIME type of a file.
///
/// Detection is best effort: implementations return a generic type when
/// nothing more specific is known. Closures taking the path and contents
/// implement this trait, which keeps tests free of platform databases.
///
/// ```
/// use std::path::Path;
/// use data_uri::MimeSniffer;
///
/// let always_svg = |_: &Path, _: &[u8]| "image/svg+xml".to_string();
/// assert_eq!(always_svg.detect(Path::new("logo"), b"<svg/>"), "image/svg+xml");
/// ```
pub trait MimeSniffer {
    /// Returns the MIME type for a file at `path` with the given contents.
    fn detect(&self, path: &Path, contents: &[u8]) -> String;
}

impl<F> MimeSniffer for F
where
    F: Fn(&Path, &[u8]) -> String,
{
    fn detect(&self, path: &Path, contents: &[u8]) -> String {
        self(path, contents)
    }
}

/// Leading-byte signatures checked before the file extension.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
    (b"BM", "image/bmp"),
    (b"\x00\x00\x01\x00", "image/vnd.microsoft.icon"),
    (b"\x00asm", "application/wasm"),
];

const EXTENSIONS: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("gif", "image/gif"),
    ("gz", "application/gzip"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("md", "text/markdown"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("otf", "font/otf"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("ttf", "font/ttf"),
    ("txt", "text/plain"),
    ("wasm", "application/wasm"),
    ("wav", "audio/wav"),
    ("webp", "image/webp"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
];

/// Default sniffer: magic bytes, then extension, then a text/binary guess.
///
/// Content that matches no signature and has no known extension is reported
/// as `text/plain` when it is valid UTF-8 and `application/octet-stream`
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSniffer;

impl DefaultSniffer {
    /// Looks up a MIME type by leading bytes.
    #[must_use]
    pub fn by_signature(contents: &[u8]) -> Option<&'static str> {
        if contents.len() >= 12 && &contents[..4] == b"RIFF" && &contents[8..12] == b"WEBP" {
            return Some("image/webp");
        }
        SIGNATURES
            .iter()
            .find(|(magic, _)| contents.starts_with(magic))
            .map(|&(_, mime)| mime)
    }

    /// Looks up a MIME type by file extension, case-insensitively.
    #[must_use]
    pub fn by_extension(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|&(_, mime)| mime)
    }
}

impl MimeSniffer for DefaultSniffer {
    fn detect(&self, path: &Path, contents: &[u8]) -> String {
        Self::by_signature(contents)
            .or_else(|| Self::by_extension(path))
            .unwrap_or_else(|| {
                if std::str::from_utf8(contents).is_ok() {
                    DEFAULT_MIME_TYPE
                } else {
                    FALLBACK_MIME_TYPE
                }
            })
            .to_string()
    }
}
