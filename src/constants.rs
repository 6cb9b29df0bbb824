//! Constants for data URI construction and parsing.

/// The URI scheme.
pub const SCHEME: &str = "data";

/// Parameter-block token that marks a base64 payload.
pub const BASE64_TOKEN: &str = "base64";

/// MIME type used when none is given at construction.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Charset added alongside [`DEFAULT_MIME_TYPE`].
pub const DEFAULT_CHARSET: &str = "US-ASCII";

/// MIME types with this prefix are rendered as percent-encoded text.
pub const TEXT_MIME_PREFIX: &str = "text/";

/// Payload ceiling for [`SizeLimitMode::Litlen`](crate::SizeLimitMode::Litlen).
pub const LIT_LIMIT: usize = 1024;

/// Payload ceiling for the attribute and tag length modes.
pub const ATTS_TAG_LIMIT: usize = 2100;

/// MIME type reported by the default sniffer for unrecognized binary content.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";
