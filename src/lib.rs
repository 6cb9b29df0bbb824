//! Builder and parser for RFC 2397 `data:` URIs.
//!
//! This crate converts between raw bytes plus media-type metadata and the
//! textual `data:` URI form, enforcing the classic SGML length limits when
//! asked to.
//!
//! # Overview
//!
//! Data URIs embed a payload directly in a URI:
//!
//! ```text
//! data:<mime-type>[;<name>=<value>]*[;base64],<payload>
//! ```
//!
//! The payload is base64 when the `;base64` marker is present and raw
//! percent-encoded text otherwise.
//!
//! # Quick Start
//!
//! ```rust
//! use data_uri::DataUri;
//!
//! // Parse a data URI
//! let uri = DataUri::parse("data:image/png;base64,aGVsbG8=").unwrap();
//! assert_eq!(uri.mime_type(), "image/png");
//! assert_eq!(uri.data(), b"hello");
//! assert!(uri.is_binary_data());
//!
//! // Build one from bytes
//! let text = DataUri::new("hello world");
//! assert_eq!(text.to_string(), "data:text/plain;charset=US-ASCII,hello%20world");
//! ```
//!
//! # Size Limits
//!
//! With strict validation the decoded payload must fit the ceiling of the
//! selected [`SizeLimitMode`]:
//!
//! | Mode | Max payload |
//! |------|-------------|
//! | `Litlen` | 1024 bytes |
//! | `Attsplen` | 2100 bytes |
//! | `Taglen` | 2100 bytes |
//!
//! ```rust
//! use data_uri::{parse, DataUriError, SizeLimitMode, Validation};
//!
//! let input = format!("data:text/plain,{}", "a".repeat(1025));
//! let err = parse(&input, Validation::strict(SizeLimitMode::Litlen)).unwrap_err();
//! assert!(matches!(err, DataUriError::TooLongData { length: 1025, .. }));
//! ```
//!
//! # Files and URLs
//!
//! [`from_file`] loads a file and detects its MIME type; `from_url`
//! (feature `http`) downloads a resource with a blocking `reqwest` client.
//! Both have `_with` variants taking a [`MimeSniffer`] or [`HttpFetch`]
//! so detection and transport can be replaced.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`DataUri`] (as its URI string)
//!   and for the validation settings
//! - `http`: `from_url` and `ReqwestFetcher`

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod codec;
mod constants;
mod error;
mod fetch;
mod limits;
mod parameters;
mod parser;
pub mod prelude;
mod sniff;
mod uri;

pub use builder::DataUriBuilder;
pub use constants::{
    ATTS_TAG_LIMIT, BASE64_TOKEN, DEFAULT_CHARSET, DEFAULT_MIME_TYPE, FALLBACK_MIME_TYPE,
    LIT_LIMIT, SCHEME, TEXT_MIME_PREFIX,
};
pub use error::{DataUriError, FetchError, Result};
#[cfg(feature = "http")]
pub use fetch::ReqwestFetcher;
pub use fetch::{FetchResponse, HttpFetch};
pub use limits::{SizeLimitMode, Validation};
pub use parameters::Parameters;
#[cfg(feature = "http")]
pub use parser::from_url;
pub use parser::{from_file, from_file_with, from_url_with, parse};
pub use sniff::{DefaultSniffer, MimeSniffer};
pub use uri::DataUri;
