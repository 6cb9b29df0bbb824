//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use data_uri::prelude::*;
//!
//! let uri = DataUri::parse("data:text/plain,hi").unwrap();
//! assert_eq!(uri.data(), b"hi");
//! ```

#[cfg(feature = "http")]
pub use crate::{ReqwestFetcher, from_url};
pub use crate::{
    // Core types
    DataUri, DataUriBuilder, Parameters, SizeLimitMode, Validation,
    // Entry points
    from_file, from_file_with, from_url_with, parse,
    // Collaborators
    DefaultSniffer, FetchResponse, HttpFetch, MimeSniffer,
    // Errors
    DataUriError, FetchError,
};
