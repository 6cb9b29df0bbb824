//! Entry points that produce a [`DataUri`] from a string, a file, or a URL.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::codec::{decode_base64, percent_decode_raw};
use crate::error::{DataUriError, Result};
use crate::fetch::{HttpFetch, split_content_type};
use crate::limits::Validation;
use crate::parameters::Parameters;
use crate::sniff::{DefaultSniffer, MimeSniffer};
use crate::uri::DataUri;

/// `data:` + MIME token + optional parameter block + `,` + payload.
///
/// The MIME token stops at the first character outside its class, so the
/// parameter block starts at the first `;`. The payload runs to the end of
/// the input, line breaks and commas included.
static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:([A-Za-z0-9/+.-]+)([A-Za-z0-9_;=.+-]+)?,(?s)(.*)")
        .expect("data URI grammar is a valid regex")
});

/// Parses a data URI string.
///
/// Parameters of the form `name=value` are recorded in order; the bare
/// `base64` token marks the payload as base64, and its presence decides the
/// binary classification of the result regardless of the MIME type.
///
/// # Errors
///
/// - [`DataUriError::InvalidArgument`] if `input` does not match the grammar
/// - [`DataUriError::InvalidData`] if a base64 payload cannot be decoded
///   (strict validation requires canonical base64)
/// - [`DataUriError::TooLongData`] if the decoded payload exceeds the
///   strict size limit
///
/// # Examples
///
/// ```
/// use data_uri::{parse, Validation};
///
/// let uri = parse("data:text/plain;charset=utf-8,a%2Cb", Validation::default()).unwrap();
/// assert_eq!(uri.data(), b"a,b");
/// assert_eq!(uri.charset(), Some("utf-8"));
/// assert!(!uri.is_binary_data());
/// ```
pub fn parse(input: &str, validation: Validation) -> Result<DataUri> {
    let caps = GRAMMAR.captures(input).ok_or_else(|| {
        let reason = if input.starts_with("data:") {
            "expected a MIME type, optional parameters, and a ',' before the payload"
        } else {
            "missing 'data:' scheme"
        };
        DataUriError::invalid_argument(input, reason)
    })?;

    let mime_type = caps.get(1).map_or("", |m| m.as_str());
    let block = Parameters::parse_block(caps.get(2).map_or("", |m| m.as_str()));
    let payload = caps.get(3).map_or("", |m| m.as_str());

    let data = if block.base64 {
        decode_base64(payload, validation.strict)?
    } else {
        percent_decode_raw(payload)
    };

    let mut uri = DataUri::with_options(data, Some(mime_type), block.parameters, validation)?;
    uri.set_binary_data(block.base64);

    tracing::debug!(
        mime_type = uri.mime_type(),
        bytes = uri.len(),
        base64 = block.base64,
        "parsed data URI"
    );
    Ok(uri)
}

/// Loads a file, detecting its MIME type with [`DefaultSniffer`].
///
/// # Errors
///
/// See [`from_file_with`].
pub fn from_file(path: impl AsRef<Path>, validation: Validation) -> Result<DataUri> {
    from_file_with(path, &DefaultSniffer, validation)
}

/// Loads a file, detecting its MIME type with `sniffer`.
///
/// The result has no parameters and the binary classification implied by
/// the detected MIME type.
///
/// # Errors
///
/// - [`DataUriError::FileNotFound`] if `path` does not exist
/// - [`DataUriError::Io`] if the file cannot be read
/// - [`DataUriError::TooLongData`] if the file exceeds the strict size limit
pub fn from_file_with(
    path: impl AsRef<Path>,
    sniffer: &dyn MimeSniffer,
    validation: Validation,
) -> Result<DataUri> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataUriError::file_not_found(path.display().to_string(), None));
    }

    let contents = fs::read(path).map_err(|e| DataUriError::io(path, &e))?;
    let mime_type = sniffer.detect(path, &contents);

    let uri = DataUri::with_options(contents, Some(&mime_type), Parameters::new(), validation)?;
    tracing::debug!(path = %path.display(), mime_type = %mime_type, bytes = uri.len(), "loaded file");
    Ok(uri)
}

/// Downloads a URL with a blocking [`reqwest`] client.
///
/// # Errors
///
/// See [`from_url_with`].
#[cfg(feature = "http")]
pub fn from_url(url: &str, validation: Validation) -> Result<DataUri> {
    from_url_with(url, &crate::fetch::ReqwestFetcher::new(), validation)
}

/// Downloads a URL through `fetcher`.
///
/// Only status 200 counts as success. The media type of the
/// `Content-Type` header becomes the MIME type and its parameters are kept;
/// without the header the MIME type defaults as in
/// [`DataUri::with_options`].
///
/// # Errors
///
/// - [`DataUriError::FileNotFound`] if the request fails or the status is
///   not 200
/// - [`DataUriError::TooLongData`] if the body exceeds the strict size limit
pub fn from_url_with(
    url: &str,
    fetcher: &dyn HttpFetch,
    validation: Validation,
) -> Result<DataUri> {
    let response = fetcher.get(url).map_err(|e| {
        tracing::debug!(url, error = %e, "fetch failed");
        DataUriError::file_not_found(url, None)
    })?;

    if response.status != 200 {
        tracing::debug!(url, status = response.status, "fetch returned non-success status");
        return Err(DataUriError::file_not_found(url, Some(response.status)));
    }

    let (mime_type, parameters) = match response.content_type.as_deref() {
        Some(header) => {
            let (media_type, params) = split_content_type(header);
            (Some(media_type), params.into_iter().collect())
        }
        None => (None, Parameters::new()),
    };

    let uri = DataUri::with_options(response.body, mime_type, parameters, validation)?;
    tracing::debug!(url, mime_type = uri.mime_type(), bytes = uri.len(), "fetched URL");
    Ok(uri)
}
