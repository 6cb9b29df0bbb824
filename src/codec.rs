//! Payload encodings: base64 and raw percent-encoding.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

use crate::error::{DataUriError, Result};

/// Octets left unescaped by raw URL encoding: `A-Z a-z 0-9 - . _ ~`.
const RAW_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Standard alphabet, optional padding, trailing bits ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes bytes as padded standard base64.
pub(crate) fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes a base64 payload.
///
/// Strict decoding requires canonical padded standard base64. Lenient
/// decoding skips characters outside the alphabet, accepts missing padding,
/// and drops a dangling final sextet.
pub(crate) fn decode_base64(payload: &str, strict: bool) -> Result<Vec<u8>> {
    if strict {
        return STANDARD
            .decode(payload)
            .map_err(|e| DataUriError::invalid_data(e.to_string()));
    }

    let mut filtered: Vec<u8> = payload
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/'))
        .collect();
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }

    let decoded = LENIENT
        .decode(&filtered)
        .map_err(|e| DataUriError::invalid_data(e.to_string()))?;

    if decoded.is_empty() && !payload.is_empty() {
        return Err(DataUriError::invalid_data("payload contains no base64 data"));
    }
    Ok(decoded)
}

/// Percent-encodes every octet outside the unreserved set, uppercase hex.
///
/// Space becomes `%20`, never `+`.
pub(crate) fn percent_encode_raw(data: &[u8]) -> String {
    percent_encode(data, RAW_URL).to_string()
}

/// Decodes `%XX` escapes; everything else passes through unchanged.
pub(crate) fn percent_decode_raw(payload: &str) -> Vec<u8> {
    percent_decode_str(payload).collect()
}
