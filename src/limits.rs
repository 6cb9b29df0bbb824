//! Size-limit modes and validation settings.

use std::fmt;

use crate::constants::{ATTS_TAG_LIMIT, LIT_LIMIT};

/// Named payload size ceilings, historically tied to SGML length quantities.
///
/// `Attsplen` and `Taglen` share a ceiling; both exist so call sites can say
/// which context the URI is headed for.
///
/// # Examples
///
/// ```
/// use data_uri::SizeLimitMode;
///
/// assert_eq!(SizeLimitMode::Litlen.max_len(), 1024);
/// assert_eq!(SizeLimitMode::Taglen.max_len(), 2100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeLimitMode {
    /// Literal length, 1024 bytes
    Litlen,
    /// Attribute specification length, 2100 bytes
    Attsplen,
    /// Tag length, 2100 bytes
    #[default]
    Taglen,
}

impl SizeLimitMode {
    /// Returns the byte ceiling for this mode.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Litlen => LIT_LIMIT,
            Self::Attsplen | Self::Taglen => ATTS_TAG_LIMIT,
        }
    }

    /// Returns the conventional upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Litlen => "LITLEN",
            Self::Attsplen => "ATTSPLEN",
            Self::Taglen => "TAGLEN",
        }
    }
}

impl fmt::Display for SizeLimitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation settings applied when a [`DataUri`](crate::DataUri) is constructed.
///
/// The size limit of `mode` is only enforced when `strict` is set. Strict
/// validation also requires canonical base64 when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Validation {
    /// Enforce the size limit and canonical base64
    pub strict: bool,
    /// Which ceiling applies under strict validation
    pub mode: SizeLimitMode,
}

impl Validation {
    /// No size check, lenient base64 decoding.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict: false,
            mode: SizeLimitMode::Taglen,
        }
    }

    /// Strict validation against the ceiling of `mode`.
    #[must_use]
    pub const fn strict(mode: SizeLimitMode) -> Self {
        Self { strict: true, mode }
    }

    /// Returns the enforced ceiling, or `None` when not strict.
    #[must_use]
    pub const fn max_len(self) -> Option<usize> {
        if self.strict {
            Some(self.mode.max_len())
        } else {
            None
        }
    }
}
