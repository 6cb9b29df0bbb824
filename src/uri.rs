//! Main data URI type.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

use crate::codec::{encode_base64, percent_encode_raw};
use crate::constants::{BASE64_TOKEN, DEFAULT_CHARSET, DEFAULT_MIME_TYPE, SCHEME, TEXT_MIME_PREFIX};
use crate::error::{DataUriError, Result};
use crate::limits::Validation;
use crate::parameters::Parameters;
use crate::parser;

/// An RFC 2397 data URI: a payload plus its media type.
///
/// The payload is kept as raw bytes. Whether it is rendered as base64 or
/// as percent-encoded text is decided by [`is_binary_data`](Self::is_binary_data),
/// which defaults to `true` for every MIME type outside `text/`.
///
/// # Structure
///
/// ```text
/// data:<mime-type>[;<name>=<value>]*[;base64],<payload>
/// ```
///
/// # Examples
///
/// ```
/// use data_uri::DataUri;
///
/// let uri = DataUri::new(b"hello world".to_vec());
/// assert_eq!(uri.mime_type(), "text/plain");
/// assert_eq!(uri.to_uri_string(), "data:text/plain;charset=US-ASCII,hello%20world");
///
/// let png = DataUri::parse("data:image/png;base64,aGVsbG8=").unwrap();
/// assert!(png.is_binary_data());
/// assert_eq!(png.data(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    data: Vec<u8>,
    mime_type: String,
    parameters: Parameters,
    is_binary_data: bool,
}

impl DataUri {
    /// Creates a `text/plain;charset=US-ASCII` data URI without size checks.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let mut parameters = Parameters::new();
        parameters.insert_if_absent("charset", DEFAULT_CHARSET);
        Self {
            data: data.into(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            parameters,
            is_binary_data: false,
        }
    }

    /// Creates a data URI from its parts.
    ///
    /// An absent or empty `mime_type` becomes `text/plain` and adds
    /// `charset=US-ASCII` unless a charset was supplied. The binary flag is
    /// set for every MIME type not starting with `text/`.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::TooLongData`] when `validation` is strict and
    /// `data` exceeds the ceiling of its mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_uri::{DataUri, DataUriError, Parameters, SizeLimitMode, Validation};
    ///
    /// let err = DataUri::with_options(
    ///     vec![0u8; 1025],
    ///     Some("image/png"),
    ///     Parameters::new(),
    ///     Validation::strict(SizeLimitMode::Litlen),
    /// )
    /// .unwrap_err();
    /// assert_eq!(err, DataUriError::TooLongData { length: 1025, max: 1024 });
    /// ```
    pub fn with_options(
        data: impl Into<Vec<u8>>,
        mime_type: Option<&str>,
        parameters: Parameters,
        validation: Validation,
    ) -> Result<Self> {
        let data = data.into();

        if let Some(max) = validation.max_len().filter(|&max| data.len() > max) {
            return Err(DataUriError::too_long_data(data.len(), max));
        }

        let mut parameters = parameters;
        let mime_type = match mime_type.filter(|m| !m.is_empty()) {
            Some(m) => m.to_string(),
            None => {
                parameters.insert_if_absent("charset", DEFAULT_CHARSET);
                DEFAULT_MIME_TYPE.to_string()
            }
        };
        let is_binary_data = !mime_type.starts_with(TEXT_MIME_PREFIX);

        Ok(Self {
            data,
            mime_type,
            parameters,
            is_binary_data,
        })
    }

    /// Parses a data URI with default (lenient) validation.
    ///
    /// # Errors
    ///
    /// See [`parse`](crate::parse).
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input, Validation::default())
    }

    /// Returns the raw payload.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the URI and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the media-type parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the `charset` parameter, if present.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.parameters.get("charset")
    }

    /// Returns true if the payload is rendered as base64.
    #[must_use]
    pub const fn is_binary_data(&self) -> bool {
        self.is_binary_data
    }

    /// Overrides the binary classification.
    pub fn set_binary_data(&mut self, binary: bool) -> &mut Self {
        self.is_binary_data = binary;
        self
    }

    /// Inserts or overwrites a parameter.
    ///
    /// Names and values are not validated. The reserved name `base64` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_uri::DataUri;
    ///
    /// let mut uri = DataUri::new("hi");
    /// uri.add_parameter("charset", "utf-8").add_parameter("lang", "en");
    /// assert_eq!(uri.to_uri_string(), "data:text/plain;charset=utf-8;lang=en,hi");
    /// ```
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parameters.insert(name, value);
        self
    }

    /// Writes the raw payload to `path`.
    ///
    /// Without `overwrite` the file is created exclusively, so an existing
    /// destination is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::FileExists`] if `path` exists and `overwrite`
    /// is false, or [`DataUriError::Io`] if the OS rejects the write.
    pub fn write_to_disk(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<()> {
        let path = path.as_ref();

        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                DataUriError::file_exists(path)
            } else {
                DataUriError::io(path, &e)
            }
        })?;
        file.write_all(&self.data)
            .and_then(|()| file.flush())
            .map_err(|e| DataUriError::io(path, &e))?;

        tracing::debug!(path = %path.display(), bytes = self.data.len(), overwrite, "wrote data URI payload");
        Ok(())
    }

    /// Renders the canonical URI string.
    ///
    /// Binary payloads are base64 encoded and marked with `;base64`; text
    /// payloads are raw percent-encoded.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        let (marker, payload) = if self.is_binary_data {
            (format!(";{BASE64_TOKEN}"), encode_base64(&self.data))
        } else {
            (String::new(), percent_encode_raw(&self.data))
        };

        format!(
            "{SCHEME}:{}{}{marker},{payload}",
            self.mime_type, self.parameters
        )
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DataUri {
    type Error = DataUriError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DataUri {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_uri_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DataUri {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
