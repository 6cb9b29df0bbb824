//! Fluent builder for constructing [`DataUri`] instances.

use crate::error::Result;
use crate::limits::{SizeLimitMode, Validation};
use crate::parameters::Parameters;
use crate::uri::DataUri;

/// A builder for [`DataUri`] values.
///
/// Collects the payload, MIME type, parameters, validation settings, and an
/// optional explicit binary classification, then applies the same
/// construction rules as [`DataUri::with_options`].
///
/// # Examples
///
/// ```
/// use data_uri::{DataUriBuilder, SizeLimitMode};
///
/// let uri = DataUriBuilder::new(b"<svg/>".to_vec())
///     .mime_type("image/svg+xml")
///     .parameter("name", "icon.svg")
///     .binary(false)
///     .strict(SizeLimitMode::Litlen)
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_uri_string(), "data:image/svg+xml;name=icon.svg,%3Csvg%2F%3E");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataUriBuilder {
    data: Vec<u8>,
    mime_type: Option<String>,
    parameters: Parameters,
    validation: Validation,
    binary: Option<bool>,
}

impl DataUriBuilder {
    /// Creates a builder for `data` with no MIME type and lenient validation.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Sets the MIME type. If called multiple times, the last value wins.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Adds a parameter, overwriting an earlier one with the same name.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Replaces all parameters.
    #[must_use]
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the validation settings.
    #[must_use]
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Enables strict validation against the ceiling of `mode`.
    #[must_use]
    pub fn strict(self, mode: SizeLimitMode) -> Self {
        self.validation(Validation::strict(mode))
    }

    /// Overrides the binary classification derived from the MIME type.
    #[must_use]
    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = Some(binary);
        self
    }

    /// Builds the [`DataUri`].
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::TooLongData`](crate::DataUriError::TooLongData)
    /// if strict validation is enabled and the payload exceeds its ceiling.
    pub fn build(self) -> Result<DataUri> {
        let mut uri = DataUri::with_options(
            self.data,
            self.mime_type.as_deref(),
            self.parameters,
            self.validation,
        )?;
        if let Some(binary) = self.binary {
            uri.set_binary_data(binary);
        }
        Ok(uri)
    }
}
