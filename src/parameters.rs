//! Media-type parameters for data URIs.

use std::fmt;

use indexmap::IndexMap;

use crate::constants::BASE64_TOKEN;

/// Parameters attached to the media type of a data URI.
///
/// Stores name-value pairs in insertion order so serialization is
/// deterministic. Inserting an existing name overwrites its value in place.
/// The name `base64` is reserved for the encoding marker and is never stored.
///
/// # Examples
///
/// ```
/// use data_uri::Parameters;
///
/// let mut params = Parameters::new();
/// params.insert("charset", "utf-8");
/// params.insert("name", "report.txt");
/// assert_eq!(params.get("charset"), Some("utf-8"));
/// assert_eq!(params.to_string(), ";charset=utf-8;name=report.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    params: IndexMap<String, String>,
}

/// Result of splitting the parameter block of a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ParameterBlock {
    pub(crate) parameters: Parameters,
    pub(crate) base64: bool,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a parameter.
    ///
    /// Returns `false` when `name` is the reserved `base64` marker, which is
    /// dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if name == BASE64_TOKEN {
            tracing::warn!(
                parameter = %name,
                "dropping reserved parameter name; base64 is an encoding flag"
            );
            return false;
        }
        self.params.insert(name, value.into());
        true
    }

    /// Inserts a parameter only if `name` is not present yet.
    pub(crate) fn insert_if_absent(&mut self, name: &str, value: &str) {
        if !self.params.contains_key(name) {
            self.insert(name, value);
        }
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if a parameter with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Splits a raw parameter block such as `;charset=utf-8;base64`.
    ///
    /// Segments are separated by `;`. A segment containing `=` is split on
    /// its first `=`, so values may contain further `=` characters. The bare
    /// `base64` token sets the encoding flag. Other bare segments are ignored.
    pub(crate) fn parse_block(block: &str) -> ParameterBlock {
        let mut result = ParameterBlock::default();

        for segment in block.split(';') {
            if let Some((name, value)) = segment.split_once('=') {
                result.parameters.insert(name, value);
            } else if segment == BASE64_TOKEN {
                result.base64 = true;
            }
        }

        result
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.params {
            write!(f, ";{name}={value}")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_block() {
        let block = Parameters::parse_block("");
        assert!(block.parameters.is_empty());
        assert!(!block.base64);
    }

    #[test]
    fn parse_single_param() {
        let block = Parameters::parse_block(";charset=utf-8");
        assert_eq!(block.parameters.get("charset"), Some("utf-8"));
        assert_eq!(block.parameters.len(), 1);
    }

    #[test]
    fn parse_base64_flag() {
        let block = Parameters::parse_block(";name=a.png;base64");
        assert!(block.base64);
        assert_eq!(block.parameters.get("name"), Some("a.png"));
        assert!(!block.parameters.contains("base64"));
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        let block = Parameters::parse_block(";token=a=b=c");
        assert_eq!(block.parameters.get("token"), Some("a=b=c"));
    }

    #[test]
    fn bare_segments_are_ignored() {
        let block = Parameters::parse_block(";foo;Base64;bar=1");
        assert!(!block.base64);
        assert_eq!(block.parameters.len(), 1);
        assert_eq!(block.parameters.get("bar"), Some("1"));
    }

    #[test]
    fn reserved_name_is_dropped() {
        let block = Parameters::parse_block(";base64=yes");
        assert!(block.parameters.is_empty());
        assert!(!block.base64);

        let mut params = Parameters::new();
        assert!(!params.insert("base64", "1"));
        assert!(params.is_empty());
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut params: Parameters = [("a", "1"), ("b", "2")].into_iter().collect();
        params.insert("a", "3");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn insert_if_absent_keeps_existing() {
        let mut params: Parameters = [("charset", "utf-8")].into_iter().collect();
        params.insert_if_absent("charset", "US-ASCII");
        assert_eq!(params.get("charset"), Some("utf-8"));
    }

    #[test]
    fn display_preserves_insertion_order() {
        let params: Parameters = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(params.to_string(), ";z=1;a=2");
    }

    #[test]
    fn display_empty() {
        assert_eq!(Parameters::new().to_string(), "");
    }
}
