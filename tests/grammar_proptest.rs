//! Property-based tests validating the parser and serializer against the
//! data URI grammar.
//!
//! These tests generate random payloads, MIME types, and parameter sets and
//! verify that rendering followed by parsing preserves them.

use proptest::prelude::*;

use data_uri::{
    DataUri, DataUriError, LIT_LIMIT, Parameters, SizeLimitMode, Validation, parse,
};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Generate a MIME type outside `text/`, including vendor and suffix forms.
    pub fn binary_mime_type() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["application", "image", "audio", "video", "font"]),
            "[a-z][a-z0-9]{0,7}([.+-][a-z0-9]{1,6}){0,2}",
        )
            .prop_map(|(top, sub)| format!("{top}/{sub}"))
    }

    /// Generate a `text/` MIME type.
    pub fn text_mime_type() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,9}".prop_map(|sub| format!("text/{sub}"))
    }

    /// Generate printable ASCII text.
    pub fn printable_ascii() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0x20u8..=0x7e, 0..256)
    }

    /// Generate a parameter list; names exclude the reserved `base64` marker.
    pub fn parameter_list() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(
            (
                "[a-z][a-z0-9_-]{0,7}".prop_filter("reserved name", |n| n != "base64"),
                "[A-Za-z0-9._+-]{0,10}",
            ),
            0..5,
        )
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn binary_roundtrip(
            data in prop::collection::vec(any::<u8>(), 0..3000),
            mime in binary_mime_type()
        ) {
            let uri = DataUri::with_options(
                data.clone(),
                Some(&mime),
                Parameters::new(),
                Validation::default(),
            ).unwrap();
            prop_assert!(uri.is_binary_data());

            let serialized = uri.to_uri_string();
            let reparsed = parse(&serialized, Validation::default()).unwrap();

            prop_assert_eq!(reparsed.data(), data.as_slice());
            prop_assert_eq!(reparsed.mime_type(), mime.as_str());
            prop_assert!(reparsed.is_binary_data());
        }

        #[test]
        fn binary_roundtrip_survives_strict_decoding(
            data in prop::collection::vec(any::<u8>(), 0..=LIT_LIMIT),
            mime in binary_mime_type()
        ) {
            let strict = Validation::strict(SizeLimitMode::Litlen);
            let uri = DataUri::with_options(data.clone(), Some(&mime), Parameters::new(), strict)
                .unwrap();
            let reparsed = parse(&uri.to_uri_string(), strict).unwrap();
            prop_assert_eq!(reparsed.data(), data.as_slice());
        }

        #[test]
        fn text_roundtrip_uses_percent_encoding(
            data in printable_ascii(),
            mime in text_mime_type()
        ) {
            let uri = DataUri::with_options(
                data.clone(),
                Some(&mime),
                Parameters::new(),
                Validation::default(),
            ).unwrap();
            prop_assert!(!uri.is_binary_data());

            let serialized = uri.to_uri_string();
            prop_assert!(!serialized.contains(";base64"));
            prop_assert!(!serialized.contains(' '));

            let reparsed = parse(&serialized, Validation::default()).unwrap();
            prop_assert_eq!(reparsed.data(), data.as_slice());
            prop_assert_eq!(reparsed.mime_type(), mime.as_str());
            prop_assert!(!reparsed.is_binary_data());
        }

        #[test]
        fn parameter_order_is_preserved(
            params in parameter_list(),
            data in printable_ascii()
        ) {
            let parameters: Parameters = params.into_iter().collect();
            let uri = DataUri::with_options(
                data,
                Some("text/plain"),
                parameters.clone(),
                Validation::default(),
            ).unwrap();

            let reparsed = parse(&uri.to_uri_string(), Validation::default()).unwrap();
            let expected: Vec<_> = parameters.iter().collect();
            let actual: Vec<_> = reparsed.parameters().iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}

mod limit_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn strict_litlen_accepts_iff_within_ceiling(len in 0usize..=2200) {
            let result = DataUri::with_options(
                vec![b'x'; len],
                Some("application/octet-stream"),
                Parameters::new(),
                Validation::strict(SizeLimitMode::Litlen),
            );
            if len <= LIT_LIMIT {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err().length(), Some(len));
            }
        }

        #[test]
        fn lenient_accepts_any_length(len in 0usize..=5000) {
            let result = DataUri::with_options(
                vec![0u8; len],
                None,
                Parameters::new(),
                Validation::lenient(),
            );
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn litlen_boundary() {
        let build = |len| {
            DataUri::with_options(
                vec![0u8; len],
                Some("image/png"),
                Parameters::new(),
                Validation::strict(SizeLimitMode::Litlen),
            )
        };
        assert!(build(1024).is_ok());
        assert_eq!(
            build(1025).unwrap_err(),
            DataUriError::TooLongData {
                length: 1025,
                max: 1024
            }
        );
    }
}

mod rejection_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn inputs_without_scheme_are_rejected(s in "\\PC*") {
            prop_assume!(!s.starts_with("data:"));
            let result = parse(&s, Validation::default());
            let is_invalid_argument = matches!(result, Err(DataUriError::InvalidArgument { .. }));
            prop_assert!(is_invalid_argument);
        }

        #[test]
        fn inputs_without_comma_are_rejected(rest in "[A-Za-z0-9/+;=.-]{0,40}") {
            let input = format!("data:{rest}");
            let result = parse(&input, Validation::default());
            let is_invalid_argument = matches!(result, Err(DataUriError::InvalidArgument { .. }));
            prop_assert!(is_invalid_argument);
        }
    }

    #[test]
    fn plain_string_is_rejected() {
        assert!(matches!(
            parse("not-a-data-uri", Validation::default()),
            Err(DataUriError::InvalidArgument { .. })
        ));
    }
}

mod documented_examples {
    use super::*;

    #[test]
    fn default_classification() {
        let uri = DataUri::new("hello");
        assert_eq!(uri.mime_type(), "text/plain");
        assert_eq!(uri.parameters().get("charset"), Some("US-ASCII"));
        assert!(!uri.is_binary_data());
    }

    #[test]
    fn base64_marker_is_authoritative() {
        let uri = DataUri::parse("data:image/png;base64,aGVsbG8=").unwrap();
        assert!(uri.is_binary_data());
        assert_eq!(uri.data(), b"hello");
    }
}
