//! Tests for the domain schema
//!
//! The endpoint decoder and the `from` cursor decoder, exercised with the
//! payloads clients actually send.

// =============================================================================
// ENDPOINT DECODER
// =============================================================================

mod endpoint_tests {
    use hooktrack::models::Method;
    use hooktrack::schema;
    use serde_json::json;

    #[test]
    fn every_verb_is_accepted_and_echoed() {
        for (raw, expected) in [
            ("GET", Method::Get),
            ("POST", Method::Post),
            ("PUT", Method::Put),
            ("PATCH", Method::Patch),
            ("DELETE", Method::Delete),
            ("HEAD", Method::Head),
            ("OPTION", Method::Option),
        ] {
            let endpoint = schema::ENDPOINT.decode(&json!({"method": raw})).unwrap();
            assert_eq!(endpoint.method, expected);
        }
    }

    #[test]
    fn method_is_required() {
        let err = schema::ENDPOINT.decode(&json!({})).unwrap_err();
        assert!(err.to_string().contains("method"), "{err}");
    }

    #[test]
    fn method_outside_the_enumeration_fails() {
        for bad in ["", "get", "OPTIONS", "FOO"] {
            assert!(
                schema::ENDPOINT.decode(&json!({"method": bad})).is_err(),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn non_record_inputs_fail() {
        for value in [json!(null), json!([]), json!("POST"), json!(1)] {
            assert!(schema::ENDPOINT.decode(&value).is_err());
        }
    }

    #[test]
    fn absent_response_decodes_to_none() {
        let endpoint = schema::ENDPOINT.decode(&json!({"method": "POST"})).unwrap();
        assert!(endpoint.response.is_none());
    }

    #[test]
    fn empty_response_gets_the_defaults() {
        let endpoint = schema::ENDPOINT
            .decode(&json!({"method": "POST", "response": {}}))
            .unwrap();
        let response = endpoint.response.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.headers.is_empty());
        assert!(response.body.is_none());
    }

    #[test]
    fn full_response_is_decoded() {
        let endpoint = schema::ENDPOINT
            .decode(&json!({
                "method": "POST",
                "response": {
                    "status": 201,
                    "headers": {"foo": "bar"},
                    "body": "{\"greeting\":\"Hello!\"}"
                }
            }))
            .unwrap();
        let response = endpoint.response.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.headers["foo"], "bar");
        assert_eq!(response.body.as_deref(), Some("{\"greeting\":\"Hello!\"}"));
    }

    #[test]
    fn non_string_body_fails() {
        let err = schema::ENDPOINT
            .decode(&json!({"method": "POST", "response": {"body": {"a": 1}}}))
            .unwrap_err();
        assert_eq!(err.path(), "response.body");
    }

    #[test]
    fn non_numeric_status_fails() {
        let err = schema::ENDPOINT
            .decode(&json!({"method": "POST", "response": {"status": "200"}}))
            .unwrap_err();
        assert_eq!(err.path(), "response.status");
    }

    #[test]
    fn fractional_or_out_of_range_status_fails() {
        for bad in [json!(200.5), json!(99), json!(1000)] {
            assert!(
                schema::ENDPOINT
                    .decode(&json!({"method": "POST", "response": {"status": bad}}))
                    .is_err(),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn non_mapping_headers_fail() {
        for bad in [json!(["foo", "bar"]), json!("foo"), json!({"foo": 1})] {
            assert!(
                schema::ENDPOINT
                    .decode(&json!({"method": "POST", "response": {"headers": bad}}))
                    .is_err(),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let endpoint = schema::ENDPOINT
            .decode(&json!({"method": "POST", "surprise": true, "response": {"ttl": 9}}))
            .unwrap();
        assert_eq!(endpoint.method, Method::Post);
    }
}

// =============================================================================
// FROM CURSOR
// =============================================================================

mod cursor_tests {
    use hooktrack::schema;

    #[test]
    fn absent_parameter_means_no_lower_bound() {
        assert_eq!(schema::decode_from_param(None).unwrap(), None);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        assert_eq!(schema::decode_from_param(Some("123")).unwrap(), Some(123));
        assert_eq!(
            schema::decode_from_param(Some("1700000000000")).unwrap(),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn malformed_values_are_an_error_not_a_fallback() {
        for bad in ["abc", "", "12x", "now"] {
            assert!(schema::decode_from_param(Some(bad)).is_err(), "{bad:?}");
        }
    }
}
