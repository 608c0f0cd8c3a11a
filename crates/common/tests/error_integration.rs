//! Integration tests for `piiguard_common::error`.
//!
//! These suites validate classification, logging payloads and module error
//! delegation so callers receive consistent failure semantics.

use piiguard_common::error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
use piiguard_common::{impl_error_classification, impl_error_conversion};
use thiserror::Error;

#[derive(Debug, Error)]
enum ScanError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("rule {0} is unavailable")]
    RuleUnavailable(String),
}

impl_error_conversion!(ScanError, Common);

impl_error_classification!(ScanError, Common,
    Self::RuleUnavailable(_) => {
        retryable: false,
        severity: ErrorSeverity::Critical,
        critical: true,
    }
);

/// Validates `CommonError` classification for the variant matrix scenario.
///
/// Assertions:
/// - Confirms no variant is retryable.
/// - Confirms `severity()` and `is_critical()` per variant.
#[test]
fn classification_matrix_matches_expected_contract() {
    let cases = vec![
        (CommonError::config("missing categories"), ErrorSeverity::Error, false),
        (CommonError::serialization("invalid JSON"), ErrorSeverity::Error, false),
        (CommonError::persistence("disk full"), ErrorSeverity::Error, false),
        (CommonError::validation("text", "too large"), ErrorSeverity::Warning, false),
        (CommonError::internal("broken invariant"), ErrorSeverity::Critical, true),
    ];

    for (err, severity, critical) in cases {
        assert!(!err.is_retryable(), "{err} should not be retryable");
        assert_eq!(err.severity(), severity, "{err}");
        assert_eq!(err.is_critical(), critical, "{err}");
        assert!(err.retry_after().is_none());
    }
}

#[test]
fn display_includes_structured_context() {
    assert_eq!(
        CommonError::config_field("version", "Version cannot be empty").to_string(),
        "Configuration error in field 'version': Version cannot be empty"
    );
    assert_eq!(
        CommonError::persistence_op("read_config", "not found").to_string(),
        "Persistence error during 'read_config': not found"
    );
    assert_eq!(
        CommonError::validation_with_value("mode", "unsupported", "shred").to_string(),
        "Validation error for field 'mode' (value: 'shred'): unsupported"
    );
}

/// Validates `CommonError::as_tracing_fields` for the logging payload
/// scenario.
///
/// Assertions:
/// - Ensures the first field is the error type name.
/// - Ensures optional context appears only when set.
#[test]
fn tracing_fields_carry_error_type() {
    let fields = CommonError::validation_with_value("text", "too large", "4097").as_tracing_fields();
    assert_eq!(fields[0], ("error_type", "validation".to_string()));
    assert!(fields.contains(&("value", "4097".to_string())));

    let fields = CommonError::internal("boom").as_tracing_fields();
    assert_eq!(fields.len(), 2);
    assert!(!fields.iter().any(|(k, _)| *k == "context"));
}

#[test]
fn module_errors_delegate_to_common() {
    let err: ScanError = CommonError::internal("registry missing").into();
    assert!(err.is_critical());
    assert_eq!(err.severity(), ErrorSeverity::Critical);

    let err: ScanError = CommonError::validation("text", "empty").into();
    assert_eq!(err.severity(), ErrorSeverity::Warning);

    let err = ScanError::RuleUnavailable("ssn".into());
    assert!(err.is_critical());
    assert!(!err.is_retryable());
    assert_eq!(err.to_string(), "rule ssn is unavailable");
}

#[test]
fn std_and_format_errors_convert_through_common() {
    let json: Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: ScanError = json.unwrap_err().into();
    assert!(matches!(
        err,
        ScanError::Common(CommonError::Serialization { format: Some(ref f), .. }) if f == "JSON"
    ));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ScanError = io.into();
    assert!(matches!(err, ScanError::Common(CommonError::Persistence { .. })));

    let toml: Result<toml::Table, _> = toml::from_str("= broken");
    let err: ScanError = toml.unwrap_err().into();
    assert!(matches!(
        err,
        ScanError::Common(CommonError::Serialization { format: Some(ref f), .. }) if f == "TOML"
    ));
}

#[test]
fn common_result_propagates_with_question_mark() {
    fn parse_limit(raw: &str) -> CommonResult<usize> {
        let limit: usize = raw
            .parse()
            .map_err(|_| CommonError::validation_with_value("max_input_bytes", "not a number", raw))?;
        if limit == 0 {
            return Err(CommonError::config_field("max_input_bytes", "cannot be zero"));
        }
        Ok(limit)
    }

    assert_eq!(parse_limit("4096").unwrap(), 4096);
    assert!(matches!(parse_limit("many"), Err(CommonError::Validation { .. })));
    assert!(matches!(parse_limit("0"), Err(CommonError::Config { .. })));
}
