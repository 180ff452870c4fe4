//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::TemporalError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing config"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal = TemporalError::UnknownTimezone("Moon/Base".to_string());
    let core_error: CoreError = temporal.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
    assert!(core_error.to_string().contains("Moon/Base"));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::configuration("timezone: unknown");
    let display = format!("{}", error);

    assert_eq!(display, "Configuration error: timezone: unknown");
}
