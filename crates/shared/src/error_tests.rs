use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::Validation("test".into()), "VALIDATION_ERROR")]
#[case(AppError::Parse("test".into()), "PARSE_ERROR")]
#[case(AppError::Io("test".into()), "IO_ERROR")]
#[case(AppError::ExternalService("test".into()), "EXTERNAL_SERVICE_ERROR")]
#[case(AppError::Config("test".into()), "CONFIG_ERROR")]
#[case(AppError::Internal("test".into()), "INTERNAL_ERROR")]
fn test_app_error_error_codes(#[case] err: AppError, #[case] expected: &str) {
    assert_eq!(err.error_code(), expected);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::Parse("msg".into()).to_string(),
        "Parse error: msg"
    );
    assert_eq!(AppError::Io("msg".into()).to_string(), "I/O error: msg");
    assert_eq!(
        AppError::ExternalService("msg".into()).to_string(),
        "External service error: msg"
    );
    assert_eq!(
        AppError::Config("msg".into()).to_string(),
        "Configuration error: msg"
    );
}

#[test]
fn test_transient_errors() {
    assert!(AppError::ExternalService("timeout".into()).is_transient());
    assert!(AppError::Io("disk".into()).is_transient());
    assert!(!AppError::Parse("bad xml".into()).is_transient());
    assert!(!AppError::Validation("bad".into()).is_transient());
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "list_one.xml missing");
    let err: AppError = io.into();
    assert_eq!(err.error_code(), "IO_ERROR");
    assert!(err.to_string().contains("list_one.xml missing"));
}

#[test]
fn test_from_config_error() {
    let err: AppError = config::ConfigError::Message("missing field `url`".into()).into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(!err.is_transient());
    assert!(err.to_string().contains("missing field `url`"));
}
