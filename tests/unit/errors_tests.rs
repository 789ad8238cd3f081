/*!
 * Tests for error types and conversions
 */

use subvtt::errors::{AppError, ConfigError, SubtitleError};

#[test]
fn test_subtitleError_missingHeader_shouldDisplayCorrectly() {
    let error = SubtitleError::MissingHeader;
    assert_eq!(format!("{}", error), "missing WEBVTT header");
}

#[test]
fn test_configError_invalidValue_shouldDisplayFieldAndMessage() {
    let error = ConfigError::InvalidValue {
        field: "output_suffix",
        message: "must not be empty when set".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("output_suffix"));
    assert!(display.contains("must not be empty"));
}

#[test]
fn test_appError_fromSubtitleError_shouldWrapCorrectly() {
    let app_error: AppError = SubtitleError::MissingHeader.into();
    assert!(matches!(app_error, AppError::Subtitle(SubtitleError::MissingHeader)));
    assert!(format!("{}", app_error).contains("missing WEBVTT header"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
    assert!(format!("{}", app_error).contains("no such file"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}

#[test]
fn test_subtitleError_throughAnyhow_shouldDowncast() {
    let error: anyhow::Error = SubtitleError::MissingHeader.into();
    assert_eq!(
        error.downcast_ref::<SubtitleError>(),
        Some(&SubtitleError::MissingHeader)
    );
}
