use crate::error::{ErrorContext, OutlineError};
use crate::outline_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let outline_result = result.context("Failed to read config file");
    assert!(outline_result.is_err());

    match outline_result {
        Err(OutlineError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected OutlineError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Token not found");

    match result {
        Err(OutlineError::Unknown(msg)) => assert_eq!(msg, "Token not found"),
        _ => panic!("Expected OutlineError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let outline_result = result.with_context(|| {
        format!("Failed to write outline to: {}", "/tmp/outline.txt")
    });

    match outline_result {
        Err(OutlineError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write outline to: /tmp/outline.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected OutlineError::Unknown"),
    }
}

#[test]
fn test_outline_error_macro() {
    let error = outline_error!(ApiError, "Request failed");
    match error {
        OutlineError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected OutlineError::ApiError"),
    }

    let error = outline_error!(InvalidInput, "Invalid concurrency: {}", 0);
    match error {
        OutlineError::InvalidInput(msg) => assert_eq!(msg, "Invalid concurrency: 0"),
        _ => panic!("Expected OutlineError::InvalidInput"),
    }
}

#[test]
fn test_duplicate_message_names_the_id() {
    let error = OutlineError::DuplicateWorkItem(4711);
    assert_eq!(error.to_string(), "Duplicate ID found: 4711. Exiting the program.");
}
