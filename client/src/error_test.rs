use super::*;

#[test]
fn user_message_prefers_provided_message() {
    let err = AuthError::Auth(Some("Invalid credentials".to_owned()));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn user_message_falls_back_when_missing() {
    assert_eq!(AuthError::Network(None).user_message(), FALLBACK_ERROR_MESSAGE);
    assert_eq!(AuthError::Conflict(None).user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn user_message_falls_back_when_blank() {
    let err = AuthError::Validation(Some("   ".to_owned()));
    assert_eq!(err.message(), None);
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn display_includes_kind_and_message() {
    let err = AuthError::Conflict(Some("Email already registered".to_owned()));
    assert_eq!(err.to_string(), "conflict: Email already registered");
    assert_eq!(AuthError::Network(None).to_string(), "network error: no details");
}

#[test]
fn missing_provider_names_the_provider() {
    assert!(ContextError::MissingProvider.to_string().contains("<AuthProvider>"));
}
