use super::*;
use crate::net::types::ExperienceLevel;
use crate::util::token_storage::MemoryTokenStorage;

#[test]
fn classify_failure_maps_statuses() {
    let msg = || Some("m".to_owned());
    assert_eq!(classify_failure(400, msg()), AuthError::Validation(msg()));
    assert_eq!(classify_failure(422, msg()), AuthError::Validation(msg()));
    assert_eq!(classify_failure(401, msg()), AuthError::Auth(msg()));
    assert_eq!(classify_failure(403, msg()), AuthError::Auth(msg()));
    assert_eq!(classify_failure(409, msg()), AuthError::Conflict(msg()));
    assert_eq!(classify_failure(503, None), AuthError::Network(None));
}

#[test]
fn classify_failure_keeps_server_message_for_display() {
    let err = classify_failure(401, Some("Invalid credentials".to_owned()));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn auth_paths_join_base_url() {
    let config = AuthApiConfig::new("https://auth.example.com/api/");
    assert_eq!(config.endpoint(LOGIN_PATH), "https://auth.example.com/api/auth/login");
    assert_eq!(config.endpoint(SIGNUP_PATH), "https://auth.example.com/api/auth/signup");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_never_reaches_the_network() {
    let storage = MemoryTokenStorage::new();
    let api = HttpAuthApi::new(AuthApiConfig::default(), Arc::new(storage.clone()));

    let login = futures::executor::block_on(api.login("a@b.com", "pw"));
    assert!(matches!(login, Err(AuthError::Network(_))));
    assert!(!storage.has_token());

    let profile = SignupProfile {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        experience_level: ExperienceLevel::Beginner,
    };
    let signup = futures::executor::block_on(api.signup(&profile));
    assert!(matches!(signup, Err(AuthError::Network(_))));
}
