use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::Config;
use crate::error::OutlineError;

fn project_config() -> Config {
    Config {
        organization: Some("acme".to_string()),
        project: Some("Rocket".to_string()),
        ..Config::default()
    }
}

#[test]
fn test_cli_context_builder_with_pat() {
    let context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_pat("test-token".to_string())
        .build();

    assert!(context.is_ok());
    let context = context.unwrap();

    assert!(context.has_pat_token());
    assert_eq!(context.pat_token().unwrap(), "test-token");
}

#[test]
fn test_verified_client_requires_project() {
    let mut context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_pat("test-token".to_string())
        .build()
        .unwrap();

    match context.verified_client() {
        Err(OutlineError::ConfigError(msg)) => assert!(msg.contains("organization")),
        Err(e) => panic!("Expected ConfigError, got {}", e),
        Ok(_) => panic!("Expected ConfigError"),
    }
}

#[test]
fn test_verified_client_with_pat() {
    let mut context = CliContextBuilder::new()
        .with_config(project_config())
        .with_pat("test-token".to_string())
        .with_api_base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let client = context.verified_client();
    assert!(client.is_ok());
    let client = client.unwrap();
    assert!(client.wiql_url().starts_with("http://127.0.0.1:9/acme/Rocket/"));

    // Getting client again should return same instance
    let client2 = context.verified_client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&client, &client2));
}

#[test]
fn test_config_mut_drops_cached_client() {
    let mut context = CliContext::new(Config {
        pat: Some("test-token".to_string()),
        ..project_config()
    });

    let first = context.verified_client().unwrap();
    context.config_mut().project = Some("Other".to_string());
    let second = context.verified_client().unwrap();

    assert!(!std::sync::Arc::ptr_eq(&first, &second));
    assert!(second.wiql_url().contains("/acme/Other/"));
}

#[test]
fn test_builder_overrides_project_fields() {
    let context = CliContextBuilder::new()
        .with_config(project_config())
        .with_organization("globex")
        .with_project("Orbit")
        .build()
        .unwrap();

    assert_eq!(context.config().organization(), "globex");
    assert_eq!(context.config().project(), "Orbit");
}

#[test]
fn test_empty_token_is_rejected() {
    let mut context = CliContext::new(project_config());

    match context.set_pat_token("   ".to_string()) {
        Err(OutlineError::InvalidInput(msg)) => assert!(msg.contains("empty")),
        _ => panic!("Expected OutlineError::InvalidInput"),
    }
}
