//! Runs the built binary against a mocked server and checks what lands on
//! stdout versus stderr.

use std::fs;
use std::path::Path;
use std::process::Output;

use serde_json::{json, Value};
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_single_module() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/acme/Rocket/_apis/wit/wiql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workItemRelations": [{"rel": null, "source": null, "target": {"id": 1}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/acme/Rocket/_apis/wit/workitems/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "fields": {"System.Title": "M", "System.WorkItemType": "Module"}
        })))
        .mount(&server)
        .await;

    server
}

async fn run_cli(server: &MockServer, home: &Path, args: &[&str]) -> Output {
    let config = json!({
        "organization": "acme",
        "project": "Rocket",
        "pat": "secret",
        "api_base_url": server.uri()
    });
    fs::write(home.join(".wit-outline-config.json"), config.to_string()).unwrap();

    Command::new(env!("CARGO_BIN_EXE_wit-outline"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CACHE_HOME", home.join(".cache"))
        .env("NO_COLOR", "1")
        .env_remove("pat")
        .env_remove("AZURE_DEVOPS_ORG")
        .env_remove("AZURE_DEVOPS_PROJECT")
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_stdout_outline_has_no_progress_lines() {
    let server = mock_single_module().await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli(&server, home.path(), &["outline", "--stdout"]).await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n1: Module: M\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let scheduled = stderr.find("Fetching details for work item ID: 1").unwrap();
    let started = stderr.find("Fetching all work item details...").unwrap();
    assert!(scheduled < started);
    assert!(stderr.contains("Successfully fetched work item ID: 1"));
}

#[tokio::test]
async fn test_relations_json_is_valid_json() {
    let server = mock_single_module().await;
    let home = tempfile::tempdir().unwrap();

    let output = run_cli(&server, home.path(), &["relations", "--format", "json"]).await;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!([{"source": null, "target": 1}]));
}
