use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("token.json")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_token() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(serde_json::json!({
            "username": "Lambda",
            "password": "pass1234",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Welcome back Lambda!",
            "token": "tok-abc-123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("blot")
        .env("BLOT_HOME", dir.path())
        .env("BLOT_BASE_URL", server.uri())
        .env("BLOT_BLOCK_REAL_API", "1")
        .args(["login", "--username", "Lambda", "--password", "pass1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back Lambda!"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(token_file(&dir)).unwrap()).unwrap();
    assert_eq!(stored["token"], "tok-abc-123");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_failure_stores_nothing() {
    let dir = tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Wrong username or password",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("blot")
        .env("BLOT_HOME", dir.path())
        .env("BLOT_BASE_URL", server.uri())
        .env("BLOT_BLOCK_REAL_API", "1")
        .args(["login", "--username", "Lambda", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong username or password"));

    assert!(!token_file(&dir).exists());
}

#[test]
fn test_logout_removes_token_and_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(token_file(&dir), r#"{"token": "tok"}"#).unwrap();

    cargo_bin_cmd!("blot")
        .env("BLOT_HOME", dir.path())
        .env("BLOT_BLOCK_REAL_API", "1")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!token_file(&dir).exists());

    // Logging out with no stored token must also succeed.
    cargo_bin_cmd!("blot")
        .env("BLOT_HOME", dir.path())
        .env("BLOT_BLOCK_REAL_API", "1")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}
