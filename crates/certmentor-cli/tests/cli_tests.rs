//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn certmentor() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("certmentor").unwrap()
}

#[test]
fn help_output() {
    certmentor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AWS certification study mentor"));
}

#[test]
fn version_output() {
    certmentor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("certmentor"));
}

#[test]
fn list_certs_shows_catalog() {
    certmentor()
        .arg("list-certs")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAA-C03"))
        .stdout(predicate::str::contains("AWS Certified Cloud Practitioner"))
        .stdout(predicate::str::contains("SCS-C01"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    certmentor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created certmentor.toml"));

    assert!(dir.path().join("certmentor.toml").exists());
}

#[test]
fn init_config_keeps_top_level_keys_out_of_tables() {
    let dir = TempDir::new().unwrap();

    certmentor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join("certmentor.toml")).unwrap();
    let value: toml::Value = toml::from_str(&raw).unwrap();

    // These settings are dead if TOML folds them into the [storage] table.
    for key in [
        "default_provider",
        "default_model",
        "temperature",
        "max_tokens",
        "transcript_prefix",
    ] {
        assert!(value.get(key).is_some(), "{key} must be a top-level key");
        assert!(
            value["storage"].get(key).is_none(),
            "{key} must not land in [storage]"
        );
    }
    assert_eq!(
        value["default_model"].as_str(),
        Some("meta.llama3-70b-instruct-v1:0")
    );
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    certmentor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    certmentor()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn plan_rejects_invalid_email() {
    certmentor()
        .args([
            "plan",
            "--name",
            "Ana",
            "--email",
            "not-an-email",
            "--cert",
            "SAA-C03",
            "--exam-date",
            "2099-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("not-an-email"));
}

#[test]
fn plan_rejects_unknown_cert() {
    certmentor()
        .args([
            "plan",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--cert",
            "NOT-A-CERT",
            "--exam-date",
            "2099-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown certification code"));
}

#[test]
fn plan_rejects_bad_date() {
    certmentor()
        .args([
            "plan",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--cert",
            "SAA-C03",
            "--exam-date",
            "June 1st",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn unconfigured_provider_is_an_error() {
    let dir = TempDir::new().unwrap();

    // No config anywhere, so the default "bedrock" provider is missing.
    certmentor()
        .current_dir(dir.path())
        .env_remove("CERTMENTOR_BEDROCK_KEY")
        .args([
            "ask",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--question",
            "What is S3?",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in config"));
}

/// Write a config that points the ollama provider at a mock server and
/// keeps transcripts under the given directory.
fn write_config(dir: &TempDir, server_uri: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("certmentor.toml");
    let transcripts = dir.path().join("transcripts");
    std::fs::write(
        &config_path,
        format!(
            r#"
default_provider = "ollama"
default_model = "llama3"

[providers.ollama]
type = "ollama"
base_url = "{server_uri}"

[storage]
type = "local"
root = "{}"
"#,
            transcripts.display()
        ),
    )
    .unwrap();
    config_path
}

async fn mock_generation(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "response": reply,
            "done": true
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn plan_end_to_end() {
    let server = MockServer::start().await;
    mock_generation(&server, "Day 1 - IAM basics\nDay 2 - S3 and EBS").await;

    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, &server.uri());

    tokio::task::spawn_blocking(move || {
        certmentor()
            .args([
                "plan",
                "--name",
                "Ana",
                "--email",
                "ana@example.com",
                "--cert",
                "SAA-C03",
                "--exam-date",
                "2099-06-01",
                "--config",
            ])
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Day 1 - IAM basics"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_end_to_end() {
    let server = MockServer::start().await;
    mock_generation(
        &server,
        "Q1: What is S3?\nA) Object storage\nB) Compute\nC) Database\nAnswer: A - S3 stores objects\n",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, &server.uri());

    tokio::task::spawn_blocking(move || {
        certmentor()
            .args([
                "quiz",
                "--name",
                "Ana",
                "--email",
                "ana@example.com",
                "--cert",
                "SAA-C03",
                "--exam-date",
                "2099-06-01",
                "--topic",
                "S3",
                "--config",
            ])
            .arg(&config_path)
            .write_stdin("A\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("What is S3?"))
            .stdout(predicate::str::contains("100.0%"))
            .stdout(predicate::str::contains("Excellent work"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn ask_end_to_end_persists_transcript() {
    let server = MockServer::start().await;
    mock_generation(&server, "Use IAM roles instead of long-lived keys.").await;

    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, &server.uri());
    let transcripts = dir.path().join("transcripts");

    tokio::task::spawn_blocking(move || {
        certmentor()
            .args([
                "ask",
                "--name",
                "Ana Q.",
                "--email",
                "ana@example.com",
                "--question",
                "How should EC2 access S3?",
                "--config",
            ])
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Use IAM roles"))
            .stderr(predicate::str::contains("Transcript saved"));
    })
    .await
    .unwrap();

    // Exactly one transcript file, under the sanitized-name directory.
    let user_dir = transcripts.join("certmaster-answers").join("Ana_Q_");
    let entries: Vec<_> = std::fs::read_dir(&user_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let content = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    assert!(content.starts_with("Q: How should EC2 access S3?"));
    assert!(content.contains("A:\nUse IAM roles"));
}
