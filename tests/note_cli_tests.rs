mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use common::{describe, TestEnv};

async fn run(env: &TestEnv, args: &[&str]) -> std::process::Output {
    tokio::process::Command::from(env.command(args))
        .output()
        .await
        .expect("failed to execute quicknote binary")
}

#[test]
fn note_skips_untitled_notes() {
    let env = TestEnv::new();
    let note = env.home().join("Untitled 3.md");
    std::fs::write(&note, "").unwrap();

    let output = env.run(&["note", note.to_str().unwrap()]);

    assert!(output.status.success(), "untitled note should be skipped\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Skipping untitled note"));
    assert_eq!(std::fs::read_to_string(&note).unwrap(), "");
}

#[test]
fn note_requires_markdown_file() {
    let env = TestEnv::new();
    let note = env.home().join("cats.txt");
    std::fs::write(&note, "").unwrap();

    let output = env.run(&["note", note.to_str().unwrap()]);

    assert!(!output.status.success(), "non-markdown note should fail\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a markdown note"));
}

#[test]
fn note_reports_unreachable_server() {
    let env = TestEnv::new();
    env.write_config(&format!("[server]\nport = {}\n", common::free_port()));
    let note = env.home().join("cats.md");
    std::fs::write(&note, "original").unwrap();

    let output = env.run(&["note", note.to_str().unwrap()]);

    assert!(!output.status.success(), "note should fail without a server\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to insert summary"));
    assert_eq!(std::fs::read_to_string(&note).unwrap(), "original");
}

#[tokio::test]
async fn note_inserts_summary_from_endpoint() {
    let seen: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);
    let app = Router::new().route(
        "/generate_summary",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let captured = Arc::clone(&captured);
            async move {
                captured.lock().unwrap().push(params);
                Json(json!({"summary": "Black holes trap light."}))
            }
        }),
    );
    let base = common::spawn_http(app).await;
    let port = base.rsplit(':').next().unwrap();

    let env = TestEnv::new();
    env.write_config(&format!("[server]\nport = {port}\n"));
    let note = env.home().join("Black holes.md");
    std::fs::write(&note, "").unwrap();

    let output = run(&env, &["note", note.to_str().unwrap()]).await;

    assert!(output.status.success(), "note should succeed\n{}", describe(&output));
    assert_eq!(
        std::fs::read_to_string(&note).unwrap(),
        "- ==Def== :Black holes trap light. \n ---\n"
    );

    let requests = seen.lock().unwrap();
    assert_eq!(requests[0]["keyword"], "Black holes");
    assert_eq!(requests[0]["model"], "default");
}

#[tokio::test]
async fn note_fails_on_error_status() {
    let app = Router::new().route(
        "/generate_summary",
        get(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Model invocation failed."})),
            )
        }),
    );
    let base = common::spawn_http(app).await;
    let port = base.rsplit(':').next().unwrap();

    let env = TestEnv::new();
    env.write_config(&format!("[server]\nport = {port}\n"));
    let note = env.home().join("cats.md");
    std::fs::write(&note, "original").unwrap();

    let output = run(&env, &["note", note.to_str().unwrap()]).await;

    assert!(!output.status.success(), "note should fail\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to insert summary"));
    assert_eq!(std::fs::read_to_string(&note).unwrap(), "original");
}
