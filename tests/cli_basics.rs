use assert_cmd::cargo; // handy crate for testing CLIs
use predicates::str::contains;
use serde_json::Value;

const LYRICS: &str = "[VERSE 1]\nwalking down the line\n\n[CHORUS]\noh my";

/// Binary with no ambient provider config leaking in from the host.
fn lyricbot() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("OPENAI_API_KEY")
        .env_remove("LYRICBOT_PROVIDER")
        .env_remove("LYRICBOT_MODEL")
        .env_remove("LYRICBOT_API_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn prints_help() {
    lyricbot()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("rewrite-section"));
}

#[test]
fn prints_version() {
    lyricbot()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn dry_run_generate_prints_instruction() {
    let output = lyricbot()
        .args(["--dry-run", "generate"])
        .write_stdin(r#"{"song_spec": {"title": "Tin Roof", "ai_freedom": 100}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["temperature"], 1.0);
    let text = json["instruction"].as_str().unwrap();
    assert!(text.contains("Song Title: Tin Roof"));
    assert!(text.contains("[VERSE 1], [CHORUS]"));
}

#[test]
fn dry_run_variations_clamps_to_six() {
    let body = serde_json::json!({ "current_lyrics": LYRICS, "count": 10 }).to_string();
    let output = lyricbot()
        .args(["--dry-run", "variations"])
        .write_stdin(body)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["temperature"], 0.75);
    assert_eq!(list[5]["temperature"], 1.0);
}

#[test]
fn no_model_generate_returns_lyrics() {
    let output = lyricbot()
        .args(["--no-model", "generate"])
        .write_stdin("{}")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let lyrics = json["lyrics"].as_str().unwrap();
    assert!(lyrics.starts_with("[VERSE 1]"));
}

#[test]
fn no_model_variations_reports_counts() {
    let body = serde_json::json!({
        "current_lyrics": LYRICS,
        "section": "Chorus",
        "count": 3,
    })
    .to_string();
    let output = lyricbot()
        .args(["--no-model", "variations"])
        .write_stdin(body)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total_requested"], 3);
    assert_eq!(json["total_generated"], 3);
    let indices: Vec<u64> = json["variants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn request_can_come_from_a_file() {
    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("transform.json");
    std::fs::write(
        &path,
        serde_json::json!({ "current_lyrics": LYRICS, "new_mood": "Euphoric" }).to_string(),
    )
    .unwrap();

    lyricbot()
        .args(["--dry-run", "transform", "--request"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Change the MOOD/EMOTION to: Euphoric"))
        .stdout(contains("\"temperature\": 0.7"));
}

#[test]
fn invalid_request_fails_before_any_call() {
    let body = serde_json::json!({ "current_lyrics": LYRICS }).to_string();
    lyricbot()
        .args(["--no-model", "rewrite-section"])
        .write_stdin(body)
        .assert()
        .failure()
        .stderr(contains("invalid request"))
        .stderr(contains("`section`"));
}

#[test]
fn missing_api_key_is_reported() {
    lyricbot()
        .arg("generate")
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(contains("configuration error"));
}

#[test]
fn sections_lists_headers() {
    let output = lyricbot().arg("sections").write_stdin(LYRICS).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "VERSE 1", "line_count": 1},
            {"name": "CHORUS", "line_count": 1},
        ])
    );
}

#[test]
fn debug_logs_show_instruction_for_every_provider() {
    // Port 9 (discard) refuses connections, so the call fails after logging.
    for provider_args in [
        ["--provider", "ollama", "--ollama-url", "http://127.0.0.1:9"],
        ["--provider", "openai", "--api-base-url", "http://127.0.0.1:9"],
    ] {
        lyricbot()
            .arg("-vv")
            .args(provider_args)
            .args(["--api-key", "sk-test", "generate"])
            .write_stdin(r#"{"song_spec": {"title": "Tin Roof"}}"#)
            .assert()
            .failure()
            .stderr(contains("Instruction:"))
            .stderr(contains("Song Title: Tin Roof"))
            .stderr(contains("provider error"));
    }
}
