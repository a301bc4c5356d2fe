use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Runs the binary inside `dir`, logging into `dir/logs`.
fn run(dir: &TempDir, args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fanart-community"))
        .args(args)
        .current_dir(dir.path())
        .env("LOG_DIR", dir.path().join("logs"))
        .env_remove("LOG_FILE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut pipe = child.stdin.take().unwrap();

    // Startup failures exit before reading stdin
    if let Some(bytes) = stdin {
        let _ = pipe.write_all(bytes);
    }

    drop(pipe);

    child.wait_with_output().unwrap()
}

fn artwork() -> Value {
    json!({
        "id": "art-001",
        "artworkTitle": "Sunset over the Harbor",
        "imageUrl": "https://cdn.example.com/alice/art-001.png",
        "votes": 0,
        "featured": true,
    })
}

#[test]
fn echo_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/profile.json");

    let output = run(&dir, &["profile", fixture.to_str().unwrap(), "--echo"], None);
    assert_eq!(output.status.code(), Some(0));

    let echoed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected: Value = serde_json::from_slice(&fs::read(&fixture).unwrap()).unwrap();

    assert_eq!(echoed, expected);
}

#[test]
fn echo_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let input = serde_json::to_vec(&artwork()).unwrap();

    let output = run(&dir, &["artwork", "--echo", "--quiet"], Some(&input));
    assert_eq!(output.status.code(), Some(0));

    let echoed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(echoed, artwork());
}

#[test]
fn without_echo_stdout_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = serde_json::to_vec(&json!([])).unwrap();

    let output = run(&dir, &["lb"], Some(&input));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_document_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&dir, &["artwork", "-q"], Some(br#"{"id":1}"#));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to decode document"));
}

#[test]
fn unknown_badge_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = serde_json::to_vec(&json!([{
        "artistName": "Alice",
        "rank": 1,
        "totalVotes": 120,
        "submittedCount": 3,
        "badges": ["Top Fan"],
    }]))
    .unwrap();

    let output = run(&dir, &["leaderboard"], Some(&input));

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_shape_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&dir, &["gallery"], Some(b"[]"));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unusable_log_dir_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("afile");
    fs::write(&file, b"").unwrap();

    let input = dir.path().join("artwork.json");
    fs::write(&input, serde_json::to_vec(&artwork()).unwrap()).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fanart-community"))
        .arg("artwork")
        .arg(&input)
        .current_dir(dir.path())
        .env("LOG_DIR", file.join("sub"))
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to create log directory"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn malformed_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "LOG_DIR=\"unterminated\n").unwrap();

    let input = serde_json::to_vec(&artwork()).unwrap();
    let output = run(&dir, &["artwork"], Some(&input));

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse .env"));
}
