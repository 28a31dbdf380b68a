use std::path::Path;
use std::process::{Command, Output};

fn userdemo(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_userdemo"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("USERDEMO_NAME")
        .env_remove("USERDEMO_EMAIL")
        .env("HOME", cwd)
        .output()
        .expect("failed to run userdemo")
}

#[test]
fn test_default_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = userdemo(dir.path(), &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Saving user: John Doe"));
    assert!(stdout.contains("User Information:"));
    assert!(stdout.contains("Name: Example User"));
    assert!(stdout.contains("Email: user@example.com"));
    assert!(stdout.contains("Created: "));
}

#[test]
fn test_negative_lookup_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = userdemo(dir.path(), &["--lookup-id=-1"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("retrieving user"));
    assert!(stderr.contains("invalid user ID: -1"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("User Information:"));
}

#[test]
fn test_project_config_is_layered_in() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_dir = dir.path().join(".userdemo");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "[user]\nname = \"Project\"\n").unwrap();
    std::fs::write(
        cfg_dir.join("config.local.toml"),
        "[mock]\nname = \"Local Mock\"\n",
    )
    .unwrap();

    let out = userdemo(dir.path(), &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Saving user: Project"));
    assert!(stdout.contains("Name: Local Mock"));
}

#[test]
fn test_invalid_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[mock]\nname = \"\"\n").unwrap();

    let out = userdemo(dir.path(), &["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid configuration"));
}

#[test]
fn test_journal_written() {
    let dir = tempfile::tempdir().unwrap();
    let journal_dir = dir.path().join("journal");
    let out = userdemo(
        dir.path(),
        &["--journal-dir", journal_dir.to_str().unwrap(), "--json"],
    );
    assert!(out.status.success());

    let entries: Vec<_> = std::fs::read_dir(&journal_dir)
        .unwrap()
        .flatten()
        .collect();
    assert_eq!(entries.len(), 1);
    let content = std::fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("\"type\":\"user_saved\""));
    assert!(content.contains("\"type\":\"user_lookup\""));
}
