use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the session file inside a test home.
pub fn store_path(home: &Path) -> PathBuf {
    home.join("session.json")
}

/// Run the CLI with an isolated HOME, session file and API base.
pub fn run_cli_with_env(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ledger"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("LEDGER_STORE", store_path(home));
    cmd.env("LEDGER_API_URL", api_url);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so a mock server can answer it.
pub async fn run(args: &[&str], home: &Path, api_url: &str) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let home = home.to_path_buf();
    let api_url = api_url.to_string();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_env(&args, &home, &api_url)
    })
    .await
    .expect("CLI task panicked")
}

/// Stdout of a command that must succeed.
pub fn success(output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed\nstderr: {}", stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a command that must fail.
pub fn failure(output: &Output) -> String {
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("CLI command should have failed\nstdout: {}", stdout);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Seed the session file with tokens and, optionally, a cached profile.
pub fn seed_session(home: &Path, access: &str, refresh: &str, user: Option<&serde_json::Value>) {
    let mut entries = serde_json::Map::new();
    entries.insert("access_token".into(), access.into());
    entries.insert("refresh_token".into(), refresh.into());
    if let Some(user) = user {
        entries.insert("user".into(), user.to_string().into());
    }
    std::fs::write(
        store_path(home),
        serde_json::to_string_pretty(&entries).unwrap(),
    )
    .unwrap();
}

/// Read the session file back as a JSON object.
pub fn read_session(home: &Path) -> serde_json::Value {
    match std::fs::read_to_string(store_path(home)) {
        Ok(content) => serde_json::from_str(&content).unwrap(),
        Err(_) => serde_json::json!({}),
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "first_name": "Alice",
        "last_name": "Rao",
        "role": "DIRECTOR",
        "phone": "",
        "is_staff": false,
        "is_superuser": false,
        "company_id": 4,
        "company_name": "Acme"
    })
}
