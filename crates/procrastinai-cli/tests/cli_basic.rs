//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary HOME so the
//! SQLite state and config file never leak between tests.

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_procrastinai"))
            .args(args)
            .env("HOME", self.home.path())
            .env_remove("PROCRASTINAI_ENV")
            .env("RUST_LOG", "off")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "{args:?} failed: {stderr}");
        stdout
    }
}

/// Parse a stream of pretty-printed JSON documents.
fn json_values(stdout: &str) -> Vec<Value> {
    serde_json::Deserializer::from_str(stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .expect("stdout is a JSON stream")
}

#[test]
fn test_task_lifecycle() {
    let sb = Sandbox::new();

    let added: Value =
        serde_json::from_str(&sb.run_ok(&["task", "add", "File taxes", "--deadline", "2099-01-01T09:00"]))
            .unwrap();
    let id = added["id"].as_str().unwrap().to_string();
    assert_eq!(added["title"], "File taxes");
    assert_eq!(added["done"], false);

    let listed: Value = serde_json::from_str(&sb.run_ok(&["task", "list"])).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let toggled: Value = serde_json::from_str(&sb.run_ok(&["task", "toggle", &id])).unwrap();
    assert_eq!(toggled["type"], "TaskToggled");
    assert_eq!(toggled["done"], true);

    sb.run_ok(&["task", "remove", &id]);
    let listed: Value = serde_json::from_str(&sb.run_ok(&["task", "list"])).unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_blank_task_title_is_rejected() {
    let sb = Sandbox::new();
    let (_, stderr, code) = sb.run(&["task", "add", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_unknown_task_id_fails() {
    let sb = Sandbox::new();
    let (_, _, code) = sb.run(&["task", "toggle", "no-such-task"]);
    assert_eq!(code, 1);
}

#[test]
fn test_status_without_tasks_is_mild_delay() {
    let sb = Sandbox::new();
    let values = json_values(&sb.run_ok(&["status", "--seed", "7"]));
    let dashboard = &values[0];
    assert_eq!(dashboard["mode"], "mild_delay");
    assert_eq!(dashboard["nearest_deadline"], "No deadlines");
    assert_eq!(dashboard["distractions"].as_array().unwrap().len(), 3);
    assert_eq!(dashboard["timer_state"], "idle");
}

#[test]
fn test_overdue_task_means_full_panic() {
    let sb = Sandbox::new();
    sb.run_ok(&["task", "add", "Yesterday's report", "--deadline", "2000-01-01T00:00:00Z"]);
    let values = json_values(&sb.run_ok(&["status"]));
    assert_eq!(values[0]["mode"], "full_panic");
    assert_eq!(values[0]["nearest_deadline"], "Time's up!");
}

#[test]
fn test_excuse_generation_is_reproducible() {
    let sb = Sandbox::new();
    sb.run_ok(&["excuse", "set", "--audience", "boss", "--blocker", "wifi_issues", "--tone", "formal"]);

    let first = sb.run_ok(&["excuse", "generate", "--seed", "42"]);
    let second = sb.run_ok(&["excuse", "generate", "--seed", "42"]);
    assert_eq!(first, second);
    assert!(first.starts_with("Hi,\n"));

    let history: Value = serde_json::from_str(&sb.run_ok(&["excuse", "history", "--json"])).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_audience_is_rejected() {
    let sb = Sandbox::new();
    let (_, _, code) = sb.run(&["excuse", "set", "--audience", "landlord"]);
    assert_ne!(code, 0);
}

#[test]
fn test_mood_changes_suggestions() {
    let sb = Sandbox::new();
    let event: Value = serde_json::from_str(&sb.run_ok(&["distract", "mood", "frantic"])).unwrap();
    assert_eq!(event["mood"], "frantic");

    let suggestions = sb.run_ok(&["distract", "suggest", "--seed", "1"]);
    assert_eq!(suggestions.lines().count(), 3);
}

#[test]
fn test_timer_start_pause() {
    let sb = Sandbox::new();
    let started: Value = serde_json::from_str(&sb.run_ok(&["timer", "start"])).unwrap();
    assert_eq!(started["type"], "TimerStarted");

    let status = json_values(&sb.run_ok(&["timer", "status"]));
    assert_eq!(status[0]["state"], "running");

    let paused: Value = serde_json::from_str(&sb.run_ok(&["timer", "pause"])).unwrap();
    assert_eq!(paused["type"], "TimerPaused");

    let reset: Value = serde_json::from_str(&sb.run_ok(&["timer", "reset"])).unwrap();
    assert_eq!(reset["type"], "TimerReset");
}

#[test]
fn test_badges_start_locked() {
    let sb = Sandbox::new();
    let badges: Value = serde_json::from_str(&sb.run_ok(&["badges"])).unwrap();
    let badges = badges.as_array().unwrap();
    assert_eq!(badges.len(), 5);
    assert!(badges.iter().all(|b| b["earned"] == false));
}

#[test]
fn test_first_break_check_nudges_once() {
    let sb = Sandbox::new();
    let nudge: Value = serde_json::from_str(&sb.run_ok(&["breaks", "check"])).unwrap();
    assert_eq!(nudge["type"], "BreakNudge");
    assert_eq!(sb.run_ok(&["breaks", "check"]).trim(), "no break due");
}

#[test]
fn test_muted_breaks_stay_quiet() {
    let sb = Sandbox::new();
    sb.run_ok(&["breaks", "mute"]);
    assert_eq!(sb.run_ok(&["breaks", "check"]).trim(), "no break due");
}

#[test]
fn test_config_get_set() {
    let sb = Sandbox::new();
    assert_eq!(sb.run_ok(&["config", "get", "defaults.break_interval_min"]).trim(), "5");
    sb.run_ok(&["config", "set", "defaults.break_interval_min", "25"]);
    assert_eq!(sb.run_ok(&["config", "get", "defaults.break_interval_min"]).trim(), "25");

    let (_, _, code) = sb.run(&["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
}

#[test]
fn test_reset_requires_confirmation() {
    let sb = Sandbox::new();
    sb.run_ok(&["task", "add", "Keep me"]);

    let (_, _, code) = sb.run(&["reset"]);
    assert_eq!(code, 1);

    sb.run_ok(&["reset", "--yes"]);
    let listed: Value = serde_json::from_str(&sb.run_ok(&["task", "list"])).unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_watch_stops_after_requested_ticks() {
    let sb = Sandbox::new();
    sb.run_ok(&["config", "set", "ticker.period_ms", "10"]);
    let stdout = sb.run_ok(&["watch", "--ticks", "2"]);
    assert!(stdout.contains("[2] Mild Delay"));
}

#[test]
fn test_completions() {
    let sb = Sandbox::new();
    let script = sb.run_ok(&["completions", "bash"]);
    assert!(script.contains("procrastinai"));
}
