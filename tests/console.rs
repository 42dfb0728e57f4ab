mod common;

use std::sync::Arc;

use call_session_controller::console::run_console;
use call_session_controller::device::{DeviceOptions, LoopbackFactory};
use call_session_controller::{CallSessionController, ControllerState};
use common::{MockCredentials, MockFactory};

async fn run_script(controller: &CallSessionController, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    run_console(controller, script.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_call_hangup_session() {
    let credentials = Arc::new(MockCredentials::with_bodies(&[r#"{"token":"abc"}"#]));
    let factory = Arc::new(MockFactory::default());
    let controller =
        CallSessionController::new(credentials.clone(), factory.clone(), DeviceOptions::default());

    let replies = run_script(&controller, "status\ncall\nstatus\nhangup\nquit\ncall\n").await;

    assert_eq!(
        replies,
        vec![
            "state: uninitialized",
            "calling",
            "state: initialized",
            "hung up",
            "bye"
        ]
    );
    // Nothing after quit is processed
    assert_eq!(factory.created()[0].connect_count(), 1);
    assert_eq!(factory.created()[0].disconnect_count(), 1);
}

#[tokio::test]
async fn test_failed_call_keeps_console_running() {
    let credentials = Arc::new(MockCredentials::with_bodies(&["{}"]));
    let factory = Arc::new(MockFactory::default());
    let controller =
        CallSessionController::new(credentials, factory.clone(), DeviceOptions::default());

    let replies = run_script(&controller, "call\nhangup\nstatus\n").await;

    assert_eq!(replies.len(), 3);
    assert!(replies[0].starts_with("call failed: Credential error: Malformed credential payload"));
    assert_eq!(replies[1], "hung up");
    assert_eq!(replies[2], "state: uninitialized");
    assert_eq!(factory.create_count(), 0);
}

#[tokio::test]
async fn test_reset_unknown_and_blank_lines() {
    let credentials = Arc::new(MockCredentials::with_bodies(&[r#"{"token":"tok"}"#]));
    let controller = CallSessionController::new(
        credentials,
        Arc::new(LoopbackFactory::new()),
        DeviceOptions::default(),
    );

    let replies = run_script(&controller, "reset\n\ncall\nredial\nRESET\n").await;

    assert_eq!(
        replies,
        vec![
            "nothing to reset",
            "calling",
            "unknown command: redial (try call, hangup, reset, status, quit)",
            "session handle dropped"
        ]
    );
    assert_eq!(controller.state().await, ControllerState::Uninitialized);
}

#[tokio::test]
async fn test_overlong_line_is_rejected() {
    let credentials = Arc::new(MockCredentials::with_bodies(&[]));
    let controller = CallSessionController::new(
        credentials.clone(),
        Arc::new(MockFactory::default()),
        DeviceOptions::default(),
    );

    let script = format!("{}\nstatus\n", "x".repeat(300));
    let replies = run_script(&controller, &script).await;

    assert_eq!(replies, vec!["line too long", "state: uninitialized"]);
    assert_eq!(credentials.fetch_count(), 0);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_session() {
    let credentials = Arc::new(MockCredentials::with_bodies(&[r#"{"token":"abc"}"#]));
    let factory = Arc::new(MockFactory::default());
    let controller =
        CallSessionController::new(credentials, factory.clone(), DeviceOptions::default());

    let mut output = Vec::new();
    run_console(&controller, &b"call\n\xff\xfe\nhangup\n"[..], &mut output)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    let replies: Vec<&str> = output.lines().collect();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0], "calling");
    assert!(replies[1].starts_with("unknown command:"));
    assert_eq!(replies[2], "hung up");
    assert_eq!(factory.created()[0].disconnect_count(), 1);
}
