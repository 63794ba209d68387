//! Scripted runs of the interactive shell.

use std::io::Cursor;

use todo_sync::cli::run_shell;

mod common;

use common::MockRemote;

async fn run_script(remote: &MockRemote, script: &str) -> String {
    let url = remote.start().await;
    let (mut session, _) = common::session(&url, common::settings());
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_shell(&mut session, &mut input, &mut output).await.expect("shell io");
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_full_editing_session() {
    let remote = MockRemote::with_tasks(25);
    let script = "\
search task 1
page 2
edit 12
add task twelve, renamed
delete 13
y
quit
";
    let out = run_script(&remote, script).await;

    assert!(out.starts_with("#1 "));
    assert!(out.contains("Pages: [1] 2 3\n"));
    assert!(out.contains("Pages: 1 [2]\n"));
    assert!(out.contains("Editing #12: task 12\n"));
    assert!(out.contains("edit #12> "));
    assert!(out.contains("Updated task #12\n"));
    assert!(out.contains("Are you sure you want to delete this task? [y/N] "));
    assert!(out.contains("Deleted task #13\n"));

    assert_eq!(remote.count("PUT"), 1);
    assert_eq!(remote.count("DELETE"), 1);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let remote = MockRemote::with_tasks(3);
    let out = run_script(&remote, "delete 2\nn\nlist\n").await;

    assert_eq!(remote.count("DELETE"), 0);
    assert!(!out.contains("Deleted task"));
    assert!(out.contains("#2  task 2"));
}

#[tokio::test]
async fn test_errors_do_not_end_the_loop() {
    let remote = MockRemote::with_tasks(3);
    let script = "\
bogus
page 9
from 01/02/2026
edit 77
add created anyway
";
    let out = run_script(&remote, script).await;

    assert!(out.contains("error: unknown command 'bogus' (try 'help')\n"));
    assert!(out.contains("error: page 9 is out of range (1..=1)\n"));
    assert!(out.contains("error: invalid date '01/02/2026'"));
    assert!(out.contains("error: no task with id 77\n"));
    assert!(out.contains("Created task #201\n"));
}

#[tokio::test]
async fn test_failed_initial_load_still_opens_shell() {
    let remote = MockRemote::with_tasks(3);
    remote.fail_fetches(10);
    let out = run_script(&remote, "reload\nhelp\n").await;

    assert!(out.starts_with("error: Failed to fetch todos (HTTP 503 Service Unavailable)\nNo tasks found\n"));
    assert!(out.contains("Commands:\n"));
}
