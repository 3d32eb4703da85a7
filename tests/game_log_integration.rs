use shard_input::bridge::{format_title, GameLog};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[test]
fn test_launch_session_log() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("instances/vanilla/logs/latest.log");

    let log = GameLog::new().with_mirror(false);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    log.set_listener(move |line| sink.lock().unwrap().push(line.to_string()));

    log.start(&path).unwrap();
    log.append_title("Launching Minecraft");
    log.append("[main/INFO]: Setting user: Steve");
    log.append("");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "==================== Launching Minecraft ====================\n\
         [main/INFO]: Setting user: Steve\n\
         \n"
    );
    assert_eq!(seen.lock().unwrap().len(), 3);
    assert_eq!(seen.lock().unwrap()[0], format_title("Launching Minecraft"));
}

#[test]
fn test_restart_erases_previous_launch() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latest.log");
    fs::write(&path, "stale output from an old run\n").unwrap();

    let log = GameLog::new().with_mirror(false);
    log.start(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    log.append("first");
    log.start(&path).unwrap();
    log.append("second");
    assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
}

#[test]
fn test_concurrent_appends_keep_whole_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("threads.log");
    let log = GameLog::new().with_mirror(false);
    log.start(&path).unwrap();

    std::thread::scope(|s| {
        for t in 0..4 {
            let log = &log;
            s.spawn(move || {
                for i in 0..100 {
                    log.append(&format!("thread-{t} line-{i}"));
                }
            });
        }
    });

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines.iter().all(|l| l.starts_with("thread-") && l.contains(" line-")));
}
