// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Directory monitor tests
//!
//! These run against the real OS notifier. Jobs are staged in a separate
//! temp dir and renamed into the watched directory so the content is
//! complete by the time the event fires.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
    thread,
    time::{Duration, Instant},
};
use tempfile::TempDir;

use crate::core::{MonitorError, MonitorSettings, PrintJob};
use crate::monitor::{DirectoryMonitor, WatcherState};

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);
const QUIET_PERIOD: Duration = Duration::from_millis(500);

fn fast_settings() -> MonitorSettings {
    MonitorSettings {
        poll_interval: Duration::from_millis(50),
        ..MonitorSettings::default()
    }
}

fn new_monitor(settings: MonitorSettings) -> (DirectoryMonitor, Receiver<PrintJob>) {
    let (tx, rx) = channel();
    (DirectoryMonitor::new(settings, tx), rx)
}

/// Helper: Writes `content` outside `dir`, then renames it in atomically
fn place_job(staging: &TempDir, dir: &Path, name: &str, content: &str) -> PathBuf {
    let staged = staging.path().join(name);
    fs::write(&staged, content).unwrap();
    let target = dir.join(name);
    fs::rename(&staged, &target).unwrap();
    target
}

#[test]
fn test_job_delivered_once_with_exact_content() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    let content = "   ACME STORE\n\nItem A      1.00\nItem B      2.00\nTOTAL       3.00\n";
    place_job(&staging, watched.path(), "job1.txt", content);

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, content);
    assert_eq!(job.file_name(), "job1.txt");

    assert!(
        rx.recv_timeout(QUIET_PERIOD).is_err(),
        "Exactly one job should be delivered per file"
    );

    monitor.stop();
}

#[test]
fn test_directory_creation_produces_no_job() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    fs::create_dir(watched.path().join("folder.txt")).unwrap();
    place_job(&staging, watched.path(), "after.txt", "after");

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.file_name(), "after.txt", "Directory must not produce a job");
    assert!(rx.recv_timeout(QUIET_PERIOD).is_err());
}

#[test]
fn test_non_txt_file_ignored() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    place_job(&staging, watched.path(), "notes.md", "# not a job");
    place_job(&staging, watched.path(), "real.txt", "real job");

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "real job");
}

#[test]
fn test_nested_directory_not_watched() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let nested = watched.path().join("nested");
    fs::create_dir(&nested).unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    place_job(&staging, &nested, "deep.txt", "deep");
    place_job(&staging, watched.path(), "top.txt", "top");

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "top");
    assert!(rx.recv_timeout(QUIET_PERIOD).is_err());
}

#[test]
fn test_delete_after_read() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let settings = MonitorSettings {
        delete_after_read: true,
        ..fast_settings()
    };
    let (mut monitor, rx) = new_monitor(settings);

    monitor.start(watched.path()).unwrap();
    let target = place_job(&staging, watched.path(), "consume.txt", "consumed");

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "consumed");
    assert!(!target.exists(), "Job file should be deleted after read");
}

#[test]
fn test_stop_without_start() {
    let (mut monitor, _rx) = new_monitor(fast_settings());

    monitor.stop();
    monitor.stop();

    assert_eq!(monitor.state(), WatcherState::Stopped);
    assert!(monitor.watched_dir().is_none());
}

#[test]
fn test_start_stop_cycles() {
    let watched = TempDir::new().unwrap();
    let (mut monitor, _rx) = new_monitor(fast_settings());

    for _ in 0..3 {
        monitor.start(watched.path()).unwrap();
        assert_eq!(monitor.state(), WatcherState::Running);

        let started = Instant::now();
        monitor.stop();
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "Stop should return within a few poll intervals"
        );
        assert_eq!(monitor.state(), WatcherState::Stopped);
    }

    monitor.stop();
}

#[test]
fn test_restart_switches_directory() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(first.path()).unwrap();
    let watching = monitor.start(second.path()).unwrap();
    assert_eq!(monitor.watched_dir(), Some(watching.as_path()));

    place_job(&staging, first.path(), "old.txt", "old");
    place_job(&staging, second.path(), "new.txt", "new");

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "new", "Old directory must no longer be watched");
    assert!(rx.recv_timeout(QUIET_PERIOD).is_err());
}

#[test]
fn test_no_jobs_after_stop() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    monitor.stop();
    place_job(&staging, watched.path(), "late.txt", "late");

    assert!(rx.recv_timeout(QUIET_PERIOD).is_err());
}

#[test]
fn test_missing_directory_created() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("print_jobs");
    let (mut monitor, _rx) = new_monitor(fast_settings());

    monitor.start(&dir).unwrap();

    assert!(dir.is_dir(), "Job directory should be created");
    assert_eq!(monitor.state(), WatcherState::Running);
}

#[test]
fn test_missing_directory_rejected_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("absent");
    let settings = MonitorSettings {
        create_if_missing: false,
        ..fast_settings()
    };
    let (mut monitor, _rx) = new_monitor(settings);

    match monitor.start(&dir) {
        Err(MonitorError::DirectoryNotFound(path)) => assert_eq!(path, dir),
        other => panic!("Expected DirectoryNotFound, got: {:?}", other.map(|_| ())),
    }
    assert_eq!(monitor.state(), WatcherState::Stopped);
}

#[test]
fn test_file_path_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let (mut monitor, _rx) = new_monitor(fast_settings());

    assert!(matches!(
        monitor.start(&file),
        Err(MonitorError::NotADirectory(_))
    ));
}

#[test]
fn test_failed_start_stops_previous_session() {
    let watched = TempDir::new().unwrap();
    let file = watched.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let (mut monitor, _rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    assert!(monitor.start(&file).is_err());

    assert_eq!(monitor.state(), WatcherState::Stopped);
}

#[test]
fn test_drop_joins_worker() {
    let watched = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());
    monitor.start(watched.path()).unwrap();

    drop(monitor);

    // Sender side is gone once the worker has been joined and dropped
    assert!(matches!(
        rx.recv_timeout(EVENT_TIMEOUT),
        Err(std::sync::mpsc::RecvTimeoutError::Disconnected)
    ));
}

#[test]
fn test_plain_create_delivered_once() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    // A hard link appears fully written as a plain create
    let staged = staging.path().join("linked.txt");
    fs::write(&staged, "CASH 4.20\n").unwrap();
    fs::hard_link(&staged, watched.path().join("linked.txt")).unwrap();

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "CASH 4.20\n");
    assert_eq!(job.file_name(), "linked.txt");
    assert!(
        rx.recv_timeout(QUIET_PERIOD).is_err(),
        "Exactly one job should be delivered per file"
    );
}

#[test]
fn test_work_file_renamed_in_place_with_delete() {
    let watched = TempDir::new().unwrap();
    let settings = MonitorSettings {
        extension: None,
        delete_after_read: true,
        ..fast_settings()
    };
    let (mut monitor, rx) = new_monitor(settings);

    monitor.start(watched.path()).unwrap();
    let partial = watched.path().join(".job.partial");
    let done = watched.path().join("job.txt");
    fs::write(&partial, "LINE 1\nLINE 2\n").unwrap();
    thread::sleep(Duration::from_millis(300));

    assert!(
        fs::rename(&partial, &done).is_ok(),
        "Work file should not be consumed before it is renamed"
    );

    let job = rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");
    assert_eq!(job.content, "LINE 1\nLINE 2\n");
    assert_eq!(job.file_name(), "job.txt");
    assert!(
        rx.recv_timeout(QUIET_PERIOD).is_err(),
        "Only the finished file should become a job"
    );
}

#[test]
fn test_rename_within_directory_not_redelivered() {
    let watched = TempDir::new().unwrap();
    let staging = TempDir::new().unwrap();
    let (mut monitor, rx) = new_monitor(fast_settings());

    monitor.start(watched.path()).unwrap();
    let first = place_job(&staging, watched.path(), "a.txt", "once");
    rx.recv_timeout(EVENT_TIMEOUT).expect("Job should be delivered");

    fs::rename(&first, watched.path().join("b.txt")).unwrap();

    assert!(
        rx.recv_timeout(QUIET_PERIOD).is_err(),
        "Renaming a job inside the directory should not show it again"
    );
}
