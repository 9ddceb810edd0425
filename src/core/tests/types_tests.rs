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

//! Type tests

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{is_temporary_name, MonitorSettings, PrintJob};

#[test]
fn test_default_settings() {
    let settings = MonitorSettings::default();
    assert_eq!(settings.extension.as_deref(), Some("txt"));
    assert!(!settings.delete_after_read);
    assert_eq!(settings.poll_interval, Duration::from_secs(1));
    assert!(settings.create_if_missing);
}

#[test]
fn test_matches_extension() {
    let settings = MonitorSettings::default();
    assert!(settings.matches_extension(Path::new("/jobs/a.txt")));
    assert!(settings.matches_extension(Path::new("/jobs/a.Txt")));
    assert!(!settings.matches_extension(Path::new("/jobs/a.txt.part")));
    assert!(!settings.matches_extension(Path::new("/jobs/txt")));

    let any = MonitorSettings {
        extension: None,
        ..MonitorSettings::default()
    };
    assert!(any.matches_extension(Path::new("/jobs/no_extension")));
}

#[test]
fn test_job_file_name() {
    let job = PrintJob::new(PathBuf::from("/spool/order-17.txt"), String::new());
    assert_eq!(job.file_name(), "order-17.txt");
}

#[test]
fn test_suggested_output_name() {
    let job = PrintJob::new(PathBuf::from("/spool/order-17.txt"), String::new());
    assert_eq!(job.suggested_output_name(), "order-17-output.txt");

    let nameless = PrintJob::new(PathBuf::from("/"), String::new());
    assert_eq!(nameless.suggested_output_name(), "print-output.txt");
}

#[test]
fn test_job_display() {
    let job = PrintJob::new(PathBuf::from("/spool/a.txt"), "12345".to_string());
    let display = format!("{}", job);

    assert!(display.starts_with("a.txt (5 bytes, "));
}

#[test]
fn test_temporary_names() {
    assert!(is_temporary_name(Path::new("/jobs/.job.partial")));
    assert!(is_temporary_name(Path::new("/jobs/.hidden.txt")));
    assert!(is_temporary_name(Path::new("/jobs/job.tmp")));
    assert!(is_temporary_name(Path::new("/jobs/job.TXT.PART")));
    assert!(is_temporary_name(Path::new("/jobs/job.txt~")));

    assert!(!is_temporary_name(Path::new("/jobs/job.txt")));
    assert!(!is_temporary_name(Path::new("/jobs/template.log")));
}
