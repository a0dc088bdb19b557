//! Submission sinks: where accepted contact form submissions are delivered.
//!
//! [`SubmissionSink`] is the `Send` variant used by the event loop. The
//! configured sink is picked once at startup from `[sink]` settings.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use eddie_core::prelude::*;
use eddie_core::Submission;
use fs2::FileExt;
use serde::Serialize;

use crate::config::{SinkKind, SinkSettings};

/// Destination for accepted submissions
#[trait_variant::make(SubmissionSink: Send)]
pub trait LocalSubmissionSink {
    /// Deliver one accepted submission. Called exactly once per submission.
    async fn deliver(&self, submission: Submission) -> Result<()>;

    /// Short name for logs and the status bar
    fn name(&self) -> &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// LogSink
// ─────────────────────────────────────────────────────────────────────────────

/// Records each submission as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    async fn deliver(&self, submission: Submission) -> Result<()> {
        info!(
            target: "eddie::submission",
            id = submission.id.value(),
            intent = %submission.fields.intent,
            failure = %submission.fields.failure,
            reality = %submission.fields.reality,
            "Contact submission received"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JsonlFileSink
// ─────────────────────────────────────────────────────────────────────────────

/// Appends one JSON object per line to a file
#[derive(Debug, Clone)]
pub struct JsonlFileSink {
    path: PathBuf,
}

#[derive(Serialize)]
struct SinkRecord<'a> {
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    submission: &'a Submission,
}

impl JsonlFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Append a record while holding an exclusive lock on the file
fn append_record(path: &Path, submission: &Submission) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::sink(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let record = SinkRecord {
        received_at: Utc::now(),
        submission,
    };
    let mut line = serde_json::to_string(&record)?;
    line.push('\n');

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::sink(format!("Failed to open {:?}: {}", path, e)))?;

    // Lock is released when file is dropped
    file.lock_exclusive()
        .map_err(|e| Error::sink(format!("Failed to lock {:?}: {}", path, e)))?;
    file.write_all(line.as_bytes())
        .map_err(|e| Error::sink(format!("Failed to write {:?}: {}", path, e)))?;
    file.flush()
        .map_err(|e| Error::sink(format!("Failed to flush {:?}: {}", path, e)))?;

    debug!("Appended submission {} to {:?}", submission.id, path);
    Ok(())
}

impl SubmissionSink for JsonlFileSink {
    async fn deliver(&self, submission: Submission) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || append_record(&path, &submission))
            .await
            .map_err(|e| Error::sink(format!("File sink task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConfiguredSink
// ─────────────────────────────────────────────────────────────────────────────

/// The sink selected by `[sink] kind`
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
    Log(LogSink),
    File(JsonlFileSink),
}

impl ConfiguredSink {
    /// Build the sink; relative file paths resolve against `base_dir`
    pub fn from_settings(settings: &SinkSettings, base_dir: &Path) -> Self {
        match settings.kind {
            SinkKind::Log => ConfiguredSink::Log(LogSink),
            SinkKind::File => {
                ConfiguredSink::File(JsonlFileSink::new(base_dir.join(&settings.path)))
            }
        }
    }
}

impl SubmissionSink for ConfiguredSink {
    async fn deliver(&self, submission: Submission) -> Result<()> {
        match self {
            ConfiguredSink::Log(sink) => SubmissionSink::deliver(sink, submission).await,
            ConfiguredSink::File(sink) => SubmissionSink::deliver(sink, submission).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfiguredSink::Log(sink) => SubmissionSink::name(sink),
            ConfiguredSink::File(sink) => SubmissionSink::name(sink),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingSink
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(any(test, feature = "test-helpers"))]
pub use recording::RecordingSink;

#[cfg(any(test, feature = "test-helpers"))]
mod recording {
    use std::sync::{Arc, Mutex};

    use super::SubmissionSink;
    use eddie_core::prelude::*;
    use eddie_core::Submission;

    /// Keeps every delivered submission in memory; can be told to fail
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink {
        received: Arc<Mutex<Vec<Submission>>>,
        failure: Option<String>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Records the call, then rejects it with `message`
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                received: Arc::default(),
                failure: Some(message.into()),
            }
        }

        pub fn submissions(&self) -> Vec<Submission> {
            self.received
                .lock()
                .map(|received| received.clone())
                .unwrap_or_default()
        }

        pub fn call_count(&self) -> usize {
            self.submissions().len()
        }
    }

    impl SubmissionSink for RecordingSink {
        async fn deliver(&self, submission: Submission) -> Result<()> {
            if let Ok(mut received) = self.received.lock() {
                received.push(submission);
            }
            match &self.failure {
                Some(message) => Err(Error::sink(message.clone())),
                None => Ok(()),
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddie_core::{ContactFields, SubmissionId};
    use tempfile::tempdir;

    fn submission(id: u64) -> Submission {
        Submission {
            id: SubmissionId::new(id),
            fields: ContactFields::new("build a router", "loses packets", "2 weeks, $5k"),
        }
    }

    #[tokio::test]
    async fn test_log_sink_accepts_submission() {
        SubmissionSink::deliver(&LogSink, submission(1)).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("submissions.jsonl");
        let sink = JsonlFileSink::new(&path);

        SubmissionSink::deliver(&sink, submission(1)).await.unwrap();
        SubmissionSink::deliver(&sink, submission(2)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["id"], 2);
        assert_eq!(lines[0]["intent"], "build a router");
        assert_eq!(lines[0]["failure"], "loses packets");
        assert_eq!(lines[0]["reality"], "2 weeks, $5k");
        assert!(lines[0]["received_at"].is_string());
    }

    #[tokio::test]
    async fn test_file_sink_reports_unwritable_path() {
        let temp = tempdir().unwrap();
        // A directory cannot be opened for appending
        let sink = JsonlFileSink::new(temp.path());

        let err = SubmissionSink::deliver(&sink, submission(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Sink { .. }));
    }

    #[test]
    fn test_configured_sink_from_settings() {
        let base = Path::new("/srv/eddie");
        let log = ConfiguredSink::from_settings(&SinkSettings::default(), base);
        assert_eq!(SubmissionSink::name(&log), "log");

        let settings = SinkSettings {
            kind: SinkKind::File,
            path: PathBuf::from("out.jsonl"),
        };
        match ConfiguredSink::from_settings(&settings, base) {
            ConfiguredSink::File(sink) => assert_eq!(sink.path(), base.join("out.jsonl")),
            other => panic!("expected file sink, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_recording_sink_counts_failed_calls() {
        let sink = RecordingSink::failing("offline");
        let err = SubmissionSink::deliver(&sink, submission(4))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Submission sink error: offline");
        assert_eq!(sink.call_count(), 1);
    }
}
