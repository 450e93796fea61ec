//! Append-only JSONL audit log of classification outcomes.

use ryg_application::ports::classification_logger::{ClassificationEvent, ClassificationLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// A single audit line: the event fields plus when it was written.
#[derive(Serialize)]
struct AuditLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a ClassificationEvent,
}

/// Writes one [`ClassificationEvent`] per line to a file that persists
/// across server runs.
pub struct JsonlClassificationLogger {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlClassificationLogger {
    /// Open the audit log for appending, creating it and its directory.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, event: &ClassificationEvent) -> io::Result<()> {
        let line = AuditLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event,
        };
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("audit log lock poisoned"))?;
        serde_json::to_writer(&mut *file, &line)?;
        file.write_all(b"\n")
    }
}

impl ClassificationLogger for JsonlClassificationLogger {
    fn log(&self, event: ClassificationEvent) {
        if let Err(e) = self.append(&event) {
            warn!(
                "Dropped {} audit record for {}: {}",
                event.kind(),
                self.path.display(),
                e
            );
        }
    }
}
