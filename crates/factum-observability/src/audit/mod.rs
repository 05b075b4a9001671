//! JSON-Lines audit logger.
//!
//! The file is opened once in append mode; every record is a single line.
//! With `flush_immediately` (the default) each write is flushed before
//! returning, so a crash loses at most the record being written. There is
//! no cross-process locking.

mod record;

pub use record::{AuditEventType, AuditRecord, ClaimAudit, RunSummary};

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use factum_core::config::AuditConfig;
use factum_core::errors::AuditError;

pub struct AuditLogger {
    path: PathBuf,
    run_id: String,
    writer: BufWriter<File>,
    flush_immediately: bool,
    records_written: usize,
}

impl AuditLogger {
    /// Open (creating parent directories) an audit log for appending.
    /// A fresh uuid is used when no `run_id` is given.
    pub fn open(
        path: impl AsRef<Path>,
        run_id: Option<String>,
        flush_immediately: bool,
    ) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source: io::Error| AuditError::Open {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;
        let run_id = run_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        debug!(path = %path.display(), run_id = %run_id, "audit log opened");
        Ok(Self {
            path,
            run_id,
            writer: BufWriter::new(file),
            flush_immediately,
            records_written: 0,
        })
    }

    /// Logger for the configured path, or `None` when auditing is off.
    pub fn from_config(
        config: &AuditConfig,
        run_id: Option<String>,
    ) -> Result<Option<Self>, AuditError> {
        config
            .path
            .as_ref()
            .map(|path| Self::open(path, run_id, config.flush_immediately))
            .transpose()
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Append a `claim_audit` record. Returns the record.
    pub fn log_claim_audit(
        &mut self,
        claim: ClaimAudit,
        extra: Map<String, Value>,
    ) -> Result<AuditRecord, AuditError> {
        let record = self.record(AuditEventType::ClaimAudit, Some(claim), None, extra);
        self.append(&record)?;
        Ok(record)
    }

    /// Append a `run_summary` record. Returns the record.
    pub fn log_run_summary(
        &mut self,
        summary: RunSummary,
        extra: Map<String, Value>,
    ) -> Result<AuditRecord, AuditError> {
        let record = self.record(AuditEventType::RunSummary, None, Some(summary), extra);
        self.append(&record)?;
        Ok(record)
    }

    pub fn flush(&mut self) -> Result<(), AuditError> {
        self.writer.flush().map_err(|source| self.write_err(source))
    }

    fn record(
        &self,
        event_type: AuditEventType,
        claim: Option<ClaimAudit>,
        summary: Option<RunSummary>,
        extra: Map<String, Value>,
    ) -> AuditRecord {
        AuditRecord {
            event_type,
            run_id: self.run_id.clone(),
            ts_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            record_id: Uuid::new_v4().to_string(),
            claim,
            summary,
            extra,
        }
    }

    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        let line = serde_json::to_string(record)
            .map_err(|e| self.write_err(io::Error::other(e)))?;
        writeln!(self.writer, "{line}").map_err(|source| self.write_err(source))?;
        if self.flush_immediately {
            self.flush()?;
        }
        self.records_written += 1;
        debug!(
            event_type = ?record.event_type,
            record_id = %record.record_id,
            "audit record written"
        );
        Ok(())
    }

    fn write_err(&self, source: io::Error) -> AuditError {
        AuditError::Write {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Drop for AuditLogger {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!(path = %self.path.display(), error = %e, "failed to flush audit log on drop");
        }
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger")
            .field("path", &self.path)
            .field("run_id", &self.run_id)
            .field("records_written", &self.records_written)
            .finish()
    }
}

/// Read every record of an audit log, in file order.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<AuditRecord>, AuditError> {
    let path = path.as_ref();
    let open_err = |source: io::Error| AuditError::Open {
        path: path.display().to_string(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(open_err)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(open_err)?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .map_err(|e| open_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        records.push(record);
    }
    Ok(records)
}
