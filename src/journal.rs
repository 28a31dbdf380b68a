use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::user::User;

/// Append-only JSONL record of store activity for one run.
pub struct Journal {
    pub path: PathBuf,
    session_id: String,
    file: File,
}

#[derive(Serialize)]
struct Event<'a> {
    ts: DateTime<Utc>,
    session_id: &'a str,
    #[serde(rename = "type")]
    event_type: &'a str,
    #[serde(flatten)]
    data: serde_json::Value,
}

impl Journal {
    pub fn new(path: &Path, session_id: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            session_id: session_id.to_string(),
            file,
        })
    }

    /// Open `<dir>/<session_id>.jsonl`, creating the directory if needed.
    pub fn in_dir(dir: &Path, session_id: &str) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating journal dir {}", dir.display()))?;
        Self::new(&dir.join(format!("{}.jsonl", session_id)), session_id)
    }

    pub fn log(&mut self, event_type: &str, data: serde_json::Value) -> Result<()> {
        let event = Event {
            ts: Utc::now(),
            session_id: &self.session_id,
            event_type,
            data,
        };
        let line = serde_json::to_string(&event)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        Ok(())
    }

    pub fn user_saved(&mut self, user: &User) -> Result<()> {
        self.log(
            "user_saved",
            serde_json::json!({
                "id": user.id,
                "name": user.name,
                "email": user.email,
                "created_at": user.created_at,
            }),
        )
    }

    /// Log a lookup attempt and its outcome
    pub fn user_lookup(&mut self, id: i64, error: Option<&str>) -> Result<()> {
        self.log(
            "user_lookup",
            serde_json::json!({
                "id": id,
                "ok": error.is_none(),
                "error": error,
            }),
        )
    }
}
