//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying `type`,
//! `timestamp` and `run` fields next to the event payload. The file is
//! opened in append mode, so transcripts of several runs share one file
//! and are told apart by `run`.

use relief_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    run_id: String,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            run_id: chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier stamped on every record written by this logger
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    fn record(&self, event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("run".to_string(), Value::from(self.run_id.clone()));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relief.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "llm_request",
            serde_json::json!({"stage": "reframing", "model": "gpt-4o", "bytes": 120}),
        ));
        logger.log(ConversationEvent::new(
            "image_search",
            serde_json::json!({"query": "calm lake", "results": ["https://x/1.gif"]}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "llm_request");
        assert_eq!(records[0]["stage"], "reframing");
        assert_eq!(records[1]["type"], "image_search");
        assert_eq!(records[1]["query"], "calm lake");
        for record in &records {
            assert!(record["timestamp"].is_string());
            assert_eq!(record["run"], records[0]["run"]);
        }
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relief.jsonl");

        let first = JsonlConversationLogger::open(&path).unwrap();
        first.log(ConversationEvent::new("llm_response", serde_json::json!({"n": 1})));
        drop(first);

        let second = JsonlConversationLogger::open(&path).unwrap();
        second.log(ConversationEvent::new("llm_response", serde_json::json!({"n": 2})));
        drop(second);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["n"], 1);
        assert_eq!(records[1]["n"], 2);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/relief.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "just a string");
    }
}
