//! JSON Diagnostic Sink
//!
//! Writes recorded diagnostics as NDJSON for CI/telemetry consumption.

use crate::domain::ports::DiagnosticSink;
use crate::domain::value_objects::Diagnostic;
use std::io::{self, Write};
use std::sync::Mutex;

/// Sink that writes one JSON object per diagnostic
pub struct JsonDiagnosticSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonDiagnosticSink {
    /// Write to stderr (stdout carries command output)
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_record(&self, record: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", record);
            let _ = writer.flush();
        }
    }
}

impl DiagnosticSink for JsonDiagnosticSink {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        self.write_record(serde_json::json!({
            "event": "diagnostic",
            "code": diagnostic.code(),
            "template": diagnostic.template,
            "reference": diagnostic.reference,
            "message": diagnostic.to_string(),
            "ts": chrono::Utc::now().to_rfc3339(),
        }));
    }
}
