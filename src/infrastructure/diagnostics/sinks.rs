//! In-process diagnostic sinks
//!
//! - `TracingSink`: structured `tracing` warnings (default for the CLI)
//! - `MemorySink`: keeps every diagnostic for later inspection
//! - `BackgroundSink`: hands diagnostics to a worker thread so a slow sink
//!   never stalls resolution

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::domain::ports::DiagnosticSink;
use crate::domain::value_objects::Diagnostic;

/// Emits each diagnostic as a `tracing` warning
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            code = diagnostic.code(),
            template = %diagnostic.template,
            reference = %diagnostic.reference,
            "{}",
            diagnostic
        );
    }
}

/// Keeps diagnostics in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    diagnostics: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut d) = self.diagnostics.lock() {
            d.clear();
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        if let Ok(mut d) = self.diagnostics.lock() {
            d.push(diagnostic.clone());
        }
    }
}

/// Forwards diagnostics to another sink on a dedicated thread.
///
/// `on_diagnostic` only enqueues. `shutdown` (or drop) closes the queue,
/// lets the worker drain it, and joins.
pub struct BackgroundSink {
    sender: Mutex<Option<Sender<Diagnostic>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl BackgroundSink {
    pub fn spawn<S>(inner: S) -> std::io::Result<Self>
    where
        S: DiagnosticSink + 'static,
    {
        let (sender, receiver) = mpsc::channel::<Diagnostic>();
        // The worker logs through the subscriber that was current at spawn time.
        let dispatch = tracing::dispatcher::get_default(|d| d.clone());
        let worker = thread::Builder::new()
            .name("stencil-diagnostics".to_string())
            .spawn(move || {
                tracing::dispatcher::with_default(&dispatch, || {
                    for diagnostic in receiver {
                        inner.on_diagnostic(&diagnostic);
                    }
                })
            })?;

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Stop accepting diagnostics and wait until the queue is drained.
    pub fn shutdown(&self) {
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
        let worker = self.worker.lock().ok().and_then(|mut w| w.take());
        if let Some(worker) = worker {
            if worker.join().is_err() {
                tracing::error!("diagnostic worker panicked");
            }
        }
    }
}

impl DiagnosticSink for BackgroundSink {
    fn on_diagnostic(&self, diagnostic: &Diagnostic) {
        if let Ok(sender) = self.sender.lock() {
            if let Some(sender) = sender.as_ref() {
                // The worker only goes away on shutdown; late diagnostics are dropped.
                let _ = sender.send(diagnostic.clone());
            }
        }
    }
}

impl Drop for BackgroundSink {
    fn drop(&mut self) {
        self.shutdown();
    }
}
