//! Scripted [`Work`] implementations for driving the engine in tests
//! without any real analysis logic.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use serde_json::Value;

use gridiron::graph::{Payload, Work};

/// Shared execution log, pushed to by [`RecordingWork`] in visitation order.
pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

pub fn execution_log() -> ExecutionLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A work stub that:
/// - records its node name into a shared log when run
/// - echoes a fixed output payload (default `{<name>_done: true}`)
pub struct RecordingWork {
    name: String,
    log: ExecutionLog,
    output: Payload,
}

impl RecordingWork {
    pub fn new(name: &str, log: ExecutionLog) -> Self {
        let mut output = Payload::new();
        output.insert(format!("{name}_done"), Value::Bool(true));
        Self {
            name: name.to_string(),
            log,
            output,
        }
    }

    /// Override the payload this stub returns.
    pub fn with_output(mut self, output: Payload) -> Self {
        self.output = output;
        self
    }
}

impl Work for RecordingWork {
    fn run(&self, _input: &Payload) -> anyhow::Result<Payload> {
        self.log
            .lock()
            .expect("execution log poisoned")
            .push(self.name.clone());
        Ok(self.output.clone())
    }
}

/// A work stub that always fails with the given message.
pub struct FailingWork {
    message: String,
}

impl FailingWork {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Work for FailingWork {
    fn run(&self, _input: &Payload) -> anyhow::Result<Payload> {
        Err(anyhow!("{}", self.message))
    }
}

/// A work stub that captures the input payload it was called with, for
/// asserting on context merging and dependency-result propagation.
pub struct CapturingWork {
    seen: Arc<Mutex<Option<Payload>>>,
    output: Payload,
}

impl CapturingWork {
    pub fn new(seen: Arc<Mutex<Option<Payload>>>) -> Self {
        Self {
            seen,
            output: Payload::new(),
        }
    }

    pub fn with_output(mut self, output: Payload) -> Self {
        self.output = output;
        self
    }
}

impl Work for CapturingWork {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        *self.seen.lock().expect("capture slot poisoned") = Some(input.clone());
        Ok(self.output.clone())
    }
}
