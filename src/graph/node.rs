// src/graph/node.rs

//! A single unit of orchestrated work and its lifecycle state machine.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::{GridironError, Result};

/// Keyed input/output payload passed between nodes.
pub type Payload = Map<String, Value>;

/// Anything invocable with payload-in, payload-or-error-out.
///
/// Analysis agents implement this directly; closures get it for free via the
/// blanket impl, which keeps test setup lightweight.
pub trait Work: Send {
    fn run(&self, input: &Payload) -> anyhow::Result<Payload>;
}

impl<F> Work for F
where
    F: Fn(&Payload) -> anyhow::Result<Payload> + Send,
{
    fn run(&self, input: &Payload) -> anyhow::Result<Payload> {
        self(input)
    }
}

/// Lifecycle state of a [`TaskNode`].
///
/// `Completed` and `Failed` are terminal; a node is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Pending,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeState::Pending => "pending",
            NodeState::Running => "running",
            NodeState::Completed => "completed",
            NodeState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A named unit of work plus its dependencies and execution record.
///
/// The node knows nothing about the graph it lives in; dependency ordering is
/// enforced by [`TaskGraph`](crate::graph::TaskGraph).
pub struct TaskNode {
    name: String,
    work: Box<dyn Work>,
    deps: Vec<String>,
    state: NodeState,
    result: Option<Payload>,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl TaskNode {
    pub(crate) fn new(name: String, work: Box<dyn Work>, deps: Vec<String>) -> Self {
        Self {
            name,
            work,
            deps,
            state: NodeState::Pending,
            result: None,
            error: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the nodes that must complete before this one may run.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Output payload; present only once the node is `Completed`.
    pub fn result(&self) -> Option<&Payload> {
        self.result.as_ref()
    }

    /// Error text; present only once the node is `Failed`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Wall-clock execution time, available once the node has finished.
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Run the wrapped work callable.
    ///
    /// Only legal from `Pending`. On success the node moves to `Completed`
    /// and stores the output; on failure it moves to `Failed` and stores the
    /// error text, which stays readable on the node even though the error is
    /// also returned to the caller.
    pub fn execute(&mut self, input: &Payload) -> Result<Payload> {
        if self.state != NodeState::Pending {
            return Err(GridironError::InvalidState {
                node: self.name.clone(),
                state: self.state,
            });
        }

        self.state = NodeState::Running;
        self.started_at = Some(Utc::now());
        debug!(node = %self.name, "node started");

        match self.work.run(input) {
            Ok(output) => {
                self.state = NodeState::Completed;
                self.finished_at = Some(Utc::now());
                self.result = Some(output.clone());
                debug!(node = %self.name, "node completed");
                Ok(output)
            }
            Err(source) => {
                let message = format!("{source:#}");
                self.state = NodeState::Failed;
                self.finished_at = Some(Utc::now());
                self.error = Some(message.clone());
                warn!(node = %self.name, error = %message, "node failed");
                Err(GridironError::NodeFailed {
                    node: self.name.clone(),
                    message,
                })
            }
        }
    }
}

impl fmt::Debug for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskNode")
            .field("name", &self.name)
            .field("deps", &self.deps)
            .field("state", &self.state)
            .field("has_result", &self.result.is_some())
            .field("error", &self.error)
            .finish()
    }
}
