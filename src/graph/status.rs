// src/graph/status.rs

//! Read-only status projections for nodes and whole workflow runs.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::graph::node::NodeState;

/// Snapshot of one node's execution record.
#[derive(Debug, Clone)]
pub struct NodeStatus {
    pub name: String,
    pub state: NodeState,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration: Option<TimeDelta>,
}

/// Single summary verdict over all nodes.
///
/// `Failed` wins over everything; `Completed` requires every node to have
/// completed; otherwise `Running` if anything is in flight, else `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowVerdict {
    Pending,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for WorkflowVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkflowVerdict::Pending => "pending",
            WorkflowVerdict::Running => "running",
            WorkflowVerdict::Completed => "completed",
            WorkflowVerdict::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Aggregate counts and timing across a workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowStatus {
    pub total: usize,
    pub pending: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
    /// Earliest recorded node start.
    pub started_at: Option<DateTime<Utc>>,
    /// Latest recorded node end.
    pub finished_at: Option<DateTime<Utc>>,
    pub duration: Option<TimeDelta>,
    pub verdict: WorkflowVerdict,
}
