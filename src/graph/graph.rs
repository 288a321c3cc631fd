// src/graph/graph.rs

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::errors::{GridironError, Result};
use crate::graph::node::{NodeState, Payload, TaskNode, Work};
use crate::graph::status::{NodeStatus, WorkflowStatus, WorkflowVerdict};
use crate::graph::topo::topological_order;

/// The task DAG: nodes keyed by name plus the dependency edges between them.
///
/// Owns graph mutation (with cycle rejection), readiness queries, ordered
/// execution and aggregate status reporting. Insertion order is kept so that
/// scheduling ties always break the same way for the same build sequence.
pub struct TaskGraph {
    nodes: HashMap<String, TaskNode>,
    /// Node names in insertion order.
    order: Vec<String>,
    /// Edge (A -> B) meaning "B depends on A", keyed by A.
    dependents: HashMap<String, Vec<String>>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            dependents: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn node(&self, name: &str) -> Option<&TaskNode> {
        self.nodes.get(name)
    }

    /// Immediate dependencies of a node.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.nodes.get(name).map(TaskNode::deps).unwrap_or(&[])
    }

    /// Immediate dependents of a node.
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.dependents
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Register a node with its declared dependencies.
    ///
    /// Dependencies must already be registered, which enforces a natural
    /// build order. The node and its edges are inserted tentatively and the
    /// whole insertion is rolled back if the edge set stops being a DAG, so a
    /// failed call leaves the graph exactly as it was.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        work: Box<dyn Work>,
        deps: Vec<String>,
    ) -> Result<()> {
        let name = name.into();

        if self.nodes.contains_key(&name) {
            return Err(GridironError::DuplicateNode(name));
        }
        for dep in &deps {
            if !self.nodes.contains_key(dep) {
                return Err(GridironError::UnknownDependency {
                    node: name,
                    dependency: dep.clone(),
                });
            }
        }

        self.nodes
            .insert(name.clone(), TaskNode::new(name.clone(), work, deps.clone()));
        self.order.push(name.clone());
        self.dependents.insert(name.clone(), Vec::new());
        for dep in &deps {
            if let Some(list) = self.dependents.get_mut(dep) {
                list.push(name.clone());
            }
        }

        // Full acyclicity check, not just a self-loop test. Pre-registration
        // of dependencies means this should never trip, but the invariant is
        // re-verified on every mutation.
        if self.execution_order().is_err() {
            self.nodes.remove(&name);
            self.order.pop();
            self.dependents.remove(&name);
            for dep in &deps {
                if let Some(list) = self.dependents.get_mut(dep) {
                    list.retain(|n| n != &name);
                }
            }
            return Err(GridironError::Cycle(format!(
                "adding node '{name}' would create a cycle"
            )));
        }

        debug!(node = %name, deps = ?deps, "registered node");
        Ok(())
    }

    /// One valid execution order over all nodes: a linearization consistent
    /// with every dependency edge, ties broken by ascending insertion order.
    pub fn execution_order(&self) -> Result<Vec<String>> {
        let remaining: HashMap<String, usize> = self
            .order
            .iter()
            .map(|name| {
                let deps = self.nodes.get(name).map_or(0, |n| n.deps().len());
                (name.clone(), deps)
            })
            .collect();

        topological_order(&self.order, remaining, &self.dependents).map_err(|member| {
            GridironError::Cycle(format!(
                "no valid execution order; cycle involves node '{member}'"
            ))
        })
    }

    /// Every `Pending` node whose dependencies are all `Completed`, in
    /// insertion order. A node with a failed dependency is never ready.
    pub fn ready_nodes(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| {
                let Some(node) = self.nodes.get(*name) else {
                    return false;
                };
                node.state() == NodeState::Pending
                    && node.deps().iter().all(|dep| {
                        self.nodes
                            .get(dep)
                            .is_some_and(|d| d.state() == NodeState::Completed)
                    })
            })
            .map(String::as_str)
            .collect()
    }

    /// Execute a single node, checking that its dependencies have completed.
    pub fn execute_node(&mut self, name: &str, input: &Payload) -> Result<Payload> {
        let deps = match self.nodes.get(name) {
            Some(node) => node.deps().to_vec(),
            None => return Err(GridironError::NodeNotFound(name.to_string())),
        };

        for dep in &deps {
            let satisfied = self
                .nodes
                .get(dep)
                .is_some_and(|d| d.state() == NodeState::Completed);
            if !satisfied {
                return Err(GridironError::DependencyNotSatisfied {
                    node: name.to_string(),
                    dependency: dep.clone(),
                });
            }
        }

        match self.nodes.get_mut(name) {
            Some(node) => node.execute(input),
            None => Err(GridironError::NodeNotFound(name.to_string())),
        }
    }

    /// Drive the whole workflow to completion in topological order.
    ///
    /// Each node's input is the shared working context combined with a
    /// mapping from each dependency name to that dependency's stored result.
    /// Successful outputs are merged into the context key-wise, later values
    /// overwriting earlier ones, so downstream nodes observe upstream results
    /// without explicit passing.
    ///
    /// The first node failure aborts the remaining walk; nodes not yet
    /// started stay `Pending` and results computed so far remain readable
    /// through [`node_status`](Self::node_status) and [`TaskNode::result`].
    pub fn execute_workflow(
        &mut self,
        initial_context: Payload,
    ) -> Result<HashMap<String, Payload>> {
        let order = self.execution_order()?;
        info!(nodes = order.len(), "starting workflow run");

        let mut context = initial_context;
        let mut results: HashMap<String, Payload> = HashMap::new();

        for name in order {
            let mut input = context.clone();
            for dep in self.dependencies_of(&name).to_vec() {
                if let Some(result) = self.nodes.get(&dep).and_then(TaskNode::result) {
                    input.insert(dep, serde_json::Value::Object(result.clone()));
                }
            }

            let output = match self.execute_node(&name, &input) {
                Ok(output) => output,
                Err(err) => {
                    warn!(node = %name, error = %err, "workflow aborted on first failure");
                    return Err(err);
                }
            };

            for (key, value) in output.clone() {
                context.insert(key, value);
            }
            results.insert(name, output);
        }

        info!(completed = results.len(), "workflow run finished");
        Ok(results)
    }

    /// Read-only view of one node's execution record.
    pub fn node_status(&self, name: &str) -> Result<NodeStatus> {
        let node = self
            .nodes
            .get(name)
            .ok_or_else(|| GridironError::NodeNotFound(name.to_string()))?;

        Ok(NodeStatus {
            name: node.name().to_string(),
            state: node.state(),
            error: node.error().map(str::to_string),
            started_at: node.started_at(),
            finished_at: node.finished_at(),
            duration: node.duration(),
        })
    }

    /// Aggregate projection over all nodes; callable at any point during or
    /// after execution, with no side effects.
    pub fn workflow_status(&self) -> WorkflowStatus {
        let mut pending = 0;
        let mut running = 0;
        let mut completed = 0;
        let mut failed = 0;

        for node in self.nodes.values() {
            match node.state() {
                NodeState::Pending => pending += 1,
                NodeState::Running => running += 1,
                NodeState::Completed => completed += 1,
                NodeState::Failed => failed += 1,
            }
        }

        let started_at = self.nodes.values().filter_map(TaskNode::started_at).min();
        let finished_at = self.nodes.values().filter_map(TaskNode::finished_at).max();
        let duration = match (started_at, finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        };

        let verdict = if failed > 0 {
            WorkflowVerdict::Failed
        } else if completed == self.nodes.len() {
            WorkflowVerdict::Completed
        } else if running > 0 {
            WorkflowVerdict::Running
        } else {
            WorkflowVerdict::Pending
        };

        WorkflowStatus {
            total: self.nodes.len(),
            pending,
            running,
            completed,
            failed,
            started_at,
            finished_at,
            duration,
            verdict,
        }
    }
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskGraph")
            .field("order", &self.order)
            .field("nodes", &self.nodes)
            .finish()
    }
}
