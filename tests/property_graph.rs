// tests/property_graph.rs

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use gridiron::graph::{Payload, TaskGraph, WorkflowVerdict, Work};
use gridiron_test_utils::work::{execution_log, ExecutionLog, RecordingWork};

/// Dependency lists for a randomly-shaped DAG. Acyclicity is guaranteed by
/// construction: node N may only depend on nodes 0..N-1.
fn dag_shape_strategy(max_nodes: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_nodes),
            num_nodes,
        )
        .prop_map(|raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    let mut valid: HashSet<usize> = HashSet::new();
                    for dep in potential {
                        if i > 0 {
                            valid.insert(dep % i);
                        }
                    }
                    let mut deps: Vec<usize> = valid.into_iter().collect();
                    deps.sort_unstable();
                    deps
                })
                .collect()
        })
    })
}

fn build(shape: &[Vec<usize>], log: ExecutionLog) -> TaskGraph {
    let mut graph = TaskGraph::new();
    for (i, deps) in shape.iter().enumerate() {
        let name = format!("task_{i}");
        let dep_names = deps.iter().map(|d| format!("task_{d}")).collect();
        let work: Box<dyn Work> = Box::new(RecordingWork::new(&name, log.clone()));
        graph
            .add_node(name, work, dep_names)
            .expect("construction-valid DAG must be accepted");
    }
    graph
}

proptest! {
    #[test]
    fn generated_dags_always_linearize(shape in dag_shape_strategy(10)) {
        let graph = build(&shape, execution_log());
        let order = graph.execution_order().unwrap();
        prop_assert_eq!(order.len(), shape.len());

        // Every node appears after all of its dependencies.
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        for (i, deps) in shape.iter().enumerate() {
            let node_pos = position[format!("task_{i}").as_str()];
            for dep in deps {
                let dep_pos = position[format!("task_{dep}").as_str()];
                prop_assert!(dep_pos < node_pos);
            }
        }
    }

    #[test]
    fn identically_built_graphs_order_identically(shape in dag_shape_strategy(10)) {
        let first = build(&shape, execution_log()).execution_order().unwrap();
        let second = build(&shape, execution_log()).execution_order().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn workflow_visits_every_node_in_the_computed_order(shape in dag_shape_strategy(8)) {
        let log = execution_log();
        let mut graph = build(&shape, log.clone());
        let expected = graph.execution_order().unwrap();

        let results = graph.execute_workflow(Payload::new()).unwrap();

        prop_assert_eq!(results.len(), shape.len());
        prop_assert_eq!(graph.workflow_status().verdict, WorkflowVerdict::Completed);
        let visited = log.lock().unwrap().clone();
        prop_assert_eq!(visited, expected);
    }
}
