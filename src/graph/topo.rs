// src/graph/topo.rs

//! Kahn's algorithm over the graph's adjacency maps.
//!
//! Produces one deterministic linearization: whenever several nodes are
//! schedulable at once, the earliest-inserted one wins. A valid order exists
//! iff the graph is acyclic, so the same pass doubles as the cycle check.

use std::collections::{HashMap, HashSet};

/// Compute a topological order over `order` (node names in insertion order).
///
/// `remaining` maps each node to its unsatisfied dependency count and
/// `dependents` maps each node to the nodes that depend on it.
///
/// Returns the order on success, or the name of a node involved in a cycle.
pub(crate) fn topological_order(
    order: &[String],
    mut remaining: HashMap<String, usize>,
    dependents: &HashMap<String, Vec<String>>,
) -> std::result::Result<Vec<String>, String> {
    let mut sorted: Vec<String> = Vec::with_capacity(order.len());
    let mut emitted: HashSet<&str> = HashSet::with_capacity(order.len());

    while sorted.len() < order.len() {
        // Insertion-order scan keeps tie-breaking reproducible.
        let next = order.iter().find(|name| {
            !emitted.contains(name.as_str())
                && remaining.get(name.as_str()).copied() == Some(0)
        });

        let Some(name) = next else {
            // Every remaining node still waits on a dependency: cycle.
            let member = order
                .iter()
                .find(|name| !emitted.contains(name.as_str()))
                .cloned()
                .unwrap_or_default();
            return Err(member);
        };

        for dependent in dependents.get(name).into_iter().flatten() {
            if let Some(count) = remaining.get_mut(dependent) {
                *count = count.saturating_sub(1);
            }
        }

        emitted.insert(name.as_str());
        sorted.push(name.clone());
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(
        edges: &[(&str, &str)],
        nodes: &[&str],
    ) -> (Vec<String>, HashMap<String, usize>, HashMap<String, Vec<String>>) {
        let order: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
        let mut remaining: HashMap<String, usize> =
            order.iter().map(|n| (n.clone(), 0)).collect();
        let mut dependents: HashMap<String, Vec<String>> =
            order.iter().map(|n| (n.clone(), Vec::new())).collect();

        for (dep, node) in edges {
            *remaining.get_mut(*node).unwrap() += 1;
            dependents.get_mut(*dep).unwrap().push(node.to_string());
        }

        (order, remaining, dependents)
    }

    #[test]
    fn chain_is_ordered_by_dependencies() {
        let (order, remaining, dependents) =
            adjacency(&[("a", "b"), ("b", "c")], &["c", "b", "a"]);
        let sorted = topological_order(&order, remaining, &dependents).unwrap();
        assert_eq!(sorted, vec!["a", "b", "c"]);
    }

    #[test]
    fn diamond_breaks_ties_by_insertion_order() {
        let (order, remaining, dependents) = adjacency(
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
            &["a", "b", "c", "d"],
        );
        let sorted = topological_order(&order, remaining, &dependents).unwrap();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn tie_break_follows_insertion_not_name() {
        // "z" was inserted before "a"; both are roots.
        let (order, remaining, dependents) = adjacency(&[], &["z", "a"]);
        let sorted = topological_order(&order, remaining, &dependents).unwrap();
        assert_eq!(sorted, vec!["z", "a"]);
    }

    #[test]
    fn cycle_is_reported_with_a_member_node() {
        let (order, remaining, dependents) = adjacency(
            &[("a", "b"), ("b", "c"), ("c", "a")],
            &["a", "b", "c"],
        );
        let member = topological_order(&order, remaining, &dependents).unwrap_err();
        assert!(["a", "b", "c"].contains(&member.as_str()));
    }

    #[test]
    fn repeated_runs_produce_identical_orders() {
        let (order, remaining, dependents) = adjacency(
            &[("a", "d"), ("b", "d"), ("c", "d")],
            &["c", "a", "b", "d"],
        );
        let first =
            topological_order(&order, remaining.clone(), &dependents).unwrap();
        let second = topological_order(&order, remaining, &dependents).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["c", "a", "b", "d"]);
    }
}
