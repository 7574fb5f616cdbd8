//! Best-effort total ordering from partial sequence observations.
//!
//! Pure data-structure algorithm, independent of any UI concept: each
//! observed sequence contributes precedes-edges between consecutive
//! elements, and Kahn's algorithm merges them into one order. Duplicate
//! edges never double-count an in-degree, and nodes caught in a
//! contradictory cycle are simply absent from the result — callers want a
//! usable order, not an error.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Merge partial sequences into a total order consistent with every
/// observed adjacency.
///
/// Deterministic: ties break by first-observed position across `parts`.
/// Idempotent: feeding the output back as the sole part reproduces it.
pub fn merge_order<T>(parts: &[Vec<T>]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    // Collect nodes in first-observed order
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut nodes: Vec<T> = Vec::new();
    for part in parts {
        for item in part {
            if !index.contains_key(item) {
                index.insert(item.clone(), nodes.len());
                nodes.push(item.clone());
            }
        }
    }

    // Build the edge set; duplicates must not double-count in-degrees
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut in_degree: Vec<usize> = vec![0; nodes.len()];
    let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();
    for part in parts {
        for pair in part.windows(2) {
            let a = index[&pair[0]];
            let b = index[&pair[1]];
            if seen_edges.insert((a, b)) {
                successors[a].push(b);
                in_degree[b] += 1;
            }
        }
    }

    // Kahn's algorithm
    let mut queue: VecDeque<usize> = (0..nodes.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order: Vec<T> = Vec::with_capacity(nodes.len());
    while let Some(i) = queue.pop_front() {
        order.push(nodes[i].clone());
        for &next in &successors[i] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }
    order
}
