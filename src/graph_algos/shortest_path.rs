use crate::collections::FxHashMap;

use std::hash::Hash;

/// Construct the shortest path by walking predecessors back from the target
/// Returns the ordered path from source to target, or an empty path when the
/// predecessor chain never reaches the source
/// predecessor: node -> previous node on its best known path
pub(crate) fn shortest_path<N>(predecessor: &FxHashMap<N, N>, source: &N, target: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    // Trace back from target to source, source == target ends immediately
    while current != source {
        match predecessor.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => return Vec::new(),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reconstruction() {
        let mut predecessor: FxHashMap<&str, &str> = FxHashMap::default();
        predecessor.insert("B", "A");
        predecessor.insert("C", "B");
        predecessor.insert("D", "C");

        assert_eq!(shortest_path(&predecessor, &"A", &"D"), vec!["A", "B", "C", "D"]);
        assert_eq!(shortest_path(&predecessor, &"A", &"B"), vec!["A", "B"]);
    }

    #[test]
    fn test_source_equals_target() {
        let predecessor: FxHashMap<u32, u32> = FxHashMap::default();
        assert_eq!(shortest_path(&predecessor, &4, &4), vec![4]);
    }

    #[test]
    fn test_broken_chain_yields_empty_path() {
        let mut predecessor: FxHashMap<u32, u32> = FxHashMap::default();
        predecessor.insert(3, 2);

        assert!(shortest_path(&predecessor, &1, &3).is_empty());
        assert!(shortest_path(&predecessor, &1, &9).is_empty());
    }
}
