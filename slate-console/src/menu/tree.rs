//! Menu forest construction and parent lookup
//!
//! The backend hands out a flat list of entries, each carrying its own
//! `parent_id`; display order within a parent is the list order. The
//! builder keeps nodes in an arena indexed by position and materializes
//! parent→children adjacency explicitly before assembling the forest.

use shared::models::{Menu, MENU_ROOT_PARENT};
use std::collections::HashMap;

/// Sentinel returned by [`find_parent_id`] when the target id is absent
pub const PARENT_NOT_FOUND: i64 = -1;

/// Build a forest from a flat menu list
///
/// Single linear pass: entries with `parent_id == 0` become roots, every
/// other entry is attached to its parent's `children` in input order.
/// Entries whose declared parent is not in the input are silently dropped,
/// along with anything beneath them.
pub fn build_menu_tree(flat: Vec<Menu>) -> Vec<Menu> {
    let mut slots: Vec<Option<Menu>> = flat
        .into_iter()
        .map(|mut node| {
            node.children.clear();
            Some(node)
        })
        .collect();

    let index: HashMap<i64, usize> = slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|node| (node.menu_id, i)))
        .collect();

    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    let mut roots: Vec<usize> = Vec::new();

    for i in 0..slots.len() {
        let parent_id = match slots[i].as_ref() {
            Some(node) => node.parent_id,
            None => continue,
        };
        if parent_id == MENU_ROOT_PARENT {
            roots.push(i);
        } else if let Some(&p) = index.get(&parent_id) {
            // self-reference would loop; an entry can't parent itself
            if p != i {
                children_of[p].push(i);
            }
        }
        // orphan: parent id not in the input, entry is dropped
    }

    roots
        .into_iter()
        .filter_map(|r| assemble(r, &mut slots, &children_of))
        .collect()
}

fn assemble(i: usize, slots: &mut [Option<Menu>], children_of: &[Vec<usize>]) -> Option<Menu> {
    let mut node = slots[i].take()?;
    node.children = children_of[i]
        .iter()
        .filter_map(|&c| assemble(c, slots, children_of))
        .collect();
    Some(node)
}

/// Flatten a forest back to a parent-before-children list
///
/// Preorder, so sibling order within a parent survives a round trip
/// through [`build_menu_tree`].
pub fn flatten_tree(tree: Vec<Menu>) -> Vec<Menu> {
    let mut flat = Vec::new();
    for node in tree {
        push_subtree(node, &mut flat);
    }
    flat
}

fn push_subtree(mut node: Menu, flat: &mut Vec<Menu>) {
    let children = std::mem::take(&mut node.children);
    flat.push(node);
    for child in children {
        push_subtree(child, flat);
    }
}

/// Total number of entries in a forest
pub fn count_nodes(tree: &[Menu]) -> usize {
    tree.iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

/// Find the parent id of `target` in a forest
///
/// Returns `0` iff `target` sits in the root sequence, the owning node's
/// id when `target` is somebody's direct child, and [`PARENT_NOT_FOUND`]
/// when the id does not exist in the tree. Callers must treat the latter
/// as a failed lookup.
pub fn find_parent_id(tree: &[Menu], target: i64) -> i64 {
    if tree.iter().any(|node| node.menu_id == target) {
        return MENU_ROOT_PARENT;
    }
    search_parent(tree, target)
}

fn search_parent(nodes: &[Menu], target: i64) -> i64 {
    for node in nodes {
        if node.children.iter().any(|child| child.menu_id == target) {
            return node.menu_id;
        }
        let found = search_parent(&node.children, target);
        if found != PARENT_NOT_FOUND {
            return found;
        }
    }
    PARENT_NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(menu_id: i64, parent_id: i64) -> Menu {
        Menu::leaf(menu_id, parent_id, format!("menu-{}", menu_id))
    }

    #[test]
    fn test_build_simple_forest() {
        // [{id:1,parent:0},{id:2,parent:1},{id:3,parent:0}]
        let tree = build_menu_tree(vec![entry(1, 0), entry(2, 1), entry(3, 0)]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].menu_id, 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].menu_id, 2);
        assert_eq!(tree[1].menu_id, 3);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_node_count_conserved_without_orphans() {
        let flat = vec![
            entry(1, 0),
            entry(2, 1),
            entry(3, 1),
            entry(4, 2),
            entry(5, 0),
            entry(6, 5),
        ];
        let n = flat.len();
        let tree = build_menu_tree(flat);
        assert_eq!(count_nodes(&tree), n);
    }

    #[test]
    fn test_orphans_silently_dropped() {
        // parent 99 does not exist; 4 hangs off the orphan and vanishes too
        let tree = build_menu_tree(vec![entry(1, 0), entry(2, 99), entry(4, 2)]);
        assert_eq!(count_nodes(&tree), 1);
        assert_eq!(tree[0].menu_id, 1);
    }

    #[test]
    fn test_sibling_order_mirrors_input() {
        let tree = build_menu_tree(vec![entry(1, 0), entry(5, 1), entry(3, 1), entry(4, 1)]);
        let order: Vec<i64> = tree[0].children.iter().map(|c| c.menu_id).collect();
        assert_eq!(order, vec![5, 3, 4]);
    }

    #[test]
    fn test_self_parent_dropped() {
        let tree = build_menu_tree(vec![entry(1, 0), entry(2, 2)]);
        assert_eq!(count_nodes(&tree), 1);
    }

    #[test]
    fn test_flatten_round_trip() {
        let flat = vec![entry(1, 0), entry(2, 1), entry(3, 1), entry(4, 0)];
        let tree = build_menu_tree(flat.clone());
        let rebuilt = build_menu_tree(flatten_tree(tree.clone()));
        assert_eq!(rebuilt, tree);
        assert_eq!(
            flatten_tree(rebuilt)
                .iter()
                .map(|m| m.menu_id)
                .collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_find_parent_of_root_is_zero() {
        let tree = build_menu_tree(vec![entry(1, 0), entry(2, 1), entry(3, 0)]);
        assert_eq!(find_parent_id(&tree, 1), 0);
        assert_eq!(find_parent_id(&tree, 3), 0);
    }

    #[test]
    fn test_find_parent_of_nested_child() {
        let tree = build_menu_tree(vec![entry(1, 0), entry(2, 1), entry(4, 2), entry(3, 0)]);
        assert_eq!(find_parent_id(&tree, 2), 1);
        assert_eq!(find_parent_id(&tree, 4), 2);
    }

    #[test]
    fn test_find_parent_missing_target() {
        let tree = build_menu_tree(vec![entry(1, 0)]);
        assert_eq!(find_parent_id(&tree, 42), PARENT_NOT_FOUND);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_menu_tree(Vec::new()).is_empty());
        assert_eq!(find_parent_id(&[], 1), PARENT_NOT_FOUND);
    }
}
