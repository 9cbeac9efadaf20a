use bst::owned::{Inversion, Node, Tree};

use quickcheck::quickcheck;

use crate::Op;

/// A node's value and the addresses of it and its children, in pre-order. Two trees with the same
/// snapshot are made of the very same nodes linked together the same way.
type Snapshot = Vec<(i8, *const Node<i8>, Option<*const Node<i8>>, Option<*const Node<i8>>)>;

fn snapshot(tree: &Tree<i8>) -> Snapshot {
    let mut snapshot = Vec::new();
    let mut stack: Vec<&Node<i8>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        snapshot.push((
            *node.value(),
            node as *const _,
            node.left().map(|n| n as *const _),
            node.right().map(|n| n as *const _),
        ));
        stack.extend(node.right());
        stack.extend(node.left());
    }
    snapshot
}

fn sorted_values(tree: &Tree<i8>) -> Vec<i8> {
    let mut values: Vec<_> = snapshot(tree).into_iter().map(|(v, ..)| v).collect();
    values.sort_unstable();
    values
}

/// Collects every value in the subtree rooted at `node`.
fn subtree_values(node: Option<&Node<i8>>) -> Vec<i8> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node<i8>> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        values.push(*node.value());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    values
}

/// Every value left of a node is smaller than it and every value right of it is at least as
/// large.
fn is_bst(tree: &Tree<i8>) -> bool {
    let mut stack: Vec<&Node<i8>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        let value = node.value();
        if !subtree_values(node.left()).iter().all(|x| x < value)
            || !subtree_values(node.right()).iter().all(|x| x >= value)
        {
            return false;
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    true
}

quickcheck! {
    fn inserts_keep_ordering(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        is_bst(&tree)
    }
}

quickcheck! {
    fn every_insert_adds_a_node(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        xs.iter().enumerate().all(|(i, x)| {
            tree.insert(*x);
            tree.len() == i + 1
        })
    }
}

quickcheck! {
    fn invert_twice_restores_same_nodes(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = snapshot(&tree);

        let expected = if xs.is_empty() { Inversion::Empty } else { Inversion::Inverted };
        let first = tree.invert();
        let inverted = snapshot(&tree);
        let second = tree.invert();

        first == expected
            && second == expected
            && snapshot(&tree) == before
            && (xs.len() < 2 || inverted != before)
    }
}

quickcheck! {
    fn invert_keeps_values_and_count(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut inserted = Vec::new();
        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(x);
                    inserted.push(x);
                }
                Op::Invert => {
                    let len = tree.len();
                    let _ = tree.invert();
                    if tree.len() != len {
                        return false;
                    }
                }
            }
        }
        inserted.sort_unstable();

        tree.len() == inserted.len() && sorted_values(&tree) == inserted
    }
}

#[test]
fn invert_mirrors_scenario_tree() {
    let mut tree: Tree<i8> = [5, 3, 8, 1, 4].into_iter().collect();
    assert!(is_bst(&tree));

    assert_eq!(tree.invert(), Inversion::Inverted);
    assert!(!is_bst(&tree));

    let root = tree.root().unwrap();
    assert_eq!(root.left().map(Node::value), Some(&8));
    let three = root.right().unwrap();
    assert_eq!(three.value(), &3);
    assert_eq!(three.left().map(Node::value), Some(&4));
    assert_eq!(three.right().map(Node::value), Some(&1));
}
