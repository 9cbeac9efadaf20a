//! This crate exposes a small, unbalanced Binary Search Tree (BST) whose subtrees can be
//! inverted (mirrored) in place.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built recursively out of `Node`s. Each `Node` stores
//! the value that was inserted and has up to two child `Node`s. The tree here keeps these
//! invariants while it is built by inserting:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value strictly less than its
//!    own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal
//!    to its own value. Duplicates are kept and always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! There is no rebalancing. The shape of the tree depends only on insertion order, so inserting
//! sorted values produces a tree that is really a linked list.
//!
//! ## Inversion
//!
//! Inverting a subtree swaps the left and right children of every `Node` in it, producing its
//! mirror image. Afterwards the ordering above is reversed, so the result is not a BST under the
//! original ordering. Inverting twice restores the original shape.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod owned;
