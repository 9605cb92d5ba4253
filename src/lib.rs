//! This crate exposes two classic data structures, mostly for educational
//! purposes: an unbalanced [Binary Search Tree][tree] and an undirected
//! [graph][graph] stored as an adjacency matrix.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching takes `O(height)`. This tree does no rebalancing, so inserting
//! keys in sorted order degrades it into a chain with `height == len`.
//!
//! ## Graph
//!
//! The graph has a fixed number of vertices, identified by their index, and
//! a symmetric `vertex_count × vertex_count` matrix recording which pairs are
//! connected. It supports adding and removing edges and walking everything
//! reachable from a vertex depth first or breadth first.
//!
//! Neither structure is synchronized. Mutation takes `&mut self` and every
//! traversal borrows the structure, so the borrow checker keeps the two
//! apart.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod graph;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use graph::{Graph, SelfLoops};
pub use tree::{Order, Tree};
