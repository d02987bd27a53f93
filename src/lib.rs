//! This crate exposes a naive Binary Search Tree (BST) mostly for educational purposes, along
//! with a small earthquake catalog that is stored and queried through it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! some value (the value that was inserted, for example) and will sometimes have child `Node`s.
//! The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the height of a BST can
//! be limited to `O(lg N)` where `N` is the number of nodes in the tree. The tree here does no
//! such thing: inserting values in ascending order makes every node the right child of the
//! previous one and the tree degenerates into a list of height `N - 1`. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Earthquakes
//!
//! [`earthquake::Earthquake`] is ordered by magnitude, so a tree of earthquakes answers "what
//! was the strongest?" by walking right and lists them weakest first with an in-order walk. See
//! [`analysis`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod analysis;
pub mod earthquake;
pub mod tree;
