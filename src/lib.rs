//! This crate exposes a deliberately plain, unbalanced Binary Search Tree
//! (BST) over integer keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A BST stores keys in `Node`s linked into a tree. Every `Node` owns up to
//! two children, and the whole structure is defined by two invariants:
//!
//! 1. For every `Node`, all the keys in its left subtree are strictly less
//!    than its own key.
//! 2. For every `Node`, all the keys in its right subtree are strictly
//!    greater than its own key.
//!
//! Keys are unique: inserting a key that is already present leaves the tree
//! untouched.
//!
//! These invariants make lookups `O(height)` and give you sorted iteration
//! for free by visiting the left subtree, then the node, then the right
//! subtree. Because nothing here rebalances, the height depends entirely on
//! the insertion order (sorted input degrades the tree into a linked list).
//! That trade-off is the point: this is the textbook structure, not a
//! production map.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4].iter().copied() {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(4));
//! assert!(!tree.contains(9));
//! assert_eq!(tree.iter_inorder().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.height(), 3);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod tree;

pub use tree::{Inorder, Node, Tree};
