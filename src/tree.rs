//! The unbalanced BST itself: [`Tree`], its [`Node`]s, and every operation
//! on them. Nothing in this module rebalances; the shape of the tree is
//! exactly the shape the insertion order produced.

use std::cmp::Ordering;
use std::fmt;

mod inorder;

pub use inorder::Inorder;

/// A single node in the tree.
///
/// A node exclusively owns its children; an absent child is `None`. There
/// are no parent or back pointers, so the structure is a strict tree.
#[derive(Debug, Clone)]
pub struct Node {
    key: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The left child. All keys below it are strictly less than
    /// [`key`](Node::key).
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child. All keys below it are strictly greater than
    /// [`key`](Node::key).
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The largest key in the subtree rooted at this node, found by
    /// descending right until there is no right child.
    fn max_key(&self) -> i64 {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node.key
    }
}

/// An unbalanced binary search tree storing unique `i64` keys.
///
/// All operations run in `O(height)` except [`height`](Tree::height) itself
/// and full traversals, which visit every node. The tree is not safe for
/// concurrent mutation without external synchronization.
///
/// # Examples
///
/// ```
/// use plain_bst::Tree;
///
/// let mut tree = Tree::new();
///
/// assert!(tree.insert(2));
/// assert!(tree.insert(1));
/// // Inserting an existing key changes nothing.
/// assert!(!tree.insert(2));
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.remove(1));
/// assert!(!tree.contains(1));
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of keys in the tree.
    ///
    /// Time complexity: `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(7);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(7);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.root.is_none()
    }

    /// Inserts `key` into the tree.
    ///
    /// Descends from the root, going left for smaller keys and right for
    /// larger ones, and creates a new node in the empty slot it reaches.
    /// Returns `true` if a node was created and `false` if the key was
    /// already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(1));
    /// ```
    pub fn insert(&mut self, key: i64) -> bool {
        let inserted = Self::insert_into(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_into(slot: &mut Option<Box<Node>>, key: i64) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(Node::new(key)));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_into(&mut node.left, key),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert_into(&mut node.right, key),
            },
        }
    }

    /// Removes `key` from the tree.
    ///
    /// Returns `true` if the key was present and `false` otherwise; removing
    /// an absent key is a no-op, not an error. A node with two children is
    /// not unlinked: its key is overwritten with its in-order predecessor
    /// (the largest key in its left subtree) and the predecessor node is
    /// then removed from that subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(1));
    /// assert!(!tree.remove(1));
    /// assert!(!tree.contains(1));
    /// assert!(tree.contains(2));
    /// ```
    pub fn remove(&mut self, key: i64) -> bool {
        let removed = Self::remove_from(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(slot: &mut Option<Box<Node>>, key: i64) -> bool {
        let node = match slot {
            None => return false,
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::remove_from(&mut node.left, key),
            Ordering::Greater => Self::remove_from(&mut node.right, key),
            Ordering::Equal => {
                match (node.left.as_mut(), node.right.as_mut()) {
                    (None, None) => *slot = None,
                    (None, Some(_)) => *slot = node.right.take(),
                    (Some(_), None) => *slot = node.left.take(),
                    (Some(left), Some(_)) => {
                        // Splice in the in-order predecessor. It has no right
                        // child, so the recursive removal below terminates on
                        // the leaf or single-child case.
                        let predecessor = left.max_key();
                        node.key = predecessor;
                        Self::remove_from(&mut node.left, predecessor);
                    }
                }
                true
            }
        }
    }

    /// Returns `true` if `key` is in the tree.
    ///
    /// Time complexity: `O(height)`. No side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(4);
    ///
    /// assert!(tree.contains(4));
    /// assert!(!tree.contains(9));
    /// ```
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns the height of the tree: the number of nodes on the longest
    /// root-to-leaf path.
    ///
    /// An empty tree has height 0 and a single node has height 1. The value
    /// is recomputed on every call by walking the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_deref())
    }

    fn height_of(node: Option<&Node>) -> usize {
        match node {
            None => 0,
            Some(node) => 1 + Self::height_of(node.left()).max(Self::height_of(node.right())),
        }
    }

    /// Performs a lazy in-order traversal, yielding keys in ascending order.
    ///
    /// The iterator borrows the tree, so the tree cannot be mutated while it
    /// is live. Calling this again starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4].iter().copied() {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<_> = tree.iter_inorder().collect();
    /// assert_eq!(keys, [1, 3, 4, 5, 8]);
    /// ```
    pub fn iter_inorder(&self) -> Inorder<'_> {
        Inorder::new(self.root.as_deref())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    ///
    /// This is a low-level API meant for implementing custom traversals.
    /// Which key ends up at the root depends only on the order of insertions
    /// and removals; for a guaranteed ordering use
    /// [`iter_inorder`](Tree::iter_inorder).
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Removes every node, leaving the tree empty and ready for reuse.
    ///
    /// Each node has both children detached before it is released, so no
    /// node is ever freed while a live parent still links to it. The walk
    /// uses an explicit stack, so tearing down a spine-shaped tree cannot
    /// overflow the call stack. Dropping the tree does the same thing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    fn fmt_rotated(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(right) = node.right() {
            Self::fmt_rotated(right, depth + 1, f)?;
        }
        writeln!(f, "{:indent$}{}", "", node.key, indent = depth * 4)?;
        if let Some(left) = node.left() {
            Self::fmt_rotated(left, depth + 1, f)?;
        }
        Ok(())
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        // Trees holding the same keys can be shaped differently, so compare
        // the sorted key sequences rather than the structure.
        self.len == other.len && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl Eq for Tree {}

/// Renders the tree rotated a quarter turn: the right subtree is printed
/// above its parent and the left subtree below, with indentation growing by
/// depth. An empty tree renders as a single `(empty)` line.
///
/// ```text
///     8
/// 5
///         4
///     3
///         1
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => writeln!(f, "(empty)"),
            Some(root) => Self::fmt_rotated(root, 0, f),
        }
    }
}
