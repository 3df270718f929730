use std::iter::FusedIterator;

use super::Node;

/// A lazy in-order traversal over the keys of a [`Tree`](super::Tree),
/// created by [`iter_inorder`](super::Tree::iter_inorder).
///
/// Yields every key in ascending order. The iterator holds a stack of the
/// nodes still to visit, so advancing it costs amortized `O(1)` and never
/// recurses.
pub struct Inorder<'a> {
    stack: Vec<&'a Node>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a> Inorder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl FusedIterator for Inorder<'_> {}
