//! A naive, unbalanced BST. Nodes are owned by their parent through `Option<Box<Node<T>>>`
//! slots and the tree never rotates, so its shape is entirely decided by insertion order.
//!
//! Every walk over the tree uses an explicit stack or a loop rather than recursion. Inserting
//! sorted input builds a tree that is really a linked list and recursing down that would grow
//! the call stack with the number of elements.
//!
//! # Examples
//!
//! ```
//! use naive_bst::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.size(), 0);
//! assert_eq!(tree.height(), -1);
//! assert_eq!(tree.find_max(), None);
//!
//! tree.insert(50);
//! tree.insert(30);
//! tree.insert(70);
//!
//! // Inserting a value that is already present changes nothing.
//! tree.insert(30);
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), 1);
//!
//! let mut sorted = Vec::new();
//! tree.in_order_traversal(&mut sorted);
//! assert_eq!(sorted, vec![30, 50, 70]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A Binary Search Tree holding unique values of `T`. Values are placed using `T`'s total
/// order and the tree is never rebalanced.
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
}

/// A single value in the tree along with its (possibly absent) children. Everything in `left`
/// is less than `value` and everything in `right` is greater.
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Only one level deep so formatting a degenerate tree can't recurse forever.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, for inspecting the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [10, 5, 15].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &10);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(5));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(15));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` where it belongs according to its ordering. If the tree already holds a
    /// value comparing equal to it, the tree is left untouched and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(10);
    /// tree.insert(10);
    /// tree.insert(10);
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return,
            };
        }

        *slot = Some(Node::new_boxed(value));
    }

    /// Returns whether the tree holds a value comparing equal to `value`. Only the single path
    /// from the root that `value` could live on is searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.contains(&30));
    /// assert!(!tree.contains(&40));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Appends every value to `out` in ascending order. Anything already in `out` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// let mut out = vec![0];
    /// tree.in_order_traversal(&mut out);
    /// assert_eq!(out, vec![0, 1, 3, 5, 8]);
    /// ```
    pub fn in_order_traversal(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.extend(self.iter().cloned());
    }

    /// Returns references to the values in pre-order (node, then left, then right). Inserting
    /// these values into an empty tree rebuilds exactly the same shape.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            stack.extend(node.right());
            stack.extend(node.left());
        }

        result
    }

    /// Returns references to the values in post-order (left, then right, then node), i.e. every
    /// node comes after both of its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        // Visiting node, right, left and reversing gives left, right, node.
        let mut result = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        result.reverse();

        result
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Counts the nodes in the tree.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// The number of edges on the longest path from the root down to a leaf. An empty tree has
    /// a height of `-1` and a tree holding a single value has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::BinarySearchTree;
    ///
    /// // Ascending input degenerates into a list.
    /// let tree: BinarySearchTree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }

        height
    }

    /// The largest value, found by following right children from the root. This costs
    /// `O(height)`, not `O(size)`.
    pub fn find_max(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }

        Some(&current.value)
    }

    /// The smallest value, found by following left children from the root.
    pub fn find_min(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }

        Some(&current.value)
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // The default drop recurses through every `Box` which overflows on long degenerate trees.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.pre_order().into_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Draws the tree on its side: the root sits in the left-most column, right subtrees above their
/// parent and left subtrees below, one value per line.
///
/// ```
/// use naive_bst::tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "    3\n2\n    1\n");
/// ```
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty)");
        }

        // Reverse in-order walk: right, node, left.
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.root().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right().map(|right| (right, depth + 1));
            }

            match stack.pop() {
                Some((node, depth)) => {
                    writeln!(f, "{:indent$}{}", "", node.value, indent = depth * 4)?;
                    current = node.left().map(|left| (left, depth + 1));
                }
                None => return Ok(()),
            }
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`BinarySearchTree`]. It keeps the path of nodes whose own value
/// hasn't been yielded yet.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}
