//! An unbalanced Binary Search Tree over `i32` keys. Children are owned
//! through `Box`es and every structural operation consumes the tree and
//! returns the new root, which the caller has to rebind.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(1).is_none());
//!
//! // `insert` hands back the new root.
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree = tree.insert(key);
//! }
//! assert_eq!(tree.search(40).map(|n| n.key()), Some(40));
//!
//! // So does `delete`.
//! tree = tree.delete(30);
//! assert!(!tree.contains(30));
//!
//! let keys: Vec<_> = tree.traverse(Order::InOrder).collect();
//! assert_eq!(keys, [20, 40, 50, 60, 70, 80]);
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;

/// A Binary Search Tree. Either empty ([`Leaf`][Tree::Leaf]) or a [`Node`]
/// owning two subtrees.
///
/// Every operation walks the tree with a loop rather than recursion, so a
/// degenerate tree (a chain of sorted keys) is as safe to build, clone,
/// compare and drop as a balanced one.
// TODO stack based Debug
#[derive(Debug)]
pub enum Tree {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    Node(Node),
}

/// A `Node` has a key that is used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    key: i32,
    left: Box<Tree>,
    right: Box<Tree>,
}

/// The order in which [`Tree::traverse`] visits keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in
    /// ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree::Leaf
    }

    /// Returns the tree with `key` added. Inserting a key that is already
    /// present returns the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1);
    /// let same = tree.clone().insert(1);
    ///
    /// assert_eq!(tree, same);
    /// ```
    pub fn insert(mut self, key: i32) -> Self {
        self.add(key);
        self
    }

    /// Finds the node holding `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert_eq!(tree.search(1).map(|n| n.key()), Some(1));
    /// assert!(tree.search(42).is_none());
    /// ```
    pub fn search(&self, key: i32) -> Option<&Node> {
        let mut current = self;
        while let Tree::Node(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => &*n.left,
                Ordering::Equal => return Some(n),
                Ordering::Greater => &*n.right,
            };
        }
        None
    }

    /// Whether `key` is stored in this tree.
    pub fn contains(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Returns the tree without `key`. Deleting a key that isn't present
    /// returns the tree unchanged.
    ///
    /// A node with two children isn't unlinked. Instead it takes the key of
    /// its in-order successor (the smallest key of its right subtree) and
    /// that successor is deleted from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// let tree = tree.delete(2);
    ///
    /// assert!(!tree.contains(2));
    /// assert!(tree.contains(1) && tree.contains(3));
    /// ```
    pub fn delete(mut self, key: i32) -> Self {
        self.remove(key);
        self
    }

    /// Adds `key` in place. Returns `true` if the key wasn't already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// ```
    pub fn add(&mut self, key: i32) -> bool {
        let slot = self.slot_mut(key);
        if !slot.is_leaf() {
            return false;
        }

        tracing::trace!(key, "inserting new node");
        *slot = Tree::Node(Node::new(key));
        true
    }

    /// Removes `key` in place. Returns `true` if the key was present.
    pub fn remove(&mut self, key: i32) -> bool {
        let slot = self.slot_mut(key);
        let mut n = match mem::take(slot) {
            Tree::Leaf => return false,
            Tree::Node(n) => n,
        };

        tracing::trace!(key, "deleting node");
        *slot = if n.left.is_leaf() {
            mem::take(&mut *n.right)
        } else if let Some(successor) = n.right.min() {
            // The successor has no left child, so this removal doesn't
            // promote again.
            n.key = successor;
            n.right.remove(successor);
            Tree::Node(n)
        } else {
            mem::take(&mut *n.left)
        };
        true
    }

    /// The smallest key in the tree (its leftmost node).
    pub fn min(&self) -> Option<i32> {
        let mut current = self;
        let mut min = None;
        while let Tree::Node(n) = current {
            min = Some(n.key);
            current = &*n.left;
        }
        min
    }

    /// The largest key in the tree (its rightmost node).
    pub fn max(&self) -> Option<i32> {
        let mut current = self;
        let mut max = None;
        while let Tree::Node(n) = current {
            max = Some(n.key);
            current = &*n.right;
        }
        max
    }

    /// Gets the height of this tree. An empty tree has height 0 and a single
    /// node has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((tree, depth)) = pending.pop() {
            if let Tree::Node(n) = tree {
                height = height.max(depth);
                pending.push((&*n.left, depth + 1));
                pending.push((&*n.right, depth + 1));
            }
        }
        height
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.is_leaf()
    }

    /// Lazily walks the keys in the given [`Order`]. Each call starts a fresh
    /// walk from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::{Order, Tree};
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::InOrder).collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(tree.traverse(Order::PreOrder).collect::<Vec<_>>(), [2, 1, 3]);
    /// assert_eq!(tree.traverse(Order::PostOrder).collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_> {
        Traverse::new(self, order)
    }

    /// Walks the keys in ascending order.
    pub fn iter(&self) -> Traverse<'_> {
        self.traverse(Order::InOrder)
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf)
    }

    /// The subtree slot where `key` lives: its node if present, otherwise the
    /// leaf it would be inserted into.
    fn slot_mut(&mut self, key: i32) -> &mut Tree {
        let mut slot = self;
        loop {
            let direction = match &*slot {
                Tree::Node(n) => key.cmp(&n.key),
                Tree::Leaf => Ordering::Equal,
            };
            slot = match (direction, slot) {
                (Ordering::Less, Tree::Node(n)) => &mut *n.left,
                (Ordering::Greater, Tree::Node(n)) => &mut *n.right,
                (_, found) => return found,
            };
        }
    }
}

impl Clone for Tree {
    // Rebuilds bottom-up from a post-order walk that also visits leaves.
    fn clone(&self) -> Self {
        enum Work<'a> {
            Visit(&'a Tree),
            Build(i32),
        }

        let mut steps = vec![Work::Visit(self)];
        let mut built: Vec<Tree> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Work::Visit(Tree::Leaf) => built.push(Tree::Leaf),
                Work::Visit(Tree::Node(n)) => {
                    steps.push(Work::Build(n.key));
                    steps.push(Work::Visit(&*n.right));
                    steps.push(Work::Visit(&*n.left));
                }
                Work::Build(key) => {
                    let right = built.pop().unwrap_or_default();
                    let left = built.pop().unwrap_or_default();
                    built.push(Tree::Node(Node {
                        key,
                        left: Box::new(left),
                        right: Box::new(right),
                    }));
                }
            }
        }
        built.pop().unwrap_or_default()
    }
}

/// Structural equality: same keys in the same shape.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Tree::Leaf, Tree::Leaf) => {}
                (Tree::Node(a), Tree::Node(b)) if a.key == b.key => {
                    pending.push((&*a.left, &*b.left));
                    pending.push((&*a.right, &*b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl Node {
    fn new(key: i32) -> Self {
        Self {
            key,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// The subtree holding every key smaller than this node's.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding every key larger than this node's.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// Moves any non-empty children onto `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Tree>) {
        for child in [&mut self.left, &mut self.right] {
            if !child.is_leaf() {
                pending.push(mem::take(&mut **child));
            }
        }
    }
}

impl Drop for Node {
    // Unlinks descendants onto a heap stack so each one is dropped with leaf
    // children and dropping never recurses.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(tree) = pending.pop() {
            if let Tree::Node(mut n) = tree {
                n.detach_children(&mut pending);
            }
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy walk over the keys of a [`Tree`], created by [`Tree::traverse`].
///
/// Holds at most a few entries per level of the tree, so memory use is
/// `O(height)`.
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    order: Order,
    stack: Vec<Step<'a>>,
}

#[derive(Clone, Copy, Debug)]
enum Step<'a> {
    /// Subtree whose children haven't been scheduled yet.
    Expand(&'a Node),
    /// Key ready to be yielded.
    Emit(i32),
}

impl<'a> Traverse<'a> {
    fn new(tree: &'a Tree, order: Order) -> Self {
        let mut traverse = Self {
            order,
            stack: Vec::new(),
        };
        traverse.schedule(tree);
        traverse
    }

    fn schedule(&mut self, tree: &'a Tree) {
        if let Tree::Node(n) = tree {
            self.stack.push(Step::Expand(n));
        }
    }
}

impl Iterator for Traverse<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some(step) = self.stack.pop() {
            let n = match step {
                Step::Emit(key) => return Some(key),
                Step::Expand(n) => n,
            };

            // Pushed in reverse since the stack pops last-in first.
            match self.order {
                Order::InOrder => {
                    self.schedule(&n.right);
                    self.stack.push(Step::Emit(n.key));
                    self.schedule(&n.left);
                }
                Order::PreOrder => {
                    self.schedule(&n.right);
                    self.schedule(&n.left);
                    return Some(n.key);
                }
                Order::PostOrder => {
                    self.stack.push(Step::Emit(n.key));
                    self.schedule(&n.right);
                    self.schedule(&n.left);
                }
            }
        }

        None
    }
}

impl FusedIterator for Traverse<'_> {}
