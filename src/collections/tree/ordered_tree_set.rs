use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, Link, Node, NodeRef};
use crate::collections::traits::{Collection, HashCode, Set, set_hash_code};

/// A set of ordered elements, stored in a binary search tree without any rebalancing.
///
/// Every node links to its children and back up to its parent, so iteration moves from node to
/// in-order successor without an explicit stack. The tree's shape depends entirely on insertion
/// order: elements added in sorted order produce a single chain of right children.
///
/// It is a logic error for an element to be modified in a way that changes its ordering relative
/// to the others while it is in the set. The API only hands out shared references to elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the set.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `iter().next()` | `O(1)`* |
///
/// \* Amortized over a full traversal. A single step climbs or descends up to `h` nodes.
pub struct OrderedTreeSet<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> OrderedTreeSet<T> {
    /// Creates a new, empty set. Nothing is allocated until the first element is added.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::tree::OrderedTreeSet;
    /// let set: OrderedTreeSet<u8> = OrderedTreeSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub const fn new() -> OrderedTreeSet<T> {
        OrderedTreeSet {
            root: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the least element of the set, if any.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: The node is part of this tree, which is borrowed for the reference's lifetime.
        self.root.map(|root| unsafe { root.leftmost().value() })
    }

    /// Returns a reference to the greatest element of the set, if any.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: As for first.
        self.root.map(|root| unsafe { root.rightmost().value() })
    }

    /// Removes and returns the least element of the set, if any.
    pub fn pop_first(&mut self) -> Option<T> {
        let node = self.root?.leftmost();
        // SAFETY: The node is part of this tree and no references to its value are alive.
        Some(unsafe { self.unlink(node) })
    }

    /// Removes and returns the greatest element of the set, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        let node = self.root?.rightmost();
        // SAFETY: As for pop_first.
        Some(unsafe { self.unlink(node) })
    }

    /// Removes every element from the set, freeing each node without recursion.
    pub fn clear(&mut self) {
        let mut link = self.root.take();

        // Descend to a leaf, detaching it from its parent, then free it and climb back up.
        while let Some(node) = link {
            if let Some(left) = node.left() {
                node.set_left(None);
                link = Some(left);
            } else if let Some(right) = node.right() {
                node.set_right(None);
                link = Some(right);
            } else {
                link = node.parent();
                // SAFETY: The node is a leaf that has been detached from its parent.
                drop(unsafe { node.take_value() });
            }
        }
        self.len = 0;
    }

    /// Retains only the elements for which `f` returns true, visiting them in ascending order.
    /// Returns true if any element was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> bool {
        let mut cursor = self.cursor();
        let mut changed = false;

        while let Some(item) = cursor.next() {
            if !f(item) {
                changed |= cursor.remove().is_ok();
            }
        }
        changed
    }

    /// Splices `node` out of the tree, frees it and returns its value.
    ///
    /// A node with two children isn't spliced out itself. Instead, its value is exchanged with its
    /// in-order successor, which has no left child, and the successor's node is spliced out in
    /// its place. After the call, `node` holds the value that used to follow the removed one.
    ///
    /// # Safety
    /// `node` must be a node of this tree, and no reference to its value (or its successor's)
    /// may be alive.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        let target = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let successor = right.leftmost();
                // SAFETY: node and successor are distinct live nodes, and the caller guarantees
                // that no other references to their values exist.
                unsafe { mem::swap(node.value_mut(), successor.value_mut()) };
                successor
            },
            _ => node,
        };

        // target has at most one child, which takes its place below its parent.
        let child = target.left().or(target.right());
        let parent = target.parent();

        if let Some(child) = child {
            child.set_parent(parent);
        }
        match parent {
            Some(parent) if parent.left() == Some(target) => parent.set_left(child),
            Some(parent) => parent.set_right(child),
            None => self.root = child,
        }
        self.len -= 1;

        // SAFETY: target has just been unlinked and isn't used again.
        unsafe { target.take_value() }
    }
}

impl<T: Ord> OrderedTreeSet<T> {
    /// Adds `value` to the set, returning true if it wasn't already present. An element that
    /// compares equal to an existing one is rejected and dropped, leaving the set unchanged.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::tree::OrderedTreeSet;
    /// let mut set = OrderedTreeSet::new();
    /// assert!(set.add(2));
    /// assert!(set.add(1));
    /// assert!(!set.add(2));
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut ordering = Ordering::Equal;
        let mut link = self.root;

        while let Some(node) = link {
            // SAFETY: The node is part of this tree, which is borrowed mutably, and the reference
            // doesn't outlive the comparison.
            ordering = value.cmp(unsafe { node.value() });
            link = match ordering {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return false,
            };
            parent = Some(node);
        }

        let leaf = NodeRef::leaf(value, parent);
        match parent {
            Some(parent) if ordering == Ordering::Less => parent.set_left(Some(leaf)),
            Some(parent) => parent.set_right(Some(leaf)),
            None => self.root = Some(leaf),
        }
        self.len += 1;
        true
    }

    /// Returns the node holding the element equal to `item`.
    pub(crate) fn find<Q>(&self, item: &Q) -> Link<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root;

        while let Some(node) = link {
            // SAFETY: The node is part of this tree, which is borrowed for the comparison.
            link = match item.cmp(unsafe { node.value() }.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(item).is_some()
    }

    /// Returns a reference to the element of the set equal to `item`, if any.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // SAFETY: The node is part of this tree, which is borrowed for the reference's lifetime.
        self.find(item).map(|node| unsafe { node.value() })
    }

    /// Removes the element equal to `item` and returns it.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find(item)?;
        // SAFETY: The node is part of this tree and no references to its value are alive.
        Some(unsafe { self.unlink(node) })
    }

    /// Removes the element equal to `item`, returning true if one was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(item).is_some()
    }
}

impl<T: Ord> Collection<T> for OrderedTreeSet<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        OrderedTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        OrderedTreeSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        OrderedTreeSet::iter(self)
    }
}

impl<T: Ord> Set<T> for OrderedTreeSet<T> {
    fn add(&mut self, value: T) -> bool {
        OrderedTreeSet::add(self, value)
    }

    fn remove(&mut self, item: &T) -> bool {
        OrderedTreeSet::remove(self, item)
    }

    fn clear(&mut self) {
        OrderedTreeSet::clear(self)
    }

    /// Removes every element of the set which isn't contained in `other`, visiting the set's own
    /// elements rather than those of `other`.
    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        self.retain(|item| other.contains(item))
    }
}

impl<T> Default for OrderedTreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTreeSet<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: OrderedTreeSet owns its nodes exclusively, so it can be sent to another thread when T
// can.
unsafe impl<T: Send> Send for OrderedTreeSet<T> {}
// SAFETY: The safe API only hands out shared references through &self, so OrderedTreeSet<T> can
// be shared when T: Sync.
unsafe impl<T: Sync> Sync for OrderedTreeSet<T> {}

impl<T: Ord> Extend<T> for OrderedTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedTreeSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Ord + Clone> Clone for OrderedTreeSet<T> {
    /// Clones the set node by node in pre-order, so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        let mut set = OrderedTreeSet::new();
        let mut pending: Vec<NodeRef<T>> = self.root.into_iter().collect();

        while let Some(node) = pending.pop() {
            // SAFETY: The node is part of self, which is borrowed for the whole clone.
            set.add(unsafe { node.value() }.clone());
            pending.extend(node.right());
            pending.extend(node.left());
        }
        set
    }
}

impl<T: Ord> PartialEq for OrderedTreeSet<T> {
    /// Two sets are equal if they hold equal elements, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for OrderedTreeSet<T> {}

impl<T: Hash> Hash for OrderedTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Iteration is always in ascending order, so equal sets write the same elements in turn.
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: HashCode> HashCode for OrderedTreeSet<T> {
    fn hash_code(&self) -> i32 {
        set_hash_code(self.iter())
    }
}

impl<T: Debug> Debug for OrderedTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTreeSet")
            .field("nodes", &DebugTree(self.root))
            .field("len", &self.len)
            .finish()
    }
}

/// Draws a tree sideways, with each left subtree above its root and each right subtree below.
/// Every line is prefixed by the turns taken from the root to reach it.
struct DebugTree<T>(Link<T>);

enum DrawStep<T> {
    Enter(Link<T>, Option<bool>),
    Value(NodeRef<T>),
    Leave,
}

impl<T: Debug> Debug for DebugTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // true is a turn to the right.
        let mut path: Vec<bool> = Vec::new();
        let mut steps = vec![DrawStep::Enter(self.0, None)];

        f.write_str("\n")?;
        while let Some(step) = steps.pop() {
            match step {
                DrawStep::Enter(link, turn) => {
                    if let Some(right) = turn {
                        path.push(right);
                        steps.push(DrawStep::Leave);
                    }
                    match link {
                        Some(node) => {
                            steps.push(DrawStep::Enter(node.right(), Some(true)));
                            steps.push(DrawStep::Value(node));
                            steps.push(DrawStep::Enter(node.left(), Some(false)));
                        },
                        None => {
                            write_prefix(f, &path)?;
                            f.write_str("-\n")?;
                        },
                    }
                },
                DrawStep::Value(node) => {
                    // SAFETY: The node is part of a tree borrowed for the duration of the call.
                    let value = format!("{:?}", unsafe { node.value() });
                    for line in value.lines() {
                        write_prefix(f, &path)?;
                        writeln!(f, "{line}")?;
                    }
                },
                DrawStep::Leave => {
                    path.pop();
                },
            }
        }
        Ok(())
    }
}

fn write_prefix(f: &mut Formatter<'_>, path: &[bool]) -> fmt::Result {
    for right in path {
        f.write_str(if *right { "└    " } else { "┌    " })?;
    }
    Ok(())
}

impl<T: Debug> Display for OrderedTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
