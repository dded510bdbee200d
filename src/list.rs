//! Singly-linked list with index-linked nodes and value semantics.
//!
//! Nodes live in slot storage owned by the list and refer to their successor
//! by index, with [`Index::NONE`] marking the end of the chain. The list
//! tracks head, tail, and length, which makes back-insertion O(1) even
//! though the chain only links forward.
//!
//! # Invariants
//!
//! Every mutating operation preserves, together:
//!
//! - `len == 0` exactly when `head` and `tail` are both `NONE`
//! - following `next` from `head` reaches `tail` in `len - 1` steps, and the
//!   tail's `next` is `NONE`
//! - every reachable node is owned by this list's storage alone (cloning
//!   deep-copies; there is no sharing and no cycle)
//!
//! The tail is an index alias into the same storage the head chains into.
//! Unlike a raw tail pointer, a stale index can never dangle into freed
//! memory; the operations below still never leave one stale.
//!
//! # Example
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list: ForwardList<u64> = ForwardList::new();
//!
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.back(), Some(&3));
//!
//! assert_eq!(list.pop_front(), Some(1));
//! let rest: Vec<_> = list.into_iter().collect();
//! assert_eq!(rest, vec![2, 3]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::{Arena, Index, Storage};

/// Type alias for the default arena-backed node storage.
pub type ArenaNodes<T, K = u32> = Arena<Node<T, K>, K>;

/// Type alias for node storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabNodes<T> = slab::Slab<Node<T, usize>>;

/// A node in the chain: one payload plus the index of its successor.
///
/// Callers interact with `&T` and `&mut T` through the list's accessors;
/// the node structure is an implementation detail.
#[derive(Debug)]
pub struct Node<T, K: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: K,
}

impl<T, K: Index> Node<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            next: K::NONE,
        }
    }
}

/// A singly-linked list that owns its node storage.
///
/// Supports O(1) insertion at both ends and O(1) removal at the front.
/// The list is a plain value: moving it transfers the whole chain, cloning
/// deep-copies it node by node, and dropping it releases every node exactly
/// once.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Link/index type (default `u32`; use `usize` for lists beyond
///   ~4.29 billion live nodes)
/// - `S`: Node storage (default [`ArenaNodes<T, K>`])
///
/// # Example
///
/// ```
/// use forward_list::ForwardList;
///
/// let list: ForwardList<i32> = [1, 2, 3].into();
/// assert_eq!(list.to_string(), "1,2,3,");
/// ```
pub struct ForwardList<T, K: Index = u32, S = ArenaNodes<T, K>>
where
    S: Storage<Node<T, K>, Index = K>,
{
    nodes: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T, K: Index, S> ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::from_storage(S::default())
    }

    /// Creates a list of `len` default-constructed elements.
    ///
    /// `with_len(0)` is the empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let list: ForwardList<u64> = ForwardList::with_len(3);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.front(), Some(&0));
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut list = Self::new();
        for _ in 0..len {
            list.push_back(T::default());
        }
        list
    }
}

impl<T, K: Index> ForwardList<T, K, ArenaNodes<T, K>> {
    /// Creates an empty list with arena room for `capacity` nodes before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Arena::with_capacity(capacity))
    }
}

impl<T, K: Index, S> Default for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Core operations
// =============================================================================

impl<T, K: Index, S> ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    #[inline]
    fn from_storage(nodes: S) -> Self {
        Self {
            nodes,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the back of the list. O(1).
    ///
    /// The new node becomes the tail; if the list was empty it becomes the
    /// head as well.
    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));

        if self.tail.is_some() {
            // Safety: a non-NONE tail is a live node (list invariant)
            unsafe { self.nodes.get_unchecked_mut(self.tail) }.next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Inserts a value at the front of the list. O(1).
    ///
    /// The new node becomes the head, linked to the old head; if the list
    /// was empty it becomes the tail as well.
    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            data: value,
            next: self.head,
        });

        if self.head.is_none() {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Appends a payload constructed at the insertion site. O(1).
    ///
    /// Counterpart of `push_back` for payloads that are cheaper to build in
    /// place than to build up front and transfer. If the closure panics the
    /// list is unchanged.
    #[inline]
    pub fn push_back_with(&mut self, make: impl FnOnce() -> T) {
        self.push_back(make());
    }

    /// Inserts a payload constructed at the insertion site at the front. O(1).
    #[inline]
    pub fn push_front_with(&mut self, make: impl FnOnce() -> T) {
        self.push_front(make());
    }

    /// Removes and returns the front element. O(1).
    ///
    /// Returns `None` if the list is empty. Removing the last element
    /// resets the tail as well, never leaving it stale.
    ///
    /// # Example
    ///
    /// ```
    /// use forward_list::ForwardList;
    ///
    /// let mut list: ForwardList<u64> = [1, 2].into();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = self.nodes.remove(self.head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }
        self.len -= 1;

        Some(node.data)
    }

    /// Returns a reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: a non-NONE head is a live node (list invariant)
            Some(unsafe { &self.nodes.get_unchecked(self.head).data })
        }
    }

    /// Returns a mutable reference to the front element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: a non-NONE head is a live node (list invariant)
            Some(unsafe { &mut self.nodes.get_unchecked_mut(self.head).data })
        }
    }

    /// Returns a reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            // Safety: a non-NONE tail is a live node (list invariant)
            Some(unsafe { &self.nodes.get_unchecked(self.tail).data })
        }
    }

    /// Returns a mutable reference to the back element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            // Safety: a non-NONE tail is a live node (list invariant)
            Some(unsafe { &mut self.nodes.get_unchecked_mut(self.tail).data })
        }
    }

    /// Removes every element, dropping each payload exactly once. O(len).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K, S> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, K, S> {
        IterMut {
            nodes: &mut self.nodes,
            current: self.head,
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<T: fmt::Display, K: Index, S> ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    /// Writes each element front to back, each followed by `,`.
    ///
    /// The empty list writes nothing.
    pub fn write_forward<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for value in self.iter() {
            write!(out, "{value},")?;
        }
        Ok(())
    }

    /// Writes each element back to front, each followed by `,`.
    ///
    /// Two-pass: collects references forward, then emits them reversed.
    /// Keeps traversal iterative so depth never tracks list length.
    pub fn write_reverse<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let forward: Vec<&T> = self.iter().collect();
        for value in forward.iter().rev() {
            write!(out, "{value},")?;
        }
        Ok(())
    }

    /// Prints the forward rendering to stdout, followed by a newline.
    ///
    /// The empty list prints only the newline. The format is diagnostic
    /// output, not a stable serialization.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Prints the reverse rendering to stdout, followed by a newline.
    pub fn print_reverse(&self) {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_reverse(&mut out);
        println!("{out}");
    }
}

impl<T: fmt::Display, K: Index, S> fmt::Display for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_forward(f)
    }
}

impl<T: fmt::Debug, K: Index, S> fmt::Debug for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Value semantics
// =============================================================================

impl<T: Clone, K: Index, S> Clone for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    /// Deep-copies the chain node by node, in order.
    ///
    /// The copy owns fresh nodes; mutating it never affects the source.
    fn clone(&self) -> Self {
        let mut copy = Self::from_storage(S::default());
        copy.extend(self.iter().cloned());
        copy
    }

    /// Releases the destination's nodes, then copies the source chain.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T, K: Index, S> Extend<T> for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, K: Index, S> FromIterator<T> for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    /// Builds one node per element, preserving order.
    ///
    /// An empty input yields the empty list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, K: Index, S, const N: usize> From<[T; N]> for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K> + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq, K: Index, S> PartialEq for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Index, S> Eq for ForwardList<T, K, S> where S: Storage<Node<T, K>, Index = K> {}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T, K: Index, S> {
    nodes: &'a S,
    current: K,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, K: Index + 'a, S> Iterator for Iter<'a, T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        // Safety: list invariants guarantee current is valid
        let node = unsafe { self.nodes.get_unchecked(self.current) };
        self.current = node.next;

        Some(&node.data)
    }
}

/// Iterator over mutable references to list elements, front to back.
pub struct IterMut<'a, T, K: Index, S> {
    nodes: &'a mut S,
    current: K,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, K: Index + 'a, S> Iterator for IterMut<'a, T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        // Safety: list invariants guarantee current is valid
        let node = unsafe { self.nodes.get_unchecked_mut(self.current) };
        self.current = node.next;

        // Extend lifetime - safe because we visit each node exactly once
        Some(unsafe { &mut *((&mut node.data) as *mut T) })
    }
}

/// Owning iterator that removes and returns elements front to back.
pub struct IntoIter<T, K: Index, S>(ForwardList<T, K, S>)
where
    S: Storage<Node<T, K>, Index = K>;

impl<T, K: Index, S> Iterator for IntoIter<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T, K: Index, S> ExactSizeIterator for IntoIter<T, K, S> where
    S: Storage<Node<T, K>, Index = K>
{
}

impl<T, K: Index, S> IntoIterator for ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T, K: Index, S> IntoIterator for &'a ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, K: Index, S> IntoIterator for &'a mut ForwardList<T, K, S>
where
    S: Storage<Node<T, K>, Index = K>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: ForwardList<u64> = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn push_back_single() {
        let mut list: ForwardList<u64> = ForwardList::new();

        list.push_back(1);

        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn push_back_keeps_front() {
        let mut list: ForwardList<u64> = ForwardList::new();

        list.push_back(1);
        list.push_back(2);

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn push_front_multiple() {
        let mut list: ForwardList<u64> = ForwardList::new();

        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(collect(&list), vec![3, 2, 1]);
    }

    #[test]
    fn pop_front_in_order() {
        let mut list: ForwardList<u64> = [1, 2, 3].into();

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn pop_last_resets_tail() {
        let mut list: ForwardList<u64> = ForwardList::new();

        list.push_back(1);
        assert_eq!(list.pop_front(), Some(1));

        assert!(list.is_empty());
        assert!(list.back().is_none());

        // The tail is usable again, not stale
        list.push_back(2);
        list.push_back(3);
        assert_eq!(collect(&list), vec![2, 3]);
    }

    #[test]
    fn mixed_pushes_and_pops() {
        let mut list: ForwardList<u64> = ForwardList::new();

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.pop_front(), Some(1));
        list.push_front(0);

        // Net count: 4 pushes - 1 pop
        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec![0, 2, 3]);
    }

    #[test]
    fn push_with_constructs_at_insertion() {
        let mut list: ForwardList<String> = ForwardList::new();

        list.push_back_with(|| "b".to_string());
        list.push_front_with(|| "a".to_string());

        assert_eq!(collect(&list), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn with_len_defaults() {
        let list: ForwardList<u64> = ForwardList::with_len(4);
        assert_eq!(list.len(), 4);
        assert_eq!(collect(&list), vec![0, 0, 0, 0]);
    }

    #[test]
    fn with_len_zero_is_empty() {
        let list: ForwardList<u64> = ForwardList::with_len(0);
        assert!(list.is_empty());
        assert!(list.front().is_none());
    }

    #[test]
    fn from_empty_iterator_is_empty() {
        let list: ForwardList<u64> = std::iter::empty().collect();
        assert!(list.is_empty());
        assert!(list.back().is_none());
    }

    #[test]
    fn front_mut_and_back_mut() {
        let mut list: ForwardList<u64> = [1, 2].into();

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 20;

        assert_eq!(collect(&list), vec![10, 20]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: ForwardList<u64> = [1, 2, 3].into();

        list.clear();
        assert!(list.is_empty());
        assert!(list.front().is_none());
        assert!(list.back().is_none());

        list.push_back(4);
        assert_eq!(collect(&list), vec![4]);
    }

    #[test]
    fn clone_is_deep() {
        let original: ForwardList<u64> = [1, 2, 3].into();
        let mut copy = original.clone();

        assert_eq!(collect(&copy), vec![1, 2, 3]);

        *copy.front_mut().unwrap() = 99;
        copy.push_back(4);

        // Source untouched
        assert_eq!(collect(&original), vec![1, 2, 3]);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn clone_of_empty_is_empty() {
        let original: ForwardList<u64> = ForwardList::new();
        let copy = original.clone();
        assert!(copy.is_empty());
    }

    #[test]
    fn clone_from_releases_old_contents() {
        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Clone)]
        struct DropCounter(u64);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        let source: ForwardList<DropCounter> =
            [DropCounter(1), DropCounter(2)].into_iter().collect();
        let mut dest: ForwardList<DropCounter> = [DropCounter(3), DropCounter(4), DropCounter(5)]
            .into_iter()
            .collect();

        dest.clone_from(&source);

        // The destination's three old payloads were released
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
        assert_eq!(dest.len(), 2);
        let values: Vec<u64> = dest.iter().map(|c| c.0).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source: ForwardList<u64> = [1, 2, 3].into();

        let dest = std::mem::take(&mut source);

        assert!(source.is_empty());
        assert!(source.front().is_none());
        assert!(source.back().is_none());
        assert_eq!(collect(&dest), vec![1, 2, 3]);

        // Source is reusable after the move
        source.push_back(9);
        assert_eq!(collect(&source), vec![9]);
    }

    #[test]
    fn forward_rendering() {
        let list: ForwardList<u64> = [1, 2, 3].into();

        let mut out = String::new();
        list.write_forward(&mut out).unwrap();
        assert_eq!(out, "1,2,3,");

        assert_eq!(list.to_string(), "1,2,3,");
    }

    #[test]
    fn reverse_rendering() {
        let list: ForwardList<u64> = [1, 2, 3].into();

        let mut out = String::new();
        list.write_reverse(&mut out).unwrap();
        assert_eq!(out, "3,2,1,");
    }

    #[test]
    fn empty_rendering() {
        let list: ForwardList<u64> = ForwardList::new();

        assert_eq!(list.to_string(), "");

        let mut out = String::new();
        list.write_reverse(&mut out).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn reverse_rendering_deep_list() {
        // Large enough that a recursive implementation would risk the stack
        let list: ForwardList<u64> = (0..100_000).collect();

        let mut out = String::new();
        list.write_reverse(&mut out).unwrap();
        assert!(out.starts_with("99999,99998,"));
        assert!(out.ends_with("1,0,"));
    }

    #[test]
    fn debug_rendering() {
        let list: ForwardList<u64> = [1, 2, 3].into();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn equality() {
        let a: ForwardList<u64> = [1, 2, 3].into();
        let b: ForwardList<u64> = [1, 2, 3].into();
        let c: ForwardList<u64> = [1, 2].into();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ForwardList::<u64>::new(), ForwardList::new());
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list: ForwardList<u64> = [1, 2, 3].into();

        for value in list.iter_mut() {
            *value *= 10;
        }

        assert_eq!(collect(&list), vec![10, 20, 30]);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let list: ForwardList<u64> = [1, 2, 3].into();

        let iter = list.into_iter();
        assert_eq!(iter.len(), 3);

        let values: Vec<_> = iter.collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn drops_every_payload_exactly_once() {
        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut list: ForwardList<DropCounter> = ForwardList::new();
            for _ in 0..5 {
                list.push_back(DropCounter);
            }
            drop(list.pop_front());
            assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 1);
        }

        // The remaining four dropped with the list, none twice
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn panic_during_bulk_construction_leaks_nothing() {
        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        let result = std::panic::catch_unwind(|| {
            let _list: ForwardList<DropCounter> = (0..5)
                .map(|i| {
                    if i == 2 {
                        panic!("payload constructor failed");
                    }
                    DropCounter
                })
                .collect();
        });

        assert!(result.is_err());
        // The two payloads built before the failure were released
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn slots_are_recycled_across_pops() {
        let mut list: ForwardList<u64> = ForwardList::with_capacity(2);

        // Steady-state push/pop churn stays within the initial slots
        list.push_back(0);
        for i in 1..1000u64 {
            list.push_back(i);
            list.pop_front();
        }

        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&999));
    }

    #[test]
    fn usize_links() {
        let mut list: ForwardList<u64, usize> = ForwardList::new();

        list.push_back(1);
        list.push_front(0);

        assert_eq!(list.len(), 2);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![0, 1]);
    }

    #[cfg(feature = "slab")]
    mod slab_backend {
        use crate::list::{ForwardList, SlabNodes};

        #[test]
        fn push_pop_over_slab() {
            let mut list: ForwardList<u64, usize, SlabNodes<u64>> = ForwardList::new();

            list.push_back(1);
            list.push_back(2);
            list.push_front(0);

            assert_eq!(list.len(), 3);
            assert_eq!(list.pop_front(), Some(0));

            let values: Vec<_> = list.iter().copied().collect();
            assert_eq!(values, vec![1, 2]);
        }
    }
}
