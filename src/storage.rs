//! Slot storage for list nodes.
//!
//! Nodes live in slab-like storage and refer to each other by index, not by
//! pointer. The storage hands out a stable index on insert; the index stays
//! valid until that exact slot is removed, and removed slots are recycled by
//! later inserts.
//!
//! [`Arena`] is the built-in backend: a growable `Vec` of slots threaded
//! with a vacant-slot free list. The `slab` cargo feature additionally
//! implements [`Storage`] for `slab::Slab`.

use std::marker::PhantomData;
use std::mem;

use crate::Index;

/// Slab-like storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations (amortized for growable backends)
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`Arena<T, K>`] - growable, free-list slot reuse (in this crate)
/// - `slab::Slab<T>` - growable, `usize` indices (feature `slab`)
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    ///
    /// # Panics
    ///
    /// Panics if the number of live values would exceed the index type's
    /// sentinel (`Index::NONE` is reserved and never a valid slot).
    fn insert(&mut self, value: T) -> Self::Index;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked(&self, index: Self::Index) -> &T;

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T;

    /// Removes all values, dropping each exactly once.
    fn clear(&mut self);

    /// Returns the number of live values.
    fn len(&self) -> usize;

    /// Returns `true` if no values are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Arena - growable slot storage with free-list reuse
// =============================================================================

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: usize },
}

/// Growable slot storage with free-list slot reuse.
///
/// Each insert takes one slot; each remove vacates exactly one slot and
/// pushes it onto the free list, so alloc/release are paired 1:1 per value.
/// Vacant slots are reused LIFO before the backing `Vec` grows.
///
/// # Example
///
/// ```
/// use forward_list::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::new();
///
/// let idx = arena.insert(42);
/// assert_eq!(arena.get(idx), Some(&42));
///
/// assert_eq!(arena.remove(idx), Some(42));
/// assert_eq!(arena.get(idx), None);
/// ```
#[derive(Debug)]
pub struct Arena<T, K: Index = u32> {
    slots: Vec<Slot<T>>,
    /// Head of the vacant-slot free list; `slots.len()` when none are vacant.
    next_free: usize,
    len: usize,
    _marker: PhantomData<K>,
}

impl<T, K: Index> Arena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty arena with room for `capacity` values before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of slots available without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T, K: Index> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Index> Storage<T> for Arena<T, K> {
    type Index = K;

    #[inline]
    fn insert(&mut self, value: T) -> K {
        let slot = self.next_free;
        assert!(
            slot < K::NONE.as_usize(),
            "arena exhausted the index space of its link type"
        );

        if slot == self.slots.len() {
            self.slots.push(Slot::Occupied(value));
            self.next_free = self.slots.len();
        } else {
            match mem::replace(&mut self.slots[slot], Slot::Occupied(value)) {
                Slot::Vacant { next_free } => self.next_free = next_free,
                Slot::Occupied(_) => unreachable!("free list pointed at an occupied slot"),
            }
        }

        self.len += 1;
        K::from_usize(slot)
    }

    #[inline]
    fn remove(&mut self, index: K) -> Option<T> {
        let i = index.as_usize();
        let slot = self.slots.get_mut(i)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let old = mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.next_free,
            },
        );
        self.next_free = i;
        self.len -= 1;

        match old {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, index: K) -> Option<&T> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: K) -> Option<&mut T> {
        match self.slots.get_mut(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: K) -> &T {
        unsafe { self.get(index).unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: K) -> &mut T {
        unsafe { self.get_mut(index).unwrap_unchecked() }
    }

    #[inline]
    fn clear(&mut self) {
        // Dropping the slots drops every occupied payload exactly once.
        self.slots.clear();
        self.next_free = 0;
        self.len = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.get(index).unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.get_mut(index).unwrap_unchecked() }
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}
