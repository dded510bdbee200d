//! Sentinel-based index trait for node links.
//!
//! Links between nodes are plain unsigned integers with a reserved sentinel
//! (`MAX`) standing in for "no node". Compared to `Option<Idx>` this keeps
//! nodes at their minimum size and makes the empty link a single comparison.

/// A copyable index type with a sentinel "none" value.
///
/// Used for node links and for the list's head/tail. The sentinel takes the
/// place of a null pointer; it is never a valid storage slot.
///
/// # Example
///
/// ```
/// use forward_list::Index;
///
/// let link: u32 = 5;
/// assert!(link.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no node" / null.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize`, for slot addressing.
    fn as_usize(self) -> usize;

    /// Creates an index from a slot position.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u8, u16, u32, u64, usize);
