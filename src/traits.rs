use std::fmt::Debug;
use std::hash::Hash;

/// An unsigned integer type usable as a partition index.
///
/// The same type counts elements and sets, so a `Partition<I>` holds at
/// most as many elements as the largest value of `I`.
///
/// The two conversions must be partial inverses:
///
/// -  For all `n: usize`, if `Self::from_usize(n)` = `Some(i)` then
///    `i.to_usize()` = `n`.
/// -  For all `i: Self`, `Self::from_usize(i.to_usize())` = `Some(i)`.
/// -  If `Self::from_usize(n)` = `None` then `Self::from_usize(m)` =
///    `None` for every `m > n`.
pub trait Index : Copy + Debug + Eq + Ord + Hash {
    /// Converts from `usize`, or `None` if `n` does not fit.
    fn from_usize(n: usize) -> Option<Self>;

    /// Converts to `usize`.
    fn to_usize(self) -> usize;
}

impl Index for usize {
    #[inline]
    fn from_usize(n: usize) -> Option<usize> { Some(n) }
    #[inline]
    fn to_usize(self) -> usize { self }
}

macro_rules! index_impl {
    ($type_:ident) => {
        impl Index for $type_ {
            #[inline]
            fn from_usize(n: usize) -> Option<Self> {
                use std::convert::TryFrom;
                $type_::try_from(n).ok()
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    }
}

index_impl!(u8);
index_impl!(u16);
index_impl!(u32);
// A `u64` must convert to `usize` without loss.
#[cfg(target_pointer_width = "64")]
index_impl!(u64);
