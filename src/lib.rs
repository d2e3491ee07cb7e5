#![doc(html_root_url = "https://docs.rs/partition/0.1.0")]
//! A disjoint-set partition of small integer indices.
//!
//! [`Partition`](struct.Partition.html) splits the elements `0 .. n`
//! into disjoint sets. It merges sets by rank and compresses paths on
//! [`find_compress`](struct.Partition.html#method.find_compress), so a
//! sequence of operations takes nearly constant amortized time each.
//! Sets and elements can be relabeled contiguously for use as indices
//! elsewhere.
//!
//! The index type is any [`Index`](trait.Index.html): `u8`, `u16`,
//! `u32` or `usize` (the default), and `u64` on 64-bit targets. Element indices are checked;
//! an index past the end is a
//! [`PartitionError`](enum.PartitionError.html), never a panic.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! partition = "0.1.0"
//! ```
//!
//! # Examples
//!
//! Connected regions of a binary image:
//!
//! ```
//! use partition::Partition;
//!
//! let image = [
//!     [1, 1, 0, 0],
//!     [0, 1, 0, 1],
//!     [0, 0, 0, 1],
//! ];
//! let height = image.len();
//! let width = image[0].len();
//! let pixel = |y: usize, x: usize| (y * width + x) as u32;
//!
//! let mut regions = Partition::<u32>::new((height * width) as u32);
//!
//! for y in 0 .. height {
//!     for x in 0 .. width {
//!         if x + 1 < width && image[y][x] == image[y][x + 1] {
//!             regions.merge(pixel(y, x), pixel(y, x + 1))?;
//!         }
//!         if y + 1 < height && image[y][x] == image[y + 1][x] {
//!             regions.merge(pixel(y, x), pixel(y + 1, x))?;
//!         }
//!     }
//! }
//!
//! assert_eq!(3, regions.number_of_sets());
//!
//! let labels = regions.element_labeling();
//! assert_eq!(labels[0], labels[5]);
//! assert_eq!(labels[3], labels[8]);
//! assert_eq!(labels[7], labels[11]);
//! assert_ne!(labels[0], labels[3]);
//! assert_ne!(labels[3], labels[7]);
//! # Ok::<(), partition::PartitionError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod partition;
mod traits;

pub use crate::error::*;
pub use crate::partition::*;
pub use crate::traits::*;
