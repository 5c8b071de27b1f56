//! # weakform-unroll
//!
//! Bounded-depth compile-time iteration.
//!
//! [`StaticFor`] runs an operation once per index of a const-generic range,
//! strictly ascending. Ranges longer than the chunk width are partitioned
//! into at most `WIDTH` contiguous sub-ranges of nearly equal size, and the
//! partitioning recurses per sub-range. Call depth therefore grows as
//! `O(log_WIDTH N)` rather than `O(N)`, which keeps both the optimizer's
//! inlining tree and the call stack shallow for large trip counts.
//!
//! Range bounds and the width are const generics, checked in `const`
//! context: an inverted range or a zero width fails the build of the
//! offending instantiation, never at runtime.
//!
//! ```
//! use weakform_unroll::StaticFor;
//!
//! let mut squares = Vec::new();
//! StaticFor::<0, 5>::run(|i| squares.push(i * i));
//! assert_eq!(squares, [0, 1, 4, 9, 16]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Default number of sub-ranges a long range is partitioned into.
pub const DEFAULT_CHUNK_WIDTH: usize = 70;

/// Compile-time iteration over `FIRST..LAST` with chunk width `WIDTH`.
///
/// The operation is invoked exactly once per index, in ascending order,
/// for any width; the width only affects the shape of the generated call
/// tree. Shared state across invocations lives in the closure's captures.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticFor<const FIRST: usize, const LAST: usize, const WIDTH: usize = 70>;

impl<const FIRST: usize, const LAST: usize, const WIDTH: usize> StaticFor<FIRST, LAST, WIDTH> {
    /// Runs `op` for every index of `FIRST..LAST`, ascending.
    ///
    /// An inverted range (`FIRST > LAST`) or `WIDTH == 0` is rejected at
    /// build time when the instantiation is reached.
    pub fn run<F: FnMut(usize)>(mut op: F) {
        const {
            assert!(FIRST <= LAST, "inverted range: FIRST must not exceed LAST");
            assert!(WIDTH >= 1, "chunk width must be at least one");
        }
        chunked(FIRST, LAST, WIDTH, &mut op);
    }
}

/// Runs `op` for every index of `0..N` with the default chunk width.
pub fn static_for<const N: usize, F: FnMut(usize)>(op: F) {
    StaticFor::<0, N>::run(op);
}

/// One node of the chunk tree.
///
/// A range of length at most `width` runs flat; a longer one is split into
/// at most `width` sub-ranges of stride `ceil(len / width)`, the last one
/// shorter by the remainder, visited left to right. Width 1 also runs flat:
/// a single sub-range would cover the whole range and never shrink.
fn chunked<F: FnMut(usize)>(first: usize, last: usize, width: usize, op: &mut F) {
    let len = last - first;
    if len <= width || width < 2 {
        for i in first..last {
            op(i);
        }
    } else {
        let stride = len.div_ceil(width);
        let mut start = first;
        while start < last {
            let end = usize::min(start.saturating_add(stride), last);
            chunked(start, end, width, op);
            start = end;
        }
    }
}

/// Depth of the chunk tree for a range of length `len` and the given width.
///
/// This is the recursion depth [`StaticFor::run`] reaches: 1 for ranges
/// that run flat (any range when `width <= 1`), one more per partitioning
/// level above that.
#[must_use]
pub const fn recursion_depth(len: usize, width: usize) -> usize {
    if len <= width || width < 2 {
        1
    } else {
        1 + recursion_depth(len.div_ceil(width), width)
    }
}
