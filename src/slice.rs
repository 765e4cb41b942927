// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::str::FromStr;

use num_integer::Integer;

use crate::dimension::abs_index;
use crate::error::{out_of_bounds, with_detail, ArrayError, ErrorKind};

/// A slice (range with step size) of one axis.
///
/// Negative `start` or `end` positions are counted from the back of the
/// axis. A missing `start` or `end` extends the slice to the edge of the
/// axis in the direction of travel: with a positive step the slice starts
/// at the first element and ends at the last, with a negative step it runs
/// backwards from the last element to the first.
///
/// `end` is inclusive when `inclusive` is set, and exclusive otherwise.
///
/// ## Examples
///
/// `Slice::new(0, 2, 1)` is the inclusive triple `[0, 2, 1]`: the elements
/// at 0, 1 and 2. It can also be created with `Slice::from(0..=2)`.
///
/// `Slice::from(..)` is the full range of an axis. The Python equivalent is
/// `[:]`.
///
/// `Slice::from(a..b).step_by(2)` is every second element from `a` until
/// `b` (exclusive). The Python equivalent is `[a:b:2]`.
///
/// `Slice::from(..).step_by(-1)` is every element in reverse order. The
/// Python equivalent is `[::-1]`.
///
/// `Slice::from(-1)` is the last element; the axis is kept, with length one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    /// start position; `None` for the edge of the axis
    pub start: Option<isize>,
    /// end position; `None` for the edge of the axis
    pub end: Option<isize>,
    /// step size; must be nonzero
    pub step: isize,
    /// whether `end` is included in the slice
    pub inclusive: bool,
}

impl Slice {
    /// Create the inclusive slice `[start, stop, step]`.
    ///
    /// `step` must be nonzero; this is checked when the slice is applied.
    pub fn new(start: isize, stop: isize, step: isize) -> Slice {
        Slice {
            start: Some(start),
            end: Some(stop),
            step,
            inclusive: true,
        }
    }

    /// The full range of an axis.
    pub fn full() -> Slice {
        Slice::from(..)
    }

    /// The single element at `index`, keeping the axis with length one.
    pub fn index(index: isize) -> Slice {
        Slice::new(index, index, 1)
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        Slice {
            step: self.step.saturating_mul(step),
            ..self
        }
    }

    /// Resolve the slice against an axis of length `len`.
    ///
    /// **Errors** with `InvalidArgument` if the step is zero or longer than
    /// the axis, and with `IndexOutOfBounds` if a bound lies outside of the
    /// axis.
    ///
    /// ```
    /// use ndstride::Slice;
    ///
    /// let r = Slice::new(-1, 0, -2).normalize(10).unwrap();
    /// assert_eq!((r.start, r.stop, r.len), (9, 0, 5));
    /// ```
    pub fn normalize(&self, len: usize) -> Result<SliceRange, ArrayError> {
        let n = len as isize;
        let step = self.step;
        if step == 0 {
            return Err(with_detail(ErrorKind::InvalidArgument, "slice step must be nonzero"));
        }
        if len > 0 && step.unsigned_abs() > len {
            return Err(with_detail(
                ErrorKind::InvalidArgument,
                format_args!("step {} for axis of length {}", step, len),
            ));
        }
        let start = match self.start {
            Some(s) => {
                let s_abs = if s < 0 { s + n } else { s };
                // an exclusive forward range may start one past the end, `n..n`
                let limit = if !self.inclusive && step > 0 { n + 1 } else { n };
                if s_abs < 0 || s_abs >= limit {
                    return Err(out_of_bounds(s, len));
                }
                s_abs
            }
            None if step > 0 => 0,
            None => n - 1,
        };
        let stop = match self.end {
            None if step > 0 => n - 1,
            None => 0,
            Some(e) => {
                let e_abs = if e < 0 { e + n } else { e };
                if self.inclusive {
                    if e_abs < 0 || e_abs >= n {
                        return Err(out_of_bounds(e, len));
                    }
                    e_abs
                } else {
                    if e_abs < 0 || e_abs > n {
                        return Err(out_of_bounds(e, len));
                    }
                    e_abs - step.signum()
                }
            }
        };
        let count = Integer::div_floor(&(stop - start), &step) + 1;
        if count <= 0 {
            return Ok(SliceRange {
                start: 0,
                stop,
                step,
                len: 0,
            });
        }
        Ok(SliceRange {
            start: start as usize,
            stop,
            step,
            len: count as usize,
        })
    }
}

/// A slice resolved against the length of its axis.
///
/// The selected positions are `start + i * step` for `i` in `0..len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliceRange {
    /// first position visited
    pub start: usize,
    /// inclusive stop position
    pub stop: isize,
    /// step size, nonzero
    pub step: isize,
    /// number of positions visited
    pub len: usize,
}

impl SliceRange {
    /// Iterate over the selected positions.
    pub fn positions(&self) -> impl Iterator<Item = usize> {
        let SliceRange { start, step, len, .. } = *self;
        (0..len).map(move |i| (start as isize + i as isize * step) as usize)
    }
}

macro_rules! impl_slice_from_index_type {
    ($index:ty) => {
        impl From<Range<$index>> for Slice {
            #[inline]
            fn from(r: Range<$index>) -> Slice {
                Slice {
                    start: Some(r.start as isize),
                    end: Some(r.end as isize),
                    step: 1,
                    inclusive: false,
                }
            }
        }

        impl From<RangeInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Slice {
                Slice::new(*r.start() as isize, *r.end() as isize, 1)
            }
        }

        impl From<RangeFrom<$index>> for Slice {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Slice {
                Slice {
                    start: Some(r.start as isize),
                    end: None,
                    step: 1,
                    inclusive: false,
                }
            }
        }

        impl From<RangeTo<$index>> for Slice {
            #[inline]
            fn from(r: RangeTo<$index>) -> Slice {
                Slice {
                    start: None,
                    end: Some(r.end as isize),
                    step: 1,
                    inclusive: false,
                }
            }
        }

        impl From<RangeToInclusive<$index>> for Slice {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> Slice {
                Slice {
                    start: None,
                    end: Some(r.end as isize),
                    step: 1,
                    inclusive: true,
                }
            }
        }

        impl From<$index> for Slice {
            #[inline]
            fn from(i: $index) -> Slice {
                Slice::index(i as isize)
            }
        }
    };
}

impl_slice_from_index_type!(isize);
impl_slice_from_index_type!(usize);
impl_slice_from_index_type!(i32);

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice {
            start: None,
            end: None,
            step: 1,
            inclusive: false,
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        f.write_str(if self.inclusive { "..=" } else { ".." })?;
        if let Some(end) = self.end {
            write!(f, "{}", end)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

/// An error returned when parsing a `Slice` from Python slice notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSliceError {
    input: String,
}

impl fmt::Display for ParseSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slice notation {:?}", self.input)
    }
}

impl Error for ParseSliceError {}

/// Parse Python slice notation: `a:b`, `a:b:c`, `::c`, `a:`, or a single
/// index `a`. The stop position is exclusive, as in Python.
///
/// ```
/// use ndstride::Slice;
///
/// let s: Slice = "1:5:2".parse().unwrap();
/// assert_eq!(s, Slice::from(1..5).step_by(2));
/// let r: Slice = "::-1".parse().unwrap();
/// assert_eq!(r, Slice::from(..).step_by(-1));
/// ```
impl FromStr for Slice {
    type Err = ParseSliceError;

    fn from_str(s: &str) -> Result<Slice, ParseSliceError> {
        let err = || ParseSliceError { input: s.to_string() };
        let parse_pos = |p: &str| -> Result<Option<isize>, ParseSliceError> {
            match p.trim() {
                "" => Ok(None),
                p => p.parse().map(Some).map_err(|_| err()),
            }
        };
        let mut sp = s.split(':');
        let fst = sp.next().ok_or_else(err)?;
        let snd = match sp.next() {
            None => {
                let i = parse_pos(fst)?.ok_or_else(err)?;
                return Ok(Slice::index(i));
            }
            Some(snd) => snd,
        };
        let step = match sp.next() {
            None => 1,
            Some(st) => parse_pos(st)?.unwrap_or(1),
        };
        if sp.next().is_some() || step == 0 {
            return Err(err());
        }
        Ok(Slice {
            start: parse_pos(fst)?,
            end: parse_pos(snd)?,
            step,
            inclusive: false,
        })
    }
}

/// The selection of one axis in a fancy slice: a range or a list of
/// indices.
///
/// ## Examples
///
/// `FancyIndex::from(vec![0, 3, 7])` selects the positions 0, 3 and 7, in
/// that order. Positions may repeat and need not be sorted.
///
/// `FancyIndex::from(1..10).step_by(2)` is every second element from 1 until
/// 10 (exclusive), exactly as the corresponding [`Slice`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FancyIndex {
    /// A range with step size.
    Range(Slice),
    /// A list of indices; negative indices count from the back of the axis.
    List(Vec<isize>),
}

impl FancyIndex {
    /// Returns `true` if `self` is a `List` value.
    pub fn is_list(&self) -> bool {
        matches!(*self, FancyIndex::List(_))
    }

    /// Returns a new `FancyIndex` with the given step size (multiplied with
    /// the previous step size). Index lists are returned unchanged.
    #[inline]
    pub fn step_by(self, step: isize) -> Self {
        match self {
            FancyIndex::Range(s) => FancyIndex::Range(s.step_by(step)),
            list => list,
        }
    }

    /// Resolve every index of the list against an axis of length `len`.
    pub(crate) fn normalize_list(list: &[isize], len: usize) -> Result<impl Iterator<Item = usize> + '_, ArrayError> {
        for &i in list {
            abs_index(len, i)?;
        }
        Ok(list
            .iter()
            .map(move |&i| if i < 0 { (i + len as isize) as usize } else { i as usize }))
    }
}

macro_rules! impl_fancyindex_from_range {
    ($($ty:ty),*) => {
        $(
        impl From<$ty> for FancyIndex {
            #[inline]
            fn from(r: $ty) -> FancyIndex {
                FancyIndex::Range(Slice::from(r))
            }
        }
        )*
    };
}

impl_fancyindex_from_range!(Slice, RangeFull);

macro_rules! impl_fancyindex_from_index_type {
    ($index:ty) => {
        impl_fancyindex_from_range!(
            $index,
            Range<$index>,
            RangeInclusive<$index>,
            RangeFrom<$index>,
            RangeTo<$index>,
            RangeToInclusive<$index>
        );
    };
}

impl_fancyindex_from_index_type!(isize);
impl_fancyindex_from_index_type!(usize);
impl_fancyindex_from_index_type!(i32);

macro_rules! impl_fancyindex_from_list {
    ($index:ty) => {
        impl From<Vec<$index>> for FancyIndex {
            fn from(v: Vec<$index>) -> FancyIndex {
                FancyIndex::List(v.into_iter().map(|i| i as isize).collect())
            }
        }

        impl<'a> From<&'a [$index]> for FancyIndex {
            fn from(v: &'a [$index]) -> FancyIndex {
                FancyIndex::List(v.iter().map(|&i| i as isize).collect())
            }
        }

        impl<const N: usize> From<[$index; N]> for FancyIndex {
            fn from(v: [$index; N]) -> FancyIndex {
                FancyIndex::List(v.iter().map(|&i| i as isize).collect())
            }
        }
    };
}

impl_fancyindex_from_list!(isize);
impl_fancyindex_from_list!(usize);
impl_fancyindex_from_list!(i32);

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/slices/indices, separated by comma, with
/// optional step sizes that are separated from the range by a semicolon. It
/// is converted into an array of [`Slice`], one per axis, starting from the
/// first axis. Trailing axes that are not mentioned are taken in full.
///
/// Each range/slice/index uses signed indices, where a negative value is
/// counted from the end of the axis. Step sizes are also signed and may be
/// negative, but must not be zero.
///
/// - *range*: a range with step size 1; `a..b` excludes `b`, `a..=b`
///   includes it.
/// - *range* `;` *step*: a range with step size *step*.
/// - *index*: a single element; the axis is kept with length one.
///
/// ```
/// use ndstride::{s, ArrayF64};
///
/// let a = ArrayF64::sequential([3, 4], 0., 1.).unwrap();
///
/// // rows 0 to 2 and columns 1 to 3, both inclusive
/// let b = a.slice(s![0..=2, 1..=3]).unwrap();
/// assert_eq!(b.shape(), &[3, 3]);
///
/// // every second column, backwards
/// let c = a.slice(s![.., ..;-2]).unwrap();
/// assert_eq!(c.row(0).unwrap().as_slice(), &[3., 1.]);
/// ```
#[macro_export]
macro_rules! s(
    (@elem $r:expr ; $s:expr) => {
        $crate::Slice::from($r).step_by($s as isize)
    };
    (@elem $r:expr) => {
        $crate::Slice::from($r)
    };
    ($($r:expr $(; $s:expr)?),* $(,)?) => {
        [$($crate::s!(@elem $r $(; $s)?)),*]
    };
);

/// Fancy slice argument constructor.
///
/// Like [`s!`], but each axis may also be an index list, given as an array,
/// a `Vec` or a slice of integers. The result is an array of
/// [`FancyIndex`].
///
/// ```
/// use ndstride::{fancy, ArrayF64};
///
/// let a = ArrayF64::sequential([10, 10], 0., 1.).unwrap();
/// let b = a.fancy_slice(fancy![[0, 3, 7], 1..10;2]).unwrap();
/// assert_eq!(b.shape(), &[3, 5]);
/// assert_eq!(b.row(1).unwrap().as_slice(), &[31., 33., 35., 37., 39.]);
/// ```
#[macro_export]
macro_rules! fancy(
    (@elem $r:expr ; $s:expr) => {
        $crate::FancyIndex::from($r).step_by($s as isize)
    };
    (@elem $r:expr) => {
        $crate::FancyIndex::from($r)
    };
    ($($r:expr $(; $s:expr)?),* $(,)?) => {
        [$($crate::fancy!(@elem $r $(; $s)?)),*]
    };
);
