// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Basic and fancy slicing.
//!
//! Both kinds of slicing build a copy descriptor pairing every position of a
//! densely packed destination with a position of the (strided) source, then
//! walk it depth first: one level of recursion per axis, with a tight loop
//! over the innermost axis. A get copies source to destination, a set copies
//! destination to source. Nothing is allocated during the walk.

use crate::dimension::{self, default_strides};
use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::slice::{FancyIndex, Slice, SliceRange};
use crate::{Ix, NdArray};

/// Copy descriptor for a basic slice.
///
/// Axis `i` is visited `n[i]` times; each visit advances the source offset by
/// `incx[i]` and the destination offset by `incy[i]`.
#[derive(Clone, Debug)]
pub(crate) struct SlicePair {
    dim: usize,
    n: Vec<Ix>,
    ofsx: usize,
    incx: Vec<isize>,
    ofsy: usize,
    incy: Vec<isize>,
}

impl SlicePair {
    /// Pair the normalized `ranges` of a source with a fresh destination.
    pub(crate) fn new(strides: &[Ix], ranges: &[SliceRange]) -> Self {
        debug_assert_eq!(strides.len(), ranges.len());
        let n: Vec<Ix> = ranges.iter().map(|r| r.len).collect();
        let mut ofsx = 0;
        let mut incx = Vec::with_capacity(n.len());
        for (r, &s) in ranges.iter().zip(strides) {
            if r.len > 0 {
                ofsx += r.start * s;
            }
            incx.push(r.step * s as isize);
        }
        Self::with_source(n, ofsx, incx)
    }

    /// Read a source with the given per-axis strides, in row-major order of
    /// `shape`. Used for transposition (permuted strides) and broadcasting
    /// (zero strides).
    pub(crate) fn permuted(shape: &[Ix], strides: &[Ix]) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        let incx = strides.iter().map(|&s| s as isize).collect();
        Self::with_source(shape.to_vec(), 0, incx)
    }

    /// Pair two sources read in lockstep, in row-major order of `shape`;
    /// the second source takes the place of the destination.
    pub(crate) fn zipped(shape: &[Ix], strides_x: &[Ix], strides_y: &[Ix]) -> Self {
        debug_assert_eq!(shape.len(), strides_x.len());
        debug_assert_eq!(shape.len(), strides_y.len());
        SlicePair {
            dim: shape.len(),
            n: shape.to_vec(),
            ofsx: 0,
            incx: strides_x.iter().map(|&s| s as isize).collect(),
            ofsy: 0,
            incy: strides_y.iter().map(|&s| s as isize).collect(),
        }
    }

    fn with_source(n: Vec<Ix>, ofsx: usize, incx: Vec<isize>) -> Self {
        let incy = default_strides(&n).into_iter().map(|s| s as isize).collect();
        SlicePair {
            dim: n.len(),
            n,
            ofsx,
            incx,
            ofsy: 0,
            incy,
        }
    }

    /// The shape of the destination.
    #[inline]
    pub(crate) fn shape(&self) -> &[Ix] {
        &self.n
    }

    /// Call `f(source_offset, destination_offset)` for every element, in
    /// row-major order of the destination.
    pub(crate) fn for_each_offset<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        if self.n.contains(&0) {
            return;
        }
        if self.dim == 0 {
            f(self.ofsx, self.ofsy);
            return;
        }
        self.walk(0, self.ofsx as isize, self.ofsy as isize, &mut f);
    }

    fn walk<F>(&self, dep: usize, posx: isize, posy: isize, f: &mut F)
    where
        F: FnMut(usize, usize),
    {
        let (n, incx, incy) = (self.n[dep], self.incx[dep], self.incy[dep]);
        if dep + 1 == self.dim {
            let (mut x, mut y) = (posx, posy);
            for _ in 0..n {
                f(x as usize, y as usize);
                x += incx;
                y += incy;
            }
        } else {
            let (mut x, mut y) = (posx, posy);
            for _ in 0..n {
                self.walk(dep + 1, x, y, f);
                x += incx;
                y += incy;
            }
        }
    }
}

/// Source selection of one axis of a fancy slice.
#[derive(Copy, Clone, Debug)]
enum AxisSel {
    /// `ofs + i * inc`
    Range { ofs: usize, inc: isize },
    /// `indices[start..end]`, already multiplied by the axis stride
    List { start: usize, end: usize },
}

/// Copy descriptor for a fancy slice.
///
/// Index lists of all axes are flattened into one buffer; each list axis
/// holds its `(start, end)` pointers into it.
#[derive(Clone, Debug)]
pub(crate) struct FancyPair {
    dim: usize,
    n: Vec<Ix>,
    sel: Vec<AxisSel>,
    indices: Vec<usize>,
    incy: Vec<usize>,
}

impl FancyPair {
    pub(crate) fn new(shape: &[Ix], strides: &[Ix], info: &[FancyIndex]) -> Result<Self, ArrayError> {
        check_arity(info.len(), shape.len())?;
        let full = FancyIndex::Range(Slice::full());
        let mut n = Vec::with_capacity(shape.len());
        let mut sel = Vec::with_capacity(shape.len());
        let mut indices = Vec::new();
        for (axis, (&len, &stride)) in shape.iter().zip(strides).enumerate() {
            match info.get(axis).unwrap_or(&full) {
                FancyIndex::Range(slice) => {
                    let r = slice.normalize(len)?;
                    n.push(r.len);
                    sel.push(AxisSel::Range {
                        ofs: if r.len > 0 { r.start * stride } else { 0 },
                        inc: r.step * stride as isize,
                    });
                }
                FancyIndex::List(list) => {
                    let start = indices.len();
                    indices.extend(FancyIndex::normalize_list(list, len)?.map(|i| i * stride));
                    n.push(list.len());
                    sel.push(AxisSel::List {
                        start,
                        end: indices.len(),
                    });
                }
            }
        }
        let incy = default_strides(&n);
        Ok(FancyPair {
            dim: n.len(),
            n,
            sel,
            indices,
            incy,
        })
    }

    /// The shape of the destination.
    #[inline]
    pub(crate) fn shape(&self) -> &[Ix] {
        &self.n
    }

    /// Call `f(source_offset, destination_offset)` for every element, in
    /// row-major order of the destination.
    pub(crate) fn for_each_offset<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        if self.n.contains(&0) {
            return;
        }
        if self.dim == 0 {
            f(0, 0);
            return;
        }
        self.walk(0, 0, 0, &mut f);
    }

    fn walk<F>(&self, dep: usize, posx: usize, posy: usize, f: &mut F)
    where
        F: FnMut(usize, usize),
    {
        let last = dep + 1 == self.dim;
        let incy = self.incy[dep];
        match self.sel[dep] {
            AxisSel::Range { ofs, inc } => {
                let mut x = (posx + ofs) as isize;
                for i in 0..self.n[dep] {
                    let y = posy + i * incy;
                    if last {
                        f(x as usize, y);
                    } else {
                        self.walk(dep + 1, x as usize, y, f);
                    }
                    x += inc;
                }
            }
            AxisSel::List { start, end } => {
                for (i, &ofs) in self.indices[start..end].iter().enumerate() {
                    let y = posy + i * incy;
                    if last {
                        f(posx + ofs, y);
                    } else {
                        self.walk(dep + 1, posx + ofs, y, f);
                    }
                }
            }
        }
    }
}

fn check_arity(nspecs: usize, ndim: usize) -> Result<(), ArrayError> {
    if nspecs > ndim {
        Err(with_detail(
            ErrorKind::InvalidArgument,
            format_args!("{} slice arguments for an array of rank {}", nspecs, ndim),
        ))
    } else {
        Ok(())
    }
}

fn check_value_shape(expected: &[Ix], found: &[Ix]) -> Result<(), ArrayError> {
    if expected == found {
        Ok(())
    } else {
        Err(with_detail(
            ErrorKind::ShapeMismatch,
            format_args!("value of shape {:?} for a slice of shape {:?}", found, expected),
        ))
    }
}

/// # Slicing
impl<A> NdArray<A> {
    fn slice_pair(&self, info: &[Slice]) -> Result<SlicePair, ArrayError> {
        check_arity(info.len(), self.ndim())?;
        let full = Slice::full();
        let ranges = self
            .shape
            .iter()
            .enumerate()
            .map(|(axis, &len)| info.get(axis).unwrap_or(&full).normalize(len))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SlicePair::new(&self.strides, &ranges))
    }

    /// Return a copy of the elements selected by a basic slice.
    ///
    /// `info` holds one [`Slice`] per axis, starting from the first;
    /// trailing axes that are not mentioned are taken in full. The result
    /// keeps the rank of `self` and is densely packed; it never shares
    /// storage with `self`. Use the [`s!`](crate::s) macro to build `info`.
    ///
    /// **Errors** with `InvalidArgument` for a zero step, a step longer than
    /// its axis, or more slices than axes, and with `IndexOutOfBounds` for
    /// a bound outside of its axis.
    ///
    /// ```
    /// use ndstride::{s, ArrayF64, Slice};
    ///
    /// let a = ArrayF64::sequential([3, 4], 0., 1.).unwrap();
    /// let b = a.slice([Slice::new(0, 2, 1), Slice::new(1, 3, 1)]).unwrap();
    /// assert_eq!(b, ArrayF64::from_vec([3, 3], vec![1., 2., 3., 5., 6., 7., 9., 10., 11.]).unwrap());
    ///
    /// let last_row = a.slice(s![-1]).unwrap();
    /// assert_eq!(last_row.shape(), &[1, 4]);
    /// ```
    pub fn slice<I>(&self, info: I) -> Result<Self, ArrayError>
    where
        I: AsRef<[Slice]>,
        A: Clone,
    {
        let pair = self.slice_pair(info.as_ref())?;
        let mut out = Vec::with_capacity(dimension::size_of_shape(pair.shape()));
        pair.for_each_offset(|x, _| out.push(self.data[x].clone()));
        Ok(Self::from_parts_unchecked(pair.shape().to_vec(), out))
    }

    /// Write `values` into the elements selected by a basic slice.
    ///
    /// **Errors** like [`slice`](NdArray::slice), and with `ShapeMismatch`
    /// if `values` does not have the shape of the slice. Nothing is written
    /// when an error is returned.
    ///
    /// ```
    /// use ndstride::{s, ArrayF64};
    ///
    /// let mut a = ArrayF64::zeros([3, 3]).unwrap();
    /// let ones = ArrayF64::ones([3, 1]).unwrap();
    /// a.slice_set(s![.., 1], &ones).unwrap();
    /// assert_eq!(a.col(1).unwrap().as_slice(), &[1., 1., 1.]);
    /// assert!(a.slice_set(s![.., 1..], &ones).is_err());
    /// ```
    pub fn slice_set<I>(&mut self, info: I, values: &NdArray<A>) -> Result<(), ArrayError>
    where
        I: AsRef<[Slice]>,
        A: Clone,
    {
        let pair = self.slice_pair(info.as_ref())?;
        check_value_shape(pair.shape(), values.shape())?;
        let data = &mut self.data;
        pair.for_each_offset(|x, y| data[x] = values.data[y].clone());
        Ok(())
    }

    /// Write `value` into every element selected by a basic slice.
    pub fn slice_fill<I>(&mut self, info: I, value: A) -> Result<(), ArrayError>
    where
        I: AsRef<[Slice]>,
        A: Clone,
    {
        let pair = self.slice_pair(info.as_ref())?;
        let data = &mut self.data;
        pair.for_each_offset(|x, _| data[x] = value.clone());
        Ok(())
    }

    /// Return a copy of the elements selected by a fancy slice.
    ///
    /// Each axis is selected either by a range, exactly as in
    /// [`slice`](NdArray::slice), or by a list of indices, visited in the
    /// order given. Use the [`fancy!`](crate::fancy) macro to build `info`.
    ///
    /// **Errors** like [`slice`](NdArray::slice); a listed index outside of
    /// its axis is `IndexOutOfBounds`.
    ///
    /// ```
    /// use ndstride::{fancy, ArrayF32};
    ///
    /// let a = ArrayF32::sequential(10, 0., 1.).unwrap();
    /// let b = a.fancy_slice(fancy![[7, -1, 0]]).unwrap();
    /// assert_eq!(b.as_slice(), &[7., 9., 0.]);
    /// ```
    pub fn fancy_slice<I>(&self, info: I) -> Result<Self, ArrayError>
    where
        I: AsRef<[FancyIndex]>,
        A: Clone,
    {
        let pair = FancyPair::new(&self.shape, &self.strides, info.as_ref())?;
        let mut out = Vec::with_capacity(dimension::size_of_shape(pair.shape()));
        pair.for_each_offset(|x, _| out.push(self.data[x].clone()));
        Ok(Self::from_parts_unchecked(pair.shape().to_vec(), out))
    }

    /// Write `values` into the elements selected by a fancy slice.
    ///
    /// When an index is listed more than once, the last write wins.
    ///
    /// **Errors** like [`fancy_slice`](NdArray::fancy_slice), and with
    /// `ShapeMismatch` if `values` does not have the shape of the slice.
    pub fn fancy_slice_set<I>(&mut self, info: I, values: &NdArray<A>) -> Result<(), ArrayError>
    where
        I: AsRef<[FancyIndex]>,
        A: Clone,
    {
        let pair = FancyPair::new(&self.shape, &self.strides, info.as_ref())?;
        check_value_shape(pair.shape(), values.shape())?;
        let data = &mut self.data;
        pair.for_each_offset(|x, y| data[x] = values.data[y].clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fancy, s, ArrayF64};

    fn grid() -> ArrayF64 {
        ArrayF64::sequential([3, 4], 0., 1.).unwrap()
    }

    #[test]
    fn pair_offsets() {
        let ranges = [
            Slice::new(0, 2, 2).normalize(3).unwrap(),
            Slice::full().step_by(-1).normalize(4).unwrap(),
        ];
        let pair = SlicePair::new(&[4, 1], &ranges);
        assert_eq!(pair.shape(), &[2, 4]);
        let mut seen = Vec::new();
        pair.for_each_offset(|x, y| seen.push((x, y)));
        assert_eq!(
            seen,
            vec![(3, 0), (2, 1), (1, 2), (0, 3), (11, 4), (10, 5), (9, 6), (8, 7)]
        );
    }

    #[test]
    fn zero_dimensional() {
        let a = NdArray::scalar(2.0f64);
        assert_eq!(a.slice(Vec::<Slice>::new()).unwrap(), a);
        assert!(a.slice(s![0]).is_err());
        let pair = SlicePair::permuted(&[], &[]);
        let mut n = 0;
        pair.for_each_offset(|x, y| {
            assert_eq!((x, y), (0, 0));
            n += 1;
        });
        assert_eq!(n, 1);
    }

    #[test]
    fn trailing_axes_are_full() {
        let a = grid();
        let b = a.slice(s![1]).unwrap();
        assert_eq!(b.shape(), &[1, 4]);
        assert_eq!(b.as_slice(), &[4., 5., 6., 7.]);
    }

    #[test]
    fn empty_result() {
        let a = grid();
        let b = a.slice(s![2..2, ..]).unwrap();
        assert_eq!(b.shape(), &[0, 4]);
        assert!(b.is_empty());
        let c = a.slice([Slice::new(2, 0, 1)]).unwrap();
        assert_eq!(c.shape(), &[0, 4]);
    }

    #[test]
    fn too_many_slices() {
        let err = grid().slice(s![.., .., ..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = grid().fancy_slice(fancy![.., .., [0]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn set_checks_shape_before_writing() {
        let mut a = grid();
        let v = ArrayF64::zeros([2, 2]).unwrap();
        let err = a.slice_set(s![0..3, 0..2], &v).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(a, grid());
        a.slice_set(s![0..2, 2..], &v).unwrap();
        assert_eq!(a.row(0).unwrap().as_slice(), &[0., 1., 0., 0.]);
        assert_eq!(a.row(1).unwrap().as_slice(), &[4., 5., 0., 0.]);
    }

    #[test]
    fn fill() {
        let mut a = grid();
        a.slice_fill(s![.., ..;3], -1.).unwrap();
        assert_eq!(a.col(0).unwrap().as_slice(), &[-1., -1., -1.]);
        assert_eq!(a.col(3).unwrap().as_slice(), &[-1., -1., -1.]);
        assert_eq!(a.col(1).unwrap().as_slice(), &[1., 5., 9.]);
    }

    #[test]
    fn fancy_mixed() {
        let a = grid();
        let b = a.fancy_slice(fancy![[2, 0], 1..;2]).unwrap();
        assert_eq!(b.shape(), &[2, 2]);
        assert_eq!(b.as_slice(), &[9., 11., 1., 3.]);
        let c = a.fancy_slice(fancy![.., [3, 3, 0]]).unwrap();
        assert_eq!(c.row(1).unwrap().as_slice(), &[7., 7., 4.]);
    }

    #[test]
    fn fancy_empty_list() {
        let a = grid();
        let b = a.fancy_slice([FancyIndex::List(vec![])]).unwrap();
        assert_eq!(b.shape(), &[0, 4]);
    }

    #[test]
    fn fancy_set() {
        let mut a = grid();
        let v = ArrayF64::from_vec([2, 1], vec![100., 200.]).unwrap();
        a.fancy_slice_set(fancy![[0, 2], -1], &v).unwrap();
        assert_eq!(a.col(3).unwrap().as_slice(), &[100., 7., 200.]);
        let err = a.fancy_slice_set(fancy![[0, 5]], &v).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
    }
}
