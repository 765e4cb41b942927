// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, IndexMut};
use std::slice;

use crate::dimension::{self, IntoShape};
use crate::error::{out_of_bounds, with_detail, ArrayError, ErrorKind};
use crate::slicing::SlicePair;
use crate::utils;
use crate::{ElementKind, Ix, Ixs, NdArray, NdElement};

/// An iterator over the elements of an array, in row-major order.
///
/// Iterator element type is `&'a A`.
pub type Iter<'a, A> = slice::Iter<'a, A>;

/// A mutable iterator over the elements of an array, in row-major order.
///
/// Iterator element type is `&'a mut A`.
pub type IterMut<'a, A> = slice::IterMut<'a, A>;

/// # Methods For All Arrays
impl<A> NdArray<A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Return the shape of the array as a slice.
    pub fn shape(&self) -> &[Ix] {
        &self.shape
    }

    /// Return the strides of the array as a slice.
    ///
    /// The strides are the row-major strides of the shape, counted in
    /// elements.
    pub fn strides(&self) -> &[Ix] {
        &self.strides
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: usize) -> usize {
        self.shape[axis]
    }

    /// Return the elements as a slice, in row-major order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the elements as a mutable slice, in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Return a pointer to the first element in the array.
    pub fn as_ptr(&self) -> *const A {
        self.data.as_ptr()
    }

    /// Return an iterator of references to the elements of the array.
    ///
    /// Elements are visited in row-major order (last axis fastest).
    pub fn iter(&self) -> Iter<'_, A> {
        self.data.iter()
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in row-major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        self.data.iter_mut()
    }

    /// Return the element at `index`, negative indices counting from the back
    /// of their axis.
    ///
    /// **Errors** with `InvalidArgument` if the number of indices is not the
    /// rank, and with `IndexOutOfBounds` if an index is outside its axis.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::sequential([3, 4], 0., 1.).unwrap();
    /// assert_eq!(a.get(&[1, 2]).unwrap(), 6.);
    /// assert_eq!(a.get(&[-1, -1]).unwrap(), 11.);
    /// assert!(a.get(&[3, 0]).is_err());
    /// ```
    pub fn get(&self, index: &[Ixs]) -> Result<A, ArrayError>
    where
        A: Clone,
    {
        let offset = dimension::offset_of(&self.shape, &self.strides, index)?;
        Ok(self.data[offset].clone())
    }

    /// Set the element at `index` to `value`.
    ///
    /// Same index rules and errors as [`get`](NdArray::get).
    pub fn set(&mut self, index: &[Ixs], value: A) -> Result<(), ArrayError> {
        let offset = dimension::offset_of(&self.shape, &self.strides, index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Return a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: &[Ixs]) -> Result<&mut A, ArrayError> {
        let offset = dimension::offset_of(&self.shape, &self.strides, index)?;
        Ok(&mut self.data[offset])
    }

    /// Return the element at row-major position `i` of the buffer.
    ///
    /// A negative `i` counts from the back.
    pub fn get_flat(&self, i: Ixs) -> Result<A, ArrayError>
    where
        A: Clone,
    {
        let i = dimension::abs_index(self.len(), i)?;
        Ok(self.data[i].clone())
    }

    /// Set the element at row-major position `i` of the buffer.
    pub fn set_flat(&mut self, i: Ixs, value: A) -> Result<(), ArrayError> {
        let i = dimension::abs_index(self.len(), i)?;
        self.data[i] = value;
        Ok(())
    }

    /// Set all elements to `x`.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        for elt in &mut self.data {
            *elt = x.clone();
        }
    }

    /// Return a copy of the array with the new shape `shape`.
    ///
    /// Elements keep their row-major order. The result never shares storage
    /// with `self`; see [`into_shape`](NdArray::into_shape) to reuse the
    /// buffer instead.
    ///
    /// **Errors** with `DimensionMismatch` if the shapes do not have the same
    /// number of elements, and with `InvalidShape` for a negative dimension.
    ///
    /// ```
    /// use ndstride::ArrayF32;
    ///
    /// let a = ArrayF32::sequential([2, 3], 0., 1.).unwrap();
    /// let b = a.reshape([3, 2]).unwrap();
    /// assert_eq!(b.shape(), &[3, 2]);
    /// assert_eq!(a.as_slice(), b.as_slice());
    /// assert!(a.reshape([4, 2]).is_err());
    /// ```
    pub fn reshape<Sh>(&self, shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone,
    {
        self.clone().into_shape(shape)
    }

    /// Change the shape of the array, reusing its buffer.
    ///
    /// The array is consumed, so the buffer is never shared.
    pub fn into_shape<Sh>(self, shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape()?;
        dimension::check_same_size(&self.shape, &shape)?;
        Ok(Self::from_parts_unchecked(shape, self.data))
    }

    /// Return the elements as a one-dimensional array.
    pub fn flatten(&self) -> Self
    where
        A: Clone,
    {
        Self::from_vec1(self.data.clone())
    }

    /// Remove all axes of length one.
    pub fn squeeze(&self) -> Self
    where
        A: Clone,
    {
        let shape = utils::filter(&self.shape, |&d| d != 1);
        Self::from_parts_unchecked(shape, self.data.clone())
    }

    /// Remove the given axes, which must all have length one.
    ///
    /// **Errors** with `InvalidArgument` if an axis is out of bounds or does
    /// not have length one.
    pub fn squeeze_axes(&self, axes: &[usize]) -> Result<Self, ArrayError>
    where
        A: Clone,
    {
        for &axis in axes {
            dimension::check_axis(axis, self.ndim())?;
            if self.shape[axis] != 1 {
                return Err(with_detail(
                    ErrorKind::InvalidArgument,
                    format_args!("axis {} has length {}", axis, self.shape[axis]),
                ));
            }
        }
        let all = (0..self.ndim()).collect::<Vec<_>>();
        let keep = utils::complement(&all, axes);
        let shape = keep.iter().map(|&i| self.shape[i]).collect();
        Ok(Self::from_parts_unchecked(shape, self.data.clone()))
    }

    /// Prepend axes of length one until the array has rank `ndim`.
    ///
    /// An array that already has rank `ndim` or more is returned unchanged.
    pub fn expand(&self, ndim: usize) -> Self
    where
        A: Clone,
    {
        if ndim <= self.ndim() {
            return self.clone();
        }
        let shape = utils::resize(&self.shape, ndim, 1, true);
        Self::from_parts_unchecked(shape, self.data.clone())
    }

    /// Permute the axes of the array.
    ///
    /// Axis `i` of the result is axis `axes[i]` of `self`. With `None`, the
    /// axes are reversed.
    ///
    /// **Errors** with `InvalidArgument` if `axes` is not a permutation of
    /// the axes of the array.
    pub fn transpose(&self, axes: Option<&[usize]>) -> Result<Self, ArrayError>
    where
        A: Clone,
    {
        let perm = match axes {
            Some(axes) => axes.to_vec(),
            None => (0..self.ndim()).rev().collect(),
        };
        let shape = utils::permute(&self.shape, &perm)?;
        let strides = utils::permute(&self.strides, &perm)?;
        let mut out = Vec::with_capacity(self.len());
        let pair = SlicePair::permuted(&shape, &strides);
        pair.for_each_offset(|x, _| out.push(self.data[x].clone()));
        Ok(Self::from_parts_unchecked(shape, out))
    }

    /// Call `f` by reference on each element and create a new array
    /// with the new values.
    ///
    /// Elements are visited in row-major order, and the return array has
    /// the same shape as `self`.
    pub fn map<'a, B, F>(&'a self, f: F) -> NdArray<B>
    where
        F: FnMut(&'a A) -> B,
        A: 'a,
    {
        NdArray::from_parts_unchecked(self.shape.clone(), self.data.iter().map(f).collect())
    }

    /// Call `f` with the row-major position and a reference to each
    /// element, and create a new array with the new values.
    pub fn mapi<B, F>(&self, mut f: F) -> NdArray<B>
    where
        F: FnMut(usize, &A) -> B,
    {
        let v = self.data.iter().enumerate().map(|(i, x)| f(i, x)).collect();
        NdArray::from_parts_unchecked(self.shape.clone(), v)
    }

    /// Modify the array in place by calling `f` by mutable reference on
    /// each element.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.data.iter_mut().for_each(f);
    }

    /// Fold over the elements in row-major order.
    pub fn fold<'a, F, B>(&'a self, init: B, f: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
        A: 'a,
    {
        self.data.iter().fold(init, f)
    }

    /// Return the buffer, the shape and the element kind of the array.
    ///
    /// This is the representation exchanged with external collaborators,
    /// for example a linear algebra backend or a persistence layer.
    pub fn into_raw_parts(self) -> (Vec<A>, Vec<usize>, ElementKind)
    where
        A: NdElement,
    {
        (self.data, self.shape, A::KIND)
    }

    /// Return the element kind of the array.
    pub fn kind(&self) -> ElementKind
    where
        A: NdElement,
    {
        A::KIND
    }
}

impl<A, const N: usize> Index<[Ix; N]> for NdArray<A> {
    type Output = A;

    /// Access the element at **index**.
    ///
    /// **Panics** if index is out of bounds or does not have one entry per
    /// axis.
    #[inline]
    fn index(&self, index: [Ix; N]) -> &A {
        &self[&index[..]]
    }
}

impl<A, const N: usize> IndexMut<[Ix; N]> for NdArray<A> {
    /// Access the element at **index** mutably.
    ///
    /// **Panics** if index is out of bounds or does not have one entry per
    /// axis.
    #[inline]
    fn index_mut(&mut self, index: [Ix; N]) -> &mut A {
        &mut self[&index[..]]
    }
}

impl<'a, A> Index<&'a [Ix]> for NdArray<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: &'a [Ix]) -> &A {
        match self.unsigned_offset(index) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("ndstride: {}", e),
        }
    }
}

impl<'a, A> IndexMut<&'a [Ix]> for NdArray<A> {
    #[inline]
    fn index_mut(&mut self, index: &'a [Ix]) -> &mut A {
        match self.unsigned_offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("ndstride: {}", e),
        }
    }
}

impl<A> NdArray<A> {
    fn unsigned_offset(&self, index: &[Ix]) -> Result<usize, ArrayError> {
        if index.len() != self.ndim() {
            return Err(with_detail(
                ErrorKind::InvalidArgument,
                format_args!("{} indices for an array of rank {}", index.len(), self.ndim()),
            ));
        }
        let mut offset = 0;
        for ((&i, &d), &s) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= d {
                return Err(out_of_bounds(i as isize, d));
            }
            offset += i * s;
        }
        Ok(offset)
    }
}

impl<'a, A> IntoIterator for &'a NdArray<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut NdArray<A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A> IntoIterator for NdArray<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, NdArray};

    #[test]
    fn index_operator() {
        let mut a = NdArray::sequential([2, 3], 0.0f64, 1.).unwrap();
        assert_eq!(a[[1, 2]], 5.);
        a[[0, 1]] = 10.;
        assert_eq!(a.get(&[0, 1]).unwrap(), 10.);
        assert_eq!(a[&[1, 0][..]], 3.);
    }

    #[test]
    #[should_panic]
    fn index_operator_out_of_bounds() {
        let a = NdArray::<f32>::zeros([2, 3]).unwrap();
        let _ = a[[2, 0]];
    }

    #[test]
    fn get_set_errors() {
        let mut a = NdArray::<f64>::zeros([2, 3]).unwrap();
        assert_eq!(a.get(&[0]).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.get(&[0, 3]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        assert_eq!(a.get(&[-3, 0]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        a.set(&[-1, -1], 7.).unwrap();
        assert_eq!(a.get_flat(5).unwrap(), 7.);
        a.set_flat(-6, 1.).unwrap();
        assert_eq!(a.get(&[0, 0]).unwrap(), 1.);
        assert!(a.set_flat(6, 0.).is_err());
        *a.get_mut(&[1, 0]).unwrap() = 4.;
        assert_eq!(a[[1, 0]], 4.);
    }

    #[test]
    fn squeeze_and_expand() {
        let a = NdArray::<f32>::zeros([1, 3, 1, 2]).unwrap();
        assert_eq!(a.squeeze().shape(), &[3, 2]);
        assert_eq!(a.squeeze_axes(&[2]).unwrap().shape(), &[1, 3, 2]);
        assert!(a.squeeze_axes(&[1]).is_err());
        assert!(a.squeeze_axes(&[4]).is_err());
        let b = NdArray::<f32>::zeros([3]).unwrap();
        assert_eq!(b.expand(3).shape(), &[1, 1, 3]);
        assert_eq!(b.expand(1).shape(), &[3]);
    }

    #[test]
    fn transpose() {
        let a = NdArray::sequential([2, 3], 0.0f64, 1.).unwrap();
        let t = a.transpose(None).unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t.as_slice(), &[0., 3., 1., 4., 2., 5.]);
        let b = NdArray::sequential([2, 3, 4], 0.0f32, 1.).unwrap();
        let p = b.transpose(Some(&[1, 2, 0])).unwrap();
        assert_eq!(p.shape(), &[3, 4, 2]);
        assert_eq!(p[[2, 1, 1]], b[[1, 2, 1]]);
        assert!(b.transpose(Some(&[0, 1])).is_err());
    }

    #[test]
    fn map_fold() {
        let a = NdArray::sequential([2, 2], 1.0f64, 1.).unwrap();
        assert_eq!(a.map(|x| x * 2.).as_slice(), &[2., 4., 6., 8.]);
        assert_eq!(a.mapi(|i, &x| i as f64 + x).as_slice(), &[1., 3., 5., 7.]);
        assert_eq!(a.fold(0., |acc, &x| acc + x), 10.);
        let mut b = a.clone();
        b.map_inplace(|x| *x = -*x);
        assert_eq!(b.as_slice(), &[-1., -2., -3., -4.]);
        b.fill(0.5);
        assert!(b.iter().all(|&x| x == 0.5));
    }
}
