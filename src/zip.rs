// Copyright 2017 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Broadcasting and lock step traversal of two arrays.

use crate::dimension::{broadcast_strides, co_broadcast, size_of_shape};
use crate::error::ArrayError;
use crate::slicing::SlicePair;
use crate::{IntoShape, Ix, NdArray};

/// Calculate the common shape two arrays broadcast to.
///
/// Shapes are aligned from their trailing axes. Axes must either be equal,
/// or one of them must have length 1, which stretches to the other length.
///
/// **Errors** with `DimensionMismatch` if the shapes are not compatible.
///
/// ```
/// use ndstride::broadcast_shape;
///
/// assert_eq!(broadcast_shape(&[4, 1, 3], &[5, 1]).unwrap(), vec![4, 5, 3]);
/// assert!(broadcast_shape(&[2, 3], &[4]).is_err());
/// ```
pub fn broadcast_shape(a: &[Ix], b: &[Ix]) -> Result<Vec<Ix>, ArrayError> {
    co_broadcast(a, b)
}

impl<A> NdArray<A> {
    /// Return a copy of the array, repeated along stretched axes so that it
    /// has the shape `shape`.
    ///
    /// **Errors** with `DimensionMismatch` if the array does not broadcast to
    /// exactly `shape`.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let v = ArrayF64::from_vec1(vec![1., 2.]);
    /// let m = v.broadcast_to([3, 2]).unwrap();
    /// assert_eq!(m.as_slice(), &[1., 2., 1., 2., 1., 2.]);
    /// ```
    pub fn broadcast_to<Sh>(&self, shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone,
    {
        let shape = shape.into_shape()?;
        let strides = broadcast_strides(&self.shape, &shape)?;
        if shape == self.shape {
            return Ok(self.clone());
        }
        let mut out = Vec::with_capacity(size_of_shape(&shape));
        SlicePair::permuted(&shape, &strides).for_each_offset(|x, _| out.push(self.data[x].clone()));
        Ok(Self::from_parts_unchecked(shape, out))
    }

    /// Create a new array by applying `f` to pairs of elements of `self` and
    /// `rhs`, broadcast to their common shape.
    ///
    /// **Errors** with `DimensionMismatch` if the shapes do not broadcast.
    pub fn zip_with<B, C, F>(&self, rhs: &NdArray<B>, mut f: F) -> Result<NdArray<C>, ArrayError>
    where
        F: FnMut(&A, &B) -> C,
    {
        if self.shape == rhs.shape {
            let v = self.data.iter().zip(&rhs.data).map(|(a, b)| f(a, b)).collect();
            return Ok(NdArray::from_parts_unchecked(self.shape.clone(), v));
        }
        let shape = co_broadcast(&self.shape, &rhs.shape)?;
        let sx = broadcast_strides(&self.shape, &shape)?;
        let sy = broadcast_strides(&rhs.shape, &shape)?;
        let mut out = Vec::with_capacity(size_of_shape(&shape));
        SlicePair::zipped(&shape, &sx, &sy).for_each_offset(|x, y| out.push(f(&self.data[x], &rhs.data[y])));
        Ok(NdArray::from_parts_unchecked(shape, out))
    }

    /// Apply `f` to pairs of elements of `self`, by mutable reference, and
    /// `rhs`, broadcast to the shape of `self`.
    ///
    /// The elements of `self` are updated in place.
    ///
    /// **Errors** with `DimensionMismatch` if `rhs` does not broadcast to the
    /// shape of `self`; `self` is left unchanged.
    pub fn zip_mut_with<B, F>(&mut self, rhs: &NdArray<B>, mut f: F) -> Result<(), ArrayError>
    where
        F: FnMut(&mut A, &B),
    {
        if self.shape == rhs.shape {
            self.data.iter_mut().zip(&rhs.data).for_each(|(a, b)| f(a, b));
            return Ok(());
        }
        let sy = broadcast_strides(&rhs.shape, &self.shape)?;
        let pair = SlicePair::zipped(&self.shape, &self.strides, &sy);
        let data = &mut self.data;
        pair.for_each_offset(|x, y| f(&mut data[x], &rhs.data[y]));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayF64, ErrorKind};

    #[test]
    fn broadcast_row_and_column() {
        let col = ArrayF64::from_vec([3, 1], vec![0., 10., 20.]).unwrap();
        let row = ArrayF64::from_vec1(vec![1., 2.]);
        let s = col.zip_with(&row, |a, b| a + b).unwrap();
        assert_eq!(s.shape(), &[3, 2]);
        assert_eq!(s.as_slice(), &[1., 2., 11., 12., 21., 22.]);
    }

    #[test]
    fn broadcast_scalar_array() {
        let a = ArrayF64::sequential([2, 2], 0., 1.).unwrap();
        let b = a.zip_with(&NdArray::scalar(2.), |a, b| a * b).unwrap();
        assert_eq!(b.as_slice(), &[0., 2., 4., 6.]);
    }

    #[test]
    fn mismatch() {
        let a = ArrayF64::zeros([2, 3]).unwrap();
        let b = ArrayF64::zeros([3, 2]).unwrap();
        let err = a.zip_with(&b, |_, _| ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        assert!(b.broadcast_to([3]).is_err());
    }

    #[test]
    fn zip_mut_does_not_grow_self() {
        let mut a = ArrayF64::from_vec1(vec![1., 2.]);
        let b = ArrayF64::zeros([3, 2]).unwrap();
        assert!(a.zip_mut_with(&b, |x, y| *x += *y).is_err());
        assert_eq!(a.as_slice(), &[1., 2.]);

        let mut m = ArrayF64::zeros([2, 2]).unwrap();
        m.zip_mut_with(&a, |x, y| *x = *y).unwrap();
        assert_eq!(m.as_slice(), &[1., 2., 1., 2.]);
    }

    #[test]
    fn empty_broadcast() {
        let a = ArrayF64::zeros([0, 3]).unwrap();
        let b = ArrayF64::ones([1, 3]).unwrap();
        let c = a.zip_with(&b, |x, y| x + y).unwrap();
        assert_eq!(c.shape(), &[0, 3]);
    }
}
