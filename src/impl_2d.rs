// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for two-dimensional arrays.
use crate::dimension::abs_index;
use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{Ixs, NdArray};

/// # Methods For 2-D Arrays
impl<A> NdArray<A> {
    pub(crate) fn ensure_matrix(&self) -> Result<(usize, usize), ArrayError> {
        match *self.shape() {
            [m, n] => Ok((m, n)),
            _ => Err(with_detail(
                ErrorKind::InvalidArgument,
                format_args!("expected a two-dimensional array, found shape {:?}", self.shape()),
            )),
        }
    }

    /// Return the element at row `i`, column `j`.
    ///
    /// Negative indices count from the back of their axis.
    ///
    /// **Errors** with `InvalidArgument` if the array is not two-dimensional
    /// and with `IndexOutOfBounds` if an index is out of bounds.
    pub fn get2(&self, i: Ixs, j: Ixs) -> Result<A, ArrayError>
    where
        A: Clone,
    {
        self.ensure_matrix()?;
        self.get(&[i, j])
    }

    /// Set the element at row `i`, column `j`.
    ///
    /// **Errors** like [`get2`](NdArray::get2).
    pub fn set2(&mut self, i: Ixs, j: Ixs, value: A) -> Result<(), ArrayError> {
        self.ensure_matrix()?;
        self.set(&[i, j], value)
    }

    /// Return the number of rows of the array seen as a matrix.
    ///
    /// A two-dimensional array has `shape[0]` rows. A one-dimensional array
    /// is a single row, and so is a zero-dimensional one; higher ranks have
    /// one row per index of all axes but the last.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::zeros([3, 2]).unwrap();
    /// assert_eq!((a.rows(), a.cols()), (3, 2));
    /// let v = ArrayF64::zeros(4).unwrap();
    /// assert_eq!((v.rows(), v.cols()), (1, 4));
    /// ```
    pub fn rows(&self) -> usize {
        match self.shape().split_last() {
            Some((_, init)) => init.iter().product(),
            None => 1,
        }
    }

    /// Return the number of columns of the array seen as a matrix: the
    /// length of the last axis, or 1 for a zero-dimensional array.
    pub fn cols(&self) -> usize {
        self.shape().last().copied().unwrap_or(1)
    }

    /// Return a copy of row `index` as a one-dimensional array.
    ///
    /// **Errors** with `InvalidArgument` if the array is not two-dimensional
    /// and with `IndexOutOfBounds` if `index` is out of bounds.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.row(-1).unwrap().as_slice(), &[3., 4.]);
    /// assert_eq!(a.col(0).unwrap().as_slice(), &[1., 3.]);
    /// ```
    pub fn row(&self, index: Ixs) -> Result<NdArray<A>, ArrayError>
    where
        A: Clone,
    {
        let (m, n) = self.ensure_matrix()?;
        let i = abs_index(m, index)?;
        Ok(NdArray::from_vec1(self.as_slice()[i * n..(i + 1) * n].to_vec()))
    }

    /// Return a copy of column `index` as a one-dimensional array.
    ///
    /// **Errors** like [`row`](NdArray::row).
    pub fn col(&self, index: Ixs) -> Result<NdArray<A>, ArrayError>
    where
        A: Clone,
    {
        let (_, n) = self.ensure_matrix()?;
        let j = abs_index(n, index)?;
        let v = self.as_slice().iter().skip(j).step_by(n).cloned().collect();
        Ok(NdArray::from_vec1(v))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayF32, ErrorKind};

    #[test]
    fn get_set() {
        let mut a = ArrayF32::zeros([2, 3]).unwrap();
        a.set2(1, -1, 5.).unwrap();
        assert_eq!(a.get2(1, 2).unwrap(), 5.);
        assert_eq!(a.get2(2, 0).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        let v = ArrayF32::zeros(3).unwrap();
        assert_eq!(v.get2(0, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn rows_and_cols() {
        let a = ArrayF32::sequential([3, 2], 0., 1.).unwrap();
        assert_eq!(a.row(1).unwrap().as_slice(), &[2., 3.]);
        assert_eq!(a.col(-1).unwrap().as_slice(), &[1., 3., 5.]);
        assert!(a.col(2).is_err());
        let t = ArrayF32::zeros([2, 3, 4]).unwrap();
        assert_eq!((t.rows(), t.cols()), (6, 4));
        let s = ArrayF32::scalar(1.);
        assert_eq!((s.rows(), s.cols()), (1, 1));
        let e = ArrayF32::zeros([2, 0]).unwrap();
        assert_eq!(e.col(0).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        assert_eq!(e.row(1).unwrap().len(), 0);
    }
}
