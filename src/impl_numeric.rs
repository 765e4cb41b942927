// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;

use crate::dimension::{check_axis, size_of_shape};
use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{NdArray, NdElement};

/// # Numerical Methods for Arrays
impl<A> NdArray<A>
where
    A: NdElement,
{
    /// Return the sum of all elements in the array.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> A {
        self.iter().copied().sum()
    }

    /// Return the product of all elements in the array.
    pub fn product(&self) -> A {
        self.iter().copied().product()
    }

    /// Return the mean of all elements in the array.
    ///
    /// **Errors** with `InvalidArgument` if the array is empty.
    pub fn mean(&self) -> Result<A, ArrayError> {
        if self.is_empty() {
            return Err(with_detail(ErrorKind::InvalidArgument, "mean of an empty array"));
        }
        Ok(self.sum() / A::from_usize(self.len()))
    }

    /// Return the smallest element, by the element kind's ordering rule.
    ///
    /// Unordered elements (NaN) are passed over.
    ///
    /// **Errors** with `InvalidArgument` if the array is empty.
    pub fn min(&self) -> Result<A, ArrayError> {
        self.extremum(Ordering::Less)
    }

    /// Return the largest element, by the element kind's ordering rule.
    ///
    /// Unordered elements (NaN) are passed over.
    ///
    /// **Errors** with `InvalidArgument` if the array is empty.
    pub fn max(&self) -> Result<A, ArrayError> {
        self.extremum(Ordering::Greater)
    }

    fn extremum(&self, wanted: Ordering) -> Result<A, ArrayError> {
        let mut iter = self.iter();
        let first = match iter.next() {
            Some(&first) => first,
            None => return Err(with_detail(ErrorKind::InvalidArgument, "extremum of an empty array")),
        };
        Ok(iter.fold(first, |acc, &x| {
            // a NaN accumulator is replaced by the first ordered element
            if x.compare(&acc) == Some(wanted) || acc.compare(&acc).is_none() {
                x
            } else {
                acc
            }
        }))
    }

    /// Return sum along `axis`.
    ///
    /// The result has the rank of `self` minus one.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.sum_axis(0).unwrap().as_slice(), &[4., 6.]);
    /// assert_eq!(a.sum_axis(1).unwrap().as_slice(), &[3., 7.]);
    /// ```
    ///
    /// **Errors** with `InvalidArgument` if `axis` is out of bounds.
    pub fn sum_axis(&self, axis: usize) -> Result<NdArray<A>, ArrayError> {
        check_axis(axis, self.ndim())?;
        let n = self.shape[axis];
        let inner = size_of_shape(&self.shape[axis + 1..]);
        let outer = size_of_shape(&self.shape[..axis]);
        let mut res = vec![A::zero(); outer * inner];
        for o in 0..outer {
            let out = &mut res[o * inner..(o + 1) * inner];
            for k in 0..n {
                let start = (o * n + k) * inner;
                for (r, &x) in out.iter_mut().zip(&self.data[start..start + inner]) {
                    *r += x;
                }
            }
        }
        let mut shape = self.shape.clone();
        shape.remove(axis);
        Ok(NdArray::from_parts_unchecked(shape, res))
    }

    /// Return mean along `axis`.
    ///
    /// **Errors** with `InvalidArgument` if `axis` is out of bounds or has
    /// length zero.
    pub fn mean_axis(&self, axis: usize) -> Result<NdArray<A>, ArrayError> {
        check_axis(axis, self.ndim())?;
        let n = self.shape[axis];
        if n == 0 {
            return Err(with_detail(ErrorKind::InvalidArgument, format_args!("mean along empty axis {}", axis)));
        }
        let mut sum = self.sum_axis(axis)?;
        sum.div_scalar_inplace(A::from_usize(n));
        Ok(sum)
    }
}
