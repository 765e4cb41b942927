// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndstride
//!

use num_traits::{Float, One, Zero};

use crate::dimension::{self, IntoShape};
use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{ElementKind, NdArray, NdElement};

/// # Constructor Methods for Owned Arrays
impl<A> NdArray<A> {
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Errors** with `InvalidShape` if a dimension is negative or the
    /// number of elements overflows `isize`.
    ///
    /// ```
    /// use ndstride::NdArray;
    ///
    /// let a = NdArray::from_elem([2, 3], 1.).unwrap();
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert!(NdArray::from_elem([2isize, -3], 1.).is_err());
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone,
    {
        let shape = shape.into_shape()?;
        let size = dimension::size_of_shape_checked(&shape)?;
        Ok(Self::from_parts_unchecked(shape, vec![elem; size]))
    }

    /// Create an array of shape `shape` filled with `fill`.
    ///
    /// This is the same as [`from_elem`](NdArray::from_elem).
    pub fn create<Sh>(shape: Sh, fill: A) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone,
    {
        Self::from_elem(shape, fill)
    }

    /// Create an array with zeros, shape `shape`.
    pub fn zeros<Sh>(shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with ones, shape `shape`.
    pub fn ones<Sh>(shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Clone + One,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create an array with default values, shape `shape`.
    pub fn default<Sh>(shape: Sh) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        A: Default + Clone,
    {
        Self::from_elem(shape, A::default())
    }

    /// Create an array of shape `shape` from the elements of `v`, in
    /// row-major order.
    ///
    /// **Errors** with `InvalidShape` if the length of `v` is not the
    /// number of elements of `shape`.
    ///
    /// ```
    /// use ndstride::NdArray;
    ///
    /// let a = NdArray::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.get(&[1, 0]).unwrap(), 3.);
    /// ```
    pub fn from_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape()?;
        let size = dimension::size_of_shape_checked(&shape)?;
        if size != v.len() {
            return Err(with_detail(
                ErrorKind::InvalidShape,
                format_args!("{} elements for shape {:?}", v.len(), shape),
            ));
        }
        Ok(Self::from_parts_unchecked(shape, v))
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    pub fn from_vec1(v: Vec<A>) -> Self {
        Self::from_parts_unchecked(vec![v.len()], v)
    }

    /// Create a zero-dimensional array holding `elem`.
    pub fn scalar(elem: A) -> Self {
        Self::from_parts_unchecked(Vec::new(), vec![elem])
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of each element, in row-major order.
    pub fn from_shape_fn<Sh, F>(shape: Sh, mut f: F) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
        F: FnMut(&[usize]) -> A,
    {
        let shape = shape.into_shape()?;
        let size = dimension::size_of_shape_checked(&shape)?;
        let mut index = vec![0; shape.len()];
        let mut v = Vec::with_capacity(size);
        for _ in 0..size {
            v.push(f(&index));
            for (i, &d) in index.iter_mut().zip(&shape).rev() {
                *i += 1;
                if *i < d {
                    break;
                }
                *i = 0;
            }
        }
        Ok(Self::from_parts_unchecked(shape, v))
    }

    /// Rebuild an array from the buffer, shape and element kind triple
    /// handed out by [`into_raw_parts`](NdArray::into_raw_parts).
    ///
    /// **Errors** with `InvalidArgument` if `kind` is not the kind of `A`,
    /// and with `InvalidShape` if the buffer length does not match.
    pub fn from_raw_parts(data: Vec<A>, shape: Vec<usize>, kind: ElementKind) -> Result<Self, ArrayError>
    where
        A: NdElement,
    {
        if kind != A::KIND {
            return Err(with_detail(
                ErrorKind::InvalidArgument,
                format_args!("buffer of kind {} for an array of kind {}", kind, A::KIND),
            ));
        }
        Self::from_vec(shape, data)
    }
}

impl<A: NdElement> NdArray<A> {
    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// The diagonal holds the kind's one, `1+0i` for complex kinds.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let eye = ArrayF64::eye(2);
    /// assert_eq!(eye.as_slice(), &[1., 0., 0., 1.]);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut v = vec![A::zero(); n * n];
        for i in 0..n {
            v[i * n + i] = A::one();
        }
        Self::from_parts_unchecked(vec![n, n], v)
    }

    /// Create an array of shape `shape` whose elements, in row-major order,
    /// are `start`, `start + step`, `start + 2 * step`, ...
    pub fn sequential<Sh>(shape: Sh, start: A, step: A) -> Result<Self, ArrayError>
    where
        Sh: IntoShape,
    {
        let shape = shape.into_shape()?;
        let size = dimension::size_of_shape_checked(&shape)?;
        let v = (0..size).map(|i| start + A::from_usize(i) * step).collect();
        Ok(Self::from_parts_unchecked(shape, v))
    }
}

impl<F: NdElement + Float> NdArray<F> {
    /// Create a one-dimensional array with `n` evenly spaced elements from
    /// `start` to `end` (inclusive).
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::linspace(0., 1., 5);
    /// assert_eq!(a.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn linspace(start: F, end: F, n: usize) -> Self {
        let step = if n > 1 {
            (end - start) / F::from_usize(n - 1)
        } else {
            F::zero()
        };
        let v = (0..n)
            .map(|i| {
                if i + 1 == n && n > 1 {
                    end
                } else {
                    start + step * F::from_usize(i)
                }
            })
            .collect();
        Self::from_vec1(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn shape_fn_is_row_major() {
        let a = NdArray::from_shape_fn([2, 3], |ix| (10 * ix[0] + ix[1]) as f64).unwrap();
        assert_eq!(a.as_slice(), &[0., 1., 2., 10., 11., 12.]);
        let z = NdArray::from_shape_fn([2, 0], |_| 1.0f32).unwrap();
        assert_eq!(z.len(), 0);
        let s = NdArray::from_shape_fn(Vec::<usize>::new(), |ix| ix.len() as f32).unwrap();
        assert_eq!(s.as_slice(), &[0.]);
    }

    #[test]
    fn negative_shape() {
        let err = NdArray::<f64>::zeros(vec![3isize, -1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        let err = NdArray::from_vec([2, 2], vec![1.0f32; 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
    }

    #[test]
    fn complex_eye() {
        let eye = NdArray::<Complex<f32>>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let want = if i == j { Complex::new(1., 0.) } else { Complex::new(0., 0.) };
                assert_eq!(eye.get(&[i as isize, j as isize]).unwrap(), want);
            }
        }
    }

    #[test]
    fn raw_parts() {
        let a = NdArray::sequential([2, 2], 0.0f64, 1.).unwrap();
        let (data, shape, kind) = a.clone().into_raw_parts();
        assert_eq!(kind, ElementKind::Real64);
        assert_eq!(NdArray::from_raw_parts(data.clone(), shape.clone(), kind).unwrap(), a);
        assert!(NdArray::<f32>::from_raw_parts(vec![0.; 4], shape, kind).is_err());
    }
}
