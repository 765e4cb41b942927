// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra.
//!
//! The matrix product is implemented directly on [`NdArray`]. Inversion and
//! linear solves go through a [`LinalgBackend`], which only sees the array's
//! buffer, shape and element kind; [`LuBackend`] is the default.

mod impl_linalg;
mod lu;

pub use self::lu::LuBackend;

use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{NdArray, NdElement};

/// A provider of matrix inversion and linear solves.
///
/// Implementors receive square matrices as `NdArray`s, from which they can
/// take the flat buffer, the shape and the element kind
/// ([`as_slice`](NdArray::as_slice), [`shape`](NdArray::shape),
/// [`kind`](NdArray::kind)), and return their result in the same form.
pub trait LinalgBackend<A: NdElement> {
    /// Return the inverse of the square matrix `a`.
    ///
    /// **Errors** with `Singular` if `a` has no inverse.
    fn inv(&self, a: &NdArray<A>) -> Result<NdArray<A>, ArrayError>;

    /// Solve `a x = b` for `x`. `b` is a vector of length *n* or an
    /// *n* × *r* matrix of right hand sides, and `x` has the shape of `b`.
    ///
    /// **Errors** with `Singular` if `a` has no inverse.
    fn solve(&self, a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError>;
}

/// Return the order *n* of the square matrix `a`.
pub(crate) fn square_order<A>(a: &NdArray<A>) -> Result<usize, ArrayError> {
    let (m, n) = a.ensure_matrix()?;
    if m != n {
        return Err(with_detail(
            ErrorKind::DimensionMismatch,
            format_args!("expected a square matrix, found shape {:?}", a.shape()),
        ));
    }
    Ok(n)
}

/// # Linear Algebra
impl<A> NdArray<A>
where
    A: NdElement,
{
    /// Return the inverse of the square matrix `self`, using [`LuBackend`].
    ///
    /// **Errors** with `Singular` if the matrix has no inverse,
    /// `DimensionMismatch` if it is not square, and `InvalidArgument` if it
    /// is not two-dimensional.
    pub fn inv(&self) -> Result<NdArray<A>, ArrayError> {
        self.inv_with(&LuBackend)
    }

    /// Return the inverse of the square matrix `self`, using `backend`.
    pub fn inv_with<B>(&self, backend: &B) -> Result<NdArray<A>, ArrayError>
    where
        B: LinalgBackend<A> + ?Sized,
    {
        square_order(self)?;
        backend.inv(self)
    }

    /// Solve `self x = b` for `x`, using [`LuBackend`].
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![2., 1., 1., 3.]).unwrap();
    /// let b = ArrayF64::from_vec1(vec![3., 5.]);
    /// let x = a.solve(&b).unwrap();
    /// assert!(x.approx_equal(&ArrayF64::from_vec1(vec![0.8, 1.4]), 1e-12));
    /// ```
    ///
    /// **Errors** like [`inv`](NdArray::inv), and with `DimensionMismatch`
    /// if the length of `b` is not the order of `self`.
    pub fn solve(&self, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        self.solve_with(&LuBackend, b)
    }

    /// Solve `self x = b` for `x`, using `backend`.
    pub fn solve_with<B>(&self, backend: &B, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError>
    where
        B: LinalgBackend<A> + ?Sized,
    {
        let n = square_order(self)?;
        if b.ndim() == 0 || b.ndim() > 2 || b.shape()[0] != n {
            return Err(with_detail(
                ErrorKind::DimensionMismatch,
                format_args!("right hand side of shape {:?} for a matrix of order {}", b.shape(), n),
            ));
        }
        backend.solve(self, b)
    }

    /// Raise the square matrix `self` to the integer power `k`.
    ///
    /// `k == 0` gives the identity; a negative `k` raises the inverse to the
    /// power `-k`. Uses [`LuBackend`] for the inverse.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![1., 1., 1., 0.]).unwrap();
    /// assert_eq!(a.mpow(5).unwrap().as_slice(), &[8., 5., 5., 3.]);
    /// ```
    ///
    /// **Errors** like [`inv`](NdArray::inv); `Singular` only for a negative
    /// `k`.
    pub fn mpow(&self, k: i32) -> Result<NdArray<A>, ArrayError> {
        self.mpow_with(&LuBackend, k)
    }

    /// Raise the square matrix `self` to the integer power `k`, using
    /// `backend` for the inverse.
    pub fn mpow_with<B>(&self, backend: &B, k: i32) -> Result<NdArray<A>, ArrayError>
    where
        B: LinalgBackend<A> + ?Sized,
    {
        let n = square_order(self)?;
        let mut base = if k < 0 { backend.inv(self)? } else { self.clone() };
        let mut e = k.unsigned_abs();
        let mut acc = NdArray::eye(n);
        // square and multiply
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.dot(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.dot(&base)?;
            }
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayF64, ErrorKind};

    /// A backend that refuses every matrix
    struct Refuse;

    impl LinalgBackend<f64> for Refuse {
        fn inv(&self, _: &ArrayF64) -> Result<ArrayF64, ArrayError> {
            Err(ArrayError::from_kind(ErrorKind::Singular))
        }

        fn solve(&self, _: &ArrayF64, _: &ArrayF64) -> Result<ArrayF64, ArrayError> {
            Err(ArrayError::from_kind(ErrorKind::Singular))
        }
    }

    #[test]
    fn pluggable_backend() {
        let a = ArrayF64::eye(2);
        assert_eq!(a.inv_with(&Refuse).unwrap_err().kind(), ErrorKind::Singular);
        assert_eq!(a.mpow_with(&Refuse, 2).unwrap(), a);
        assert!(a.mpow_with(&Refuse, -1).is_err());
        let backend: &dyn LinalgBackend<f64> = &LuBackend;
        assert_eq!(a.solve_with(backend, &ArrayF64::ones(2).unwrap()).unwrap().as_slice(), &[1., 1.]);
    }

    #[test]
    fn shape_errors() {
        let r = ArrayF64::zeros([2, 3]).unwrap();
        assert_eq!(r.inv().unwrap_err().kind(), ErrorKind::DimensionMismatch);
        assert_eq!(r.mpow(2).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        let v = ArrayF64::zeros(3).unwrap();
        assert_eq!(v.inv().unwrap_err().kind(), ErrorKind::InvalidArgument);
        let a = ArrayF64::eye(3);
        let b = ArrayF64::ones([2, 1]).unwrap();
        assert_eq!(a.solve(&b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn powers() {
        let a = ArrayF64::from_vec([2, 2], vec![2., 0., 0., 4.]).unwrap();
        assert_eq!(a.mpow(0).unwrap(), ArrayF64::eye(2));
        assert_eq!(a.mpow(1).unwrap(), a);
        assert_eq!(a.mpow(3).unwrap().as_slice(), &[8., 0., 0., 64.]);
        let inv2 = a.mpow(-2).unwrap();
        assert!(inv2.approx_equal(&ArrayF64::from_vec([2, 2], vec![0.25, 0., 0., 0.0625]).unwrap(), 1e-15));
    }
}
