// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole-array and elementwise comparisons.
//!
//! Ordering predicates use the element kind's ordering rule (see
//! [`NdElement`]): the IEEE order for real kinds, magnitude then phase for
//! complex kinds. Any ordering predicate involving NaN is false.

use std::cmp::Ordering;

use crate::error::ArrayError;
use crate::{NdArray, NdElement};

/// Return `true` if the array shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
impl<A, B> PartialEq<NdArray<B>> for NdArray<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &NdArray<B>) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Eq> Eq for NdArray<A> {}

#[inline]
fn eq<A: NdElement>(a: &A, b: &A) -> bool {
    a == b
}

#[inline]
fn ne<A: NdElement>(a: &A, b: &A) -> bool {
    a != b
}

#[inline]
fn gt<A: NdElement>(a: &A, b: &A) -> bool {
    a.compare(b) == Some(Ordering::Greater)
}

#[inline]
fn lt<A: NdElement>(a: &A, b: &A) -> bool {
    a.compare(b) == Some(Ordering::Less)
}

#[inline]
fn ge<A: NdElement>(a: &A, b: &A) -> bool {
    matches!(a.compare(b), Some(Ordering::Greater | Ordering::Equal))
}

#[inline]
fn le<A: NdElement>(a: &A, b: &A) -> bool {
    matches!(a.compare(b), Some(Ordering::Less | Ordering::Equal))
}

macro_rules! impl_ordering_predicates {
    ($($pred:ident, $whole:ident, $whole_scalar:ident, $elt:ident, $elt_scalar:ident, $doc:expr;)*) => {
/// # Ordering Comparisons
impl<A> NdArray<A>
where
    A: NdElement,
{
    $(
    /// Return `true` if every element of `self` is
    #[doc=$doc]
    /// the corresponding element of `rhs`, broadcast to their common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn $whole(&self, rhs: &NdArray<A>) -> Result<bool, ArrayError> {
        Ok(self.$elt(rhs)?.iter().all(|&b| b))
    }

    /// Return `true` if every element of `self` is
    #[doc=$doc]
    /// `x`.
    pub fn $whole_scalar(&self, x: A) -> bool {
        self.iter().all(|a| $pred(a, &x))
    }

    /// Compare elementwise: is each element of `self`
    #[doc=$doc]
    /// the corresponding element of `rhs`, broadcast to their common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn $elt(&self, rhs: &NdArray<A>) -> Result<NdArray<bool>, ArrayError> {
        self.zip_with(rhs, $pred)
    }

    /// Compare elementwise: is each element of `self`
    #[doc=$doc]
    /// `x`.
    pub fn $elt_scalar(&self, x: A) -> NdArray<bool> {
        self.map(|a| $pred(a, &x))
    }
    )*
}
    };
}

impl_ordering_predicates! {
    gt, greater, greater_scalar, elt_greater, elt_greater_scalar, "greater than";
    lt, less, less_scalar, elt_less, elt_less_scalar, "less than";
    ge, greater_equal, greater_equal_scalar, elt_greater_equal, elt_greater_equal_scalar,
        "greater than or equal to";
    le, less_equal, less_equal_scalar, elt_less_equal, elt_less_equal_scalar,
        "less than or equal to";
}

/// # Equality Comparisons
impl<A> NdArray<A>
where
    A: NdElement,
{
    /// Return `true` if `self` and `rhs` have the same shape and equal
    /// elements.
    ///
    /// Arrays of different shapes are never equal; no broadcasting takes
    /// place.
    pub fn equal(&self, rhs: &NdArray<A>) -> bool {
        self.shape == rhs.shape && self.data.iter().zip(&rhs.data).all(|(a, b)| eq(a, b))
    }

    /// The negation of [`equal`](NdArray::equal).
    pub fn not_equal(&self, rhs: &NdArray<A>) -> bool {
        !self.equal(rhs)
    }

    /// Return `true` if every element is equal to `x`.
    pub fn equal_scalar(&self, x: A) -> bool {
        self.iter().all(|a| eq(a, &x))
    }

    /// Return `true` if any element differs from `x`.
    pub fn not_equal_scalar(&self, x: A) -> bool {
        !self.equal_scalar(x)
    }

    /// Compare elementwise for equality, broadcasting to the common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn elt_equal(&self, rhs: &NdArray<A>) -> Result<NdArray<bool>, ArrayError> {
        self.zip_with(rhs, eq)
    }

    /// Compare elementwise for inequality, broadcasting to the common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn elt_not_equal(&self, rhs: &NdArray<A>) -> Result<NdArray<bool>, ArrayError> {
        self.zip_with(rhs, ne)
    }

    /// Compare each element with `x` for equality.
    pub fn elt_equal_scalar(&self, x: A) -> NdArray<bool> {
        self.map(|a| eq(a, &x))
    }

    /// Compare each element with `x` for inequality.
    pub fn elt_not_equal_scalar(&self, x: A) -> NdArray<bool> {
        self.map(|a| ne(a, &x))
    }

    /// Return `true` if `self` and `rhs` have the same shape and every pair
    /// of elements is within `eps` of each other, `|a - b| <= eps`.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec1(vec![1., 2.]);
    /// let b = ArrayF64::from_vec1(vec![1., 2. + 1e-9]);
    /// assert!(a.approx_equal(&b, 1e-6));
    /// assert!(!a.approx_equal(&b, 1e-12));
    /// ```
    pub fn approx_equal(&self, rhs: &NdArray<A>, eps: A::Real) -> bool {
        self.shape == rhs.shape
            && self
                .data
                .iter()
                .zip(&rhs.data)
                .all(|(&a, &b)| a.approx_eq(b, eps))
    }

    /// Compare elementwise with tolerance `eps`, broadcasting to the common
    /// shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn approx_elt_equal(&self, rhs: &NdArray<A>, eps: A::Real) -> Result<NdArray<bool>, ArrayError> {
        self.zip_with(rhs, |&a, &b| a.approx_eq(b, eps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{c64, ArrayC64, ArrayF64, ErrorKind, NdArray};

    #[test]
    fn partial_eq_across_element_types() {
        let owned = NdArray::from_vec([2, 1], vec![String::from("a"), String::from("b")]).unwrap();
        let borrowed = NdArray::from_vec([2, 1], vec!["a", "b"]).unwrap();
        assert!(owned == borrowed);
        assert!(owned != borrowed.reshape([1, 2]).unwrap());
        assert!(owned != NdArray::from_vec1(vec!["a", "c"]).reshape([2, 1]).unwrap());
        let a = ArrayF64::from_vec1(vec![1., 2.]);
        assert_ne!(a, a.reshape([2, 1]).unwrap());
    }

    #[test]
    fn whole_array_predicates() {
        let a = ArrayF64::from_vec1(vec![1., 2., 3.]);
        let b = ArrayF64::from_vec1(vec![0., 2., 1.]);
        assert!(a.greater_equal(&b).unwrap());
        assert!(!a.greater(&b).unwrap());
        assert!(b.less_equal(&a).unwrap());
        assert!(a.greater_scalar(0.5));
        assert!(!a.less_scalar(3.));
        assert!(a.equal(&a.clone()));
        assert!(a.not_equal(&b));
        assert!(!a.equal(&a.reshape([3, 1]).unwrap()));
        let err = a.greater(&ArrayF64::zeros(2).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn elementwise() {
        let a = ArrayF64::from_vec1(vec![1., 2., 3.]);
        let b = ArrayF64::from_vec1(vec![3., 2., 1.]);
        assert_eq!(a.elt_greater(&b).unwrap().as_slice(), &[false, false, true]);
        assert_eq!(a.elt_equal(&b).unwrap().as_slice(), &[false, true, false]);
        assert_eq!(a.elt_less_equal_scalar(2.).as_slice(), &[true, true, false]);
        let col = ArrayF64::from_vec([2, 1], vec![1., 3.]).unwrap();
        let m = a.elt_less(&col).unwrap();
        assert_eq!(m.shape(), &[2, 3]);
        assert_eq!(m.as_slice(), &[false, false, false, true, true, false]);
    }

    #[test]
    fn nan_is_unordered() {
        let a = ArrayF64::from_vec1(vec![f64::NAN]);
        assert!(!a.greater_scalar(0.));
        assert!(!a.less_equal_scalar(0.));
        assert!(!a.equal_scalar(f64::NAN));
        assert!(a.not_equal_scalar(f64::NAN));
    }

    #[test]
    fn complex_ordering() {
        let a = ArrayC64::from_vec1(vec![c64::new(3., 4.), c64::new(-5., 0.)]);
        let five = c64::new(5., 0.);
        // equal magnitude; phase 0 is below the phase of 3+4i and of -5
        assert!(a.greater_equal_scalar(five));
        assert!(a.greater_scalar(five));
        assert_eq!(a.elt_equal_scalar(five).as_slice(), &[false, false]);
        assert!(a.less_scalar(c64::new(0., 6.)));
    }

    #[test]
    fn approx() {
        let a = ArrayC64::from_vec1(vec![c64::new(1., 1.)]);
        let b = ArrayC64::from_vec1(vec![c64::new(1., 1. + 1e-10)]);
        assert!(a.approx_equal(&b, 1e-8));
        assert_eq!(a.approx_elt_equal(&b, 1e-12).unwrap().as_slice(), &[false]);
    }
}
