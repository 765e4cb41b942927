// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arithmetic operators and their named, fallible counterparts.
//!
//! Every operator is written once for all `A: NdElement`. The operator
//! traits panic when the operands do not broadcast; the named methods
//! (`add_checked`, `add_inplace`, ...) return the error instead.

use crate::dimension::co_broadcast;
use crate::error::ArrayError;
use crate::{NdArray, NdElement, ScalarOperand};

#[cold]
#[inline(never)]
fn broadcast_panic(e: ArrayError) -> ! {
    panic!("ndstride: {}", e)
}

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $iop:tt, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`,
/// and return the result (based on `self`).
///
/// **Panics** if broadcasting isn’t possible.
impl<A> $trt<NdArray<A>> for NdArray<A>
where
    A: NdElement,
{
    type Output = NdArray<A>;
    fn $mth(self, rhs: NdArray<A>) -> NdArray<A> {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`,
/// and return the result.
///
/// If `rhs` broadcasts to the shape of `self`, the result reuses the buffer
/// of `self`.
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, A> $trt<&'a NdArray<A>> for NdArray<A>
where
    A: NdElement,
{
    type Output = NdArray<A>;
    fn $mth(mut self, rhs: &NdArray<A>) -> NdArray<A> {
        match co_broadcast(&self.shape, &rhs.shape) {
            Ok(ref shape) if *shape == self.shape => {
                if let Err(e) = self.zip_mut_with(rhs, |x, &y| *x $iop y) {
                    broadcast_panic(e)
                }
                self
            }
            _ => (&self).$mth(rhs),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`,
/// and return the result.
///
/// If `self` broadcasts to the shape of `rhs`, the result reuses the buffer
/// of `rhs`.
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, A> $trt<NdArray<A>> for &'a NdArray<A>
where
    A: NdElement,
{
    type Output = NdArray<A>;
    fn $mth(self, mut rhs: NdArray<A>) -> NdArray<A> {
        match co_broadcast(&self.shape, &rhs.shape) {
            Ok(ref shape) if *shape == rhs.shape => {
                if let Err(e) = rhs.zip_mut_with(self, |y, &x| *y = x $operator *y) {
                    broadcast_panic(e)
                }
                rhs
            }
            _ => self.$mth(&rhs),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new array.
///
/// If their shapes disagree, `self` and `rhs` are broadcast to their
/// broadcast shape.
///
/// **Panics** if broadcasting isn’t possible.
impl<'a, 'b, A> $trt<&'b NdArray<A>> for &'a NdArray<A>
where
    A: NdElement,
{
    type Output = NdArray<A>;
    fn $mth(self, rhs: &'b NdArray<A>) -> NdArray<A> {
        self.zip_with(rhs, |&x, &y| x $operator y)
            .unwrap_or_else(|e| broadcast_panic(e))
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`,
/// and return the result (based on `self`).
impl<A, B> $trt<B> for NdArray<A>
where
    A: NdElement + $trt<B, Output = A>,
    B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(mut self, x: B) -> NdArray<A> {
        self.map_inplace(move |elt| {
            *elt = *elt $operator x.clone();
        });
        self
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new array.
impl<'a, A, B> $trt<B> for &'a NdArray<A>
where
    A: NdElement + $trt<B, Output = A>,
    B: ScalarOperand,
{
    type Output = NdArray<A>;
    fn $mth(self, x: B) -> NdArray<A> {
        self.map(move |&elt| elt $operator x.clone())
    }
}
    );
);

// Pick the expression $a for commutative and $b for ordered binop
macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag. Reuse the self + scalar impl if we can.
    // We can do this safely since these are the primitive numeric types
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
// these have no doc -- they are not visible in rustdoc
// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result (based on `self`).
impl $trt<NdArray<$scalar>> for $scalar {
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: NdArray<$scalar>) -> NdArray<$scalar> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {{
            let mut rhs = rhs;
            rhs.map_inplace(move |elt| {
                *elt = self $operator *elt;
            });
            rhs
        }})
    }
}

// Perform elementwise
// between the scalar `self` and array `rhs`,
// and return the result as a new array.
impl<'a> $trt<&'a NdArray<$scalar>> for $scalar {
    type Output = NdArray<$scalar>;
    fn $mth(self, rhs: &NdArray<$scalar>) -> NdArray<$scalar> {
        if_commutative!($commutative {
            rhs.$mth(self)
        } or {
            rhs.map(move |&elt| self $operator elt)
        })
    }
}
    );
}

mod arithmetic_ops {
    use super::*;

    use num_complex::Complex;
    use std::ops::*;

    impl_binary_op!(Add, +, add, +=, "addition");
    impl_binary_op!(Sub, -, sub, -=, "subtraction");
    impl_binary_op!(Mul, *, mul, *=, "multiplication");
    impl_binary_op!(Div, /, div, /=, "division");
    impl_binary_op!(Rem, %, rem, %=, "remainder");

    macro_rules! all_scalar_ops {
        ($scalar:ty) => (
            impl_scalar_lhs_op!($scalar, Commute, +, Add, add, "addition");
            impl_scalar_lhs_op!($scalar, Ordered, -, Sub, sub, "subtraction");
            impl_scalar_lhs_op!($scalar, Commute, *, Mul, mul, "multiplication");
            impl_scalar_lhs_op!($scalar, Ordered, /, Div, div, "division");
            impl_scalar_lhs_op!($scalar, Ordered, %, Rem, rem, "remainder");
        );
    }
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);
    all_scalar_ops!(Complex<f32>);
    all_scalar_ops!(Complex<f64>);

    impl<A> Neg for NdArray<A>
    where
        A: NdElement,
    {
        type Output = Self;
        /// Perform an elementwise negation of `self` and return the result.
        fn neg(mut self) -> Self {
            self.map_inplace(|elt| {
                *elt = -*elt;
            });
            self
        }
    }

    impl<'a, A> Neg for &'a NdArray<A>
    where
        A: NdElement,
    {
        type Output = NdArray<A>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new array.
        fn neg(self) -> NdArray<A> {
            self.map(|&elt| -elt)
        }
    }
}

mod assign_ops {
    use super::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $doc:expr) => {
            use std::ops::$trt;

            #[doc=$doc]
            /// If their shapes disagree, `rhs` is broadcast to the shape of `self`.
            ///
            /// The result is written into the existing buffer of `self`.
            ///
            /// **Panics** if broadcasting isn’t possible.
            impl<'a, A> $trt<&'a NdArray<A>> for NdArray<A>
            where
                A: NdElement,
            {
                fn $method(&mut self, rhs: &NdArray<A>) {
                    if let Err(e) = self.zip_mut_with(rhs, |x, &y| x.$method(y)) {
                        broadcast_panic(e)
                    }
                }
            }

            #[doc=$doc]
            impl<A> $trt<A> for NdArray<A>
            where
                A: NdElement,
            {
                fn $method(&mut self, rhs: A) {
                    self.map_inplace(move |elt| {
                        elt.$method(rhs);
                    });
                }
            }
        };
    }

    impl_assign_op!(
        AddAssign,
        add_assign,
        "Perform `self += rhs` as elementwise addition (in place).\n"
    );
    impl_assign_op!(
        SubAssign,
        sub_assign,
        "Perform `self -= rhs` as elementwise subtraction (in place).\n"
    );
    impl_assign_op!(
        MulAssign,
        mul_assign,
        "Perform `self *= rhs` as elementwise multiplication (in place).\n"
    );
    impl_assign_op!(
        DivAssign,
        div_assign,
        "Perform `self /= rhs` as elementwise division (in place).\n"
    );
    impl_assign_op!(
        RemAssign,
        rem_assign,
        "Perform `self %= rhs` as elementwise remainder (in place).\n"
    );
}

macro_rules! impl_named_ops {
    ($($operator:tt, $iop:tt, $checked:ident, $scalar:ident, $scalar_lhs:ident,
       $inplace:ident, $scalar_inplace:ident, $doc:expr;)*) => {
/// # Named Arithmetic
///
/// The `*_checked` and `*_scalar` methods always return a new array. The
/// `*_inplace` methods write into the buffer of `self`; every later read of
/// that array sees the new values.
impl<A> NdArray<A>
where
    A: NdElement,
{
    $(
    /// Elementwise
    #[doc=$doc]
    /// of `self` and `rhs`, broadcast to their common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn $checked(&self, rhs: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        self.zip_with(rhs, |&x, &y| x $operator y)
    }

    /// Elementwise
    #[doc=$doc]
    /// with the scalar `x` on the right hand side.
    pub fn $scalar(&self, x: A) -> NdArray<A> {
        self.map(|&elt| elt $operator x)
    }

    /// Elementwise
    #[doc=$doc]
    /// with the scalar `x` on the left hand side.
    pub fn $scalar_lhs(&self, x: A) -> NdArray<A> {
        self.map(|&elt| x $operator elt)
    }

    /// In place elementwise
    #[doc=$doc]
    /// of `self` and `rhs`, broadcast to the shape of `self`.
    ///
    /// **Errors** with `DimensionMismatch` if `rhs` does not broadcast to
    /// the shape of `self`; `self` is then left unchanged.
    pub fn $inplace(&mut self, rhs: &NdArray<A>) -> Result<(), ArrayError> {
        self.zip_mut_with(rhs, |x, &y| *x $iop y)
    }

    /// In place elementwise
    #[doc=$doc]
    /// with the scalar `x`.
    pub fn $scalar_inplace(&mut self, x: A) {
        self.map_inplace(|elt| *elt $iop x);
    }
    )*
}
    };
}

impl_named_ops! {
    +, +=, add_checked, add_scalar, scalar_add, add_inplace, add_scalar_inplace, "addition";
    -, -=, sub_checked, sub_scalar, scalar_sub, sub_inplace, sub_scalar_inplace, "subtraction";
    *, *=, mul_checked, mul_scalar, scalar_mul, mul_inplace, mul_scalar_inplace, "multiplication";
    /, /=, div_checked, div_scalar, scalar_div, div_inplace, div_scalar_inplace, "division";
    %, %=, rem_checked, rem_scalar, scalar_rem, rem_inplace, rem_scalar_inplace, "remainder";
}

impl<A> NdArray<A>
where
    A: NdElement,
{
    /// Raise each element of `self` to the power of the corresponding
    /// element of `rhs`, broadcast to their common shape.
    ///
    /// **Errors** with `DimensionMismatch` if broadcasting isn’t possible.
    pub fn pow(&self, rhs: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        self.zip_with(rhs, |&x, &y| x.pow(y))
    }

    /// Raise each element to the power `exp`.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec1(vec![1., 2., 3.]);
    /// assert_eq!(a.pow_scalar(2.).as_slice(), &[1., 4., 9.]);
    /// ```
    pub fn pow_scalar(&self, exp: A) -> NdArray<A> {
        self.map(|&x| x.pow(exp))
    }
}
