// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_complex::Complex;
use num_traits::{Float, One, Zero};

/// The four numeric element kinds an array can be instantiated over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f32`
    Real32,
    /// `f64`
    Real64,
    /// `Complex<f32>`, two `f32` parts
    Complex32,
    /// `Complex<f64>`, two `f64` parts
    Complex64,
}

impl ElementKind {
    /// Size in bytes of one element of this kind.
    pub fn byte_width(self) -> usize {
        match self {
            ElementKind::Real32 => 4,
            ElementKind::Real64 | ElementKind::Complex32 => 8,
            ElementKind::Complex64 => 16,
        }
    }

    /// Return `true` for the two complex kinds.
    pub fn is_complex(self) -> bool {
        matches!(self, ElementKind::Complex32 | ElementKind::Complex64)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            ElementKind::Real32 => "real32",
            ElementKind::Real64 => "real64",
            ElementKind::Complex32 => "complex32",
            ElementKind::Complex64 => "complex64",
        })
    }
}

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `&a + 1.0`, and, `a * 2.`, and `a += 3.` are allowed.
///
/// ***Left hand side*** scalar operands are not related to this trait
/// (they need one `impl` per concrete scalar type); but they are still
/// implemented for the same types, allowing operations
/// `K @ &A`, and `K @ B` for the four element kinds `K`.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

/// The capabilities an element kind must provide for the array operators.
///
/// Every operator of the crate is written once, generically over
/// `A: NdElement`. The requirement is structural: a type missing any of
/// the arithmetic, comparison or constant capabilities below does not
/// satisfy the bound, and using it as an array element for arithmetic is
/// rejected at compile time.
///
/// The trait is implemented for `f32`, `f64`, `Complex<f32>` and
/// `Complex<f64>`.
///
/// ## Ordering
///
/// Real kinds are ordered by the IEEE partial order; any ordering
/// comparison involving NaN is false.
///
/// Complex kinds have no natural order. They are compared by magnitude
/// first, and by phase (the argument, in `(-π, π]`) when the magnitudes are
/// equal. Equality is always exact, component-wise equality.
pub trait NdElement:
    ScalarOperand
    + Copy
    + PartialEq
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
    + Sum
    + Product
{
    /// The real type of the element's components and magnitude.
    type Real: NdElement + Float;

    /// The element kind tag.
    const KIND: ElementKind;

    /// Compare two elements by the kind's ordering rule.
    ///
    /// Returns `None` when the elements are unordered (NaN).
    fn compare(&self, other: &Self) -> Option<Ordering>;

    /// Magnitude: the absolute value, or the modulus of a complex number.
    fn magnitude(self) -> Self::Real;

    /// Raise `self` to the power `exp`.
    fn pow(self, exp: Self) -> Self;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;

    /// Convert a count or a position, used by constructors like
    /// `sequential` and by `mean`.
    fn from_usize(n: usize) -> Self;

    /// Return `true` if `|self - other| <= eps`.
    #[inline]
    fn approx_eq(self, other: Self, eps: Self::Real) -> bool {
        (self - other).magnitude() <= eps
    }
}

macro_rules! impl_real_element {
    ($ty:ty, $kind:ident) => {
        impl NdElement for $ty {
            type Real = $ty;
            const KIND: ElementKind = ElementKind::$kind;

            #[inline]
            fn compare(&self, other: &Self) -> Option<Ordering> {
                self.partial_cmp(other)
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.abs()
            }

            #[inline]
            fn pow(self, exp: Self) -> Self {
                self.powf(exp)
            }

            #[inline]
            fn from_real(re: Self) -> Self {
                re
            }

            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $ty
            }
        }
    };
}

impl_real_element!(f32, Real32);
impl_real_element!(f64, Real64);

macro_rules! impl_complex_element {
    ($ty:ty, $kind:ident) => {
        impl NdElement for Complex<$ty> {
            type Real = $ty;
            const KIND: ElementKind = ElementKind::$kind;

            fn compare(&self, other: &Self) -> Option<Ordering> {
                match self.norm().partial_cmp(&other.norm())? {
                    Ordering::Equal => self.arg().partial_cmp(&other.arg()),
                    ord => Some(ord),
                }
            }

            #[inline]
            fn magnitude(self) -> $ty {
                self.norm()
            }

            #[inline]
            fn pow(self, exp: Self) -> Self {
                if exp.is_zero() {
                    Self::one()
                } else if self.is_zero() {
                    Self::zero()
                } else {
                    self.powc(exp)
                }
            }

            #[inline]
            fn from_real(re: $ty) -> Self {
                Complex::new(re, 0.)
            }

            #[inline]
            fn from_usize(n: usize) -> Self {
                Complex::new(n as $ty, 0.)
            }
        }
    };
}

impl_complex_element!(f32, Complex32);
impl_complex_element!(f64, Complex64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(<f32 as NdElement>::KIND, ElementKind::Real32);
        assert_eq!(<Complex<f64> as NdElement>::KIND, ElementKind::Complex64);
        assert_eq!(ElementKind::Complex32.byte_width(), 8);
        assert_eq!(ElementKind::Complex64.byte_width(), 16);
        assert_eq!(ElementKind::Real64.to_string(), "real64");
        assert!(ElementKind::Complex32.is_complex());
        assert!(!ElementKind::Real32.is_complex());
    }

    #[test]
    fn real_ordering() {
        assert_eq!(1.0f64.compare(&2.0), Some(Ordering::Less));
        assert_eq!(f64::NAN.compare(&2.0), None);
    }

    #[test]
    fn complex_ordering_magnitude_then_phase() {
        let a = Complex::new(3.0f64, 4.0);
        let b = Complex::new(0.0f64, 4.0);
        assert_eq!(a.compare(&b), Some(Ordering::Greater));
        // equal magnitude, phase decides
        let c = Complex::new(5.0f64, 0.0);
        assert_eq!(c.compare(&a), Some(Ordering::Less));
        assert_eq!(a.compare(&a), Some(Ordering::Equal));
    }

    #[test]
    fn complex_pow() {
        let i = Complex::new(0.0f64, 1.0);
        let p = i.pow(Complex::new(2., 0.));
        assert!(p.approx_eq(Complex::new(-1., 0.), 1e-12));
        assert_eq!(Complex::<f32>::zero().pow(Complex::zero()), Complex::one());
        assert_eq!(Complex::<f32>::zero().pow(Complex::new(2., 0.)), Complex::zero());
    }
}
