// Copyright 2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_complex::Complex;
use num_traits::Float;

use crate::error::{incompatible_shapes, ArrayError};
use crate::NdArray;

/// Methods specific to arrays with complex elements.
impl<T> NdArray<Complex<T>>
where
    T: Float,
{
    /// Return an array of the real parts.
    ///
    /// ```
    /// use ndstride::{c64, ArrayC64};
    ///
    /// let a = ArrayC64::from_vec1(vec![c64::new(1., 2.), c64::new(-3., 4.)]);
    /// assert_eq!(a.re().as_slice(), &[1., -3.]);
    /// assert_eq!(a.im().as_slice(), &[2., 4.]);
    /// ```
    pub fn re(&self) -> NdArray<T> {
        self.map(|z| z.re)
    }

    /// Return an array of the imaginary parts.
    pub fn im(&self) -> NdArray<T> {
        self.map(|z| z.im)
    }

    /// Return an array of the complex conjugates.
    pub fn conj(&self) -> NdArray<Complex<T>> {
        self.map(|z| z.conj())
    }

    /// Return an array of the magnitudes, `|z|`.
    pub fn norm(&self) -> NdArray<T> {
        self.map(|z| z.norm())
    }

    /// Return an array of the phases, `arg(z)` in `(-π, π]`.
    pub fn arg(&self) -> NdArray<T> {
        self.map(|z| z.arg())
    }

    /// Build a complex array from arrays of real and imaginary parts of the
    /// same shape.
    ///
    /// **Errors** with `DimensionMismatch` if the shapes differ.
    pub fn from_parts(re: &NdArray<T>, im: &NdArray<T>) -> Result<Self, ArrayError> {
        if re.shape() != im.shape() {
            return Err(incompatible_shapes(re.shape(), im.shape()));
        }
        re.zip_with(im, |&re, &im| Complex::new(re, im))
    }
}
