// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type aliases for the element kinds
//!

use num_complex::Complex;

use crate::NdArray;

/// `f32` array
pub type ArrayF32 = NdArray<f32>;
/// `f64` array
pub type ArrayF64 = NdArray<f64>;
/// `Complex<f32>` array
pub type ArrayC32 = NdArray<Complex<f32>>;
/// `Complex<f64>` array
pub type ArrayC64 = NdArray<Complex<f64>>;

/// Complex number with `f32` parts
#[allow(non_camel_case_types)]
pub type c32 = Complex<f32>;
/// Complex number with `f64` parts
#[allow(non_camel_case_types)]
pub type c64 = Complex<f64>;
