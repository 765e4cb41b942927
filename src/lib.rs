// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndstride"]
#![doc(html_root_url = "https://docs.rs/ndstride/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map,
    clippy::len_without_is_empty
)]

//! The `ndstride` crate provides [`NdArray`], a dense, row-major,
//! n-dimensional container over real and complex floating point elements,
//! together with basic and fancy slicing and a generic operator layer.
//!
//! - Four element kinds: `f32`, `f64`, `Complex<f32>`, `Complex<f64>`
//!   (see [`ElementKind`] and the [`NdElement`] trait).
//! - Slicing with a step, negative indices counted from the back of an
//!   axis, and index lists mixed freely with ranges. See [`s!`] and
//!   [`fancy!`].
//! - Slicing always copies into a fresh, densely packed array; writing
//!   through a slice mutates the array it was taken from.
//! - Arithmetic operators with broadcasting, for owned arrays, borrowed
//!   arrays and scalars on either side.
//! - Matrix product through `matrixmultiply`, linear solve and matrix power
//!   through a pluggable [`LinalgBackend`](linalg::LinalgBackend).
//!
//! ## Crate Feature Flags
//!
//! - `std`: Enabled by default; runtime cpu feature detection in the matrix
//!   product kernels.
//! - `approx`: Implementations of the `approx` traits for arrays.
//! - `matrixmultiply-threading`: Threading in the matrix product kernels.
//!
//! ## Example
//!
//! ```
//! use ndstride::prelude::*;
//!
//! let a = ArrayF64::sequential([3, 4], 0., 1.).unwrap();
//! let b = a.slice(s![0..=2, 1..=3]).unwrap();
//! assert_eq!(b.shape(), &[3, 3]);
//! assert_eq!(b.as_slice(), &[1., 2., 3., 5., 6., 7., 9., 10., 11.]);
//! ```

mod aliases;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
pub mod dimension;
mod element;
mod error;
mod impl_2d;
mod impl_compare;
mod impl_complex;
mod impl_constructors;
mod impl_methods;
mod impl_numeric;
mod impl_ops;
pub mod linalg;
pub mod prelude;
mod slice;
mod slicing;
mod stacking;
pub mod utils;
mod zip;

pub use crate::aliases::*;
pub use crate::dimension::IntoShape;
pub use crate::element::{ElementKind, NdElement, ScalarOperand};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::impl_methods::{Iter, IterMut};
pub use crate::slice::{FancyIndex, ParseSliceError, Slice, SliceRange};
pub use crate::stacking::{concat_horizontal, concat_vertical, concatenate};
pub use crate::zip::broadcast_shape;

/// Array index type
pub type Ix = usize;
/// Array index type (signed)
pub type Ixs = isize;

/// A dense n-dimensional array with owned, row-major storage.
///
/// The array is parameterized by its element type `A`, one of the four
/// element kinds implementing [`NdElement`]; most methods also work for
/// any `Clone` element (for example `NdArray<bool>`, the result of the
/// element-wise comparisons).
///
/// ## Layout
///
/// Elements live in a single contiguous `Vec<A>`. The *strides* are always
/// the row-major strides of the shape: the last axis has stride 1, and the
/// stride of axis *i* is the product of the lengths of all the axes after it.
/// The number of elements always equals the product of the shape; a
/// zero-dimensional array holds exactly one element.
///
/// ## Ownership
///
/// Every array owns its buffer exclusively. Slicing ([`.slice()`],
/// [`.fancy_slice()`]) and reshaping ([`.reshape()`]) return a new array with
/// copied elements; there are no views sharing storage. Methods taking
/// `&mut self` (element set, slice set, `+=` and the `_inplace` methods)
/// write into the existing buffer without reallocating it, so every later
/// read of that array observes the new values.
///
/// [`.slice()`]: NdArray::slice
/// [`.fancy_slice()`]: NdArray::fancy_slice
/// [`.reshape()`]: NdArray::reshape
#[derive(Clone)]
pub struct NdArray<A> {
    data: Vec<A>,
    shape: Vec<Ix>,
    strides: Vec<Ix>,
}

impl<A> NdArray<A> {
    /// Build an array from parts that are already known to agree.
    #[inline]
    pub(crate) fn from_parts_unchecked(shape: Vec<Ix>, data: Vec<A>) -> Self {
        debug_assert_eq!(dimension::size_of_shape(&shape), data.len());
        let strides = dimension::default_strides(&shape);
        NdArray {
            data,
            shape,
            strides,
        }
    }
}
