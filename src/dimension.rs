// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride metadata helpers.
//!
//! Shapes are plain `usize` sequences and strides are always the row-major
//! strides of a shape, counted in elements.

use itertools::izip;

use crate::error::{incompatible_shapes, out_of_bounds, with_detail, ArrayError, ErrorKind};
use crate::utils;
use crate::{Ix, Ixs};

/// Argument conversion into an array shape.
///
/// Implemented for unsigned shapes, which are always valid, and for signed
/// shapes, which fail with `InvalidShape` if any dimension is negative.
pub trait IntoShape {
    /// Convert `self` into a shape.
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError>;
}

impl IntoShape for Vec<Ix> {
    #[inline]
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
        Ok(self)
    }
}

impl<'a> IntoShape for &'a [Ix] {
    #[inline]
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
        Ok(self.to_vec())
    }
}

impl<'a> IntoShape for &'a Vec<Ix> {
    #[inline]
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
        Ok(self.clone())
    }
}

impl<const N: usize> IntoShape for [Ix; N] {
    #[inline]
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
        Ok(self.to_vec())
    }
}

impl IntoShape for Ix {
    #[inline]
    fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
        Ok(vec![self])
    }
}

macro_rules! impl_signed_shape {
    ($($ity:ty),*) => {
        $(
        impl<'a> IntoShape for &'a [$ity] {
            fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
                self.iter()
                    .map(|&d| {
                        if d < 0 {
                            Err(with_detail(ErrorKind::InvalidShape,
                                            format_args!("negative dimension in {:?}", self)))
                        } else {
                            Ok(d as Ix)
                        }
                    })
                    .collect()
            }
        }

        impl IntoShape for Vec<$ity> {
            fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
                (&self[..]).into_shape()
            }
        }

        impl<const N: usize> IntoShape for [$ity; N] {
            fn into_shape(self) -> Result<Vec<Ix>, ArrayError> {
                (&self[..]).into_shape()
            }
        }
        )*
    }
}

impl_signed_shape!(isize, i64, i32);

/// Number of elements of `shape`; the empty shape has one element.
#[inline]
pub fn size_of_shape(shape: &[Ix]) -> usize {
    shape.iter().product()
}

/// Number of elements of `shape`, or `InvalidShape` on overflow.
pub fn size_of_shape_checked(shape: &[Ix]) -> Result<usize, ArrayError> {
    shape
        .iter()
        .try_fold(1usize, |s, &d| s.checked_mul(d))
        .filter(|&s| s <= isize::MAX as usize)
        .ok_or_else(|| with_detail(ErrorKind::InvalidShape, format_args!("{:?} is too large", shape)))
}

/// Compute the row-major strides of `shape`.
///
/// Shape (a, b, c) => strides (b * c, c, 1)
pub fn default_strides(shape: &[Ix]) -> Vec<Ix> {
    let mut strides = vec![0; shape.len()];
    let mut cum_prod = 1;
    for (s, &d) in strides.iter_mut().zip(shape).rev() {
        *s = cum_prod;
        cum_prod *= d;
    }
    strides
}

/// Resolve a possibly negative index against an axis of length `len`.
///
/// Negative indices count from the back of the axis.
#[inline]
pub fn abs_index(len: Ix, index: Ixs) -> Result<Ix, ArrayError> {
    let i = if index < 0 { len as isize + index } else { index };
    if i < 0 || i >= len as isize {
        Err(out_of_bounds(index, len))
    } else {
        Ok(i as Ix)
    }
}

/// Compute the flat offset of a full, signed index into an array of `shape`.
pub fn offset_of(shape: &[Ix], strides: &[Ix], index: &[Ixs]) -> Result<usize, ArrayError> {
    if index.len() != shape.len() {
        return Err(with_detail(
            ErrorKind::InvalidArgument,
            format_args!("{} indices for an array of rank {}", index.len(), shape.len()),
        ));
    }
    let mut offset = 0;
    for (&d, &s, &i) in izip!(shape, strides, index) {
        offset += abs_index(d, i)? * s;
    }
    Ok(offset)
}

/// Convert a flat row-major position into the index of each axis.
pub fn unravel_index(shape: &[Ix], mut pos: usize) -> Vec<Ix> {
    let mut index = vec![0; shape.len()];
    for (i, &d) in index.iter_mut().zip(shape).rev() {
        if d != 0 {
            *i = pos % d;
            pos /= d;
        }
    }
    index
}

/// Calculate the common shape for a pair of array shapes, that they can be
/// broadcasted to. Return an error if the shapes are not compatible.
///
/// Shapes are aligned from the trailing axis; an axis of length 1 stretches
/// to the length of the other operand's axis.
pub fn co_broadcast(shape1: &[Ix], shape2: &[Ix]) -> Result<Vec<Ix>, ArrayError> {
    let (s1, s2) = utils::align(shape1, shape2, 1, true);
    let mut out = s1.clone();
    for (out, &d2) in out.iter_mut().zip(&s2) {
        if *out != d2 {
            if *out == 1 {
                *out = d2
            } else if d2 != 1 {
                return Err(incompatible_shapes(shape1, shape2));
            }
        }
    }
    Ok(out)
}

/// Return the strides to use to read an array of `shape` as if it had the
/// (larger or equal) shape `to`.
///
/// Stretched axes get stride zero; leading axes missing from `shape` too.
pub fn broadcast_strides(shape: &[Ix], to: &[Ix]) -> Result<Vec<Ix>, ArrayError> {
    if shape.len() > to.len() {
        return Err(incompatible_shapes(shape, to));
    }
    let padded = utils::resize(shape, to.len(), 1, true);
    let strides = default_strides(&padded);
    let mut out = Vec::with_capacity(to.len());
    for (&d, &s, &t) in izip!(&padded, &strides, to) {
        if d == t {
            out.push(s);
        } else if d == 1 {
            out.push(0);
        } else {
            return Err(incompatible_shapes(shape, to));
        }
    }
    Ok(out)
}

/// Check that `axis` is valid for an array of rank `ndim`.
#[inline]
pub fn check_axis(axis: usize, ndim: usize) -> Result<(), ArrayError> {
    if axis < ndim {
        Ok(())
    } else {
        Err(with_detail(
            ErrorKind::InvalidArgument,
            format_args!("axis {} for an array of rank {}", axis, ndim),
        ))
    }
}

/// Check that two shapes have the same number of elements.
pub fn check_same_size(from: &[Ix], to: &[Ix]) -> Result<(), ArrayError> {
    if size_of_shape(from) == size_of_shape_checked(to)? {
        Ok(())
    } else {
        Err(incompatible_shapes(from, to))
    }
}
