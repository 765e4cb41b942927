// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape, indexing or slicing.
///
/// Every fallible operation of the crate reports its failure synchronously
/// through this type; nothing is retried and nothing is recovered silently.
#[derive(Clone)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: Option<Box<str>>,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape, indexing or slicing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// negative, overflowing or inconsistent dimensions
    InvalidShape,
    /// an index or a normalized slice bound outside of its axis
    IndexOutOfBounds,
    /// operand shapes that can not be broadcast, concatenated or multiplied
    DimensionMismatch,
    /// the value assigned to a slice does not have the shape of the slice
    ShapeMismatch,
    /// a malformed argument, like a zero step or the wrong number of indices
    InvalidArgument,
    /// the matrix is singular
    Singular,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError {
    ArrayError { repr: k, detail: None }
}

/// Create an error of kind `k` carrying a message about the offending values.
pub(crate) fn with_detail(k: ErrorKind, detail: impl fmt::Display) -> ArrayError {
    ArrayError {
        repr: k,
        detail: Some(detail.to_string().into_boxed_str()),
    }
}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidShape => "invalid shape",
            ErrorKind::IndexOutOfBounds => "index out of bounds",
            ErrorKind::DimensionMismatch => "incompatible dimensions",
            ErrorKind::ShapeMismatch => "assigned value does not match the shape of the slice",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Singular => "matrix is singular",
        }
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail {
            Some(ref detail) => write!(f, "{}: {}", self.kind().description(), detail),
            None => f.write_str(self.kind().description()),
        }
    }
}

impl fmt::Debug for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayError/{:?}: {}", self.kind(), self)
    }
}

pub(crate) fn incompatible_shapes(a: &[usize], b: &[usize]) -> ArrayError {
    with_detail(
        ErrorKind::DimensionMismatch,
        format_args!("{:?} and {:?}", a, b),
    )
}

pub(crate) fn out_of_bounds(index: isize, len: usize) -> ArrayError {
    with_detail(
        ErrorKind::IndexOutOfBounds,
        format_args!("index {} for axis of length {}", index, len),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_compare_equal_regardless_of_detail() {
        let e = incompatible_shapes(&[2, 3], &[4]);
        assert_eq!(e, from_kind(ErrorKind::DimensionMismatch));
        assert_eq!(e.kind(), ErrorKind::DimensionMismatch);
        assert_eq!(e.to_string(), "incompatible dimensions: [2, 3] and [4]");
    }

    #[test]
    fn display_without_detail() {
        let e = from_kind(ErrorKind::Singular);
        assert_eq!(e.to_string(), "matrix is singular");
        assert!(format!("{:?}", e).contains("Singular"));
    }
}
