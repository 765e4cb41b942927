// Copyright 2014-2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{check_axis, size_of_shape, size_of_shape_checked};
use crate::error::{incompatible_shapes, with_detail, ArrayError, ErrorKind};
use crate::NdArray;

/// Concatenate arrays along the given axis.
///
/// ***Errors*** if the arrays have mismatching shapes, apart from along `axis`.
/// (may be made more flexible in the future).<br>
/// ***Errors*** if `arrays` is empty, if `axis` is out of bounds,
/// if the result is larger than is possible to represent.
///
/// ```
/// use ndstride::{concatenate, ArrayF64};
///
/// let a = ArrayF64::from_vec([2, 2], vec![2., 2., 3., 3.]).unwrap();
/// let b = ArrayF64::from_vec([1, 2], vec![4., 4.]).unwrap();
/// let c = concatenate(0, &[&a, &b]).unwrap();
/// assert_eq!(c.as_slice(), &[2., 2., 3., 3., 4., 4.]);
/// assert!(concatenate(1, &[&a, &b]).is_err());
/// ```
pub fn concatenate<A>(axis: usize, arrays: &[&NdArray<A>]) -> Result<NdArray<A>, ArrayError>
where
    A: Clone,
{
    let first = match arrays.first() {
        Some(first) => first,
        None => return Err(with_detail(ErrorKind::InvalidArgument, "no arrays to concatenate")),
    };
    check_axis(axis, first.ndim())?;
    let mut res_shape = first.shape().to_vec();
    res_shape[axis] = 0;
    for array in arrays {
        let compatible = array.ndim() == first.ndim()
            && array
                .shape()
                .iter()
                .zip(first.shape())
                .enumerate()
                .all(|(i, (a, b))| i == axis || a == b);
        if !compatible {
            return Err(incompatible_shapes(first.shape(), array.shape()));
        }
        res_shape[axis] += array.shape()[axis];
    }
    let size = size_of_shape_checked(&res_shape)?;

    // Every array contributes one contiguous chunk per index of the axes
    // before `axis`.
    let outer = size_of_shape(&res_shape[..axis]);
    let mut v = Vec::with_capacity(size);
    for i in 0..outer {
        for array in arrays {
            let chunk = size_of_shape(&array.shape()[axis..]);
            v.extend_from_slice(&array.as_slice()[i * chunk..(i + 1) * chunk]);
        }
    }
    Ok(NdArray::from_parts_unchecked(res_shape, v))
}

/// Concatenate two arrays along the first axis (stack rows).
pub fn concat_vertical<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError>
where
    A: Clone,
{
    concatenate(0, &[a, b])
}

/// Concatenate two arrays along the second axis (stack columns).
///
/// ***Errors*** with `InvalidArgument` for arrays of rank less than two.
pub fn concat_horizontal<A>(a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError>
where
    A: Clone,
{
    concatenate(1, &[a, b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayF32;

    #[test]
    fn vertical_and_horizontal() {
        let a = ArrayF32::sequential([2, 2], 0., 1.).unwrap();
        let b = ArrayF32::sequential([2, 1], 10., 1.).unwrap();
        let h = concat_horizontal(&a, &b).unwrap();
        assert_eq!(h.shape(), &[2, 3]);
        assert_eq!(h.as_slice(), &[0., 1., 10., 2., 3., 11.]);
        let err = concat_vertical(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        let v = concat_vertical(&a, &a).unwrap();
        assert_eq!(v.shape(), &[4, 2]);
    }

    #[test]
    fn rank_and_axis_errors() {
        let a = ArrayF32::zeros(3).unwrap();
        assert_eq!(concat_horizontal(&a, &a).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(concat_vertical(&a, &a).unwrap().len(), 6);
        let m = ArrayF32::zeros([3, 1]).unwrap();
        assert_eq!(concat_vertical(&a, &m).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        assert_eq!(concatenate::<f32>(0, &[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn middle_axis() {
        let a = ArrayF32::zeros([2, 1, 2]).unwrap();
        let b = ArrayF32::ones([2, 2, 2]).unwrap();
        let c = concatenate(1, &[&a, &b]).unwrap();
        assert_eq!(c.shape(), &[2, 3, 2]);
        assert_eq!(c.as_slice(), &[0., 0., 1., 1., 1., 1., 0., 0., 1., 1., 1., 1.]);
    }
}
