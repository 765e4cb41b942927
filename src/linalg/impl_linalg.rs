// Copyright 2014-2020 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::TypeId;

use num_complex::Complex;

use crate::error::{incompatible_shapes, with_detail, ArrayError, ErrorKind};
use crate::{c32, c64, NdArray, NdElement};

/// # Matrix Product
impl<A> NdArray<A>
where
    A: NdElement,
{
    /// Perform matrix multiplication of rectangular arrays `self` and `rhs`.
    ///
    /// `self` is an *m* × *k* matrix and `rhs` a *k* × *n* matrix; the result
    /// is *m* × *n*.
    ///
    /// A one-dimensional `self` is treated as a row vector (1 × *k*) and a
    /// one-dimensional `rhs` as a column vector (*k* × 1); the vector axes are
    /// dropped from the result, so that vector · vector is a
    /// zero-dimensional array holding the inner product.
    ///
    /// The product uses the `matrixmultiply` kernels for all four element
    /// kinds.
    ///
    /// **Errors** with `DimensionMismatch` if the inner dimensions differ,
    /// and with `InvalidArgument` if an operand has rank 0 or more than 2.
    ///
    /// ```
    /// use ndstride::ArrayF64;
    ///
    /// let a = ArrayF64::from_vec([2, 2], vec![1., 2., 0., 1.]).unwrap();
    /// let b = ArrayF64::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap().as_slice(), &[7., 10., 3., 4.]);
    /// ```
    pub fn dot(&self, rhs: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        let ((m, k), lhs_vector) = match *self.shape() {
            [k] => ((1, k), true),
            [m, k] => ((m, k), false),
            _ => return Err(not_a_matrix(self.shape())),
        };
        let ((k2, n), rhs_vector) = match *rhs.shape() {
            [k2] => ((k2, 1), true),
            [k2, n] => ((k2, n), false),
            _ => return Err(not_a_matrix(rhs.shape())),
        };
        if k != k2 {
            return Err(incompatible_shapes(self.shape(), rhs.shape()));
        }
        let mut c = vec![A::zero(); m * n];
        mat_mul_impl(m, k, n, self.as_slice(), rhs.as_slice(), &mut c);
        let mut shape = Vec::with_capacity(2);
        if !lhs_vector {
            shape.push(m);
        }
        if !rhs_vector {
            shape.push(n);
        }
        Ok(NdArray::from_parts_unchecked(shape, c))
    }
}

fn not_a_matrix(shape: &[usize]) -> ArrayError {
    with_detail(
        ErrorKind::InvalidArgument,
        format_args!("matrix product of an array of shape {:?}", shape),
    )
}

/// C ← A B for row-major `a` (m × k), `b` (k × n) and zeroed `c` (m × n).
fn mat_mul_impl<A>(m: usize, k: usize, n: usize, a: &[A], b: &[A], c: &mut [A])
where
    A: NdElement,
{
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);
    if m == 0 || n == 0 || k == 0 {
        return;
    }

    // common parameters for gemm
    let ap = a.as_ptr();
    let bp = b.as_ptr();
    let cp = c.as_mut_ptr();
    let (rsa, csa) = (k as isize, 1);
    let (rsb, csb) = (n as isize, 1);
    let (rsc, csc) = (n as isize, 1);
    if same_type::<A, f32>() {
        unsafe {
            matrixmultiply::sgemm(m, k, n, 1., ap as *const _, rsa, csa, bp as *const _, rsb, csb, 0., cp as *mut _, rsc, csc);
        }
    } else if same_type::<A, f64>() {
        unsafe {
            matrixmultiply::dgemm(m, k, n, 1., ap as *const _, rsa, csa, bp as *const _, rsb, csb, 0., cp as *mut _, rsc, csc);
        }
    } else if same_type::<A, c32>() {
        unsafe {
            matrixmultiply::cgemm(
                matrixmultiply::CGemmOption::Standard,
                matrixmultiply::CGemmOption::Standard,
                m,
                k,
                n,
                complex_array(c32::new(1., 0.)),
                ap as *const _,
                rsa,
                csa,
                bp as *const _,
                rsb,
                csb,
                complex_array(c32::new(0., 0.)),
                cp as *mut _,
                rsc,
                csc,
            );
        }
    } else if same_type::<A, c64>() {
        unsafe {
            matrixmultiply::zgemm(
                matrixmultiply::CGemmOption::Standard,
                matrixmultiply::CGemmOption::Standard,
                m,
                k,
                n,
                complex_array(c64::new(1., 0.)),
                ap as *const _,
                rsa,
                csa,
                bp as *const _,
                rsb,
                csb,
                complex_array(c64::new(0., 0.)),
                cp as *mut _,
                rsc,
                csc,
            );
        }
    } else {
        for i in 0..m {
            for l in 0..k {
                let ail = a[i * k + l];
                for (cij, &blj) in c[i * n..(i + 1) * n].iter_mut().zip(&b[l * n..(l + 1) * n]) {
                    *cij += ail * blj;
                }
            }
        }
    }
}

#[inline(always)]
/// Return `true` if `A` and `B` are the same type
fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Return the complex in the form of an array [re, im]
#[inline]
fn complex_array<A: 'static + Copy>(z: Complex<A>) -> [A; 2] {
    [z.re, z.im]
}
