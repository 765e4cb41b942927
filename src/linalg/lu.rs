// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{Float, Zero};

use super::{square_order, LinalgBackend};
use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{NdArray, NdElement};

/// The default [`LinalgBackend`]: LU decomposition with partial pivoting.
///
/// A matrix is reported `Singular` when a pivot is not larger than the
/// machine epsilon times the order times the largest magnitude in the
/// matrix.
#[derive(Copy, Clone, Debug, Default)]
pub struct LuBackend;

/// `P a = L U`, packed: the strict lower triangle holds `L` (its unit
/// diagonal is implicit), the upper triangle holds `U`.
struct Lu<A> {
    lu: Vec<A>,
    perm: Vec<usize>,
    n: usize,
}

impl<A: NdElement> Lu<A> {
    fn decompose(a: &NdArray<A>) -> Result<Self, ArrayError> {
        let n = square_order(a)?;
        let mut lu = a.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let scale = lu
            .iter()
            .map(|x| x.magnitude())
            .fold(A::Real::zero(), Float::max);
        let tol = A::Real::epsilon() * <A::Real as NdElement>::from_usize(n) * scale;

        for k in 0..n {
            let (max_row, max_val) = (k..n)
                .map(|i| (i, lu[i * n + k].magnitude()))
                .fold((k, A::Real::zero()), |best, cur| if cur.1 > best.1 { cur } else { best });
            if !(max_val > tol) {
                return Err(with_detail(
                    ErrorKind::Singular,
                    format_args!("zero pivot in column {}", k),
                ));
            }
            if max_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                perm.swap(k, max_row);
            }

            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let ukj = lu[k * n + j];
                    lu[i * n + j] -= factor * ukj;
                }
            }
        }
        Ok(Lu { lu, perm, n })
    }

    /// Solve for `r` right hand sides stored row-major in `b` (n × r).
    fn solve_in_place(&self, b: &[A], r: usize) -> Vec<A> {
        let n = self.n;
        let mut x = Vec::with_capacity(n * r);
        for &p in &self.perm {
            x.extend_from_slice(&b[p * r..(p + 1) * r]);
        }
        // forward substitution, L y = P b
        for i in 1..n {
            for j in 0..i {
                let lij = self.lu[i * n + j];
                for c in 0..r {
                    let xj = x[j * r + c];
                    x[i * r + c] -= lij * xj;
                }
            }
        }
        // back substitution, U x = y
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij = self.lu[i * n + j];
                for c in 0..r {
                    let xj = x[j * r + c];
                    x[i * r + c] -= uij * xj;
                }
            }
            let uii = self.lu[i * n + i];
            for c in 0..r {
                x[i * r + c] /= uii;
            }
        }
        x
    }
}

impl<A: NdElement> LinalgBackend<A> for LuBackend {
    fn inv(&self, a: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        let lu = Lu::decompose(a)?;
        let eye = NdArray::<A>::eye(lu.n);
        let x = lu.solve_in_place(eye.as_slice(), lu.n);
        NdArray::from_vec([lu.n, lu.n], x)
    }

    fn solve(&self, a: &NdArray<A>, b: &NdArray<A>) -> Result<NdArray<A>, ArrayError> {
        let lu = Lu::decompose(a)?;
        let r = match *b.shape() {
            [n] if n == lu.n => 1,
            [n, r] if n == lu.n => r,
            _ => {
                return Err(with_detail(
                    ErrorKind::DimensionMismatch,
                    format_args!("right hand side of shape {:?} for a matrix of order {}", b.shape(), lu.n),
                ))
            }
        };
        let x = lu.solve_in_place(b.as_slice(), r);
        NdArray::from_vec(b.shape(), x)
    }
}
