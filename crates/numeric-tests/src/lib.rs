// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random arrays for the accuracy tests.

use ndstride::{IntoShape, NdArray, NdElement};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// An array of shape `shape` with standard normal real parts (and, for
/// complex kinds, no imaginary part), drawn from `rng`.
pub fn gen_normal<A, Sh, R>(shape: Sh, rng: &mut R) -> NdArray<A>
where
    A: NdElement,
    A::Real: From<f32>,
    Sh: IntoShape,
    R: Rng + ?Sized,
{
    NdArray::from_shape_fn(shape, |_| {
        let x: f32 = StandardNormal.sample(rng);
        A::from_real(x.into())
    })
    .unwrap_or_else(|e| panic!("gen_normal: {}", e))
}

/// A square matrix of order `n` that is diagonally dominant, hence regular.
pub fn gen_regular<A, R>(n: usize, rng: &mut R) -> NdArray<A>
where
    A: NdElement,
    A::Real: From<f32>,
    R: Rng + ?Sized,
{
    let mut a = gen_normal::<A, _, _>([n, n], rng);
    let shift = A::from_usize(2 * n + 1);
    for i in 0..n {
        a[[i, i]] += shift;
    }
    a
}
