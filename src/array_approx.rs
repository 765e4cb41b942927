// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementations of the `approx` traits.
//!
//! **Requires crate feature `"approx"`**

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::NdArray;

impl<A> NdArray<A> {
    /// A test for equality that uses the elementwise absolute difference to compute the
    /// approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
    {
        <Self as AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if the values are far
    /// apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq<B>(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
    {
        <Self as RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// Arrays of different shapes are never approximately equal.
impl<A, B> AbsDiffEq<NdArray<B>> for NdArray<A>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// Arrays of different shapes are never approximately equal.
impl<A, B> RelativeEq<NdArray<B>> for NdArray<A>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}

/// Arrays of different shapes are never approximately equal.
impl<A, B> UlpsEq<NdArray<B>> for NdArray<A>
where
    A: UlpsEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        A::default_max_ulps()
    }

    fn ulps_eq(&self, other: &NdArray<B>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        assert_ulps_ne,
    };

    #[test]
    fn abs_diff_eq() {
        let a = ArrayF32::from_vec([2, 2], vec![0., 2., -0.000010001, 100000000.]).unwrap();
        let mut b = ArrayF32::from_vec([2, 2], vec![0., 1., -0.000010002, 100000001.]).unwrap();
        assert_abs_diff_ne!(a, b);
        b[[0, 1]] = 2.;
        assert_abs_diff_eq!(a, b);

        // Check epsilon.
        assert_abs_diff_eq!(ArrayF32::from_vec1(vec![0.0]), ArrayF32::from_vec1(vec![1e-40]), epsilon = 1e-40);
        assert_abs_diff_ne!(ArrayF32::from_vec1(vec![0.0]), ArrayF32::from_vec1(vec![1e-40]), epsilon = 1e-41);

        // Make sure we can compare different shapes without failure.
        let c = ArrayF32::from_vec1(vec![1., 2.]);
        assert_abs_diff_ne!(a, c);
        assert!(a.abs_diff_eq(&b, 1e-6));
    }

    #[test]
    fn relative_eq() {
        let a = ArrayF32::from_vec1(vec![1., -1000000., -0.000010001, 100000000.]);
        let mut b = ArrayF32::from_vec1(vec![1., -1000001., -0.000010002, 100000001.]);
        assert_relative_ne!(a, b);
        b[[0]] = 1.;
        assert_relative_eq!(a, b);
        assert!(a.relative_eq(&b, 1e-6, 1e-6));

        let c = ArrayF32::from_vec([2, 2], vec![1., 2., 3., 4.]).unwrap();
        assert_relative_ne!(a, c);
    }

    #[test]
    fn ulps_eq() {
        let a = ArrayF64::from_vec1(vec![1., -1000000., -0.000010001, 100000000.]);
        let mut b = ArrayF64::from_vec1(vec![1., -1000000., -0.000010001, 100000000.]);
        assert_ulps_eq!(a, b);
        b[[3]] = 100000001.;
        assert_ulps_ne!(a, b);
    }
}
