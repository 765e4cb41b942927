// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndstride::{IntoShape, NdArray, NdElement};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    shape: Vec<usize>,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// `0, 1, 2, ...` in row-major order
    Sequential,
    /// `n - 1, n - 2, ..., 0` in row-major order
    Reversed,
    Zero,
    /// ones on the diagonal of the first two axes, zero elsewhere
    Identity,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        ArrayBuilder {
            shape: vec![1],
            generator: ElementGenerator::Sequential,
        }
    }
}

impl ArrayBuilder
{
    /// Panics if `shape` has a negative dimension.
    pub fn new<Sh: IntoShape>(shape: Sh) -> Self
    {
        let shape = shape.into_shape().unwrap();
        ArrayBuilder {
            shape,
            ..Self::default()
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> NdArray<T>
    where T: NdElement
    {
        let size: usize = self.shape.iter().product();
        match self.generator {
            ElementGenerator::Sequential => NdArray::sequential(self.shape, T::zero(), T::one()),
            ElementGenerator::Reversed => {
                let start = T::from_usize(size) - T::one();
                NdArray::sequential(self.shape, start, -T::one())
            }
            ElementGenerator::Zero => NdArray::zeros(self.shape),
            ElementGenerator::Identity => NdArray::from_shape_fn(self.shape, |ix| {
                if ix.len() < 2 || ix[0] == ix[1] {
                    T::one()
                } else {
                    T::zero()
                }
            }),
        }
        .unwrap()
    }
}

#[test]
fn test_generators()
{
    let (m, n) = (3, 4);
    let s = ArrayBuilder::new([m, n]).build::<f64>();
    let r = ArrayBuilder::new([m, n])
        .generator(ElementGenerator::Reversed)
        .build::<f64>();
    assert_eq!(s.shape(), &[m, n]);
    assert_eq!(s.strides(), &[n, 1]);
    assert_eq!(s.as_slice()[m * n - 1], 11.);
    assert_eq!(r.as_slice()[0], 11.);
    assert_eq!(r.as_slice()[m * n - 1], 0.);

    let eye = ArrayBuilder::new([3, 3])
        .generator(ElementGenerator::Identity)
        .build::<f32>();
    assert_eq!(eye, NdArray::<f32>::eye(3));
    let z = ArrayBuilder::new(0)
        .generator(ElementGenerator::Zero)
        .build::<f32>();
    assert!(z.is_empty());
}
