// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension::unravel_index;
use crate::NdArray;

fn format_array<A, F>(array: &NdArray<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let shape = array.shape();
    let ndim = shape.len();
    let mut last_index = vec![0; ndim];
    for _ in 0..ndim {
        f.write_str("[")?;
    }
    let mut first = true;
    // Take the index wraparounds as cues for when to add []'s and how many
    // to add.
    for (pos, elt) in array.iter().enumerate() {
        let index = unravel_index(shape, pos);
        let take_n = if ndim == 0 { 1 } else { ndim - 1 };
        for (i, (a, b)) in index.iter().take(take_n).zip(&last_index).enumerate() {
            if a != b {
                // New row, # of ['s needed
                let n = ndim - i - 1;
                for _ in 0..n {
                    f.write_str("]")?;
                }
                f.write_str(",\n")?;
                for _ in 0..ndim - n {
                    f.write_str(" ")?;
                }
                for _ in 0..n {
                    f.write_str("[")?;
                }
                first = true;
                break;
            }
        }
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        format(elt, f)?;
        last_index = index;
    }
    for _ in 0..ndim {
        f.write_str("]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display> fmt::Display for NdArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Debug> fmt::Debug for NdArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, strides={:?}", self.shape(), self.strides())
    }
}

#[cfg(test)]
mod tests {
    use crate::NdArray;

    #[test]
    fn display_nested() {
        let a = NdArray::sequential([2, 2], 0.0f64, 1.).unwrap();
        assert_eq!(format!("{}", a), "[[0, 1],\n [2, 3]]");
        let b = NdArray::from_vec1(vec![1.5f32, 2.]);
        assert_eq!(format!("{}", b), "[1.5, 2]");
        assert_eq!(format!("{}", NdArray::scalar(3.0f64)), "3");
    }

    #[test]
    fn debug_shows_shape() {
        let a = NdArray::<f64>::zeros([1, 2]).unwrap();
        assert_eq!(format!("{:?}", a), "[[0.0, 0.0]] shape=[1, 2], strides=[2, 1]");
    }
}
