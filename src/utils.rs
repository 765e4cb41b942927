// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Helpers over homogeneous sequences.
//!
//! These are the building blocks used for shape, stride and index
//! bookkeeping. They operate on plain slices and return owned vectors.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::{with_detail, ArrayError, ErrorKind};

/// Return the indices `i` for which `f(i, &xs[i])` holds.
pub fn filteri<T, F>(xs: &[T], mut f: F) -> Vec<usize>
where
    F: FnMut(usize, &T) -> bool,
{
    xs.iter()
        .enumerate()
        .filter_map(|(i, x)| if f(i, x) { Some(i) } else { None })
        .collect()
}

/// Return the elements for which `f` holds, in order.
pub fn filter<T: Clone, F>(xs: &[T], mut f: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    xs.iter().filter(|x| f(x)).cloned().collect()
}

/// Map `f` over the elements and their positions.
pub fn mapi<T, U, F>(xs: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    xs.iter().enumerate().map(|(i, x)| f(i, x)).collect()
}

/// Map `f` over two sequences of equal length.
///
/// **Errors** with `DimensionMismatch` if the lengths differ.
pub fn map2<T, U, V, F>(xs: &[T], ys: &[U], mut f: F) -> Result<Vec<V>, ArrayError>
where
    F: FnMut(&T, &U) -> V,
{
    check_same_len(xs.len(), ys.len())?;
    Ok(xs.iter().zip(ys).map(|(x, y)| f(x, y)).collect())
}

/// Map `f` over two sequences of equal length and the positions.
pub fn map2i<T, U, V, F>(xs: &[T], ys: &[U], mut f: F) -> Result<Vec<V>, ArrayError>
where
    F: FnMut(usize, &T, &U) -> V,
{
    check_same_len(xs.len(), ys.len())?;
    Ok(xs
        .iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (x, y))| f(i, x, y))
        .collect())
}

/// Fold over two sequences of equal length.
pub fn fold2<T, U, B, F>(xs: &[T], ys: &[U], init: B, mut f: F) -> Result<B, ArrayError>
where
    F: FnMut(B, &T, &U) -> B,
{
    check_same_len(xs.len(), ys.len())?;
    Ok(xs.iter().zip(ys).fold(init, |acc, (x, y)| f(acc, x, y)))
}

/// Return `true` if `f` holds for every pair; `false` when the lengths differ.
pub fn for_all2<T, U, F>(xs: &[T], ys: &[U], mut f: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| f(x, y))
}

/// Return `true` if `f` holds for any element.
pub fn exists<T, F>(xs: &[T], f: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    xs.iter().any(f)
}

/// Return the position of the first element equal to `x`.
pub fn index_of<T: PartialEq>(xs: &[T], x: &T) -> Option<usize> {
    for (i, y) in xs.iter().enumerate() {
        if y == x {
            return Some(i);
        }
    }
    None
}

/// Truncate or extend `xs` to `len` elements.
///
/// Growing fills with `fill`; shrinking drops elements. With `head` set,
/// elements are added to or removed from the front instead of the back.
pub fn resize<T: Clone>(xs: &[T], len: usize, fill: T, head: bool) -> Vec<T> {
    let n = xs.len();
    match (len.cmp(&n), head) {
        (Ordering::Equal, _) => xs.to_vec(),
        (Ordering::Less, false) => xs[..len].to_vec(),
        (Ordering::Less, true) => xs[n - len..].to_vec(),
        (Ordering::Greater, false) => {
            let mut v = xs.to_vec();
            v.resize(len, fill);
            v
        }
        (Ordering::Greater, true) => {
            let mut v = vec![fill; len - n];
            v.extend_from_slice(xs);
            v
        }
    }
}

/// Pad the shorter of two sequences with `fill` to the length of the
/// longer one, at the front (`head`) or the back.
pub fn align<T: Clone>(xs: &[T], ys: &[T], fill: T, head: bool) -> (Vec<T>, Vec<T>) {
    let len = xs.len().max(ys.len());
    (
        resize(xs, len, fill.clone(), head),
        resize(ys, len, fill, head),
    )
}

/// Check that `perm` is a permutation of `0..len`.
pub fn is_permutation(perm: &[usize], len: usize) -> bool {
    if perm.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &p in perm {
        if p >= len || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Reorder `xs` so that element `i` of the result is `xs[perm[i]]`.
///
/// **Errors** with `InvalidArgument` if `perm` is not a permutation of the
/// positions of `xs`.
pub fn permute<T: Clone>(xs: &[T], perm: &[usize]) -> Result<Vec<T>, ArrayError> {
    if !is_permutation(perm, xs.len()) {
        return Err(with_detail(
            ErrorKind::InvalidArgument,
            format_args!("{:?} is not a permutation of {} axes", perm, xs.len()),
        ));
    }
    Ok(perm.iter().map(|&p| xs[p].clone()).collect())
}

/// Search the sorted sequence `xs` for `x`; return its position if found.
pub fn binary_search<T: PartialOrd>(xs: &[T], x: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, xs.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match xs[mid].partial_cmp(x) {
            Some(Ordering::Equal) => return Some(mid),
            Some(Ordering::Less) => lo = mid + 1,
            Some(Ordering::Greater) => hi = mid,
            None => return None,
        }
    }
    None
}

/// Sorted, deduplicated union of two sequences.
pub fn union<T: Ord + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    xs.iter()
        .chain(ys)
        .cloned()
        .sorted()
        .dedup()
        .collect()
}

/// Sorted, deduplicated elements present in both sequences.
pub fn intersect<T: Ord + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let ys = ys.iter().cloned().sorted().dedup().collect::<Vec<_>>();
    xs.iter()
        .cloned()
        .sorted()
        .dedup()
        .filter(|x| ys.binary_search(x).is_ok())
        .collect()
}

/// Sorted, deduplicated elements of `xs` not present in `ys`.
pub fn complement<T: Ord + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let ys = ys.iter().cloned().sorted().dedup().collect::<Vec<_>>();
    xs.iter()
        .cloned()
        .sorted()
        .dedup()
        .filter(|x| ys.binary_search(x).is_err())
        .collect()
}

/// Resolve a possibly negative position `i` in a sequence of length `len`.
///
/// **Errors** with `IndexOutOfBounds` unless `-len <= i < len`.
pub fn normalize_index(i: isize, len: usize) -> Result<usize, ArrayError> {
    crate::dimension::abs_index(len, i)
}

/// Return the inclusive sub-sequence `xs[start..=stop]`.
///
/// Negative positions count from the back.
///
/// **Errors** with `IndexOutOfBounds` if a position is outside of `xs`.
pub fn slice_flat<T: Clone>(xs: &[T], start: isize, stop: isize) -> Result<Vec<T>, ArrayError> {
    let a = normalize_index(start, xs.len())?;
    let b = normalize_index(stop, xs.len())?;
    if a <= b {
        Ok(xs[a..=b].to_vec())
    } else {
        Ok(Vec::new())
    }
}

fn check_same_len(a: usize, b: usize) -> Result<(), ArrayError> {
    if a == b {
        Ok(())
    } else {
        Err(with_detail(
            ErrorKind::DimensionMismatch,
            format_args!("sequences of length {} and {}", a, b),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_maps() {
        let xs = [3usize, 1, 4, 1, 5];
        assert_eq!(filteri(&xs, |_, &x| x == 1), vec![1, 3]);
        assert_eq!(filter(&xs, |&x| x > 2), vec![3, 4, 5]);
        assert_eq!(mapi(&xs, |i, &x| i * x), vec![0, 1, 8, 3, 20]);
        assert_eq!(map2(&xs, &xs, |&a, &b| a + b).unwrap(), vec![6, 2, 8, 2, 10]);
        assert!(map2(&xs, &[1usize], |&a, &b| a + b).is_err());
        assert_eq!(map2i(&[1usize, 2], &[3usize, 4], |i, &a, &b| i + a * b).unwrap(), vec![3, 9]);
        assert_eq!(fold2(&[1, 2], &[3, 4], 0, |s, &a, &b| s + a * b).unwrap(), 11);
        assert!(for_all2(&[1, 2], &[1, 2], |a, b| a == b));
        assert!(!for_all2(&[1, 2], &[1], |a, b| a == b));
        assert!(exists(&xs, |&x| x == 5));
        assert_eq!(index_of(&xs, &1), Some(1));
        assert_eq!(index_of(&xs, &9), None);
    }

    #[test]
    fn resize_head_and_tail() {
        let xs = [1, 2, 3];
        assert_eq!(resize(&xs, 5, 0, false), vec![1, 2, 3, 0, 0]);
        assert_eq!(resize(&xs, 5, 0, true), vec![0, 0, 1, 2, 3]);
        assert_eq!(resize(&xs, 2, 0, false), vec![1, 2]);
        assert_eq!(resize(&xs, 2, 0, true), vec![2, 3]);
        assert_eq!(resize(&xs, 3, 0, true), vec![1, 2, 3]);
        let (a, b) = align(&[4, 5], &[1, 2, 3], 1, true);
        assert_eq!(a, vec![1, 4, 5]);
        assert_eq!(b, vec![1, 2, 3]);
    }

    #[test]
    fn permutations() {
        assert_eq!(permute(&['a', 'b', 'c'], &[2, 0, 1]).unwrap(), vec!['c', 'a', 'b']);
        assert!(permute(&[1, 2, 3], &[0, 0, 1]).is_err());
        assert!(permute(&[1, 2, 3], &[0, 1]).is_err());
        assert!(permute(&[1, 2, 3], &[0, 1, 3]).is_err());
    }

    #[test]
    fn searching() {
        let xs = [1., 3., 5., 7.];
        assert_eq!(binary_search(&xs, &5.), Some(2));
        assert_eq!(binary_search(&xs, &4.), None);
        assert_eq!(binary_search(&[] as &[f64], &4.), None);
    }

    #[test]
    fn set_operations() {
        assert_eq!(union(&[3, 1, 3], &[2, 1]), vec![1, 2, 3]);
        assert_eq!(intersect(&[3, 1, 3, 4], &[4, 3, 9]), vec![3, 4]);
        assert_eq!(complement(&[3, 1, 3, 4], &[4]), vec![1, 3]);
    }

    #[test]
    fn negative_positions() {
        assert_eq!(normalize_index(-1, 4).unwrap(), 3);
        assert_eq!(normalize_index(-4, 4).unwrap(), 0);
        assert_eq!(normalize_index(2, 4).unwrap(), 2);
        assert_eq!(normalize_index(4, 4).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
        assert!(normalize_index(-5, 4).is_err());
    }

    #[test]
    fn flat_slices() {
        let xs = [0usize, 1, 2, 3, 4];
        assert_eq!(slice_flat(&xs, 1, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(slice_flat(&xs, -2, -1).unwrap(), vec![3, 4]);
        assert_eq!(slice_flat(&xs, 3, 1).unwrap(), Vec::<usize>::new());
        assert_eq!(
            slice_flat(&xs, 0, 5).unwrap_err().kind(),
            ErrorKind::IndexOutOfBounds
        );
    }
}
