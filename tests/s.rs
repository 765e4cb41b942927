use ndstride::prelude::*;
use ndstride::SliceRange;

use ndstride_gen::array_builder::ArrayBuilder;
use quickcheck::{quickcheck, TestResult};

#[test]
fn test_s()
{
    let a = ArrayF64::zeros([3, 4]).unwrap();
    let vi = a.slice(s![1.., ..;2]).unwrap();
    assert_eq!(vi.shape(), &[2, 2]);

    // trailing comma
    let vi = a.slice(s![1.., ..;2, ]).unwrap();
    assert_eq!(vi.shape(), &[2, 2]);
}

#[test]
fn rows_and_cols_of_three_by_four()
{
    let a = ArrayBuilder::new([3, 4]).build::<f64>();
    let b = a.slice([Slice::new(0, 2, 1), Slice::new(1, 3, 1)]).unwrap();
    let expected = ArrayF64::from_vec([3, 3], vec![1., 2., 3., 5., 6., 7., 9., 10., 11.]).unwrap();
    assert_eq!(b, expected);
    assert_eq!(a.slice(s![0..=2, 1..=3]).unwrap(), expected);
    assert_eq!(a.slice(s![.., 1..]).unwrap(), expected);
}

#[test]
fn fancy_rows_with_range_cols()
{
    let a = ArrayBuilder::new([10, 10]).build::<f64>();
    for cols in &[fancy![..], fancy![1..10;2], fancy![[4, 0]]] {
        let info = [FancyIndex::from([0, 3, 7]), cols[0].clone()];
        let b = a.fancy_slice(&info).unwrap();
        assert_eq!(b.shape()[0], 3);
        let first_col = b.slice(s![.., 0]).unwrap();
        let c0 = first_col.as_slice()[0];
        assert_eq!(first_col.as_slice(), &[c0, c0 + 30., c0 + 70.]);
    }

    let v = ArrayBuilder::new(10).build::<f32>();
    assert_eq!(v.fancy_slice(fancy![[0, 3, 7]]).unwrap().as_slice(), &[0., 3., 7.]);
    assert_eq!(v.fancy_slice(fancy![[7, 3, 0]]).unwrap().as_slice(), &[7., 3., 0.]);
}

#[test]
fn fancy_set_writes_back()
{
    let mut a = ArrayF32::zeros([4, 3]).unwrap();
    let ones = ArrayF32::ones([2, 2]).unwrap();
    a.fancy_slice_set(fancy![[3, 0], 1..], &ones).unwrap();
    assert_eq!(a.row(0).unwrap().as_slice(), &[0., 1., 1.]);
    assert_eq!(a.row(1).unwrap().as_slice(), &[0., 0., 0.]);
    assert_eq!(a.row(3).unwrap().as_slice(), &[0., 1., 1.]);
    let err = a.fancy_slice_set(fancy![[3, 0]], &ones).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn empty_selection_is_not_an_error()
{
    let a = ArrayBuilder::new([3, 4]).build::<f64>();
    let b = a.slice(s![2..2, ..]).unwrap();
    assert_eq!(b.shape(), &[0, 4]);
    assert!(b.is_empty());
    let c = a.slice([Slice::new(0, 2, -1)]).unwrap();
    assert_eq!(c.shape(), &[0, 4]);
}

#[test]
fn zero_step_fails_on_every_axis()
{
    for rank in 1..5 {
        let a = ArrayF64::zeros(vec![2usize; rank]).unwrap();
        for axis in 0..rank {
            let mut info = vec![Slice::full(); rank];
            info[axis] = Slice::new(0, 1, 0);
            assert_eq!(a.slice(&info).unwrap_err().kind(), ErrorKind::InvalidArgument);
            let mut fancy_info = vec![FancyIndex::from(..); rank];
            fancy_info[axis] = FancyIndex::Range(Slice::new(0, 1, 0));
            assert_eq!(a.fancy_slice(&fancy_info).unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}

#[test]
fn out_of_range_bounds()
{
    let a = ArrayF64::zeros([3, 4]).unwrap();
    assert_eq!(a.slice([Slice::new(0, 3, 1)]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(a.slice([Slice::new(-4, 0, 1)]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(a.fancy_slice(fancy![[0, 3]]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(a.slice(s![.., .., ..]).unwrap_err().kind(), ErrorKind::InvalidArgument);

    // a start outside the axis fails even when the step points away from the stop
    let v = ArrayBuilder::new(5).build::<f64>();
    assert_eq!(v.slice([Slice::new(7, 2, 1)]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(v.slice([Slice::new(-100, 2, -1)]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    let err = v.fancy_slice([FancyIndex::Range(Slice::new(9, 0, 1))]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(v.slice(s![5..]).unwrap().len(), 0);
}

#[test]
fn parse_python_notation()
{
    let a = ArrayBuilder::new(6).build::<f64>();
    let reversed: Slice = "::-1".parse().unwrap();
    assert_eq!(a.slice([reversed]).unwrap().as_slice(), &[5., 4., 3., 2., 1., 0.]);
    let odd: Slice = "1::2".parse().unwrap();
    assert_eq!(a.slice([odd]).unwrap().as_slice(), &[1., 3., 5.]);
}

/// Axis lengths from `seed`, rank one to three, each axis one to four long.
fn shape_of(seed: &[u8]) -> Vec<usize>
{
    let mut shape: Vec<usize> = seed.iter().take(3).map(|&d| d as usize % 4 + 1).collect();
    if shape.is_empty() {
        shape.push(3);
    }
    shape
}

/// A valid inclusive slice of an axis of length `n`, stepping towards `stop`.
fn slice_of(n: usize, seed: (u8, u8, u8)) -> Slice
{
    let start = seed.0 as isize % n as isize;
    let stop = seed.1 as isize % n as isize;
    let step = seed.2 as isize % n as isize + 1;
    Slice::new(start, stop, if stop < start { -step } else { step })
}

fn slices_of(shape: &[usize], seeds: &[(u8, u8, u8)]) -> Vec<Slice>
{
    shape
        .iter()
        .enumerate()
        .map(|(i, &n)| slice_of(n, seeds.get(i).cloned().unwrap_or((0, 255, 0))))
        .collect()
}

quickcheck! {
    fn slice_round_trip(shape_seed: Vec<u8>, seeds: Vec<(u8, u8, u8)>) -> bool {
        let shape = shape_of(&shape_seed);
        let info = slices_of(&shape, &seeds);
        let mut a = ArrayBuilder::new(shape).build::<f64>();
        let read = a.slice(&info).unwrap();
        a.slice_set(&info, &read).unwrap();
        a.slice(&info).unwrap() == read
    }

    fn slice_length_formula(n: u8, seed: (u8, u8, u8)) -> bool {
        let n = n as usize % 16 + 1;
        let s = slice_of(n, seed);
        let (start, stop) = (s.start.unwrap(), s.end.unwrap());
        let SliceRange { len, .. } = s.normalize(n).unwrap();
        let a = ArrayBuilder::new(n).build::<f32>();
        let expected = ((stop - start).abs() / s.step.abs()) as usize + 1;
        len == expected && a.slice([s]).unwrap().len() == expected
    }

    fn negative_start_counts_from_the_back(n: u8, stop: u8) -> bool {
        let n = n as isize % 16 + 1;
        let stop = stop as isize % n;
        let a = ArrayBuilder::new(n as usize).build::<f64>();
        let from_back = a.slice([Slice::new(-1, stop, -1)]).unwrap();
        let from_front = a.slice([Slice::new(n - 1, stop, -1)]).unwrap();
        from_back == from_front && from_back.as_slice()[0] == (n - 1) as f64
    }

    fn reshape_round_trip(shape_seed: Vec<u8>) -> TestResult {
        let shape = shape_of(&shape_seed);
        let a = ArrayBuilder::new(shape.clone()).build::<f64>();
        let flat = match a.reshape(a.len()) {
            Ok(flat) => flat,
            Err(_) => return TestResult::failed(),
        };
        let back = flat.reshape(shape).unwrap();
        TestResult::from_bool(back == a && flat.as_slice() == a.as_slice())
    }
}
