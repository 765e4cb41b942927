use ndstride::prelude::*;

#[test]
fn broadcast_1()
{
    let a = ArrayF64::linspace(0., 1., 32).reshape([2, 4, 2, 2]).unwrap();
    let b = ArrayF64::linspace(0., 1., 4).reshape([2, 1, 2, 1]).unwrap();
    assert!(b.broadcast_to(a.shape()).is_ok());

    let c = ArrayF64::linspace(0., 1., 2).reshape([2, 1]).unwrap();
    assert!(c.broadcast_to(1).is_err());
    assert!(c.broadcast_to(Vec::<usize>::new()).is_err());
    assert!(c.broadcast_to([2, 1]).is_ok());
    assert!(c.broadcast_to([2, 2]).is_ok());
    assert!(c.broadcast_to([32, 2, 1]).is_ok());
    assert!(c.broadcast_to([32, 1, 2]).is_err());

    // a zero-dimensional array broadcasts to anything
    let z = ArrayF32::zeros(Vec::<usize>::new()).unwrap();
    assert!(z.broadcast_to(Vec::<usize>::new()).is_ok());
    assert!(z.broadcast_to(1).is_ok());
    assert!(z.broadcast_to(3).is_ok());
    assert!(z.broadcast_to([7, 2, 9]).is_ok());
}

#[test]
fn test_add()
{
    let mut a = ArrayF64::linspace(0., 1., 32).reshape([2, 4, 2, 2]).unwrap();
    let b = ArrayF64::linspace(0., 1., 4).reshape([2, 1, 2, 1]).unwrap();
    let c = &a + &b;
    a += &b;
    assert_eq!(a, c);
    let t = NdArray::scalar(1.0);
    a += &t;
    assert!(a.approx_equal(&(c + 1.), 1e-15));
}

#[test]
#[should_panic]
fn test_add_incompat()
{
    let mut a = ArrayF64::linspace(0., 1., 16).reshape([2, 4, 2]).unwrap();
    let incompat = ArrayF64::from_elem(3, 1.).unwrap();
    a += &incompat;
}

#[test]
fn trailing_axes_align()
{
    assert_eq!(broadcast_shape(&[8, 1, 6, 1], &[7, 1, 5]).unwrap(), vec![8, 7, 6, 5]);
    assert_eq!(broadcast_shape(&[5, 4], &[1]).unwrap(), vec![5, 4]);
    assert_eq!(broadcast_shape(&[], &[3]).unwrap(), vec![3]);
    let err = broadcast_shape(&[2, 1], &[8, 4, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

    let col = ArrayF32::from_vec([3, 1], vec![0., 1., 2.]).unwrap();
    let row = ArrayF32::from_vec1(vec![10., 20.]);
    let s = col.add_checked(&row).unwrap();
    assert_eq!(s.shape(), &[3, 2]);
    assert_eq!(s.as_slice(), &[10., 20., 11., 21., 12., 22.]);
    assert_eq!(row + &col, s);
}
