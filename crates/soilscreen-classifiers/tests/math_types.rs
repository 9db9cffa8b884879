//! Integration tests for the lightweight matrix type.

use soilscreen_classifiers::math::Array2;

#[test]
fn from_shape_vec_valid() {
    let m = Array2::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert_eq!(m.shape(), (2, 3));
}

#[test]
fn from_shape_vec_wrong_length_errors() {
    let result = Array2::from_shape_vec((2, 3), vec![1.0, 2.0]);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid shape"));
}

#[test]
fn row_slice_and_indexing_agree() {
    let m = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.row_slice(0), &[1.0, 2.0]);
    assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}
