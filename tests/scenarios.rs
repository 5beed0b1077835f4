use tabula::linalg::{
    cross, dot, vec3, Augmented, LinalgError, Mat2d, Mat3d, Matrix, MatrixExpr, MatrixMut,
    MatrixN, Product, Shape, Sum, Vec3d,
};

fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

#[test]
fn identity() -> anyhow::Result<()> {
    init();
    #[rustfmt::skip]
    let mat = Mat3d::from_row_major([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);
    assert_eq!(mat, Mat3d::IDENTITY);
    assert_eq!(mat.determinant()?, 1.0);
    assert_eq!(mat.trace()?, 3.0);
    assert_eq!(mat.inverse()?, Mat3d::IDENTITY);
    Ok(())
}

#[test]
fn singular() {
    init();
    #[rustfmt::skip]
    let mat = Mat2d::from_rows([
        [1.0, 2.0],
        [2.0, 4.0],
    ]);
    assert_eq!(mat.determinant(), Ok(0.0));
    let err = mat.inverse().unwrap_err();
    assert_eq!(err, LinalgError::SingularMatrix);
    assert_eq!(err.to_string(), "this matrix cannot be inverted");

    let heap = mat.to_matrix_n();
    assert_eq!(heap.inverse().unwrap_err(), LinalgError::SingularMatrix);
}

#[test]
fn swap() -> anyhow::Result<()> {
    init();
    #[rustfmt::skip]
    let mat = Mat2d::from_rows([
        [0.0, 1.0],
        [1.0, 0.0],
    ]);
    assert_eq!(mat.determinant()?, -1.0);
    assert_eq!(mat.inverse()?, mat);
    Ok(())
}

#[test]
fn unit_vectors() {
    let x = vec3(1.0, 0.0, 0.0);
    let y = vec3(0.0, 1.0, 0.0);
    assert_eq!(x | y, 0.0);
    assert_eq!(x ^ y, vec3(0.0, 0.0, 1.0));
    assert_eq!(x ^ y, Vec3d::Z);

    // The free functions accept any column-shaped expression.
    let column = MatrixN::from_row_major(3, 1, [0.0, 1.0, 0.0]);
    assert_eq!(dot(&x, &column), Ok(0.0));
    assert_eq!(cross(&x, y.view::<3, 1>(0, 0)), Vec3d::Z);

    let row = MatrixN::from_row_major(1, 3, [0.0, 1.0, 0.0]);
    assert!(matches!(
        dot(&x, &row),
        Err(LinalgError::ShapeMismatch { .. })
    ));
}

#[test]
fn square_only_on_heap() {
    init();
    let mat = MatrixN::<f64>::zeros(2, 3);
    let err = mat.determinant().unwrap_err();
    assert!(err.to_string().contains("not a square matrix"));

    // A square window into a non-square matrix is fine.
    assert_eq!(mat.view_dyn(0, 1, 2, 2).determinant(), Ok(0.0));
}

#[test]
fn row_operations_check_indices() {
    let mut mat = Mat2d::IDENTITY;
    let err = mat.swap_rows(0, 2).unwrap_err();
    assert_eq!(err, LinalgError::IndexOutOfRange { index: 2, len: 2 });
    assert!(err.to_string().contains("index out of range"));
    assert!(mat.scale_row(5, 2.0).is_err());
    assert!(mat.combine_rows(0, 1.0, 3, 1.0).is_err());
    assert_eq!(mat, Mat2d::IDENTITY);
}

#[test]
fn runtime_shape_mismatch() {
    let a = MatrixN::<f64>::zeros(2, 2);
    let b = MatrixN::<f64>::zeros(3, 2);
    let err = Sum::new(&a, &b).unwrap_err();
    assert_eq!(
        err,
        LinalgError::ShapeMismatch {
            op: "addition",
            left: Shape::new(2, 2),
            right: Shape::new(3, 2),
        }
    );
    assert!(Product::new(&a, &b).is_err());
    assert!(Product::new(&b, &a).is_ok());
}

#[test]
#[should_panic(expected = "shape mismatch in addition: 2x2 vs 3x2")]
fn operator_panics_on_mismatch() {
    let a = MatrixN::<f64>::zeros(2, 2);
    let b = MatrixN::<f64>::zeros(3, 2);
    let _ = &a + &b;
}

#[test]
fn self_multiplication() {
    init();
    #[rustfmt::skip]
    let a = Mat2d::from_rows([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);
    #[rustfmt::skip]
    let b = Mat2d::from_rows([
        [0.0, 1.0],
        [5.0, 2.0],
    ]);

    let expected = Matrix::from_expr(&a * &b);
    let mut post = a;
    post *= &b;
    assert_eq!(post, expected);

    let expected = Matrix::from_expr(&b * &a);
    let mut pre = a;
    pre.premultiply(&b).unwrap();
    assert_eq!(pre, expected);

    // `a *= a` squares the original, not a partially overwritten copy.
    let expected = Matrix::from_expr(&a * &a);
    let mut square = a;
    square *= a;
    assert_eq!(square, expected);
    assert_eq!(square, Matrix::from_rows([[7.0, 10.0], [15.0, 22.0]]));
}

#[test]
fn heap_self_multiplication() {
    init();
    let a = MatrixN::from_row_major(2, 2, [1.0, 2.0, 3.0, 4.0]);
    let b = MatrixN::from_row_major(2, 2, [0.0, 1.0, 5.0, 2.0]);

    let expected = MatrixN::from_expr(&a * &b);
    let mut post = a.clone();
    post *= &b;
    assert_eq!(post, expected);

    let expected = MatrixN::from_expr(&b * &a);
    let mut pre = a.clone();
    pre.premultiply(&b).unwrap();
    assert_eq!(pre, expected);

    let mut square = a.clone();
    square *= a.clone();
    assert_eq!(square.as_slice(), &[7.0, 10.0, 15.0, 22.0]);
}

#[test]
fn chained_expression() {
    #[rustfmt::skip]
    let a = Mat2d::from_rows([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);
    let b = Mat2d::IDENTITY;
    let c = MatrixN::from_row_major(2, 2, [2.0, 0.0, 0.0, 2.0]);

    // Static and dynamic operands mix; the result lives on the heap.
    let result = (&a + &b * &c - &a * 0.5).eval();
    assert_eq!(result.shape(), Shape::new(2, 2));
    assert_eq!(result.as_slice(), &[2.5, 1.0, 1.5, 4.0]);

    let stack = (&a - &b).eval();
    assert_eq!(stack, Matrix::from_rows([[0.0, 2.0], [3.0, 3.0]]));
}

#[test]
fn augmented_elimination() -> anyhow::Result<()> {
    #[rustfmt::skip]
    let a = Mat2d::from_rows([
        [4.0, 7.0],
        [2.0, 6.0],
    ]);
    let mut aug = Augmented::new(a, Mat2d::IDENTITY)?;
    let det = aug.gauss_elimination();
    assert!((det - 10.0).abs() < 1e-12);
    assert_eq!(aug.left(), &Mat2d::IDENTITY);
    assert_eq!(aug.right(), &a.inverse()?);
    Ok(())
}

#[test]
fn display() {
    let mat = Matrix::from_rows([[1, 2], [3, 4]]);
    assert_eq!(mat.display().to_string(), "1 2\n3 4\n");
    assert_eq!(mat.transpose().display().to_string(), "1 3\n2 4\n");
}

#[test]
fn heap_resize_keeps_buffer() {
    init();
    let mut mat = MatrixN::<f64>::identity(4);
    let capacity = mat.capacity();

    mat.resize(2, 2);
    assert_eq!(mat.shape(), Shape::new(2, 2));
    assert_eq!(mat.as_slice(), &[0.0; 4]);
    assert_eq!(mat.capacity(), capacity);

    mat.resize(4, 4);
    assert_eq!(mat.capacity(), capacity);

    mat.resize(5, 5);
    assert!(mat.capacity() >= 25);

    mat.resize(1, 1);
    mat.shrink_to_fit();
    assert!(mat.capacity() < 25);
}

#[test]
fn heap_move_out() {
    let mut mat = MatrixN::from_row_major(2, 2, [1.0, 2.0, 3.0, 4.0]);
    let moved = std::mem::take(&mut mat);
    assert_eq!(moved.shape(), Shape::new(2, 2));
    assert!(mat.is_empty());
    assert_eq!(mat.shape(), Shape::new(0, 0));
    assert_eq!(mat.capacity(), 0);

    // The emptied matrix is still usable.
    mat.resize(1, 2);
    assert_eq!(mat.as_slice(), &[0.0, 0.0]);

    let copy = moved.clone();
    assert_eq!(copy, moved);
    assert_ne!(copy.as_slice().as_ptr(), moved.as_slice().as_ptr());
}
