//! Randomized checks of the expression engine and the elimination algorithms.
//!
//! Inputs are drawn from fixed seeds, so failures are reproducible. Determinants and inverses are
//! compared against `nalgebra`.

use nalgebra::DMatrix;
use tabula::linalg::{
    assert_approx_eq, Mat3d, Mat4d, Matrix, MatrixExpr, MatrixMut, MatrixN, Shape,
};

const SEEDS: [u64; 4] = [0, 1, 0xdead_beef, 0x1234_5678_9abc];

fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn random_mat<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

fn random_matrix_n(rng: &mut fastrand::Rng, rows: usize, cols: usize) -> MatrixN<f64> {
    MatrixN::from_fn(rows, cols, |_, _| rng.f64() * 20.0 - 10.0)
}

fn to_nalgebra<E: MatrixExpr<Elem = f64>>(expr: E) -> DMatrix<f64> {
    DMatrix::from_fn(expr.rows(), expr.columns(), |row, col| expr.element(row, col))
}

fn from_nalgebra(mat: &DMatrix<f64>) -> MatrixN<f64> {
    MatrixN::from_fn(mat.nrows(), mat.ncols(), |row, col| mat[(row, col)])
}

#[test]
fn elementwise_ops() {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_mat::<3, 4>(&mut rng);
        let b = random_mat::<3, 4>(&mut rng);

        let sum = &a + &b;
        let difference = &a - &b;
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(sum.element(row, col), a[(row, col)] + b[(row, col)]);
                assert_eq!(difference.element(row, col), a[(row, col)] - b[(row, col)]);
            }
        }
    }
}

#[test]
fn product_is_sum_of_products() {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_mat::<2, 3>(&mut rng);
        let b = random_matrix_n(&mut rng, 3, 4);

        let product = &a * &b;
        assert_eq!(product.shape(), Shape::new(2, 4));
        for row in 0..2 {
            for col in 0..4 {
                let expected: f64 = (0..3).map(|k| a[(row, k)] * b[(k, col)]).sum();
                assert_eq!(product.element(row, col), expected);
            }
        }
    }
}

#[test]
fn transpose_swaps_indices() {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_mat::<2, 4>(&mut rng);
        let t = (&a).transpose();
        assert_eq!(t.shape(), Shape::new(4, 2));
        for row in 0..4 {
            for col in 0..2 {
                assert_eq!(t.element(row, col), a[(col, row)]);
            }
        }
        assert_eq!(Matrix::from_expr((&a).transpose().transpose()), a);
    }
}

#[test]
fn determinant_matches_reference() -> anyhow::Result<()> {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let stack = random_mat::<4, 4>(&mut rng);
        let heap = random_matrix_n(&mut rng, 5, 5);

        let expected = to_nalgebra(&stack).determinant();
        assert_approx_eq!(stack.determinant()?, expected).rel(1e-9);

        let expected = to_nalgebra(&heap).determinant();
        assert_approx_eq!(heap.determinant()?, expected).rel(1e-9);
    }
    Ok(())
}

#[test]
fn inverse_matches_reference() -> anyhow::Result<()> {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_mat::<4, 4>(&mut rng);
        if a.determinant()?.abs() < 1e-2 {
            continue;
        }

        let inverse = a.inverse()?;
        let expected = to_nalgebra(&a)
            .try_inverse()
            .expect("reference implementation considers the matrix singular");
        assert_approx_eq!(inverse.to_matrix_n(), from_nalgebra(&expected)).abs(1e-8);

        assert_approx_eq!(Matrix::from_expr(&a * &inverse), Mat4d::IDENTITY).abs(1e-8);
        assert_approx_eq!(Matrix::from_expr(&inverse * &a), Mat4d::IDENTITY).abs(1e-8);
    }
    Ok(())
}

#[test]
fn heap_inverse_is_right_inverse() -> anyhow::Result<()> {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_matrix_n(&mut rng, 6, 6);
        let inverse = a.inverse()?;
        let identity = MatrixN::from_expr(&a * &inverse);
        assert_approx_eq!(identity, MatrixN::identity(6)).abs(1e-6);
    }
    Ok(())
}

#[test]
fn row_swap_negates_determinant() -> anyhow::Result<()> {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = random_mat::<3, 3>(&mut rng);
        let det = a.determinant()?;

        let mut swapped = a;
        swapped.swap_rows(0, 2)?;
        assert_approx_eq!(swapped.determinant()?, -det).rel(1e-12);

        let mut same = a;
        same.swap_rows(1, 1)?;
        assert_eq!(same, a);
        assert_eq!(same.determinant()?, det);
    }
    Ok(())
}

#[test]
fn zero_row_has_zero_determinant() -> anyhow::Result<()> {
    init();
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut a = random_mat::<3, 3>(&mut rng);
        let row = rng.usize(0..3);
        a.scale_row(row, 0.0)?;
        assert_eq!(a.determinant()?, 0.0);
        assert!(a.inverse().is_err());
    }
    Ok(())
}

#[test]
fn elimination_does_not_touch_input() -> anyhow::Result<()> {
    init();
    let mut rng = fastrand::Rng::with_seed(7);
    let a = random_mat::<3, 3>(&mut rng);
    let copy = a;
    a.determinant()?;
    a.inverse()?;
    assert_eq!(a, copy);

    let mut reduced: Mat3d = a;
    let det = reduced.gauss_elimination();
    assert_approx_eq!(det, a.determinant()?).rel(1e-12);
    assert_approx_eq!(reduced, Mat3d::IDENTITY).abs(1e-12);
    Ok(())
}
