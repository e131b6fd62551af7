use crate::config::ZeroTolerance;
use ndarray::Array2;

/// Computes the rank of a matrix by Gaussian elimination with partial
/// pivoting.
///
/// The row update is the division-free cross-multiplication form
/// `row_r = pivot * row_r - factor * row_pivot`, which clears the pivot
/// column exactly (the eliminated entry is `factor * pivot - pivot *
/// factor`, identically `0.0` in floating point) and keeps an
/// integer-valued matrix integer-valued throughout.
///
/// Pivot candidates are judged by `tolerance` against a per-column
/// reference scale: the column's largest initial magnitude, raised to
/// the largest `|x * pivot| + |y * factor|` formed in that column while
/// rewriting rows. The scale never decreases, so a residue left behind
/// by a large cancellation is still measured against the magnitude that
/// cancellation happened at, and a large constants column cannot mask
/// pivots in the coefficient columns next to it.
///
/// Entries are assumed small enough that the cross products stay
/// finite; the classifier guarantees this through system validation.
///
/// # Arguments
///
/// * `matrix` - The input matrix. It is not modified.
/// * `tolerance` - Zero test applied to pivot candidates.
///
/// # Returns
///
/// * The number of linearly independent rows.
pub fn rank(matrix: &Array2<f64>, tolerance: &ZeroTolerance) -> usize {
    let mut work = matrix.clone();
    let (nrows, ncols) = work.dim();
    let mut rank = 0;
    let mut pivot_row = 0;
    let mut col_scale: Vec<f64> = (0..ncols)
        .map(|c| {
            work.column(c)
                .iter()
                .fold(0.0_f64, |acc, v| acc.max(v.abs()))
        })
        .collect();

    for col in 0..ncols {
        if pivot_row == nrows {
            break;
        }

        let mut best_row = pivot_row;
        for row in pivot_row + 1..nrows {
            if work[(row, col)].abs() > work[(best_row, col)].abs() {
                best_row = row;
            }
        }
        if tolerance.is_zero(work[(best_row, col)], col_scale[col]) {
            // No usable pivot in this column; move on without consuming a row.
            continue;
        }
        if best_row != pivot_row {
            swap_rows(&mut work, pivot_row, best_row, col);
        }

        let pivot = work[(pivot_row, col)];
        for row in pivot_row + 1..nrows {
            let factor = work[(row, col)];
            for c in col..ncols {
                let minuend = work[(row, c)] * pivot;
                let subtrahend = work[(pivot_row, c)] * factor;
                col_scale[c] = col_scale[c].max(minuend.abs() + subtrahend.abs());
                work[(row, c)] = minuend - subtrahend;
            }
        }

        rank += 1;
        pivot_row += 1;
    }

    rank
}

/// Computes the determinant of a 3x3 matrix by cofactor expansion along
/// the first row.
///
/// The result is a fixed polynomial in the nine entries, so it is exact
/// whenever the entries and all intermediate products are representable,
/// in particular for integer matrices of moderate size.
pub fn det3(m: &Array2<f64>) -> f64 {
    assert_eq!(m.dim(), (3, 3), "det3 requires a 3x3 matrix");
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Swaps two rows from `start_col` onward. Entries left of `start_col`
/// are already eliminated and no longer read.
fn swap_rows(work: &mut Array2<f64>, r1: usize, r2: usize, start_col: usize) {
    let ncols = work.dim().1;
    for c in start_col..ncols {
        work.swap((r1, c), (r2, c));
    }
}
