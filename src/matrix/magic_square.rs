// src/matrix/magic_square.rs
//
// Magic-square validation
// A valid n x n magic square here is the strict kind: the cells are a
// permutation of 1..n^2 and every row, column, and both diagonals share
// one sum. Equal sums alone do not qualify.

use log::debug;
use std::collections::HashSet;

/// Validates a strict magic square.
///
/// False for an empty matrix or any non-square shape. A 1x1 matrix is
/// magic regardless of its value. For n > 1 the cells must be exactly
/// the integers 1..n^2, and every row sum, column sum, and both
/// diagonal sums must equal the sum of row 0.
///
/// # Examples
/// ```
/// use mathkit::matrix::magic_square::is_magic_square;
///
/// let lo_shu = vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]];
/// assert!(is_magic_square(&lo_shu));
/// assert!(!is_magic_square(&[vec![1, 2], vec![3, 4]]));
/// ```
pub fn is_magic_square(matrix: &[Vec<i64>]) -> bool {
    if matrix.is_empty() {
        return false;
    }

    let n = matrix.len();
    for row in matrix {
        if row.len() != n {
            debug!("is_magic_square: row of length {} in a {}-row matrix", row.len(), n);
            return false;
        }
    }

    if n == 1 {
        return true;
    }

    // Cells must be a permutation of 1..n^2.
    let count = (n * n) as i64;
    let mut seen = HashSet::with_capacity(n * n);
    for row in matrix {
        for &value in row {
            if value < 1 || value > count || !seen.insert(value) {
                debug!("is_magic_square: cell {} outside 1..={} or repeated", value, count);
                return false;
            }
        }
    }

    let target: i64 = matrix[0].iter().sum();
    debug!("is_magic_square: target line sum {}", target);

    for row in matrix {
        if row.iter().sum::<i64>() != target {
            return false;
        }
    }

    for column in 0..n {
        let sum: i64 = matrix.iter().map(|row| row[column]).sum();
        if sum != target {
            debug!("is_magic_square: column {} sums to {}", column, sum);
            return false;
        }
    }

    let main_diagonal: i64 = (0..n).map(|i| matrix[i][i]).sum();
    if main_diagonal != target {
        return false;
    }

    let anti_diagonal: i64 = (0..n).map(|i| matrix[i][n - 1 - i]).sum();
    anti_diagonal == target
}
