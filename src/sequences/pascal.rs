// src/sequences/pascal.rs

use num::BigInt;
use num::One;

/// The first `rows` rows of Pascal's triangle.
///
/// Row i (0-indexed) has i+1 entries; the ends are 1 and interior entry
/// j is the sum of entries j-1 and j of the previous row. The rows are
/// built by that recurrence, never the binomial-coefficient formula, so
/// entries stay exact for arbitrarily deep triangles.
///
/// This is the one operation in the library that rejects out-of-domain
/// input instead of returning a sentinel: a negative row count is an
/// `Err`. Callers of everything else get defaults; callers here must
/// handle the failure.
///
/// # Arguments
/// * `rows` - Number of rows to generate
///
/// # Returns
/// * `Ok(triangle)` - `rows` rows, empty when rows = 0
/// * `Err(String)` - when rows is negative
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::sequences::pascal::pascal_triangle;
///
/// let triangle = pascal_triangle(3).unwrap();
/// assert_eq!(triangle[2], vec![BigInt::from(1), BigInt::from(2), BigInt::from(1)]);
/// assert!(pascal_triangle(-1).is_err());
/// ```
pub fn pascal_triangle(rows: i64) -> Result<Vec<Vec<BigInt>>, String> {
    if rows < 0 {
        return Err(format!("row count must not be negative, got {}", rows));
    }
    if rows == 0 {
        return Ok(Vec::new());
    }

    let mut triangle: Vec<Vec<BigInt>> = vec![vec![BigInt::one()]];
    for i in 1..rows as usize {
        let previous = &triangle[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(BigInt::one());
        for j in 1..i {
            row.push(&previous[j - 1] + &previous[j]);
        }
        row.push(BigInt::one());
        triangle.push(row);
    }
    Ok(triangle)
}
