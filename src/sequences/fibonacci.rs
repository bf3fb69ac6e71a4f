// src/sequences/fibonacci.rs
//
// Iterative Fibonacci
// Complexity: O(n) per term, O(1) extra space
// No recursion: the term index is caller-controlled and deep call
// stacks are not acceptable for large n

use num::BigInt;

/// The n-th Fibonacci term, indexed from fib(0) = 0.
///
/// Returns 0 for n <= 0 and 1 for n = 1 or 2. Larger terms advance two
/// running values n-1 times.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::sequences::fibonacci::nth_fibonacci;
///
/// assert_eq!(nth_fibonacci(10), BigInt::from(55));
/// assert_eq!(nth_fibonacci(-4), BigInt::from(0));
/// ```
pub fn nth_fibonacci(n: i64) -> BigInt {
    if n <= 0 {
        return BigInt::from(0);
    }
    if n == 1 || n == 2 {
        return BigInt::from(1);
    }

    let mut previous = BigInt::from(0);
    let mut current = BigInt::from(1);
    for _ in 2..=n {
        let next = &previous + &current;
        previous = current;
        current = next;
    }
    current
}

/// The first n Fibonacci terms, indices 0..n-1. Empty for n <= 0.
///
/// Each term is produced by [`nth_fibonacci`]; the sequence is defined
/// as the term-by-term output, not an independent recurrence.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use mathkit::sequences::fibonacci::fibonacci_sequence;
///
/// let expected: Vec<BigInt> = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
///     .iter()
///     .map(|&t| BigInt::from(t))
///     .collect();
/// assert_eq!(fibonacci_sequence(10), expected);
/// ```
pub fn fibonacci_sequence(n: i64) -> Vec<BigInt> {
    if n <= 0 {
        return Vec::new();
    }
    (0..n).map(nth_fibonacci).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_fibonacci_base_cases() {
        assert_eq!(nth_fibonacci(0), BigInt::from(0));
        assert_eq!(nth_fibonacci(1), BigInt::from(1));
        assert_eq!(nth_fibonacci(2), BigInt::from(1));
    }

    #[test]
    fn test_nth_fibonacci_negative_sentinel() {
        assert_eq!(nth_fibonacci(-1), BigInt::from(0));
        assert_eq!(nth_fibonacci(-50), BigInt::from(0));
    }

    #[test]
    fn test_nth_fibonacci_known_terms() {
        assert_eq!(nth_fibonacci(10), BigInt::from(55));
        assert_eq!(nth_fibonacci(20), BigInt::from(6765));
        assert_eq!(nth_fibonacci(50), BigInt::from(12586269025_i64));
    }

    #[test]
    fn test_nth_fibonacci_recurrence_holds() {
        for n in 2..40 {
            assert_eq!(
                nth_fibonacci(n),
                nth_fibonacci(n - 1) + nth_fibonacci(n - 2),
                "recurrence broken at {}",
                n
            );
        }
    }

    #[test]
    fn test_nth_fibonacci_past_u64() {
        // fib(100) = 354224848179261915075
        let expected = BigInt::parse_bytes(b"354224848179261915075", 10).unwrap();
        assert_eq!(nth_fibonacci(100), expected);
    }

    #[test]
    fn test_fibonacci_sequence_first_ten() {
        let expected: Vec<BigInt> = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
            .iter()
            .map(|&t| BigInt::from(t))
            .collect();
        assert_eq!(fibonacci_sequence(10), expected);
    }

    #[test]
    fn test_fibonacci_sequence_empty_cases() {
        assert!(fibonacci_sequence(0).is_empty());
        assert!(fibonacci_sequence(-3).is_empty());
    }

    #[test]
    fn test_fibonacci_sequence_single_term() {
        assert_eq!(fibonacci_sequence(1), vec![BigInt::from(0)]);
    }
}
