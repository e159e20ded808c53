// ============================================================================
// Fibonacci
// ============================================================================

/// Naive doubly recursive Fibonacci.
///
/// `n <= 1` returns `n` unchanged, negative inputs included. Runs in
/// exponential time; there is no memoization.
pub fn fibonacci(n: i32) -> i64 {
    if n <= 1 {
        return i64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
