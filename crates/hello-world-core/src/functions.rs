//! Helper functions called by the entry sequence.

use std::io::Write;

use hello_world_common::ProgramError;

use crate::Console;

/// Print the line `show string`.
pub fn show<W: Write>(console: &mut Console<W>) -> Result<(), ProgramError> {
    console.println("show string")
}

/// Returns `1234`.
pub const fn constant() -> i32 {
    1234
}

/// Returns `arg` unchanged.
pub const fn identity(arg: i32) -> i32 {
    arg
}

/// Returns `x + y`, wrapping on overflow.
pub const fn add(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

/// Naive recursive Fibonacci with both base cases equal to 1.
///
/// `fibonacci(0) = fibonacci(1) = 1`, so `fibonacci(n)` is the conventional
/// `F(n + 1)`: `fibonacci(2) = 2`, `fibonacci(15) = 987`. Runs in exponential
/// time. Results are exact up to
/// [`MAX_FIBONACCI_INPUT`](hello_world_common::MAX_FIBONACCI_INPUT) and wrap
/// beyond it.
pub fn fibonacci(n: u32) -> i32 {
    match n {
        0 | 1 => 1,
        n => add(fibonacci(n - 1), fibonacci(n - 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i32; 9] = [i32::MIN, -12345, -1, 0, 1, 30, 1234, 12345, i32::MAX];

    #[test]
    fn test_show() {
        let mut console = Console::new(Vec::new());

        show(&mut console).unwrap();

        assert_eq!(console.into_inner(), b"show string\n");
    }

    #[test]
    fn test_constant() {
        assert_eq!(constant(), 1234);
    }

    #[test]
    fn test_identity_law() {
        for x in SAMPLES {
            assert_eq!(identity(x), x);
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(add(1, 30), 31);
        assert_eq!(add(-5, 5), 0);
    }

    #[test]
    fn test_add_commutative() {
        for x in SAMPLES {
            for y in SAMPLES {
                assert_eq!(add(x, y), add(y, x), "add({x}, {y})");
            }
        }
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 1);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn test_fibonacci_recurrence() {
        for n in 2..=25 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2), "n = {n}");
        }
    }

    #[test]
    fn test_fibonacci_known_values() {
        let expected = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987];

        for (n, value) in (0..).zip(expected) {
            assert_eq!(fibonacci(n), value, "n = {n}");
        }
    }
}
