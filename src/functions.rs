//! Arithmetic helpers compiled as a separate module, so a successful build
//! also proves that cross-module linking works.

/// Returns the sum of `x` and `y`.
pub fn add(x: i32, y: i32) -> i32 {
    x + y
}

/// Returns `x` minus `y`.
pub fn subtract(x: i32, y: i32) -> i32 {
    x - y
}
