//! C ABI surface
//!
//! The iOS side of the module links the staticlib and calls through the
//! declarations in `include/rustmath.h`. Any other C caller, including the
//! crate's own integration tests, uses the same symbols.

/// C: `double rustmath_multiply(double a, double b);`
///
/// Same forwarding contract as the JNI trampoline.
#[no_mangle]
pub extern "C" fn rustmath_multiply(a: f64, b: f64) -> f64 {
    crate::multiply(a, b)
}
