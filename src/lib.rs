//! Rust native core for the react-native-rustmath module
//!
//! The managed side of the module reaches this crate through two thin
//! trampolines: a JNI entry point bound to the Kotlin module class
//! ([`jni_bridge`]) and a C ABI entry point for the Objective-C++ shim
//! ([`c_api`]). Both forward their arguments unmodified to the pure
//! functions below and return the result unmodified.

/// Multiply two doubles.
///
/// Standard IEEE-754 semantics apply: overflow saturates to infinity, NaN
/// propagates, and the sign of a zero result follows the operand signs.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub mod c_api;

// JNI bridge for Android targets only
#[cfg(target_os = "android")]
pub mod jni_bridge;
