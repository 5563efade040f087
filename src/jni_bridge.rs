//! JNI bridge for Android
//!
//! Exposes the crate to the module's Kotlin class,
//! `com.rustmath.reactnative.RustMathModule`. Symbol names follow the JNI
//! naming convention and must match the `external fun` declarations on the
//! Kotlin side exactly.

use jni::objects::JClass;
use jni::sys::{jdouble, jint, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use log::info;
use std::os::raw::c_void;

/// Called by the JVM when `System.loadLibrary("rustmath")` maps this
/// library. Initializes logcat output once; no other state exists.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("rustmath"),
    );
    info!("rustmath {} loaded", env!("CARGO_PKG_VERSION"));
    JNI_VERSION_1_6
}

/// JNI: `RustMathModule.nativeMultiply(a, b)`
///
/// Forwards both values unmodified to [`crate::multiply`] and returns the
/// result unmodified. `jdouble` is `f64`, so nothing is converted at this
/// boundary.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_rustmath_reactnative_RustMathModule_nativeMultiply(
    _env: JNIEnv,
    _class: JClass,
    a: jdouble,
    b: jdouble,
) -> jdouble {
    crate::multiply(a, b)
}
