use rustmath::c_api::rustmath_multiply;
use rustmath::multiply;

#[test]
fn test_bridge_returns_worked_examples() {
    assert_eq!(rustmath_multiply(2.0, 3.0), 6.0);
    assert_eq!(rustmath_multiply(0.0, 5.0), 0.0);
    assert_eq!(rustmath_multiply(-1.5, 4.0), -6.0);
}

#[test]
fn test_bridge_matches_direct_call() {
    // Sampled over the interesting corners of the double space, compared
    // bit-for-bit so NaN and signed zero count as equal only to themselves.
    let values = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        1.5,
        -1.5,
        0.1,
        1e308,
        -1e308,
        5e-324,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];

    for &a in &values {
        for &b in &values {
            let through_bridge = rustmath_multiply(a, b);
            let direct = multiply(a, b);
            assert_eq!(
                through_bridge.to_bits(),
                direct.to_bits(),
                "bridge and direct call disagree for a={a}, b={b}"
            );
        }
    }
}
