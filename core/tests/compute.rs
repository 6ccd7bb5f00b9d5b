//! End-to-end checks through the public API and the shared default instance.

use smp_core::{
    compute, compute_cache_only, compute_unresolved, parse, ComputeError, Error,
    MapVariableValueProvider, ParseErrorKind, ResolveError, Smp,
};

fn eval(input: &str) -> f64 {
    parse(input).unwrap().compute_unresolved().unwrap()
}

#[test]
fn test_basic_arithmetic() {
    assert!((eval("1+2") - 3.0).abs() < 1e-10);
    assert!((eval("2+3*4") - 14.0).abs() < 1e-10);
    assert!((eval("(2+3)*4") - 20.0).abs() < 1e-10);
    assert!((eval("10 / 4") - 2.5).abs() < 1e-10);
    assert!((eval("1.5 * 4") - 6.0).abs() < 1e-10);
}

#[test]
fn test_left_associativity() {
    assert!((eval("2-3-4") - -5.0).abs() < 1e-10);
    assert!((eval("2^3^2") - 64.0).abs() < 1e-10);
}

#[test]
fn test_power_binds_tightest() {
    assert!((eval("2*3^2") - 18.0).abs() < 1e-10);
    assert!((eval("1+2^2*3") - 13.0).abs() < 1e-10);
}

#[test]
fn test_mismatched_parentheses() {
    assert_eq!(parse("(1+2").unwrap_err().kind, ParseErrorKind::MismatchedParentheses);
    assert_eq!(parse("1+2)").unwrap_err().kind, ParseErrorKind::MismatchedParentheses);
}

#[test]
fn test_unknown_symbol_position() {
    let err = parse("1+$").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownSymbol('$'));
    assert_eq!(err.position, Some(2));
}

#[test]
fn test_unresolved_variable() {
    let err = parse("x+1").unwrap().compute_unresolved().unwrap_err();
    assert_eq!(err, ComputeError::UnresolvedVariable);

    let err = compute_unresolved("x+1").unwrap_err();
    assert!(matches!(err, Error::Compute(ComputeError::UnresolvedVariable)));
}

#[test]
fn test_shorthand_wraps_parse_error() {
    assert!(matches!(compute_unresolved("2 $ 2"), Err(Error::Parse(_))));
}

#[test]
fn test_empty_input_is_malformed() {
    let expr = parse("").unwrap();
    assert!(expr.tokens().is_empty());
    assert_eq!(expr.compute_unresolved(), Err(ComputeError::MalformedExpression));
}

#[test]
fn test_converter_output_is_well_formed() {
    for input in ["1", "(1)", "1+2*3-4/5^6", "((1+2)*(3-4))/5", "2^(1+1)^2", "7-(2-(3-(4)))"] {
        let expr = parse(input).unwrap();
        assert!(expr.compute_unresolved().is_ok(), "failed on {}", input);
    }
}

#[test]
fn test_rpn_display() {
    let expr = parse("x * (y + 2)").unwrap();
    assert_eq!(expr.to_string(), "x y 2 + *");
}

#[tokio::test]
async fn test_compute_with_map_provider() {
    let smp = Smp::builder()
        .provider(MapVariableValueProvider::from_iter([("x", 5.0)]))
        .build();
    let result = smp.parse("x+1").unwrap().compute().await.unwrap();
    assert!((result - 6.0).abs() < 1e-10);
}

#[tokio::test]
async fn test_default_instance_rejects_variables() {
    let err = compute("x+1").await.unwrap_err();
    match err {
        Error::Resolve(ResolveError::VariableLookupFailed { variable, .. }) => assert_eq!(variable, "x"),
        other => panic!("Expected lookup failure, got {:?}", other),
    }

    // variable-free input never reaches the provider
    assert!((compute("6*7").await.unwrap() - 42.0).abs() < 1e-10);
}

#[test]
fn test_default_instance_cache_only_uses_fallback() {
    let result = compute_cache_only("x * 2 + 1", 4.0).unwrap();
    assert!((result - 9.0).abs() < 1e-10);
}
