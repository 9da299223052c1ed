use github_commit_counter::error::CommitCounterError;
use github_commit_counter::triangle::{classify_triangle, TriangleKind};

fn assert_invalid(a: f64, b: f64, c: f64) {
    match classify_triangle(a, b, c).unwrap_err() {
        CommitCounterError::InvalidArgument(_) => {}
        other => panic!("Expected InvalidArgument error, got: {:?}", other),
    }
}

#[test]
fn test_equilateral() {
    let result = classify_triangle(1.0, 1.0, 1.0).unwrap();
    assert_eq!(result.kind, TriangleKind::Equilateral);
    assert!(!result.is_right);
}

#[test]
fn test_isosceles() {
    let result = classify_triangle(5.0, 5.0, 8.0).unwrap();
    assert_eq!(result.kind, TriangleKind::Isosceles);
    assert!(!result.is_right);
}

#[test]
fn test_scalene_right() {
    let result = classify_triangle(3.0, 4.0, 5.0).unwrap();
    assert_eq!(result.kind, TriangleKind::Scalene);
    assert!(result.is_right);
}

#[test]
fn test_isosceles_right_within_tolerance() {
    // 1-1-sqrt(2): the squares differ only by floating point rounding.
    let result = classify_triangle(1.0, 1.0, 2.0_f64.sqrt()).unwrap();
    assert_eq!(result.kind, TriangleKind::Isosceles);
    assert!(result.is_right);
}

#[test]
fn test_scalene_not_right() {
    let result = classify_triangle(4.0, 6.0, 8.0).unwrap();
    assert_eq!(result.kind, TriangleKind::Scalene);
    assert!(!result.is_right);
}

#[test]
fn test_non_positive_sides_rejected() {
    assert_invalid(0.0, 1.0, 1.0);
    assert_invalid(3.0, -4.0, 5.0);
}

#[test]
fn test_non_finite_sides_rejected() {
    assert_invalid(f64::NAN, 1.0, 1.0);
    assert_invalid(1.0, f64::INFINITY, 1.0);
}

#[test]
fn test_triangle_inequality_enforced() {
    // Degenerate (collinear) sides count as invalid too.
    assert_invalid(1.0, 2.0, 3.0);
    assert_invalid(1.0, 10.0, 1.0);
}

#[test]
fn test_classification_report_lines() {
    let right = classify_triangle(3.0, 4.0, 5.0).unwrap();
    assert_eq!(
        right.to_string(),
        "This triangle is scalene and also a right triangle."
    );

    let plain = classify_triangle(2.0, 2.0, 3.0).unwrap();
    assert_eq!(
        plain.to_string(),
        "This triangle is isosceles and not a right triangle."
    );
}
