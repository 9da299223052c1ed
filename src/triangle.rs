//! Triangle classification from three side lengths. Side `c` is taken as the
//! hypotenuse candidate for the right-triangle check.

use crate::error::{CommitCounterError, Result};
use std::fmt;

const RIGHT_ANGLE_REL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        };
        write!(f, "{}", kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub kind: TriangleKind,
    pub is_right: bool,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_right {
            write!(f, "This triangle is {} and also a right triangle.", self.kind)
        } else {
            write!(f, "This triangle is {} and not a right triangle.", self.kind)
        }
    }
}

/// Classify a triangle given sides `a`, `b`, and `c`.
pub fn classify_triangle(a: f64, b: f64, c: f64) -> Result<Classification> {
    for side in [a, b, c] {
        if !side.is_finite() {
            return Err(CommitCounterError::InvalidArgument(
                "side lengths must be finite numbers".to_string(),
            ));
        }
        if side <= 0.0 {
            return Err(CommitCounterError::InvalidArgument(
                "side lengths must be positive".to_string(),
            ));
        }
    }

    if a + b <= c || a + c <= b || b + c <= a {
        return Err(CommitCounterError::InvalidArgument(
            "sides violate the triangle inequality".to_string(),
        ));
    }

    let kind = if a == b && b == c {
        TriangleKind::Equilateral
    } else if a == b || b == c || a == c {
        TriangleKind::Isosceles
    } else {
        TriangleKind::Scalene
    };

    // c^2 == a^2 + b^2 up to a relative tolerance, since the squares rarely
    // compare equal exactly in floating point.
    let hypotenuse_sq = c * c;
    let legs_sq = a * a + b * b;
    let is_right = (hypotenuse_sq - legs_sq).abs()
        <= RIGHT_ANGLE_REL_TOLERANCE * hypotenuse_sq.abs().max(legs_sq.abs());

    Ok(Classification { kind, is_right })
}
