//! Closed Catmull-Rom spline evaluation
//!
//! Scripted motion (the helicopter loop and the airport exhibition tour) is
//! parametrized by a closed curve through an ordered set of control points.
//! Segment `i` runs from `points[i]` to `points[i + 1]` and is shaped by its
//! neighbours `points[i - 1]` and `points[i + 2]`, all indices taken modulo
//! the point count, so the parameter `t` can grow without bound and the curve
//! simply loops.
//!
//! # Basis
//!
//! ```text
//! p(u)  = 0.5 * [u³  u²  u  1] * M * [P0 P1 P2 P3]ᵀ
//! p'(u) = 0.5 * [3u² 2u  1  0] * M * [P0 P1 P2 P3]ᵀ
//!
//!      | -1  3 -3  1 |
//! M =  |  2 -5  4 -1 |
//!      | -1  0  1  0 |
//!      |  0  2  0  0 |
//! ```

use glam::{Vec3, Vec4};
use static_assertions::const_assert;
use thiserror::Error;

/// Smallest number of control points a closed curve can be built from.
pub const MIN_CONTROL_POINTS: usize = 4;

// Segment lookup reads one point behind and two ahead of the segment start.
const_assert!(MIN_CONTROL_POINTS >= 4);

/// Errors raised when a curve is evaluated with unusable control points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("closed curve needs at least {MIN_CONTROL_POINTS} control points, got {0}")]
    TooFewPoints(usize),
}

/// Columns of the Catmull-Rom basis, one per control point weight.
///
/// Dotting the parameter row vector with column `k` yields the weight of
/// control point `Pk`.
const BASIS_COLUMNS: [Vec4; 4] = [
    Vec4::new(-1.0, 2.0, -1.0, 0.0),
    Vec4::new(3.0, -5.0, 0.0, 2.0),
    Vec4::new(-3.0, 4.0, 1.0, 0.0),
    Vec4::new(1.0, -1.0, 0.0, 0.0),
];

fn blend(params: Vec4, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    let w0 = params.dot(BASIS_COLUMNS[0]);
    let w1 = params.dot(BASIS_COLUMNS[1]);
    let w2 = params.dot(BASIS_COLUMNS[2]);
    let w3 = params.dot(BASIS_COLUMNS[3]);
    0.5 * (w0 * p0 + w1 * p1 + w2 * p2 + w3 * p3)
}

/// Position on a single Catmull-Rom segment for a local parameter `u ∈ [0, 1]`.
pub fn evaluate_segment(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    blend(Vec4::new(u * u * u, u * u, u, 1.0), p0, p1, p2, p3)
}

/// First derivative of a single Catmull-Rom segment.
pub fn evaluate_segment_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    blend(Vec4::new(3.0 * u * u, 2.0 * u, 1.0, 0.0), p0, p1, p2, p3)
}

/// Splits a global curve parameter into the four control points of its
/// segment and the local parameter inside that segment.
fn segment_at(points: &[Vec3], t: f32) -> ([Vec3; 4], f32) {
    let count = points.len() as i64;
    let base = t.floor();
    let i = (base as i64).rem_euclid(count);
    let at = |offset: i64| points[(i + offset).rem_euclid(count) as usize];
    ([at(-1), at(0), at(1), at(2)], t - base)
}

fn check_len(points: &[Vec3]) -> Result<(), CurveError> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(CurveError::TooFewPoints(points.len()));
    }
    Ok(())
}

/// Position on the closed curve through `points` at parameter `t`.
///
/// `t` may be any real number; integer values land exactly on control points
/// and `t + points.len()` gives the same position as `t`.
pub fn evaluate_closed_curve(points: &[Vec3], t: f32) -> Result<Vec3, CurveError> {
    check_len(points)?;
    let ([p0, p1, p2, p3], u) = segment_at(points, t);
    Ok(evaluate_segment(p0, p1, p2, p3, u))
}

/// First derivative (tangent, not normalized) of the closed curve at `t`.
pub fn evaluate_closed_curve_derivative(points: &[Vec3], t: f32) -> Result<Vec3, CurveError> {
    check_len(points)?;
    let ([p0, p1, p2, p3], u) = segment_at(points, t);
    Ok(evaluate_segment_derivative(p0, p1, p2, p3, u))
}

/// A closed curve whose control points have already been validated.
///
/// Holds no evaluation state: every query is a pure function of the points
/// and the parameter, so playback can restart or jump at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    points: Vec<Vec3>,
}

impl ClosedCurve {
    pub fn new(points: Vec<Vec3>) -> Result<Self, CurveError> {
        check_len(&points)?;
        Ok(Self { points })
    }

    pub fn from_slice(points: &[Vec3]) -> Result<Self, CurveError> {
        Self::new(points.to_vec())
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Parameter length of one full loop.
    pub fn period(&self) -> f32 {
        self.points.len() as f32
    }

    pub fn position(&self, t: f32) -> Vec3 {
        let ([p0, p1, p2, p3], u) = segment_at(&self.points, t);
        evaluate_segment(p0, p1, p2, p3, u)
    }

    pub fn derivative(&self, t: f32) -> Vec3 {
        let ([p0, p1, p2, p3], u) = segment_at(&self.points, t);
        evaluate_segment_derivative(p0, p1, p2, p3, u)
    }

    /// Normalized direction of travel at `t`.
    ///
    /// Falls back to +Z where the tangent vanishes (coincident control points).
    pub fn tangent(&self, t: f32) -> Vec3 {
        self.derivative(t).try_normalize().unwrap_or(Vec3::Z)
    }
}
