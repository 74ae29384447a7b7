//! Distance and circular-angle arithmetic.
//!
//! Headings are integer degrees, always normalized to `[0, 360)`, with 0°
//! along the positive X axis (atan2 convention). These functions are pure and
//! shared by the spatial queries, the behavior evaluators, and the override
//! pass.

use crate::state::Position;

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Direction from `from` to `to` in degrees, normalized to `[0, 360)`.
pub fn heading_between(from: Position, to: Position) -> i32 {
    let rad = ((to.y - from.y) as f64).atan2((to.x - from.x) as f64);
    (rad.to_degrees() as i32).rem_euclid(360)
}

/// The opposite direction.
pub fn heading_reverse(heading: i32) -> i32 {
    (heading + 180).rem_euclid(360)
}

/// Minimal circular distance between two headings, in `[0, 180]`.
pub fn heading_diff(h1: i32, h2: i32) -> i32 {
    let d = (h1 - h2).rem_euclid(360);
    d.min(360 - d)
}

/// Midpoint of the shorter arc between two headings.
///
/// Two angles are equidistant from any heading pair; the arithmetic mean is
/// kept when it lies on the shorter arc and flipped by 180° otherwise. Used
/// only to smooth corrective turns, never for primary targeting.
pub fn heading_median(h1: i32, h2: i32) -> i32 {
    let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
    let mut median = (lo + hi) / 2;
    if heading_diff(lo, median) > 90 {
        median += 180;
    }
    median.rem_euclid(360)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(3, 4);
        let b = Position::new(-2, 7);
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(Position::ORIGIN, Position::new(3, 4)), 5.0);
    }

    #[test]
    fn distance_satisfies_triangle_inequality() {
        let a = Position::new(0, 0);
        let b = Position::new(17, -9);
        let c = Position::new(-40, 23);
        assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-9);
    }

    #[test]
    fn heading_between_follows_atan2_quadrants() {
        let o = Position::ORIGIN;
        assert_eq!(heading_between(o, Position::new(10, 0)), 0);
        assert_eq!(heading_between(o, Position::new(0, 10)), 90);
        assert_eq!(heading_between(o, Position::new(-10, 0)), 180);
        assert_eq!(heading_between(o, Position::new(0, -10)), 270);
    }

    #[test]
    fn heading_reverse_is_an_involution() {
        for h in 0..360 {
            assert_eq!(heading_reverse(heading_reverse(h)), h);
        }
    }

    #[test]
    fn heading_diff_is_symmetric_and_bounded() {
        for h1 in (0..360).step_by(7) {
            for h2 in (0..360).step_by(11) {
                let d = heading_diff(h1, h2);
                assert_eq!(d, heading_diff(h2, h1));
                assert!((0..=180).contains(&d));
            }
        }
        assert_eq!(heading_diff(350, 10), 20);
        assert_eq!(heading_diff(0, 180), 180);
    }

    #[test]
    fn heading_median_is_symmetric() {
        for h1 in (0..360).step_by(13) {
            for h2 in (0..360).step_by(17) {
                assert_eq!(heading_median(h1, h2), heading_median(h2, h1));
            }
        }
    }

    #[test]
    fn heading_median_lies_on_shorter_arc() {
        // Plain case: no wrap-around.
        assert_eq!(heading_median(10, 50), 30);
        // Wrap-around: shorter arc between 350 and 10 crosses zero.
        let m = heading_median(350, 10);
        assert_eq!(m, 0);
        // The median is never further from either end than the arc itself.
        for h1 in (0..360).step_by(19) {
            for h2 in (0..360).step_by(23) {
                let m = heading_median(h1, h2);
                let arc = heading_diff(h1, h2);
                assert!(heading_diff(h1, m) <= arc);
                assert!(heading_diff(h2, m) <= arc);
            }
        }
    }
}
