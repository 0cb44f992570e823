//! Exponentially smoothed chain of points following a moving target.
//!
//! Node 0 follows the target; every other node follows the node in front of
//! it. Each node moves a fixed fraction (`alpha`) of the remaining distance per
//! tick, so the chain behaves like a series of first-order low-pass filters:
//! it decays toward the target without overshooting.

use thiserror::Error;

/// Position in terminal cell units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn approach(&mut self, target: Point, alpha: f64) {
        self.x += (target.x - self.x) * alpha;
        self.y += (target.y - self.y) * alpha;
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrailError {
    #[error("trail must have at least one node")]
    Empty,
    #[error("smoothing coefficient {alpha} of node {index} is outside (0, 1)")]
    AlphaOutOfRange { index: usize, alpha: f64 },
    #[error("smoothing coefficient {alpha} of node {index} must be smaller than {previous}")]
    NotDecreasing {
        index: usize,
        alpha: f64,
        previous: f64,
    },
    #[error("expected {expected} smoothing coefficients, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailNode {
    position: Point,
    alpha: f64,
}

impl TrailNode {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Fixed-length chain of trail nodes.
///
/// The node count never changes after construction and ticks update the nodes
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    target: Point,
    nodes: Vec<TrailNode>,
}

impl Trail {
    /// Creates a trail with one node per coefficient, all resting at the origin.
    ///
    /// Coefficients must lie in the open interval (0, 1) and strictly decrease
    /// along the chain.
    pub fn new(alphas: Vec<f64>) -> Result<Self, TrailError> {
        if alphas.is_empty() {
            return Err(TrailError::Empty);
        }

        for (index, &alpha) in alphas.iter().enumerate() {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(TrailError::AlphaOutOfRange { index, alpha });
            }
            if let Some(&previous) = index.checked_sub(1).and_then(|i| alphas.get(i)) {
                if alpha >= previous {
                    return Err(TrailError::NotDecreasing {
                        index,
                        alpha,
                        previous,
                    });
                }
            }
        }

        let nodes = alphas
            .into_iter()
            .map(|alpha| TrailNode {
                position: Point::ORIGIN,
                alpha,
            })
            .collect();

        Ok(Self {
            target: Point::ORIGIN,
            nodes,
        })
    }

    /// Creates a trail whose coefficients fall linearly from `head` to `tail`.
    pub fn tapered(length: usize, head: f64, tail: f64) -> Result<Self, TrailError> {
        Self::new(tapered_alphas(length, head, tail))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a trail holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Replaces the point the head of the trail moves toward.
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advances every node one step toward its leader.
    ///
    /// Nodes are updated front to back, so node `i` chases the position node
    /// `i - 1` reached in this same tick.
    pub fn tick(&mut self) {
        let mut leader = self.target;
        for node in &mut self.nodes {
            node.position.approach(leader, node.alpha);
            leader = node.position;
        }
    }

    /// Opacity of node `index`, falling linearly from 1.0 at the head.
    pub fn opacity(&self, index: usize) -> f64 {
        1.0 - index as f64 / self.nodes.len() as f64
    }

    /// Distance between node `index` and the target.
    pub fn lag(&self, index: usize) -> Option<f64> {
        self.nodes
            .get(index)
            .map(|node| node.position.distance(self.target))
    }

    /// Whether every node is within `epsilon` of the target.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.nodes
            .iter()
            .all(|node| node.position.distance(self.target) <= epsilon)
    }
}

/// Coefficients interpolated linearly from `head` (node 0) to `tail` (last node).
pub fn tapered_alphas(length: usize, head: f64, tail: f64) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![head],
        _ => {
            let last = (length - 1) as f64;
            (0..length)
                .map(|i| head - (head - tail) * i as f64 / last)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_new_starts_at_origin() {
        let trail = Trail::new(vec![0.5, 0.25]).expect("valid trail");

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.target(), Point::ORIGIN);
        assert!(trail
            .nodes()
            .iter()
            .all(|node| node.position() == Point::ORIGIN));
    }

    #[rstest]
    #[case(vec![], TrailError::Empty)]
    #[case(vec![0.0], TrailError::AlphaOutOfRange { index: 0, alpha: 0.0 })]
    #[case(vec![0.5, 1.0], TrailError::AlphaOutOfRange { index: 1, alpha: 1.0 })]
    #[case(vec![0.5, -0.1], TrailError::AlphaOutOfRange { index: 1, alpha: -0.1 })]
    #[case(vec![0.3, 0.3], TrailError::NotDecreasing { index: 1, alpha: 0.3, previous: 0.3 })]
    #[case(vec![0.2, 0.1, 0.4], TrailError::NotDecreasing { index: 2, alpha: 0.4, previous: 0.1 })]
    fn test_new_rejects_invalid_coefficients(
        #[case] alphas: Vec<f64>,
        #[case] expected: TrailError,
    ) {
        assert_eq!(Trail::new(alphas), Err(expected));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(matches!(
            Trail::new(vec![f64::NAN]),
            Err(TrailError::AlphaOutOfRange { index: 0, .. })
        ));
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![0.4])]
    #[case(3, vec![0.4, 0.25, 0.1])]
    fn test_tapered_alphas(#[case] length: usize, #[case] expected: Vec<f64>) {
        let alphas = tapered_alphas(length, 0.4, 0.1);

        assert_eq!(alphas.len(), expected.len());
        for (actual, expected) in alphas.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
        }
    }

    #[test]
    fn test_first_tick_moves_head_by_alpha() {
        let mut trail = Trail::new(vec![0.08]).expect("valid trail");
        trail.set_target(Point::new(100.0, 100.0));

        trail.tick();

        let head = trail.nodes()[0].position();
        assert!((head.x - 8.0).abs() < 1e-9, "x = {}", head.x);
        assert!((head.y - 8.0).abs() < 1e-9, "y = {}", head.y);
    }

    #[test]
    fn test_followers_chase_updated_leader() {
        let mut trail = Trail::new(vec![0.5, 0.5 - f64::EPSILON]).expect("valid trail");
        trail.set_target(Point::new(10.0, 0.0));

        trail.tick();

        let follower = trail.nodes()[1].position();
        assert!((follower.x - 2.5).abs() < 1e-9, "x = {}", follower.x);
    }

    #[test]
    fn test_opacity() {
        let trail = Trail::tapered(4, 0.3, 0.1).expect("valid trail");

        assert_eq!(trail.opacity(0), 1.0);
        assert_eq!(trail.opacity(1), 0.75);
        assert_eq!(trail.opacity(3), 0.25);
    }

    #[test]
    fn test_lag_out_of_range() {
        let trail = Trail::tapered(2, 0.3, 0.1).expect("valid trail");
        assert_eq!(trail.lag(2), None);
    }

    #[test]
    fn test_is_settled() {
        let mut trail = Trail::tapered(3, 0.5, 0.2).expect("valid trail");
        assert!(trail.is_settled(0.0));

        trail.set_target(Point::new(1.0, 1.0));
        assert!(!trail.is_settled(0.01));

        for _ in 0..200 {
            trail.tick();
        }
        assert!(trail.is_settled(0.01));
    }
}
