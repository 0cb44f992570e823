use pretty_assertions::assert_eq;
use rstest::*;
use trailcursor::model::trail::{Point, Trail};

const EPSILON: f64 = 0.01;
const MAX_TICKS: usize = 10_000;

fn settle(trail: &mut Trail) -> usize {
    let mut ticks = 0;
    while !trail.is_settled(EPSILON) && ticks < MAX_TICKS {
        trail.tick();
        ticks += 1;
    }
    ticks
}

#[test]
fn test_pointer_jump_scenario() {
    let mut trail = Trail::new(vec![0.08]).expect("valid trail");
    trail.set_target(Point::new(100.0, 100.0));

    trail.tick();
    let head = trail.nodes()[0].position();
    assert!((head.x - 8.0).abs() < 1e-9, "x after one tick = {}", head.x);

    settle(&mut trail);
    let head = trail.nodes()[0].position();
    assert!((head.x - 100.0).abs() < EPSILON, "x = {}", head.x);
    assert!((head.y - 100.0).abs() < EPSILON, "y = {}", head.y);
}

#[rstest]
#[case(1, 0.15, 0.15)]
#[case(2, 0.5, 0.1)]
#[case(12, 0.15, 0.04)]
#[case(32, 0.9, 0.01)]
fn test_steady_pointer_converges(#[case] length: usize, #[case] head: f64, #[case] tail: f64) {
    let mut trail = Trail::tapered(length, head, tail).expect("valid trail");
    trail.set_target(Point::new(-40.0, 25.0));

    let ticks = settle(&mut trail);

    assert!(ticks < MAX_TICKS, "trail did not settle");
    for index in 0..trail.len() {
        let lag = trail.lag(index).expect("node exists");
        assert!(lag <= EPSILON, "node {index} still {lag} away");
    }
}

#[test]
fn test_later_nodes_lag_behind_earlier_nodes() {
    let mut trail = Trail::tapered(12, 0.15, 0.04).expect("valid trail");
    trail.set_target(Point::new(60.0, 20.0));

    for tick in 0..500 {
        trail.tick();
        for index in 1..trail.len() {
            let ahead = trail.lag(index - 1).expect("node exists");
            let behind = trail.lag(index).expect("node exists");
            assert!(
                behind + 1e-9 >= ahead,
                "tick {tick}: node {index} ({behind}) ahead of node {} ({ahead})",
                index - 1
            );
        }
    }
}

#[test]
fn test_single_node_never_overshoots() {
    let mut trail = Trail::new(vec![0.9]).expect("valid trail");
    let target = Point::new(37.0, -12.0);
    trail.set_target(target);

    let mut previous = trail.nodes()[0].position();
    for _ in 0..200 {
        trail.tick();
        let current = trail.nodes()[0].position();

        assert!(current.x >= previous.x && current.x <= target.x);
        assert!(current.y <= previous.y && current.y >= target.y);
        previous = current;
    }
}

#[test]
fn test_opacity_strictly_decreasing() {
    let trail = Trail::tapered(12, 0.15, 0.04).expect("valid trail");

    assert_eq!(trail.opacity(0), 1.0);
    for index in 1..trail.len() {
        assert!(trail.opacity(index) < trail.opacity(index - 1));
        assert!(trail.opacity(index) > 0.0);
    }
}

#[test]
fn test_retarget_mid_flight() {
    let mut trail = Trail::tapered(4, 0.4, 0.1).expect("valid trail");
    trail.set_target(Point::new(50.0, 0.0));
    for _ in 0..10 {
        trail.tick();
    }

    trail.set_target(Point::ORIGIN);
    settle(&mut trail);

    assert!(trail.is_settled(EPSILON));
    assert_eq!(trail.target(), Point::ORIGIN);
}
