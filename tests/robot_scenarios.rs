// tests/robot_scenarios.rs
use grid_robot::{
    ErrorKind, Heading, InitializeParams, RobotEngine, RobotError, RobotPose, Room, validate,
};
use proptest::prelude::*;

fn params(width: i32, depth: i32, x: i32, y: i32, dir: &str) -> InitializeParams {
    InitializeParams {
        room_width: width,
        room_depth: depth,
        start_position_x: x,
        start_position_y: y,
        robot_start_direction: dir.to_string(),
    }
}

/// Validates and initializes in one go, the way the HTTP layer does.
fn setup(width: i32, depth: i32, x: i32, y: i32, dir: &str) -> Result<RobotEngine, RobotError> {
    let (room, robot) = validate(&params(width, depth, x, y, dir))?;
    let mut engine = RobotEngine::new();
    engine.initialize(room, robot)?;
    Ok(engine)
}

#[test]
fn test_reference_walk() {
    // 5x5 room, robot at (1, 1) facing north.
    // F -> (1, 2) N, L -> W, L -> S, R -> W.
    let mut engine = setup(5, 5, 1, 1, "N").unwrap();
    let report = engine.execute_commands("FLLR").unwrap();
    assert_eq!(report.to_string(), "Report: 1 2 W");
}

#[test]
fn test_walk_off_the_west_edge_is_rejected() {
    let mut engine = setup(5, 5, 1, 1, "N").unwrap();
    let err = engine.execute_commands("FLLRFFFFFFFFFFF").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(err.to_string(), "The robot walked outside the room bounds.");

    // Nothing from the in-bounds prefix was committed.
    assert_eq!(engine.report().unwrap().to_string(), "Report: 1 1 N");
}

#[test]
fn test_negative_width() {
    let err = setup(-5, 5, 1, 1, "N").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeValidation);
    assert!(err.to_string().contains("Width can not be negative"));
}

#[test]
fn test_start_outside_room() {
    let err = setup(5, 5, 8, 8, "N").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(err.to_string(), "The robot can not start from outside the room");
}

#[test]
fn test_execute_before_initialize_is_a_precondition_failure() {
    // Deliberate choice: no placeholder report, no silent no-op.
    let mut engine = RobotEngine::new();
    let err = engine.execute_commands("F").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Uninitialized);
    assert!(engine.session().is_none());
}

#[test]
fn test_far_edge_is_reachable() {
    let mut engine = setup(3, 2, 0, 0, "E").unwrap();
    let report = engine.execute_commands("FFFLFF").unwrap();
    assert_eq!(report.to_string(), "Report: 3 2 N");

    let err = engine.execute_commands("F").unwrap_err();
    assert_eq!(err, RobotError::WalkedOutsideRoom);
    assert_eq!(engine.report().unwrap().to_string(), "Report: 3 2 N");
}

#[test]
fn test_lowercase_commands() {
    let mut engine = setup(5, 5, 1, 1, "N").unwrap();
    let report = engine.execute_commands("fllr").unwrap();
    assert_eq!(report.to_string(), "Report: 1 2 W");
}

#[test]
fn test_invalid_symbols_leave_state_alone() {
    let mut engine = setup(5, 5, 1, 1, "N").unwrap();
    let err = engine.execute_commands("FFX").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
    assert_eq!(
        err.to_string(),
        "The commands can not contain characters other than L, R and F"
    );
    assert_eq!(engine.report().unwrap().to_string(), "Report: 1 1 N");
}

fn arb_heading() -> impl Strategy<Value = Heading> {
    prop_oneof![
        Just(Heading::N),
        Just(Heading::E),
        Just(Heading::S),
        Just(Heading::W),
    ]
}

fn arb_start() -> impl Strategy<Value = (Room, RobotPose)> {
    (0i32..20, 0i32..20, arb_heading()).prop_flat_map(|(w, d, h)| {
        (0..=w, 0..=d).prop_map(move |(x, y)| (Room::new(w, d), RobotPose::new(x, y, h)))
    })
}

proptest! {
    #[test]
    fn turning_in_place_keeps_pose((room, robot) in arb_start()) {
        let mut engine = RobotEngine::new();
        engine.initialize(room, robot).unwrap();
        let report = engine.execute_commands("LRLR").unwrap();
        prop_assert_eq!(report.x, robot.position.x);
        prop_assert_eq!(report.y, robot.position.y);
        prop_assert_eq!(report.heading, robot.heading);

        let report = engine.execute_commands("LLLL").unwrap();
        prop_assert_eq!(report.heading, robot.heading);
        let report = engine.execute_commands("RRRR").unwrap();
        prop_assert_eq!(report.heading, robot.heading);
    }

    #[test]
    fn committed_pose_always_inside_room(
        (room, robot) in arb_start(),
        commands in "[LRF]{1,40}",
    ) {
        let mut engine = RobotEngine::new();
        engine.initialize(room, robot).unwrap();
        let before = *engine.session().unwrap();
        match engine.execute_commands(&commands) {
            Ok(report) => {
                prop_assert!(report.x >= 0 && report.x <= room.width);
                prop_assert!(report.y >= 0 && report.y <= room.depth);
            }
            Err(err) => {
                prop_assert_eq!(err, RobotError::WalkedOutsideRoom);
                prop_assert_eq!(*engine.session().unwrap(), before);
            }
        }
    }

    #[test]
    fn execution_is_deterministic(
        (room, robot) in arb_start(),
        commands in "[LRFlrf]{1,40}",
    ) {
        let mut a = RobotEngine::new();
        let mut b = RobotEngine::new();
        a.initialize(room, robot).unwrap();
        b.initialize(room, robot).unwrap();
        prop_assert_eq!(a.execute_commands(&commands), b.execute_commands(&commands));
    }
}
