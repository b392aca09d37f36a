//! Shape checks for initialization input.
//!
//! Runs before the engine sees anything, so a rejected request never touches
//! session state. Every rule is checked independently and all failures are
//! reported together.

use crate::error::{RobotError, RobotResult, ValidationErrors};
use crate::room::Room;
use crate::turtle::{Heading, RobotPose};
use serde::Deserialize;

/// Raw initialization parameters as they arrive from a client.
///
/// Field names match the query string of `InitializeRobot`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub room_width: i32,
    pub room_depth: i32,
    pub start_position_x: i32,
    pub start_position_y: i32,
    pub robot_start_direction: String,
}

/// Validates `params` and returns the typed room and starting pose.
///
/// # Errors
///
/// Returns [`RobotError::Validation`](crate::RobotError::Validation) listing
/// every violated rule. Robot fields are reported before room fields.
pub fn validate(params: &InitializeParams) -> RobotResult<(Room, RobotPose)> {
    let mut errors = ValidationErrors::new();

    non_negative(&mut errors, "Start Position X", params.start_position_x);
    non_negative(&mut errors, "Start Position Y", params.start_position_y);
    let heading = params.robot_start_direction.parse::<Heading>().ok();
    if heading.is_none() {
        errors.push("Direction", "Direction must be N, E, S or W");
    }

    non_negative(&mut errors, "Width", params.room_width);
    non_negative(&mut errors, "Depth", params.room_depth);

    errors.into_result()?;

    let heading =
        heading.ok_or_else(|| RobotError::internal("direction accepted without a heading"))?;
    Ok((
        Room::new(params.room_width, params.room_depth),
        RobotPose::new(params.start_position_x, params.start_position_y, heading),
    ))
}

fn non_negative(errors: &mut ValidationErrors, field: &'static str, value: i32) {
    if value < 0 {
        errors.push(field, format!("{field} can not be negative"));
    }
}
