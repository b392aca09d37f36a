//! Robot pose and the operations that change it.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four compass headings the robot can face.
///
/// `N` points along `+Y`, `E` along `+X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    N,
    E,
    S,
    W,
}

impl Heading {
    /// All headings in clockwise order starting at north.
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    /// Rotates 90 degrees counter-clockwise: N -> W -> S -> E -> N.
    pub const fn turn_left(self) -> Self {
        match self {
            Self::N => Self::W,
            Self::W => Self::S,
            Self::S => Self::E,
            Self::E => Self::N,
        }
    }

    /// Rotates 90 degrees clockwise: N -> E -> S -> W -> N.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::N => Self::E,
            Self::E => Self::S,
            Self::S => Self::W,
            Self::W => Self::N,
        }
    }

    /// Unit step taken when moving forward with this heading.
    pub const fn forward(self) -> I64Vec2 {
        match self {
            Self::N => I64Vec2::Y,
            Self::E => I64Vec2::X,
            Self::S => I64Vec2::NEG_Y,
            Self::W => I64Vec2::NEG_X,
        }
    }

    /// One-letter code used in reports.
    pub const fn code(self) -> char {
        match self {
            Self::N => 'N',
            Self::E => 'E',
            Self::S => 'S',
            Self::W => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returned when a heading token is not exactly `N`, `E`, `S` or `W`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid heading {0:?}")]
pub struct ParseHeadingError(pub String);

impl FromStr for Heading {
    type Err = ParseHeadingError;

    /// Case-sensitive: `"n"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::N),
            "E" => Ok(Self::E),
            "S" => Ok(Self::S),
            "W" => Ok(Self::W),
            other => Err(ParseHeadingError(other.to_string())),
        }
    }
}

/// The committed pose of the robot.
///
/// Only ever holds positions that lie inside the current room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPose {
    /// Grid cell the robot stands on.
    pub position: IVec2,

    /// Direction the robot faces.
    pub heading: Heading,
}

impl RobotPose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

/// The working copy of a pose while a command sequence is replayed.
///
/// Coordinates are widened to 64 bits so a long sequence can wander past
/// `i32` range without overflowing before the bounds check sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobotTurtleState {
    pub position: I64Vec2,
    pub heading: Heading,
}

impl From<RobotPose> for RobotTurtleState {
    fn from(pose: RobotPose) -> Self {
        Self {
            position: pose.position.as_i64vec2(),
            heading: pose.heading,
        }
    }
}

impl RobotTurtleState {
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Moves one unit along the current heading.
    pub fn advance(&mut self) {
        self.position += self.heading.forward();
    }

    /// Applies a single operation.
    pub fn apply(&mut self, op: RobotOp) {
        match op {
            RobotOp::TurnLeft => self.turn_left(),
            RobotOp::TurnRight => self.turn_right(),
            RobotOp::Forward => self.advance(),
        }
    }
}

/// Operations that can be performed by the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotOp {
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
    /// Move one unit forward (`F`).
    Forward,
}
