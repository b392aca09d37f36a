//! The robot session: one room, one robot, and the commit/rollback rules
//! around command execution.

use crate::error::{RobotError, RobotResult};
use crate::interpreter::CommandInterpreter;
use crate::room::Room;
use crate::turtle::{Heading, RobotPose};
use std::fmt;
use tracing::{debug, info, warn};

/// Position and heading after a successful command sequence.
///
/// Displays as `Report: {X} {Y} {D}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl From<RobotPose> for Report {
    fn from(pose: RobotPose) -> Self {
        Self {
            x: pose.position.x,
            y: pose.position.y,
            heading: pose.heading,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report: {} {} {}", self.x, self.y, self.heading)
    }
}

/// The committed room and robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub room: Room,
    pub robot: RobotPose,
}

/// Owns the single session and interprets command strings against it.
///
/// Starts uninitialized. Not synchronized; callers that share it across
/// threads wrap it in a lock.
#[derive(Clone, Debug, Default)]
pub struct RobotEngine {
    interpreter: CommandInterpreter,
    session: Option<Session>,
}

impl RobotEngine {
    /// Creates an uninitialized engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the room and robot wholesale.
    ///
    /// # Errors
    ///
    /// [`RobotError::StartOutsideRoom`] when `robot` does not stand inside
    /// `room`. The previous session, if any, is kept.
    pub fn initialize(&mut self, room: Room, robot: RobotPose) -> RobotResult<()> {
        if !room.contains(robot.position.as_i64vec2()) {
            warn!(?room, ?robot, "rejected start position outside the room");
            return Err(RobotError::StartOutsideRoom);
        }

        info!(?room, ?robot, "robot initialized");
        self.session = Some(Session { room, robot });
        Ok(())
    }

    /// Checks that `commands` is non-empty and only uses known symbols.
    ///
    /// # Errors
    ///
    /// [`RobotError::EmptyCommands`] or [`RobotError::InvalidCommandSymbol`].
    pub fn validate_command_syntax(&self, commands: &str) -> RobotResult<()> {
        self.interpreter.parse(commands).map(|_| ())
    }

    /// Runs `commands` against the committed robot.
    ///
    /// The whole sequence is replayed on a working copy; only the final
    /// position is bounds-checked. On success the working copy becomes the
    /// committed robot. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`RobotError::EmptyCommands`] / [`RobotError::InvalidCommandSymbol`]
    ///   for bad input.
    /// - [`RobotError::Uninitialized`] if [`initialize`](Self::initialize)
    ///   never succeeded.
    /// - [`RobotError::WalkedOutsideRoom`] if the sequence ends off the grid.
    pub fn execute_commands(&mut self, commands: &str) -> RobotResult<Report> {
        let ops = self.interpreter.parse(commands)?;
        let session = self.session.as_mut().ok_or(RobotError::Uninitialized)?;
        debug!(count = ops.len(), "replaying commands");

        let end = self.interpreter.replay(session.robot, &ops);
        let Some(position) = session.room.to_grid(end.position) else {
            warn!(
                x = end.position.x,
                y = end.position.y,
                room = ?session.room,
                "command sequence left the room, discarding"
            );
            return Err(RobotError::WalkedOutsideRoom);
        };

        session.robot = RobotPose {
            position,
            heading: end.heading,
        };
        let report = Report::from(session.robot);
        info!(%report, "commands executed");
        Ok(report)
    }

    /// The current session, or `None` before the first initialization.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The report for the committed robot, without running any commands.
    pub fn report(&self) -> Option<Report> {
        self.session.map(|s| Report::from(s.robot))
    }
}
