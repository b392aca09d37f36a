//! Interpreter that turns a command string into robot operations and replays
//! them against a pose.
//!
//! The entry point is [`CommandInterpreter`]: call
//! [`CommandInterpreter::parse`] and then [`CommandInterpreter::replay`].

use crate::error::{RobotError, RobotResult};
use crate::turtle::{RobotOp, RobotPose, RobotTurtleState};

/// The command alphabet: `L` turns left, `R` turns right, `F` moves forward.
const SYMBOLS: [(char, RobotOp); 3] = [
    ('L', RobotOp::TurnLeft),
    ('R', RobotOp::TurnRight),
    ('F', RobotOp::Forward),
];

/// Maps command symbols to robot operations.
///
/// Symbols are case-insensitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    /// Looks up the operation for `symbol`, ignoring case.
    pub fn op_for(&self, symbol: char) -> Option<RobotOp> {
        let symbol = symbol.to_ascii_uppercase();
        SYMBOLS
            .iter()
            .find(|(known, _)| *known == symbol)
            .map(|&(_, op)| op)
    }

    /// Parses `commands` into operations, left to right.
    ///
    /// # Errors
    ///
    /// [`RobotError::EmptyCommands`] for an empty string and
    /// [`RobotError::InvalidCommandSymbol`] for the first symbol outside the alphabet.
    pub fn parse(&self, commands: &str) -> RobotResult<Vec<RobotOp>> {
        if commands.is_empty() {
            return Err(RobotError::EmptyCommands);
        }

        commands
            .chars()
            .map(|symbol| {
                self.op_for(symbol)
                    .ok_or(RobotError::InvalidCommandSymbol { symbol })
            })
            .collect()
    }

    /// Replays `ops` starting from `start` and returns the final working pose.
    ///
    /// No bounds are checked here; intermediate and final positions may lie
    /// anywhere.
    pub fn replay(&self, start: RobotPose, ops: &[RobotOp]) -> RobotTurtleState {
        let mut turtle = RobotTurtleState::from(start);
        for &op in ops {
            turtle.apply(op);
        }
        turtle
    }
}
