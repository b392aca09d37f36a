//! The room grid; both bounds are inclusive.

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

/// The rectangular grid the robot lives in.
///
/// Both bounds are inclusive: a room of width 5 has valid columns `0..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub width: i32,
    pub depth: i32,
}

impl Room {
    pub fn new(width: i32, depth: i32) -> Self {
        Self { width, depth }
    }

    /// Whether `position` lies on the grid.
    pub fn contains(&self, position: I64Vec2) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x <= i64::from(self.width)
            && position.y <= i64::from(self.depth)
    }

    /// Narrows an in-room working position back to grid coordinates.
    ///
    /// Returns `None` when the position lies outside the room.
    pub fn to_grid(self, position: I64Vec2) -> Option<IVec2> {
        if !self.contains(position) {
            return None;
        }
        let x = i32::try_from(position.x).ok()?;
        let y = i32::try_from(position.y).ok()?;
        Some(IVec2::new(x, y))
    }
}
