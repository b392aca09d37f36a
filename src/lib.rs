//! # grid-robot
//!
//! Simulates a single robot inside a rectangular room and exposes it over HTTP.
//!
//! A client initializes a [`Room`] and a starting [`RobotPose`], then sends
//! strings of `L` (turn left), `R` (turn right) and `F` (forward) commands.
//! The [`RobotEngine`] replays each string on a working copy and commits it
//! only if the robot ends inside the room, producing a [`Report`].

pub mod config;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod room;
pub mod service;
pub mod turtle;
pub mod validation;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use interpreter::*;
pub use room::*;
pub use service::*;
pub use turtle::*;
pub use validation::*;
