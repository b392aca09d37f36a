//! HTTP surface for the robot engine.
//!
//! Two routes, both `POST` with query-string parameters and `text/plain`
//! bodies:
//!
//! - `/api/Robot/InitializeRobot?roomWidth=&roomDepth=&startPositionX=&startPositionY=&robotStartDirection=`
//! - `/api/Robot/ExecuteCommands?commands=`
//!
//! The engine sits behind a single mutex. Handlers never await while holding it.

use crate::engine::RobotEngine;
use crate::error::{ErrorKind, RobotError, RobotResult};
use crate::validation::{self, InitializeParams};
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, warn};

pub const INITIALIZE_ROUTE: &str = "/api/Robot/InitializeRobot";
pub const EXECUTE_ROUTE: &str = "/api/Robot/ExecuteCommands";

/// Shared handler state: the one engine of this process.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    engine: Arc<Mutex<RobotEngine>>,
}

impl AppState {
    pub fn new(engine: RobotEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// # Errors
    ///
    /// Whatever `f` returns, or [`RobotError::Internal`] if a previous holder
    /// panicked and poisoned the lock.
    pub fn with_engine<T>(
        &self,
        f: impl FnOnce(&mut RobotEngine) -> RobotResult<T>,
    ) -> RobotResult<T> {
        let mut engine = self
            .engine
            .lock()
            .map_err(|_| RobotError::internal("robot state lock poisoned"))?;
        f(&mut engine)
    }
}

/// Builds the router with both robot routes bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INITIALIZE_ROUTE, post(initialize_robot))
        .route(EXECUTE_ROUTE, post(execute_commands))
        .with_state(state)
}

impl IntoResponse for RobotError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::ShapeValidation | ErrorKind::OutOfBounds | ErrorKind::InvalidSyntax => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::Uninitialized => StatusCode::PRECONDITION_FAILED,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

async fn initialize_robot(
    State(state): State<AppState>,
    Query(params): Query<InitializeParams>,
) -> Result<&'static str, RobotError> {
    debug!(?params, "initialize request");
    let (room, robot) = validation::validate(&params)?;
    state.with_engine(|engine| engine.initialize(room, robot))?;
    Ok("Robot initialized")
}

#[derive(Debug, Deserialize)]
struct ExecuteParams {
    commands: Option<String>,
}

async fn execute_commands(
    State(state): State<AppState>,
    Query(params): Query<ExecuteParams>,
) -> Result<String, RobotError> {
    debug!(?params, "execute request");
    let commands = params.commands.unwrap_or_default();
    // Empty input is rejected before the lock is taken.
    if commands.is_empty() {
        return Err(RobotError::EmptyCommands);
    }
    let report = state.with_engine(|engine| engine.execute_commands(&commands))?;
    Ok(report.to_string())
}
