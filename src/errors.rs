// Error types for agrobot

use crate::notifications::Severity;
use crate::robot::DashboardOutput;
use snafu::Snafu;
use std::{io, sync::mpsc::SendError};

#[derive(Debug, Snafu)]
pub enum AgrobotError {
    // Path capture errors
    #[snafu(display(
        "A field boundary needs at least 3 points, the drawn path has {points}"
    ))]
    PathValidation { points: usize },

    // Redundant control commands
    #[snafu(display("Robot is already working"))]
    AlreadyWorking,
    #[snafu(display("Robot is already stopped"))]
    AlreadyIdle,

    // Errors while publishing simulation output
    #[snafu(display("Error broadcasting dashboard output"))]
    OutputBroadcastError {
        source: Box<SendError<DashboardOutput>>,
    },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Dashboard errors
    #[snafu(display("Could not start dashboard: {description}"))]
    DashboardStartError { description: String },

    // Task log export
    #[snafu(display("Error writing task log export"))]
    ExportError { source: io::Error },
}

impl AgrobotError {
    /// Severity used when the error is surfaced to the operator as a notification.
    pub fn severity(&self) -> Severity {
        match self {
            AgrobotError::PathValidation { .. }
            | AgrobotError::AlreadyWorking
            | AgrobotError::AlreadyIdle => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether the caller can carry on after surfacing the error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AgrobotError::PathValidation { .. }
                | AgrobotError::AlreadyWorking
                | AgrobotError::AlreadyIdle
        )
    }
}

impl From<SendError<DashboardOutput>> for AgrobotError {
    fn from(value: SendError<DashboardOutput>) -> Self {
        AgrobotError::OutputBroadcastError {
            source: Box::new(value),
        }
    }
}
