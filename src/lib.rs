// Library interface for agrobot
// This allows integration tests to access internal modules

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod i18n;
pub mod notifications;
pub mod path;
pub mod robot;
pub mod tasks;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::AgrobotError;
pub use notifications::{Notification, NotificationQueue, Severity};
pub use path::{FieldBoundary, PathCapture, PathPoint};
pub use robot::{
    DashboardOutput, RobotCommand, RobotState, RobotStatus, TelemetrySimulator, TickScheduler,
    VoiceCommand,
};
