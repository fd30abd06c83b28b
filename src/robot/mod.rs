pub(crate) mod events;
pub mod runner;
pub mod scheduler;
pub mod simulator;

use std::fmt::Display;

pub use events::{AMBIENT_EVENTS, AmbientEvent, DETECTIONS};
pub use runner::run_simulation;
pub use scheduler::TickScheduler;
pub use simulator::{SimulatorConfig, TelemetrySimulator};

use serde::{Deserialize, Serialize};

use crate::{notifications::Notification, path::FieldBoundary};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RobotStatus {
    Idle,
    Working,
    Error,
}

impl Display for RobotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RobotStatus::Idle => write!(f, "idle"),
            RobotStatus::Working => write!(f, "working"),
            RobotStatus::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// Snapshot of the simulated robot, published to the dashboard after every change.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RobotState {
    pub id: String,
    pub name: String,
    pub status: RobotStatus,
    /// Battery charge percentage, 0 to 100
    pub battery: u8,
    pub location: Location,
    /// Acres covered so far, never above `total_area`
    pub area_covered: f64,
    /// Acres in the current field
    pub total_area: f64,
    pub time_remaining_min: u32,
    pub speed_kmh: f32,
}

impl Default for RobotState {
    fn default() -> Self {
        Self {
            id: "robot_001".to_string(),
            name: "AgroBot Alpha".to_string(),
            status: RobotStatus::Idle,
            battery: 78,
            location: Location {
                lat: 28.6139,
                lng: 77.2090,
            },
            area_covered: 2.5,
            total_area: 5.0,
            time_remaining_min: 145,
            speed_kmh: 2.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Stop,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "Forward"),
            Direction::Backward => write!(f, "Backward"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
            Direction::Stop => write!(f, "Stop"),
        }
    }
}

/// Phrases the simulated voice recognizer can pick up.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoiceCommand {
    StartRobot,
    StopRobot,
    BatteryStatus,
    AreaCovered,
    EmergencyStop,
}

impl VoiceCommand {
    pub const ALL: [VoiceCommand; 5] = [
        VoiceCommand::StartRobot,
        VoiceCommand::StopRobot,
        VoiceCommand::BatteryStatus,
        VoiceCommand::AreaCovered,
        VoiceCommand::EmergencyStop,
    ];

    /// The phrase as it was heard.
    pub fn phrase(&self) -> &'static str {
        match self {
            VoiceCommand::StartRobot => "Start robot",
            VoiceCommand::StopRobot => "Stop robot",
            VoiceCommand::BatteryStatus => "Battery status",
            VoiceCommand::AreaCovered => "Area covered",
            VoiceCommand::EmergencyStop => "Emergency stop",
        }
    }
}

/// Operator commands sent from the dashboard to the simulation thread.
#[derive(Clone, Debug, PartialEq)]
pub enum RobotCommand {
    Start,
    Stop,
    EmergencyStop,
    BeginMission(FieldBoundary),
    Manual(Direction),
    /// Listen for a voice command and act on whatever was recognized
    Voice,
    CapturePhoto,
}

/// Everything the simulation thread publishes to the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardOutput {
    State(Box<RobotState>),
    /// Boundary of a mission the simulator has accepted
    Field(Box<FieldBoundary>),
    Notification(Notification),
}
