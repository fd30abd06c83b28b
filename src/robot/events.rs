use crate::notifications::{Notification, Severity};

/// How long ambient status messages stay on screen.
pub(crate) const AMBIENT_EVENT_DURATION_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmbientEvent {
    pub severity: Severity,
    pub message: &'static str,
}

impl AmbientEvent {
    pub fn to_notification(&self) -> Notification {
        Notification::new(self.severity, self.message, AMBIENT_EVENT_DURATION_MS)
    }
}

/// Status chatter the simulated robot reports at random.
pub const AMBIENT_EVENTS: [AmbientEvent; 5] = [
    AmbientEvent {
        severity: Severity::Info,
        message: "Robot operating normally",
    },
    AmbientEvent {
        severity: Severity::Warning,
        message: "Obstacle detected, adjusting path",
    },
    AmbientEvent {
        severity: Severity::Info,
        message: "Seed level optimal",
    },
    AmbientEvent {
        severity: Severity::Success,
        message: "Reached waypoint successfully",
    },
    AmbientEvent {
        severity: Severity::Info,
        message: "GPS signal strong",
    },
];

/// How long a camera detection result stays on screen.
pub(crate) const DETECTION_DURATION_MS: u64 = 3000;

/// Results the camera detector can report for a captured photo.
pub const DETECTIONS: [AmbientEvent; 4] = [
    AmbientEvent {
        severity: Severity::Warning,
        message: "Animal Detected",
    },
    AmbientEvent {
        severity: Severity::Success,
        message: "Healthy Crops",
    },
    AmbientEvent {
        severity: Severity::Info,
        message: "Normal Operation",
    },
    AmbientEvent {
        severity: Severity::Warning,
        message: "Obstacle Found",
    },
];
