use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    AgrobotError, dashboard,
    notifications::{Feedback, Notification},
    path::FieldBoundary,
};

use super::{
    AMBIENT_EVENTS, AmbientEvent, DETECTIONS, Direction, RobotState, RobotStatus, VoiceCommand,
    events::DETECTION_DURATION_MS,
};

/// Acres covered per working tick.
pub const AREA_STEP_ACRES: f64 = 0.1;
/// Minutes taken off the remaining time per working tick.
pub const TIME_STEP_MIN: u32 = 2;
/// Battery percentage drained per working tick.
pub const BATTERY_STEP: u8 = 1;
/// The low battery warning fires while `LOW_BATTERY_FLOOR < battery <= LOW_BATTERY_CEILING`.
pub const LOW_BATTERY_CEILING: u8 = 20;
pub const LOW_BATTERY_FLOOR: u8 = 15;
pub const DEFAULT_EVENT_PROBABILITY: f64 = 0.08;

const LOW_BATTERY_DURATION_MS: u64 = 4000;
const MANUAL_CONTROL_DURATION_MS: u64 = 1500;
const VOICE_HEARD_DURATION_MS: u64 = 2000;
const VOICE_REPORT_DURATION_MS: u64 = 3000;
const PHOTO_CAPTURED_DURATION_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    /// Chance per tick of reporting one ambient event
    pub event_probability: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            event_probability: DEFAULT_EVENT_PROBABILITY,
        }
    }
}

/// Owns the robot state and funnels every mutation through the control
/// operations and [`TelemetrySimulator::tick`], so clamping and status rules
/// live in one place.
///
/// Randomness is injected so tests can seed it or replace it with a fixed
/// sequence.
pub struct TelemetrySimulator<R: Rng> {
    state: RobotState,
    event_probability: f64,
    rng: R,
    field: Option<FieldBoundary>,
    ticks: u64,
}

impl TelemetrySimulator<StdRng> {
    pub fn seeded(state: RobotState, config: SimulatorConfig, seed: u64) -> Self {
        Self::new(state, config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(state: RobotState, config: SimulatorConfig) -> Self {
        Self::new(state, config, StdRng::from_entropy())
    }
}

impl<R: Rng> TelemetrySimulator<R> {
    pub fn new(state: RobotState, config: SimulatorConfig, rng: R) -> Self {
        let event_probability = if config.event_probability.is_finite() {
            config.event_probability.clamp(0., 1.)
        } else {
            warn!(
                "Invalid event probability {}, ambient events disabled",
                config.event_probability
            );
            0.
        };

        Self {
            state,
            event_probability,
            rng,
            field: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Boundary of the mission currently running, if one was started from a drawn path.
    pub fn field(&self) -> Option<&FieldBoundary> {
        self.field.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation by one step and returns the notifications it raised.
    pub fn tick(&mut self) -> Vec<Notification> {
        self.ticks += 1;
        let mut notifications = Vec::new();

        if self.state.status == RobotStatus::Working {
            self.advance_mission();

            // re-fires on every tick spent inside the band, not only when entering it
            if self.state.battery > LOW_BATTERY_FLOOR && self.state.battery <= LOW_BATTERY_CEILING
            {
                warn!("Low battery: {}%", self.state.battery);
                notifications.push(Notification::warning(
                    format!("Low battery: {}% remaining", self.state.battery),
                    LOW_BATTERY_DURATION_MS,
                ));
            }
        }

        if let Some(event) = self.draw_ambient_event() {
            debug!("Ambient event on tick {}: {}", self.ticks, event.message);
            notifications.push(event.to_notification());
        }

        notifications
    }

    fn advance_mission(&mut self) {
        let state = &mut self.state;
        if state.area_covered < state.total_area {
            state.area_covered = (state.area_covered + AREA_STEP_ACRES).min(state.total_area);
            state.time_remaining_min = state.time_remaining_min.saturating_sub(TIME_STEP_MIN);
        }
        if state.battery > 0 {
            state.battery = state.battery.saturating_sub(BATTERY_STEP);
        }
        debug!(
            "Tick {}: battery {}%, area {:.2}/{:.2}, {} min remaining",
            self.ticks,
            state.battery,
            state.area_covered,
            state.total_area,
            state.time_remaining_min
        );
    }

    fn draw_ambient_event(&mut self) -> Option<AmbientEvent> {
        if self.event_probability > 0. && self.rng.gen_bool(self.event_probability) {
            let index = self.rng.gen_range(0..AMBIENT_EVENTS.len());
            Some(AMBIENT_EVENTS[index])
        } else {
            None
        }
    }

    /// Puts the robot to work. Allowed from idle and from error.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyWorking` without touching the state if the robot is working.
    pub fn start(&mut self) -> Result<Notification, AgrobotError> {
        if self.state.status == RobotStatus::Working {
            return Err(AgrobotError::AlreadyWorking);
        }
        info!("Robot started from {}", self.state.status);
        self.state.status = RobotStatus::Working;
        Ok(
            Notification::success("Robot started successfully!", 3000)
                .with_feedback(Feedback::Confirm),
        )
    }

    /// Idles the robot.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyIdle` without touching the state if the robot is idle.
    pub fn stop(&mut self) -> Result<Notification, AgrobotError> {
        if self.state.status == RobotStatus::Idle {
            return Err(AgrobotError::AlreadyIdle);
        }
        info!("Robot stopped from {}", self.state.status);
        self.state.status = RobotStatus::Idle;
        Ok(Notification::info("Robot stopped successfully", 3000))
    }

    /// Halts the robot from any status. Repeated calls keep it in error.
    pub fn emergency_stop(&mut self) -> Notification {
        warn!("Emergency stop activated while {}", self.state.status);
        self.state.status = RobotStatus::Error;
        Notification::error("EMERGENCY STOP ACTIVATED!", 5000).with_feedback(Feedback::Emergency)
    }

    /// Starts a mission over a confirmed boundary, whatever the current status.
    pub fn begin_mission(&mut self, field: FieldBoundary) -> Notification {
        info!(
            "Mission started over a field with {} vertices",
            field.vertices().len()
        );
        self.field = Some(field);
        self.state.status = RobotStatus::Working;
        Notification::success("Path confirmed! Starting mission...", 3000)
            .with_feedback(Feedback::Confirm)
    }

    pub fn manual_control(&mut self, direction: Direction) -> Notification {
        debug!("Manual control: {}", direction);
        Notification::info(
            format!("Manual control: {direction}"),
            MANUAL_CONTROL_DURATION_MS,
        )
        .with_feedback(Feedback::Tap)
    }

    /// Simulates the voice recognizer hearing one command at random and acts on it.
    pub fn voice_command(&mut self) -> Vec<Notification> {
        let command = VoiceCommand::ALL[self.rng.gen_range(0..VoiceCommand::ALL.len())];
        self.perform_voice_command(command)
    }

    /// Acts on a recognized voice command through the same operations as the
    /// dashboard buttons. Returns the echo of what was heard followed by the
    /// outcome.
    pub fn perform_voice_command(&mut self, command: VoiceCommand) -> Vec<Notification> {
        info!("Voice command: {}", command.phrase());
        let heard = Notification::info(
            format!("Voice: \"{}\"", command.phrase()),
            VOICE_HEARD_DURATION_MS,
        );
        let outcome = match command {
            VoiceCommand::StartRobot => self.start(),
            VoiceCommand::StopRobot => self.stop(),
            VoiceCommand::BatteryStatus => Ok(Notification::info(
                format!("Battery: {}", dashboard::battery_text(&self.state)),
                VOICE_REPORT_DURATION_MS,
            )),
            VoiceCommand::AreaCovered => Ok(Notification::info(
                format!("Area: {} acres", dashboard::area_text(&self.state)),
                VOICE_REPORT_DURATION_MS,
            )),
            VoiceCommand::EmergencyStop => Ok(self.emergency_stop()),
        };
        let outcome = outcome.unwrap_or_else(|e| {
            warn!("Voice command rejected: {}", e);
            Notification::from(&e)
        });
        vec![heard, outcome]
    }

    /// Takes a photo and reports what the camera detector saw in it.
    pub fn capture_photo(&mut self) -> Vec<Notification> {
        let detection = DETECTIONS[self.rng.gen_range(0..DETECTIONS.len())];
        debug!("Photo captured, detected: {}", detection.message);
        vec![
            Notification::success("Photo captured successfully!", PHOTO_CAPTURED_DURATION_MS),
            Notification::new(
                detection.severity,
                detection.message,
                DETECTION_DURATION_MS,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use crate::path::{PathCapture, PathPoint};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    const QUIET: SimulatorConfig = SimulatorConfig {
        event_probability: 0.,
    };

    fn quiet_simulator(state: RobotState) -> TelemetrySimulator<StdRng> {
        TelemetrySimulator::seeded(state, QUIET, 7)
    }

    fn working(battery: u8) -> RobotState {
        RobotState {
            status: RobotStatus::Working,
            battery,
            ..RobotState::default()
        }
    }

    #[test]
    fn test_seed_state_single_working_tick() {
        let mut simulator = quiet_simulator(RobotState::default());
        assert_eq!(simulator.state().status, RobotStatus::Idle);

        simulator.start().unwrap();
        let notifications = simulator.tick();
        assert!(notifications.is_empty());

        let state = simulator.state();
        assert_eq!(state.battery, 77);
        assert_relative_eq!(state.area_covered, 2.6, epsilon = 1e-9);
        assert_eq!(state.time_remaining_min, 143);
    }

    #[test]
    fn test_area_saturates_at_total() {
        let mut simulator = quiet_simulator(working(100));
        for _ in 0..40 {
            simulator.tick();
        }
        assert_eq!(simulator.state().area_covered, 5.0);
        let time_at_full = simulator.state().time_remaining_min;

        for _ in 0..10 {
            simulator.tick();
        }
        assert_eq!(simulator.state().area_covered, 5.0);
        // time only moves while area is still being covered
        assert_eq!(simulator.state().time_remaining_min, time_at_full);
    }

    #[test]
    fn test_time_and_battery_floor_at_zero() {
        let mut simulator = quiet_simulator(RobotState {
            status: RobotStatus::Working,
            battery: 1,
            time_remaining_min: 1,
            area_covered: 0.,
            ..RobotState::default()
        });
        simulator.tick();
        simulator.tick();
        assert_eq!(simulator.state().battery, 0);
        assert_eq!(simulator.state().time_remaining_min, 0);
    }

    #[test]
    fn test_idle_and_error_ticks_leave_state_untouched() {
        for status in [RobotStatus::Idle, RobotStatus::Error] {
            let initial = RobotState {
                status,
                ..RobotState::default()
            };
            let mut simulator = quiet_simulator(initial.clone());
            for _ in 0..5 {
                assert!(simulator.tick().is_empty());
            }
            assert_eq!(simulator.state(), &initial);
            assert_eq!(simulator.ticks(), 5);
        }
    }

    #[test]
    fn test_low_battery_warning_band() {
        let mut simulator = quiet_simulator(working(22));

        // 22 -> 21: outside the band
        assert!(simulator.tick().is_empty());

        for expected in (16..=20).rev() {
            let notifications = simulator.tick();
            assert_eq!(simulator.state().battery, expected);
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].severity, Severity::Warning);
            assert_eq!(
                notifications[0].message,
                format!("Low battery: {expected}% remaining")
            );
        }

        // 16 -> 15: below the band
        assert!(simulator.tick().is_empty());
        assert_eq!(simulator.state().battery, 15);
    }

    #[test]
    fn test_no_low_battery_warning_when_not_working() {
        let mut simulator = quiet_simulator(RobotState {
            battery: 18,
            ..RobotState::default()
        });
        assert!(simulator.tick().is_empty());
    }

    #[test]
    fn test_ambient_event_forced_by_rng() {
        let always = SimulatorConfig {
            event_probability: DEFAULT_EVENT_PROBABILITY,
        };
        let mut simulator =
            TelemetrySimulator::new(RobotState::default(), always, StepRng::new(0, 0));
        let notifications = simulator.tick();
        assert_eq!(notifications.len(), 1);
        assert!(
            AMBIENT_EVENTS
                .iter()
                .any(|event| event.message == notifications[0].message
                    && event.severity == notifications[0].severity)
        );
        assert_eq!(notifications[0].duration_ms, 2000);

        let mut simulator =
            TelemetrySimulator::new(RobotState::default(), always, StepRng::new(u64::MAX, 0));
        assert!(simulator.tick().is_empty());
    }

    #[test]
    fn test_seeded_event_draws_are_reproducible() {
        let config = SimulatorConfig {
            event_probability: 0.5,
        };
        let mut first = TelemetrySimulator::seeded(RobotState::default(), config, 42);
        let mut second = TelemetrySimulator::seeded(RobotState::default(), config, 42);
        for _ in 0..50 {
            assert_eq!(first.tick(), second.tick());
        }
    }

    #[test]
    fn test_event_probability_is_clamped() {
        let mut simulator = TelemetrySimulator::seeded(
            RobotState::default(),
            SimulatorConfig {
                event_probability: 3.,
            },
            1,
        );
        assert_eq!(simulator.tick().len(), 1);

        let mut simulator = TelemetrySimulator::seeded(
            RobotState::default(),
            SimulatorConfig {
                event_probability: f64::NAN,
            },
            1,
        );
        assert!(simulator.tick().is_empty());
    }

    #[test]
    fn test_start_and_stop_transitions() {
        let mut simulator = quiet_simulator(RobotState::default());
        assert!(matches!(simulator.stop(), Err(AgrobotError::AlreadyIdle)));
        assert_eq!(simulator.state().status, RobotStatus::Idle);

        let notification = simulator.start().unwrap();
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(simulator.state().status, RobotStatus::Working);

        assert!(matches!(simulator.start(), Err(AgrobotError::AlreadyWorking)));
        assert_eq!(simulator.state().status, RobotStatus::Working);

        simulator.stop().unwrap();
        assert_eq!(simulator.state().status, RobotStatus::Idle);
    }

    #[test]
    fn test_emergency_stop_is_idempotent() {
        for status in [RobotStatus::Idle, RobotStatus::Working, RobotStatus::Error] {
            let mut simulator = quiet_simulator(RobotState {
                status,
                ..RobotState::default()
            });
            let notification = simulator.emergency_stop();
            assert_eq!(simulator.state().status, RobotStatus::Error);
            assert_eq!(notification.feedback, Some(Feedback::Emergency));
            simulator.emergency_stop();
            assert_eq!(simulator.state().status, RobotStatus::Error);
        }
    }

    #[test]
    fn test_start_recovers_from_error() {
        let mut simulator = quiet_simulator(RobotState::default());
        simulator.emergency_stop();
        simulator.start().unwrap();
        assert_eq!(simulator.state().status, RobotStatus::Working);

        simulator.emergency_stop();
        simulator.stop().unwrap();
        assert_eq!(simulator.state().status, RobotStatus::Idle);
    }

    #[test]
    fn test_confirmed_path_begins_mission() {
        let mut capture = PathCapture::new();
        capture.begin(PathPoint::new(0., 0.));
        capture.extend(PathPoint::new(20., 0.));
        capture.extend(PathPoint::new(20., 20.));
        capture.end();

        let mut simulator = quiet_simulator(RobotState::default());
        let boundary = capture.confirm().unwrap();
        simulator.begin_mission(boundary.clone());

        assert_eq!(simulator.state().status, RobotStatus::Working);
        assert_eq!(simulator.field(), Some(&boundary));

        // a confirmed path restarts the mission even if already working
        simulator.begin_mission(boundary);
        assert_eq!(simulator.state().status, RobotStatus::Working);
    }

    #[test]
    fn test_manual_control_does_not_mutate_state() {
        let mut simulator = quiet_simulator(RobotState::default());
        let notification = simulator.manual_control(Direction::Left);
        assert_eq!(notification.message, "Manual control: Left");
        assert_eq!(simulator.state(), &RobotState::default());
    }

    #[test]
    fn test_voice_command_drawn_by_rng() {
        // the lowest draw picks the first phrase
        let mut simulator =
            TelemetrySimulator::new(RobotState::default(), QUIET, StepRng::new(0, 0));
        let notifications = simulator.voice_command();
        assert_eq!(notifications[0].message, "Voice: \"Start robot\"");
        assert_eq!(notifications[0].duration_ms, 2000);
        assert_eq!(notifications[1].message, "Robot started successfully!");
        assert_eq!(simulator.state().status, RobotStatus::Working);

        // 0xCCCC_CCCC_CCCC_CCCD * 5 overflows into the last slot of five
        let mut simulator = TelemetrySimulator::new(
            working(60),
            QUIET,
            StepRng::new(0xCCCC_CCCC_CCCC_CCCD, 0),
        );
        let notifications = simulator.voice_command();
        assert_eq!(notifications[0].message, "Voice: \"Emergency stop\"");
        assert_eq!(notifications[1].feedback, Some(Feedback::Emergency));
        assert_eq!(simulator.state().status, RobotStatus::Error);
    }

    #[test]
    fn test_voice_commands_go_through_control_operations() {
        let mut simulator = quiet_simulator(RobotState::default());

        let notifications = simulator.perform_voice_command(VoiceCommand::StopRobot);
        assert_eq!(notifications[1].severity, Severity::Warning);
        assert_eq!(notifications[1].message, "Robot is already stopped");
        assert_eq!(simulator.state().status, RobotStatus::Idle);

        let notifications = simulator.perform_voice_command(VoiceCommand::BatteryStatus);
        assert_eq!(notifications[1].message, "Battery: 78%");
        assert_eq!(notifications[1].duration_ms, 3000);

        let notifications = simulator.perform_voice_command(VoiceCommand::AreaCovered);
        assert_eq!(notifications[1].message, "Area: 2.5/5 acres");
        assert_eq!(simulator.state(), &RobotState::default());

        simulator.perform_voice_command(VoiceCommand::StartRobot);
        assert_eq!(simulator.state().status, RobotStatus::Working);
        simulator.perform_voice_command(VoiceCommand::StopRobot);
        assert_eq!(simulator.state().status, RobotStatus::Idle);
    }

    #[test]
    fn test_seeded_voice_command_matches_its_outcome() {
        for seed in 0..20 {
            let mut simulator = TelemetrySimulator::seeded(working(60), QUIET, seed);
            let notifications = simulator.voice_command();
            let expected = match notifications[0].message.as_str() {
                "Voice: \"Stop robot\"" => RobotStatus::Idle,
                "Voice: \"Emergency stop\"" => RobotStatus::Error,
                _ => RobotStatus::Working,
            };
            assert_eq!(simulator.state().status, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_capture_photo_reports_detection() {
        let mut simulator = TelemetrySimulator::new(working(60), QUIET, StepRng::new(0, 0));
        let notifications = simulator.capture_photo();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].severity, Severity::Success);
        assert_eq!(notifications[0].message, "Photo captured successfully!");
        assert_eq!(notifications[1].message, "Animal Detected");
        assert_eq!(notifications[1].severity, Severity::Warning);
        assert_eq!(notifications[1].duration_ms, 3000);
        assert_eq!(simulator.state(), &working(60));

        let mut simulator = quiet_simulator(RobotState::default());
        for _ in 0..10 {
            let detection = &simulator.capture_photo()[1];
            assert!(DETECTIONS.iter().any(|d| d.message == detection.message));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_working_tick_steps(
            battery in 0u8..=100,
            total_area in 0.5f64..20.0,
            covered_ratio in 0.0f64..0.99,
            time_remaining in 0u32..600,
        ) {
            let area_covered = total_area * covered_ratio;
            let mut simulator = quiet_simulator(RobotState {
                status: RobotStatus::Working,
                battery,
                area_covered,
                total_area,
                time_remaining_min: time_remaining,
                ..RobotState::default()
            });

            let notifications = simulator.tick();
            let state = simulator.state();

            prop_assert_eq!(state.area_covered, (area_covered + AREA_STEP_ACRES).min(total_area));
            prop_assert_eq!(state.time_remaining_min, time_remaining.saturating_sub(TIME_STEP_MIN));
            prop_assert_eq!(state.battery, battery.saturating_sub(1));
            prop_assert!(state.area_covered <= state.total_area);

            let in_band = state.battery > LOW_BATTERY_FLOOR && state.battery <= LOW_BATTERY_CEILING;
            prop_assert_eq!(notifications.len(), usize::from(in_band));
        }

        #[test]
        fn prop_battery_monotonic_while_working(battery in 0u8..=100, ticks in 1usize..150) {
            let mut simulator = quiet_simulator(working(battery));
            let mut previous = battery;
            for _ in 0..ticks {
                simulator.tick();
                let current = simulator.state().battery;
                prop_assert!(current <= previous);
                prop_assert!(previous - current <= 1);
                previous = current;
            }
            prop_assert_eq!(previous as usize, (battery as usize).saturating_sub(ticks));
        }
    }
}
