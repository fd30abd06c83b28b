use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    time::Instant,
};

use log::{error, info, warn};
use rand::Rng;

use crate::{AgrobotError, notifications::Notification};

use super::{DashboardOutput, RobotCommand, TelemetrySimulator, TickScheduler};

/// Drives the simulator until the command channel is closed.
///
/// The loop owns the simulator, so robot state is only ever mutated from this
/// thread. It waits for commands until the next tick is due, applies them in
/// arrival order and publishes a state snapshot after every change followed
/// by the notifications that change raised.
pub fn run_simulation<R: Rng>(
    mut simulator: TelemetrySimulator<R>,
    mut scheduler: TickScheduler,
    commands: Receiver<RobotCommand>,
    output: Sender<DashboardOutput>,
) -> Result<(), AgrobotError> {
    info!(
        "Simulation running with a {} ms tick",
        scheduler.period().as_millis()
    );
    publish_state(&simulator, &output)?;

    loop {
        let wait = scheduler.time_until_next(Instant::now());
        match commands.recv_timeout(wait) {
            Ok(command) => {
                let begins_mission = matches!(command, RobotCommand::BeginMission(_));
                let notifications = apply_command(&mut simulator, command);
                publish_state(&simulator, &output)?;
                if begins_mission {
                    if let Some(field) = simulator.field() {
                        publish(&output, DashboardOutput::Field(Box::new(field.clone())))?;
                    }
                }
                for notification in notifications {
                    publish(&output, DashboardOutput::Notification(notification))?;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                info!(
                    "Command channel closed after {} ticks, stopping simulation",
                    simulator.ticks()
                );
                return Ok(());
            }
        }

        if scheduler.poll(Instant::now()) {
            let before = simulator.state().clone();
            let notifications = simulator.tick();
            if simulator.state() != &before {
                publish_state(&simulator, &output)?;
            }
            for notification in notifications {
                publish(&output, DashboardOutput::Notification(notification))?;
            }
        }
    }
}

/// Applies one operator command and returns the notifications it raised, in
/// display order. Rejected commands come back as the notification describing why.
pub fn apply_command<R: Rng>(
    simulator: &mut TelemetrySimulator<R>,
    command: RobotCommand,
) -> Vec<Notification> {
    let result = match command {
        RobotCommand::Start => simulator.start(),
        RobotCommand::Stop => simulator.stop(),
        RobotCommand::EmergencyStop => Ok(simulator.emergency_stop()),
        RobotCommand::BeginMission(field) => Ok(simulator.begin_mission(field)),
        RobotCommand::Manual(direction) => Ok(simulator.manual_control(direction)),
        RobotCommand::Voice => return simulator.voice_command(),
        RobotCommand::CapturePhoto => return simulator.capture_photo(),
    };

    let notification = result.unwrap_or_else(|e| {
        if e.is_recoverable() {
            warn!("Command rejected: {}", e);
        } else {
            error!("Command failed: {}", e);
        }
        Notification::from(&e)
    });
    vec![notification]
}

fn publish_state<R: Rng>(
    simulator: &TelemetrySimulator<R>,
    output: &Sender<DashboardOutput>,
) -> Result<(), AgrobotError> {
    publish(
        output,
        DashboardOutput::State(Box::new(simulator.state().clone())),
    )
}

fn publish(output: &Sender<DashboardOutput>, message: DashboardOutput) -> Result<(), AgrobotError> {
    output.send(message).map_err(|e| {
        error!("Could not publish dashboard output: {}", e);
        AgrobotError::from(e)
    })
}
