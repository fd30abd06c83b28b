mod ui;

use std::{
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use agrobot::{
    AgrobotError, AppConfig, DashboardOutput, RobotCommand, RobotState, TelemetrySimulator,
    TickScheduler,
    i18n::Language,
    robot::{SimulatorConfig, run_simulation},
    tasks::{export_task_log, task_history},
};
use clap::{Parser, Subcommand};
use egui::{Pos2, Vec2};
use log::{error, info, warn};
use ui::DashboardApp;

const MIN_TICK_INTERVAL_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the live dashboard
    Live {
        /// Milliseconds between simulation ticks
        #[arg(short, long)]
        tick_ms: Option<u64>,

        /// Seed for reproducible ambient events
        #[arg(short, long)]
        seed: Option<u64>,

        /// english, hindi or tamil
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Write the task history as CSV
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn live(
    tick_ms: Option<u64>,
    seed: Option<u64>,
    language: Option<String>,
) -> Result<(), AgrobotError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    if let Some(tick_ms) = tick_ms {
        app_config.tick_interval_ms = tick_ms;
    }
    if let Some(name) = language {
        match Language::from_name(&name) {
            Some(language) => app_config.language = language,
            None => warn!(
                "Unknown language '{}', keeping {}",
                name, app_config.language
            ),
        }
    }
    let tick_interval =
        Duration::from_millis(app_config.tick_interval_ms.max(MIN_TICK_INTERVAL_MS));

    let (command_tx, command_rx) = mpsc::channel::<RobotCommand>();
    let (output_tx, output_rx) = mpsc::channel::<DashboardOutput>();

    let simulator_config = SimulatorConfig {
        event_probability: app_config.event_probability,
    };
    let simulator = match seed {
        Some(seed) => TelemetrySimulator::seeded(RobotState::default(), simulator_config, seed),
        None => TelemetrySimulator::from_entropy(RobotState::default(), simulator_config),
    };
    let scheduler = TickScheduler::new(tick_interval, Instant::now());
    thread::spawn(move || {
        if let Err(e) = run_simulation(simulator, scheduler, command_rx, output_tx) {
            error!("Simulation stopped: {}", e);
        }
    });

    let window_position = app_config.window_position;
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(480., 720.))
        .with_position(Pos2::new(window_position.x, window_position.y));

    eframe::run_native(
        "AgroBot Controller",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(DashboardApp::new(
                output_rx, command_tx, app_config, cc,
            )))
        }),
    )
    .map_err(|e| AgrobotError::DashboardStartError {
        description: e.to_string(),
    })
}

fn export(output: &Path) -> Result<(), AgrobotError> {
    export_task_log(output, &task_history())?;
    info!("Task log written to {:?}", output);
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    }) {
        warn!("Could not set Ctrl-C handler: {}", e);
    }

    let result = match cli.command {
        Commands::Export { output } => export(&output),
        Commands::Live {
            tick_ms,
            seed,
            language,
        } => live(tick_ms, seed, language),
    };
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
