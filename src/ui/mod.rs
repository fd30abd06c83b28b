mod dashboard_view;
mod notifications_view;
mod path_view;
mod settings_view;
mod task_log_view;

use std::{
    sync::mpsc::{Receiver, Sender},
    time::{Duration, Instant, SystemTime},
};

use agrobot::{
    AppConfig, DashboardOutput, FieldBoundary, Notification, NotificationQueue, PathCapture,
    RobotCommand, RobotState, RobotStatus, Severity,
    config::WindowPosition,
    i18n::{Label, Language},
    notifications::Feedback,
    tasks::{TaskRecord, task_history},
};
use egui::{Color32, UserAttentionType, ViewportCommand, Visuals};
use log::{debug, error};

const REFRESH_RATE_MS: u64 = 250;
const MAX_OUTPUTS_PER_REFRESH: usize = 20;
const MAX_TIME_PER_REFRESH_MS: u128 = 50;

pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub(crate) const PALETTE_TEAL: Color32 = Color32::from_rgb(31, 184, 205);
pub(crate) const PALETTE_AMBER: Color32 = Color32::from_rgb(255, 193, 133);
pub(crate) const PALETTE_RED: Color32 = Color32::from_rgb(180, 65, 60);
pub(crate) const PALETTE_SAND: Color32 = Color32::from_rgb(236, 235, 213);
pub(crate) const PALETTE_SLATE: Color32 = Color32::from_rgb(93, 135, 143);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    TaskLog,
    PathControl,
    Settings,
}

impl Screen {
    const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::TaskLog,
        Screen::PathControl,
        Screen::Settings,
    ];

    fn label(&self) -> Label {
        match self {
            Screen::Dashboard => Label::Dashboard,
            Screen::TaskLog => Label::TaskLog,
            Screen::PathControl => Label::PathControl,
            Screen::Settings => Label::Settings,
        }
    }
}

pub(crate) fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => PALETTE_TEAL,
        Severity::Success => PALETTE_GREEN,
        Severity::Warning => PALETTE_AMBER,
        Severity::Error => PALETTE_RED,
    }
}

pub(crate) fn status_color(status: RobotStatus) -> Color32 {
    match status {
        RobotStatus::Idle => Color32::GRAY,
        RobotStatus::Working => PALETTE_GREEN,
        RobotStatus::Error => PALETTE_RED,
    }
}

fn visuals(dark_mode: bool) -> Visuals {
    if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    }
}

/// `DashboardApp` shows the simulated robot and forwards operator commands.
///
/// # Fields
///
/// * `output_receiver` - State snapshots and notifications from the simulation thread.
/// * `command_sender` - Operator commands for the simulation thread.
/// * `robot_state` - The last state snapshot received.
/// * `notifications` - Notifications currently on screen.
/// * `path_capture` - The field boundary being drawn on the path screen.
/// * `field` - Boundary of the mission the simulation accepted.
pub struct DashboardApp {
    output_receiver: Receiver<DashboardOutput>,
    command_sender: Sender<RobotCommand>,
    robot_state: RobotState,
    notifications: NotificationQueue,
    path_capture: PathCapture,
    field: Option<FieldBoundary>,
    tasks: Vec<TaskRecord>,
    screen: Screen,
    app_config: AppConfig,
}

impl DashboardApp {
    pub fn new(
        output_receiver: Receiver<DashboardOutput>,
        command_sender: Sender<RobotCommand>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(visuals(app_config.dark_mode));

        let mut notifications = NotificationQueue::default();
        notifications.push(
            Notification::success("AgroBot Controller ready! Welcome farmer!", 3000),
            Instant::now(),
        );

        Self {
            output_receiver,
            command_sender,
            robot_state: RobotState::default(),
            notifications,
            path_capture: PathCapture::new(),
            field: None,
            tasks: task_history(),
            screen: Screen::Dashboard,
            app_config,
        }
    }

    pub(crate) fn language(&self) -> Language {
        self.app_config.language
    }

    pub(crate) fn text(&self, label: Label) -> &'static str {
        self.app_config.language.translate(label)
    }

    pub(crate) fn notify(&mut self, ctx: &egui::Context, notification: Notification) {
        match notification.feedback {
            Some(Feedback::Emergency) => ctx.send_viewport_cmd(
                ViewportCommand::RequestUserAttention(UserAttentionType::Critical),
            ),
            Some(Feedback::Confirm) => ctx.send_viewport_cmd(
                ViewportCommand::RequestUserAttention(UserAttentionType::Informational),
            ),
            Some(Feedback::Tap) | None => {}
        }
        debug!(
            "Notification [{}]: {}",
            notification.severity, notification.message
        );
        self.notifications.push(notification, Instant::now());
    }

    /// Returns whether the simulation thread received the command.
    pub(crate) fn send_command(&mut self, ctx: &egui::Context, command: RobotCommand) -> bool {
        match self.command_sender.send(command) {
            Ok(()) => true,
            Err(e) => {
                error!("Could not send command to the simulation: {}", e);
                self.notify(
                    ctx,
                    Notification::error("Robot simulation is not running", 5000),
                );
                false
            }
        }
    }

    pub(crate) fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.app_config.dark_mode = dark_mode;
        ctx.set_visuals(visuals(dark_mode));
        let theme = if dark_mode { "dark" } else { "light" };
        self.notify(ctx, Notification::info(format!("Switched to {theme} mode"), 2000));
    }

    pub(crate) fn set_language(&mut self, ctx: &egui::Context, language: Language) {
        self.app_config.language = language;
        self.notify(
            ctx,
            Notification::info(format!("Language switched to {language}"), 2000),
        );
    }

    fn receive_outputs(&mut self, ctx: &egui::Context) {
        let start_refresh = SystemTime::now();
        // consume a bounded number of outputs so the UI never blocks
        let mut outputs_processed = 0;
        while let Ok(output) = self.output_receiver.try_recv() {
            match output {
                DashboardOutput::State(state) => self.robot_state = *state,
                DashboardOutput::Field(field) => self.field = Some(*field),
                DashboardOutput::Notification(notification) => self.notify(ctx, notification),
            }

            outputs_processed += 1;
            let elapsed_ms = SystemTime::now()
                .duration_since(start_refresh)
                .map(|elapsed| elapsed.as_millis())
                .unwrap_or_default();
            if outputs_processed >= MAX_OUTPUTS_PER_REFRESH || elapsed_ms >= MAX_TIME_PER_REFRESH_MS
            {
                break;
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_outputs(ctx);
        let now = Instant::now();
        self.notifications.expire(now);

        if let Some(outer_rect) = ctx.input(|is| is.viewport().outer_rect) {
            self.app_config.window_position = WindowPosition {
                x: outer_rect.min.x,
                y: outer_rect.min.y,
            };
        }

        egui::TopBottomPanel::top("navigation")
            .min_height(30.)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for screen in Screen::ALL {
                        let label = self.text(screen.label());
                        ui.selectable_value(&mut self.screen, screen, label);
                    }
                });
            });

        egui::TopBottomPanel::bottom("notifications").show(ctx, |ui| {
            self.notifications_view(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Dashboard => self.dashboard_view(ctx, ui),
            Screen::TaskLog => self.task_log_view(ctx, ui),
            Screen::PathControl => self.path_view(ctx, ui),
            Screen::Settings => self.settings_view(ctx, ui),
        });

        let mut repaint_after = Duration::from_millis(REFRESH_RATE_MS);
        if let Some(next_expiry) = self.notifications.next_expiry(now) {
            repaint_after = repaint_after.min(next_expiry);
        }
        ctx.request_repaint_after(repaint_after);
    }
}
