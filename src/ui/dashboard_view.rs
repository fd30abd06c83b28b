use agrobot::{
    RobotCommand, RobotStatus, dashboard,
    i18n::Label,
    robot::Direction,
};
use egui::{Button, Grid, ProgressBar, RichText};

use super::{DashboardApp, PALETTE_RED, status_color};

fn status_label(status: RobotStatus) -> Label {
    match status {
        RobotStatus::Idle => Label::Idle,
        RobotStatus::Working => Label::Working,
        RobotStatus::Error => Label::Fault,
    }
}

impl DashboardApp {
    pub(crate) fn dashboard_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let state = self.robot_state.clone();

        ui.horizontal(|ui| {
            ui.heading(&state.name);
            ui.label(RichText::new("●").color(status_color(state.status)));
            ui.label(self.text(status_label(state.status)));
        });
        ui.separator();

        Grid::new("robot_stats")
            .num_columns(2)
            .spacing([40., 8.])
            .show(ui, |ui| {
                ui.label(self.text(Label::Battery));
                ui.strong(dashboard::battery_text(&state));
                ui.end_row();

                ui.label(self.text(Label::AreaCovered));
                ui.strong(format!("{} acres", dashboard::area_text(&state)));
                ui.end_row();

                ui.label(self.text(Label::TimeRemaining));
                ui.strong(dashboard::time_remaining_text(&state));
                ui.end_row();
            });

        ui.add_space(10.);
        let progress = dashboard::progress_percent(&state);
        ui.label(self.text(Label::Progress));
        ui.add(ProgressBar::new(progress as f32 / 100.).text(format!("{progress}%")));

        if let Some(field) = &self.field {
            ui.label(format!(
                "Field boundary: {} vertices, {:.0} px²",
                field.vertices().len(),
                field.area()
            ));
        }

        ui.add_space(10.);
        ui.horizontal(|ui| {
            if ui.button(self.text(Label::Start)).clicked() {
                self.send_command(ctx, RobotCommand::Start);
            }
            if ui.button(self.text(Label::Stop)).clicked() {
                self.send_command(ctx, RobotCommand::Stop);
            }
            let emergency = Button::new(
                RichText::new(self.text(Label::Emergency))
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(PALETTE_RED);
            if ui.add(emergency).clicked() {
                self.send_command(ctx, RobotCommand::EmergencyStop);
            }
        });

        ui.horizontal(|ui| {
            if ui.button(self.text(Label::Voice)).clicked() {
                self.send_command(ctx, RobotCommand::Voice);
            }
            if ui.button(self.text(Label::Camera)).clicked() {
                self.send_command(ctx, RobotCommand::CapturePhoto);
            }
        });

        ui.add_space(10.);
        ui.label("Manual control");
        ui.horizontal(|ui| {
            for direction in Direction::ALL {
                if ui.button(direction.to_string()).clicked() {
                    self.send_command(ctx, RobotCommand::Manual(direction));
                }
            }
        });
    }
}
