use agrobot::{Notification, i18n::Label, tasks::export_task_log};
use egui::Grid;
use egui_plot::{Bar, BarChart, Plot};
use log::error;

use super::{
    DashboardApp, PALETTE_AMBER, PALETTE_RED, PALETTE_SAND, PALETTE_SLATE, PALETTE_TEAL,
};

const TASK_PALETTE: [egui::Color32; 5] = [
    PALETTE_TEAL,
    PALETTE_AMBER,
    PALETTE_RED,
    PALETTE_SAND,
    PALETTE_SLATE,
];

impl DashboardApp {
    pub(crate) fn task_log_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.text(Label::TaskLog));
            if ui.button(self.text(Label::Export)).clicked() {
                self.export_tasks(ctx);
            }
        });

        // oldest task on the left
        let bars: Vec<Bar> = self
            .tasks
            .iter()
            .rev()
            .enumerate()
            .map(|(i, task)| {
                Bar::new(i as f64, task.area_acres)
                    .name(&task.date)
                    .width(0.6)
                    .fill(TASK_PALETTE[i % TASK_PALETTE.len()])
            })
            .collect();

        Plot::new("task_history")
            .height(220.)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .include_y(0.)
            .y_axis_label("Acres")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Area Covered (acres)", bars));
            });

        ui.add_space(10.);
        Grid::new("task_table")
            .striped(true)
            .num_columns(5)
            .show(ui, |ui| {
                for header in ["Date", "Acres", "Minutes", "Status", "Errors"] {
                    ui.strong(header);
                }
                ui.end_row();

                for task in &self.tasks {
                    ui.label(&task.date);
                    ui.label(format!("{:.1}", task.area_acres));
                    ui.label(task.time_taken_min.to_string());
                    ui.label(task.status.to_string());
                    ui.label(task.errors.to_string());
                    ui.end_row();
                }
            });
    }

    fn export_tasks(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("task_log.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match export_task_log(&path, &self.tasks) {
            Ok(()) => self.notify(
                ctx,
                Notification::success("Task log exported successfully!", 3000),
            ),
            Err(e) => {
                error!("Task log export to {:?} failed: {}", path, e);
                self.notify(ctx, Notification::from(&e));
            }
        }
    }
}
