use agrobot::i18n::{Label, Language};
use egui::{ComboBox, Grid};

use super::DashboardApp;

impl DashboardApp {
    pub(crate) fn settings_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading(self.text(Label::Settings));
        ui.separator();

        let mut language = self.language();
        let mut dark_mode = self.app_config.dark_mode;
        let mut theme_changed = false;

        Grid::new("settings")
            .num_columns(2)
            .spacing([40., 8.])
            .show(ui, |ui| {
                ui.label("Language");
                ComboBox::from_id_salt("language")
                    .selected_text(language.to_string())
                    .show_ui(ui, |ui| {
                        for option in Language::ALL {
                            ui.selectable_value(&mut language, option, option.to_string());
                        }
                    });
                ui.end_row();

                ui.label(self.text(Label::Theme));
                theme_changed = ui.checkbox(&mut dark_mode, "Dark").changed();
                ui.end_row();

                ui.label("Tick interval");
                ui.label(format!("{} ms", self.app_config.tick_interval_ms));
                ui.end_row();

                ui.label("Event probability");
                ui.label(format!("{:.2}", self.app_config.event_probability));
                ui.end_row();
            });

        if language != self.app_config.language {
            self.set_language(ctx, language);
        }
        if theme_changed {
            self.set_dark_mode(ctx, dark_mode);
        }
    }
}
