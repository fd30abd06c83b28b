use agrobot::i18n::Label;
use egui::RichText;

use super::{DashboardApp, severity_color};

impl DashboardApp {
    pub(crate) fn notifications_view(&self, ui: &mut egui::Ui) {
        ui.strong(self.text(Label::Notifications));
        if self.notifications.is_empty() {
            ui.weak("No notifications");
            return;
        }
        for notification in self.notifications.iter() {
            ui.label(
                RichText::new(&notification.message).color(severity_color(notification.severity)),
            );
        }
    }
}
