use agrobot::{Notification, PathPoint, RobotCommand, path::MIN_BOUNDARY_POINTS};
use egui::{CornerRadius, Pos2, Sense, Shape, Stroke, vec2};
use log::warn;

use super::{DashboardApp, PALETTE_GREEN, PALETTE_TEAL, Screen};

const PATH_STROKE_WIDTH: f32 = 3.;
const DASH_LENGTH: f32 = 10.;
const GAP_LENGTH: f32 = 5.;
const START_MARKER_RADIUS: f32 = 8.;

impl DashboardApp {
    pub(crate) fn path_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.path_capture.clear();
                self.notify(ctx, Notification::info("Path cleared successfully", 2000));
            }
            if ui.button("Confirm path").clicked() {
                match self.path_capture.confirm() {
                    Ok(boundary) => {
                        if self.send_command(ctx, RobotCommand::BeginMission(boundary)) {
                            self.screen = Screen::Dashboard;
                        }
                    }
                    Err(e) => {
                        warn!("Path not confirmed: {}", e);
                        self.notify(ctx, Notification::from(&e));
                    }
                }
            }
            ui.label(format!("{} points", self.path_capture.points().len()));
        });

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        painter.rect_filled(
            response.rect,
            CornerRadius::same(8),
            ui.visuals().extreme_bg_color,
        );

        let origin = response.rect.min;
        if response.drag_started() {
            // the drag only registers once the pointer has moved, start where it was pressed
            let pressed_at = ctx.input(|i| i.pointer.press_origin());
            if let Some(pos) = pressed_at.or_else(|| response.interact_pointer_pos()) {
                let local = pos - origin;
                self.path_capture.begin(PathPoint::new(local.x, local.y));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.path_capture.extend(PathPoint::new(local.x, local.y));
            }
        }
        if response.drag_stopped() {
            self.path_capture.end();
        }

        let mut screen_points: Vec<Pos2> = self
            .path_capture
            .points()
            .iter()
            .map(|point| origin + vec2(point.x, point.y))
            .collect();
        let Some(start) = screen_points.first().copied() else {
            return;
        };

        if screen_points.len() >= 2 {
            if screen_points.len() >= MIN_BOUNDARY_POINTS {
                screen_points.push(start);
            }
            painter.extend(Shape::dashed_line(
                &screen_points,
                Stroke::new(PATH_STROKE_WIDTH, PALETTE_TEAL),
                DASH_LENGTH,
                GAP_LENGTH,
            ));
        }
        painter.circle_filled(start, START_MARKER_RADIUS, PALETTE_GREEN);
    }
}
