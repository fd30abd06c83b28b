//! Display values derived from a robot state snapshot.

use crate::robot::RobotState;

/// Mission progress as a whole percentage of the field.
pub fn progress_percent(state: &RobotState) -> u8 {
    if state.total_area <= 0. {
        return 0;
    }
    (state.area_covered / state.total_area * 100.)
        .round()
        .clamp(0., 100.) as u8
}

pub fn battery_text(state: &RobotState) -> String {
    format!("{}%", state.battery)
}

/// Rounds to one decimal place and drops a trailing `.0`, so 5.0 reads "5".
pub fn format_acres(acres: f64) -> String {
    let text = format!("{acres:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

pub fn area_text(state: &RobotState) -> String {
    format!(
        "{}/{}",
        format_acres(state.area_covered),
        format_acres(state.total_area)
    )
}

pub fn time_remaining_text(state: &RobotState) -> String {
    format!(
        "{}h {}m",
        state.time_remaining_min / 60,
        state.time_remaining_min % 60
    )
}
