use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::AgrobotError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Aborted,
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Aborted => write!(f, "aborted"),
        }
    }
}

/// One finished field run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub area_acres: f64,
    pub time_taken_min: u32,
    pub status: TaskStatus,
    pub errors: u32,
}

impl TaskRecord {
    fn new(date: &str, area_acres: f64, time_taken_min: u32, errors: u32) -> Self {
        Self {
            date: date.to_string(),
            area_acres,
            time_taken_min,
            status: TaskStatus::Completed,
            errors,
        }
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date, self.area_acres, self.time_taken_min, self.status, self.errors
        )
    }
}

/// Recent task history shown on the task log screen, newest first.
pub fn task_history() -> Vec<TaskRecord> {
    vec![
        TaskRecord::new("2025-09-22", 3.2, 210, 0),
        TaskRecord::new("2025-09-21", 2.8, 165, 1),
        TaskRecord::new("2025-09-20", 4.1, 210, 0),
        TaskRecord::new("2025-09-19", 2.9, 155, 0),
        TaskRecord::new("2025-09-18", 3.5, 195, 2),
    ]
}

/// One line per task: `date,area,timeTaken,status,errors`.
pub fn to_csv(tasks: &[TaskRecord]) -> String {
    tasks
        .iter()
        .map(TaskRecord::to_csv_row)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_task_log(file: &Path, tasks: &[TaskRecord]) -> Result<(), AgrobotError> {
    let export_file = File::create(file).map_err(|e| AgrobotError::ExportError { source: e })?;
    let mut writer = BufWriter::new(export_file);
    writeln!(writer, "{}", to_csv(tasks)).map_err(|e| AgrobotError::ExportError { source: e })?;
    writer
        .flush()
        .map_err(|e| AgrobotError::ExportError { source: e })?;
    info!("Exported {} tasks to {:?}", tasks.len(), file);
    Ok(())
}
