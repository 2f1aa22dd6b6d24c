use crate::domain::model::{Dataset, DatasetSummary, Employee, ScheduledShift, TimecardEntry};
use crate::utils::error::{Result, SynthError};
use chrono::Duration;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SUMMARY_FILE: &str = "summary.json";

/// A row type that is written as its own CSV file.
pub trait TableRow: Serialize {
    const FILE_NAME: &'static str;
    const HEADERS: &'static [&'static str];
}

impl TableRow for Employee {
    const FILE_NAME: &'static str = "employees.csv";
    const HEADERS: &'static [&'static str] = &[
        "employee_id",
        "employee_number",
        "employee_name",
        "org_path",
        "department",
        "job_code",
        "job_title",
        "job_family",
        "employment_status",
        "home_org_path",
        "hourly_rate",
    ];
}

impl TableRow for ScheduledShift {
    const FILE_NAME: &'static str = "schedules.csv";
    const HEADERS: &'static [&'static str] = &[
        "schedule_date",
        "shift_id",
        "employee_id",
        "org_path",
        "job_code",
        "shift_start",
        "shift_end",
        "shift_bucket",
        "is_open_shift",
        "scheduled_hours",
    ];
}

impl TableRow for TimecardEntry {
    const FILE_NAME: &'static str = "timecards.csv";
    const HEADERS: &'static [&'static str] = &[
        "timecard_entry_id",
        "employee_id",
        "work_date",
        "org_path",
        "home_org_path",
        "job_code",
        "clock_in",
        "clock_out",
        "worked_hours",
        "paycode",
        "scheduled_shift_id",
    ];
}

/// Serializes rows with a header line. Empty tables still get their header.
pub fn to_csv_bytes<T: TableRow>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_writer(Vec::new());

    if rows.is_empty() {
        writer.write_record(T::HEADERS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| SynthError::IoError(e.into_error()))
}

pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let mut paycode_counts = BTreeMap::new();
    for entry in &dataset.timecards {
        *paycode_counts
            .entry(entry.paycode.as_str().to_string())
            .or_insert(0) += 1;
    }

    let end_date = dataset.start_date + Duration::days(i64::from(dataset.days.saturating_sub(1)));

    DatasetSummary {
        seed: dataset.seed,
        start_date: dataset.start_date,
        end_date,
        days: dataset.days,
        employees: dataset.employees.len(),
        scheduled_shifts: dataset.schedule.len(),
        open_shifts: dataset.schedule.iter().filter(|s| s.is_open_shift).count(),
        timecard_entries: dataset.timecards.len(),
        unscheduled_entries: dataset
            .timecards
            .iter()
            .filter(|t| t.scheduled_shift_id.is_none())
            .count(),
        total_scheduled_hours: dataset.schedule.iter().map(|s| s.scheduled_hours).sum(),
        total_worked_hours: dataset.timecards.iter().map(|t| t.worked_hours).sum(),
        paycode_counts,
    }
}
