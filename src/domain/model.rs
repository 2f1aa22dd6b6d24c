use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timestamp columns are written as `YYYY-MM-DD HH:MM:SS`.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmploymentStatus {
    Ft,
    Pt,
    Prn,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 3] =
        [EmploymentStatus::Ft, EmploymentStatus::Pt, EmploymentStatus::Prn];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftBucket {
    Day,
    Evening,
    Night,
}

impl ShiftBucket {
    /// Classifies a shift by the hour it starts: [6, 14) day, [14, 22) evening,
    /// anything else night.
    pub fn from_start_hour(start_hour: u32) -> Self {
        match start_hour {
            6..=13 => ShiftBucket::Day,
            14..=21 => ShiftBucket::Evening,
            _ => ShiftBucket::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftBucket::Day => "DAY",
            ShiftBucket::Evening => "EVENING",
            ShiftBucket::Night => "NIGHT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Paycode {
    Reg,
    Ot,
    Call,
}

impl Paycode {
    pub const ALL: [Paycode; 3] = [Paycode::Reg, Paycode::Ot, Paycode::Call];

    pub fn as_str(&self) -> &'static str {
        match self {
            Paycode::Reg => "REG",
            Paycode::Ot => "OT",
            Paycode::Call => "CALL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_code: String,
    pub job_title: String,
    pub job_family: String,
}

impl Job {
    /// Used when a department has no jobs configured.
    pub fn general_staff(department: &str) -> Self {
        Self {
            job_code: "GEN".to_string(),
            job_title: "General Staff".to_string(),
            job_family: department.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub employee_number: u32,
    pub employee_name: String,
    pub org_path: String,
    pub department: String,
    pub job_code: String,
    pub job_title: String,
    pub job_family: String,
    pub employment_status: EmploymentStatus,
    pub home_org_path: String,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub schedule_date: NaiveDate,
    pub shift_id: String,
    pub employee_id: Option<String>,
    pub org_path: String,
    pub job_code: String,
    #[serde(with = "timestamp")]
    pub shift_start: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub shift_end: NaiveDateTime,
    pub shift_bucket: ShiftBucket,
    pub is_open_shift: bool,
    pub scheduled_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardEntry {
    pub timecard_entry_id: String,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub org_path: String,
    pub home_org_path: String,
    pub job_code: String,
    #[serde(with = "timestamp")]
    pub clock_in: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub clock_out: NaiveDateTime,
    pub worked_hours: f64,
    pub paycode: Paycode,
    pub scheduled_shift_id: Option<String>,
}

/// Everything produced by one generation run, before rendering.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub days: u32,
    pub employees: Vec<Employee>,
    pub schedule: Vec<ScheduledShift>,
    pub timecards: Vec<TimecardEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub employees: usize,
    pub scheduled_shifts: usize,
    pub open_shifts: usize,
    pub timecard_entries: usize,
    pub unscheduled_entries: usize,
    pub total_scheduled_hours: f64,
    pub total_worked_hours: f64,
    pub paycode_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub employees_csv: Vec<u8>,
    pub schedules_csv: Vec<u8>,
    pub timecards_csv: Vec<u8>,
    pub summary: DatasetSummary,
}
