//! Per-department staffing rules shared by the schedule and timecard generators.

use crate::domain::model::ShiftBucket;
use chrono::Weekday;
use std::ops::Range;

pub const NURSING: &str = "Nursing";
pub const EVS: &str = "EVS";
pub const HR: &str = "HR";

pub const FIRST_EMPLOYEE_NUMBER: u32 = 100_000;
pub const FIRST_SHIFT_NUMBER: u64 = 500_000;
pub const FIRST_TIMECARD_NUMBER: u64 = 900_000;

pub const DEMAND_STD_DEV: f64 = 3.0;

/// Share of a day's demand that lands in each bucket.
pub const BUCKET_MIX: [(ShiftBucket, f64); 3] = [
    (ShiftBucket::Day, 0.45),
    (ShiftBucket::Evening, 0.35),
    (ShiftBucket::Night, 0.20),
];

/// Fraction of needed slots left unassigned.
pub const OPEN_SHIFT_RATE: Range<f64> = 0.03..0.08;

/// Minutes late at clock-in, negative for early.
pub const LATE_MINUTES_MEAN: f64 = 4.0;
pub const LATE_MINUTES_STD_DEV: f64 = 6.0;
pub const MAX_EARLY_IN_MINUTES: i64 = 15;

/// Minutes early at clock-out, negative for staying late.
pub const EARLY_OUT_MINUTES_MEAN: f64 = 3.0;
pub const EARLY_OUT_MINUTES_STD_DEV: f64 = 8.0;
pub const MAX_STAY_LATE_MINUTES: i64 = 30;

pub const NURSING_OT_THRESHOLD_HOURS: f64 = 12.0;
pub const NURSING_MIXED_PAYCODE_RATE: f64 = 0.18;
pub const OTHER_OT_RATE: f64 = 0.08;

/// Unscheduled punches as a share of assigned shifts.
pub const UNSCHEDULED_RATE: f64 = 0.02;
pub const UNSCHEDULED_START_HOURS: [u32; 5] = [5, 9, 13, 17, 21];
pub const UNSCHEDULED_LENGTH_HOURS: [i64; 3] = [4, 6, 8];

pub fn base_demand(department: &str, weekday: Weekday) -> f64 {
    match department {
        NURSING => 55.0,
        EVS => 22.0,
        HR if matches!(weekday, Weekday::Sat | Weekday::Sun) => 3.0,
        _ => 10.0,
    }
}

pub fn shift_length_hours(department: &str) -> i64 {
    if department == NURSING {
        12
    } else {
        8
    }
}

pub fn hourly_rate_range(department: &str) -> Range<f64> {
    if department == NURSING {
        18.0..55.0
    } else {
        15.0..35.0
    }
}

pub fn start_hour_choices(bucket: ShiftBucket) -> [u32; 2] {
    match bucket {
        ShiftBucket::Day => [6, 7],
        ShiftBucket::Evening => [14, 15],
        ShiftBucket::Night => [22, 23],
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
