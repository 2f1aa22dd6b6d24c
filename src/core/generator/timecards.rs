use crate::config::department_of;
use crate::core::generator::profile::{self, FIRST_TIMECARD_NUMBER, NURSING};
use crate::domain::model::{Employee, Paycode, ScheduledShift, TimecardEntry};
use crate::utils::error::{Result, SynthError};
use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::HashMap;

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev).map_err(|e| SynthError::ProcessingError {
        message: format!("Invalid punch distribution N({}, {}): {}", mean, std_dev, e),
    })
}

fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Picks the paycode for a scheduled punch.
fn scheduled_paycode<R: Rng + ?Sized>(department: &str, worked_hours: f64, rng: &mut R) -> Paycode {
    if department == NURSING {
        if worked_hours > profile::NURSING_OT_THRESHOLD_HOURS {
            return Paycode::Ot;
        }
        if rng.gen::<f64>() < profile::NURSING_MIXED_PAYCODE_RATE {
            return *Paycode::ALL.choose(rng).unwrap_or(&Paycode::Reg);
        }
        return Paycode::Reg;
    }

    if rng.gen::<f64>() < profile::OTHER_OT_RATE {
        Paycode::Ot
    } else {
        Paycode::Reg
    }
}

/// Produces one punch per assigned shift, jittered around the scheduled
/// window, then a small tail of unscheduled punches.
pub fn generate_timecards<R>(
    employees: &[Employee],
    schedule: &[ScheduledShift],
    rng: &mut R,
) -> Result<Vec<TimecardEntry>>
where
    R: Rng + ?Sized,
{
    let by_id: HashMap<&str, &Employee> = employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e))
        .collect();

    let assigned: Vec<(&ScheduledShift, &Employee)> = schedule
        .iter()
        .filter(|s| !s.is_open_shift)
        .filter_map(|s| s.employee_id.as_deref().map(|id| (s, id)))
        .map(|(s, id)| {
            by_id
                .get(id)
                .map(|e| (s, *e))
                .ok_or_else(|| SynthError::ProcessingError {
                    message: format!("Shift {} references unknown employee {}", s.shift_id, id),
                })
        })
        .collect::<Result<_>>()?;

    let late_dist = normal(profile::LATE_MINUTES_MEAN, profile::LATE_MINUTES_STD_DEV)?;
    let early_dist = normal(profile::EARLY_OUT_MINUTES_MEAN, profile::EARLY_OUT_MINUTES_STD_DEV)?;

    let unscheduled_count = (assigned.len() as f64 * profile::UNSCHEDULED_RATE).floor() as usize;
    let mut entries = Vec::with_capacity(assigned.len() + unscheduled_count);
    let mut next_id = FIRST_TIMECARD_NUMBER;

    for (shift, employee) in &assigned {
        let department = department_of(&shift.org_path);

        let late_minutes = late_dist.sample(rng).trunc() as i64;
        let early_out_minutes = early_dist.sample(rng).trunc() as i64;

        let clock_in =
            shift.shift_start + Duration::minutes(late_minutes.max(-profile::MAX_EARLY_IN_MINUTES));
        let clock_out =
            shift.shift_end - Duration::minutes(early_out_minutes.max(-profile::MAX_STAY_LATE_MINUTES));
        let worked_hours = hours_between(clock_in, clock_out).max(0.0);

        let paycode = scheduled_paycode(department, worked_hours, rng);

        entries.push(TimecardEntry {
            timecard_entry_id: format!("T{}", next_id),
            employee_id: employee.employee_id.clone(),
            work_date: shift.schedule_date,
            org_path: shift.org_path.clone(),
            home_org_path: employee.home_org_path.clone(),
            job_code: shift.job_code.clone(),
            clock_in,
            clock_out,
            worked_hours: profile::round_cents(worked_hours),
            paycode,
            scheduled_shift_id: Some(shift.shift_id.clone()),
        });
        next_id += 1;
    }

    for _ in 0..unscheduled_count {
        let (Some(employee), Some((shift, _))) = (employees.choose(rng), assigned.choose(rng)) else {
            break;
        };
        let start_hour = *profile::UNSCHEDULED_START_HOURS.choose(rng).unwrap_or(&9);
        let length = *profile::UNSCHEDULED_LENGTH_HOURS.choose(rng).unwrap_or(&8);
        let clock_in = shift
            .schedule_date
            .and_hms_opt(start_hour, 0, 0)
            .ok_or_else(|| SynthError::ProcessingError {
                message: format!("Invalid punch hour {} on {}", start_hour, shift.schedule_date),
            })?;
        let clock_out = clock_in + Duration::hours(length);
        let paycode = *Paycode::ALL.choose(rng).unwrap_or(&Paycode::Reg);

        entries.push(TimecardEntry {
            timecard_entry_id: format!("T{}", next_id),
            employee_id: employee.employee_id.clone(),
            work_date: shift.schedule_date,
            org_path: employee.org_path.clone(),
            home_org_path: employee.home_org_path.clone(),
            job_code: employee.job_code.clone(),
            clock_in,
            clock_out,
            worked_hours: profile::round_cents(hours_between(clock_in, clock_out)),
            paycode,
            scheduled_shift_id: None,
        });
        next_id += 1;
    }

    tracing::debug!(
        "Generated {} timecard entries ({} unscheduled)",
        entries.len(),
        unscheduled_count
    );
    Ok(entries)
}
