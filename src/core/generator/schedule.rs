use crate::config::department_of;
use crate::core::generator::profile::{self, FIRST_SHIFT_NUMBER};
use crate::core::ConfigProvider;
use crate::domain::model::{Employee, ScheduledShift};
use crate::utils::error::{Result, SynthError};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::HashMap;

struct ShiftIds(u64);

impl ShiftIds {
    fn next(&mut self) -> String {
        let id = format!("S{}", self.0);
        self.0 += 1;
        id
    }
}

/// Generates `days` days of shifts starting at `start_date`. For every org and
/// bucket, demand is split into assigned shifts (sampled from the org's
/// employees without replacement) followed by open shifts.
pub fn generate_schedule<C, R>(
    config: &C,
    employees: &[Employee],
    start_date: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ScheduledShift>>
where
    C: ConfigProvider + ?Sized,
    R: Rng + ?Sized,
{
    let mut by_org: HashMap<&str, Vec<&Employee>> = HashMap::new();
    for employee in employees {
        by_org.entry(employee.org_path.as_str()).or_default().push(employee);
    }

    let mut shifts = Vec::new();
    let mut ids = ShiftIds(FIRST_SHIFT_NUMBER);

    for offset in 0..config.days() {
        let day = start_date + Duration::days(i64::from(offset));

        for org_path in config.orgs() {
            let department = department_of(org_path);
            let base = profile::base_demand(department, day.weekday());
            let demand_dist = Normal::new(base, profile::DEMAND_STD_DEV).map_err(|e| {
                SynthError::ProcessingError {
                    message: format!("Invalid demand distribution for {}: {}", org_path, e),
                }
            })?;
            let demand = demand_dist.sample(rng).trunc().max(0.0);

            for (bucket, pct) in profile::BUCKET_MIX {
                let needed = (demand * pct).round_ties_even() as usize;
                let open_rate = rng.gen_range(profile::OPEN_SHIFT_RATE);
                let open_count = (needed as f64 * open_rate).round_ties_even() as usize;

                let org_employees = match by_org.get(org_path.as_str()) {
                    Some(list) if !list.is_empty() => list,
                    _ => continue,
                };

                let scheduled_count = needed.saturating_sub(open_count);
                let chosen: Vec<&Employee> = org_employees
                    .choose_multiple(rng, scheduled_count.min(org_employees.len()))
                    .copied()
                    .collect();

                let start_hour = *profile::start_hour_choices(bucket)
                    .choose(rng)
                    .ok_or_else(|| SynthError::ProcessingError {
                        message: format!("No start hours for bucket {}", bucket.as_str()),
                    })?;
                let (shift_start, shift_end) = shift_window(day, start_hour, department)?;
                let scheduled_hours = (shift_end - shift_start).num_seconds() as f64 / 3600.0;

                for employee in chosen {
                    shifts.push(ScheduledShift {
                        schedule_date: day,
                        shift_id: ids.next(),
                        employee_id: Some(employee.employee_id.clone()),
                        org_path: org_path.clone(),
                        job_code: employee.job_code.clone(),
                        shift_start,
                        shift_end,
                        shift_bucket: bucket,
                        is_open_shift: false,
                        scheduled_hours,
                    });
                }

                let jobs = config.jobs_for(department);
                for _ in 0..open_count {
                    let job_code = jobs
                        .choose(rng)
                        .map(|job| job.job_code.clone())
                        .unwrap_or_else(|| "GEN".to_string());
                    shifts.push(ScheduledShift {
                        schedule_date: day,
                        shift_id: ids.next(),
                        employee_id: None,
                        org_path: org_path.clone(),
                        job_code,
                        shift_start,
                        shift_end,
                        shift_bucket: bucket,
                        is_open_shift: true,
                        scheduled_hours,
                    });
                }
            }
        }
    }

    tracing::debug!("Generated {} shifts over {} days", shifts.len(), config.days());
    Ok(shifts)
}

fn shift_window(
    day: NaiveDate,
    start_hour: u32,
    department: &str,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let start = day
        .and_hms_opt(start_hour, 0, 0)
        .ok_or_else(|| SynthError::ProcessingError {
            message: format!("Invalid shift start hour {} on {}", start_hour, day),
        })?;
    let end = start + Duration::hours(profile::shift_length_hours(department));
    Ok((start, end))
}
