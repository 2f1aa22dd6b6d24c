pub mod employees;
pub mod profile;
pub mod schedule;
pub mod timecards;

use crate::core::ConfigProvider;
use crate::domain::model::Dataset;
use crate::utils::error::Result;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use employees::generate_employees;
pub use schedule::generate_schedule;
pub use timecards::generate_timecards;

/// First generated day: the configured start date, or `days` before `today`.
pub fn resolve_start_date<C: ConfigProvider + ?Sized>(config: &C, today: NaiveDate) -> NaiveDate {
    config
        .start_date()
        .unwrap_or_else(|| today - Duration::days(i64::from(config.days())))
}

/// Runs all three generators on a single RNG seeded from the config, so the
/// dataset is a pure function of the config and `start_date`.
pub fn generate_dataset<C: ConfigProvider + ?Sized>(config: &C, start_date: NaiveDate) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(config.seed());

    let employees = generate_employees(config, &mut rng);
    let schedule = generate_schedule(config, &employees, start_date, &mut rng)?;
    let timecards = generate_timecards(&employees, &schedule, &mut rng)?;

    Ok(Dataset {
        seed: config.seed(),
        start_date,
        days: config.days(),
        employees,
        schedule,
        timecards,
    })
}
