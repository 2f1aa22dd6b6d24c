use clap::Parser;
use wfm_synth::core::plan::GenerationPlan;
use wfm_synth::utils::{logger, validation::Validate};
use wfm_synth::{CliArgs, GeneratorConfig, LocalStorage, SynthEngine, SyntheticPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting wfm-synth");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match GeneratorConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    args.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        print!("{}", GenerationPlan::from_config(&config, chrono::Utc::now().date_naive()));
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SyntheticPipeline::new(storage, config);
    let engine = SynthEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            let summary = &report.summary;
            println!("Synthetic data generated:");
            println!("- {}/employees.csv ({} rows)", report.output_path, summary.employees);
            println!(
                "- {}/schedules.csv ({} rows, {} open)",
                report.output_path, summary.scheduled_shifts, summary.open_shifts
            );
            println!(
                "- {}/timecards.csv ({} rows, {} unscheduled)",
                report.output_path, summary.timecard_entries, summary.unscheduled_entries
            );
            println!("  Dates: {} to {}", summary.start_date, summary.end_date);
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
