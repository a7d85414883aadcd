//! StrengthPlan - periodized strength-training schedules
//!
//! Builds the default Starting Strength plan, prints it and writes it to the
//! configured plan file.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strength_plan::plans::render_table;
use strength_plan::storage::config::load_config;
use strength_plan::{Paradigm, TrainingPlan};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting StrengthPlan v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("failed to load configuration")?;

    let mut plan = TrainingPlan::from_presets(Paradigm::StartingStrength, &config.presets)
        .context("failed to build training plan")?;

    let rows = plan
        .expand(config.plan.start_date, config.plan.cycles)
        .context("failed to expand training plan")?;
    println!("{}", render_table(rows));

    plan.save_training(&config.plan.output_path)
        .with_context(|| format!("failed to write {}", config.plan.output_path.display()))?;

    Ok(())
}
