//! Run every scenario in a CSV file and compare the results
//!
//! Usage: cargo run --bin run_scenarios -- scenarios.csv [--output summary.csv]

use anyhow::{Context, Result};
use clap::Parser;
use rental_projection::inputs::load_scenarios;
use rental_projection::scenario::ScenarioSummaryRow;
use rental_projection::ScenarioRunner;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Project a batch of scenarios in parallel")]
struct Cli {
    /// CSV with a `name` column plus any input columns
    scenarios: PathBuf,

    /// Where to write the comparison table
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let scenarios = load_scenarios(&cli.scenarios)
        .with_context(|| format!("loading {}", cli.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let rows: Vec<ScenarioSummaryRow> = results.iter().map(|r| r.summary_row()).collect();

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", cli.output.display());

    println!(
        "\n{:<20} {:>12} {:>10} {:>10} {:>14} {:>10}",
        "Scenario", "Cash In", "Payment", "Y1 ROI", "End Net Worth", "Avg ROI"
    );
    println!("{}", "-".repeat(81));
    for row in &rows {
        println!(
            "{:<20} {:>12.0} {:>10.2} {:>9.1}% {:>14.0} {:>9.1}%",
            row.name,
            row.total_cash_required,
            row.monthly_mortgage,
            row.year1_roi,
            row.term_end_net_worth,
            row.average_annual_roi,
        );
    }

    if let Some(best) = rows
        .iter()
        .max_by(|a, b| a.term_end_net_worth.total_cmp(&b.term_end_net_worth))
    {
        println!("\nHighest ending net worth: {}", best.name);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
