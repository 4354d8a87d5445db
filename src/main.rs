//! Rental Projection CLI
//!
//! Command-line interface for running a single property projection

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rental_projection::display::{format_currency, round_for_display, sample_points, DisplayFormat};
use rental_projection::{
    generate_projection, share, ProjectionPoint, ProjectionResult, PropertyInputs,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rental_projection", version, about = "Rental property wealth projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a projection and print the summary
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Write every monthly point to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write only the chart-sampled points to the CSV
        #[arg(long, requires = "csv")]
        sampled: bool,

        /// Print the full result as JSON instead of the text summary
        #[arg(long)]
        json: bool,

        /// Currency symbol for printed amounts
        #[arg(long, default_value = "$")]
        currency: String,
    },
    /// Print the share query (or URL with --base) for the given inputs
    Share {
        #[command(flatten)]
        inputs: InputArgs,

        /// Page URL to append the query to
        #[arg(long)]
        base: Option<String>,
    },
}

/// Input overrides; anything not given keeps the value from --query or the defaults
#[derive(Args)]
struct InputArgs {
    /// Start from a share query such as "pp=90000&mi=6.5"
    #[arg(long)]
    query: Option<String>,

    /// Reject inputs outside the supported ranges instead of warning
    #[arg(long)]
    strict: bool,

    #[arg(long)]
    purchase_price: Option<f64>,
    #[arg(long)]
    below_market_percent: Option<f64>,
    #[arg(long)]
    monthly_rent: Option<f64>,
    #[arg(long)]
    appreciation_rate: Option<f64>,
    #[arg(long)]
    rent_growth_rate: Option<f64>,
    #[arg(long)]
    down_payment_percent: Option<f64>,
    #[arg(long)]
    closing_costs: Option<f64>,
    #[arg(long)]
    mortgage_rate: Option<f64>,
    #[arg(long)]
    mortgage_term_years: Option<u32>,
    #[arg(long)]
    vacancy_rate: Option<f64>,
    #[arg(long)]
    insurance_tax_monthly: Option<f64>,
    #[arg(long)]
    property_management_percent: Option<f64>,
    #[arg(long)]
    maintenance_percent: Option<f64>,
}

impl InputArgs {
    fn resolve(&self) -> Result<PropertyInputs> {
        let mut inputs = match &self.query {
            Some(query) => share::from_query(query),
            None => PropertyInputs::default(),
        };

        if let Some(value) = self.purchase_price {
            inputs.purchase_price = value;
        }
        if let Some(value) = self.below_market_percent {
            inputs.below_market_percent = value;
        }
        if let Some(value) = self.monthly_rent {
            inputs.monthly_rent = value;
        }
        if let Some(value) = self.appreciation_rate {
            inputs.appreciation_rate = value;
        }
        if let Some(value) = self.rent_growth_rate {
            inputs.rent_growth_rate = value;
        }
        if let Some(value) = self.down_payment_percent {
            inputs.down_payment_percent = value;
        }
        if let Some(value) = self.closing_costs {
            inputs.closing_costs = value;
        }
        if let Some(value) = self.mortgage_rate {
            inputs.mortgage_rate = value;
        }
        if let Some(value) = self.mortgage_term_years {
            inputs.mortgage_term_years = value;
        }
        if let Some(value) = self.vacancy_rate {
            inputs.vacancy_rate = value;
        }
        if let Some(value) = self.insurance_tax_monthly {
            inputs.insurance_tax_monthly = value;
        }
        if let Some(value) = self.property_management_percent {
            inputs.property_management_percent = value;
        }
        if let Some(value) = self.maintenance_percent {
            inputs.maintenance_percent = value;
        }

        let violations = inputs.check_ranges();
        if !violations.is_empty() {
            if self.strict {
                let messages: Vec<String> = violations.iter().map(|e| e.to_string()).collect();
                bail!("inputs out of range:\n  {}", messages.join("\n  "));
            }
            for violation in &violations {
                log::warn!("{}", violation);
            }
        }

        Ok(inputs)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project {
            inputs,
            csv,
            sampled,
            json,
            currency,
        } => {
            let inputs = inputs.resolve()?;
            let result = generate_projection(&inputs);

            if let Some(path) = &csv {
                let points = if sampled {
                    sample_points(&result.points)
                } else {
                    result.points.clone()
                };
                write_points_csv(path, &points)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("wrote {} points to {}", points.len(), path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            let format = DisplayFormat {
                currency_symbol: currency,
                ..Default::default()
            };
            print_summary(&inputs, &result, &format);
        }
        Command::Share { inputs, base } => {
            let inputs = inputs.resolve()?;
            match base {
                Some(base) => println!("{}", share::share_url(&base, &inputs)),
                None => println!("{}", share::to_query(&inputs)),
            }
        }
    }

    Ok(())
}

fn write_points_csv(path: &Path, points: &[ProjectionPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(
    inputs: &PropertyInputs,
    result: &ProjectionResult,
    format: &DisplayFormat,
) {
    let money = |v: f64| format_currency(round_for_display(v), format);
    let d = &result.derived;
    let year1 = &result.summary.year1;

    println!("Rental Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Purchase:");
    println!("  Purchase Price:      {}", money(inputs.purchase_price));
    println!("  Market Value:        {}", money(d.market_value));
    println!("  Instant Equity:      {}", money(d.instant_equity));
    println!("  Down Payment:        {}", money(d.down_payment));
    println!("  Loan Amount:         {}", money(d.loan_amount));
    println!("  Monthly Mortgage:    {:.2}", d.monthly_mortgage);
    println!("  Cash to Close:       {}", money(d.total_cash_required));
    println!();

    println!("Year 1:");
    println!(
        "  {:<14} {:>12} {:>12} {:>12} {:>10}",
        "", "Cash Flow", "Apprec.", "Paydown", "ROI"
    );
    println!(
        "  {:<14} {:>12} {:>12} {:>12} {:>9.1}%",
        "All cash",
        money(year1.no_leverage.annual_cash_flow),
        money(year1.no_leverage.appreciation),
        "-",
        year1.no_leverage.roi
    );
    println!(
        "  {:<14} {:>12} {:>12} {:>12} {:>9.1}%",
        "Leveraged",
        money(year1.with_leverage.annual_cash_flow),
        money(year1.with_leverage.appreciation),
        money(year1.with_leverage.principal_paydown),
        year1.with_leverage.roi
    );
    let engines = &year1.with_leverage.engines;
    println!(
        "  Engines: cash flow {:.0}%, appreciation {:.0}%, paydown {:.0}%",
        engines.cash_flow.percent, engines.appreciation.percent, engines.principal_paydown.percent
    );
    println!();

    println!("Yearly Projection:");
    println!(
        "{:>5} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Year", "Rent", "Value", "Balance", "Equity", "Cum. CF", "Net Worth"
    );
    println!("{}", "-".repeat(79));
    for point in result.yearly_points().skip(1) {
        println!(
            "{:>5} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
            point.month / 12,
            money(point.monthly_rent),
            money(point.property_value),
            money(point.mortgage_balance),
            money(point.equity),
            money(point.cumulative_cash_flow),
            money(point.net_worth),
        );
    }
    println!();

    println!("Summary:");
    println!(
        "  Year {:<3} Net Worth: {}",
        result.summary.mid_term.month / 12,
        money(result.summary.mid_term.net_worth)
    );
    println!(
        "  Year {:<3} Net Worth: {}",
        result.summary.term_end.month / 12,
        money(result.summary.term_end.net_worth)
    );
    println!("  Average Annual ROI: {:.1}%", result.summary.average_annual_roi);
}
