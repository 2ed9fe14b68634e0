//! Club Invest projection CLI
//!
//! Runs a single projection (or a three-scenario comparison) and prints the
//! year-by-year table, optionally writing it as CSV.

use anyhow::Context;
use clap::Parser;
use club_invest_projection::{
    params::{RiskProfile, Scenario},
    ReturnRateTable, ScenarioRunner, SimulationParams, SimulationResult,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "club_invest_projection", version, about = "Investment growth projection engine")]
struct Cli {
    /// Lump sum invested at time zero
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    /// Contribution at the start of every month
    #[arg(long, default_value_t = 200.0)]
    monthly: f64,

    /// Projection horizon in whole years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Risk profile: tempere or audacieux
    #[arg(long, default_value = "tempere")]
    profile: RiskProfile,

    /// Scenario: pessimiste, moyen or optimiste
    #[arg(long, default_value = "moyen")]
    scenario: Scenario,

    /// Directory holding return_rates.csv (defaults to the compiled-in table)
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Also project the two other scenarios for comparison
    #[arg(long)]
    compare: bool,

    /// Write the year-by-year table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let runner = match &cli.rates {
        Some(dir) => {
            log::info!("loading return rates from {}", dir.display());
            ScenarioRunner::with_rates(
                ReturnRateTable::from_csv_path(dir)
                    .with_context(|| format!("loading return rates from {}", dir.display()))?,
            )
        }
        None => ScenarioRunner::new(),
    };

    let params = SimulationParams::new(cli.initial, cli.monthly, cli.years, cli.profile, cli.scenario);
    log::debug!("projecting {params:?}");

    let result = runner.run(&params).context("projection failed")?;

    print_result(&result);

    if cli.compare {
        println!("\nScenario comparison ({} profile):", cli.profile);
        for other in runner.run_scenarios(&params).context("scenario comparison failed")? {
            let summary = other.summary();
            println!(
                "  {:>10} ({:>5.2}%/an): final {:>12.2}  gains {:>12.2}",
                other.params.scenario.as_str(),
                summary.annualized_return,
                summary.final_value,
                summary.total_gains,
            );
        }
    }

    if let Some(path) = &cli.output {
        write_csv(&result, path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_result(result: &SimulationResult) {
    println!("Club Invest projection");
    println!("======================\n");
    println!(
        "Inputs: initial {:.2}, monthly {:.2}, {} years, {} / {}",
        result.params.initial_amount,
        result.params.monthly_amount,
        result.params.horizon_years,
        result.params.risk_profile,
        result.params.scenario,
    );
    println!("Annual return assumption: {:.2}%\n", result.annualized_return);

    println!(
        "{:>4} {:>12} {:>14} {:>12} {:>14} {:>14}",
        "Year", "Deposits", "CumDeposits", "Gains", "CumGains", "TotalValue"
    );
    println!("{}", "-".repeat(74));
    for year in &result.year_by_year {
        println!(
            "{:>4} {:>12.2} {:>14.2} {:>12.2} {:>14.2} {:>14.2}",
            year.year,
            year.deposits,
            year.cumulative_deposits,
            year.gains,
            year.cumulative_gains,
            year.total_value,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final value:    {:.2}", summary.final_value);
    println!("  Total deposits: {:.2}", summary.total_deposits);
    println!("  Total gains:    {:.2}", summary.total_gains);
}

fn write_csv(result: &SimulationResult, path: &std::path::Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Year,Deposits,CumulativeDeposits,Gains,CumulativeGains,TotalValue")?;
    for year in &result.year_by_year {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            year.year,
            year.deposits,
            year.cumulative_deposits,
            year.gains,
            year.cumulative_gains,
            year.total_value,
        )?;
    }
    Ok(())
}
