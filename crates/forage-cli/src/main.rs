//! Forage Budget Calculator
//!
//! Estimates grazing days for a paddock from its standing dry matter and the
//! cattle, sheep and goats grazing it.
//!
//! Examples:
//!   forage --print-default-config > scenario.toml
//!   forage --scenario scenario.toml --chart
//!   forage --scenario scenario.toml --productivity Low --json out/report.json

use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forage_budget::{
    default_config_toml, format_number, write_report, BudgetError, BudgetReport, ForageBudget,
    PaddockState,
};
use forage_tables::{CattleCategory, GoatClass, ProductivityLevel, SheepClass};

/// Command line arguments for the calculator
#[derive(Parser, Debug)]
#[command(name = "forage")]
#[command(about = "Forage budget calculator: grazing days from paddock forage and herd demand")]
struct Args {
    /// Scenario file (TOML) with the paddock and animal groups
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the paddock productivity level (High, Moderate or Low)
    #[arg(long)]
    productivity: Option<ProductivityLevel>,

    /// Write the full budget report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Save the effective scenario (after overrides) as TOML to this path
    #[arg(long)]
    save_scenario: Option<PathBuf>,

    /// Print the forage depletion series as a table
    #[arg(long)]
    chart: bool,

    /// List every cattle category, sheep class and goat class, then exit
    #[arg(long)]
    list_classes: bool,

    /// Print a starter scenario file, then exit
    #[arg(long)]
    print_default_config: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("forage_budget={0},forage={0}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    if args.list_classes {
        print!("{}", render_class_listing());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), BudgetError> {
    let mut budget = match &args.scenario {
        Some(path) => {
            info!("Loading scenario from {:?}", path);
            ForageBudget::from_scenario_file(path)?
        }
        None => {
            info!("No scenario given, using the default paddock with an empty herd");
            ForageBudget::with_defaults()
        }
    };

    if let Some(level) = args.productivity {
        let paddock = PaddockState {
            productivity_level: level,
            ..*budget.paddock()
        };
        budget.set_paddock(paddock)?;
    }

    let report = budget.report();
    println!("{}", report);

    if args.chart {
        println!();
        print!("{}", render_chart(&report));
    }

    if let Some(path) = &args.json {
        write_report(path, &report)?;
    }

    if let Some(path) = &args.save_scenario {
        budget.to_scenario().to_file(path)?;
        info!("Saved scenario to {:?}", path);
    }

    Ok(())
}

/// Renders the report's depletion series as a fixed-width table.
fn render_chart(report: &BudgetReport) -> String {
    let mut out = String::new();
    if !report.has_demand() {
        out.push_str("No demand to project.\n");
        return out;
    }

    let series = &report.chart;
    let _ = writeln!(
        out,
        "{:>5}  {:>24}  {:>22}",
        "Day", "Forage Remaining (kg)", "Residual Target (kg)"
    );
    for (day, forage, residual) in series.rows() {
        let _ = writeln!(
            out,
            "{:>5}  {:>24}  {:>22}",
            day,
            format_number(forage),
            format_number(residual)
        );
    }
    out
}

/// Renders the reference tables for choosing labels in a scenario file.
fn render_class_listing() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Cattle categories (AE per head: High / Moderate / Low)");
    for category in CattleCategory::all() {
        let _ = writeln!(
            out,
            "  {:<20} {:.2} / {:.2} / {:.2}",
            category.label(),
            category.ae_rating(ProductivityLevel::High),
            category.ae_rating(ProductivityLevel::Moderate),
            category.ae_rating(ProductivityLevel::Low)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Sheep classes (DSE per head)");
    for class in SheepClass::sorted() {
        let _ = writeln!(out, "  {:<48} {:.2}", class.label(), class.dse());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Goat classes (DSE per head, standard weight band)");
    for class in GoatClass::sorted() {
        let band = class.band();
        let _ = writeln!(
            out,
            "  {:<52} {:.2}  {}-{} kg",
            class.label(),
            band.base_rating,
            band.min_weight,
            band.max_weight
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Intake per day (kg DM: per AE / per DSE)");
    for level in ProductivityLevel::all() {
        let intake = level.intake();
        let _ = writeln!(
            out,
            "  {:<10} {:.2} / {:.2}",
            level.label(),
            intake.per_ae,
            intake.per_dse
        );
    }

    out
}
