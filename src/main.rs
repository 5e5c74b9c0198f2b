//! Hold or Sell CLI
//!
//! Command-line interface for comparing keeping a home as a rental against
//! selling it today

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use hold_or_sell::report::{format_currency, render_table, write_csv, ChartSeries};
use hold_or_sell::scenario::DATE_FORMAT;
use hold_or_sell::{ProjectionConfig, RawInputs, ScenarioRunner};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hold-or-sell",
    about = "Project holding a mortgaged home as a rental versus selling and investing"
)]
struct Cli {
    /// Start from a shared query string (flags below override its values)
    #[arg(long)]
    query: Option<String>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,

    /// Write the yearly table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print a query string that restores these inputs
    #[arg(long)]
    share: bool,

    /// Compare final outcomes under these home appreciation rates (percent)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    sweep_appreciation: Vec<f64>,

    #[command(flatten)]
    fields: FieldArgs,
}

/// Form fields; values are taken as typed and repaired, never rejected
#[derive(clap::Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    purchase_price: Option<String>,
    #[arg(long)]
    current_home_value: Option<String>,
    #[arg(long, help = "Loan origination date (YYYY-MM-DD)")]
    loan_origination_date: Option<String>,
    #[arg(long)]
    loan_amount: Option<String>,
    #[arg(long, help = "Annual interest rate in percent")]
    interest_rate: Option<String>,
    #[arg(long, help = "Mortgage term in years")]
    mortgage_term: Option<String>,
    #[arg(long, help = "true if the home is the owner's primary residence")]
    primary_residence: Option<String>,
    #[arg(long, help = "Monthly HOA dues")]
    hoa: Option<String>,
    #[arg(long, help = "Monthly property taxes")]
    property_taxes: Option<String>,
    #[arg(long, help = "Monthly insurance")]
    insurance: Option<String>,
    #[arg(long, help = "Monthly maintenance")]
    maintenance: Option<String>,
    #[arg(long, help = "Monthly rent")]
    rental_price: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual rent increase in percent")]
    rent_increase: Option<String>,
    #[arg(long, help = "Property management fee in percent of rent")]
    management_fee: Option<String>,
    #[arg(long, help = "Tax rate on rental profit in percent")]
    rental_tax_rate: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual home appreciation in percent")]
    home_appreciation: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual cost inflation in percent")]
    cost_inflation: Option<String>,
    #[arg(long, help = "Selling fees in percent of sale price")]
    selling_fees: Option<String>,
    #[arg(long, help = "Capital gains tax rate in percent")]
    capital_gains_tax: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual investment return in percent")]
    investment_return: Option<String>,
    #[arg(long, help = "Years to hold (1-30)")]
    years_to_hold: Option<String>,
}

impl From<FieldArgs> for RawInputs {
    fn from(args: FieldArgs) -> Self {
        RawInputs {
            purchase_price: args.purchase_price,
            current_home_value: args.current_home_value,
            loan_origination_date: args.loan_origination_date,
            loan_amount: args.loan_amount,
            interest_rate: args.interest_rate,
            mortgage_term: args.mortgage_term,
            primary_residence: args.primary_residence,
            hoa: args.hoa,
            property_taxes: args.property_taxes,
            insurance: args.insurance,
            maintenance: args.maintenance,
            rental_price: args.rental_price,
            rent_increase: args.rent_increase,
            management_fee: args.management_fee,
            rental_tax_rate: args.rental_tax_rate,
            home_appreciation: args.home_appreciation,
            cost_inflation: args.cost_inflation,
            selling_fees: args.selling_fees,
            capital_gains_tax: args.capital_gains_tax,
            investment_return: args.investment_return,
            years_to_hold: args.years_to_hold,
        }
    }
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let base = match cli.query.as_deref() {
        Some(query) => RawInputs::from_query_string(query).context("reading --query")?,
        None => RawInputs::default(),
    };
    let raw = base.overlay(cli.fields.into());
    let inputs = raw.validate(as_of);
    info!("running projection as of {} for {} years", as_of, inputs.years_to_hold);

    let runner = ScenarioRunner::new(ProjectionConfig::as_of(as_of));
    let result = runner.run(&inputs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_table(&result));
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(&result, BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nTable written to: {}", path.display());
    }

    if let Some(summary) = result.summary() {
        println!("\nAfter {} years:", summary.years_held);
        println!("  Hold and rent:   {}", format_currency(summary.hold_net_worth));
        println!("  Sell and invest: {}", format_currency(summary.sell_value));
        println!(
            "  Difference:      {} ({} comes out ahead)",
            format_currency(summary.difference),
            summary.better_option
        );
    }

    if let Some(year) = ChartSeries::from(&result).crossover_year() {
        println!("  Lead changes in year {}", year);
    }

    if !cli.sweep_appreciation.is_empty() {
        println!("\nHome appreciation sensitivity:");
        for (rate, summary) in runner.appreciation_sweep(&inputs, &cli.sweep_appreciation) {
            println!(
                "  {:>6.2}%  hold {:>14}  sell {:>14}  -> {}",
                rate,
                format_currency(summary.hold_net_worth),
                format_currency(summary.sell_value),
                summary.better_option
            );
        }
    }

    if cli.share {
        let query = RawInputs::from(&inputs).to_query_string()?;
        println!("\nShare: ?{}", query);
    }

    Ok(())
}
