mod debug_report;
mod logging;

use chrono::NaiveDateTime;
use clap::{ArgAction, Parser, ValueEnum};
use ruledoc::{Context, DateDialect, FieldRules, Options, Parameters, RuleCatalog, aggregate_verbose_with};
use std::io::{self, IsTerminal};

const DEFAULT_REFERENCE: &str = "2013-02-12T04:30:00";

/// Document validation rules: type, description and a deterministic example per field.
///
/// Exit codes: 0 success, 1 internal error, 2 invalid arguments.
#[derive(Parser, Debug)]
#[command(name = "ruledoc", version)]
struct Cli {
    /// Fields as NAME=RULES, e.g. age='required|integer|min:18'.
    #[arg(value_name = "NAME=RULES", required = true, value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Seed shared by all fields, usually the endpoint (`GET /users`).
    #[arg(long, short, default_value = "ruledoc", env = "RULEDOC_SEED")]
    seed: String,

    /// Reference time for relative dates and `date_format`, as YYYY-MM-DDTHH:MM:SS.
    #[arg(long, default_value = DEFAULT_REFERENCE, value_parser = parse_reference)]
    reference: NaiveDateTime,

    /// How to read ambiguous numeric dates such as 04/05/2020.
    #[arg(long, value_enum, default_value_t = Dialect::Uk)]
    dialect: Dialect,

    /// Print the parameter map as JSON instead of the report.
    #[arg(long)]
    json: bool,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Log unknown rules and dropped effects (-v), or every rule (-vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dialect {
    Uk,
    Us,
}

impl From<Dialect> for DateDialect {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Uk => DateDialect::Uk,
            Dialect::Us => DateDialect::Us,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
    logging::init_logging(cli.verbose, io::stderr().is_terminal());

    let ctx = Context { reference_time: cli.reference };
    let opts = Options { date_dialect: cli.dialect.into() };
    let catalog = RuleCatalog::new();

    let mut params = Parameters::default();
    let mut reports = Vec::with_capacity(cli.fields.len());
    for (name, rules) in &cli.fields {
        let rules = FieldRules::from(rules.as_str());
        let details = aggregate_verbose_with(name, rules.rules(), &cli.seed, &catalog, &ctx, &opts);
        params.insert(name.clone(), details.metadata.clone());
        reports.push(details);
    }

    if cli.json {
        match serde_json::to_string_pretty(&params) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize parameters: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let palette = debug_report::Palette::new(color);
    for details in &reports {
        debug_report::print_field(details, &palette);
    }
    println!();
}

fn parse_field(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, rules)) if !name.trim().is_empty() => Ok((name.trim().to_string(), rules.to_string())),
        _ => Err(format!("expected NAME=RULES, got '{value}'")),
    }
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("invalid reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}
