//! Sizes an expansion tank from form fields given on the command line.
//!
//! ```text
//! cargo run --example sizing_form -- \
//!     --system-volume 4400 --min-pressure 50 --max-pressure 110 \
//!     --average-temp 230 --initial-temp 70 --max-temp 230
//! ```
//!
//! Set `RUST_LOG=debug` to see each calculation step.

use std::process::ExitCode;

use clap::Parser;
use expansion_tank_models::calculator::{Calculator, Field, FormFields, SizingRequest};
use tracing_subscriber::EnvFilter;

/// Expansion tank sizing calculator.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Total system volume (gal).
    #[arg(long, required_unless_present = "list_choices")]
    system_volume: Option<String>,

    /// Minimum tank pressure (psig).
    #[arg(long, default_value = "12")]
    min_pressure: String,

    /// Maximum tank pressure (psig).
    #[arg(long, default_value = "30")]
    max_pressure: String,

    /// Average operating temperature for the ASHRAE method (°F).
    #[arg(long, default_value = "180")]
    average_temp: String,

    /// Initial (fill) water temperature for the critical method (°F).
    #[arg(long, default_value = "50")]
    initial_temp: String,

    /// Maximum water temperature for the critical method (°F).
    #[arg(long, default_value = "200")]
    max_temp: String,

    /// Print the listed choices for each field and exit.
    #[arg(long)]
    list_choices: bool,
}

impl From<Args> for FormFields {
    fn from(args: Args) -> Self {
        Self {
            system_volume: args.system_volume.unwrap_or_default(),
            min_tank_pressure: args.min_pressure,
            max_tank_pressure: args.max_pressure,
            average_temperature: args.average_temp,
            initial_temperature: args.initial_temp,
            max_temperature: args.max_temp,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_choices {
        for field in Field::ALL {
            match field.choices() {
                Some(choices) => {
                    let listed: Vec<String> = choices.iter().map(ToString::to_string).collect();
                    println!("{field}: {}", listed.join(", "));
                }
                None => println!("{field}: any positive number"),
            }
        }
        return ExitCode::SUCCESS;
    }

    let calculator = match Calculator::new() {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("failed to build lookup tables: {err}");
            return ExitCode::FAILURE;
        }
    };

    let fields = FormFields::from(args);
    let request = match SizingRequest::parse(&fields) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Input Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for field in request.unlisted_choices() {
        tracing::warn!(%field, value = fields.get(field), "value is not one of the listed choices");
    }

    println!("{}", calculator.size(&request));
    ExitCode::SUCCESS
}
