//! CLI tool for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a whole record
//! cardcheck validate --owner "Jane Doe" --number 4123456789012 --date 12/30 --cvc 123
//!
//! # Classify a card number
//! cardcheck classify 378282246310005
//!
//! # Check a single field
//! cardcheck owner "Jane Doe Smith"
//! cardcheck expiry 12/2030
//! ```

use std::process::ExitCode;

use card_validation::check::{classify_record, validate_record};
use card_validation::{
    classify_network, cvc, expiry, number, owner, CardRecord, Field, StandardRules,
    ValidationErrors,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Credit card record validation tool")]
struct Cli {
    /// Evaluate expiry dates as of this day (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a full card record and classify its network
    Validate {
        /// Owner name
        #[arg(long)]
        owner: Option<String>,

        /// Card number (digits only)
        #[arg(long)]
        number: Option<String>,

        /// Expiry date (MM/YYYY, MM/YY, MMYY or MMYYYY)
        #[arg(long, alias = "expiry")]
        date: Option<String>,

        /// Card verification code
        #[arg(long, alias = "cvv")]
        cvc: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Classify a card number into its payment network
    Classify {
        /// Card number (digits only)
        card_number: String,
    },

    /// Validate an owner name
    Owner {
        /// Owner name
        name: String,
    },

    /// Validate a card number
    Number {
        /// Card number (digits only)
        card_number: String,
    },

    /// Validate a CVC
    Cvc {
        /// CVC to validate
        cvc: String,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YYYY, MM/YY, MMYY or MMYYYY)
        date: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let rules = match cli.today {
        Some(day) => StandardRules::at(day),
        None => StandardRules::new(),
    };

    match cli.command {
        Commands::Validate {
            owner,
            number,
            date,
            cvc,
            output,
        } => cmd_validate(&rules, CardRecord::from_parts(owner, number, date, cvc), output),
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Owner { name } => report(owner::validate_owner(&name).map(|()| "valid owner".to_string())),
        Commands::Number { card_number } => report(
            number::parse_number(&card_number).map(|network| format!("Network: {}", network)),
        ),
        Commands::Cvc { cvc: input } => report(
            cvc::validate_cvc(&input).map(|validated| format!("Length: {} digits", validated.length())),
        ),
        Commands::Expiry { date } => report(
            expiry::validate_expiry_on(&date, rules.today())
                .map(|exp| format!("Expires: {}", exp.format_long())),
        ),
    }
}

fn cmd_validate(rules: &StandardRules, record: CardRecord, output: OutputFormat) -> ExitCode {
    let errors = validate_record(rules, &record).err().unwrap_or_default();

    let network = if errors.is_empty() {
        classify_record(rules, &record).ok()
    } else {
        None
    };

    match output {
        OutputFormat::Text => {
            for line in verdict_lines(&errors) {
                println!("{}", line);
            }
            if let Some(network) = network {
                println!("Network: {}", network);
            }
            println!("Valid: {}", if errors.is_empty() { "yes" } else { "no" });
        }
        OutputFormat::Json => {
            let body = json!({
                "valid": errors.is_empty(),
                "network": network,
                "errors": errors.to_map(),
            });
            println!("{}", body);
        }
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// One line per field, in field order.
fn verdict_lines(errors: &ValidationErrors) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| match errors.get(field) {
            None => format!("{}: ok", field.key()),
            Some(e) => match e.reason() {
                Some(reason) => format!("{}: {} ({})", field.key(), e.message(), reason),
                None => format!("{}: {}", field.key(), e.message()),
            },
        })
        .collect()
}

fn cmd_classify(card_number: &str) -> ExitCode {
    match classify_network(card_number) {
        Ok(network) => {
            println!("{}", network.identifier());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report<E: std::fmt::Display>(result: Result<String, E>) -> ExitCode {
    match result {
        Ok(detail) => {
            println!("Valid: yes");
            println!("{}", detail);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
