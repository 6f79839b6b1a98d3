use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use fmt_engine::postal::Country;
use fmt_engine::settings::{self, settings};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "fmtool", about = "Display formatting from the command line")]
struct Cli {
    /// Custom settings TOML (defaults for mask, delimiters and country)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Print {"input": ..., "output": ...} as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Write debug traces to stderr (needs the `trace` feature)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSON traces into this directory instead of stderr
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a number to a Roman numeral
    Roman {
        /// Number to convert (floored), or a numeral with --decode
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Parse a Roman numeral back into a number
        #[arg(long)]
        decode: bool,
    },
    /// Mask and group a card number
    Card {
        number: String,
        /// Mask character (default from settings)
        #[arg(long)]
        mask: Option<char>,
        /// Show every digit
        #[arg(long, conflicts_with = "mask")]
        insecure: bool,
    },
    /// Format a dollar amount
    Dollars {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Round to whole dollars
        #[arg(long)]
        no_cents: bool,
    },
    /// Format card expiry digits as MM/YY
    Expiration { digits: String },
    /// Format a 10- or 11-digit phone number
    Phone {
        number: String,
        /// Delimiter between parts (default from settings; empty = US style)
        #[arg(long)]
        delimiter: Option<String>,
    },
    /// Left-pad a value
    Pad {
        value: String,
        len: usize,
        #[arg(long, default_value_t = '0')]
        fill: char,
    },
    /// Round and comma-group a number
    Thousands {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Format a duration
    Time {
        minutes: u64,
        seconds: u64,
        #[arg(long)]
        hours: Option<u64>,
        #[arg(long)]
        millis: Option<u64>,
        /// Segment delimiter (default from settings)
        #[arg(long)]
        delimiter: Option<String>,
    },
    /// Title-case text
    Title { text: String },
    /// Encode text as HTML numeric character references
    Entities { text: String },
    /// Format a postal code
    Zip {
        code: String,
        /// Country code: "us" or "ca" (default from settings)
        #[arg(long)]
        country: Option<String>,
    },
    /// Inspect the settings file format
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate { file: PathBuf },
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        fmt_engine::trace_init::init_tracing(dir);
    } else if cli.verbose {
        fmt_engine::trace_init::init_stderr_tracing();
    }

    if let Some(path) = &cli.settings {
        let content = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(settings::init_custom(content), "Error: {}");
    }

    let (input, output) = match cli.command {
        Command::Roman { value, decode } => {
            let output = if decode {
                die!(fmt_engine::parse_roman_numeral(&value), "Error: {}").to_string()
            } else {
                let n = fmt_engine::parse_amount(&value);
                die!(fmt_engine::to_roman_numeral(n), "Error: {}")
            };
            (value, output)
        }
        Command::Card {
            number,
            mask,
            insecure,
        } => {
            let mask = (!insecure).then(|| mask.unwrap_or_else(|| settings().card.mask()));
            let output = fmt_engine::credit_card(&number, mask);
            (number, output)
        }
        Command::Dollars { amount, no_cents } => {
            let output = fmt_engine::dollars_str(&amount, !no_cents);
            (amount, output)
        }
        Command::Expiration { digits } => {
            let output = fmt_engine::expiration(&digits);
            (digits, output)
        }
        Command::Phone { number, delimiter } => {
            let delimiter = delimiter
                .as_deref()
                .or_else(|| settings().phone.delimiter());
            let output = fmt_engine::phone_number(&number, delimiter);
            (number, output)
        }
        Command::Pad { value, len, fill } => {
            let output = fmt_engine::prepend(&value, len, fill);
            (value, output)
        }
        Command::Thousands { value } => {
            let output = fmt_engine::separate_thousands_str(&value);
            (value, output)
        }
        Command::Time {
            minutes,
            seconds,
            hours,
            millis,
            delimiter,
        } => {
            let delimiter = delimiter.unwrap_or_else(|| settings().time.delimiter.clone());
            let output = fmt_engine::time(hours, minutes, seconds, millis, &delimiter);
            let input = [hours, Some(minutes), Some(seconds), millis]
                .iter()
                .map(|part| part.map_or_else(|| "-".to_string(), |v| v.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            (input, output)
        }
        Command::Title { text } => {
            let output = fmt_engine::to_title_case(&text);
            (text, output)
        }
        Command::Entities { text } => {
            let output = fmt_engine::unicode_entities(&text);
            (text, output)
        }
        Command::Zip { code, country } => {
            let country = country
                .as_deref()
                .map(Country::from_code)
                .unwrap_or_else(|| settings().postal.country());
            let output = fmt_engine::zip_code(&code, country);
            (code, output)
        }
        Command::Settings { action } => {
            run_settings(action);
            return;
        }
    };

    if cli.json {
        let json = JsonOutput {
            input: &input,
            output: &output,
        };
        println!("{}", die!(serde_json::to_string(&json), "Error: {}"));
    } else {
        println!("{output}");
    }
}

fn run_settings(action: SettingsAction) {
    match action {
        SettingsAction::Export => print!("{}", settings::default_toml()),
        SettingsAction::Validate { file } => {
            let content = die!(
                fs::read_to_string(&file),
                "Error reading {}: {}",
                file.display()
            );
            let s = die!(settings::parse_settings_toml(&content), "Error: {}");
            println!(
                "OK: card.mask={:?}, time.delimiter={:?}, postal.country={}",
                s.card.mask(),
                s.time.delimiter,
                s.postal.country()
            );
        }
    }
}
