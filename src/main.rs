use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ing2quicken::{encoding, error, ing, quicken};

/// Convert an ING (Germany) CSV export to a Quicken-compatible CSV.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the ING export, e.g. ING_Bank_export.csv
    input: PathBuf,
    /// Path to write the Quicken CSV output
    output: PathBuf,
    /// Account name to populate in the Quicken CSV
    #[arg(long, default_value = "ING Checking")]
    default_account: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(count) => {
            println!("Wrote {count} transactions to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> error::Result<usize> {
    let lines = encoding::read_lines(&cli.input)?;
    let transactions = ing::parse_transactions(&lines)?;
    if transactions.is_empty() {
        eprintln!("Warning: no transactions parsed. Check the input file format.");
    }
    // The export declares its own account name, but imports are keyed to the
    // account configured on the command line.
    quicken::write_file(&cli.output, &cli.default_account, &transactions)?;
    Ok(transactions.len())
}
