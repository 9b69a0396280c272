//! Command-line interface definitions for the scanner.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the unrest scanner.
///
/// # Examples
///
/// ```sh
/// # Default output location next to the program
/// tz_unrest_scanner
///
/// # Write the digest somewhere else
/// tz_unrest_scanner -o /srv/www/data
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory for latest.json and latest.txt
    #[arg(short, long, default_value = "web/data")]
    pub output_dir: String,
}
