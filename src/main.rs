//! Legacy Bridge CLI
//!
//! A modernization tool for fixed-width legacy extracts.
//! Converts mainframe-style records into schema-validated JSON batches.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use legacy_bridge::commands::{execute_convert, validate_args, ConvertArgs};
use legacy_bridge::utils::config::SCHEMA_VERSION;

/// Legacy Bridge - fixed-width record modernization
#[derive(Parser, Debug)]
#[command(name = "legacy-bridge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a fixed-width extract into a modernized JSON batch
    Convert {
        /// Path to the fixed-width extract file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Use the built-in sample extract instead of a file
        #[arg(long)]
        sample: bool,

        /// Output path for the converted JSON batch
        #[arg(short, long, default_value = "records.json")]
        output: PathBuf,

        /// Print the conversion report to stdout
        #[arg(long)]
        summary: bool,

        /// Print the generated agent context for the first record
        #[arg(long)]
        context: bool,

        /// Exit non-zero if any line fails to convert
        #[arg(long)]
        strict: bool,
    },

    /// Validate a converted JSON batch file
    Validate {
        /// Path to batch JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Convert {
            input,
            sample,
            output,
            summary,
            context,
            strict,
        } => {
            let args = ConvertArgs {
                input,
                use_sample: sample,
                output_json: output,
                print_summary: summary,
                print_context: context,
                strict,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute conversion
            execute_convert(args)?;
        }

        Commands::Validate { file } => {
            validate_batch_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a converted batch JSON file
///
/// **Private** - internal command implementation
fn validate_batch_file(file_path: PathBuf) -> Result<()> {
    use legacy_bridge::output::read_records;

    println!("Validating batch: {}", file_path.display());

    let records = read_records(&file_path)?;

    let active = records.iter().filter(|r| r.payload.is_active).count();

    println!("✓ Valid batch JSON");
    println!("  Records:  {}", records.len());
    println!("  Active:   {}", active);
    println!("  Inactive: {}", records.len() - active);
    if let Some(first) = records.first() {
        println!("  Origin:   {}", first.metadata.origin);
        println!("  Engine:   {}", first.metadata.engine_version);
    }

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Legacy Bridge Record Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  metadata: object           - Provenance and generation metadata");
        println!("    origin: string           - Source system identifier");
        println!("    engine_version: string   - Converting engine name and version");
        println!("    generated_at: string     - RFC 3339 conversion timestamp");
        println!("  payload: object            - Converted business payload");
        println!("    id: string               - Legacy user identifier");
        println!("    full_name: string        - Full name, trimmed of padding");
        println!("    region: string           - Region code");
        println!("    onboarding_date: string  - Onboarding date (YYYYMMDD)");
        println!("    is_active: bool          - True when status matched the active code");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Legacy Bridge v{}", env!("CARGO_PKG_VERSION"));
    println!("Record Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A modernization tool for fixed-width legacy extracts.");
}
