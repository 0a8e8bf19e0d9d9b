//! Convert command implementation.
//!
//! The convert command:
//! 1. Acquires raw lines (file or built-in sample)
//! 2. Converts each line (decode + map)
//! 3. Writes the converted batch to JSON
//! 4. Prints the run report and optional agent context

use crate::bridge::{Bridge, ConversionReport};
use crate::context::generate_context;
use crate::output::write_records;
use crate::source::{read_lines, sample_stream};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Path to a fixed-width extract file
    pub input: Option<PathBuf>,

    /// Use the built-in sample extract instead of a file
    pub use_sample: bool,

    /// Output path for the converted JSON batch
    pub output_json: PathBuf,

    /// Print the run report to stdout
    pub print_summary: bool,

    /// Print the generated agent context for the first record
    pub print_context: bool,

    /// Fail the run if any line could not be converted
    pub strict: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: None,
            use_sample: false,
            output_json: PathBuf::from("records.json"),
            print_summary: false,
            print_context: false,
            strict: false,
        }
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - convert command arguments
///
/// # Returns
/// Ok if the run completes (in strict mode: and every line converted)
///
/// # Errors
/// * Input file read failures
/// * Output write failures
/// * Any conversion failure when `strict` is set
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Acquire raw lines
    info!("Step 1/4: Acquiring raw lines...");
    let lines = if args.use_sample {
        info!("Using built-in sample extract");
        sample_stream()
    } else {
        let path = args
            .input
            .as_ref()
            .context("No input file given (use --input or --sample)")?;
        read_lines(path).with_context(|| format!("Failed to read extract {}", path.display()))?
    };

    debug!("Acquired {} raw lines", lines.len());

    // Step 2: Convert
    info!("Step 2/4: Converting {} lines...", lines.len());
    let bridge = Bridge::user_master();
    let report = ConversionReport::collect(bridge.convert_lines(lines.iter()));

    for (index, message) in &report.failures {
        warn!("Line {} skipped: {}", index + 1, message);
    }

    info!("Conversion finished: {}", report.summary());

    // Step 3: Write the converted batch
    info!("Step 3/4: Writing output batch...");
    write_records(&report.records, &args.output_json)
        .context("Failed to write converted batch")?;

    info!("✓ Batch written to: {}", args.output_json.display());

    // Step 4: Report
    info!("Step 4/4: Reporting...");

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CONVERSION SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input lines:    {}", report.converted() + report.failed());
        println!("Converted:      {}", report.converted());
        println!("Failed:         {}", report.failed());
        for (index, message) in &report.failures {
            println!("  line {}: {}", index + 1, message);
        }
        println!("Output:         {}", args.output_json.display());
        println!("{}", "=".repeat(80));
    }

    if args.print_context {
        if let Some(record) = report.records.first() {
            let context = generate_context(record)
                .context("Failed to generate agent context")?;
            println!("\n{}", "-".repeat(30));
            println!("GENERATED AI PROMPT CONTEXT:");
            println!("{context}");
            println!("{}", "-".repeat(30));
        } else {
            warn!("No converted records; skipping context generation");
        }
    }

    if args.strict && report.failed() > 0 {
        anyhow::bail!("{} line(s) failed to convert in strict mode", report.failed());
    }

    let elapsed = start_time.elapsed();
    info!("Convert completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
///
/// # Arguments
/// * `args` - arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.is_none() && !args.use_sample {
        anyhow::bail!("Either --input or --sample must be given");
    }

    if args.input.is_some() && args.use_sample {
        anyhow::bail!("--input and --sample are mutually exclusive");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}
