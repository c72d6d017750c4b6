//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::{Args, ReportText};
use chatlens::core::{Report, apply_filters};
use chatlens::format::write_to_format;
use chatlens::parser::TranscriptParser;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let filter_config = args.filter_config()?;
    let stats_config = args.stats_config()?;
    let export_format = args.export_format().transpose()?;

    let parser = TranscriptParser::with_config(args.parse_config());
    let parse_start = Instant::now();
    let store = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();
    store.require_records(Some(args.input.clone().into()))?;

    if args.list_users {
        for option in store.user_options() {
            println!("{option}");
        }
        return Ok(());
    }

    let report = Report::build(store.records(), &filter_config, &stats_config);
    if report.is_empty() {
        return Err(ChatlensError::empty_selection(filter_config.describe()));
    }

    if args.json {
        // Keep stdout machine-readable: the JSON document only.
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input);
        println!("👤 User:    {}", filter_config.user);
        if let Some(after) = &args.after {
            println!("📅 After:   {}", after);
        }
        if let Some(before) = &args.before {
            println!("📅 Before:  {}", before);
        }
        println!(
            "   Parsed {} records with {} ({:.2}s)",
            store.len(),
            parser.name(),
            parse_time.as_secs_f64()
        );
        let unparsed = store.unparsed_count();
        if unparsed > 0 {
            println!("⚠️  {} records have an unreadable timestamp", unparsed);
        }
        println!();
        print!("{}", ReportText(&report));
    }

    if let (Some(output), Some(format)) = (args.output.as_deref(), export_format) {
        let selection = apply_filters(store.records(), &filter_config);
        let write_start = Instant::now();
        write_to_format(selection.iter().copied(), output, format, &args.output_config())?;
        // Progress goes to stderr in JSON mode so stdout stays a single document.
        let message = format!(
            "💾 Exported {} records as {} to {} ({:.2}s)",
            selection.len(),
            format,
            output,
            write_start.elapsed().as_secs_f64()
        );
        if args.json {
            eprintln!("{message}");
        } else {
            println!();
            println!("{message}");
        }
    }

    if !args.json {
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}
