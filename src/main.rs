//! # contactpack CLI
//!
//! Command-line interface for contactpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use contactpack::ContactpackError;
use contactpack::cli::Args;
use contactpack::core::models::ExportReport;
use contactpack::exporter::ContactExporter;
use contactpack::source::JsonFileSource;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.verbose);

    if args.report {
        let report = run_report(&args);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("❌ Error: {}", e),
        }
        if !report.success {
            process::exit(1);
        }
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ContactpackError> {
    let start = Instant::now();
    let options = args.export_options()?;

    println!("📇 contactpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    println!("📄 Format:  {}", options.format);

    let types = &options.contact_types;
    let mut kinds = Vec::new();
    if types.friends {
        kinds.push("friends");
    }
    if types.groups {
        kinds.push("groups");
    }
    if types.officials {
        kinds.push("officials");
    }
    if kinds.is_empty() {
        println!("👥 Types:   none");
    } else {
        println!("👥 Types:   {}", kinds.join(", "));
    }

    if let Some(ref selected) = options.selected_usernames {
        if !selected.is_empty() {
            println!("🎯 Select:  {} username(s)", selected.len());
        }
    }
    println!();

    let exporter = ContactExporter::new(JsonFileSource::new(&args.input));
    let summary = exporter.export(&args.output, &options)?;

    println!("✅ Done! Exported {} contacts", summary.count);
    println!("   Saved to {}", summary.output_path.display());
    println!("   Took {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}

fn run_report(args: &Args) -> ExportReport {
    match args.export_options() {
        Ok(options) => ContactExporter::new(JsonFileSource::new(&args.input))
            .export_report(&args.output, &options),
        Err(e) => ExportReport::from_result(Err(e)),
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
