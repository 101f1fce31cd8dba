//! Detect a pseudo-table in a JSON list of shape records.
//!
//! ```text
//! cargo run --example detect_shapes -- shapes.json --unit emu --markdown
//! cat shapes.json | cargo run --example detect_shapes -- --min-cols 3
//! ```
//!
//! Set `RUST_LOG=pseudotable=debug` to see why candidates were rejected.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use pseudotable::common::unit::CoordinateUnit;
use pseudotable::shape::shapes_from_json;
use pseudotable::{ParserOptions, PseudoTableParser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Detect tables laid out with free-floating text boxes")]
struct Args {
    /// JSON file holding an array of shape records (stdin when omitted)
    input: Option<PathBuf>,

    /// Coordinate unit of the records: emu, pt, twip, px or px@<dpi>
    #[arg(long, default_value = "pt")]
    unit: CoordinateUnit,

    /// Horizontal alignment tolerance, in the coordinate unit
    #[arg(long)]
    x_tolerance: Option<f64>,

    /// Vertical alignment tolerance, in the coordinate unit
    #[arg(long)]
    y_tolerance: Option<f64>,

    #[arg(long)]
    min_rows: Option<usize>,

    #[arg(long)]
    min_cols: Option<usize>,

    /// YAML file with parser options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print Markdown tables instead of JSON
    #[arg(long)]
    markdown: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => ParserOptions::from_yaml_file(path)?,
        None => ParserOptions::for_unit(args.unit),
    };
    if let Some(tolerance) = args.x_tolerance {
        options = options.with_x_tolerance(tolerance);
    }
    if let Some(tolerance) = args.y_tolerance {
        options = options.with_y_tolerance(tolerance);
    }
    if let Some(min_rows) = args.min_rows {
        options = options.with_min_rows(min_rows);
    }
    if let Some(min_cols) = args.min_cols {
        options = options.with_min_cols(min_cols);
    }
    let parser = PseudoTableParser::new(options)?;

    let json = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        },
    };
    let shapes = shapes_from_json(&json)?;

    let Some(detection) = parser.detect(&shapes) else {
        eprintln!("No pseudo-table found among {} shapes", shapes.len());
        if !args.markdown {
            println!("[]");
        }
        return Ok(());
    };

    eprintln!(
        "Found {}x{} table ({}, confidence {:.2})",
        detection.table.row_count(),
        detection.table.column_count(),
        detection.strategy.as_str(),
        detection.table.confidence_score
    );

    if args.markdown {
        print!("{}", detection.table.to_markdown());
    } else {
        println!("{}", serde_json::to_string_pretty(&[&detection.table])?);
    }

    Ok(())
}
