// Batch extraction of EPB performance report PDFs into one CSV.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use epbscan::output::CsvExporter;
use epbscan::utils::ExtractError;
use epbscan::ReportParser;

#[derive(Parser)]
#[command(
    name = "epbscan",
    about = "Extract fields from EPB performance report PDFs into a CSV table"
)]
struct Args {
    /// Directory scanned for .pdf files
    #[arg(default_value = ".")]
    input_dir: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,
}

fn main() -> Result<(), ExtractError> {
    env_logger::init();
    let args = Args::parse();

    let mut pdf_paths: Vec<PathBuf> = fs::read_dir(&args.input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    pdf_paths.sort();

    let parser = ReportParser::new();
    let mut all_rows = Vec::new();
    let mut failed = 0usize;
    for path in &pdf_paths {
        match parser.parse(path) {
            Ok(rows) => {
                info!("{}: {} rows", path.display(), rows.len());
                all_rows.extend(rows);
            }
            // One unreadable document never aborts the batch.
            Err(err) => {
                failed += 1;
                error!("skipping {}: {}", path.display(), err);
            }
        }
    }

    CsvExporter::write(&all_rows, &args.output)?;

    println!(
        "Parsing complete. {} rows from {} documents ({} failed) saved to {}",
        all_rows.len(),
        pdf_paths.len() - failed,
        failed,
        args.output.display()
    );
    Ok(())
}
