use std::io;
use std::path::Path;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::readers::CatalogReader;
use crate::utils::constants::CATALOG_FILE;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let progress = ProgressReporter::new_spinner("Loading catalog...", false);

    let reader = CatalogReader::new();
    let catalog = reader.read_catalog(Path::new(CATALOG_FILE))?;

    progress.finish_with_message(&format!("Loaded {} events", catalog.len()));

    let writer = ReportWriter::new();
    let mut stdout = io::stdout().lock();
    writer.write_report(&mut stdout, &catalog)?;

    Ok(())
}
