//! Import command implementation.

use crate::cli::ImportArgs;
use crate::error::Result;
use crate::output::Formatter;
use lineage_gedcom::GedcomImporter;
use std::path::Path;

/// Execute the import command, writing documents into `args.out` or `data_dir`.
pub async fn execute_import(args: ImportArgs, data_dir: &Path, formatter: &Formatter) -> Result<()> {
    let out = args.out.as_deref().unwrap_or(data_dir);

    let import = GedcomImporter::default().import_file(&args.file).await?;
    let written = import.write_to(out).await?;

    println!("{}", formatter.format_import(&import.stats, &written)?);
    Ok(())
}
