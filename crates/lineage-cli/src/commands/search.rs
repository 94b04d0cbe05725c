//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lineage_browser::FamilyBrowser;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, browser: &mut FamilyBrowser, formatter: &Formatter) -> Result<()> {
    let query = args.query.join(" ");
    if query.trim().is_empty() {
        return Err(CliError::InvalidInput("Search query cannot be empty".to_string()));
    }

    let people = browser.search(&query);
    println!("{}", formatter.format_people(&people)?);
    Ok(())
}
