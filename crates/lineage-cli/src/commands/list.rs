//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use lineage_browser::FamilyBrowser;

/// Execute the list command.
pub fn execute_list(args: ListArgs, browser: &mut FamilyBrowser, formatter: &Formatter) -> Result<()> {
    browser.set_sort(args.sort.into());
    let people = browser.list();
    println!("{}", formatter.format_people(&people)?);
    Ok(())
}
