//! Profile command implementation.

use crate::cli::ProfileArgs;
use crate::error::Result;
use crate::output::Formatter;
use lineage_browser::FamilyBrowser;

/// Execute the profile command.
pub fn execute_profile(args: ProfileArgs, browser: &mut FamilyBrowser, formatter: &Formatter) -> Result<()> {
    let profile = browser.show_profile(&args.id)?;
    println!("{}", formatter.format_profile(&profile)?);
    Ok(())
}
