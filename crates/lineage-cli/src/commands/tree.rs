//! Tree command implementation.

use crate::cli::TreeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lineage_browser::FamilyBrowser;

/// Execute the tree command.
pub fn execute_tree(args: TreeArgs, browser: &mut FamilyBrowser, formatter: &Formatter) -> Result<()> {
    let tree = match (args.root.as_deref(), args.co_root.as_deref()) {
        (Some(root), co_root) => browser.recenter_with(root, co_root)?,
        (None, Some(_)) => {
            return Err(CliError::InvalidInput("--co-root needs --root".to_string()));
        }
        (None, None) => browser.tree()?,
    };

    println!("{}", formatter.format_tree(&tree, browser.store())?);
    Ok(())
}
