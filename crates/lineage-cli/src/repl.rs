//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each command stands in for one interaction of the graphical browser:
//! `center` is clicking a person in the tree, `show` opens their profile,
//! `close` dismisses it.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lineage_browser::{FamilyBrowser, SortKey, View};
use lineage_domain::PersonLookup;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(browser: &mut FamilyBrowser, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Lineage REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    if let Err(e) = browser.tree().map_err(CliError::from).and_then(|tree| {
        println!("{}", formatter.format_tree(&tree, browser.store())?);
        Ok(())
    }) {
        eprintln!("{}", formatter.error(&e.to_string()));
    }

    loop {
        let prompt = prompt(browser);

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, browser, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Tree,
    Center(String),
    Show(String),
    Close,
    List(Option<SortKey>),
    Sort(SortKey),
    Search(String),
    Zoom(ZoomAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoomAction {
    In,
    Out,
    Reset,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&command, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "tree" => Ok(ReplCommand::Tree),
        "center" | "c" => single_id(args, "center <id>").map(ReplCommand::Center),
        "show" | "s" => single_id(args, "show <id>").map(ReplCommand::Show),
        "close" => Ok(ReplCommand::Close),
        "list" | "ls" => match args.first() {
            Some(key) => Ok(ReplCommand::List(Some(parse_sort_key(key)?))),
            None => Ok(ReplCommand::List(None)),
        },
        "sort" => match args {
            [key] => Ok(ReplCommand::Sort(parse_sort_key(key)?)),
            _ => Err(CliError::InvalidInput("Usage: sort <last|first|birth|death>".to_string())),
        },
        "search" | "find" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: search <text>".to_string()));
            }
            Ok(ReplCommand::Search(args.join(" ")))
        }
        "zoom" => match args {
            ["in"] | ["+"] => Ok(ReplCommand::Zoom(ZoomAction::In)),
            ["out"] | ["-"] => Ok(ReplCommand::Zoom(ZoomAction::Out)),
            ["reset"] => Ok(ReplCommand::Zoom(ZoomAction::Reset)),
            _ => Err(CliError::InvalidInput("Usage: zoom <in|out|reset>".to_string())),
        },
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

fn single_id(args: &[&str], usage: &str) -> Result<String> {
    match args {
        [id] => Ok(id.to_string()),
        _ => Err(CliError::InvalidInput(format!("Usage: {}", usage))),
    }
}

fn parse_sort_key(key: &str) -> Result<SortKey> {
    key.parse().map_err(CliError::InvalidInput)
}

/// Execute a REPL command.
fn execute_repl_command(cmd: ReplCommand, browser: &mut FamilyBrowser, formatter: &Formatter) -> Result<()> {
    match cmd {
        ReplCommand::Tree => {
            let tree = browser.tree()?;
            println!("{}", formatter.format_tree(&tree, browser.store())?);
        }
        ReplCommand::Center(id) => {
            let tree = browser.recenter(&id)?;
            println!("{}", formatter.format_tree(&tree, browser.store())?);
        }
        ReplCommand::Show(id) => {
            let profile = browser.show_profile(&id)?;
            println!("{}", formatter.format_profile(&profile)?);
        }
        ReplCommand::Close => {
            if browser.session().view() != View::Profile {
                println!("{}", formatter.warning("No profile is open"));
                return Ok(());
            }
            browser.close_profile();
            println!(
                "{}",
                formatter.info(&format!("Back to {} view", browser.session().view().as_str()))
            );
        }
        ReplCommand::List(key) => {
            if let Some(key) = key {
                browser.set_sort(key);
            }
            let people = browser.list();
            println!("{}", formatter.format_people(&people)?);
        }
        ReplCommand::Sort(key) => {
            browser.set_sort(key);
            println!("{}", formatter.success(&format!("Sorting by {}", key)));
        }
        ReplCommand::Search(query) => {
            let people = browser.search(&query);
            println!("{}", formatter.format_people(&people)?);
        }
        ReplCommand::Zoom(action) => {
            let percent = match action {
                ZoomAction::In => browser.zoom_in(),
                ZoomAction::Out => browser.zoom_out(),
                ZoomAction::Reset => browser.reset_zoom(),
            };
            println!("{}", formatter.info(&format!("Zoom: {}%", percent)));
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn prompt(browser: &FamilyBrowser) -> String {
    let root = &browser.session().root().root;
    format!("lineage [{}]> ", browser.store().display_name(root))
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::home()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  tree                           - Show the tree around the current root");
    println!("  center <id>                    - Re-center the tree on a person");
    println!("  show <id>                      - Open a person's profile");
    println!("  close                          - Close the open profile");
    println!("  list [last|first|birth|death]  - List everyone in the directory");
    println!("  sort <last|first|birth|death>  - Change the directory order");
    println!("  search <text>                  - Search names and places");
    println!("  zoom <in|out|reset>            - Change the tree zoom level");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_repl_command("tree").unwrap(), ReplCommand::Tree);
        assert_eq!(
            parse_repl_command("center p003").unwrap(),
            ReplCommand::Center("p003".to_string())
        );
        assert_eq!(parse_repl_command("s p001").unwrap(), ReplCommand::Show("p001".to_string()));
        assert_eq!(parse_repl_command("close").unwrap(), ReplCommand::Close);
        assert_eq!(parse_repl_command("quit").unwrap(), ReplCommand::Exit);
    }

    #[test]
    fn test_parse_directory_commands() {
        assert_eq!(parse_repl_command("list").unwrap(), ReplCommand::List(None));
        assert_eq!(
            parse_repl_command("list birth").unwrap(),
            ReplCommand::List(Some(SortKey::Birth))
        );
        assert_eq!(parse_repl_command("sort first").unwrap(), ReplCommand::Sort(SortKey::FirstName));
        assert_eq!(
            parse_repl_command("search lois  detroit").unwrap(),
            ReplCommand::Search("lois detroit".to_string())
        );
    }

    #[test]
    fn test_parse_zoom() {
        assert_eq!(parse_repl_command("zoom in").unwrap(), ReplCommand::Zoom(ZoomAction::In));
        assert_eq!(parse_repl_command("zoom -").unwrap(), ReplCommand::Zoom(ZoomAction::Out));
        assert_eq!(parse_repl_command("zoom reset").unwrap(), ReplCommand::Zoom(ZoomAction::Reset));
        assert!(parse_repl_command("zoom").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_repl_command("center"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("show a b"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("sort age"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("search"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_repl_command("connect"), Err(CliError::InvalidInput(_))));
    }
}
