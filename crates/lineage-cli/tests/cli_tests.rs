//! Commands over a data directory produced by `import`

use lineage_browser::{BrowserConfig, BrowserError, FamilyBrowser, View};
use lineage_cli::cli::{ImportArgs, ListArgs, ProfileArgs, SearchArgs, SortArg, TreeArgs};
use lineage_cli::commands;
use lineage_cli::config::OutputFormat;
use lineage_cli::{CliError, Formatter};
use lineage_store::DataPaths;
use serde_json::Value;
use tempfile::TempDir;

const FAMILY_GED: &str = "\
0 HEAD
0 @I1@ INDI
1 NAME Joseph /Sprys/
1 SEX M
1 BIRT
2 DATE 15 MAR 1892
2 PLAC Krakow, Poland
1 DEAT
2 DATE 1967
0 @I2@ INDI
1 NAME Lois /Stokes/
1 SEX F
1 BIRT
2 DATE 1895
2 PLAC Detroit, Michigan
0 @I3@ INDI
1 NAME Mary /Sprys/
1 SEX F
1 BIRT
2 DATE ABT 1917
0 @I4@ INDI
1 NAME Edward /Baker/
1 SEX M
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 MARR
2 DATE 1915
1 CHIL @I3@
0 @F2@ FAM
1 HUSB @I4@
1 WIFE @I3@
0 TRLR
";

fn quiet() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

async fn imported(dir: &TempDir) -> FamilyBrowser {
    let ged = dir.path().join("family.ged");
    tokio::fs::write(&ged, FAMILY_GED).await.unwrap();
    let data_dir = dir.path().join("data");

    let args = ImportArgs {
        file: ged,
        out: None,
    };
    commands::execute_import(args, &data_dir, &quiet()).await.unwrap();

    FamilyBrowser::load(&DataPaths::in_dir(&data_dir), &BrowserConfig::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_import_then_browse() {
    let dir = TempDir::new().unwrap();
    let mut browser = imported(&dir).await;
    assert!(dir.path().join("data").join("id_mapping.json").exists());

    let tree = browser.tree().unwrap();
    assert_eq!(tree.root.as_str(), "p001");
    assert_eq!(tree.co_root.as_ref().map(|c| c.as_str()), Some("p002"));

    let json = Formatter::new(OutputFormat::Json, false)
        .format_tree(&tree, browser.store())
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["descendants"]["branches"][0]["person"]["name"], "Mary Sprys");
    assert_eq!(value["descendants"]["branches"][0]["spouse"]["id"], "p004");

    commands::execute_tree(
        TreeArgs {
            root: Some("p003".to_string()),
            co_root: None,
        },
        &mut browser,
        &quiet(),
    )
    .unwrap();
    assert_eq!(browser.session().root().root.as_str(), "p003");
}

#[tokio::test]
async fn test_tree_rejects_partner_without_root() {
    let dir = TempDir::new().unwrap();
    let mut browser = imported(&dir).await;

    let result = commands::execute_tree(
        TreeArgs {
            root: None,
            co_root: Some("p002".to_string()),
        },
        &mut browser,
        &quiet(),
    );
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[tokio::test]
async fn test_list_search_and_profile() {
    let dir = TempDir::new().unwrap();
    let mut browser = imported(&dir).await;

    commands::execute_list(ListArgs { sort: SortArg::Birth }, &mut browser, &quiet()).unwrap();
    assert_eq!(browser.session().view(), View::List);
    let order: Vec<&str> = browser.list().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["p004", "p001", "p002", "p003"]);

    commands::execute_search(
        SearchArgs {
            query: vec!["detroit".to_string()],
        },
        &mut browser,
        &quiet(),
    )
    .unwrap();
    assert_eq!(browser.session().query(), "detroit");
    let found: Vec<&str> = browser.search("detroit").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(found, vec!["p002"]);

    commands::execute_profile(ProfileArgs { id: "p003".to_string() }, &mut browser, &quiet()).unwrap();
    assert_eq!(browser.session().view(), View::Profile);

    let profile = browser.profile("p003").unwrap();
    let text = Formatter::new(OutputFormat::Table, false)
        .format_profile(&profile)
        .unwrap();
    assert!(text.contains("circa 1917"));
    assert!(text.contains("Joseph Sprys (1892 – 1967) [p001]"));
}

#[tokio::test]
async fn test_unknown_profile() {
    let dir = TempDir::new().unwrap();
    let mut browser = imported(&dir).await;

    let result = commands::execute_profile(ProfileArgs { id: "p042".to_string() }, &mut browser, &quiet());
    assert!(matches!(
        result,
        Err(CliError::Browser(BrowserError::PersonNotFound(ref id))) if id == "p042"
    ));
}

#[tokio::test]
async fn test_import_missing_file() {
    let dir = TempDir::new().unwrap();
    let args = ImportArgs {
        file: dir.path().join("none.ged"),
        out: Some(dir.path().join("out")),
    };
    let result = commands::execute_import(args, dir.path(), &quiet()).await;
    assert!(matches!(result, Err(CliError::Import(_))));
}
