//! GEDCOM → documents on disk → loaded store

use lineage_domain::{Gender, PersonLookup};
use lineage_gedcom::{GedcomError, GedcomImporter, IdMapping, ImportConfig, ID_MAPPING_FILE};
use lineage_graph::GraphBuilder;
use lineage_store::{DataPaths, RelationshipRecord, SOURCES_FILE};
use tempfile::TempDir;

const FAMILY_GED: &str = "\
0 HEAD
1 SOUR Ancestry.com Family Trees
1 CHAR UTF-8
0 @I10@ INDI
1 NAME Joseph Walter /Sprys/
2 GIVN Joseph Walter
2 SURN Sprys
1 SEX M
1 BIRT
2 DATE 15 MAR 1892
2 PLAC Krakow, Poland
1 DEAT
2 DATE 1967
1 RESI
2 DATE ABT 1920
2 PLAC Detroit, Michigan
1 NOTE Carpenter
1 NOTE Emigrated 1910
1 FAMS @F1@
0 @I20@ INDI
1 NAME Lois Jane /Stokes/
1 SEX F
1 BIRT
2 DATE BEF 1896
1 FAMS @F1@
0 @I30@ INDI
1 NAME Mary /Sprys/
1 SEX F
1 FAMC @F1@
0 @I40@ INDI
1 NAME Paul /Sprys/
1 FAMC @F1@
0 @S1@ SOUR
1 TITL 1920 Census
0 @F1@ FAM
1 HUSB @I10@
1 WIFE @I20@
1 MARR
2 DATE 12 JUN 1915
2 PLAC Detroit
1 CHIL @I30@
1 CHIL @I40@
0 @F2@ FAM
1 WIFE @I20@
1 CHIL @I99@
0 TRLR
";

#[test]
fn test_convert_people() {
    let import = GedcomImporter::default().convert(FAMILY_GED).unwrap();

    assert_eq!(import.people.len(), 4);
    let joseph = &import.people[0];
    assert_eq!(joseph.id, "p001");
    assert_eq!(joseph.first_name, "Joseph");
    assert_eq!(joseph.middle_name.as_deref(), Some("Walter"));
    assert_eq!(joseph.last_name, "Sprys");
    assert_eq!(joseph.gender.as_deref(), Some("male"));

    let birth = joseph.birth.as_ref().unwrap();
    assert_eq!(birth.date.as_deref(), Some("March 15, 1892"));
    assert_eq!(birth.place.as_deref(), Some("Krakow, Poland"));
    assert_eq!(joseph.death.as_ref().unwrap().date.as_deref(), Some("1967"));
    assert_eq!(joseph.residences[0].date.as_deref(), Some("circa 1920"));
    assert_eq!(joseph.notes.as_deref(), Some("Carpenter Emigrated 1910"));

    let lois = &import.people[1];
    assert_eq!(lois.middle_name.as_deref(), Some("Jane"));
    assert_eq!(lois.birth.as_ref().unwrap().date.as_deref(), Some("before 1896"));

    assert_eq!(import.people[3].gender, None);
    assert!(import.people[3].birth.is_none());
}

#[test]
fn test_convert_relationships() {
    let import = GedcomImporter::default().convert(FAMILY_GED).unwrap();

    // F1: spouse + 2 children × 2 parents; F2: 1 child × 1 parent
    assert_eq!(import.relationships.len(), 6);
    match &import.relationships[0] {
        RelationshipRecord::Spouse {
            id,
            person1,
            person2,
            marriage_date,
            marriage_place,
            ..
        } => {
            assert_eq!(id.as_deref(), Some("r001"));
            assert_eq!((person1.as_str(), person2.as_str()), ("p001", "p002"));
            assert_eq!(marriage_date.as_deref(), Some("June 12, 1915"));
            assert_eq!(marriage_place.as_deref(), Some("Detroit"));
        }
        other => panic!("expected spouse, got {:?}", other),
    }
    match &import.relationships[5] {
        RelationshipRecord::ParentChild { id, parent, child } => {
            assert_eq!(id.as_deref(), Some("r006"));
            assert_eq!(parent, "p002");
            // no INDI record for I99
            assert_eq!(child, "I99");
        }
        other => panic!("expected parent-child, got {:?}", other),
    }

    let stats = import.stats;
    assert_eq!(stats.individuals, 4);
    assert_eq!(stats.families, 2);
    assert_eq!(stats.sources, 1);
    assert_eq!(stats.spouse_relationships, 1);
    assert_eq!(stats.parent_child_relationships, 5);
    assert_eq!((stats.males, stats.females, stats.unknown_gender), (1, 2, 1));
}

#[test]
fn test_id_mapping() {
    let import = GedcomImporter::default().convert(FAMILY_GED).unwrap();
    assert_eq!(import.id_mapping.resolve("I20"), "p002");
    assert_eq!(import.id_mapping.new_to_ancestry.get("p004").map(String::as_str), Some("I40"));
}

#[test]
fn test_custom_id_format() {
    let config = ImportConfig {
        person_prefix: "person-".to_string(),
        relationship_prefix: "rel-".to_string(),
        id_width: 1,
    };
    let import = GedcomImporter::new(config).unwrap().convert(FAMILY_GED).unwrap();
    assert_eq!(import.people[0].id, "person-1");
}

#[test]
fn test_no_individuals() {
    let result = GedcomImporter::default().convert("0 HEAD\n0 TRLR\n");
    assert!(matches!(result, Err(GedcomError::NoIndividuals)));
}

#[tokio::test]
async fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = GedcomImporter::default().import_file(dir.path().join("none.ged")).await;
    assert!(matches!(result, Err(GedcomError::Read { .. })));
}

#[tokio::test]
async fn test_written_documents_load() {
    let dir = TempDir::new().unwrap();
    let ged = dir.path().join("family.ged");
    tokio::fs::write(&ged, FAMILY_GED).await.unwrap();
    let out = dir.path().join("data");

    let import = GedcomImporter::default().import_file(&ged).await.unwrap();
    let written = import.write_to(&out).await.unwrap();
    assert_eq!(written.len(), 4);

    let sources = tokio::fs::read_to_string(out.join(SOURCES_FILE)).await.unwrap();
    let sources: serde_json::Value = serde_json::from_str(&sources).unwrap();
    assert_eq!(sources["sources"].as_array().map(Vec::len), Some(0));

    let mapping = tokio::fs::read_to_string(out.join(ID_MAPPING_FILE)).await.unwrap();
    let mapping: IdMapping = serde_json::from_str(&mapping).unwrap();
    assert_eq!(mapping, import.id_mapping);

    let store = lineage_store::load(&DataPaths::in_dir(&out)).await.unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.person("p001").unwrap().gender, Gender::Male);
    assert_eq!(store.person("p002").unwrap().display_name(), "Lois Jane Stokes");

    let (index, stats) = GraphBuilder::default().build_with_stats(store.people(), store.edges());
    // the edge to I99 references nobody
    assert_eq!(stats.dropped_edges, 1);
    assert_eq!(index.children("p001").len(), 2);
    assert_eq!(index.siblings("p003")[0].as_str(), "p004");
    assert_eq!(index.first_spouse("p002").map(|s| s.as_str()), Some("p001"));
}
