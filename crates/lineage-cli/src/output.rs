//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lineage_browser::{PersonSummary, Profile};
use lineage_domain::{Person, PersonId, PersonLookup, VitalRecord};
use lineage_gedcom::ImportStats;
use lineage_layout::{BranchGroup, TreeNode};
use serde_json::{json, Value};
use std::path::PathBuf;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a laid-out tree.
    pub fn format_tree<L: PersonLookup + ?Sized>(&self, tree: &TreeNode, people: &L) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&tree_json(tree, people))?),
            OutputFormat::Table => Ok(self.format_tree_text(tree, people)),
            OutputFormat::Quiet => Ok(tree_ids(tree).join("\n")),
        }
    }

    /// Indented text rendering: ancestors top-down, root couple, descendant branches.
    fn format_tree_text<L: PersonLookup + ?Sized>(&self, tree: &TreeNode, people: &L) -> String {
        let mut lines = Vec::new();

        for generation in &tree.ancestors {
            lines.push(self.colorize(&format!("{}:", generation_label(generation.depth)), "blue"));
            for couple in &generation.couples {
                lines.push(format!("  {}", couple_label(&couple.members, people)));
            }
        }

        lines.push(self.colorize("Root:", "blue"));
        let root_couple = couple_label(&tree.root_couple().members, people);
        lines.push(format!("  {}", self.colorize(&format!("★ {}", root_couple), "cyan")));

        if let Some(group) = &tree.descendants {
            lines.push(self.colorize("Descendants:", "blue"));
            render_branches(group, "  ", people, &mut lines);
        }

        lines.join("\n")
    }

    /// Format a directory listing or search results.
    pub fn format_people(&self, people: &[&Person]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_people: Vec<Value> = people
                    .iter()
                    .map(|p| {
                        json!({
                            "id": p.id.as_str(),
                            "name": p.display_name(),
                            "gender": p.gender.as_str(),
                            "birth": vital_json(&p.birth),
                            "death": vital_json(&p.death),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_people)?)
            }
            OutputFormat::Table => {
                if people.is_empty() {
                    return Ok(self.colorize("No people found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Born", "Died", "Birthplace"]);
                for person in people {
                    builder.push_record([
                        person.id.to_string(),
                        person.display_name(),
                        person.birth.date.clone().unwrap_or_default(),
                        person.death.date.clone().unwrap_or_default(),
                        person.birth.place.clone().unwrap_or_default(),
                    ]);
                }
                Ok(styled_table(builder))
            }
            OutputFormat::Quiet => Ok(people
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a profile.
    pub fn format_profile(&self, profile: &Profile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&profile_json(profile))?),
            OutputFormat::Table => Ok(self.format_profile_text(profile)),
            OutputFormat::Quiet => Ok(profile.id.to_string()),
        }
    }

    fn format_profile_text(&self, profile: &Profile) -> String {
        let mut sections = vec![self.colorize(&profile.name, "cyan")];

        let mut vitals = Builder::default();
        vitals.push_record(["ID".to_string(), profile.id.to_string()]);
        vitals.push_record([
            "Gender".to_string(),
            profile.gender.as_str().unwrap_or("unknown").to_string(),
        ]);
        vitals.push_record(["Born".to_string(), vital_text(&profile.birth)]);
        vitals.push_record(["Died".to_string(), vital_text(&profile.death)]);
        if let Some(photo) = &profile.photo {
            vitals.push_record(["Photo".to_string(), photo.clone()]);
        }
        let mut vitals = vitals.build();
        vitals.with(Style::rounded());
        sections.push(vitals.to_string());

        for (title, list) in [("Parents", &profile.parents), ("Children", &profile.children), ("Siblings", &profile.siblings)] {
            if !list.is_empty() {
                let mut lines = vec![self.colorize(&format!("{}:", title), "blue")];
                lines.extend(list.iter().map(|p| format!("  - {}", summary_label(p))));
                sections.push(lines.join("\n"));
            }
        }

        if !profile.spouses.is_empty() {
            let mut lines = vec![self.colorize("Spouses:", "blue")];
            for spouse in &profile.spouses {
                let mut line = format!("  - {}", summary_label(&spouse.person));
                let married = VitalRecord {
                    date: spouse.marriage_date.clone(),
                    place: spouse.marriage_place.clone(),
                };
                if married.is_recorded() {
                    line.push_str(&format!(", married {}", vital_text(&married)));
                }
                if let Some(divorced) = &spouse.divorce_date {
                    line.push_str(&format!(", divorced {}", divorced));
                }
                lines.push(line);
            }
            sections.push(lines.join("\n"));
        }

        if !profile.timeline.is_empty() {
            let mut timeline = Builder::default();
            timeline.push_record(["Date", "Event"]);
            for event in &profile.timeline {
                timeline.push_record([event.date.clone(), event.description.clone()]);
            }
            sections.push(format!("{}\n{}", self.colorize("Timeline:", "blue"), styled_table(timeline)));
        }

        if let Some(notes) = &profile.notes {
            sections.push(format!("{}\n  {}", self.colorize("Notes:", "blue"), notes));
        }

        if !profile.sources.is_empty() {
            let mut sources = Builder::default();
            sources.push_record(["ID", "Title", "Type", "Date"]);
            for source in &profile.sources {
                sources.push_record([
                    source.id.clone(),
                    source.title.clone().unwrap_or_default(),
                    source.kind.clone().unwrap_or_default(),
                    source.date.clone().unwrap_or_default(),
                ]);
            }
            sections.push(format!("{}\n{}", self.colorize("Sources:", "blue"), styled_table(sources)));
        }

        sections.join("\n\n")
    }

    /// Format GEDCOM import results.
    pub fn format_import(&self, stats: &ImportStats, written: &[PathBuf]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "individuals": stats.individuals,
                    "families": stats.families,
                    "sources": stats.sources,
                    "relationships": {
                        "spouse": stats.spouse_relationships,
                        "parentChild": stats.parent_child_relationships,
                    },
                    "gender": {
                        "male": stats.males,
                        "female": stats.females,
                        "unknown": stats.unknown_gender,
                    },
                    "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                for (label, count) in [
                    ("People", stats.individuals),
                    ("Families", stats.families),
                    ("Spouse relationships", stats.spouse_relationships),
                    ("Parent-child relationships", stats.parent_child_relationships),
                    ("Males", stats.males),
                    ("Females", stats.females),
                    ("Unknown gender", stats.unknown_gender),
                ] {
                    builder.push_record([label.to_string(), count.to_string()]);
                }
                let mut lines = vec![styled_table(builder)];
                lines.extend(written.iter().map(|p| self.success(&format!("Wrote {}", p.display()))));
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled_table(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// "Parents", "Grandparents", "Great-grandparents", "Great-great-grandparents", ...
fn generation_label(depth: usize) -> String {
    match depth {
        0 | 1 => "Parents".to_string(),
        2 => "Grandparents".to_string(),
        n => format!("{}grandparents", "Great-".repeat(n - 2)),
    }
}

/// Person card text: `Name (lifespan) [id]`
fn card<L: PersonLookup + ?Sized>(id: &PersonId, people: &L) -> String {
    match people.person(id.as_str()) {
        Some(person) => match person.lifespan() {
            Some(lifespan) => format!("{} ({}) [{}]", person.display_name(), lifespan, id),
            None => format!("{} [{}]", person.display_name(), id),
        },
        None => format!("[{}]", id),
    }
}

fn couple_label<L: PersonLookup + ?Sized>(members: &[PersonId], people: &L) -> String {
    members
        .iter()
        .map(|m| card(m, people))
        .collect::<Vec<_>>()
        .join(" & ")
}

fn render_branches<L: PersonLookup + ?Sized>(
    group: &BranchGroup,
    prefix: &str,
    people: &L,
    lines: &mut Vec<String>,
) {
    let count = group.branches.len();
    for (i, branch) in group.branches.iter().enumerate() {
        let last = i + 1 == count;
        let mut members = vec![branch.person.clone()];
        members.extend(branch.spouse.iter().cloned());

        lines.push(format!(
            "{}{}{}",
            prefix,
            if last { "└─ " } else { "├─ " },
            couple_label(&members, people)
        ));

        if let Some(nested) = &branch.descendants {
            let child_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
            render_branches(nested, &child_prefix, people, lines);
        }
    }
}

fn summary_label(summary: &PersonSummary) -> String {
    match &summary.lifespan {
        Some(lifespan) => format!("{} ({}) [{}]", summary.name, lifespan, summary.id),
        None => format!("{} [{}]", summary.name, summary.id),
    }
}

fn vital_text(record: &VitalRecord) -> String {
    match (record.date.as_deref(), record.place.as_deref()) {
        (Some(date), Some(place)) => format!("{} in {}", date, place),
        (Some(date), None) => date.to_string(),
        (None, Some(place)) => format!("in {}", place),
        (None, None) => String::new(),
    }
}

fn vital_json(record: &VitalRecord) -> Value {
    json!({ "date": record.date, "place": record.place })
}

fn person_json<L: PersonLookup + ?Sized>(id: &PersonId, people: &L) -> Value {
    let person = people.person(id.as_str());
    json!({
        "id": id.as_str(),
        "name": people.display_name(id),
        "lifespan": person.and_then(Person::lifespan),
    })
}

fn summary_json(summary: &PersonSummary) -> Value {
    json!({
        "id": summary.id.as_str(),
        "name": summary.name,
        "lifespan": summary.lifespan,
    })
}

fn branches_json<L: PersonLookup + ?Sized>(group: &BranchGroup, people: &L) -> Value {
    let branches: Vec<Value> = group
        .branches
        .iter()
        .map(|b| {
            json!({
                "person": person_json(&b.person, people),
                "spouse": b.spouse.as_ref().map(|s| person_json(s, people)),
                "descendants": b.descendants.as_ref().map(|d| branches_json(d, people)),
            })
        })
        .collect();
    json!({ "multiple": group.multiple, "branches": branches })
}

fn tree_json<L: PersonLookup + ?Sized>(tree: &TreeNode, people: &L) -> Value {
    let ancestors: Vec<Value> = tree
        .ancestors
        .iter()
        .map(|g| {
            let couples: Vec<Vec<Value>> = g
                .couples
                .iter()
                .map(|c| c.members.iter().map(|m| person_json(m, people)).collect())
                .collect();
            json!({ "depth": g.depth, "couples": couples })
        })
        .collect();

    json!({
        "root": person_json(&tree.root, people),
        "coRoot": tree.co_root.as_ref().map(|c| person_json(c, people)),
        "ancestors": ancestors,
        "descendants": tree.descendants.as_ref().map(|d| branches_json(d, people)),
    })
}

/// Every id in the tree, top to bottom
fn tree_ids(tree: &TreeNode) -> Vec<String> {
    fn collect(group: &BranchGroup, out: &mut Vec<String>) {
        for branch in &group.branches {
            out.push(branch.person.to_string());
            out.extend(branch.spouse.iter().map(|s| s.to_string()));
            if let Some(nested) = &branch.descendants {
                collect(nested, out);
            }
        }
    }

    let mut ids: Vec<String> = tree
        .ancestors
        .iter()
        .flat_map(|g| g.couples.iter())
        .flat_map(|c| c.members.iter().map(|m| m.to_string()))
        .collect();
    ids.extend(tree.root_couple().members.iter().map(|m| m.to_string()));
    if let Some(group) = &tree.descendants {
        collect(group, &mut ids);
    }
    ids
}

fn profile_json(profile: &Profile) -> Value {
    json!({
        "id": profile.id.as_str(),
        "name": profile.name,
        "gender": profile.gender.as_str(),
        "birth": vital_json(&profile.birth),
        "death": vital_json(&profile.death),
        "lifespan": profile.lifespan,
        "photo": profile.photo,
        "parents": profile.parents.iter().map(summary_json).collect::<Vec<_>>(),
        "spouses": profile.spouses.iter().map(|s| json!({
            "person": summary_json(&s.person),
            "marriageDate": s.marriage_date,
            "marriagePlace": s.marriage_place,
            "divorceDate": s.divorce_date,
        })).collect::<Vec<_>>(),
        "children": profile.children.iter().map(summary_json).collect::<Vec<_>>(),
        "siblings": profile.siblings.iter().map(summary_json).collect::<Vec<_>>(),
        "timeline": profile.timeline.iter().map(|e| json!({
            "kind": e.kind.label(),
            "date": e.date,
            "description": e.description,
        })).collect::<Vec<_>>(),
        "notes": profile.notes,
        "sources": profile.sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_browser::{BrowserConfig, FamilyBrowser};
    use lineage_store::EntityStore;

    fn browser() -> FamilyBrowser {
        let store = EntityStore::from_json_strs(
            r#"{"people": [
                {"id": "p001", "firstName": "Joseph", "lastName": "Sprys",
                 "birth": {"date": "1892", "place": "Krakow"}, "death": {"date": "1967"}},
                {"id": "p002", "firstName": "Lois", "lastName": "Sprys", "maidenName": "Stokes"},
                {"id": "p003", "firstName": "Mary", "lastName": "Sprys"},
                {"id": "p004", "firstName": "Ann", "lastName": "Sprys"},
                {"id": "p005", "firstName": "Walter", "lastName": "Sprys"}
            ]}"#,
            r#"{"relationships": [
                {"type": "spouse", "person1": "p001", "person2": "p002", "marriageDate": "1915"},
                {"type": "parent-child", "parent": "p001", "child": "p003"},
                {"type": "parent-child", "parent": "p001", "child": "p004"},
                {"type": "parent-child", "parent": "p003", "child": "p005"}
            ]}"#,
            Some(r#"{"sources": [{"id": "s1", "title": "Census", "people": ["p001"]}]}"#),
        )
        .unwrap();
        FamilyBrowser::new(store, &BrowserConfig::default()).unwrap()
    }

    #[test]
    fn test_tree_text() {
        let browser = browser();
        let tree = browser.tree().unwrap();
        let output = Formatter::new(OutputFormat::Table, false)
            .format_tree(&tree, browser.store())
            .unwrap();

        assert!(output.contains("★ Joseph Sprys (1892 – 1967) [p001] & Lois Sprys (née Stokes) [p002]"));
        assert!(output.contains("  ├─ Mary Sprys [p003]"));
        assert!(output.contains("  │  └─ Walter Sprys [p005]"));
        assert!(output.contains("  └─ Ann Sprys [p004]"));
        assert!(!output.contains("Parents:"));
    }

    #[test]
    fn test_tree_json() {
        let browser = browser();
        let tree = browser.tree().unwrap();
        let output = Formatter::new(OutputFormat::Json, false)
            .format_tree(&tree, browser.store())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["root"]["id"], "p001");
        assert_eq!(value["coRoot"]["name"], "Lois Sprys (née Stokes)");
        assert_eq!(value["descendants"]["multiple"], true);
        assert_eq!(value["descendants"]["branches"][0]["descendants"]["branches"][0]["person"]["id"], "p005");
    }

    #[test]
    fn test_tree_quiet() {
        let browser = browser();
        let tree = browser.tree().unwrap();
        let output = Formatter::new(OutputFormat::Quiet, false)
            .format_tree(&tree, browser.store())
            .unwrap();
        assert_eq!(output, "p001\np002\np003\np005\np004");
    }

    #[test]
    fn test_people_table_and_empty() {
        let browser = browser();
        let people: Vec<&Person> = browser.store().people().iter().collect();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let output = formatter.format_people(&people).unwrap();
        assert!(output.contains("Birthplace"));
        assert!(output.contains("Krakow"));

        assert!(formatter.format_people(&[]).unwrap().contains("No people found"));
    }

    #[test]
    fn test_profile_text() {
        let browser = browser();
        let profile = browser.profile("p001").unwrap();
        let output = Formatter::new(OutputFormat::Table, false)
            .format_profile(&profile)
            .unwrap();

        assert!(output.starts_with("Joseph Sprys"));
        assert!(output.contains("1892 in Krakow"));
        assert!(output.contains("  - Lois Sprys (née Stokes) [p002], married 1915"));
        assert!(output.contains("Children:"));
        assert!(output.contains("Married Lois Sprys (née Stokes)"));
        assert!(output.contains("Census"));
    }

    #[test]
    fn test_profile_json() {
        let browser = browser();
        let profile = browser.profile("p003").unwrap();
        let output = Formatter::new(OutputFormat::Json, false)
            .format_profile(&profile)
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["parents"][0]["id"], "p001");
        assert_eq!(value["siblings"][0]["name"], "Ann Sprys");
        assert_eq!(value["children"][0]["id"], "p005");
    }

    #[test]
    fn test_import_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_import(&ImportStats::default(), &[PathBuf::from("data/people.json")])
            .unwrap();
        assert_eq!(output, "data/people.json");
    }

    #[test]
    fn test_generation_labels() {
        assert_eq!(generation_label(1), "Parents");
        assert_eq!(generation_label(2), "Grandparents");
        assert_eq!(generation_label(4), "Great-Great-grandparents");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
