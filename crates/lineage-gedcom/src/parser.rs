//! GEDCOM line parser and record tree

use tracing::debug;

/// One `LEVEL [@XREF@] TAG [VALUE]` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Nesting level, 0 for top-level records
    pub level: usize,
    /// Cross-reference id including the `@` delimiters
    pub xref: Option<&'a str>,
    /// Tag such as `INDI`, `NAME` or `DATE`
    pub tag: &'a str,
    /// Rest of the line, possibly empty
    pub value: &'a str,
}

/// Parse a single line, returning `None` for blank or malformed input
pub fn parse_line(line: &str) -> Option<Line<'_>> {
    let line = line.trim_start_matches('\u{feff}').trim();
    let (level, rest) = split_token(line)?;
    let level = level.parse::<usize>().ok()?;

    let (mut tag, mut rest) = split_token(rest)?;
    let mut xref = None;
    if tag.len() > 2 && tag.starts_with('@') && tag.ends_with('@') {
        xref = Some(tag);
        (tag, rest) = split_token(rest)?;
    }

    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    Some(Line {
        level,
        xref,
        tag,
        value: rest,
    })
}

fn split_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest.trim())),
        None => Some((text, "")),
    }
}

/// A tagged value with its nested sub-fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Tag of this field
    pub tag: String,
    /// Value as written
    pub value: String,
    /// Nested fields in file order
    pub children: Vec<Field>,
}

impl Field {
    /// First direct child with this tag
    pub fn child(&self, tag: &str) -> Option<&Field> {
        self.children.iter().find(|f| f.tag == tag)
    }

    /// All direct children with this tag
    pub fn children_with<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.children.iter().filter(move |f| f.tag == tag)
    }

    /// Value of the first direct child with this tag, when not blank
    pub fn child_value(&self, tag: &str) -> Option<&str> {
        self.child(tag).map(|f| f.value.as_str()).filter(|v| !v.is_empty())
    }

    /// Value with `CONC` and `CONT` continuation lines folded in
    ///
    /// `CONC` joins directly, `CONT` joins with a space.
    pub fn text(&self) -> String {
        let mut text = self.value.clone();
        for part in &self.children {
            match part.tag.as_str() {
                "CONC" => text.push_str(&part.value),
                "CONT" => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&part.value);
                }
                _ => {}
            }
        }
        text
    }
}

/// A top-level record: `INDI`, `FAM`, `SOUR`, `HEAD`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Cross-reference id without the `@` delimiters, empty for `HEAD`/`TRLR`
    pub xref: String,
    /// Record tag and its nested fields
    pub root: Field,
}

impl Record {
    /// Record tag
    pub fn tag(&self) -> &str {
        &self.root.tag
    }
}

/// Parse GEDCOM text into top-level records in file order
///
/// Malformed lines are skipped. A line whose level jumps more than one deeper
/// than its predecessor is attached to the deepest open field.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut records: Vec<Record> = Vec::new();
    // open[i] is the field at level i + 1 currently accepting children
    let mut open: Vec<Field> = Vec::new();
    let mut current: Option<Record> = None;
    let mut skipped = 0usize;

    for raw in text.lines() {
        let Some(line) = parse_line(raw) else {
            if !raw.trim().is_empty() {
                skipped += 1;
            }
            continue;
        };

        if line.level == 0 {
            close_fields(&mut open, 0, current.as_mut());
            records.extend(current.take());
            current = Some(Record {
                xref: line.xref.map(|x| x.trim_matches('@').to_string()).unwrap_or_default(),
                root: Field {
                    tag: line.tag.to_string(),
                    value: line.value.to_string(),
                    children: Vec::new(),
                },
            });
            continue;
        }

        if current.is_none() {
            skipped += 1;
            continue;
        }

        let depth = line.level.min(open.len() + 1);
        close_fields(&mut open, depth - 1, current.as_mut());
        open.push(Field {
            tag: line.tag.to_string(),
            value: line.value.to_string(),
            children: Vec::new(),
        });
    }

    close_fields(&mut open, 0, current.as_mut());
    records.extend(current);

    if skipped > 0 {
        debug!("Skipped {} malformed GEDCOM lines", skipped);
    }
    records
}

/// Pop open fields until `keep` remain, attaching each to its parent
fn close_fields(open: &mut Vec<Field>, keep: usize, mut record: Option<&mut Record>) {
    while open.len() > keep {
        let Some(field) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.children.push(field),
            None => {
                if let Some(record) = record.as_deref_mut() {
                    record.root.children.push(field);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let line = parse_line("0 @I1@ INDI").unwrap();
        assert_eq!(line.level, 0);
        assert_eq!(line.xref, Some("@I1@"));
        assert_eq!(line.tag, "INDI");
        assert_eq!(line.value, "");

        let line = parse_line("1 NAME Joseph Walter /Sprys/").unwrap();
        assert_eq!(line.level, 1);
        assert_eq!(line.xref, None);
        assert_eq!(line.value, "Joseph Walter /Sprys/");

        let line = parse_line("\u{feff}0 HEAD").unwrap();
        assert_eq!(line.tag, "HEAD");
    }

    #[test]
    fn test_malformed_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("NAME Joseph").is_none());
        assert!(parse_line("1").is_none());
        assert!(parse_line("1 NA-ME x").is_none());
    }

    #[test]
    fn test_record_tree() {
        let text = "0 HEAD\n\
                    1 CHAR UTF-8\n\
                    0 @I1@ INDI\n\
                    1 NAME Joseph /Sprys/\n\
                    2 GIVN Joseph Walter\n\
                    1 BIRT\n\
                    2 DATE 15 MAR 1892\n\
                    2 PLAC Krakow\n\
                    garbage line\n\
                    1 SEX M\n\
                    0 TRLR\n";
        let records = parse_records(text);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].tag(), "HEAD");
        assert_eq!(records[0].xref, "");

        let indi = &records[1].root;
        assert_eq!(records[1].xref, "I1");
        assert_eq!(indi.children.len(), 3);
        assert_eq!(indi.child("NAME").unwrap().child_value("GIVN"), Some("Joseph Walter"));
        let birth = indi.child("BIRT").unwrap();
        assert_eq!(birth.child_value("DATE"), Some("15 MAR 1892"));
        assert_eq!(birth.child_value("PLAC"), Some("Krakow"));
        assert_eq!(indi.child_value("SEX"), Some("M"));
    }

    #[test]
    fn test_level_jump_attaches_to_deepest() {
        let records = parse_records("0 @F1@ FAM\n1 MARR\n3 DATE 1915\n1 HUSB @I1@\n");
        let fam = &records[0].root;
        assert_eq!(fam.child("MARR").unwrap().child_value("DATE"), Some("1915"));
        assert_eq!(fam.child_value("HUSB"), Some("@I1@"));
    }

    #[test]
    fn test_continuation_text() {
        let records = parse_records("0 @I1@ INDI\n1 NOTE Worked as a carp\n2 CONC enter\n2 CONT in Detroit\n");
        let note = records[0].root.child("NOTE").unwrap();
        assert_eq!(note.text(), "Worked as a carpenter in Detroit");
    }

    #[test]
    fn test_lines_before_first_record_are_skipped() {
        let records = parse_records("1 NAME orphan\n0 @I1@ INDI\n");
        assert_eq!(records.len(), 1);
        assert!(records[0].root.children.is_empty());
    }
}
