use std::collections::HashMap;
use tracing::debug;

use super::RecordParser;
use crate::category::classify;
use crate::constants::{DEFAULT_BASE_PRICE, DEFAULT_MASS, DEFAULT_TIER, DEFAULT_VOLUME};
use crate::sanitize::sanitize_name;
use crate::types::{NormalizedItem, SourceFormat};

// Column names recognised in header rows
const COL_ID: &str = "ID";
const COL_NAME: &str = "NAME";
const COL_TIER: &str = "TIER";
const COL_CATEGORY: &str = "CATEGORY";
const COL_DATABASE: &str = "DATABASE";
const COL_BASE_PRICE: &str = "BASE_PRICE";
const COL_VOLUME: &str = "VOLUME_M3";
const COL_MASS: &str = "MASS_KG";
const COL_INFO_TEXT: &str = "INFO_TEXT";

/// Parser for well-formed sheets whose first retained line names the columns.
#[derive(Debug, Default)]
pub struct HeaderParser;

impl HeaderParser {
    pub fn new() -> Self {
        Self
    }
}

/// Column name -> index for one sheet. A repeated name resolves to its last
/// occurrence.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn from_header(line: &str) -> Self {
        let index = split_fields(line)
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { index }
    }

    fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Trimmed value of `name` in `row`; `None` if the sheet has no such
    /// column or the row is too short to reach it.
    fn get<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.index
            .get(name)
            .and_then(|&i| row.get(i))
            .map(|v| v.trim())
    }
}

impl RecordParser for HeaderParser {
    fn format(&self) -> SourceFormat {
        SourceFormat::Header
    }

    fn parse(&self, content: &str) -> Vec<NormalizedItem> {
        debug!("HeaderParser: start bytes_len={}", content.len());
        let mut lines = content
            .lines()
            .filter(|l| !l.trim().is_empty() && !l.starts_with('#'));

        let Some(header) = lines.next() else {
            return Vec::new();
        };
        let columns = Columns::from_header(header);

        let items: Vec<NormalizedItem> = lines
            .filter_map(|line| normalize_row(&columns, &split_fields(line)))
            .collect();
        debug!("HeaderParser: extracted items count={}", items.len());
        items
    }
}

fn normalize_row(columns: &Columns, row: &[String]) -> Option<NormalizedItem> {
    let id = columns.get(row, COL_ID).unwrap_or("");
    let raw_name = columns.get(row, COL_NAME).unwrap_or("");
    if id.is_empty() || raw_name.is_empty() {
        return None;
    }

    // DATABASE only stands in when the sheet has no CATEGORY column at all
    let hint_column = if columns.has(COL_CATEGORY) {
        COL_CATEGORY
    } else {
        COL_DATABASE
    };
    let hint = columns.get(row, hint_column).unwrap_or("");

    let description = columns
        .get(row, COL_INFO_TEXT)
        .filter(|text| !text.is_empty())
        .unwrap_or(raw_name);

    Some(NormalizedItem {
        id: id.to_string(),
        name: sanitize_name(raw_name),
        category: classify(hint, id),
        tier: columns.get(row, COL_TIER).unwrap_or(DEFAULT_TIER).to_string(),
        base_price: columns
            .get(row, COL_BASE_PRICE)
            .unwrap_or(DEFAULT_BASE_PRICE)
            .to_string(),
        volume: columns.get(row, COL_VOLUME).unwrap_or(DEFAULT_VOLUME).to_string(),
        mass: columns.get(row, COL_MASS).unwrap_or(DEFAULT_MASS).to_string(),
        description: description.to_string(),
    })
}

/// Split a tab-delimited line. A field that opens with a double quote runs
/// to the matching close quote (tabs included) and `""` inside it is a
/// literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '\t' {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
            continue;
        } else if c == '"' && at_field_start {
            in_quotes = true;
        } else {
            field.push(c);
        }
        at_field_start = false;
    }
    fields.push(field);
    fields
}
