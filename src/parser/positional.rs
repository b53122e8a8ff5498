use tracing::debug;

use super::RecordParser;
use crate::category::classify;
use crate::constants::{
    DEFAULT_BASE_PRICE, DEFAULT_MASS, DEFAULT_VOLUME, POSITIONAL_HEADER_MARKER, PRICE_CEILING,
};
use crate::numeric::{format_float, parse_number};
use crate::sanitize::sanitize_name;
use crate::types::{NormalizedItem, SourceFormat};

/// Column layout of the header-less database sheet. If the upstream sheet
/// changes shape, this table is the only thing that should move.
mod columns {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const TIER: usize = 2;
    pub const MASS: usize = 3;
    pub const VOLUME: usize = 4;
    pub const BASE_PRICE: usize = 6;

    /// Rows with fewer fields carry no usable item.
    pub const MIN_FIELDS: usize = 3;
}

/// Parser for the monolithic sheet whose columns have no names.
///
/// Meaning is assigned by position and sanity-checked where the sheet is
/// known to be unreliable (the price column).
#[derive(Debug, Default)]
pub struct PositionalParser;

impl PositionalParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(&self, line: &str) -> Option<NormalizedItem> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(POSITIONAL_HEADER_MARKER) {
            return None;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < columns::MIN_FIELDS {
            return None;
        }

        let id = fields[columns::ID].trim();
        let raw_name = fields[columns::NAME].trim();
        let name = sanitize_name(raw_name);
        if id.is_empty() || name.is_empty() {
            return None;
        }

        // Column 6 is only sometimes a price; keep it when it looks like one
        let base_price = fields
            .get(columns::BASE_PRICE)
            .map(|v| v.trim())
            .filter(|v| parse_number(v).is_some_and(|p| p > 0.0 && p < PRICE_CEILING))
            .unwrap_or(DEFAULT_BASE_PRICE)
            .to_string();

        let mass = float_column(&fields, columns::MASS).unwrap_or_else(|| DEFAULT_MASS.to_string());
        let volume =
            float_column(&fields, columns::VOLUME).unwrap_or_else(|| DEFAULT_VOLUME.to_string());

        Some(NormalizedItem {
            id: id.to_string(),
            name,
            category: classify("", id),
            tier: fields[columns::TIER].trim().to_string(),
            base_price,
            volume,
            mass,
            description: raw_name.to_string(),
        })
    }
}

fn float_column(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .and_then(|v| parse_number(v))
        .map(format_float)
}

impl RecordParser for PositionalParser {
    fn format(&self) -> SourceFormat {
        SourceFormat::Positional
    }

    fn parse(&self, content: &str) -> Vec<NormalizedItem> {
        debug!("PositionalParser: start bytes_len={}", content.len());
        let items: Vec<NormalizedItem> = content.lines().filter_map(|l| self.parse_line(l)).collect();
        debug!("PositionalParser: extracted items count={}", items.len());
        items
    }
}
