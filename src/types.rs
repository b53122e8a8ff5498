use serde::Deserialize;
use std::fmt;

use crate::category::ItemCategory;

/// One item row after normalization.
///
/// Numeric fields keep the text they were read as (or their documented text
/// default); the emitter turns them into typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub id: String,
    /// Display name after trademark substitution
    pub name: String,
    pub category: ItemCategory,
    pub tier: String,
    pub base_price: String,
    pub volume: String,
    pub mass: String,
    pub description: String,
}

/// How a source file is laid out. Declared per source in configuration,
/// never sniffed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Header-less rows whose meaning is inferred from column position
    Positional,
    /// First retained row names the columns
    Header,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Positional => f.write_str("positional"),
            SourceFormat::Header => f.write_str("header"),
        }
    }
}
