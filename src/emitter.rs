//! Renders normalized items as a GDScript item database.
//!
//! Output depends only on the item sequence: no timestamps, no hashing order.
//! Items are registered in input order; a repeated id simply re-registers the
//! key, so the last one wins once the script runs.

use crate::category::ItemCategory;
use crate::constants::{FALLBACK_BASE_PRICE, FALLBACK_MASS, FALLBACK_TIER, FALLBACK_VOLUME};
use crate::numeric::{format_float, parse_number};
use crate::types::NormalizedItem;

/// Declared in the taxonomy but never produced by the classifier.
pub const RESERVED_CATEGORIES: &[&str] = &["CARGO", "PASSENGER", "MANUFACTURING"];

const RULE: &str =
    "# ============================================================================";

const FOOTER: &str = r#"
    print("ItemDatabase initialized with ", item_registry.size(), " items")

func get_item(item_id: String) -> ItemData:
    return item_registry.get(item_id, null)

func get_all_items() -> Array:
    return item_registry.values()

func get_items_by_category(category: ItemCategory) -> Array:
    var result = []
    for item in item_registry.values():
        if item.category == category:
            result.append(item)
    return result

func get_market_price(item_id: String) -> int:
    var item = get_item(item_id)
    return item.base_price if item else 0
"#;

/// Render the complete registry script for `items`.
pub fn render_registry(items: &[NormalizedItem]) -> String {
    let mut out = render_header(items.len());
    for item in items {
        out.push_str(&render_item(item));
    }
    out.push_str(FOOTER);
    out
}

fn render_header(total: usize) -> String {
    let taxonomy: Vec<&str> = ItemCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .chain(RESERVED_CATEGORIES.iter().copied())
        .collect();
    let taxonomy = taxonomy
        .chunks(8)
        .map(|chunk| format!("    {}", chunk.join(", ")))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"{rule}
# ITEMDATABASE.GD - UNIFIED ITEM DATABASE
{rule}
# Auto-generated from tab-delimited item sheets
# Trademarked names replaced
#
# TOTAL ITEMS: {total}
{rule}

extends Node

enum ItemCategory {{
{taxonomy}
}}

enum ItemRarity {{
    COMMON, UNCOMMON, RARE, EPIC, LEGENDARY
}}

class ItemData:
    var id: String
    var name: String
    var category: ItemCategory
    var tier: int
    var base_price: int
    var volume: float
    var mass: float
    var description: String

var item_registry: Dictionary = {{}}

func _ready():
    _initialize_items()

func _initialize_items():
"#,
        rule = RULE,
        total = total,
        taxonomy = taxonomy,
    )
}

fn render_item(item: &NormalizedItem) -> String {
    let key = format!("item_registry[\"{}\"]", escape(&item.id));
    let comment_name: String = item
        .name
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    format!(
        r#"
    # {id_comment} - {comment_name}
    {key} = ItemData.new()
    {key}.id = "{id}"
    {key}.name = "{name}"
    {key}.category = ItemCategory.{category}
    {key}.tier = {tier}
    {key}.base_price = {base_price}
    {key}.volume = {volume}
    {key}.mass = {mass}
    {key}.description = "{description}"
"#,
        id_comment = item.id.replace(|c: char| c.is_control(), " "),
        comment_name = comment_name,
        key = key,
        id = escape(&item.id),
        name = escape(&item.name),
        category = item.category.as_str(),
        tier = tier_value(&item.tier),
        base_price = price_value(&item.base_price),
        volume = format_float(measure_value(&item.volume, FALLBACK_VOLUME)),
        mass = format_float(measure_value(&item.mass, FALLBACK_MASS)),
        description = escape(&item.description),
    )
}

/// Tier as an integer >= 1. Integral float text ("2.0") is accepted.
pub fn tier_value(text: &str) -> i64 {
    let tier = match text.trim().parse::<i64>() {
        Ok(t) => Some(t),
        Err(_) => parse_number(text)
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64),
    };
    tier.filter(|t| *t >= 1).unwrap_or(FALLBACK_TIER)
}

/// Price as a non-negative integer, rounded to the nearest unit.
pub fn price_value(text: &str) -> i64 {
    parse_number(text)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as i64)
        .unwrap_or(FALLBACK_BASE_PRICE)
}

/// Volume or mass as a non-negative finite float.
pub fn measure_value(text: &str, fallback: f64) -> f64 {
    parse_number(text)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(fallback)
}

/// Escape text for a double-quoted string literal.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
